use std::io::Write;

use gamelog_core::PlayReport;
use rusqlite::Connection;

use crate::CliError;

/// Query play statistics and write the report table to `out`.
///
/// Nothing is written if the query fails.
pub(crate) fn run_report<W: Write>(conn: &Connection, out: &mut W) -> Result<(), CliError> {
    let rows = gamelog_db::play_report(conn)
        .map_err(|e| CliError::database(format!("Failed to query play report: {}", e)))?;

    let report = PlayReport::new(rows);
    if report.is_empty() {
        log::debug!("No games recorded yet");
    }
    let widths = report.widths();
    log::debug!(
        "Report has {} rows (name width {}, alias width {})",
        report.rows().len(),
        widths.name,
        widths.alias,
    );

    report.write_to(out)?;
    out.flush()?;
    Ok(())
}
