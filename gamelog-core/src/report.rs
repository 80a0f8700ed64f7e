//! Play report layout and rendering.
//!
//! Turns already-aggregated [`ReportRow`]s into a fixed-format text table:
//!
//! ```text
//! -----------------------------
//! Name  | Alias | Plays | Games
//! -----------------------------
//! Chess |       |     3 |     4
//! Go    | go    |     0 |     0
//! -----------------------------
//! ```

use std::fmt;
use std::io;

use crate::types::ReportRow;

const NAME_HEADER: &str = "Name";
const ALIAS_HEADER: &str = "Alias";

/// Display width of the right-aligned `Plays` and `Games` columns.
pub const COUNT_WIDTH: usize = 5;

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

/// Widths of the variable-width text columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub name: usize,
    pub alias: usize,
}

impl ColumnWidths {
    /// Measure the widest name and alias, never narrower than the headers.
    ///
    /// Widths are counted in chars, which is what `{:<width$}` pads by.
    pub fn measure(rows: &[ReportRow]) -> Self {
        let name = rows
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(NAME_HEADER.len());
        let alias = rows
            .iter()
            .map(|r| r.alias.chars().count())
            .max()
            .unwrap_or(0)
            .max(ALIAS_HEADER.len());
        Self { name, alias }
    }

    /// Total width of the horizontal rules.
    ///
    /// Equals the length of every header and body line: the two text columns
    /// plus three `" | "` separators plus two count columns.
    pub fn table_width(&self) -> usize {
        self.name + 2 + self.alias + 3 + 8 + 6
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// A play report ready for display.
#[derive(Debug, Clone)]
pub struct PlayReport {
    rows: Vec<ReportRow>,
    widths: ColumnWidths,
}

impl PlayReport {
    /// Build a report from rows in display order.
    pub fn new(rows: Vec<ReportRow>) -> Self {
        let widths = ColumnWidths::measure(&rows);
        Self { rows, widths }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn widths(&self) -> ColumnWidths {
        self.widths
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the rendered table to `out`.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    fn write_rule(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "-".repeat(self.widths.table_width()))
    }
}

impl fmt::Display for PlayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nw = self.widths.name;
        let aw = self.widths.alias;

        self.write_rule(f)?;
        writeln!(
            f,
            "{:<nw$} | {:<aw$} | {:>cw$} | {:>cw$}",
            NAME_HEADER,
            ALIAS_HEADER,
            "Plays",
            "Games",
            cw = COUNT_WIDTH,
        )?;
        self.write_rule(f)?;

        for row in &self.rows {
            writeln!(
                f,
                "{:<nw$} | {:<aw$} | {:>cw$} | {:>cw$}",
                row.name,
                row.alias,
                row.plays,
                row.games_or_zero(),
                cw = COUNT_WIDTH,
            )?;
        }

        self.write_rule(f)
    }
}
