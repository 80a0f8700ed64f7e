pub(crate) mod add_game;
pub(crate) mod log_play;
pub(crate) mod report;

use std::io::{self, Write};

use crate::cli_types::DEFAULT_DB_PATH;

/// Print the version banner and the supported commands.
///
/// Written straight to `out` rather than through the logger so `--quiet`
/// cannot hide it.
pub(crate) fn run_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "gamelog v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Supported commands:")?;
    writeln!(out, "- add-game <name> --alias <string>")?;
    writeln!(out, "- log <name-or-alias> --games <int>")?;
    writeln!(out, "- report")?;
    writeln!(out)?;
    writeln!(out, "Global options:")?;
    writeln!(out, "  --path <file>  Database file (default: {})", DEFAULT_DB_PATH)?;
    writeln!(out, "  --verbose      Debug output with timestamps")?;
    writeln!(out, "  --quiet        Only warnings and errors")?;
    out.flush()
}

/// Report a command that is not one of ours.
pub(crate) fn run_unrecognised<W: Write>(out: &mut W, args: &[String]) -> io::Result<()> {
    let cmd = args.first().map(String::as_str).unwrap_or_default();
    writeln!(out, "Command not recognised: {}", cmd)?;
    out.flush()
}
