//! Logger setup.
//!
//! All user-facing messages go through the `log` macros. Info lines are
//! printed as-is; warnings and errors get a coloured prefix.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Level filter for the `--verbose` / `--quiet` flags. Verbose wins.
pub(crate) fn level_filter(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Plain-text prefix for a log level, if it gets one.
pub(crate) fn level_prefix(level: Level) -> Option<&'static str> {
    match level {
        Level::Error => Some("error:"),
        Level::Warn => Some("warning:"),
        Level::Debug | Level::Trace => Some("debug:"),
        Level::Info => None,
    }
}

/// Install the global logger. Call once, before any output.
pub(crate) fn init(verbose: bool, quiet: bool) {
    env_logger::Builder::new()
        .filter_level(level_filter(verbose, quiet))
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            if verbose {
                let now = chrono::Local::now().format("%H:%M:%S%.3f");
                write!(buf, "{} ", now.if_supports_color(Stdout, |t| t.dimmed()))?;
            }
            if let Some(prefix) = level_prefix(record.level()) {
                match record.level() {
                    Level::Error => write!(buf, "{} ", prefix.if_supports_color(Stdout, |t| t.red()))?,
                    Level::Warn => {
                        write!(buf, "{} ", prefix.if_supports_color(Stdout, |t| t.yellow()))?
                    }
                    _ => write!(buf, "{} ", prefix.if_supports_color(Stdout, |t| t.dimmed()))?,
                }
            }
            writeln!(buf, "{}", record.args())
        })
        .init();
}
