//! Domain types and report rendering for gamelog.
//!
//! Nothing in this crate touches storage: the database crate produces
//! [`ReportRow`]s and this crate lays them out as an aligned text table.

pub mod report;
pub mod types;

pub use report::{ColumnWidths, PlayReport, COUNT_WIDTH};
pub use types::{Game, PlaySession, ReportRow};
