//! Shared types for the listgraph library.

pub mod error;

pub use error::{LgResult, ListGraphError};

/// Width of the rule line that opens a graph report.
pub const REPORT_RULE_WIDTH: usize = 29;
