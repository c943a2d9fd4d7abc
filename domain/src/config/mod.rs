//! Configuration-related domain types.

pub mod issue;
pub mod output_format;

pub use issue::{ConfigIssue, Severity};
pub use output_format::OutputFormat;
