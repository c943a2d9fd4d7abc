//! Output formatter trait

use super::view::QuoteView;

/// Trait for formatting a finished quote
pub trait OutputFormatter {
    /// Format for the terminal
    fn format(&self, view: &QuoteView) -> String;

    /// Format as JSON
    fn format_json(&self, view: &QuoteView) -> String;
}
