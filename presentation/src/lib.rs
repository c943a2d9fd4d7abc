//! Presentation layer for studio-quote
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, UrgencyArg, VocalMixArgs, WebCreateArgs, parse_page};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::view::{PriceLine, QuoteView};
