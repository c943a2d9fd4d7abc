//! Configuration file loading for studio-quote
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `STUDIO_QUOTE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./studio-quote.toml` or `./.studio-quote.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/studio-quote/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileOptionPrices, FileOutputConfig, FilePricingConfig,
    FileSubmissionConfig,
};
pub use loader::ConfigLoader;
