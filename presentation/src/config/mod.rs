//! Presentation-level configuration
//!
//! Output settings after CLI flags and the config file have been merged.

use quote_domain::OutputFormat;

/// Resolved output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Merge a CLI choice over a config-file choice.
    ///
    /// The CLI format wins when given; `--no-color` always disables color.
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        file_format: Option<OutputFormat>,
        file_color: bool,
        no_color: bool,
    ) -> Self {
        Self {
            format: cli_format.or(file_format).unwrap_or_default(),
            color: file_color && !no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_format_wins() {
        let config = OutputConfig::resolve(
            Some(OutputFormat::Json),
            Some(OutputFormat::Text),
            true,
            false,
        );
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.color);
    }

    #[test]
    fn test_file_format_used_when_cli_absent() {
        let config = OutputConfig::resolve(None, Some(OutputFormat::Json), true, false);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_no_color_flag() {
        let config = OutputConfig::resolve(None, None, true, true);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.color);
    }
}
