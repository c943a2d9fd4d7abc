//! Output configuration from TOML (`[output]` section)

use quote_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
///
/// `format` stays optional so a `-o` flag can tell "unset" apart from an
/// explicit `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    /// Colored headers and totals on the console
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use super::*;

    #[test]
    fn test_json_without_color() {
        let config: FileConfig = toml::from_str("[output]\nformat = \"json\"\ncolor = false\n").unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(toml::from_str::<FileConfig>("[output]\nformat = \"yaml\"\n").is_err());
    }
}
