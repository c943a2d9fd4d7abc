//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod pricing;
mod submission;

pub use output::FileOutputConfig;
pub use pricing::{FileOptionPrices, FilePricingConfig};
pub use submission::FileSubmissionConfig;

use quote_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Base prices and add-on unit prices
    pub pricing: FilePricingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Where submitted orders go
    pub submission: FileSubmissionConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.pricing.validate());
        issues.extend(self.submission.validate());
        issues
    }
}
