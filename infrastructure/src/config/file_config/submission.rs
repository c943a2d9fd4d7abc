//! Submission configuration from TOML (`[submission]` section)

use quote_domain::{ConfigIssue, ContactMethod};
use serde::{Deserialize, Serialize};

/// Raw submission configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSubmissionConfig {
    /// JSONL file that submitted orders are appended to.
    /// `None` means submissions are only logged.
    pub outbox: Option<String>,
    /// Contact method written into summaries ("email" adds the e-mail line)
    pub contact_method: String,
}

impl Default for FileSubmissionConfig {
    fn default() -> Self {
        Self {
            outbox: None,
            contact_method: "email".to_string(),
        }
    }
}

impl FileSubmissionConfig {
    pub fn contact_method(&self) -> ContactMethod {
        ContactMethod::from(self.contact_method.as_str())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.contact_method.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "submission.contact_method",
                "empty contact method; e-mail lines will be left out of summaries",
            ));
        }
        if let Some(outbox) = &self.outbox
            && outbox.trim().is_empty()
        {
            issues.push(ConfigIssue::error(
                "submission.outbox",
                "outbox path is empty",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_email() {
        let config = FileSubmissionConfig::default();
        assert_eq!(config.contact_method(), ContactMethod::Email);
        assert!(config.outbox.is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_other_contact_method() {
        let config = FileSubmissionConfig {
            contact_method: "twitter".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.contact_method(),
            ContactMethod::Other("twitter".to_string())
        );
    }

    #[test]
    fn test_empty_outbox_is_error() {
        let config = FileSubmissionConfig {
            outbox: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(config.validate()[0].is_error());
    }
}
