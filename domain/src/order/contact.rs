//! How the customer wants to be contacted.

use serde::{Deserialize, Serialize};

/// Preferred contact channel.
///
/// Only [`ContactMethod::Email`] adds the e-mail line to a summary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContactMethod {
    #[default]
    Email,
    /// Any other channel (e.g. a social DM), kept verbatim
    Other(String),
}

impl ContactMethod {
    pub fn as_str(&self) -> &str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Other(s) => s,
        }
    }

    pub fn is_email(&self) -> bool {
        matches!(self, ContactMethod::Email)
    }
}

impl From<&str> for ContactMethod {
    fn from(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("email") {
            ContactMethod::Email
        } else {
            ContactMethod::Other(s.trim().to_string())
        }
    }
}

impl From<String> for ContactMethod {
    fn from(s: String) -> Self {
        ContactMethod::from(s.as_str())
    }
}

impl From<ContactMethod> for String {
    fn from(method: ContactMethod) -> Self {
        method.as_str().to_string()
    }
}

impl std::fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
