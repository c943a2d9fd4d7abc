//! The services offered.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    VocalMix,
    WebCreate,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::VocalMix => "vocal-mix",
            Service::WebCreate => "web-create",
        }
    }

    /// Title used in console headers.
    pub fn title(&self) -> &'static str {
        match self {
            Service::VocalMix => "ボーカルミックス",
            Service::WebCreate => "Web制作",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Service {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "vocal-mix" | "vocalmix" => Ok(Service::VocalMix),
            "web-create" | "webcreate" => Ok(Service::WebCreate),
            _ => Err(DomainError::UnknownService(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("vocal-mix".parse(), Ok(Service::VocalMix));
        assert_eq!("web_create".parse(), Ok(Service::WebCreate));
        assert_eq!(Service::WebCreate.to_string(), "web-create");
        assert!("logo".parse::<Service>().is_err());
    }
}
