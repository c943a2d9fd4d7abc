//! A single paid add-on and the key that names it.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Names the four add-ons offered with a vocal mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionKey {
    /// Extra vocalists, priced per person
    VocalAddition,
    /// Video/audio encoding
    Encoding,
    /// Delivery within three days
    UrgentThreeDay,
    /// Delivery within seven days
    UrgentSevenDay,
}

impl OptionKey {
    /// All keys, in the order they appear in summaries.
    pub const ALL: [OptionKey; 4] = [
        OptionKey::VocalAddition,
        OptionKey::Encoding,
        OptionKey::UrgentThreeDay,
        OptionKey::UrgentSevenDay,
    ];

    /// Whether the option's price is multiplied by a quantity.
    pub fn is_quantity_capable(&self) -> bool {
        matches!(self, OptionKey::VocalAddition)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::VocalAddition => "vocalAddition",
            OptionKey::Encoding => "encoding",
            OptionKey::UrgentThreeDay => "urgentThreeDay",
            OptionKey::UrgentSevenDay => "urgentSevenDay",
        }
    }

    /// Japanese label shown in the order summary.
    pub fn label(&self) -> &'static str {
        match self {
            OptionKey::VocalAddition => "ボーカル追加",
            OptionKey::Encoding => "エンコード",
            OptionKey::UrgentThreeDay => "お急ぎ納品 (3日以内)",
            OptionKey::UrgentSevenDay => "お急ぎ納品 (7日以内)",
        }
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OptionKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "vocaladdition" | "vocal" => Ok(OptionKey::VocalAddition),
            "encoding" | "encode" => Ok(OptionKey::Encoding),
            "urgentthreeday" | "urgent3" => Ok(OptionKey::UrgentThreeDay),
            "urgentsevenday" | "urgent7" => Ok(OptionKey::UrgentSevenDay),
            _ => Err(DomainError::UnknownOption(s.to_string())),
        }
    }
}

/// Selection state of one add-on.
///
/// `quantity` only matters for quantity-capable options; every other option
/// counts once when selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSelection {
    pub unit_price: u64,
    pub selected: bool,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl OptionSelection {
    /// Unselected option with quantity 1.
    pub fn new(unit_price: u64) -> Self {
        Self {
            unit_price,
            selected: false,
            quantity: 1,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}
