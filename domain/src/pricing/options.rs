//! The full add-on set for one vocal-mix quote.

use super::option::{OptionKey, OptionSelection};
use serde::{Deserialize, Serialize};

/// Selection state of every vocal-mix add-on.
///
/// Owned by whoever drives the form for one session. Use
/// [`apply_selection_update`](super::update::apply_selection_update) to
/// change it so the urgency exclusion holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteOptions {
    pub vocal_addition: OptionSelection,
    pub encoding: OptionSelection,
    pub urgent_three_day: OptionSelection,
    pub urgent_seven_day: OptionSelection,
}

impl Default for QuoteOptions {
    fn default() -> Self {
        Self::with_unit_prices(2000, 500, 2000, 1000)
    }
}

impl QuoteOptions {
    /// All options unselected, quantity 1, with the given unit prices.
    pub fn with_unit_prices(
        vocal_addition: u64,
        encoding: u64,
        urgent_three_day: u64,
        urgent_seven_day: u64,
    ) -> Self {
        Self {
            vocal_addition: OptionSelection::new(vocal_addition),
            encoding: OptionSelection::new(encoding),
            urgent_three_day: OptionSelection::new(urgent_three_day),
            urgent_seven_day: OptionSelection::new(urgent_seven_day),
        }
    }

    pub fn get(&self, key: OptionKey) -> &OptionSelection {
        match key {
            OptionKey::VocalAddition => &self.vocal_addition,
            OptionKey::Encoding => &self.encoding,
            OptionKey::UrgentThreeDay => &self.urgent_three_day,
            OptionKey::UrgentSevenDay => &self.urgent_seven_day,
        }
    }

    pub fn get_mut(&mut self, key: OptionKey) -> &mut OptionSelection {
        match key {
            OptionKey::VocalAddition => &mut self.vocal_addition,
            OptionKey::Encoding => &mut self.encoding,
            OptionKey::UrgentThreeDay => &mut self.urgent_three_day,
            OptionKey::UrgentSevenDay => &mut self.urgent_seven_day,
        }
    }

    /// Selected options in summary order.
    pub fn selected(&self) -> impl Iterator<Item = (OptionKey, &OptionSelection)> {
        OptionKey::ALL
            .into_iter()
            .map(|key| (key, self.get(key)))
            .filter(|(_, sel)| sel.selected)
    }

    pub fn has_selection(&self) -> bool {
        self.selected().next().is_some()
    }
}
