//! Immutable option updates.
//!
//! Every change to [`QuoteOptions`] goes through [`apply_selection_update`],
//! which returns a fresh record and then applies the exclusion table so the
//! two urgency options are never selected together.

use super::option::OptionKey;
use super::options::QuoteOptions;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Options that cannot be selected at the same time.
///
/// Selecting either side of a pair clears the other (last write wins).
pub const EXCLUSIVE_PAIRS: &[(OptionKey, OptionKey)] =
    &[(OptionKey::UrgentThreeDay, OptionKey::UrgentSevenDay)];

/// A single field write on one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionUpdate {
    Selected(bool),
    Quantity(u32),
}

impl std::str::FromStr for SelectionUpdate {
    type Err = DomainError;

    /// Parse `selected=true`, `selected=false` or `quantity=N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidUpdate(s.to_string());
        let (field, value) = s.split_once('=').ok_or_else(invalid)?;
        match field.trim().to_lowercase().as_str() {
            "selected" => value
                .trim()
                .parse::<bool>()
                .map(SelectionUpdate::Selected)
                .map_err(|_| invalid()),
            "quantity" => value
                .trim()
                .parse::<u32>()
                .map(SelectionUpdate::Quantity)
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

/// A [`SelectionUpdate`] addressed to one option.
///
/// Written as `key:field=value`, e.g. `vocal:quantity=2` or
/// `urgentThreeDay:selected=true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OptionUpdate {
    pub key: OptionKey,
    pub update: SelectionUpdate,
}

impl OptionUpdate {
    pub fn new(key: OptionKey, update: SelectionUpdate) -> Self {
        Self { key, update }
    }

    /// Apply to `options`, returning the new record.
    pub fn apply(&self, options: &QuoteOptions) -> QuoteOptions {
        apply_selection_update(options, self.key, self.update)
    }
}

impl std::str::FromStr for OptionUpdate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, update) = s
            .split_once(':')
            .ok_or_else(|| DomainError::InvalidUpdate(s.to_string()))?;
        Ok(Self {
            key: key.parse()?,
            update: update.parse()?,
        })
    }
}

impl TryFrom<String> for OptionUpdate {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OptionUpdate> for String {
    fn from(u: OptionUpdate) -> Self {
        u.to_string()
    }
}

impl std::fmt::Display for OptionUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.update {
            SelectionUpdate::Selected(v) => write!(f, "{}:selected={}", self.key, v),
            SelectionUpdate::Quantity(q) => write!(f, "{}:quantity={}", self.key, q),
        }
    }
}

/// Return a copy of `prev` with `update` applied to `key`.
///
/// `prev` is never modified. When the update selects one side of an
/// [`EXCLUSIVE_PAIRS`] entry, the other side is deselected in the result.
///
/// ```
/// use quote_domain::{OptionKey, QuoteOptions, SelectionUpdate, apply_selection_update};
///
/// let before = QuoteOptions::default();
/// let three = apply_selection_update(&before, OptionKey::UrgentThreeDay, SelectionUpdate::Selected(true));
/// let seven = apply_selection_update(&three, OptionKey::UrgentSevenDay, SelectionUpdate::Selected(true));
///
/// assert!(seven.urgent_seven_day.selected);
/// assert!(!seven.urgent_three_day.selected);
/// assert!(!before.urgent_three_day.selected);
/// ```
pub fn apply_selection_update(
    prev: &QuoteOptions,
    key: OptionKey,
    update: SelectionUpdate,
) -> QuoteOptions {
    let mut next = *prev;
    let target = next.get_mut(key);
    match update {
        SelectionUpdate::Selected(selected) => target.selected = selected,
        SelectionUpdate::Quantity(quantity) => target.quantity = quantity,
    }

    if update == SelectionUpdate::Selected(true) {
        for conflicting in conflicts_of(key) {
            next.get_mut(conflicting).selected = false;
        }
    }

    next
}

fn conflicts_of(key: OptionKey) -> impl Iterator<Item = OptionKey> {
    EXCLUSIVE_PAIRS.iter().filter_map(move |&(a, b)| {
        if a == key {
            Some(b)
        } else if b == key {
            Some(a)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(options: &QuoteOptions, key: OptionKey) -> QuoteOptions {
        apply_selection_update(options, key, SelectionUpdate::Selected(true))
    }

    // ==================== Mutual exclusion ====================

    #[test]
    fn test_selecting_three_day_clears_seven_day() {
        let options = select(&QuoteOptions::default(), OptionKey::UrgentSevenDay);
        assert!(options.urgent_seven_day.selected);

        let options = select(&options, OptionKey::UrgentThreeDay);
        assert!(options.urgent_three_day.selected);
        assert!(!options.urgent_seven_day.selected);
    }

    #[test]
    fn test_selecting_seven_day_clears_three_day() {
        let options = select(&QuoteOptions::default(), OptionKey::UrgentThreeDay);
        let options = select(&options, OptionKey::UrgentSevenDay);
        assert!(options.urgent_seven_day.selected);
        assert!(!options.urgent_three_day.selected);
    }

    #[test]
    fn test_exclusion_holds_regardless_of_prior_state() {
        // Start from a record that already violates the invariant.
        let mut broken = QuoteOptions::default();
        broken.urgent_three_day.selected = true;
        broken.urgent_seven_day.selected = true;

        let fixed = select(&broken, OptionKey::UrgentThreeDay);
        assert!(!fixed.urgent_seven_day.selected);

        let fixed = select(&broken, OptionKey::UrgentSevenDay);
        assert!(!fixed.urgent_three_day.selected);
    }

    #[test]
    fn test_deselecting_does_not_touch_partner() {
        let options = select(&QuoteOptions::default(), OptionKey::UrgentSevenDay);
        let options = apply_selection_update(
            &options,
            OptionKey::UrgentThreeDay,
            SelectionUpdate::Selected(false),
        );
        assert!(options.urgent_seven_day.selected);
    }

    #[test]
    fn test_unrelated_options_are_not_exclusive() {
        let options = select(&QuoteOptions::default(), OptionKey::Encoding);
        let options = select(&options, OptionKey::VocalAddition);
        let options = select(&options, OptionKey::UrgentThreeDay);
        assert!(options.encoding.selected);
        assert!(options.vocal_addition.selected);
        assert!(options.urgent_three_day.selected);
    }

    // ==================== Immutability ====================

    #[test]
    fn test_input_is_not_mutated() {
        let mut original = QuoteOptions::default();
        original.urgent_seven_day.selected = true;
        let saved = original;

        let _ = select(&original, OptionKey::UrgentThreeDay);
        let _ = apply_selection_update(&original, OptionKey::VocalAddition, SelectionUpdate::Quantity(4));

        assert_eq!(original, saved);
    }

    #[test]
    fn test_quantity_update() {
        let options = apply_selection_update(
            &QuoteOptions::default(),
            OptionKey::VocalAddition,
            SelectionUpdate::Quantity(3),
        );
        assert_eq!(options.vocal_addition.quantity, 3);
        assert!(!options.vocal_addition.selected);
    }

    // ==================== Parsing ====================

    #[test]
    fn test_parse_update() {
        assert_eq!("selected=true".parse(), Ok(SelectionUpdate::Selected(true)));
        assert_eq!("selected = false".parse(), Ok(SelectionUpdate::Selected(false)));
        assert_eq!("quantity=3".parse(), Ok(SelectionUpdate::Quantity(3)));
    }

    #[test]
    fn test_parse_update_rejects_malformed() {
        assert!("selected".parse::<SelectionUpdate>().is_err());
        assert!("selected=yes".parse::<SelectionUpdate>().is_err());
        assert!("quantity=-1".parse::<SelectionUpdate>().is_err());
        assert!("price=100".parse::<SelectionUpdate>().is_err());
    }

    #[test]
    fn test_parse_option_update() {
        let parsed: OptionUpdate = "vocal:quantity=2".parse().unwrap();
        assert_eq!(
            parsed,
            OptionUpdate::new(OptionKey::VocalAddition, SelectionUpdate::Quantity(2))
        );
        assert_eq!(parsed.to_string(), "vocalAddition:quantity=2");
    }

    #[test]
    fn test_parse_option_update_errors() {
        assert_eq!(
            "mastering:selected=true".parse::<OptionUpdate>(),
            Err(DomainError::UnknownOption("mastering".to_string()))
        );
        assert!("encode".parse::<OptionUpdate>().is_err());
        assert!("encode:selected".parse::<OptionUpdate>().is_err());
    }

    #[test]
    fn test_option_update_deserializes_from_string() {
        let updates: Vec<OptionUpdate> =
            serde_json::from_str(r#"["urgent3:selected=true", "urgent7:selected=true"]"#).unwrap();
        let options = updates
            .iter()
            .fold(QuoteOptions::default(), |acc, u| u.apply(&acc));
        assert!(options.urgent_seven_day.selected);
        assert!(!options.urgent_three_day.selected);
    }
}
