//! Price computation.
//!
//! Both functions are pure and cheap; callers recompute on every change
//! instead of caching.

use super::options::QuoteOptions;
use std::ops::RangeInclusive;

/// Flat starting price of a vocal mix.
pub const VOCAL_MIX_BASE_PRICE: u64 = 3000;

/// Price of one page in a web-create estimate.
pub const WEB_CREATE_PRICE_PER_PAGE: u64 = 1500;

/// Vocalist counts offered for the vocal-addition option.
pub const VOCAL_QUANTITY_RANGE: RangeInclusive<u32> = 1..=5;

/// `base_price` plus `unit_price × quantity` for every selected option.
///
/// Options that are not quantity-capable always count once. Arithmetic
/// saturates at `u64::MAX`, so oversized configured prices never panic.
///
/// ```
/// use quote_domain::{QuoteOptions, compute_total};
///
/// let mut options = QuoteOptions::default();
/// assert_eq!(compute_total(3000, &options), 3000);
///
/// options.vocal_addition.selected = true;
/// options.vocal_addition.quantity = 2;
/// options.encoding.selected = true;
/// assert_eq!(compute_total(3000, &options), 7500);
/// ```
pub fn compute_total(base_price: u64, options: &QuoteOptions) -> u64 {
    let add_ons: u64 = options
        .selected()
        .map(|(key, sel)| {
            let quantity = if key.is_quantity_capable() {
                u64::from(sel.quantity)
            } else {
                1
            };
            sel.unit_price.saturating_mul(quantity)
        })
        .fold(0, u64::saturating_add);
    base_price.saturating_add(add_ons)
}

/// Web-create estimate: number of pages times the per-page price.
pub fn web_create_estimate(page_count: usize, unit_price: u64) -> u64 {
    u64::try_from(page_count)
        .unwrap_or(u64::MAX)
        .saturating_mul(unit_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::option::OptionKey;

    #[test]
    fn test_no_selection_equals_base() {
        let options = QuoteOptions::default();
        assert_eq!(compute_total(0, &options), 0);
        assert_eq!(compute_total(VOCAL_MIX_BASE_PRICE, &options), 3000);
        assert_eq!(compute_total(12345, &options), 12345);
    }

    #[test]
    fn test_unselected_quantity_is_ignored() {
        let mut options = QuoteOptions::default();
        options.vocal_addition.quantity = 5;
        assert_eq!(compute_total(3000, &options), 3000);
    }

    #[test]
    fn test_vocal_mix_scenario() {
        let mut options = QuoteOptions::default();
        options.vocal_addition.selected = true;
        options.vocal_addition.quantity = 2;
        options.encoding.selected = true;
        assert_eq!(compute_total(3000, &options), 3000 + 2000 * 2 + 500);
    }

    #[test]
    fn test_strictly_increasing_in_quantity() {
        for other in OptionKey::ALL {
            let mut options = QuoteOptions::default();
            options.get_mut(other).selected = true;
            options.vocal_addition.selected = true;

            let totals: Vec<u64> = VOCAL_QUANTITY_RANGE
                .map(|q| {
                    options.vocal_addition.quantity = q;
                    compute_total(VOCAL_MIX_BASE_PRICE, &options)
                })
                .collect();
            assert!(totals.windows(2).all(|w| w[0] < w[1]), "{:?}", totals);
        }
    }

    #[test]
    fn test_quantity_ignored_for_flat_options() {
        let mut options = QuoteOptions::default();
        options.encoding.selected = true;
        options.encoding.quantity = 4;
        assert_eq!(compute_total(3000, &options), 3500);
    }

    #[test]
    fn test_all_selected() {
        let mut options = QuoteOptions::default();
        for key in OptionKey::ALL {
            options.get_mut(key).selected = true;
        }
        // Direct field writes bypass the exclusion rule; the engine just sums.
        assert_eq!(compute_total(3000, &options), 3000 + 2000 + 500 + 2000 + 1000);
    }

    #[test]
    fn test_web_create_estimate() {
        assert_eq!(web_create_estimate(3, WEB_CREATE_PRICE_PER_PAGE), 4500);
        assert_eq!(web_create_estimate(1, WEB_CREATE_PRICE_PER_PAGE), 1500);
        assert_eq!(web_create_estimate(0, WEB_CREATE_PRICE_PER_PAGE), 0);
    }

    #[test]
    fn test_oversized_prices_saturate() {
        let mut options = QuoteOptions::with_unit_prices(5_000_000_000_000_000_000, 500, 2000, 1000);
        options.vocal_addition.selected = true;
        options.vocal_addition.quantity = 4;
        assert_eq!(compute_total(3000, &options), u64::MAX);

        options.vocal_addition.quantity = 1;
        assert_eq!(compute_total(u64::MAX, &options), u64::MAX);
        assert_eq!(web_create_estimate(3, u64::MAX / 2), u64::MAX);
    }

    #[test]
    fn test_deterministic() {
        let mut options = QuoteOptions::default();
        options.urgent_three_day.selected = true;
        assert_eq!(compute_total(3000, &options), compute_total(3000, &options));
    }
}
