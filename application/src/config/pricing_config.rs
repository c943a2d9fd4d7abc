//! Prices used when a session starts or resets.

use quote_domain::{QuoteOptions, VOCAL_MIX_BASE_PRICE, WEB_CREATE_PRICE_PER_PAGE};

/// Price list for both services.
///
/// `options` is the record a vocal-mix session starts from and returns to
/// after a successful submission, so it should have nothing selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    pub vocal_mix_base: u64,
    pub web_create_per_page: u64,
    pub options: QuoteOptions,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            vocal_mix_base: VOCAL_MIX_BASE_PRICE,
            web_create_per_page: WEB_CREATE_PRICE_PER_PAGE,
            options: QuoteOptions::default(),
        }
    }
}

impl PricingConfig {
    pub fn with_vocal_mix_base(mut self, price: u64) -> Self {
        self.vocal_mix_base = price;
        self
    }

    pub fn with_web_create_per_page(mut self, price: u64) -> Self {
        self.web_create_per_page = price;
        self
    }

    /// Use `options` as the reset state. Any selection is cleared.
    pub fn with_options(mut self, options: QuoteOptions) -> Self {
        self.options = QuoteOptions::with_unit_prices(
            options.vocal_addition.unit_price,
            options.encoding.unit_price,
            options.urgent_three_day.unit_price,
            options.urgent_seven_day.unit_price,
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prices() {
        let config = PricingConfig::default();
        assert_eq!(config.vocal_mix_base, 3000);
        assert_eq!(config.web_create_per_page, 1500);
        assert_eq!(config.options, QuoteOptions::default());
    }

    #[test]
    fn test_with_options_clears_selection() {
        let mut options = QuoteOptions::with_unit_prices(2500, 600, 2200, 1100);
        options.encoding.selected = true;
        options.vocal_addition.quantity = 3;

        let config = PricingConfig::default().with_options(options);
        assert!(!config.options.has_selection());
        assert_eq!(config.options.vocal_addition.quantity, 1);
        assert_eq!(config.options.encoding.unit_price, 600);
    }
}
