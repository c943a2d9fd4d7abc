//! Price list from TOML (`[pricing]` section)

use quote_application::PricingConfig;
use quote_domain::{ConfigIssue, QuoteOptions, VOCAL_MIX_BASE_PRICE, WEB_CREATE_PRICE_PER_PAGE};
use serde::{Deserialize, Serialize};

/// Raw pricing configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePricingConfig {
    /// Flat price of a vocal mix before add-ons
    pub vocal_mix_base: u64,
    /// Price of one page in a web-create estimate
    pub web_create_per_page: u64,
    /// Unit prices of the vocal-mix add-ons
    pub options: FileOptionPrices,
}

impl Default for FilePricingConfig {
    fn default() -> Self {
        Self {
            vocal_mix_base: VOCAL_MIX_BASE_PRICE,
            web_create_per_page: WEB_CREATE_PRICE_PER_PAGE,
            options: FileOptionPrices::default(),
        }
    }
}

/// `[pricing.options]` unit prices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOptionPrices {
    pub vocal_addition: u64,
    pub encoding: u64,
    pub urgent_three_day: u64,
    pub urgent_seven_day: u64,
}

impl Default for FileOptionPrices {
    fn default() -> Self {
        let defaults = QuoteOptions::default();
        Self {
            vocal_addition: defaults.vocal_addition.unit_price,
            encoding: defaults.encoding.unit_price,
            urgent_three_day: defaults.urgent_three_day.unit_price,
            urgent_seven_day: defaults.urgent_seven_day.unit_price,
        }
    }
}

impl FilePricingConfig {
    pub fn to_pricing_config(&self) -> PricingConfig {
        PricingConfig::default()
            .with_vocal_mix_base(self.vocal_mix_base)
            .with_web_create_per_page(self.web_create_per_page)
            .with_options(QuoteOptions::with_unit_prices(
                self.options.vocal_addition,
                self.options.encoding,
                self.options.urgent_three_day,
                self.options.urgent_seven_day,
            ))
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.vocal_mix_base == 0 {
            issues.push(ConfigIssue::warning(
                "pricing.vocal_mix_base",
                "base price is 0; vocal-mix totals will only include add-ons",
            ));
        }
        if self.web_create_per_page == 0 {
            issues.push(ConfigIssue::error(
                "pricing.web_create_per_page",
                "per-page price must be greater than 0",
            ));
        }
        if self.options.urgent_three_day < self.options.urgent_seven_day {
            issues.push(ConfigIssue::warning(
                "pricing.options.urgent_three_day",
                format!(
                    "3-day delivery ({}) is cheaper than 7-day delivery ({})",
                    self.options.urgent_three_day, self.options.urgent_seven_day
                ),
            ));
        }

        issues
    }
}
