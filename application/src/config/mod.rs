//! Application-level configuration.
//!
//! - [`PricingConfig`] — base prices and add-on unit prices for new sessions

pub mod pricing_config;

pub use pricing_config::PricingConfig;
