//! Domain layer for studio-quote
//!
//! This crate contains the pricing engine, the order summary formatter and
//! the value objects they work on. Everything here is pure: no I/O, no
//! shared state, no async.
//!
//! # Core Concepts
//!
//! ## Pricing
//!
//! - **Vocal mix**: a base price plus the selected add-ons
//!   ([`QuoteOptions`]), with the two urgency options mutually exclusive
//! - **Web create**: number of pages times a per-page price
//!
//! ## Order summary
//!
//! A line-oriented text block shown to the customer and sent verbatim as the
//! message body. An empty summary means a required field is still blank.

pub mod config;
pub mod core;
pub mod order;
pub mod pricing;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigIssue, OutputFormat, Severity};
pub use crate::core::{
    error::DomainError,
    yen::{format_yen, parse_yen},
};
pub use order::{
    ContactMethod, PAGE_NAME_PLACEHOLDER, PageSpec, SEPARATOR, Service, VocalMixForm,
    WebCreateForm, generate_vocal_mix_summary, generate_web_create_summary, total_from_summary,
};
pub use pricing::{
    EXCLUSIVE_PAIRS, OptionKey, OptionSelection, OptionUpdate, QuoteOptions, SelectionUpdate,
    VOCAL_MIX_BASE_PRICE, VOCAL_QUANTITY_RANGE, WEB_CREATE_PRICE_PER_PAGE, apply_selection_update,
    compute_total, web_create_estimate,
};
pub use validation::{is_well_formed_url, url_warning};
