//! Pricing engine for the two service forms.
//!
//! - [`option::OptionKey`] / [`option::OptionSelection`] — one paid add-on
//! - [`options::QuoteOptions`] — the full add-on set for a vocal-mix quote
//! - [`update`] — immutable option updates with the urgency exclusion rule
//! - [`engine`] — total and per-page estimate computation

pub mod engine;
pub mod option;
pub mod options;
pub mod update;

pub use engine::{
    VOCAL_MIX_BASE_PRICE, VOCAL_QUANTITY_RANGE, WEB_CREATE_PRICE_PER_PAGE, compute_total,
    web_create_estimate,
};
pub use option::{OptionKey, OptionSelection};
pub use options::QuoteOptions;
pub use update::{EXCLUSIVE_PAIRS, OptionUpdate, SelectionUpdate, apply_selection_update};
