//! Use cases
//!
//! Quote sessions that own form state and derive totals and summaries.

pub(crate) mod shared;
pub mod vocal_mix_session;
pub mod web_create_session;
