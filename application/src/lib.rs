//! Application layer for studio-quote
//!
//! This crate contains quote sessions (use cases), port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PricingConfig;
pub use ports::order_submitter::{
    DryRunSubmitter, OrderSubmitter, SubmissionError, SubmissionPayload, SubmissionReceipt,
};
pub use use_cases::shared::SubmitError;
pub use use_cases::vocal_mix_session::VocalMixSession;
pub use use_cases::web_create_session::{PageEditError, WebCreateSession};
