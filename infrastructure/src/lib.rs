//! Infrastructure layer for studio-quote
//!
//! This crate contains adapters for external systems:
//!
//! - [`config`] — figment-based config file loading
//! - [`request`] — quote request files (TOML/JSON)
//! - [`outbox`] — JSONL outbox implementing the `OrderSubmitter` port

pub mod config;
pub mod outbox;
pub mod request;

pub use config::{ConfigLoader, FileConfig};
pub use outbox::JsonlOutbox;
pub use request::{RequestLoadError, RequestLoader, VocalMixRequest};
