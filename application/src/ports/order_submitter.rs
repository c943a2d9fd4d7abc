//! Order submission port.
//!
//! A finished summary leaves the application through [`OrderSubmitter`].
//! Adapters decide where it goes (e-mail, a local outbox file, nowhere).
//!
//! # Built-in Implementations
//!
//! - [`DryRunSubmitter`] - Accepts every payload and only logs it
//!
//! For a file-backed adapter, see `JsonlOutbox` in the infrastructure layer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quote_domain::Service;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// What gets sent for one order.
///
/// `message` is the order summary, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub service: Service,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Proof that an adapter accepted a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub service: Service,
    pub submitted_at: DateTime<Utc>,
    /// Where the payload ended up (file path, "dry-run", ...)
    pub destination: String,
}

impl SubmissionReceipt {
    pub fn now(service: Service, destination: impl Into<String>) -> Self {
        Self {
            service,
            submitted_at: Utc::now(),
            destination: destination.into(),
        }
    }
}

/// Errors that can occur while handing off a payload
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Submission rejected: {0}")]
    Rejected(String),
}

/// Port for sending a finished order somewhere.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Submitter that accepts everything and writes nothing.
pub struct DryRunSubmitter;

#[async_trait]
impl OrderSubmitter for DryRunSubmitter {
    async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        info!(
            service = %payload.service,
            name = %payload.name,
            "Dry-run submission ({} bytes)",
            payload.message.len()
        );
        Ok(SubmissionReceipt::now(payload.service, "dry-run"))
    }
}
