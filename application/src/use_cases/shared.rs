//! Shared pieces of the submission flow.
//!
//! Both sessions refuse to submit an empty summary and hand the rest to the
//! [`OrderSubmitter`] unchanged.

use crate::ports::order_submitter::{
    OrderSubmitter, SubmissionError, SubmissionPayload, SubmissionReceipt,
};
use quote_domain::Service;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur when submitting a quote
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Required fields are missing; nothing to submit")]
    NotReady,

    #[error("Submission failed: {0}")]
    Submission(#[from] SubmissionError),
}

/// Send `summary` for `service`, or fail with [`SubmitError::NotReady`] when
/// it is empty.
pub(crate) async fn send_summary(
    submitter: &dyn OrderSubmitter,
    service: Service,
    name: &str,
    email: &str,
    summary: String,
) -> Result<SubmissionReceipt, SubmitError> {
    if summary.is_empty() {
        return Err(SubmitError::NotReady);
    }

    let payload = SubmissionPayload {
        service,
        name: name.to_string(),
        email: email.to_string(),
        message: summary,
    };

    match submitter.submit(&payload).await {
        Ok(receipt) => {
            info!(
                service = %service,
                destination = %receipt.destination,
                "Order submitted"
            );
            Ok(receipt)
        }
        Err(e) => {
            warn!(service = %service, "Order submission failed: {}", e);
            Err(e.into())
        }
    }
}
