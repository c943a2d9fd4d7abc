//! Order forms and the plain-text order summary.
//!
//! The summary is both what the customer sees before sending and the exact
//! message body handed to the submission transport. An empty summary means
//! the form is not ready to submit.

pub mod contact;
pub mod form;
pub mod service;
pub mod summary;

pub use contact::ContactMethod;
pub use form::{PageSpec, VocalMixForm, WebCreateForm};
pub use service::Service;
pub use summary::{
    PAGE_NAME_PLACEHOLDER, SEPARATOR, generate_vocal_mix_summary, generate_web_create_summary,
    total_from_summary,
};
