//! Quote request files.
//!
//! A request file holds the form fields for one order (and, for vocal mix,
//! a list of option updates) so a quote can be reproduced without typing
//! every flag.

mod loader;

pub use loader::{RequestLoadError, RequestLoader, VocalMixRequest};
