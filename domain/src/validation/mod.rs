//! Advisory input checks.
//!
//! Nothing here blocks a summary; results are returned to the caller to
//! decide how to present them.

pub mod url;

pub use url::{is_well_formed_url, url_warning};
