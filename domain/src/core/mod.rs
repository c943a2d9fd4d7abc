//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — blank-field checks used by the summary formatter
//! - [`yen`] — `¥` formatting with grouped thousands

pub mod error;
pub mod string;
pub mod yen;
