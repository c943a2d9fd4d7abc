//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Pricing and summary generation never fail; these only surface when
/// option keys or updates arrive as untyped strings (CLI flags, request files).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid option update: {0}")]
    InvalidUpdate(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),
}
