//! # AppError
//!
//! Centralized error handling for the Tinboard ecosystem.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for all tb-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., Board, Thread)
    #[error("{0} not found: {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., missing form field, invalid file type)
    #[error("validation error: {0}")]
    Validation(String),

    /// Request or upload body exceeded the configured size cap
    #[error("File is too large.")]
    PayloadTooLarge,

    /// Infrastructure failure (e.g., disk write, template rendering)
    #[error("internal service error: {0}")]
    Internal(String),
}

/// A specialized Result type for Tinboard logic.
pub type Result<T> = std::result::Result<T, AppError>;
