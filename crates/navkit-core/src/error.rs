//! Error types for document construction and width cache configuration.
//!
//! Navigation and measurement queries never fail; out-of-range arguments are
//! clamped. Only the validating constructors report errors.

use thiserror::Error;

/// Errors reported by the validating constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// Cursor position lies outside `[0, max]`.
    #[error("Invalid cursor position {position} (max: {max})")]
    InvalidCursorPosition { position: usize, max: usize },

    /// A width cache configuration value was rejected.
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl NavError {
    /// Create an invalid cursor position error.
    pub fn invalid_cursor_position(position: usize, max: usize) -> Self {
        NavError::InvalidCursorPosition { position, max }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(field: &str, reason: &str) -> Self {
        NavError::InvalidConfig {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for fallible constructors.
pub type NavResult<T> = Result<T, NavError>;
