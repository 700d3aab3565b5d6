//! Shared error types for the harness crates.
//!
//! Module-specific errors (retry, client) compose with [`HarnessError`]
//! rather than duplicating the common variants: embed it with
//! `#[error(transparent)] Common(#[from] HarnessError)`.

use std::time::Duration;

use thiserror::Error;

/// Common error patterns shared across harness modules.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// An operation exceeded its deadline.
    #[error("Operation '{operation}' timed out after {duration:?}")]
    Timeout { operation: String, duration: Duration },

    /// Invalid configuration (bad policy values, malformed env vars).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The mock interception layer could not be attached or detached.
    /// Always fatal to the test using it, never retried.
    #[error("Setup error: {0}")]
    Setup(String),

    /// A request payload failed validation before being sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A response body could not be serialized or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invariant violation inside the harness itself.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HarnessError {
    /// Create a timeout error for a named operation.
    pub fn timeout(operation: impl Into<String>, duration: Duration) -> Self {
        Self::Timeout { operation: operation.into(), duration }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a setup error.
    pub fn setup(message: impl Into<String>) -> Self {
        Self::Setup(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result type alias for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display_includes_operation_and_duration() {
        let err = HarnessError::timeout("brands_list", Duration::from_secs(30));
        let text = err.to_string();
        assert!(text.contains("brands_list"));
        assert!(text.contains("30s"));
    }

    #[test]
    fn constructor_helpers_produce_matching_variants() {
        assert!(matches!(HarnessError::config("x"), HarnessError::Config(_)));
        assert!(matches!(HarnessError::setup("x"), HarnessError::Setup(_)));
        assert!(matches!(HarnessError::validation("x"), HarnessError::Validation(_)));
        assert!(matches!(HarnessError::serialization("x"), HarnessError::Serialization(_)));
        assert!(matches!(HarnessError::internal("x"), HarnessError::Internal(_)));
    }
}
