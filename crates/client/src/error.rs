// Error type for the client crate, composed with the shared taxonomy
use shopharness_common::HarnessError;
use thiserror::Error;

/// Errors surfaced by the API client and its controllers.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Shared harness errors (timeout, config, setup, serialization).
    #[error(transparent)]
    Common(#[from] HarnessError),

    /// Transport-level failure from the underlying HTTP client.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_errors_convert_transparently() {
        let err: ClientError = HarnessError::setup("no mock attached").into();
        assert!(err.to_string().contains("no mock attached"));
        assert!(matches!(err, ClientError::Common(HarnessError::Setup(_))));
    }
}
