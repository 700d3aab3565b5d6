// Advisory classification of transient errors
//
// The executor itself retries unconditionally up to the attempt budget;
// this predicate exists for callers who want to short-circuit retries on
// errors that cannot possibly clear up (validation failures, 401s).

/// Message fragments that indicate a transient, retry-worthy failure.
const RETRYABLE_PATTERNS: &[&str] = &[
    "timeout",
    "network",
    "connection",
    "econnreset",
    "econnrefused",
    "etimedout",
    "enotfound",
    "502",
    "503",
    "504",
];

/// Whether the error looks transient based on its message.
pub fn is_retryable_error(error: &dyn std::error::Error) -> bool {
    is_retryable_message(&error.to_string())
}

/// Message-level variant of [`is_retryable_error`] for callers that only
/// have the rendered text.
pub fn is_retryable_message(message: &str) -> bool {
    let message = message.to_lowercase();
    RETRYABLE_PATTERNS.iter().any(|pattern| message.contains(pattern))
}

/// Reusable retry predicate for callers that wrap their operation with an
/// early-out instead of burning the remaining attempt budget.
#[derive(Debug, Clone, Copy, Default)]
pub enum RetryCondition {
    /// Retry every failure; matches the executor's own behavior.
    #[default]
    Always,
    /// Retry only errors the transient classifier accepts.
    TransientOnly,
    /// Custom predicate over the rendered error message.
    Custom(fn(&str) -> bool),
}

impl RetryCondition {
    pub fn should_retry(&self, error: &dyn std::error::Error) -> bool {
        match self {
            Self::Always => true,
            Self::TransientOnly => is_retryable_error(error),
            Self::Custom(predicate) => predicate(&error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug)]
    struct TestError(&'static str);

    impl fmt::Display for TestError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl std::error::Error for TestError {}

    #[test]
    fn transient_messages_are_retryable() {
        for message in [
            "Operation timeout",
            "read ECONNRESET",
            "connect ETIMEDOUT 1.2.3.4:443",
            "getaddrinfo ENOTFOUND example.com",
            "502 Bad Gateway",
            "503 Service Unavailable",
            "504 Gateway Timeout",
            "connection refused",
        ] {
            assert!(is_retryable_message(message), "expected retryable: {message}");
        }
    }

    #[test]
    fn deterministic_failures_are_not_retryable() {
        for message in ["validation error", "401 Unauthorized", "assertion failed: brands"] {
            assert!(!is_retryable_message(message), "expected non-retryable: {message}");
        }
    }

    #[test]
    fn error_trait_object_is_classified_by_message() {
        let transient = TestError("request timeout");
        let fatal = TestError("403 Forbidden");
        assert!(is_retryable_error(&transient));
        assert!(!is_retryable_error(&fatal));
    }

    #[test]
    fn conditions_delegate_to_their_predicate() {
        let fatal = TestError("401 Unauthorized");
        assert!(RetryCondition::Always.should_retry(&fatal));
        assert!(!RetryCondition::TransientOnly.should_retry(&fatal));

        let only_resets = RetryCondition::Custom(|message| message.contains("ECONNRESET"));
        assert!(only_resets.should_retry(&TestError("read ECONNRESET")));
        assert!(!only_resets.should_retry(&TestError("503 Service Unavailable")));
    }
}
