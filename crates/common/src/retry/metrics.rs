// Metrics collected while executing a retry sequence
use std::fmt;
use std::time::Duration;

/// Summary of a single retry execution.
#[derive(Debug, Clone, Default)]
pub struct RetryMetrics {
    /// Number of attempts made.
    pub attempts: u32,
    /// Total backoff delay accumulated between attempts.
    pub total_delay: Duration,
    /// Whether the operation ultimately succeeded.
    pub succeeded: bool,
    /// Whether any attempt failed by timing out.
    pub timed_out: bool,
}

impl RetryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Average backoff delay between attempts, if more than one was made.
    pub fn average_delay(&self) -> Option<Duration> {
        if self.attempts <= 1 {
            None
        } else {
            Some(self.total_delay / (self.attempts - 1))
        }
    }
}

impl fmt::Display for RetryMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RetryMetrics {{ attempts: {}, total_delay: {:?}, succeeded: {}, timed_out: {} }}",
            self.attempts, self.total_delay, self.succeeded, self.timed_out
        )
    }
}
