// Retry executor: races each attempt against a timeout, backs off between
// failures, and gives up after the policy's attempt budget
use std::fmt;
use std::future::Future;

use tracing::{debug, error, warn};

use crate::retry::error::{AttemptError, RetryError};
use crate::retry::metrics::RetryMetrics;
use crate::retry::policy::RetryPolicy;

/// Executes an asynchronous operation with bounded retries.
///
/// Attempts are numbered from 0. Every attempt is raced against the
/// policy's per-attempt timeout; a fired timer counts as a failed attempt.
/// Failures before the last allowed attempt sleep the backoff delay and go
/// again; the last failure surfaces as [`RetryError::Exhausted`] carrying
/// the attempt count and the most recent underlying error.
///
/// Retries are unconditional up to the attempt budget. Callers who want to
/// bail out early on non-transient errors can consult
/// [`crate::retry::is_retryable_error`] inside the operation and map such
/// errors to a success-typed sentinel, or simply accept the extra attempts.
///
/// The operation may run more than once; making it idempotent or
/// side-effect-tolerant is the caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct RetryExecutor {
    policy: RetryPolicy,
}

impl RetryExecutor {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Execute an operation with retry logic.
    pub async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        self.execute_with_metrics("unnamed", operation).await.0
    }

    /// Execute an operation with retry logic, also returning attempt
    /// statistics.
    pub async fn execute_with_metrics<F, Fut, T, E>(
        &self,
        operation_name: &str,
        mut operation: F,
    ) -> (Result<T, RetryError<E>>, RetryMetrics)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        let max_attempts = self.policy.max_attempts();
        let mut metrics = RetryMetrics::new();
        let mut attempt: u32 = 0;

        loop {
            metrics.attempts = attempt + 1;

            let failure =
                match tokio::time::timeout(self.policy.attempt_timeout(), operation()).await {
                    Ok(Ok(value)) => {
                        if attempt > 0 {
                            debug!(
                                operation = operation_name,
                                attempts = metrics.attempts,
                                total_delay = ?metrics.total_delay,
                                "operation succeeded after retries"
                            );
                        }
                        metrics.succeeded = true;
                        return (Ok(value), metrics);
                    }
                    Ok(Err(err)) => AttemptError::Operation(err),
                    Err(_) => {
                        metrics.timed_out = true;
                        AttemptError::TimedOut(self.policy.attempt_timeout())
                    }
                };

            if attempt + 1 >= max_attempts {
                error!(
                    operation = operation_name,
                    attempts = metrics.attempts,
                    total_delay = ?metrics.total_delay,
                    error = %failure,
                    "all retry attempts failed"
                );
                return (
                    Err(RetryError::Exhausted { attempts: metrics.attempts, source: failure }),
                    metrics,
                );
            }

            let delay = self.policy.delay_for(attempt);
            warn!(
                operation = operation_name,
                attempt = attempt + 1,
                max_attempts,
                delay = ?delay,
                error = %failure,
                "attempt failed, backing off"
            );

            tokio::time::sleep(delay).await;
            metrics.total_delay += delay;
            attempt += 1;
        }
    }
}

/// Convenience wrapper: execute `operation` under the given policy.
pub async fn with_retry<F, Fut, T, E>(
    policy: RetryPolicy,
    operation: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    RetryExecutor::new(policy).execute(operation).await
}
