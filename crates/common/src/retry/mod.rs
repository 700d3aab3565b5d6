// Retry module with exponential backoff, jitter, and per-attempt timeouts

pub mod classify;
pub mod constants;
pub mod error;
pub mod executor;
pub mod metrics;
pub mod policy;

pub use classify::{is_retryable_error, is_retryable_message, RetryCondition};
pub use error::{AttemptError, RetryError};
pub use executor::{with_retry, RetryExecutor};
pub use metrics::RetryMetrics;
pub use policy::RetryPolicy;
