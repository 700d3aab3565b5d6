//! Foundation utilities shared across the shopharness crates.
//!
//! Two independent pieces live here:
//! - [`retry`]: bounded retries with exponential backoff, jitter, and a
//!   per-attempt timeout for flaky remote calls.
//! - [`mock`]: an insertion-ordered registry of canned HTTP responses used
//!   to answer intercepted requests without real network traffic.
//!
//! Both are consumed by test code through `shopharness-client`.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod error;
pub mod mock;
pub mod retry;

// Re-export commonly used types for convenience
pub use error::{HarnessError, HarnessResult};
pub use mock::{MockMethod, MockResponse, MockRoute, RouteRegistry, UrlMatcher};
pub use retry::{
    is_retryable_error, AttemptError, RetryCondition, RetryError, RetryExecutor, RetryMetrics,
    RetryPolicy,
};
