// Retry policy: attempt budget, backoff shape, and per-attempt timeout
use std::time::Duration;

use rand::Rng;

use crate::error::{HarnessError, HarnessResult};
use crate::retry::constants::{
    DEFAULT_ATTEMPT_TIMEOUT, DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DELAY,
    JITTER_FRACTION, MAX_BACKOFF_EXPONENT, MAX_MAX_ATTEMPTS, MIN_MAX_ATTEMPTS,
};

/// Immutable retry configuration.
///
/// The delay before attempt `n + 1` is
/// `min(base_delay * 2^n + jitter, max_delay)` where `jitter` is uniform in
/// `[0, 0.1 * base_delay * 2^n]`. The one-sided jitter desynchronizes
/// concurrent retriers without ever shortening the backoff.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
    attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }
}

impl RetryPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total number of attempts (initial try included) with
    /// validation.
    pub fn with_max_attempts(mut self, attempts: u32) -> HarnessResult<Self> {
        if !(MIN_MAX_ATTEMPTS..=MAX_MAX_ATTEMPTS).contains(&attempts) {
            return Err(HarnessError::config(format!(
                "max_attempts must be between {MIN_MAX_ATTEMPTS} and {MAX_MAX_ATTEMPTS}, got {attempts}"
            )));
        }
        self.max_attempts = attempts;
        Ok(self)
    }

    /// Set the base delay for exponential backoff.
    pub fn with_base_delay(mut self, delay: Duration) -> HarnessResult<Self> {
        if delay > self.max_delay {
            return Err(HarnessError::config(format!(
                "base_delay ({:?}) cannot be greater than max_delay ({:?})",
                delay, self.max_delay
            )));
        }
        self.base_delay = delay;
        Ok(self)
    }

    /// Set the maximum delay cap.
    pub fn with_max_delay(mut self, delay: Duration) -> HarnessResult<Self> {
        if delay < self.base_delay {
            return Err(HarnessError::config(format!(
                "max_delay ({:?}) cannot be less than base_delay ({:?})",
                delay, self.base_delay
            )));
        }
        self.max_delay = delay;
        Ok(self)
    }

    /// Set the timeout applied to each individual attempt.
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> HarnessResult<Self> {
        if timeout.is_zero() {
            return Err(HarnessError::config("attempt_timeout must be positive"));
        }
        self.attempt_timeout = timeout;
        Ok(self)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    pub fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    /// Delay to wait after the given 0-based attempt fails.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let base_millis = self.base_delay.as_millis() as u64;
        let max_millis = self.max_delay.as_millis() as u64;

        // Cap the exponent so the shift cannot overflow
        let exponent = attempt.min(MAX_BACKOFF_EXPONENT);
        let exponential = base_millis.saturating_mul(2_u64.saturating_pow(exponent));

        let jittered = exponential.saturating_add(jitter_for(exponential));
        Duration::from_millis(jittered.min(max_millis))
    }

    /// Policy for critical operations: more attempts, longer budget.
    pub fn critical() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(30_000),
            attempt_timeout: Duration::from_millis(45_000),
        }
    }

    /// Policy for fast operations: short delays, tight timeout.
    pub fn fast() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_millis(5000),
            attempt_timeout: Duration::from_millis(15_000),
        }
    }

    /// Policy for long-running operations: few attempts, generous timeout.
    pub fn long_running() -> Self {
        Self {
            max_attempts: 2,
            base_delay: Duration::from_millis(5000),
            max_delay: Duration::from_millis(60_000),
            attempt_timeout: Duration::from_millis(120_000),
        }
    }

    /// Policy tuned for external API calls.
    pub fn api() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(2000),
            max_delay: Duration::from_millis(30_000),
            attempt_timeout: Duration::from_millis(30_000),
        }
    }
}

/// Uniform jitter in `[0, JITTER_FRACTION * exponential]` milliseconds.
fn jitter_for(exponential_millis: u64) -> u64 {
    let cap = exponential_millis as f64 * JITTER_FRACTION;
    if cap <= 0.0 {
        return 0;
    }
    rand::thread_rng().gen_range(0.0..=cap) as u64
}
