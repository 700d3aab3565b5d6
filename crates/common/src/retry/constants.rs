// Constants for the retry module
use std::time::Duration;

/// Default maximum number of attempts (initial try included).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default base delay for exponential backoff.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Default maximum delay cap.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(30_000);

/// Default timeout applied to each individual attempt.
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Jitter fraction added on top of the exponential delay (one-sided).
pub const JITTER_FRACTION: f64 = 0.1;

/// Maximum exponent for the backoff calculation to prevent overflow.
pub const MAX_BACKOFF_EXPONENT: u32 = 30;

/// Minimum allowed max_attempts value.
pub const MIN_MAX_ATTEMPTS: u32 = 1;

/// Maximum allowed max_attempts value.
pub const MAX_MAX_ATTEMPTS: u32 = 100;
