// Error types for the retry module
use std::time::Duration;

use thiserror::Error;

/// Failure of a single attempt within a retry sequence.
///
/// A timed-out attempt is treated identically to an operation failure for
/// retry accounting; the distinction only matters when reporting the final
/// error to the caller.
#[derive(Debug, Error)]
pub enum AttemptError<E> {
    /// The wrapped operation itself failed.
    #[error("operation failed: {0}")]
    Operation(E),

    /// The attempt did not complete within the per-attempt timeout.
    #[error("attempt timed out after {0:?}")]
    TimedOut(Duration),
}

impl<E> AttemptError<E> {
    /// Whether this attempt failed by timing out rather than by the
    /// operation's own error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut(_))
    }

    /// The underlying operation error, if any.
    pub fn into_operation_error(self) -> Option<E> {
        match self {
            Self::Operation(err) => Some(err),
            Self::TimedOut(_) => None,
        }
    }
}

/// Terminal error raised once every allowed attempt has failed.
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// All attempts were used up; carries the attempt count and the most
    /// recent underlying failure.
    #[error("all retry attempts exhausted after {attempts} attempts: {source}")]
    Exhausted { attempts: u32, source: AttemptError<E> },
}

impl<E> RetryError<E> {
    /// Number of attempts made before giving up.
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Exhausted { attempts, .. } => *attempts,
        }
    }

    /// The failure recorded on the final attempt.
    pub fn last_error(&self) -> &AttemptError<E> {
        match self {
            Self::Exhausted { source, .. } => source,
        }
    }
}
