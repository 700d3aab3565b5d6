//! Integration tests for the retry executor: timing bounds, concurrent
//! executions, and interaction with the transient-error classifier.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use shopharness_common::{AttemptError, RetryCondition, RetryExecutor, RetryPolicy};

fn policy(max_attempts: u32, base_ms: u64, timeout_ms: u64) -> RetryPolicy {
    RetryPolicy::new()
        .with_max_attempts(max_attempts)
        .unwrap()
        .with_base_delay(Duration::from_millis(base_ms))
        .unwrap()
        .with_attempt_timeout(Duration::from_millis(timeout_ms))
        .unwrap()
}

/// Total wall time for n attempts is bounded by
/// n * attempt_timeout + sum of backoff delays.
#[tokio::test]
async fn wall_time_is_bounded_by_timeouts_plus_delays() {
    let executor = RetryExecutor::new(policy(3, 10, 25));

    let started = Instant::now();
    let result = executor
        .execute(|| async { std::future::pending::<Result<(), std::io::Error>>().await })
        .await;
    let elapsed = started.elapsed();

    assert!(result.is_err());
    // 3 * 25ms timeouts + (10 + 20) * 1.1 ms delays, plus scheduler headroom
    let bound = Duration::from_millis(3 * 25 + 33 + 200);
    assert!(elapsed < bound, "{elapsed:?} exceeded {bound:?}");
}

/// Concurrent executions interleave without shared state: each owns its
/// attempt counter and finishes with its own outcome.
#[tokio::test]
async fn concurrent_executions_are_independent() {
    let mut handles = Vec::new();
    for succeed_on in 1..=3u32 {
        handles.push(tokio::spawn(async move {
            let executor = RetryExecutor::new(policy(3, 1, 1000));
            let counter = Arc::new(AtomicU32::new(0));
            let counter_clone = Arc::clone(&counter);

            let result = executor
                .execute(move || {
                    let counter = Arc::clone(&counter_clone);
                    async move {
                        let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
                        if attempt >= succeed_on {
                            Ok(attempt)
                        } else {
                            Err("connection reset".to_string())
                        }
                    }
                })
                .await;

            (succeed_on, result, counter.load(Ordering::SeqCst))
        }));
    }

    for handle in handles {
        let (succeed_on, result, invocations) = handle.await.unwrap();
        assert_eq!(result.unwrap(), succeed_on);
        assert_eq!(invocations, succeed_on, "operation invoked once per attempt");
    }
}

/// A caller can use the advisory classifier to stop early: wrapping the
/// operation so non-transient errors succeed with a sentinel avoids
/// burning the remaining attempts.
#[tokio::test]
async fn classifier_lets_callers_short_circuit() {
    let executor = RetryExecutor::new(policy(5, 1, 1000));
    let counter = Arc::new(AtomicU32::new(0));
    let counter_clone = Arc::clone(&counter);

    let condition = RetryCondition::TransientOnly;
    let result: Result<Result<(), String>, _> = executor
        .execute(move || {
            let counter = Arc::clone(&counter_clone);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                let err = std::io::Error::other("401 Unauthorized");
                if condition.should_retry(&err) {
                    Err(err.to_string())
                } else {
                    // Deterministic failure: report it as a terminal value
                    Ok(Err(err.to_string()))
                }
            }
        })
        .await;

    let inner = result.unwrap();
    assert_eq!(inner.unwrap_err(), "401 Unauthorized");
    assert_eq!(counter.load(Ordering::SeqCst), 1, "no retries for a non-transient error");
}

/// Exhaustion after a final timed-out attempt reports the timeout, not an
/// earlier operation error.
#[tokio::test]
async fn final_timeout_wins_the_last_error_slot() {
    let executor = RetryExecutor::new(policy(2, 1, 20));
    let counter = Arc::new(AtomicU32::new(0));
    let counter_clone = Arc::clone(&counter);

    let result: Result<(), _> = executor
        .execute(move || {
            let counter = Arc::clone(&counter_clone);
            async move {
                let attempt = counter.fetch_add(1, Ordering::SeqCst);
                if attempt == 0 {
                    Err("ECONNRESET".to_string())
                } else {
                    std::future::pending().await
                }
            }
        })
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.attempts(), 2);
    assert!(matches!(err.last_error(), AttemptError::TimedOut(_)));
}
