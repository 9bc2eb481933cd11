//! Backoff, retry and long polling
//!
//! Ledger queries are eventually consistent: a transaction is not found until
//! a block includes it. These helpers retry an async call on a stepped
//! exponential backoff until it succeeds, fails with a non-retryable error,
//! or the timeout budget would be exceeded by the next wait.
//!
//! Time is measured with [`tokio::time::Instant`], so paused test clocks
//! drive the loops deterministically.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::Instant;

/// Multiplier used by [`backoff_interval_step`] when none is configured
pub const DEFAULT_BACKOFF_MULTIPLIER: Duration = Duration::from_millis(1000);

/// Base interval of [`retry_if_error_match`] when none is configured
pub const DEFAULT_BASE_INTERVAL: Duration = Duration::from_millis(500);

/// Interval of step `n` on the backoff curve: `multiplier * 2^(n / 4)`.
///
/// Each value repeats for four steps before doubling. Saturates instead of
/// overflowing.
pub fn backoff_interval_step(n: u32, multiplier: Duration) -> Duration {
    multiplier.saturating_mul(2u32.saturating_pow(n / 4))
}

/// Non-blocking sleep
pub async fn wait_for(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// `<n>ms` below one second, otherwise seconds rounded to one decimal
/// (`2.1s`, `3s`)
pub fn format_elapsed(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();
    if ms < 1000 {
        return format!("{ms}ms");
    }
    let tenths = (ms + 50) / 100;
    if tenths % 10 == 0 {
        format!("{}s", tenths / 10)
    } else {
        format!("{}.{}s", tenths / 10, tenths % 10)
    }
}

fn display_elapsed(elapsed: &Duration) -> String {
    format_elapsed(*elapsed)
}

/// Failure of a retried operation
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// The operation failed with an error the predicate did not accept
    #[error("{0}")]
    Failed(E),

    /// The next wait would have exceeded the timeout
    #[error("timeout after {}: {last_error}", display_elapsed(.elapsed))]
    Timeout {
        /// Time spent before giving up
        elapsed: Duration,
        /// Most recent error
        last_error: E,
    },
}

impl<E> RetryError<E> {
    /// The wrapped error, whichever way the retry ended
    pub fn into_inner(self) -> E {
        match self {
            RetryError::Failed(e) => e,
            RetryError::Timeout { last_error, .. } => last_error,
        }
    }

    /// True if the retry gave up on its timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, RetryError::Timeout { .. })
    }
}

/// Outcome of one long-polling round that did not produce a result
#[derive(Debug, Error)]
pub enum PollError<E> {
    /// The fetched value did not satisfy the completion check yet
    #[error("condition not met")]
    NotDone,

    /// The fetch itself failed
    #[error("{0}")]
    Failed(E),
}

/// Timing of [`retry_if_error_match_with_config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Give up when the next wait would reach this many milliseconds (0 = never)
    pub timeout_ms: u64,
    /// Multiplier of the backoff curve in milliseconds
    pub base_interval_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 0,
            base_interval_ms: DEFAULT_BASE_INTERVAL.as_millis() as u64,
        }
    }
}

impl RetryConfig {
    /// Timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Base interval as a duration
    pub fn base_interval(&self) -> Duration {
        Duration::from_millis(self.base_interval_ms)
    }
}

/// Timing of [`long_polling_with_config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Multiplier of the backoff curve in milliseconds
    pub interval_ms: u64,
    /// Give up when the next wait would reach this many milliseconds (0 = never)
    pub timeout_ms: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            timeout_ms: 0,
        }
    }
}

impl PollingConfig {
    /// Interval as a duration
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Call `operation` until it succeeds.
///
/// On an error accepted by `matches`, waits
/// `backoff_interval_step(attempt, base_interval)` and tries again. Errors
/// `matches` rejects are returned at once as [`RetryError::Failed`]. With a
/// nonzero `timeout`, the loop ends with [`RetryError::Timeout`] as soon as
/// elapsed time plus the next wait reaches `timeout`, without sleeping.
pub async fn retry_if_error_match<F, Fut, T, E, M>(
    mut operation: F,
    mut matches: M,
    timeout: Duration,
    base_interval: Duration,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    M: FnMut(&E) -> bool,
    E: fmt::Display,
{
    let started = Instant::now();
    let mut attempt: u32 = 0;

    loop {
        let error = match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        if !matches(&error) {
            return Err(RetryError::Failed(error));
        }

        let interval = backoff_interval_step(attempt, base_interval);
        attempt = attempt.saturating_add(1);

        if !timeout.is_zero() {
            let elapsed = started.elapsed();
            if elapsed.saturating_add(interval) >= timeout {
                tracing::warn!(
                    attempts = attempt,
                    elapsed = %format_elapsed(elapsed),
                    error = %error,
                    "retry timeout exceeded"
                );
                return Err(RetryError::Timeout {
                    elapsed,
                    last_error: error,
                });
            }
        }

        let wait_ms = interval.as_millis() as u64;
        tracing::debug!(attempt, wait_ms, error = %error, "retrying after error");
        wait_for(interval).await;
    }
}

/// [`retry_if_error_match`] with timing taken from `config`
pub async fn retry_if_error_match_with_config<F, Fut, T, E, M>(
    operation: F,
    matches: M,
    config: &RetryConfig,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    M: FnMut(&E) -> bool,
    E: fmt::Display,
{
    retry_if_error_match(operation, matches, config.timeout(), config.base_interval()).await
}

/// Fetch repeatedly until `is_done` accepts the result.
///
/// Rounds where `is_done` rejects the value back off like
/// [`retry_if_error_match`] with `interval` as the multiplier. A failing
/// fetch is retried the same way, since the node answers lookups of
/// unmined transactions with an error. On timeout the last round's outcome
/// is kept: [`PollError::NotDone`] or [`PollError::Failed`].
pub async fn long_polling<F, Fut, T, E, C>(
    mut fetch: F,
    is_done: C,
    interval: Duration,
    timeout: Duration,
) -> Result<T, RetryError<PollError<E>>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: Fn(&T) -> bool,
    E: fmt::Display,
{
    let is_done = &is_done;
    let mut round: u32 = 0;

    retry_if_error_match(
        move || {
            round = round.saturating_add(1);
            tracing::trace!(round, "polling");
            let pending = fetch();
            async move {
                match pending.await {
                    Ok(value) if is_done(&value) => Ok(value),
                    Ok(_) => Err(PollError::NotDone),
                    Err(e) => {
                        tracing::debug!(round, error = %e, "poll fetch failed");
                        Err(PollError::Failed(e))
                    }
                }
            }
        },
        |_| true,
        timeout,
        interval,
    )
    .await
}

/// [`long_polling`] with timing taken from `config`
pub async fn long_polling_with_config<F, Fut, T, E, C>(
    fetch: F,
    is_done: C,
    config: &PollingConfig,
) -> Result<T, RetryError<PollError<E>>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: Fn(&T) -> bool,
    E: fmt::Display,
{
    long_polling(fetch, is_done, config.interval(), config.timeout()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_curve() {
        let step = |n| backoff_interval_step(n, DEFAULT_BACKOFF_MULTIPLIER).as_millis();
        assert_eq!(step(0), 1000);
        assert_eq!(step(3), 1000);
        assert_eq!(step(4), 2000);
        assert_eq!(step(7), 2000);
        assert_eq!(step(8), 4000);
        assert_eq!(step(24), 64000);
    }

    #[test]
    fn test_backoff_custom_multiplier() {
        let base = Duration::from_millis(500);
        assert_eq!(backoff_interval_step(0, base), base);
        assert_eq!(backoff_interval_step(5, base), Duration::from_millis(1000));
    }

    #[test]
    fn test_backoff_saturates() {
        assert_eq!(
            backoff_interval_step(u32::MAX, Duration::from_secs(u64::MAX / 2)),
            Duration::MAX
        );
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(0)), "0ms");
        assert_eq!(format_elapsed(Duration::from_millis(999)), "999ms");
        assert_eq!(format_elapsed(Duration::from_millis(1000)), "1s");
        assert_eq!(format_elapsed(Duration::from_millis(2100)), "2.1s");
        assert_eq!(format_elapsed(Duration::from_millis(2149)), "2.1s");
        assert_eq!(format_elapsed(Duration::from_millis(2150)), "2.2s");
        assert_eq!(format_elapsed(Duration::from_millis(2960)), "3s");
    }

    #[test]
    fn test_timeout_message() {
        let err: RetryError<&str> = RetryError::Timeout {
            elapsed: Duration::from_millis(1500),
            last_error: "tx not found",
        };
        assert_eq!(err.to_string(), "timeout after 1.5s: tx not found");
        assert!(err.is_timeout());
        assert_eq!(err.into_inner(), "tx not found");
    }

    #[test]
    fn test_config_defaults() {
        assert_eq!(RetryConfig::default().base_interval(), DEFAULT_BASE_INTERVAL);
        assert!(RetryConfig::default().timeout().is_zero());
        assert_eq!(PollingConfig::default().interval(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_immediate_success() {
        let result: Result<u32, RetryError<String>> = retry_if_error_match(
            || async { Ok(7) },
            |_| true,
            Duration::ZERO,
            DEFAULT_BASE_INTERVAL,
        )
        .await;
        assert_eq!(result.unwrap(), 7);
    }
}
