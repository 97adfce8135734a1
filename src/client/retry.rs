//! Retry wrapper for transient upstream failures.

use std::future::Future;
use std::time::Duration;
use tracing::warn;

use super::transport::TransportError;

/// Run `op` up to `max_attempts` times with linearly increasing backoff:
/// attempt `n` is followed by a `n * base_delay` pause before the next try.
///
/// `label` names the lookup in the warning emitted per failed attempt.
pub async fn with_retry<T, F, Fut>(
    label: &str,
    max_attempts: u32,
    base_delay: Duration,
    mut op: F,
) -> Result<T, TransportError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, TransportError>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts => {
                warn!(%err, attempt, max_attempts, "{label} lookup failed, retrying");
                tokio::time::sleep(base_delay * attempt).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn succeeds_without_retrying() {
        let calls = AtomicU32::new(0);
        let result = with_retry("test", 3, Duration::from_secs(1), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, TransportError>(42) }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn retries_until_the_budget_is_exhausted() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, _> = with_retry("test", 3, Duration::from_secs(1), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(TransportError::Status(503)) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn recovers_when_a_later_attempt_succeeds() {
        let calls = AtomicU32::new(0);
        let result = with_retry("test", 3, Duration::from_secs(1), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(TransportError::Request("connection reset".to_string()))
                } else {
                    Ok(7)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn backoff_grows_linearly() {
        let start = tokio::time::Instant::now();
        let _: Result<u32, _> = with_retry("test", 3, Duration::from_secs(1), || async {
            Err(TransportError::Status(500))
        })
        .await;

        // 1s after attempt 1 plus 2s after attempt 2.
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }
}
