//! Retry with exponential backoff for requests that received no response.
//!
//! Only transport failures (connection refused, reset, timeout) are retried.
//! A response with any status code is returned to the caller as is, and a
//! request that could not be built fails immediately.

use std::time::Duration;

/// Base delay between retries (doubles each attempt: 200ms, 400ms, 800ms).
const BASE_DELAY_MS: u64 = 200;

/// Longest delay between two attempts.
const MAX_DELAY_MS: u64 = 10_000;

fn backoff(attempt: u32) -> Duration {
    let factor = 2u64.saturating_pow(attempt);
    Duration::from_millis(BASE_DELAY_MS.saturating_mul(factor).min(MAX_DELAY_MS))
}

/// Send an HTTP request, retrying transport errors up to `max_retries` times.
///
/// The closure `f` is called up to `max_retries + 1` times. With
/// `max_retries == 0` this is a single send.
pub(crate) async fn retry_send<F, Fut>(
    max_retries: u32,
    f: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    for attempt in 0..max_retries {
        match f().await {
            Ok(resp) => return Ok(resp),
            Err(e) if e.is_builder() => return Err(e),
            Err(e) => {
                let delay = backoff(attempt);
                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries,
                    "Pickup Mtaani request failed, retrying in {delay:?}: {e}"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
    // Final attempt, no more retries.
    f().await
}
