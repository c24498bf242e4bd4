//! Retry Policy
//!
//! Bounded exponential backoff for transport failures. The sleep is
//! injected so the same loop runs on browser timers and in tests.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::LoadResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts including the first one
    pub max_attempts: u32,
    pub base_delay_ms: u32,
    pub max_delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 250,
            max_delay_ms: 2_000,
        }
    }
}

impl RetryPolicy {
    /// No retries at all.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay before attempt `attempt + 1`, where `attempt` counts the
    /// failures so far (1-based).
    pub fn delay_ms(&self, attempt: u32) -> u32 {
        let shift = attempt.saturating_sub(1).min(16);
        self.base_delay_ms
            .saturating_mul(1u32 << shift)
            .min(self.max_delay_ms)
    }

    /// Run `op` until it succeeds, fails with a non-retryable error, or
    /// the attempts run out. Returns the last error.
    pub async fn run<T, Op, Fut, Sleep, SleepFut>(&self, mut op: Op, sleep: Sleep) -> LoadResult<T>
    where
        Op: FnMut() -> Fut,
        Fut: Future<Output = LoadResult<T>>,
        Sleep: Fn(u32) -> SleepFut,
        SleepFut: Future<Output = ()>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < self.max_attempts.max(1) => {
                    let delay = self.delay_ms(attempt);
                    tracing::warn!("attempt {} failed ({}), retrying in {}ms", attempt, err, delay);
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
