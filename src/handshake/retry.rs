use std::time::Duration;

/// Initial backoff delay in milliseconds for web auth failures.
const BACKOFF_FLOOR_MS: u64 = 1000;

/// Backoff ceiling in milliseconds. A rate-limited response jumps the
/// delay straight here instead of climbing gradually.
const BACKOFF_CEILING_MS: u64 = 50_000;

/// How a web auth attempt failed, as far as backoff is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    RateLimited,
    Other,
}

/// Owns the retry delay for one logical session.
///
/// The delay doubles per failure up to the ceiling and is never reset,
/// not even after a successful handshake; it lives as long as the
/// underlying connection.
#[derive(Debug, Default)]
pub struct RetryScheduler {
    delay_ms: Option<u64>,
}

impl RetryScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure and return the delay to wait before retrying.
    pub fn on_failure(&mut self, kind: FailureKind) -> Duration {
        if kind == FailureKind::RateLimited {
            self.delay_ms = Some(BACKOFF_CEILING_MS);
        }

        let next = match self.delay_ms {
            Some(current) => current.saturating_mul(2).min(BACKOFF_CEILING_MS),
            None => BACKOFF_FLOOR_MS,
        };
        self.delay_ms = Some(next);
        Duration::from_millis(next)
    }

    /// Currently configured delay, if any failure has been recorded.
    pub fn current_delay(&self) -> Option<Duration> {
        self.delay_ms.map(Duration::from_millis)
    }
}
