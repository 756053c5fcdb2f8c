//! Minimum-interval dispatch throttle for keystroke debouncing.
//!
//! The last-dispatch timestamp lives on the throttle itself, so each session
//! debounces independently.

use std::time::Duration;

use tokio::time::Instant;

/// Delays a dispatch until `min_interval` has passed since the previous one.
#[derive(Debug, Clone)]
pub struct DispatchThrottle {
    min_interval: Duration,
    last_dispatch: Option<Instant>,
}

impl DispatchThrottle {
    /// Create a throttle that has never dispatched.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_dispatch: None,
        }
    }

    /// Configured minimum interval.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// When the previous dispatch happened, if any.
    pub fn last_dispatch(&self) -> Option<Instant> {
        self.last_dispatch
    }

    /// How long a dispatch at `now` would have to wait.
    pub fn delay_at(&self, now: Instant) -> Duration {
        match self.last_dispatch {
            Some(last) => (last + self.min_interval).saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }

    /// Wait for this dispatch's turn, then record it. Returns the time waited.
    pub async fn wait_turn(&mut self) -> Duration {
        let now = Instant::now();
        let delay = self.delay_at(now);
        if !delay.is_zero() {
            tracing::trace!(?delay, "throttling dispatch");
            tokio::time::sleep_until(now + delay).await;
        }
        self.last_dispatch = Some(Instant::now());
        delay
    }
}
