use crate::constants::SWAP_ANIMATION_MS;
use std::time::{Duration, Instant};

/// Cosmetic rotation of the swap button.
///
/// Two states: idle, or animating since an instant. Animating turns back into
/// idle once `duration` has elapsed or when [`SwapAnimation::finish`] is
/// called. Nothing in the conversion waits on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapAnimation {
    duration: Duration,
    started_at: Option<Instant>,
}

impl SwapAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Restarts the rotation at `now`.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn finish(&mut self) {
        self.started_at = None;
    }

    pub fn is_active(&self, now: Instant) -> bool {
        match self.started_at {
            Some(started) => now.saturating_duration_since(started) < self.duration,
            None => false,
        }
    }
}

impl Default for SwapAnimation {
    fn default() -> Self {
        Self::new(Duration::from_millis(SWAP_ANIMATION_MS))
    }
}
