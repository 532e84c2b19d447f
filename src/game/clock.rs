use std::time::{Duration, Instant};

/// Monotonic time source for the simulation
///
/// Anchors an [`Instant`] at construction and reports elapsed time as a
/// [`Duration`], which is what `SnakeGame::advance` consumes. Keeping the
/// epoch explicit lets tests drive the tick gate with hand-built durations
/// instead of real wall-clock waits.
pub struct GameClock {
    epoch: Instant,
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    /// Time elapsed since the clock was created
    pub fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic() {
        let clock = GameClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_fresh_clock_starts_near_zero() {
        let clock = GameClock::new();
        assert!(clock.now() < Duration::from_secs(1));
    }
}
