use std::time::{Duration, Instant};

use super::persistence::StatsRecord;

/// Session statistics, updated at phase transitions
///
/// Wraps the persisted counters with the in-session state that never hits
/// disk: the running clock and the current streak.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub stats: StatsRecord,
    pub current_streak: u32,
}

impl GameMetrics {
    pub fn new(stats: StatsRecord) -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            stats,
            current_streak: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    /// Fold a finished game into the counters
    ///
    /// Any scoring game extends the streak; a zero-score game breaks it.
    pub fn on_game_over(&mut self, final_score: u32) {
        self.stats.games_played += 1;

        if final_score > self.stats.high_score {
            self.stats.high_score = final_score;
        }

        if final_score > 0 {
            self.current_streak += 1;
            if self.current_streak > self.stats.best_streak {
                self.stats.best_streak = self.current_streak;
            }
        } else {
            self.current_streak = 0;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new(StatsRecord::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::default();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::default();

        metrics.on_game_over(10);
        assert_eq!(metrics.stats.high_score, 10);
        assert_eq!(metrics.stats.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.stats.high_score, 10); // Should not decrease
        assert_eq!(metrics.stats.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.stats.high_score, 15);
        assert_eq!(metrics.stats.games_played, 3);
    }

    #[test]
    fn test_streak_tracking() {
        let mut metrics = GameMetrics::default();

        metrics.on_game_over(10);
        metrics.on_game_over(20);
        metrics.on_game_over(10);
        assert_eq!(metrics.current_streak, 3);
        assert_eq!(metrics.stats.best_streak, 3);

        metrics.on_game_over(0); // breaks the streak
        assert_eq!(metrics.current_streak, 0);
        assert_eq!(metrics.stats.best_streak, 3);

        metrics.on_game_over(10);
        assert_eq!(metrics.current_streak, 1);
        assert_eq!(metrics.stats.best_streak, 3);
    }

    #[test]
    fn test_loaded_counters_are_kept() {
        let stats = StatsRecord {
            high_score: 50,
            games_played: 7,
            best_streak: 2,
        };
        let mut metrics = GameMetrics::new(stats);

        metrics.on_game_over(30);
        assert_eq!(metrics.stats.high_score, 50); // loaded high score stands
        assert_eq!(metrics.stats.games_played, 8);
        assert_eq!(metrics.stats.best_streak, 2); // fresh streak of 1 does not beat it
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::default();
        metrics.elapsed_time = Duration::from_secs(99);

        metrics.on_game_start();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);
    }
}
