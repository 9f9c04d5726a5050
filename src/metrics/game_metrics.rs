use std::time::{Duration, Instant};

/// Per-session statistics shown in the header
pub struct GameMetrics {
    pub round_started: Instant,
    pub round_time: Duration,
    pub high_score: u32,
    pub rounds_played: u32,
    pub foods_eaten: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            round_started: Instant::now(),
            round_time: Duration::ZERO,
            high_score: 0,
            rounds_played: 0,
            foods_eaten: 0,
        }
    }

    /// Refresh the round clock; only called while the round is live
    pub fn update(&mut self) {
        self.round_time = self.round_started.elapsed();
    }

    pub fn on_round_start(&mut self) {
        self.round_started = Instant::now();
        self.round_time = Duration::ZERO;
        self.foods_eaten = 0;
    }

    pub fn on_food(&mut self) {
        self.foods_eaten += 1;
    }

    pub fn on_round_over(&mut self, final_score: u32) {
        self.update();
        self.rounds_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.round_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.round_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.round_time = Duration::ZERO;
        assert_eq!(metrics.format_time(), "00:00");

        metrics.round_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_round_over(10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.rounds_played, 1);

        metrics.on_round_over(5);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.rounds_played, 2);

        metrics.on_round_over(15);
        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.rounds_played, 3);
    }

    #[test]
    fn test_round_start_clears_round_counters() {
        let mut metrics = GameMetrics::new();
        metrics.on_food();
        metrics.on_food();
        metrics.on_round_over(20);

        metrics.on_round_start();
        assert_eq!(metrics.foods_eaten, 0);
        assert_eq!(metrics.round_time, Duration::ZERO);
        assert_eq!(metrics.high_score, 20);
    }
}
