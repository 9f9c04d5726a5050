use std::time::Duration;

/// Fixed-rate tick scheduler fed with wall-clock frame times.
///
/// Elapsed time is accumulated and converted into whole ticks, so the
/// simulation rate is independent of how often frames are drawn.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    accumulated: Duration,
    /// Upper bound on ticks released by one call, to survive long stalls
    max_catch_up: u32,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulated: Duration::ZERO,
            max_catch_up: 5,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Add `elapsed` and return how many ticks are now due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }

        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            due += 1;
        }

        if due > self.max_catch_up {
            // Drop the backlog rather than fast-forwarding the snake
            self.accumulated = Duration::ZERO;
            due = self.max_catch_up;
        }
        due
    }

    /// Forget any partially accumulated tick
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
