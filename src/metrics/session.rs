use std::time::{Duration, Instant};

/// Per-session bookkeeping shown in the TUI header: how long the current
/// run has been going, the best score so far, and how many runs finished.
pub struct SessionMetrics {
    run_started: Instant,
    run_elapsed: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            run_started: Instant::now(),
            run_elapsed: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the elapsed clock; called once per rendered frame
    pub fn update(&mut self) {
        self.run_elapsed = self.run_started.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.run_started = Instant::now();
        self.run_elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    /// Current run time as mm:ss
    pub fn format_elapsed(&self) -> String {
        let total_secs = self.run_elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_formatting() {
        let mut metrics = SessionMetrics::new();

        metrics.run_elapsed = Duration::from_secs(0);
        assert_eq!(metrics.format_elapsed(), "00:00");

        metrics.run_elapsed = Duration::from_secs(125);
        assert_eq!(metrics.format_elapsed(), "02:05");

        metrics.run_elapsed = Duration::from_secs(3661);
        assert_eq!(metrics.format_elapsed(), "61:01");
    }

    #[test]
    fn test_high_score_only_climbs() {
        let mut metrics = SessionMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_game_start_resets_the_clock() {
        let mut metrics = SessionMetrics::new();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert!(metrics.run_elapsed.as_millis() >= 20);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.run_elapsed.as_millis() < 20);
    }
}
