//! Rolling statistics over batches of autopilot episodes.
//!
//! The bench mode records one entry per finished episode; recent-window
//! means smooth out the noise while the totals keep the whole batch.

use std::collections::VecDeque;

/// Episode statistics with rolling windows
#[derive(Debug, Clone)]
pub struct RunStats {
    /// Recent episode scores
    scores: VecDeque<u32>,
    /// Recent episode lengths in ticks
    lengths: VecDeque<u32>,
    /// Best score across the whole batch
    best_score: u32,
    /// Episodes recorded across the whole batch
    total_episodes: usize,
    /// Window size for the rolling views
    window: usize,
}

impl RunStats {
    pub fn new(window: usize) -> Self {
        Self {
            scores: VecDeque::with_capacity(window),
            lengths: VecDeque::with_capacity(window),
            best_score: 0,
            total_episodes: 0,
            window,
        }
    }

    /// Record one finished episode
    pub fn record_episode(&mut self, score: u32, ticks: u32) {
        if self.scores.len() == self.window {
            self.scores.pop_front();
            self.lengths.pop_front();
        }
        self.scores.push_back(score);
        self.lengths.push_back(ticks);

        self.best_score = self.best_score.max(score);
        self.total_episodes += 1;
    }

    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Mean score over the rolling window
    pub fn mean_score(&self) -> f64 {
        mean(&self.scores)
    }

    /// Mean episode length over the rolling window, in ticks
    pub fn mean_length(&self) -> f64 {
        mean(&self.lengths)
    }

    /// One-line progress summary for the headless runner
    pub fn format_summary(&self) -> String {
        format!(
            "episodes: {:>5} | mean score: {:6.2} | best: {:>3} | mean ticks: {:8.1}",
            self.total_episodes,
            self.mean_score(),
            self.best_score,
            self.mean_length(),
        )
    }
}

fn mean(values: &VecDeque<u32>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = RunStats::new(10);
        assert_eq!(stats.total_episodes(), 0);
        assert_eq!(stats.best_score(), 0);
        assert_eq!(stats.mean_score(), 0.0);
        assert_eq!(stats.mean_length(), 0.0);
    }

    #[test]
    fn test_means_and_best() {
        let mut stats = RunStats::new(10);
        stats.record_episode(4, 100);
        stats.record_episode(8, 300);

        assert_eq!(stats.total_episodes(), 2);
        assert_eq!(stats.best_score(), 8);
        assert_eq!(stats.mean_score(), 6.0);
        assert_eq!(stats.mean_length(), 200.0);
    }

    #[test]
    fn test_window_rolls_but_totals_do_not() {
        let mut stats = RunStats::new(2);
        stats.record_episode(10, 10);
        stats.record_episode(2, 20);
        stats.record_episode(4, 30);

        // Window holds the last two episodes only
        assert_eq!(stats.mean_score(), 3.0);
        assert_eq!(stats.mean_length(), 25.0);
        // Batch-wide views still remember everything
        assert_eq!(stats.total_episodes(), 3);
        assert_eq!(stats.best_score(), 10);
    }

    #[test]
    fn test_summary_mentions_the_key_numbers() {
        let mut stats = RunStats::new(10);
        stats.record_episode(7, 140);

        let summary = stats.format_summary();
        assert!(summary.contains("episodes:"));
        assert!(summary.contains('7'));
        assert!(summary.contains("140"));
    }
}
