//! Headless batches of autopilot episodes.
//!
//! No terminal UI and no pacing: episodes run as fast as they tick, with
//! rolling statistics printed as the batch progresses. Useful for eyeballing
//! how far the greedy heuristic gets on a given grid.

use anyhow::Result;

use crate::game::GameConfig;
use crate::metrics::RunStats;
use crate::sim::{Pilot, Simulation};

/// Configuration for a headless batch
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of episodes to run
    pub episodes: usize,
    /// Tick cap per episode; a greedy snake can orbit indefinitely, so
    /// batches need a stop
    pub max_ticks: u32,
    /// Print a progress summary every N episodes
    pub log_every: usize,
    /// Grid configuration shared by every episode
    pub game: GameConfig,
    /// Seed for reproducible batches; entropy when absent
    pub seed: Option<u64>,
}

impl BenchConfig {
    pub fn new(episodes: usize, game: GameConfig, seed: Option<u64>) -> Self {
        Self {
            episodes,
            max_ticks: 10_000,
            log_every: 50,
            game,
            seed,
        }
    }
}

pub struct BenchMode {
    sim: Simulation,
    stats: RunStats,
    config: BenchConfig,
}

impl BenchMode {
    pub fn new(config: BenchConfig) -> Self {
        let sim = match config.seed {
            Some(seed) => Simulation::seeded(&config.game, Pilot::Auto, seed),
            None => Simulation::new(&config.game, Pilot::Auto),
        };

        Self {
            sim,
            stats: RunStats::new(100),
            config,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!(
            "Running {} autopilot episodes on a {}x{} grid",
            self.config.episodes, self.config.game.grid_width, self.config.game.grid_height
        );

        for episode in 1..=self.config.episodes {
            let (score, ticks) = self.run_episode();
            self.stats.record_episode(score, ticks);

            if episode % self.config.log_every == 0 {
                println!("{}", self.stats.format_summary());
            }
        }

        println!("Batch complete");
        println!("{}", self.stats.format_summary());

        Ok(())
    }

    /// One episode from a fresh spawn to game over (or the tick cap)
    fn run_episode(&mut self) -> (u32, u32) {
        self.sim.restart();

        loop {
            let result = self.sim.tick();
            if result.is_over() || self.sim.state().steps >= self.config.max_ticks {
                return (result.score, self.sim.state().steps);
            }
        }
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}
