//! Greedy one-step-lookahead steering.
//!
//! Each tick the planner shuffles the four directions, discards the ones
//! whose next head cell would collide, and takes the survivor closest to the
//! food by Manhattan distance, preferring the current heading on exact ties.
//! If no survivor scored at all it falls back to the first safe direction in
//! the same shuffled order, and if nothing is safe it keeps the current
//! heading and lets the collision check end the run.
//!
//! The heuristic evaluates a single ply only. It can and does walk the snake
//! into topological traps a deeper search would avoid; that behavior is part
//! of the contract, not something to fix with graph search.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::game::collision;
use crate::game::{Direction, Grid, Position, Snake};

/// Movement planner with its own tie-breaking randomness
pub struct GreedyPlanner {
    rng: StdRng,
}

impl GreedyPlanner {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Planner with deterministic tie-breaking, for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick the next direction for the snake.
    ///
    /// Reads the snake and food as immutable snapshots and mutates nothing
    /// but its own RNG, so it is safe to call any number of times per tick.
    /// The returned direction may be the exact reverse of the current
    /// heading; `Snake::change_direction` drops such requests at the single
    /// point the no-reversal rule is enforced.
    pub fn decide(&mut self, snake: &Snake, food: Position, grid: Grid) -> Direction {
        // Shuffled so that ties between equally good moves break randomly
        let mut candidates = Direction::ALL;
        candidates.shuffle(&mut self.rng);

        let mut best = snake.direction;
        let mut best_distance = u32::MAX;

        for &candidate in &candidates {
            if collision::would_collide(&snake.body, candidate, snake.grow_pending, grid) {
                continue;
            }

            let distance = snake.head().step(candidate).manhattan(food);
            if distance < best_distance {
                best_distance = distance;
                best = candidate;
            } else if distance == best_distance && candidate == snake.direction {
                // Exact tie: keep heading straight to cut down on zig-zag
                best = candidate;
            }
        }

        if best_distance == u32::MAX {
            // No candidate survived the look-ahead scoring. Ignore the food
            // and take the first move that survives, in the same shuffled
            // order; with nothing safe the current heading falls through and
            // the next advance ends the run.
            for &candidate in &candidates {
                if !collision::would_collide(&snake.body, candidate, snake.grow_pending, grid) {
                    return candidate;
                }
            }
        }

        best
    }
}

impl Default for GreedyPlanner {
    fn default() -> Self {
        Self::new()
    }
}
