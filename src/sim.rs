//! Tick-driven simulation facade.
//!
//! One full step (plan, steer, advance, eat check, collision check) runs to
//! completion inside `tick()`; the core never sleeps or awaits. Pacing is
//! the front-end's job: the TUI modes call `tick()` from a timer, the bench
//! mode calls it in a tight loop.

use std::time::SystemTime;

use crate::game::{Action, Direction, GameConfig, GameEngine, GamePhase, GameState, Position};
use crate::planner::GreedyPlanner;

/// Who steers the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pilot {
    /// The greedy planner decides every tick
    Auto,
    /// Pending keyboard requests decide; ticks with no request continue
    /// straight
    Manual,
}

/// Snapshot handed to the front-end after each tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    /// Body cells, head first
    pub body: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub phase: GamePhase,
}

impl TickResult {
    pub fn is_over(&self) -> bool {
        !matches!(self.phase, GamePhase::Running)
    }

    /// When the run ended, if it has
    pub fn ended_at(&self) -> Option<SystemTime> {
        match self.phase {
            GamePhase::Running => None,
            GamePhase::GameOver { ended_at, .. } => Some(ended_at),
        }
    }
}

/// One simulation: engine, planner, and the current run's state
pub struct Simulation {
    engine: GameEngine,
    planner: GreedyPlanner,
    state: GameState,
    pilot: Pilot,
    requested: Option<Direction>,
}

impl Simulation {
    pub fn new(config: &GameConfig, pilot: Pilot) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        Self {
            engine,
            planner: GreedyPlanner::new(),
            state,
            pilot,
            requested: None,
        }
    }

    /// Fully reproducible simulation: one seed covers spawns and the
    /// planner's tie-breaking
    pub fn seeded(config: &GameConfig, pilot: Pilot, seed: u64) -> Self {
        let mut engine = GameEngine::seeded(config, seed);
        let state = engine.reset();
        Self {
            engine,
            planner: GreedyPlanner::seeded(seed.wrapping_add(1)),
            state,
            pilot,
            requested: None,
        }
    }

    /// Advance the simulation one step and return a snapshot. Once the run
    /// is over, further ticks leave the frozen state untouched.
    pub fn tick(&mut self) -> TickResult {
        let action = match self.pilot {
            Pilot::Auto => {
                let direction =
                    self.planner
                        .decide(&self.state.snake, self.state.food, self.engine.grid());
                Action::Move(direction)
            }
            Pilot::Manual => self
                .requested
                .take()
                .map(Action::Move)
                .unwrap_or(Action::Continue),
        };

        self.engine.step(&mut self.state, action);
        self.snapshot()
    }

    /// Queue a steering request for the next tick. Reversals are dropped at
    /// apply time by `Snake::change_direction`; the autopilot never consults
    /// this.
    pub fn change_requested_direction(&mut self, direction: Direction) {
        self.requested = Some(direction);
    }

    /// Discard the current run and start a fresh one
    pub fn restart(&mut self) {
        self.state = self.engine.reset();
        self.requested = None;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pilot(&self) -> Pilot {
        self.pilot
    }

    fn snapshot(&self) -> TickResult {
        TickResult {
            body: self.state.snake.body.iter().copied().collect(),
            food: self.state.food,
            score: self.state.snake.score,
            phase: self.state.phase,
        }
    }
}
