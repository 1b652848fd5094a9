use std::time::SystemTime;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    action::{Action, Direction},
    collision,
    config::GameConfig,
    food,
    grid::Grid,
    state::{CollisionType, GamePhase, GameState, Snake},
};

/// What happened on a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// The collision that ended the run, if one occurred
    pub collision: Option<CollisionType>,
}

/// The game engine that owns the grid, the randomness, and the tick rule
pub struct GameEngine {
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: &GameConfig) -> Self {
        Self {
            grid: Grid::from(config),
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with deterministic spawn/heading randomness
    pub fn seeded(config: &GameConfig, seed: u64) -> Self {
        Self {
            grid: Grid::from(config),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// A fresh run: single-segment snake at the grid center with a random
    /// heading, food placed off the body
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.grid.center(), Direction::random(&mut self.rng));
        let food = food::spawn(&mut self.rng, self.grid, &snake.body);
        GameState::new(snake, food, self.grid)
    }

    /// Execute one tick: steer, advance, eat, then check the moved snake.
    /// A finished game is left untouched.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepOutcome {
        if !state.is_running() {
            return StepOutcome::default();
        }

        if let Action::Move(direction) = action {
            state.snake.change_direction(direction);
        }

        state.snake.advance();

        // Only the head ever reaches new cells, so landing on the food cell
        // is the one way the two can overlap
        let ate_food = state.snake.head() == state.food;
        if ate_food {
            state.snake.grow();
            state.food = food::spawn(&mut self.rng, self.grid, &state.snake.body);
        }

        let collision = collision::check(&state.snake, self.grid);
        if collision.is_some() {
            state.phase = GamePhase::GameOver {
                ended_at: SystemTime::now(),
                final_score: state.snake.score,
            };
        }

        state.steps += 1;

        StepOutcome { ate_food, collision }
    }
}
