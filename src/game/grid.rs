use rand::Rng;

use super::config::GameConfig;
use super::state::Position;

/// The playing field: immutable cell bounds for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check if a position is within the grid bounds
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// The cell the snake starts on
    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Draw a cell uniformly at random over the whole grid
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Position {
        let x = rng.gen_range(0..self.width) as i32;
        let y = rng.gen_range(0..self.height) as i32;
        Position::new(x, y)
    }
}

impl From<&GameConfig> for Grid {
    fn from(config: &GameConfig) -> Self {
        Self::new(config.grid_width, config.grid_height)
    }
}
