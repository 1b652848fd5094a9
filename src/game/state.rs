use std::collections::VecDeque;
use std::time::SystemTime;

use super::action::Direction;
use super::grid::Grid;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift position by delta
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighboring cell one step in a direction
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// Manhattan distance to another cell
    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// The snake: an ordered body with the head at the front
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body cells, head first. No two cells coincide while the snake is
    /// alive; a head overlapping the body is the collision condition.
    pub body: VecDeque<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Set by grow(), consumed by the next advance()
    pub grow_pending: bool,
    /// Food eaten this run
    pub score: u32,
}

impl Snake {
    /// A single-segment snake at the given cell
    pub fn new(start: Position, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([start]),
            direction,
            grow_pending: false,
            score: 0,
        }
    }

    /// The first body cell
    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Steer toward the requested direction. An exact reversal is silently
    /// ignored; this is routine input filtering, not a fault.
    pub fn change_direction(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.direction = requested;
        }
    }

    /// Move one cell in the current direction. The tail slides along unless
    /// a growth is pending, in which case the flag is consumed and the body
    /// gains a segment. This is the only place body length changes.
    pub fn advance(&mut self) {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop_back();
        }
    }

    /// Record an eaten food. The extra segment appears on the next
    /// advance(), not immediately.
    pub fn grow(&mut self) {
        self.grow_pending = true;
        self.score += 1;
    }
}

/// Type of collision that ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the grid
    Wall,
    /// Head ran into the body
    SelfCollision,
}

/// Whether the simulation is still going
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GamePhase {
    Running,
    /// Terminal. Only an explicit restart produces a fresh Running state.
    GameOver {
        ended_at: SystemTime,
        final_score: u32,
    },
}

/// Complete game state for one run
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid: Grid,
    pub steps: u32,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new(snake: Snake, food: Position, grid: Grid) -> Self {
        Self {
            snake,
            food,
            grid,
            steps: 0,
            phase: GamePhase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, GamePhase::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_offsets() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.offset(1, 0), Position::new(6, 5));
        assert_eq!(pos.offset(-1, 0), Position::new(4, 5));
        assert_eq!(pos.step(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.step(Direction::Down), Position::new(5, 6));
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Position::new(0, 0).manhattan(Position::new(3, 4)), 7);
        assert_eq!(Position::new(3, 4).manhattan(Position::new(0, 0)), 7);
        assert_eq!(Position::new(-2, 1).manhattan(Position::new(2, 1)), 4);
        assert_eq!(Position::new(5, 5).manhattan(Position::new(5, 5)), 0);
    }

    #[test]
    fn test_snake_starts_as_single_segment() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.score, 0);
        assert!(!snake.grow_pending);
    }

    #[test]
    fn test_advance_slides_the_tail() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);
        snake.advance();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(6, 5));
    }

    #[test]
    fn test_growth_is_one_tick_delayed() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);

        snake.grow();
        // No advance yet: length unchanged, score already counted
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.score, 1);
        assert!(snake.grow_pending);

        snake.advance();
        assert_eq!(snake.len(), 2);
        assert!(!snake.grow_pending);

        // Flag consumed: the next advance slides the tail again
        snake.advance();
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);

        snake.change_direction(Direction::Left);
        assert_eq!(snake.direction, Direction::Right);

        snake.change_direction(Direction::Up);
        assert_eq!(snake.direction, Direction::Up);

        snake.change_direction(Direction::Down);
        assert_eq!(snake.direction, Direction::Up);
    }

    #[test]
    fn test_body_order_is_head_first() {
        let mut snake = Snake::new(Position::new(3, 3), Direction::Right);
        snake.grow();
        snake.advance();
        snake.grow();
        snake.advance();

        let cells: Vec<Position> = snake.body.iter().copied().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(5, 3),
                Position::new(4, 3),
                Position::new(3, 3)
            ]
        );
    }
}
