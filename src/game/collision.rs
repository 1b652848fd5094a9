//! The wall/self collision rule, in two forms: a check against the real,
//! already-moved snake, and a look-ahead over a hypothetical next move.
//! Both forms funnel into the same predicate so the game loop and the
//! planner can never disagree about what counts as a collision.

use std::collections::VecDeque;

use super::action::Direction;
use super::grid::Grid;
use super::state::{CollisionType, Position, Snake};

/// The single bounds/self-overlap rule: a head cell collides if it left the
/// grid or coincides with any non-head body cell.
fn head_blocked(
    head: Position,
    rest: impl Iterator<Item = Position>,
    grid: Grid,
) -> Option<CollisionType> {
    if !grid.in_bounds(head) {
        return Some(CollisionType::Wall);
    }
    let mut rest = rest;
    if rest.any(|cell| cell == head) {
        return Some(CollisionType::SelfCollision);
    }
    None
}

/// Evaluate the collision rule on the real snake, after it has advanced
pub fn check(snake: &Snake, grid: Grid) -> Option<CollisionType> {
    head_blocked(snake.head(), snake.body.iter().skip(1).copied(), grid)
}

/// Would moving one step in `direction` collide? Builds the hypothetical
/// next body (head prepended, tail popped unless a growth is pending)
/// without touching real state, then applies the same rule as `check`.
pub fn would_collide(
    body: &VecDeque<Position>,
    direction: Direction,
    grow_pending: bool,
    grid: Grid,
) -> bool {
    let next_head = body[0].step(direction);

    // Non-head cells of the hypothetical body: the current body minus the
    // tail cell that slides away, unless growth keeps it in place.
    let kept = if grow_pending {
        body.len()
    } else {
        body.len() - 1
    };

    head_blocked(next_head, body.iter().take(kept).copied(), grid).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_with_body(cells: &[(i32, i32)], direction: Direction) -> Snake {
        let mut snake = Snake::new(Position::new(cells[0].0, cells[0].1), direction);
        snake.body = cells.iter().map(|&(x, y)| Position::new(x, y)).collect();
        snake
    }

    #[test]
    fn test_head_inside_grid_is_clear() {
        // Body (2,2)-(2,3) heading up; after the move the head sits at (2,1)
        let mut snake = snake_with_body(&[(2, 2), (2, 3)], Direction::Up);
        snake.advance();
        assert_eq!(snake.head(), Position::new(2, 1));
        assert_eq!(check(&snake, Grid::new(10, 4)), None);
    }

    #[test]
    fn test_head_leaving_the_top_row_hits_the_wall() {
        let mut snake = snake_with_body(&[(2, 0), (2, 1)], Direction::Up);
        snake.advance();
        assert_eq!(snake.head(), Position::new(2, -1));
        assert_eq!(check(&snake, Grid::new(10, 2)), Some(CollisionType::Wall));
    }

    #[test]
    fn test_closed_loop_self_collision() {
        // A closed 2x2 loop; the next head lands on (5,6), an occupied cell
        let snake = snake_with_body(&[(5, 5), (5, 6), (6, 6), (6, 5)], Direction::Down);
        let grid = Grid::new(10, 10);

        assert!(would_collide(
            &snake.body,
            Direction::Down,
            snake.grow_pending,
            grid
        ));

        let mut moved = snake;
        moved.advance();
        assert_eq!(moved.head(), Position::new(5, 6));
        assert_eq!(check(&moved, grid), Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_lookahead_lets_the_tail_slide_away() {
        // Head chasing its own tail around the 2x2 loop: stepping onto the
        // tail cell is legal, because the tail moves off it on the same tick
        let snake = snake_with_body(&[(5, 5), (5, 6), (6, 6), (6, 5)], Direction::Right);
        let grid = Grid::new(10, 10);

        assert!(!would_collide(&snake.body, Direction::Right, false, grid));

        // With growth pending the tail stays put and the same move collides
        assert!(would_collide(&snake.body, Direction::Right, true, grid));
    }

    #[test]
    fn test_lookahead_matches_real_check() {
        let grid = Grid::new(8, 8);
        let snake = snake_with_body(&[(1, 1), (1, 2), (2, 2)], Direction::Up);

        for direction in Direction::ALL {
            let predicted = would_collide(&snake.body, direction, snake.grow_pending, grid);

            let mut trial = snake.clone();
            trial.direction = direction;
            trial.advance();
            let actual = check(&trial, grid).is_some();

            assert_eq!(predicted, actual, "diverged for {direction:?}");
        }
    }

    #[test]
    fn test_single_segment_cannot_hit_itself() {
        let snake = Snake::new(Position::new(0, 0), Direction::Right);
        let grid = Grid::new(5, 5);

        assert!(!would_collide(&snake.body, Direction::Right, false, grid));
        assert!(would_collide(&snake.body, Direction::Up, false, grid));
        assert!(would_collide(&snake.body, Direction::Left, false, grid));
    }
}
