//! Food placement. A single target cell, always disjoint from the snake's
//! body at the moment it is placed.
//!
//! Spawning is rejection sampling: draw a uniform in-bounds cell and redraw
//! while it is occupied. Termination rests on the assumption that the body
//! never fills the grid; the grid is vastly larger than any body length this
//! game reaches, and no explicit cap is enforced.

use std::collections::VecDeque;

use rand::Rng;

use super::grid::Grid;
use super::state::Position;

/// Place a food cell on a free cell of the grid
pub fn spawn<R: Rng>(rng: &mut R, grid: Grid, occupied: &VecDeque<Position>) -> Position {
    loop {
        let cell = grid.random_cell(rng);
        if !occupied.contains(&cell) {
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_avoids_the_body() {
        let grid = Grid::new(4, 4);
        // Occupy most of the grid to force rejections
        let occupied: VecDeque<Position> = (0..4)
            .flat_map(|x| (0..3).map(move |y| Position::new(x, y)))
            .collect();

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let cell = spawn(&mut rng, grid, &occupied);
            assert!(grid.in_bounds(cell));
            assert!(!occupied.contains(&cell));
        }
    }

    #[test]
    fn test_spawn_finds_the_single_free_cell() {
        let grid = Grid::new(2, 2);
        let occupied = VecDeque::from([
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(0, 1),
        ]);

        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(spawn(&mut rng, grid, &occupied), Position::new(1, 1));
    }
}
