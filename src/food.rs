use rand::Rng;

use crate::grid::{Grid, Point};

/// The single piece of food on the board.
///
/// Placement ignores the snake, so food can appear under its body. The snake
/// only eats it once the head reaches that cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Food {
    pub position: Point,
}

impl Food {
    pub fn new(position: Point) -> Self {
        Food { position }
    }

    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Food {
            position: grid.random_point(rng),
        }
    }

    pub fn respawn<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        self.position = grid.random_point(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_respawn_stays_on_grid() {
        let grid = Grid::new(32, 24);
        let mut rng = StdRng::seed_from_u64(1);
        let mut food = Food::spawn(&grid, &mut rng);
        for _ in 0..500 {
            food.respawn(&grid, &mut rng);
            assert!(grid.contains(food.position));
        }
    }

    #[test]
    fn test_respawn_covers_whole_grid() {
        let grid = Grid::new(3, 2);
        let mut rng = StdRng::seed_from_u64(42);
        let mut food = Food::new(Point::new(0, 0));
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            food.respawn(&grid, &mut rng);
            seen.insert(food.position);
        }
        assert_eq!(seen.len(), 6);
    }
}
