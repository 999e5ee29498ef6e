//! One-step greedy steering.
//!
//! Looks only at the four cells next to the head and picks the one closest to
//! the food that the snake does not already occupy. Distances are measured on
//! wrapped coordinates without considering the shorter way around the torus,
//! so the snake can take the long route near an edge.

use tracing::debug;

use crate::food::Food;
use crate::grid::{Grid, Point};
use crate::snake::{Dir, Snake};

pub fn manhattan_distance(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Picks the safe neighbouring cell nearest to the food.
///
/// Candidates are tried in `Dir::ALL` order and only a strictly shorter
/// distance replaces the current pick, so ties go to the earlier direction.
/// The whole current body counts as unsafe, tail included. When every
/// candidate is unsafe the current heading is returned unchanged.
pub fn choose_direction(snake: &Snake, food: &Food, grid: &Grid) -> Dir {
    let mut best: Option<(Dir, u32)> = None;

    for dir in Dir::ALL {
        let candidate = snake.next_head(dir, grid);
        if snake.occupies(candidate) {
            continue;
        }
        let distance = manhattan_distance(candidate, food.position);
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((dir, distance));
        }
    }

    match best {
        Some((dir, _)) => dir,
        None => {
            debug!(head = ?snake.head(), "no safe move, keeping heading");
            snake.direction()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(cells: &[(i32, i32)], dir: Dir) -> Snake {
        Snake::new(cells.iter().map(|&(x, y)| Point::new(x, y)), dir)
    }

    fn food(x: i32, y: i32) -> Food {
        Food::new(Point::new(x, y))
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan_distance(Point::new(5, 2), Point::new(1, 9)), 11);
        assert_eq!(manhattan_distance(Point::new(2, 2), Point::new(2, 2)), 0);
    }

    #[test]
    fn test_heads_straight_for_adjacent_food() {
        let grid = Grid::new(32, 24);
        let dir = choose_direction(&Snake::spawn(), &food(6, 5), &grid);
        assert_eq!(dir, Dir::Right);
    }

    #[test]
    fn test_tie_goes_to_earlier_direction() {
        let grid = Grid::new(32, 24);
        // Up and Right both land one step from (6, 4).
        let single = snake(&[(5, 5)], Dir::Left);
        assert_eq!(choose_direction(&single, &food(6, 4), &grid), Dir::Up);

        // Down and Left both land one step from (4, 6).
        assert_eq!(choose_direction(&single, &food(4, 6), &grid), Dir::Down);
    }

    #[test]
    fn test_tie_skips_unsafe_earlier_direction() {
        let grid = Grid::new(32, 24);
        // Up is blocked by the body, so Right wins the tie for (6, 4).
        let hooked = snake(&[(5, 5), (4, 5), (4, 4), (5, 4)], Dir::Right);
        assert_eq!(choose_direction(&hooked, &food(6, 4), &grid), Dir::Right);
    }

    #[test]
    fn test_never_steps_onto_body() {
        let grid = Grid::new(32, 24);
        // Food sits behind the snake; Left would hit the neck.
        let dir = choose_direction(&Snake::spawn(), &food(0, 5), &grid);
        assert_ne!(dir, Dir::Left);
        assert!(!Snake::spawn().occupies(grid.step(Point::new(5, 5), dir)));
    }

    #[test]
    fn test_tail_cell_counts_as_unsafe() {
        let grid = Grid::new(32, 24);
        // Down reaches the food's neighbour but lands on the tail, which
        // would vacate on a plain move. It is still ruled out.
        let coiled = snake(&[(5, 5), (4, 5), (4, 6), (5, 6)], Dir::Right);
        assert_eq!(choose_direction(&coiled, &food(5, 7), &grid), Dir::Up);
    }

    #[test]
    fn test_boxed_in_keeps_heading() {
        let grid = Grid::new(32, 24);
        let boxed = snake(&[(5, 5), (5, 4), (6, 5), (5, 6), (4, 5)], Dir::Down);
        assert_eq!(choose_direction(&boxed, &food(0, 0), &grid), Dir::Down);
    }

    #[test]
    fn test_distance_is_not_torus_aware() {
        let grid = Grid::new(10, 10);
        // Food at (8, 0) is three steps Left across the edge from (1, 0),
        // but the plain distance favours Right.
        let lone = snake(&[(1, 0)], Dir::Down);
        assert_eq!(choose_direction(&lone, &food(8, 0), &grid), Dir::Right);
    }
}
