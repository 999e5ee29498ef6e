use std::ops::Add;

use rand::Rng;

use crate::snake::Dir;

/// A cell on the board. Only wrapped points are ever stored by the game.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

// Unwrapped offset; callers go through `Grid::step` to land back on the board.
impl Add<Dir> for Point {
    type Output = Self;
    fn add(self, rhs: Dir) -> Self::Output {
        let (dx, dy) = rhs.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed-size toroidal board: leaving one edge re-enters at the opposite one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Panics on a zero dimension; `Config` rejects those before a grid is built.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Grid {
            width: width.into(),
            height: height.into(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }

    pub fn wrap(&self, point: Point) -> Point {
        Point {
            x: point.x.rem_euclid(self.width),
            y: point.y.rem_euclid(self.height),
        }
    }

    pub fn step(&self, point: Point, dir: Dir) -> Point {
        self.wrap(point + dir)
    }

    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point {
            x: rng.gen_range(0..self.width),
            y: rng.gen_range(0..self.height),
        }
    }
}
