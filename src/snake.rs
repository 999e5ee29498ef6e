use std::{collections::VecDeque, fmt::Display};

use crate::grid::{Grid, Point};

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// Autopilot evaluation order; earlier entries win ties.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let glyph = match self {
            Dir::Up => '^',
            Dir::Down => 'v',
            Dir::Left => '<',
            Dir::Right => '>',
        };
        write!(f, "{}", glyph)?;
        Ok(())
    }
}

pub const SPAWN_BODY: [Point; 3] = [Point { x: 5, y: 5 }, Point { x: 4, y: 5 }, Point { x: 3, y: 5 }];
pub const SPAWN_DIR: Dir = Dir::Right;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
    dir: Dir,
}

impl Snake {
    /// Builds a snake from head-first cells. An empty body is a caller bug.
    pub fn new(body: impl IntoIterator<Item = Point>, dir: Dir) -> Self {
        let body: VecDeque<Point> = body.into_iter().collect();
        assert!(!body.is_empty(), "snake body must hold at least one cell");
        Snake { body, dir }
    }

    /// The snake every round starts with.
    pub fn spawn() -> Self {
        Snake::new(SPAWN_BODY, SPAWN_DIR)
    }

    pub fn head(&self) -> Point {
        *self
            .body
            .front()
            .expect("snake body is never empty")
    }

    pub fn direction(&self) -> Dir {
        self.dir
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// Where the head would land heading `dir` from its current cell.
    pub fn next_head(&self, dir: Dir, grid: &Grid) -> Point {
        grid.step(self.head(), dir)
    }

    /// No reversal check: turning back into the neck is accepted and kills
    /// the snake on the next move.
    pub fn set_direction(&mut self, dir: Dir) {
        self.dir = dir;
    }

    fn move_head(&mut self, grid: &Grid) {
        let new_head = self.next_head(self.dir, grid);
        self.body.push_front(new_head);
    }

    /// Advances one cell, keeping the length. Returns the vacated tail cell.
    pub fn move_body(&mut self, grid: &Grid) -> Point {
        self.move_head(grid);
        self.body
            .pop_back()
            .expect("snake body is never empty")
    }

    /// Advances one cell without dropping the tail.
    pub fn grow(&mut self, grid: &Grid) {
        self.move_head(grid);
    }

    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|seg| *seg == head)
    }
}

impl Default for Snake {
    fn default() -> Self {
        Snake::spawn()
    }
}
