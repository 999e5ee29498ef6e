use std::{collections::VecDeque, thread, time::Instant};

use rand::Rng;
use tracing::{debug, info, trace};

use crate::autopilot::choose_direction;
use crate::config::Config;
use crate::food::Food;
use crate::grid::{Grid, Point};
use crate::snake::{Dir, Snake};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// One life of the snake, from spawn to self-collision.
#[derive(Debug, Clone)]
pub struct GameSession {
    snake: Snake,
    food: Food,
    state: SessionState,
    ticks: u64,
    eaten: u32,
}

impl GameSession {
    pub fn new(snake: Snake, food: Food) -> Self {
        GameSession {
            snake,
            food,
            state: SessionState::Running,
            ticks: 0,
            eaten: 0,
        }
    }

    /// Fresh round: the spawn snake and food anywhere on the grid.
    pub fn start<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        GameSession::new(Snake::spawn(), Food::spawn(grid, rng))
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn eaten(&self) -> u32 {
        self.eaten
    }

    /// Advances the round by one step.
    ///
    /// `desired` replaces the heading when present. If the next head lands on
    /// the food the snake grows into that cell and the food respawns;
    /// otherwise it moves. A terminated session is left untouched.
    pub fn tick<R: Rng + ?Sized>(&mut self, desired: Option<Dir>, grid: &Grid, rng: &mut R) -> SessionState {
        if self.state == SessionState::Terminated {
            return self.state;
        }

        if let Some(dir) = desired {
            self.snake.set_direction(dir);
        }

        let next_head = self.snake.next_head(self.snake.direction(), grid);
        if next_head == self.food.position {
            self.snake.grow(grid);
            self.food.respawn(grid, rng);
            self.eaten += 1;
            debug!(at = ?next_head, len = self.snake.len(), food = ?self.food.position, "food eaten");
        } else {
            self.snake.move_body(grid);
        }
        self.ticks += 1;

        if self.snake.collides_with_self() {
            self.state = SessionState::Terminated;
        }
        trace!(head = ?self.snake.head(), dir = ?self.snake.direction(), state = ?self.state, "tick");

        self.state
    }

    pub fn snapshot(&self, round: u64) -> Snapshot<'_> {
        Snapshot {
            body: self.snake.body(),
            direction: self.snake.direction(),
            food: self.food.position,
            round,
            eaten: self.eaten,
            state: self.state,
        }
    }
}

/// Everything a renderer needs to draw one tick.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub body: &'a VecDeque<Point>,
    pub direction: Dir,
    pub food: Point,
    pub round: u64,
    pub eaten: u32,
    pub state: SessionState,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Steer(Dir),
    Quit,
}

/// Source of player commands. Returns `None` once nothing is pending, so the
/// game loop never waits on it.
pub trait InputSource {
    fn next_command(&mut self) -> Option<Command>;
}

pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot<'_>, config: &Config) -> anyhow::Result<()>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs rounds back to back until the input asks to quit.
pub struct Orchestrator<I, R, G> {
    config: Config,
    input: I,
    renderer: R,
    rng: G,
    session: GameSession,
    round: u64,
}

impl<I, R, G> Orchestrator<I, R, G>
where
    I: InputSource,
    R: Renderer,
    G: Rng,
{
    pub fn new(config: Config, input: I, renderer: R, mut rng: G) -> Self {
        let session = GameSession::start(&config.grid, &mut rng);
        info!(round = 1, food = ?session.food().position, autopilot = config.autopilot, "round started");
        Orchestrator {
            config,
            input,
            renderer,
            rng,
            session,
            round: 1,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Plays one tick: read input, advance, draw, and restart after a death.
    pub fn step(&mut self) -> anyhow::Result<Flow> {
        let mut steer = None;
        while let Some(command) = self.input.next_command() {
            match command {
                Command::Quit => {
                    info!(round = self.round, "quit requested");
                    return Ok(Flow::Quit);
                }
                Command::Steer(dir) => steer = Some(dir),
            }
        }

        let desired = if self.config.autopilot {
            Some(choose_direction(self.session.snake(), self.session.food(), &self.config.grid))
        } else {
            steer
        };

        let state = self.session.tick(desired, &self.config.grid, &mut self.rng);
        self.renderer
            .render(&self.session.snapshot(self.round), &self.config)?;

        if state == SessionState::Terminated {
            info!(
                round = self.round,
                ticks = self.session.ticks(),
                eaten = self.session.eaten(),
                len = self.session.snake().len(),
                "snake hit itself"
            );
            self.round += 1;
            self.session = GameSession::start(&self.config.grid, &mut self.rng);
            info!(round = self.round, food = ?self.session.food().position, "round started");
        }

        Ok(Flow::Continue)
    }

    /// Steps at the configured tick rate until quit.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let interval = self.config.tick_interval();
        loop {
            let start = Instant::now();
            if self.step()? == Flow::Quit {
                break;
            }
            thread::sleep(interval.saturating_sub(start.elapsed()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn points(cells: &[(i32, i32)]) -> Vec<Point> {
        cells.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_eating_grows_onto_food_cell() {
        let grid = Grid::new(32, 24);
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = GameSession::new(Snake::spawn(), Food::new(Point::new(6, 5)));

        let state = session.tick(Some(Dir::Right), &grid, &mut rng);

        assert_eq!(state, SessionState::Running);
        let body: Vec<Point> = session.snake().body().iter().copied().collect();
        assert_eq!(body, points(&[(6, 5), (5, 5), (4, 5), (3, 5)]));
        assert_eq!(session.eaten(), 1);
        assert!(grid.contains(session.food().position));
    }

    #[test]
    fn test_plain_move_keeps_length() {
        let grid = Grid::new(32, 24);
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = GameSession::new(Snake::spawn(), Food::new(Point::new(20, 20)));

        session.tick(None, &grid, &mut rng);

        assert_eq!(session.snake().head(), Point::new(6, 5));
        assert_eq!(session.snake().len(), 3);
        assert_eq!(session.food().position, Point::new(20, 20));
        assert_eq!(session.ticks(), 1);
    }

    #[test]
    fn test_reversal_terminates() {
        let grid = Grid::new(32, 24);
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = GameSession::new(Snake::spawn(), Food::new(Point::new(20, 20)));

        assert_eq!(session.tick(Some(Dir::Left), &grid, &mut rng), SessionState::Terminated);
        assert_eq!(session.state(), SessionState::Terminated);
    }

    #[test]
    fn test_terminated_session_does_not_advance() {
        let grid = Grid::new(32, 24);
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = GameSession::new(Snake::spawn(), Food::new(Point::new(20, 20)));
        session.tick(Some(Dir::Left), &grid, &mut rng);
        let frozen = session.snake().clone();

        assert_eq!(session.tick(Some(Dir::Up), &grid, &mut rng), SessionState::Terminated);
        assert_eq!(session.snake(), &frozen);
        assert_eq!(session.ticks(), 1);
    }

    #[test]
    fn test_snapshot_reflects_session() {
        let session = GameSession::new(Snake::spawn(), Food::new(Point::new(9, 9)));
        let snapshot = session.snapshot(4);

        assert_eq!(snapshot.body, session.snake().body());
        assert_eq!(snapshot.direction, Dir::Right);
        assert_eq!(snapshot.food, Point::new(9, 9));
        assert_eq!(snapshot.round, 4);
        assert_eq!(snapshot.state, SessionState::Running);
    }
}
