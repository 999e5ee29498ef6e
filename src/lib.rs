//! Greedy Snake - a toroidal snake game with an optional one-step autopilot
//!
//! The game core (grid, snake, food, autopilot, game loop) has no terminal
//! dependencies. The `term` module is the console front end used by the binary.

pub mod autopilot;
pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod snake;
pub mod term;

pub use autopilot::choose_direction;
pub use config::{Cli, Config, ConfigError};
pub use food::Food;
pub use game::{Command, Flow, GameSession, InputSource, Orchestrator, Renderer, SessionState, Snapshot};
pub use grid::{Grid, Point};
pub use snake::{Dir, Snake};
