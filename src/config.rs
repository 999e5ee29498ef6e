use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Parser};
use thiserror::Error;

use crate::grid::Grid;

/// A 640x480 playfield split into 20px cells.
pub const DEFAULT_WIDTH: u16 = 640 / 20;
pub const DEFAULT_HEIGHT: u16 = 480 / 20;
pub const DEFAULT_TICK_RATE: u32 = 10;

#[derive(Debug, Parser)]
#[command(name = "greedy_snake")]
#[command(version, about = "Snake on a wrapping grid, with a dumb greedy autopilot")]
pub struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u16,

    /// Let the greedy autopilot steer; arrow keys / WASD are ignored while on
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub autopilot: bool,

    /// Game ticks per second
    #[arg(long, default_value_t = DEFAULT_TICK_RATE)]
    pub tick_rate: u32,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must be at least 1x1 cells, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },
    #[error("tick rate must be at least 1 tick per second")]
    ZeroTickRate,
}

/// Process-wide settings, fixed once the game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub grid: Grid,
    pub autopilot: bool,
    pub tick_rate: u32,
}

impl Config {
    pub fn new(width: u16, height: u16, autopilot: bool, tick_rate: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        if tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(Config {
            grid: Grid::new(width, height),
            autopilot,
            tick_rate,
        })
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            grid: Grid::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            autopilot: true,
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

impl TryFrom<&Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        Config::new(cli.width, cli.height, cli.autopilot, cli.tick_rate)
    }
}
