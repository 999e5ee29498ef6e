//! Console front end: draws snapshots with `console` and reads keys on a
//! helper thread.

use std::{
    fmt::Write as _,
    io::{ErrorKind, Write},
    sync::mpsc::{channel, Receiver},
    thread,
};

use anyhow::Context;
use console::{style, Key, Style, Term};
use tracing::{debug, warn};

use crate::config::Config;
use crate::game::{Command, InputSource, Renderer, Snapshot};
use crate::grid::Point;
use crate::snake::Dir;

pub const TITLE: &str = "snake with dumb AI";

// 256-colour greens, brightest first.
const BODY_SHADES: [u8; 5] = [46, 40, 34, 28, 22];
const SEGMENTS_PER_SHADE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInput {
    Unknown,
    Quit,
    Up,
    Down,
    Left,
    Right,
}

impl From<Key> for UserInput {
    fn from(value: Key) -> Self {
        match value {
            Key::ArrowUp | Key::Char('w') | Key::Char('W') => Self::Up,
            Key::ArrowDown | Key::Char('s') | Key::Char('S') => Self::Down,
            Key::ArrowLeft | Key::Char('a') | Key::Char('A') => Self::Left,
            Key::ArrowRight | Key::Char('d') | Key::Char('D') => Self::Right,
            Key::Escape | Key::Char('q') | Key::Char('Q') => Self::Quit,
            _ => Self::Unknown,
        }
    }
}

impl UserInput {
    pub fn command(self) -> Option<Command> {
        match self {
            UserInput::Up => Some(Command::Steer(Dir::Up)),
            UserInput::Down => Some(Command::Steer(Dir::Down)),
            UserInput::Left => Some(Command::Steer(Dir::Left)),
            UserInput::Right => Some(Command::Steer(Dir::Right)),
            UserInput::Quit => Some(Command::Quit),
            UserInput::Unknown => None,
        }
    }
}

/// Keys read from the terminal by a background thread.
pub struct KeyInput {
    input_rcv: Receiver<UserInput>,
}

impl KeyInput {
    pub fn spawn(term: Term) -> Self {
        let (tx, rx) = channel();
        thread::spawn(move || loop {
            let input = match term.read_key() {
                Ok(key) => UserInput::from(key),
                // Ctrl-C in raw mode comes back as an interrupted read.
                Err(e) if e.kind() == ErrorKind::Interrupted => UserInput::Quit,
                Err(e) => {
                    warn!(error = %e, "key reader stopped");
                    UserInput::Quit
                }
            };
            let quit = input == UserInput::Quit;
            if tx.send(input).is_err() || quit {
                break;
            }
        });
        KeyInput::from_receiver(rx)
    }

    pub fn from_receiver(input_rcv: Receiver<UserInput>) -> Self {
        KeyInput { input_rcv }
    }
}

impl InputSource for KeyInput {
    fn next_command(&mut self) -> Option<Command> {
        while let Ok(input) = self.input_rcv.try_recv() {
            if let Some(command) = input.command() {
                return Some(command);
            }
            debug!(?input, "ignored key");
        }
        None
    }
}

pub struct TermRenderer {
    term: Term,
}

impl TermRenderer {
    pub fn new(term: Term, config: &Config) -> anyhow::Result<Self> {
        term.set_title(TITLE);
        term.clear_screen().context("clearing screen")?;
        term.hide_cursor().context("hiding cursor")?;

        let (rows, cols) = term.size();
        let (need_rows, need_cols) = frame_size(config);
        if usize::from(rows) < need_rows || usize::from(cols) < need_cols {
            warn!(rows, cols, need_rows, need_cols, "terminal is smaller than the board");
        }
        Ok(TermRenderer { term })
    }

    /// Puts the cursor back below the board.
    pub fn restore(&self) -> anyhow::Result<()> {
        self.term.show_cursor()?;
        self.term.write_line("")?;
        Ok(())
    }
}

impl Renderer for TermRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>, config: &Config) -> anyhow::Result<()> {
        let frame = draw_frame(snapshot, config);
        self.term.move_cursor_to(0, 0)?;
        self.term.write_all(frame.as_bytes())?;
        self.term.flush()?;
        Ok(())
    }
}

/// Rows and columns a frame occupies: border plus status line, two columns per cell.
pub fn frame_size(config: &Config) -> (usize, usize) {
    let rows = config.grid.height() as usize + 3;
    let cols = config.grid.width() as usize * 2 + 2;
    (rows, cols)
}

fn body_style(index: usize) -> Style {
    let shade = BODY_SHADES[(index / SEGMENTS_PER_SHADE).min(BODY_SHADES.len() - 1)];
    Style::new().color256(shade)
}

/// Renders one snapshot as a block of text lines.
pub fn draw_frame(snapshot: &Snapshot<'_>, config: &Config) -> String {
    let width = config.grid.width();
    let height = config.grid.height();
    let horizontal = "─".repeat(width as usize * 2);

    let mut frame = String::new();
    let _ = writeln!(frame, "┌{}┐", horizontal);
    for y in 0..height {
        frame.push('│');
        for x in 0..width {
            let point = Point::new(x, y);
            // Head first, then the food, then body segments head-to-tail.
            let cell = match snapshot.body.iter().position(|seg| *seg == point) {
                Some(0) => style(format!("{} ", snapshot.direction)).black().on_green().bold().to_string(),
                _ if point == snapshot.food => style("O ").red().bold().to_string(),
                Some(i) => body_style(i).apply_to("██").to_string(),
                None => "  ".to_string(),
            };
            frame.push_str(&cell);
        }
        frame.push_str("│\n");
    }
    let _ = writeln!(frame, "└{}┘", horizontal);

    let mode = if config.autopilot { "autopilot" } else { "manual" };
    let _ = write!(
        frame,
        "{} round {}  length {}  eaten {}  [{}]  q to quit",
        style(" SNAKE ").black().on_white(),
        snapshot.round,
        snapshot.body.len(),
        snapshot.eaten,
        mode
    );
    frame
}
