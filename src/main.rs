use std::{fs::File, sync::Mutex};

use anyhow::Context;
use clap::Parser;
use console::Term;
use tracing_subscriber::EnvFilter;

use greedy_snake::{
    term::{KeyInput, TermRenderer},
    Cli, Config, Orchestrator,
};

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt().with_target(false);
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            builder
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            // Stay quiet on stderr by default so the board is not scribbled over.
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            builder
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    let config = Config::try_from(&cli)?;

    let term = Term::stdout();
    if !term.is_term() {
        anyhow::bail!("stdout is not a terminal");
    }

    let renderer = TermRenderer::new(term.clone(), &config)?;
    let input = KeyInput::spawn(term.clone());
    let mut game = Orchestrator::new(config, input, renderer, rand::thread_rng());

    let result = game.run();
    game.renderer().restore()?;
    result
}
