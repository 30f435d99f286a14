//! Terminal Connect Four.
//!
//! Reads one command per line from stdin and writes the board to stdout.
//! Logs go to stderr; set `RUST_LOG` to change the level.

use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod command;
mod config;
mod render;

use app::{App, Control};
use config::Config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env()?;
    info!(?config, "Loaded configuration");

    let mut app = App::new(config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", app.welcome())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let reply = app.handle_line(&line?);
        if !reply.output.is_empty() {
            writeln!(stdout, "{}", reply.output)?;
            stdout.flush()?;
        }
        if reply.control == Control::Quit {
            break;
        }
    }

    info!(games = app.games_started(), "Exiting");
    Ok(())
}
