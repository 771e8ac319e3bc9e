//! Interactive piece queue / reserve stack runner (default binary).
//!
//! Reads one menu number per line from stdin and prints the queue and the
//! reserve stack before every prompt. Logs go to stderr (`RUST_LOG`).

use std::io;

use anyhow::Result;
use env_logger::Env;

use tetris_reserve::core::GameState;
use tetris_reserve::term::{StateView, TerminalRenderer};
use tetris_reserve::SessionConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = SessionConfig::from_env();
    let seed = config.resolve_seed();
    log::info!("starting session (seed {}, color {})", seed, config.color);

    let mut game = GameState::new(seed);
    let view = StateView::new().with_details(config.show_details);
    let mut term = TerminalRenderer::stdout(config.color);
    let mut input = io::stdin().lock();

    let summary = tetris_reserve::run(&mut game, view, &mut input, &mut term)?;
    log::info!(
        "session over: {} actions ({} rejected), {} invalid lines",
        summary.actions,
        summary.rejected,
        summary.invalid
    );
    Ok(())
}
