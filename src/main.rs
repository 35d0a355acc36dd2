use anyhow::{Context, Result};
use std::io;
use std::rc::Rc;
use wordmania::cli::{CliInterface, parse_cli};
use wordmania::logging::init_logging;
use wordmania::{GameEngine, GameState, embedded_wordbank, game_loop, load_wordbank_from_file};

fn main() -> Result<()> {
    let cli = parse_cli();
    init_logging(cli.log_file.as_deref());

    let words = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path)
            .with_context(|| format!("Failed to load word bank from '{path}'"))?,
        None => embedded_wordbank(),
    };

    let mut engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(words, seed),
        None => GameEngine::new(words),
    }
    .context("Failed to start game engine")?;

    engine.subscribe(|state: &Rc<GameState>| log::trace!("state changed: {state:?}"));

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    let summaries = game_loop(&mut engine, &mut interface, cli.mode);

    log::info!("Exiting after {} completed game(s)", summaries.len());
    Ok(())
}
