use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use swipedeck::{
    core::state::AppState,
    infrastructure::{cli::Cli, config::Config, slide_source::SlideSource, tui::real::RealTui},
    integration::AppRunner,
    model::Deck,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;

    let source = SlideSource::load(&args.slides)?;
    let initial_index = source.initial_index(args.start);
    let deck = Deck::new(source.slides, initial_index, config.gesture.settings())?;
    let state = AppState::new(deck, config);

    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(state, tui);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
