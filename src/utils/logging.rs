//! File logging
//!
//! The terminal belongs to the deck, so events go to
//! `<data dir>/swipedeck.log`. The filter is taken from `RUST_LOG`, then
//! `SWIPEDECK_LOGLEVEL`, then [`DEFAULT_FILTER`].

use std::{env, fs};

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Slide changes at info, every settle and ignored key press at debug
pub const DEFAULT_FILTER: &str = "swipedeck=info,swipedeck::model::deck=debug";

fn filter_directives(rust_log: Option<String>, app_level: Option<String>) -> String {
    rust_log
        .or(app_level)
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = fs::File::create(&log_path)?;

    let directives = filter_directives(env::var("RUST_LOG").ok(), env::var(LOG_ENV.as_str()).ok());
    let filter = EnvFilter::try_new(&directives)?;
    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_ansi(false)
        .with_filter(filter);
    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    log::info!("logging to {} with filter `{directives}`", log_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rust_log_wins() {
        assert_eq!(
            filter_directives(Some("warn".into()), Some("trace".into())),
            "warn"
        );
    }

    #[test]
    fn test_app_level_before_default() {
        assert_eq!(filter_directives(None, Some("debug".into())), "debug");
        assert_eq!(filter_directives(None, None), DEFAULT_FILTER);
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
