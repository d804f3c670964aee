use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Slide file; slides are separated by `---` lines
    #[arg(value_name = "SLIDES")]
    pub slides: PathBuf,

    /// Slide to open first (0-based); overrides an `<!-- active -->` marker
    #[arg(short, long, value_name = "INDEX")]
    pub start: Option<usize>,

    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 4.0, value_parser = positive_rate)]
    pub tick_rate: f64,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 30.0, value_parser = positive_rate)]
    pub frame_rate: f64,
}

/// Rates become `1 / rate` second intervals, so they must be finite and above zero
fn positive_rate(raw: &str) -> Result<f64, String> {
    let rate: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("`{raw}` must be a positive number"))
    }
}
