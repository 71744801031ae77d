//! Terminal logger setup.
//!
//! Logs go to stderr so that stdout only carries the game itself.
//! The level comes from `DICE_LOG` and defaults to `warn`.

use simplelog::*;
use std::str::FromStr;

pub const ENV_LOG: &str = "DICE_LOG";

/// Parse a level name, falling back to `Warn` for missing or unknown values.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Warn)
}

pub fn init() {
    let level = parse_level(std::env::var(ENV_LOG).ok().as_deref());

    // Only fails if a logger is already installed, in which case it stays.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
}
