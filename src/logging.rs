//! Debug logging to stderr, switched on through `SH308_LOG`.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::str::FromStr;

pub const LOG_ENV_VAR: &str = "SH308_LOG";

/// Level requested by the environment. Anything unset or unparsable is `Off`.
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(LevelFilter::Off)
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(value.trim()).ok()
}

/// Best-effort: a logger that cannot be installed never stops the shell.
pub fn init() {
    let level = level_from_env();
    if level == LevelFilter::Off {
        return;
    }

    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    if TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("Warning: Couldn't install logger");
    }
}
