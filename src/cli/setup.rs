//! Runtime setup for the CLI: logging and output styling.

use log::LevelFilter;

use crate::config::RoiConfig;
use crate::formatting::{ColorMode, FormattingConfig};

/// Map `-v` repetitions to a log level; warnings are always shown.
pub fn log_level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install env_logger once at startup. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbosity: u8) {
    let default_level = log_level_for(verbosity).to_string().to_lowercase();
    let env = env_logger::Env::default().default_filter_or(default_level);

    if let Err(e) = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init()
    {
        // Already initialized, e.g. when called twice from tests
        log::debug!("Logger already configured: {}", e);
    }
}

/// Pick a color mode: `--plain` and file output turn colors off, then the
/// config file decides, then the environment.
pub fn resolve_formatting(plain: bool, to_file: bool, config: &RoiConfig) -> FormattingConfig {
    if plain || to_file {
        return FormattingConfig::plain();
    }

    match config.use_color() {
        Some(true) => FormattingConfig::new(ColorMode::Always),
        Some(false) => FormattingConfig::plain(),
        None => FormattingConfig::from_env(),
    }
}
