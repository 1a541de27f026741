//! CLI module for pallet-roi
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, InputArgs};
pub use setup::{init_logging, log_level_for, resolve_formatting};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
