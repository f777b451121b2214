//! keypad-calc CLI library
//!
//! Argument parsing, configuration, logging setup and command execution for
//! the `keypad-calc` binary.

#![warn(missing_docs)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic, clippy::float_cmp))]

mod commands;
mod config;
mod error;
pub mod logging;
mod runner;

pub use commands::{Cli, Commands, KeysArgs, OutputFormat, TuiArgs};
pub use config::{AppConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::LogTarget;
pub use runner::{render_report, replay, run_keys, run_tui, KeysReport};
