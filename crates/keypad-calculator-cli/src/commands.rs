//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// keypad-calc: four-function keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Returns the subcommand, falling back to the interactive UI
    #[must_use]
    pub fn command_or_default(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Tui(TuiArgs::default()))
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive calculator
    Tui(TuiArgs),

    /// Replay a key sequence and print the result
    ///
    /// Keys: 0-9 . + - * / =, E for Enter, C for Escape (clear),
    /// < for Backspace. Spaces are ignored.
    Keys(KeysArgs),
}

/// Arguments for the tui command
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
pub struct TuiArgs {
    /// Disable mouse capture (keypad clicks)
    #[arg(long)]
    pub no_mouse: bool,

    /// Write logs to this file (the screen is owned by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Arguments for the keys command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct KeysArgs {
    /// Key sequence, e.g. "12+3="
    #[arg(allow_hyphen_values = true)]
    pub sequence: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format for replayed sequences
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Equation line then display line
    #[default]
    Text,
    /// Calculator state as JSON
    Json,
}
