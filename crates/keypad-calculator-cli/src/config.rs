//! CLI configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::commands::{Cli, Commands};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - informational logs
    Verbose,
    /// Debug - every state transition
    Debug,
    /// Trace - no-op inputs and subscriber bookkeeping too
    Trace,
}

impl Verbosity {
    /// Derives the level from `-q` and the `-v` count
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug | Self::Trace)
    }

    /// Level name understood by `EnvFilter`
    #[must_use]
    pub const fn level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Capture mouse clicks in the interactive UI
    pub mouse: bool,
    /// Log file for the interactive UI
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            mouse: true,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the configuration from parsed arguments
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let config = Self::new().with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose));
        match cli.command_or_default() {
            Commands::Tui(args) => config
                .with_mouse(!args.no_mouse)
                .with_log_file(args.log_file),
            Commands::Keys(_) => config,
        }
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set mouse capture
    #[must_use]
    pub const fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.log_file = log_file;
        self
    }
}
