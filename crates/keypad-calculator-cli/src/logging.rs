//! Tracing subscriber setup
//!
//! `RUST_LOG` overrides the level chosen with `-q`/`-v`.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for headless commands
    Stderr,
    /// A file, for the interactive UI
    File(PathBuf),
    /// Nowhere
    Off,
}

/// Builds the level filter for the calculator crates
#[must_use]
pub fn filter_directive(verbosity: Verbosity) -> String {
    let level = verbosity.level();
    format!("warn,keypad_calculator={level},keypad_calculator_cli={level}")
}

fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)))
}

/// Installs the global subscriber
///
/// Event targets are printed from `-v` upwards.
pub fn init(verbosity: Verbosity, target: LogTarget) -> CliResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_target(verbosity.is_verbose());

    let installed = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    installed.map_err(|e| CliError::logging(e.to_string()))
}

/// Picks the log target for headless commands; `-q` silences logging
#[must_use]
pub const fn keys_target(verbosity: Verbosity) -> LogTarget {
    if verbosity.is_quiet() {
        LogTarget::Off
    } else {
        LogTarget::Stderr
    }
}

/// Picks the log target for the interactive UI
#[must_use]
pub fn tui_target(log_file: Option<PathBuf>) -> LogTarget {
    log_file.map_or(LogTarget::Off, LogTarget::File)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_levels() {
        assert_eq!(
            filter_directive(Verbosity::Normal),
            "warn,keypad_calculator=warn,keypad_calculator_cli=warn"
        );
        assert!(filter_directive(Verbosity::Debug).contains("keypad_calculator=debug"));
    }

    #[test]
    fn test_filter_directive_parses() {
        for verbosity in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
            Verbosity::Trace,
        ] {
            assert!(EnvFilter::try_new(filter_directive(verbosity)).is_ok());
        }
    }

    #[test]
    fn test_tui_target() {
        assert_eq!(tui_target(None), LogTarget::Off);
        assert_eq!(
            tui_target(Some(PathBuf::from("calc.log"))),
            LogTarget::File(PathBuf::from("calc.log"))
        );
    }

    #[test]
    fn test_keys_target() {
        assert_eq!(keys_target(Verbosity::Quiet), LogTarget::Off);
        assert_eq!(keys_target(Verbosity::Normal), LogTarget::Stderr);
        assert_eq!(keys_target(Verbosity::Trace), LogTarget::Stderr);
    }

    #[test]
    fn test_init_file_target_creates_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.log");
        init(Verbosity::Debug, LogTarget::File(path.clone())).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_off_installs_nothing() {
        assert!(init(Verbosity::Debug, LogTarget::Off).is_ok());
    }

    #[test]
    fn test_init_bad_log_path() {
        let result = init(
            Verbosity::Normal,
            LogTarget::File(PathBuf::from("/nonexistent-dir/calc.log")),
        );
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
