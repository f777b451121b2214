//! keypad-calc: keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc                       # Interactive calculator
//! keypad-calc tui --no-mouse        # Keyboard only
//! keypad-calc keys "12+3="          # Replay keys, print equation and display
//! keypad-calc keys "5/0=" -f json   # Print the final state as JSON
//! ```

use clap::Parser;
use keypad_calculator_cli::{
    logging, run_keys, run_tui, AppConfig, Cli, CliResult, Commands,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);

    match cli.command_or_default() {
        Commands::Tui(_) => {
            logging::init(config.verbosity, logging::tui_target(config.log_file.clone()))?;
            run_tui(&config)
        }
        Commands::Keys(args) => {
            logging::init(config.verbosity, logging::keys_target(config.verbosity))?;
            println!("{}", run_keys(&args)?);
            Ok(())
        }
    }
}
