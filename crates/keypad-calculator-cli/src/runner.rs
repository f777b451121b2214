//! Command execution

use keypad_calculator::core::{CalculatorEngine, CalculatorState, Operator};
use keypad_calculator::keyboard::parse_script;
use keypad_calculator::tui::{run_in_terminal, CalculatorApp};
use serde::Serialize;

use crate::commands::{KeysArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// JSON view of a replayed sequence
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeysReport<'a> {
    /// Final calculator state
    #[serde(flatten)]
    pub state: &'a CalculatorState,
    /// Highlighted operator, if any
    pub active_operator: Option<Operator>,
}

/// Replays a key sequence on a fresh engine
///
/// The sequence is validated before any key is applied.
pub fn replay(sequence: &str) -> CliResult<CalculatorEngine> {
    let inputs = parse_script(sequence)?;
    let mut engine = CalculatorEngine::new();
    for input in inputs {
        engine.dispatch(input);
    }
    tracing::info!(
        sequence,
        display = engine.display(),
        "sequence replayed"
    );
    Ok(engine)
}

/// Formats the engine's final state
pub fn render_report(engine: &CalculatorEngine, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n{}", engine.equation(), engine.display())),
        OutputFormat::Json => {
            let report = KeysReport {
                state: engine.state(),
                active_operator: engine.active_operator(),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

/// Runs the keys command, returning what to print
pub fn run_keys(args: &KeysArgs) -> CliResult<String> {
    let engine = replay(&args.sequence)?;
    render_report(&engine, args.format)
}

/// Runs the interactive terminal UI until the user quits
pub fn run_tui(config: &AppConfig) -> CliResult<()> {
    let mut app = CalculatorApp::new();
    run_in_terminal(&mut app, config.mouse)?;
    tracing::info!(display = app.engine().display(), "calculator closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use keypad_calculator::core::CalcError;

    fn keys(sequence: &str, format: OutputFormat) -> KeysArgs {
        KeysArgs {
            sequence: sequence.to_string(),
            format,
        }
    }

    // ===== Replay tests =====

    #[test]
    fn test_replay_calculation() {
        let engine = replay("12+3=").unwrap();
        assert_eq!(engine.display(), "15");
        assert_eq!(engine.equation(), "12 + 3 = ");
    }

    #[test]
    fn test_replay_named_keys() {
        let engine = replay("99<C4*5E").unwrap();
        assert_eq!(engine.display(), "20");
    }

    #[test]
    fn test_replay_invalid() {
        let result = replay("2^3");
        assert!(matches!(
            result,
            Err(CliError::InvalidSequence(CalcError::UnknownKey('^')))
        ));
    }

    // ===== Output tests =====

    #[test]
    fn test_run_keys_text() {
        let out = run_keys(&keys("12+3=", OutputFormat::Text)).unwrap();
        assert_eq!(out, "12 + 3 = \n15");
    }

    #[test]
    fn test_run_keys_text_empty_equation() {
        let out = run_keys(&keys("42", OutputFormat::Text)).unwrap();
        assert_eq!(out, "\n42");
    }

    #[test]
    fn test_run_keys_json() {
        let out = run_keys(&keys("8/2", OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["display"], "2");
        assert_eq!(value["firstOperand"], 8.0);
        assert_eq!(value["operator"], "divide");
        assert_eq!(value["waitingForSecondOperand"], false);
        assert_eq!(value["equation"], "8 ÷ ");
        assert_eq!(value["activeOperator"], "divide");
    }

    #[test]
    fn test_run_keys_json_error_marker() {
        let out = run_keys(&keys("5/0=", OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["display"], "Error");
        assert!(value["activeOperator"].is_null());
        assert_eq!(value["firstOperand"], 5.0);
    }
}
