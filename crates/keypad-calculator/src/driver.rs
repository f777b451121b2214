//! Unified calculator driver
//!
//! Scenario logic is written once against [`CalculatorDriver`] and run on
//! every frontend: the bare engine and the terminal app.
//!
//! Balanced testing: each `verify_*` function restates one observable
//! behavior of the keypad, so a frontend that wires a button or key wrong
//! fails the same scenario the engine passes.

use crate::core::{CalcResult, CalculatorEngine, Input, Operator, ERROR_MARKER};
use crate::keyboard::parse_script;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calculator::driver::{verify_equals_trace, CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.type_keys("12+3=").unwrap();
/// assert_eq!(driver.display(), "15");
///
/// verify_equals_trace(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Presses the keypad button for an input
    fn press(&mut self, input: Input);

    /// Types a key script such as `"12+3E"`
    ///
    /// The whole script is checked before any key is sent.
    fn type_keys(&mut self, script: &str) -> CalcResult<()>;

    /// Gets the display text
    fn display(&self) -> String;

    /// Gets the equation trace
    fn equation(&self) -> String;

    /// Gets the highlighted operator
    fn active_operator(&self) -> Option<Operator>;

    /// Resets the calculator
    fn clear(&mut self) {
        self.press(Input::Clear);
    }
}

/// Headless driver over a bare engine
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: CalculatorEngine,
}

impl EngineDriver {
    /// Creates a driver around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Consumes the driver, returning the engine
    #[must_use]
    pub fn into_engine(self) -> CalculatorEngine {
        self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, input: Input) {
        self.engine.dispatch(input);
    }

    fn type_keys(&mut self, script: &str) -> CalcResult<()> {
        for input in parse_script(script)? {
            self.engine.dispatch(input);
        }
        Ok(())
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn equation(&self) -> String {
        self.engine.equation().to_string()
    }

    fn active_operator(&self) -> Option<Operator> {
        self.engine.active_operator()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    use super::{CalcResult, CalculatorDriver, Input, Operator};
    use crate::keyboard::{parse_script, Key};
    use crate::tui::{CalculatorApp, CalculatorLayout, InputHandler, KeyAction, KeypadWidget};

    /// Terminal size the driver pretends to have
    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    /// Drives the terminal app: buttons are clicked, keys are typed
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
        handler: InputHandler,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                handler: InputHandler::new(),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }

        /// Sends one key press through the crossterm event path
        pub fn send_key(&mut self, key: Key) {
            let code = match key {
                Key::Char(c) => KeyCode::Char(c),
                Key::Enter => KeyCode::Enter,
                Key::Escape => KeyCode::Esc,
                Key::Backspace => KeyCode::Backspace,
                Key::Other => KeyCode::Tab,
            };
            let event = KeyEvent::new(code, KeyModifiers::NONE);
            let action = self.handler.handle_key(event, self.app.keyboard());
            self.app.handle_action(action, AREA);
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, input: Input) {
            let keypad_area = CalculatorLayout::new(AREA).keypad;
            let target = self
                .app
                .keypad()
                .find(input)
                .and_then(|i| self.app.keypad().get_button(i))
                .and_then(|btn| KeypadWidget::button_center(keypad_area, btn));

            if let Some((column, row)) = target {
                self.app
                    .handle_action(KeyAction::Click { column, row }, AREA);
            }
        }

        fn type_keys(&mut self, script: &str) -> CalcResult<()> {
            parse_script(script)?;
            script
                .chars()
                .filter(|c| !matches!(*c, ' ' | '\t'))
                .for_each(|c| self.send_key(Key::from_script(c)));
            Ok(())
        }

        fn display(&self) -> String {
            self.app.engine().display().to_string()
        }

        fn equation(&self) -> String {
            self.app.engine().equation().to_string()
        }

        fn active_operator(&self) -> Option<Operator> {
            self.app.engine().active_operator()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies digit and decimal entry
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    // Leading zero collapses
    driver.type_keys("05").unwrap();
    assert_eq!(driver.display(), "5");
    driver.type_keys("67").unwrap();
    assert_eq!(driver.display(), "567");
    driver.clear();

    // Decimal point is idempotent
    driver.press(Input::Decimal);
    driver.press(Input::Decimal);
    assert_eq!(driver.display(), "0.");
    driver.type_keys("25.").unwrap();
    assert_eq!(driver.display(), "0.25");
    driver.clear();
}

/// Verifies left-to-right operator chaining
pub fn verify_operator_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.type_keys("7+3+").unwrap();
    assert_eq!(driver.display(), "10");
    assert_eq!(driver.equation(), "10 + ");

    // No precedence: 9 - 4 is computed before × 2
    driver.clear();
    driver.type_keys("9-4*").unwrap();
    assert_eq!(driver.display(), "5");
    driver.type_keys("2").unwrap();
    assert_eq!(driver.active_operator(), Some(Operator::Multiply));
    driver.press(Input::Equals);
    assert_eq!(driver.display(), "10");
    assert_eq!(driver.active_operator(), None);

    // A second operator press only swaps the pending one
    driver.clear();
    driver.type_keys("6+-").unwrap();
    assert_eq!(driver.equation(), "6 - ");
    driver.type_keys("2=").unwrap();
    assert_eq!(driver.display(), "4");
    driver.clear();
}

/// Verifies division by zero shows the error marker
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.type_keys("5/0=").unwrap();
    assert_eq!(driver.display(), ERROR_MARKER);

    // Operators are ignored until a fresh entry starts
    driver.press(Input::Operator(Operator::Add));
    assert_eq!(driver.display(), ERROR_MARKER);
    driver.type_keys("8").unwrap();
    assert_eq!(driver.display(), "8");
    assert_eq!(driver.equation(), "");

    // A chain that divides by zero keeps the next operator pending
    driver.clear();
    driver.type_keys("5/0+").unwrap();
    assert_eq!(driver.display(), ERROR_MARKER);
    assert_eq!(driver.equation(), "Error + ");
    assert_eq!(driver.active_operator(), None);
    driver.type_keys("8").unwrap();
    assert_eq!(driver.display(), "8");
    driver.clear();
}

/// Verifies the equation trace and equals no-ops
pub fn verify_equals_trace<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press(Input::Equals);
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.equation(), "");

    driver.type_keys("12+3").unwrap();
    assert_eq!(driver.equation(), "12 + ");
    driver.press(Input::Equals);
    assert_eq!(driver.equation(), "12 + 3 = ");
    assert_eq!(driver.display(), "15");

    // Repeated equals changes nothing
    driver.press(Input::Equals);
    assert_eq!(driver.equation(), "12 + 3 = ");
    assert_eq!(driver.display(), "15");
    driver.clear();
}

/// Verifies backspace
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.type_keys("123<").unwrap();
    assert_eq!(driver.display(), "12");
    driver.type_keys("<<").unwrap();
    assert_eq!(driver.display(), "0");
    driver.press(Input::Backspace);
    assert_eq!(driver.display(), "0");

    // Backspace leaves the pending operation alone
    driver.type_keys("4+56<").unwrap();
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.equation(), "4 + ");
    driver.press(Input::Equals);
    assert_eq!(driver.display(), "9");
    driver.clear();
}

/// Verifies clear restores the initial state
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.type_keys("8*7").unwrap();
    driver.press(Input::Clear);
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.equation(), "");
    assert_eq!(driver.active_operator(), None);

    // Escape clears too
    driver.type_keys("3+C").unwrap();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.equation(), "");
}

/// Runs every scenario in order
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_operator_chaining(driver);
    verify_division_by_zero(driver);
    verify_equals_trace(driver);
    verify_backspace(driver);
    verify_clear(driver);
}
