//! Terminal session and event loop
//!
//! The session puts the terminal into raw mode on start and restores it on
//! drop, including when the loop exits through an error.

use std::fmt;
use std::io::{self, Stdout};

use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use super::app::CalculatorApp;
use super::input::InputHandler;
use super::ui::render;

/// Raw-mode terminal owned for the lifetime of the calculator
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse: bool,
}

impl fmt::Debug for TerminalSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalSession")
            .field("mouse", &self.mouse)
            .finish_non_exhaustive()
    }
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be configured. Anything
    /// already enabled is restored before returning.
    pub fn start(mouse: bool) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let mut session = Self { terminal, mouse };

        enable_raw_mode()?;
        execute!(
            session.terminal.backend_mut(),
            EnterAlternateScreen,
            EnableFocusChange
        )?;
        if mouse {
            execute!(session.terminal.backend_mut(), EnableMouseCapture)?;
        }
        session.terminal.clear()?;

        tracing::debug!(mouse, "terminal session started");
        Ok(session)
    }

    /// Returns the terminal for drawing
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!(%err, "failed to disable raw mode");
        }
        let backend = self.terminal.backend_mut();
        let restored = if self.mouse {
            execute!(
                backend,
                DisableMouseCapture,
                DisableFocusChange,
                LeaveAlternateScreen
            )
        } else {
            execute!(backend, DisableFocusChange, LeaveAlternateScreen)
        };
        if let Err(err) = restored {
            tracing::warn!(%err, "failed to restore terminal screen");
        }
        if let Err(err) = self.terminal.show_cursor() {
            tracing::warn!(%err, "failed to show cursor");
        }
        tracing::debug!("terminal session ended");
    }
}

/// Blocking stream of terminal events
pub fn terminal_events() -> impl Iterator<Item = io::Result<Event>> {
    std::iter::repeat_with(event::read)
}

/// Runs the calculator until quit or until the events run out
///
/// Draws once up front and again after every event. Clicks are hit-tested
/// against the area of the last drawn frame.
///
/// # Errors
///
/// Returns the first drawing or event-reading error.
pub fn run<B, I>(terminal: &mut Terminal<B>, app: &mut CalculatorApp, events: I) -> io::Result<()>
where
    B: Backend,
    I: IntoIterator<Item = io::Result<Event>>,
{
    let handler = InputHandler::new();
    let mut area = terminal.draw(|frame| render(app, frame))?.area;

    for event in events {
        let action = handler.handle_event(&event?, app.keyboard());
        app.handle_action(action, area);
        if app.should_quit() {
            tracing::info!(display = app.engine().display(), "quit requested");
            break;
        }
        area = terminal.draw(|frame| render(app, frame))?.area;
    }
    Ok(())
}

/// Runs the calculator in the real terminal
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or the loop fails.
pub fn run_in_terminal(app: &mut CalculatorApp, mouse: bool) -> io::Result<()> {
    let mut session = TerminalSession::start(mouse)?;
    run(session.terminal_mut(), app, terminal_events())
}
