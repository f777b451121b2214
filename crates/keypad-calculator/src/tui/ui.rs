//! Terminal rendering
//!
//! Visual feedback makes state visible: equation trace above the display,
//! keypad below, shortcuts on the side.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Screen regions of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Equation and display
    pub screen: Rect,
    /// Button grid
    pub keypad: Rect,
    /// Shortcut help
    pub help: Rect,
}

impl CalculatorLayout {
    /// Splits the full terminal area into calculator regions
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([
                Constraint::Min(26),    // Calculator
                Constraint::Length(26), // Help sidebar
            ])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Equation + display
                Constraint::Min(7),    // Keypad
            ])
            .split(columns[0]);

        Self {
            screen: rows[0],
            keypad: rows[1],
            help: columns[1],
        }
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the equation trace and the display
    fn render_screen(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.engine().state();

        let display_style = if state.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                state.equation(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(state.display(), display_style)),
        ];

        // Focus ring
        let border = if self.app.keyboard().is_focused() {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .render(area, buf);
    }

    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        KeypadWidget::new(self.app.keypad(), self.app.engine().state())
            .pressed(self.app.pressed())
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>8}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Keyboard Shortcuts ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = CalculatorLayout::new(area);
        self.render_screen(layout.screen, buf);
        self.render_keypad(layout.keypad, buf);
        self.render_help(layout.help, buf);
    }
}

/// Window title
pub const TITLE: &str = " Keypad Calculator ";

/// Keyboard shortcuts shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "Digits"),
    ("+ - * /", "Operators"),
    (".", "Decimal"),
    ("= Enter", "Equals"),
    ("Esc", "Clear"),
    ("⌫", "Backspace"),
    ("Ctrl+C", "Quit"),
];
