//! Keypad widget for the terminal
//!
//! Visual feedback: the pending operator and the last pressed button are
//! drawn highlighted, so the calculator state is obvious at a glance.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{CalculatorState, Input};
use crate::keypad::{Keypad, KeypadButton};

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    state: &'a CalculatorState,
    pressed: Option<usize>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad, state: &'a CalculatorState) -> Self {
        Self {
            keypad,
            state,
            pressed: None,
        }
    }

    /// Marks a button as just pressed
    #[must_use]
    pub fn pressed(mut self, index: Option<usize>) -> Self {
        self.pressed = index;
        self
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (btn_width, btn_height) = cell_size(inner(area));
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        keypad.index_at(row, col)
    }

    /// Returns a terminal cell inside the button, the inverse of `hit_test`
    #[must_use]
    pub fn button_center(area: Rect, btn: &KeypadButton) -> Option<(u16, u16)> {
        let inner = inner(area);
        let (btn_width, btn_height) = cell_size(inner);
        if btn_width == 0 || btn_height == 0 {
            return None;
        }
        Some((
            inner.x + btn.col as u16 * btn_width + btn.span as u16 * btn_width / 2,
            inner.y + btn.row as u16 * btn_height + btn_height / 2,
        ))
    }

    fn button_style(&self, index: usize, btn: &KeypadButton) -> Style {
        if self.pressed == Some(index) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        if Keypad::is_highlighted(btn, self.state) {
            return Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD);
        }
        match btn.input {
            Input::Digit(_) | Input::Decimal => Style::default().fg(Color::White),
            Input::Operator(_) => Style::default().fg(Color::LightBlue),
            Input::Equals => Style::default().fg(Color::Green),
            Input::Clear => Style::default().fg(Color::Red),
            Input::Backspace => Style::default().fg(Color::Gray),
        }
    }
}

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn cell_size(inner: Rect) -> (u16, u16) {
    (
        inner.width / Keypad::COLS as u16,
        inner.height / Keypad::ROWS as u16,
    )
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = inner(area);
        let (btn_width, btn_height) = cell_size(inner);
        if btn_width < 3 || btn_height == 0 {
            return; // Too small to render
        }

        for (index, btn) in self.keypad.buttons().enumerate() {
            let x = inner.x + btn.col as u16 * btn_width;
            let y = inner.y + btn.row as u16 * btn_height + btn_height / 2;
            let width = btn.span as u16 * btn_width;

            let label = Span::styled(format!("[{}]", btn.label), self.button_style(index, btn));
            let label_x = x + width.saturating_sub(label.width() as u16) / 2;

            if y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(label_x, y, &label, width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operator};

    fn buf_to_string(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== Hit test tests =====

    #[test]
    fn test_hit_test_each_cell() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 12); // inner 24x10 -> cells 6x2
        for row in 0..Keypad::ROWS {
            for col in 0..Keypad::COLS {
                let x = 1 + col as u16 * 6 + 2;
                let y = 1 + row as u16 * 2;
                assert_eq!(
                    KeypadWidget::hit_test(&keypad, area, x, y),
                    keypad.index_at(row, col),
                    "cell ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn test_hit_test_wide_zero() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 12);
        let zero = keypad.find(Input::Digit(Digit::new(0).unwrap()));
        assert_eq!(KeypadWidget::hit_test(&keypad, area, 2, 9), zero);
        assert_eq!(KeypadWidget::hit_test(&keypad, area, 9, 9), zero);
    }

    #[test]
    fn test_hit_test_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 10, 26, 12);
        assert!(KeypadWidget::hit_test(&keypad, area, 0, 0).is_none());
        assert!(KeypadWidget::hit_test(&keypad, area, 100, 100).is_none());
    }

    #[test]
    fn test_hit_test_border() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 12);
        assert!(KeypadWidget::hit_test(&keypad, area, 0, 5).is_none());
        assert!(KeypadWidget::hit_test(&keypad, area, 5, 0).is_none());
        assert!(KeypadWidget::hit_test(&keypad, area, 25, 5).is_none());
    }

    #[test]
    fn test_hit_test_tiny_area() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 4, 4);
        assert!(KeypadWidget::hit_test(&keypad, area, 1, 1).is_none());
    }

    #[test]
    fn test_button_center_round_trips() {
        let keypad = Keypad::new();
        let area = Rect::new(3, 4, 26, 12);
        for (index, btn) in keypad.buttons().enumerate() {
            let (x, y) = KeypadWidget::button_center(area, btn).unwrap();
            assert_eq!(
                KeypadWidget::hit_test(&keypad, area, x, y),
                Some(index),
                "button {}",
                btn.label
            );
        }
    }

    #[test]
    fn test_button_center_tiny_area() {
        let keypad = Keypad::new();
        let btn = keypad.get_button(0).unwrap();
        assert!(KeypadWidget::button_center(Rect::new(0, 0, 3, 3), btn).is_none());
    }

    // ===== Render tests =====

    #[test]
    fn test_render_labels() {
        let keypad = Keypad::new();
        let state = CalculatorState::new();
        let area = Rect::new(0, 0, 26, 12);
        let mut buf = Buffer::empty(area);

        KeypadWidget::new(&keypad, &state).render(area, &mut buf);

        let content = buf_to_string(&buf);
        assert!(content.contains("Keypad"));
        assert!(content.contains("[7]"));
        assert!(content.contains("[C]"));
        assert!(content.contains("[=]"));
    }

    #[test]
    fn test_render_small_does_not_panic() {
        let keypad = Keypad::new();
        let state = CalculatorState::new();
        let area = Rect::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad, &state).render(area, &mut buf);
    }

    #[test]
    fn test_render_highlights_active_operator() {
        let keypad = Keypad::new();
        let state = CalculatorState::new()
            .input_digit(Digit::new(2).unwrap())
            .perform_operation(Operator::Add)
            .input_digit(Digit::new(3).unwrap());
        let area = Rect::new(0, 0, 26, 12);
        let mut buf = Buffer::empty(area);

        KeypadWidget::new(&keypad, &state).render(area, &mut buf);

        let plus = buf
            .content()
            .iter()
            .find(|cell| cell.symbol() == "+")
            .unwrap();
        assert_eq!(plus.bg, Color::Blue);
    }

    #[test]
    fn test_render_pressed_button() {
        let keypad = Keypad::new();
        let state = CalculatorState::new();
        let seven = keypad.find(Input::Digit(Digit::new(7).unwrap()));
        let area = Rect::new(0, 0, 26, 12);
        let mut buf = Buffer::empty(area);

        KeypadWidget::new(&keypad, &state)
            .pressed(seven)
            .render(area, &mut buf);

        let cell = buf
            .content()
            .iter()
            .find(|cell| cell.symbol() == "7")
            .unwrap();
        assert_eq!(cell.bg, Color::Yellow);
    }
}
