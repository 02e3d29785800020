//! Input Line Component
//!
//! A compact single-row input: right-padded label, value, and a block
//! cursor when focused. Selector-style inputs (picked, not typed) render
//! with arrows instead of a cursor.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// Configuration for rendering a single input line
#[derive(Debug, Clone)]
pub struct InputLineConfig<'a> {
    /// Label displayed left of the value
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Placeholder text shown dim while the value is empty
    pub placeholder: Option<&'a str>,
    /// Render as a cycling selector (`◂ value ▸`) instead of a text field
    pub selector: bool,
}

impl<'a> InputLineConfig<'a> {
    /// Create a new input line configuration
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
            selector: false,
        }
    }

    /// Set whether the input is focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Render as a selector cycled with arrow keys
    pub fn selector(mut self, selector: bool) -> Self {
        self.selector = selector;
        self
    }
}

/// Render one input line into a single-row area.
pub fn render_input_line(frame: &mut Frame, area: Rect, config: &InputLineConfig) {
    let label_style = if config.focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let showing_placeholder = config.value.is_empty() && config.placeholder.is_some();
    let display_value = if showing_placeholder {
        config.placeholder.unwrap_or_default().to_string()
    } else {
        config.value.to_string()
    };

    let value_style = if showing_placeholder {
        Style::default().fg(COLOR_DIM)
    } else if config.focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let mut spans = vec![
        Span::styled(format!("{:>8}  ", config.label), label_style),
    ];

    if config.selector {
        let marker_style = if config.focused {
            Style::default().fg(COLOR_ACCENT)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled("\u{25c2} ", marker_style));
        spans.push(Span::styled(display_value, value_style));
        spans.push(Span::styled(" \u{25b8}", marker_style));
    } else {
        spans.push(Span::styled(display_value, value_style));
        if config.focused {
            // Block cursor
            spans.push(Span::styled("\u{2588}", Style::default().fg(COLOR_ACCENT)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
