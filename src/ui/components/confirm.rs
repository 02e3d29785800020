//! Delete confirmation dialog.
//!
//! A small centered dialog over a cleared background. The answer keys are
//! spelled out in the dialog itself; anything other than an explicit yes
//! declines.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR};

/// Render the confirmation dialog centered in `area`.
pub fn render_confirm_dialog(frame: &mut Frame, area: Rect, prompt: &str) {
    let width = (prompt.len() as u16 + 6)
        .max(28)
        .min(area.width.saturating_sub(4));
    let height = 5;

    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let dialog_area = Rect {
        x,
        y,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Confirm ", Style::default().fg(COLOR_ACCENT)))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let lines = vec![
        Line::from(Span::styled(prompt, Style::default().fg(COLOR_ACCENT))),
        Line::default(),
        Line::from(vec![
            Span::styled("[y] ", Style::default().fg(COLOR_ERROR)),
            Span::styled("delete   ", Style::default().fg(COLOR_DIM)),
            Span::styled("[n] ", Style::default().fg(COLOR_ACCENT)),
            Span::styled("cancel", Style::default().fg(COLOR_DIM)),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).centered(),
        dialog_area,
    );
}
