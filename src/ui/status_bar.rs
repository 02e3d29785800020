//! Bottom status bar: notices and keybind hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus, NoticeKind, Section};

use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_OK};

/// Notices take precedence over hints; the hint line adapts to where the
/// focus is so row actions are discoverable.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Info => COLOR_OK,
            NoticeKind::Error => COLOR_ERROR,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", notice.text),
                Style::default().fg(color),
            ))),
            area,
        );
        return;
    }

    let hints = match (app.focus, app.section) {
        (Focus::Form, Section::Loans) => {
            " tab section \u{2502} \u{2191}\u{2193} field \u{2502} \u{2190}\u{2192} pick \u{2502} enter create \u{2502} esc reset"
        }
        (Focus::Form, _) => {
            " tab section \u{2502} \u{2191}\u{2193} field \u{2502} enter save \u{2502} esc reset"
        }
        (Focus::List, Section::Loans) => {
            " tab section \u{2502} \u{2191}\u{2193} row \u{2502} r return \u{2502} d delete \u{2502} g refresh \u{2502} q quit"
        }
        (Focus::List, _) => {
            " tab section \u{2502} \u{2191}\u{2193} row \u{2502} e edit \u{2502} d delete \u{2502} g refresh \u{2502} q quit"
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(COLOR_DIM),
        ))),
        area,
    );
}
