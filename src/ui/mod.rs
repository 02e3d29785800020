//! Rendering for the TUI.
//!
//! Pure view code: everything here reads [`App`] state and draws, nothing
//! mutates. One frame = tab bar, the active section's form + list pair,
//! status bar, and the confirmation dialog on top when a delete is
//! pending.

pub mod components;
pub mod theme;

mod books;
mod loans;
mod members;
mod status_bar;

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Section};
use theme::{COLOR_ACCENT, COLOR_DIM};

/// Render a full frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [tabs_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_tabs(frame, tabs_area, app.section);

    match app.section {
        Section::Books => books::render_books(frame, body_area, app),
        Section::Members => members::render_members(frame, body_area, app),
        Section::Loans => loans::render_loans(frame, body_area, app),
    }

    status_bar::render_status_bar(frame, status_area, app);

    if let Some(pending) = &app.confirm {
        components::render_confirm_dialog(frame, area, pending.prompt());
    }
}

/// Horizontal section selector, `▶` marking the active tab.
fn render_tabs(frame: &mut Frame, area: Rect, active: Section) {
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];
    for section in Section::ALL {
        if section == active {
            spans.push(Span::styled(
                format!("\u{25b6} {}", section.title()),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!("  {}", section.title()),
                Style::default().fg(COLOR_DIM),
            ));
        }
        spans.push(Span::raw("   "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Truncate-and-pad a table cell to an exact display width.
pub(crate) fn pad_cell(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let text_width = text.width();
    if text_width <= width {
        let mut out = text.to_string();
        out.extend(std::iter::repeat(' ').take(width - text_width));
        return out;
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += char_width;
    }
    out.push('\u{2026}');
    used += 1;
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Dates render day-granular everywhere, matching what staff care about.
pub(crate) fn fmt_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// First row index shown so that the selection stays visible.
pub(crate) fn scroll_offset(selected: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return selected;
    }
    selected.saturating_sub(visible_rows - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pad_cell_pads_short_text() {
        assert_eq!(pad_cell("abc", 5), "abc  ");
        assert_eq!(pad_cell("", 3), "   ");
    }

    #[test]
    fn test_pad_cell_truncates_with_ellipsis() {
        let cell = pad_cell("a long title", 6);
        assert_eq!(cell.chars().count(), 6);
        assert!(cell.contains('\u{2026}'));
    }

    #[test]
    fn test_pad_cell_handles_wide_chars() {
        // CJK characters are two columns wide
        let cell = pad_cell("\u{66f8}\u{66f8}\u{66f8}", 4);
        assert_eq!(UnicodeWidthStr::width(cell.as_str()), 4);
    }

    #[test]
    fn test_pad_cell_zero_width() {
        assert_eq!(pad_cell("abc", 0), "");
    }

    #[test]
    fn test_fmt_date() {
        let ts = Utc.with_ymd_and_hms(2026, 2, 15, 23, 59, 0).unwrap();
        assert_eq!(fmt_date(&ts), "2026-02-15");
    }

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(12, 5), 8);
    }
}
