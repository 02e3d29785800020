//! Members section: add/edit form over the member list.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::forms::MemberField;

use super::components::{render_input_line, InputLineConfig};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG, COLOR_TABLE_HEADER,
};
use super::{fmt_date, pad_cell, scroll_offset};

pub fn render_members(frame: &mut Frame, area: Rect, app: &App) {
    let [form_area, list_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(3)]).areas(area);

    render_form(frame, form_area, app);
    render_table(frame, list_area, app);
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.member_form;
    let focused = app.focus == Focus::Form;

    let title = if form.is_editing() {
        " Edit Member "
    } else {
        " Add Member "
    };
    let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(COLOR_HEADER)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1); 3]).split(inner);

    render_input_line(
        frame,
        rows[0],
        &InputLineConfig::new("Name", &form.name).focused(focused && form.field == MemberField::Name),
    );
    render_input_line(
        frame,
        rows[1],
        &InputLineConfig::new("Email", &form.email)
            .focused(focused && form.field == MemberField::Email),
    );

    if form.submitting {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  Saving\u{2026}",
                Style::default().fg(COLOR_DIM),
            ))),
            rows[2],
        );
    }
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::List;
    let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            " Member List ",
            Style::default().fg(COLOR_HEADER),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let joined_w = 12.min(width / 4);
    let rest = width.saturating_sub(joined_w + 3);
    let name_w = rest / 2;
    let email_w = rest - name_w;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(
            " {} {} {}",
            pad_cell("Name", name_w),
            pad_cell("Email", email_w),
            pad_cell("Joined", joined_w),
        ),
        Style::default()
            .fg(COLOR_TABLE_HEADER)
            .add_modifier(Modifier::BOLD),
    )));

    if app.members.is_empty() {
        lines.push(Line::from(Span::styled(
            " No members found",
            Style::default().fg(COLOR_DIM),
        )));
    } else {
        let visible = (inner.height as usize).saturating_sub(1);
        let offset = scroll_offset(app.members_index, visible);
        for (i, member) in app
            .members
            .items()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
        {
            let text = format!(
                " {} {} {}",
                pad_cell(&member.name, name_w),
                pad_cell(&member.email, email_w),
                pad_cell(&fmt_date(&member.joined_at), joined_w),
            );
            let style = if focused && i == app.members_index {
                Style::default().fg(COLOR_ACCENT).bg(COLOR_SELECTED_BG)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            lines.push(Line::from(Span::styled(text, style)));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
