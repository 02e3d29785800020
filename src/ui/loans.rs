//! Loans section: create form over the loan table.
//!
//! Book and member are cycled through the already-fetched collections;
//! the table's Book/Member columns come from summaries the backend embeds
//! in each loan record, falling back to empty cells when they are absent.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::forms::LoanField;

use super::components::{render_input_line, InputLineConfig};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_OUTSTANDING, COLOR_SELECTED_BG,
    COLOR_TABLE_HEADER,
};
use super::{fmt_date, pad_cell, scroll_offset};

pub fn render_loans(frame: &mut Frame, area: Rect, app: &App) {
    let [form_area, list_area] =
        Layout::vertical([Constraint::Length(6), Constraint::Min(3)]).areas(area);

    render_form(frame, form_area, app);
    render_table(frame, list_area, app);
}

/// Label shown in the book selector: title plus the live copy count.
fn book_label(app: &App) -> String {
    let Some(id) = app.loan_form.book_id.as_deref() else {
        return String::new();
    };
    match app.books.items().iter().find(|b| b.id == id) {
        Some(book) => format!("{} ({} copies)", book.title, book.copies),
        // Selection outlived a refresh; show the raw id rather than lying
        None => id.to_string(),
    }
}

fn member_label(app: &App) -> String {
    let Some(id) = app.loan_form.member_id.as_deref() else {
        return String::new();
    };
    match app.members.items().iter().find(|m| m.id == id) {
        Some(member) => member.name.clone(),
        None => id.to_string(),
    }
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.loan_form;
    let focused = app.focus == Focus::Form;

    let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            " Create Loan ",
            Style::default().fg(COLOR_HEADER),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1); 4]).split(inner);

    render_input_line(
        frame,
        rows[0],
        &InputLineConfig::new("Book", &book_label(app))
            .focused(focused && form.field == LoanField::Book)
            .selector(true)
            .placeholder("Select Book"),
    );
    render_input_line(
        frame,
        rows[1],
        &InputLineConfig::new("Member", &member_label(app))
            .focused(focused && form.field == LoanField::Member)
            .selector(true)
            .placeholder("Select Member"),
    );
    render_input_line(
        frame,
        rows[2],
        &InputLineConfig::new("Due", &form.due)
            .focused(focused && form.field == LoanField::Due)
            .placeholder("YYYY-MM-DD"),
    );

    if form.submitting {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  Saving\u{2026}",
                Style::default().fg(COLOR_DIM),
            ))),
            rows[3],
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
            " Current Loans ",
            Style::default().fg(COLOR_HEADER),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let date_w = 11.min(width / 6);
    let rest = width.saturating_sub(3 * date_w + 5);
    let book_w = rest / 2;
    let member_w = rest - book_w;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(
            " {} {} {} {} {}",
            pad_cell("Book", book_w),
            pad_cell("Member", member_w),
            pad_cell("Loaned", date_w),
            pad_cell("Due", date_w),
            pad_cell("Returned", date_w),
        ),
        Style::default()
            .fg(COLOR_TABLE_HEADER)
            .add_modifier(Modifier::BOLD),
    )));

    if app.loans.is_empty() {
        lines.push(Line::from(Span::styled(
            " No loans found",
            Style::default().fg(COLOR_DIM),
        )));
    } else {
        let visible = (inner.height as usize).saturating_sub(1);
        let offset = scroll_offset(app.loans_index, visible);
        for (i, loan) in app.loans.items().iter().enumerate().skip(offset).take(visible) {
            let returned = match &loan.returned_at {
                Some(ts) => fmt_date(ts),
                None => "-".to_string(),
            };
            let text = format!(
                " {} {} {} {} {}",
                pad_cell(loan.book_title(), book_w),
                pad_cell(loan.member_name(), member_w),
                pad_cell(&fmt_date(&loan.created_at), date_w),
                pad_cell(&fmt_date(&loan.due_at), date_w),
                pad_cell(&returned, date_w),
            );
            let style = if focused && i == app.loans_index {
                Style::default().fg(COLOR_ACCENT).bg(COLOR_SELECTED_BG)
            } else if loan.is_outstanding() {
                Style::default().fg(COLOR_OUTSTANDING)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            lines.push(Line::from(Span::styled(text, style)));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
