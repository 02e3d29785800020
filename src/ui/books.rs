//! Books section: add/edit form over the catalog table.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::forms::BookField;

use super::components::{render_input_line, InputLineConfig};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG, COLOR_TABLE_HEADER,
};
use super::{pad_cell, scroll_offset};

pub fn render_books(frame: &mut Frame, area: Rect, app: &App) {
    let [form_area, list_area] =
        Layout::vertical([Constraint::Length(7), Constraint::Min(3)]).areas(area);

    render_form(frame, form_area, app);
    render_table(frame, list_area, app);
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.book_form;
    let focused = app.focus == Focus::Form;

    let title = if form.is_editing() {
        " Edit Book "
    } else {
        " Add Book "
    };
    let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(COLOR_HEADER)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1); 5]).split(inner);

    let fields = [
        ("ISBN", BookField::Isbn, form.isbn.as_str(), "13 digits"),
        ("Title", BookField::Title, form.title.as_str(), ""),
        ("Author", BookField::Author, form.author.as_str(), ""),
        ("Copies", BookField::Copies, form.copies.as_str(), "at least 1"),
    ];
    for (i, (label, field, value, placeholder)) in fields.iter().enumerate() {
        let mut config =
            InputLineConfig::new(label, value).focused(focused && form.field == *field);
        if !placeholder.is_empty() {
            config = config.placeholder(placeholder);
        }
        render_input_line(frame, rows[i], &config);
    }

    if form.submitting {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  Saving\u{2026}",
                Style::default().fg(COLOR_DIM),
            ))),
            rows[4],
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
            " All Books ",
            Style::default().fg(COLOR_HEADER),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let isbn_w = 15.min(width / 4);
    let copies_w = 8.min(width / 6);
    let rest = width.saturating_sub(isbn_w + copies_w + 4);
    let title_w = rest / 2;
    let author_w = rest - title_w;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(
            " {} {} {} {}",
            pad_cell("ISBN", isbn_w),
            pad_cell("Title", title_w),
            pad_cell("Author", author_w),
            pad_cell("Copies", copies_w),
        ),
        Style::default()
            .fg(COLOR_TABLE_HEADER)
            .add_modifier(Modifier::BOLD),
    )));

    if app.books.is_empty() {
        lines.push(Line::from(Span::styled(
            " No books found",
            Style::default().fg(COLOR_DIM),
        )));
    } else {
        let visible = (inner.height as usize).saturating_sub(1);
        let offset = scroll_offset(app.books_index, visible);
        for (i, book) in app.books.items().iter().enumerate().skip(offset).take(visible) {
            let text = format!(
                " {} {} {} {}",
                pad_cell(&book.isbn, isbn_w),
                pad_cell(&book.title, title_w),
                pad_cell(&book.author, author_w),
                pad_cell(&book.copies.to_string(), copies_w),
            );
            let style = if focused && i == app.books_index {
                Style::default().fg(COLOR_ACCENT).bg(COLOR_SELECTED_BG)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            lines.push(Line::from(Span::styled(text, style)));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
