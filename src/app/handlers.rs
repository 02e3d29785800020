//! Keyboard dispatch.
//!
//! One entry point, [`App::handle_key`], routed by modal state: an open
//! confirmation dialog swallows everything, otherwise keys go to the
//! focused panel. Tab/BackTab switch sections globally; Down past the last
//! form field drops into the list, Up from the first list row climbs back
//! into the form.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::forms::{BookField, LoanField, MemberField};

use super::{App, Focus, Section};

impl App {
    /// Apply a key event to the current state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Windows terminals deliver Release events too
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.confirm.is_some() {
            self.handle_confirm_key(key);
            return;
        }

        match key.code {
            KeyCode::Tab => self.next_section(),
            KeyCode::BackTab => self.prev_section(),
            _ => match self.focus {
                Focus::Form => self.handle_form_key(key),
                Focus::List => self.handle_list_key(key),
            },
        }
    }

    /// Keys while the confirmation dialog is open. Only an explicit yes
    /// issues the delete; everything else declines.
    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.cancel_delete(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_focused_form(),
            KeyCode::Esc => self.reset_focused_form(),
            KeyCode::Up => self.form_focus_up(),
            KeyCode::Down => self.form_focus_down(),
            KeyCode::Backspace => self.form_backspace(),
            KeyCode::Left if self.loan_selector_focused() => self.cycle_loan_selector(-1),
            KeyCode::Right if self.loan_selector_focused() => self.cycle_loan_selector(1),
            KeyCode::Char(' ') if self.loan_selector_focused() => self.cycle_loan_selector(1),
            KeyCode::Char(c) => self.form_insert(c),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected_index() == 0 {
                    self.focus = Focus::Form;
                } else {
                    self.move_up();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Char('e') | KeyCode::Enter => self.edit_selected(),
            KeyCode::Char('d') => self.request_delete_selected(),
            KeyCode::Char('r') => {
                if self.section == Section::Loans {
                    self.return_selected_loan();
                }
            }
            KeyCode::Char('g') => self.refresh_current_section(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    /// Manual re-fetch of the visible collection.
    fn refresh_current_section(&mut self) {
        match self.section {
            Section::Books => self.refresh_books(),
            Section::Members => self.refresh_members(),
            Section::Loans => self.refresh_loans(),
        }
    }

    fn submit_focused_form(&mut self) {
        match self.section {
            Section::Books => self.submit_book_form(),
            Section::Members => self.submit_member_form(),
            Section::Loans => self.submit_loan_form(),
        }
    }

    fn reset_focused_form(&mut self) {
        match self.section {
            Section::Books => self.book_form.reset(),
            Section::Members => self.member_form.reset(),
            Section::Loans => self.loan_form.reset(),
        }
        self.notice = None;
    }

    fn form_focus_up(&mut self) {
        match self.section {
            Section::Books => {
                if self.book_form.field != BookField::Isbn {
                    self.book_form.focus_prev();
                }
            }
            Section::Members => {
                if self.member_form.field != MemberField::Name {
                    self.member_form.focus_next();
                }
            }
            Section::Loans => {
                if self.loan_form.field != LoanField::Book {
                    self.loan_form.focus_prev();
                }
            }
        }
    }

    /// Down past the last field moves focus into the list.
    fn form_focus_down(&mut self) {
        let at_last = match self.section {
            Section::Books => self.book_form.field == BookField::Copies,
            Section::Members => self.member_form.field == MemberField::Email,
            Section::Loans => self.loan_form.field == LoanField::Due,
        };
        if at_last {
            self.focus = Focus::List;
            return;
        }
        match self.section {
            Section::Books => self.book_form.focus_next(),
            Section::Members => self.member_form.focus_next(),
            Section::Loans => self.loan_form.focus_next(),
        }
    }

    fn form_insert(&mut self, c: char) {
        match self.section {
            Section::Books => self.book_form.insert_char(c),
            Section::Members => self.member_form.insert_char(c),
            Section::Loans => self.loan_form.insert_char(c),
        }
    }

    fn form_backspace(&mut self) {
        match self.section {
            Section::Books => self.book_form.backspace(),
            Section::Members => self.member_form.backspace(),
            Section::Loans => self.loan_form.backspace(),
        }
    }

    fn loan_selector_focused(&self) -> bool {
        self.section == Section::Loans
            && matches!(self.loan_form.field, LoanField::Book | LoanField::Member)
    }

    fn cycle_loan_selector(&mut self, delta: isize) {
        match self.loan_form.field {
            LoanField::Book => self.cycle_loan_book(delta),
            LoanField::Member => self.cycle_loan_member(delta),
            LoanField::Due => {}
        }
    }
}
