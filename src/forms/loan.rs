//! Loan form controller.
//!
//! Loans have no edit mode: the form only creates. Book and member are
//! picked from the already-fetched collections (the shell drives the
//! cycling), the due date is typed as a calendar date.

use chrono::NaiveDate;

use crate::models::NewLoan;

use super::{is_blank, ValidationError};

/// Which loan input currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoanField {
    #[default]
    Book,
    Member,
    Due,
}

impl LoanField {
    pub fn next(self) -> Self {
        match self {
            LoanField::Book => LoanField::Member,
            LoanField::Member => LoanField::Due,
            LoanField::Due => LoanField::Book,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoanField::Book => LoanField::Due,
            LoanField::Member => LoanField::Book,
            LoanField::Due => LoanField::Member,
        }
    }
}

/// Transient state of the create-loan form.
#[derive(Debug, Clone, Default)]
pub struct LoanForm {
    /// Selected book identifier, or None before a pick
    pub book_id: Option<String>,
    /// Selected member identifier, or None before a pick
    pub member_id: Option<String>,
    /// Due date as typed, YYYY-MM-DD
    pub due: String,
    /// Focused input
    pub field: LoanField,
    /// Set while a submission is in flight; further submits are ignored
    pub submitting: bool,
}

impl LoanForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        self.field = self.field.next();
    }

    pub fn focus_prev(&mut self) {
        self.field = self.field.prev();
    }

    /// Type into the due-date field. Book and member are selections, not
    /// text, so typing only affects the date.
    pub fn insert_char(&mut self, c: char) {
        if self.field != LoanField::Due {
            return;
        }
        if c.is_ascii_digit() || c == '-' {
            self.due.push(c);
        }
    }

    /// Delete the last character of the due-date field.
    pub fn backspace(&mut self) {
        if self.field == LoanField::Due {
            self.due.pop();
        }
    }

    /// Clear all three inputs, unconditionally.
    pub fn reset(&mut self) {
        self.book_id = None;
        self.member_id = None;
        self.due.clear();
    }

    /// Validate the three required selections into a create payload.
    ///
    /// A missing book, member, or date rejects with one combined message;
    /// a present but malformed date gets its own.
    pub fn validate(&self) -> Result<NewLoan, ValidationError> {
        let book_id = match &self.book_id {
            Some(id) => id.clone(),
            None => return Err(ValidationError::MissingLoanFields),
        };
        let member_id = match &self.member_id {
            Some(id) => id.clone(),
            None => return Err(ValidationError::MissingLoanFields),
        };
        if is_blank(&self.due) {
            return Err(ValidationError::MissingLoanFields);
        }

        let due_at = NaiveDate::parse_from_str(self.due.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::BadDueDate)?;

        Ok(NewLoan {
            book_id,
            member_id,
            due_at,
        })
    }
}
