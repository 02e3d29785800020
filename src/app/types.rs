//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`Section`] - Which entity section is currently displayed
//! - [`Focus`] - Whether the form or the list has focus
//! - [`Notice`] - The status-bar message
//! - [`PendingDelete`] - A delete awaiting user confirmation

/// Which entity section is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Books,
    Members,
    Loans,
}

impl Section {
    /// All sections in tab order.
    pub const ALL: [Section; 3] = [Section::Books, Section::Members, Section::Loans];

    /// Tab label.
    pub fn title(self) -> &'static str {
        match self {
            Section::Books => "Books",
            Section::Members => "Members",
            Section::Loans => "Loans",
        }
    }

    /// Next section in tab order, wrapping.
    pub fn next(self) -> Self {
        match self {
            Section::Books => Section::Members,
            Section::Members => Section::Loans,
            Section::Loans => Section::Books,
        }
    }

    /// Previous section in tab order, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Section::Books => Section::Loans,
            Section::Members => Section::Books,
            Section::Loans => Section::Members,
        }
    }
}

/// Whether the form panel or the list panel receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Form,
    List,
}

/// Severity of the status-bar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A user-visible message in the status bar.
///
/// Validation failures and network failures both land here; the next
/// successful action clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// A delete action waiting for explicit confirmation.
///
/// Declining must issue no network call, so the id is parked here until
/// the user answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDelete {
    Book { id: String },
    Member { id: String },
    Loan { id: String },
}

impl PendingDelete {
    /// Question shown in the confirmation dialog.
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingDelete::Book { .. } => "Delete this book?",
            PendingDelete::Member { .. } => "Delete this member?",
            PendingDelete::Loan { .. } => "Are you sure you want to delete this loan?",
        }
    }
}
