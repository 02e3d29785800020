//! AppMessage enum for async communication within the application.

use crate::models::{Book, Loan, Member};

use super::Section;

/// What kind of mutation a completion message refers to.
///
/// Distinguishes the form-submission path (which resets the form on
/// success) from row actions (which only refresh).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Create-or-update issued from a form
    Save,
    /// Row delete, post-confirmation
    Delete,
    /// Loan return
    Return,
}

/// Messages received from spawned API tasks.
///
/// The event loop feeds these back into [`super::App::handle_message`];
/// nothing mutates app state from inside a spawned task.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Book collection fetched successfully
    BooksLoaded(Vec<Book>),
    /// Member collection fetched successfully
    MembersLoaded(Vec<Member>),
    /// Loan collection fetched successfully
    LoansLoaded(Vec<Loan>),
    /// A list fetch failed; the collection keeps its previous contents
    LoadFailed { section: Section, error: String },
    /// A mutation succeeded; the affected collection should be re-fetched
    MutationDone { section: Section, kind: MutationKind },
    /// A mutation failed; form state is left exactly as the user entered it
    MutationFailed {
        section: Section,
        kind: MutationKind,
        error: String,
    },
}
