//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Section`] - Which entity section is displayed
//! - [`Focus`] - Whether the form or the list has focus
//! - [`AppMessage`] - Messages for async communication
//!
//! State only ever changes on the event-loop thread: key events call into
//! [`App::handle_key`], spawned API tasks report back through the message
//! channel and [`App::handle_message`]. Collections are replaced wholesale
//! after successful fetches, never patched.

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::{AppMessage, MutationKind};
pub use types::{Focus, Notice, NoticeKind, PendingDelete, Section};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::LibraryClient;
use crate::forms::{BookForm, LoanForm, MemberForm};
use crate::models::{Book, Loan, Member};
use crate::store::Collection;

/// Main application state.
pub struct App {
    /// Shared API client, cloned into spawned tasks
    pub client: Arc<LibraryClient>,
    /// Authoritative book collection (replaced wholesale on fetch)
    pub books: Collection<Book>,
    /// Authoritative member collection
    pub members: Collection<Member>,
    /// Authoritative loan collection
    pub loans: Collection<Loan>,
    /// Active entity section
    pub section: Section,
    /// Form or list focus within the section
    pub focus: Focus,
    /// Book form state
    pub book_form: BookForm,
    /// Member form state
    pub member_form: MemberForm,
    /// Loan form state
    pub loan_form: LoanForm,
    /// Selected row per section
    pub books_index: usize,
    pub members_index: usize,
    pub loans_index: usize,
    /// Status-bar message, cleared by the next action
    pub notice: Option<Notice>,
    /// Delete awaiting confirmation, if any
    pub confirm: Option<PendingDelete>,
    /// Loans are fetched lazily on first visit to the section
    loans_requested: bool,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Sender handed to spawned API tasks
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create the app around a client and the message sender half.
    ///
    /// The caller keeps the receiver and pumps it into
    /// [`App::handle_message`]. No fetch is issued here; startup calls
    /// [`App::refresh_books`] and [`App::refresh_members`] explicitly.
    pub fn new(client: LibraryClient, message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self {
            client: Arc::new(client),
            books: Collection::new(),
            members: Collection::new(),
            loans: Collection::new(),
            section: Section::default(),
            focus: Focus::default(),
            book_form: BookForm::new(),
            member_form: MemberForm::new(),
            loan_form: LoanForm::new(),
            books_index: 0,
            members_index: 0,
            loans_index: 0,
            notice: None,
            confirm: None,
            loans_requested: false,
            should_quit: false,
            message_tx,
        }
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub(crate) fn set_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::info(text));
    }

    pub(crate) fn set_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::error(text));
    }

    /// Apply a message from a spawned API task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::BooksLoaded(items) => {
                self.books.replace(items);
                self.books_index = clamp_index(self.books_index, self.books.len());
            }
            AppMessage::MembersLoaded(items) => {
                self.members.replace(items);
                self.members_index = clamp_index(self.members_index, self.members.len());
            }
            AppMessage::LoansLoaded(items) => {
                self.loans.replace(items);
                self.loans_index = clamp_index(self.loans_index, self.loans.len());
            }
            AppMessage::LoadFailed { section, error } => {
                tracing::error!(section = section.title(), %error, "list fetch failed");
                self.set_error(match section {
                    Section::Books => "Failed to fetch books",
                    Section::Members => "Failed to fetch members",
                    Section::Loans => "Failed to fetch loans",
                });
            }
            AppMessage::MutationDone { section, kind } => {
                self.on_mutation_done(section, kind);
            }
            AppMessage::MutationFailed {
                section,
                kind,
                error,
            } => {
                self.on_mutation_failed(section, kind, error);
            }
        }
    }

    /// Success path of a mutation: reset the form when it was a save,
    /// surface a notice, and re-fetch the affected collection.
    fn on_mutation_done(&mut self, section: Section, kind: MutationKind) {
        match (section, kind) {
            (Section::Books, MutationKind::Save) => {
                self.book_form.submitting = false;
                self.book_form.reset();
                self.set_info("Book saved");
            }
            (Section::Books, MutationKind::Delete) => self.set_info("Book deleted"),
            (Section::Members, MutationKind::Save) => {
                self.member_form.submitting = false;
                self.member_form.reset();
                self.set_info("Member saved");
            }
            (Section::Members, MutationKind::Delete) => self.set_info("Member deleted"),
            (Section::Loans, MutationKind::Save) => {
                self.loan_form.submitting = false;
                self.loan_form.reset();
                self.set_info("Loan recorded");
            }
            (Section::Loans, MutationKind::Delete) => self.set_info("Loan deleted"),
            (Section::Loans, MutationKind::Return) => self.set_info("Loan returned"),
            // Return only exists for loans
            (_, MutationKind::Return) => {}
        }

        match section {
            Section::Books => self.refresh_books(),
            Section::Members => self.refresh_members(),
            Section::Loans => self.refresh_loans(),
        }
    }

    /// Failure path of a mutation: clear the in-flight guard but leave
    /// all form fields and the editing id exactly as the user entered
    /// them, so a retry needs no re-typing.
    fn on_mutation_failed(&mut self, section: Section, kind: MutationKind, error: String) {
        tracing::error!(section = section.title(), ?kind, %error, "mutation failed");
        match (section, kind) {
            (Section::Books, MutationKind::Save) => {
                self.book_form.submitting = false;
                self.set_error("Failed to save book");
            }
            (Section::Books, MutationKind::Delete) => self.set_error("Failed to delete book"),
            (Section::Members, MutationKind::Save) => {
                self.member_form.submitting = false;
                self.set_error("Failed to save member");
            }
            (Section::Members, MutationKind::Delete) => self.set_error("Failed to delete member"),
            (Section::Loans, MutationKind::Save) => {
                self.loan_form.submitting = false;
                self.set_error("Failed to create loan");
            }
            (Section::Loans, MutationKind::Delete) => self.set_error("Failed to delete loan"),
            (Section::Loans, MutationKind::Return) => self.set_error("Failed to return loan"),
            (_, MutationKind::Return) => {}
        }
    }

    pub(crate) fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    pub(crate) fn loans_requested(&self) -> bool {
        self.loans_requested
    }

    pub(crate) fn mark_loans_requested(&mut self) {
        self.loans_requested = true;
    }
}

/// Keep a list selection in range after a wholesale replacement.
fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LibraryClient;
    use crate::config::ApiConfig;
    use chrono::Utc;

    pub(crate) fn test_app() -> (App, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        // Nothing listens on this port; spawned tasks fail fast, and these
        // tests never pump their results back in.
        let config = ApiConfig::new().with_base_url("http://127.0.0.1:59999/api");
        let client = LibraryClient::new(&config).unwrap();
        (App::new(client, tx), rx)
    }

    pub(crate) fn sample_book(id: &str) -> Book {
        Book {
            id: id.to_string(),
            isbn: "9780134685991".to_string(),
            title: "Effective Java".to_string(),
            author: "Joshua Bloch".to_string(),
            copies: 3,
        }
    }

    pub(crate) fn sample_member(id: &str) -> Member {
        Member {
            id: id.to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.org".to_string(),
            joined_at: Utc::now(),
        }
    }

    pub(crate) fn sample_loan(id: &str, returned: bool) -> Loan {
        let json = format!(
            r#"{{"_id":"{}","bookId":{{"_id":"b1","title":"Dune"}},"memberId":{{"_id":"m1","name":"Ada"}},"createdAt":"2026-02-01T09:00:00Z","dueAt":"2026-02-15T00:00:00Z","returnedAt":{}}}"#,
            id,
            if returned {
                r#""2026-02-10T12:00:00Z""#
            } else {
                "null"
            }
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(5, 0), 0);
        assert_eq!(clamp_index(5, 3), 2);
        assert_eq!(clamp_index(1, 3), 1);
    }

    #[tokio::test]
    async fn test_loaded_messages_replace_collections() {
        let (mut app, _rx) = test_app();
        app.handle_message(AppMessage::BooksLoaded(vec![
            sample_book("b1"),
            sample_book("b2"),
        ]));
        assert_eq!(app.books.len(), 2);
        assert!(app.books.is_synced());

        // A later fetch replaces rather than appends
        app.handle_message(AppMessage::BooksLoaded(vec![sample_book("b3")]));
        assert_eq!(app.books.len(), 1);
        assert_eq!(app.books.get(0).unwrap().id, "b3");
    }

    #[tokio::test]
    async fn test_replacement_clamps_selection() {
        let (mut app, _rx) = test_app();
        app.handle_message(AppMessage::BooksLoaded(vec![
            sample_book("b1"),
            sample_book("b2"),
            sample_book("b3"),
        ]));
        app.books_index = 2;
        app.handle_message(AppMessage::BooksLoaded(vec![sample_book("b1")]));
        assert_eq!(app.books_index, 0);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_previous_contents() {
        let (mut app, _rx) = test_app();
        app.handle_message(AppMessage::BooksLoaded(vec![sample_book("b1")]));
        app.handle_message(AppMessage::LoadFailed {
            section: Section::Books,
            error: "boom".to_string(),
        });
        // Stale-but-consistent: the old fetch result is untouched
        assert_eq!(app.books.len(), 1);
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn test_save_success_resets_book_form() {
        let (mut app, _rx) = test_app();
        app.book_form.load(&sample_book("b1"));
        app.book_form.submitting = true;

        app.handle_message(AppMessage::MutationDone {
            section: Section::Books,
            kind: MutationKind::Save,
        });

        assert!(!app.book_form.submitting);
        assert!(!app.book_form.is_editing());
        assert!(app.book_form.isbn.is_empty());
        assert!(app.book_form.title.is_empty());
        assert!(app.book_form.author.is_empty());
        assert!(app.book_form.copies.is_empty());
    }

    #[tokio::test]
    async fn test_save_failure_preserves_form_and_edit_mode() {
        let (mut app, _rx) = test_app();
        app.book_form.load(&sample_book("b1"));
        app.book_form.submitting = true;

        app.handle_message(AppMessage::MutationFailed {
            section: Section::Books,
            kind: MutationKind::Save,
            error: "500".to_string(),
        });

        // No data loss: everything the user entered is still there
        assert!(!app.book_form.submitting);
        assert!(app.book_form.is_editing());
        assert_eq!(app.book_form.title, "Effective Java");
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn test_loan_save_success_resets_loan_form() {
        let (mut app, _rx) = test_app();
        app.loan_form.book_id = Some("b1".to_string());
        app.loan_form.member_id = Some("m1".to_string());
        app.loan_form.due = "2026-02-15".to_string();
        app.loan_form.submitting = true;

        app.handle_message(AppMessage::MutationDone {
            section: Section::Loans,
            kind: MutationKind::Save,
        });

        assert!(!app.loan_form.submitting);
        assert!(app.loan_form.book_id.is_none());
        assert!(app.loan_form.member_id.is_none());
        assert!(app.loan_form.due.is_empty());
    }
}
