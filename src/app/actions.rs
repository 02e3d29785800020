//! Async actions: everything that talks to the backend.
//!
//! Each action validates first, then spawns a task holding a clone of the
//! client and the message sender. Results come back as [`AppMessage`]s;
//! no spawned task touches app state directly. Every successful mutation
//! is followed by a full re-fetch of the affected collection, triggered
//! from the completion handler.

use std::sync::Arc;

use chrono::Utc;

use crate::models::NewMember;

use super::{App, AppMessage, MutationKind, PendingDelete, Section};

impl App {
    /// Fetch the book collection in the background.
    pub fn refresh_books(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_sender();
        tokio::spawn(async move {
            match client.list_books().await {
                Ok(books) => {
                    let _ = tx.send(AppMessage::BooksLoaded(books));
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::LoadFailed {
                        section: Section::Books,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Fetch the member collection in the background.
    pub fn refresh_members(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_sender();
        tokio::spawn(async move {
            match client.list_members().await {
                Ok(members) => {
                    let _ = tx.send(AppMessage::MembersLoaded(members));
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::LoadFailed {
                        section: Section::Members,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Fetch the loan collection in the background.
    pub fn refresh_loans(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_sender();
        tokio::spawn(async move {
            match client.list_loans().await {
                Ok(loans) => {
                    let _ = tx.send(AppMessage::LoansLoaded(loans));
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::LoadFailed {
                        section: Section::Loans,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Submit the book form: update when editing, create otherwise.
    ///
    /// Validation failures surface immediately and nothing leaves the
    /// process. While a submission is in flight further submits are
    /// ignored rather than racing the first one.
    pub fn submit_book_form(&mut self) {
        if self.book_form.submitting {
            return;
        }
        let payload = match self.book_form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.set_error(e.to_string());
                return;
            }
        };

        self.book_form.submitting = true;
        self.notice = None;
        let editing_id = self.book_form.editing_id.clone();
        let client = Arc::clone(&self.client);
        let tx = self.message_sender();
        tokio::spawn(async move {
            let result = match &editing_id {
                Some(id) => client.update_book(id, &payload).await,
                None => client.create_book(&payload).await,
            };
            let _ = tx.send(match result {
                Ok(()) => AppMessage::MutationDone {
                    section: Section::Books,
                    kind: MutationKind::Save,
                },
                Err(e) => AppMessage::MutationFailed {
                    section: Section::Books,
                    kind: MutationKind::Save,
                    error: e.to_string(),
                },
            });
        });
    }

    /// Submit the member form: update when editing, create otherwise.
    ///
    /// Creation stamps `joinedAt` with the submission instant; updates
    /// never send it.
    pub fn submit_member_form(&mut self) {
        if self.member_form.submitting {
            return;
        }
        let fields = match self.member_form.validate() {
            Ok(fields) => fields,
            Err(e) => {
                self.set_error(e.to_string());
                return;
            }
        };

        self.member_form.submitting = true;
        self.notice = None;
        let editing_id = self.member_form.editing_id.clone();
        let client = Arc::clone(&self.client);
        let tx = self.message_sender();
        tokio::spawn(async move {
            let result = match &editing_id {
                Some(id) => client.update_member(id, &fields).await,
                None => {
                    let payload = NewMember {
                        name: fields.name,
                        email: fields.email,
                        joined_at: Utc::now(),
                    };
                    client.create_member(&payload).await
                }
            };
            let _ = tx.send(match result {
                Ok(()) => AppMessage::MutationDone {
                    section: Section::Members,
                    kind: MutationKind::Save,
                },
                Err(e) => AppMessage::MutationFailed {
                    section: Section::Members,
                    kind: MutationKind::Save,
                    error: e.to_string(),
                },
            });
        });
    }

    /// Submit the loan form. Loans only create; there is no edit path.
    pub fn submit_loan_form(&mut self) {
        if self.loan_form.submitting {
            return;
        }
        let payload = match self.loan_form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.set_error(e.to_string());
                return;
            }
        };

        self.loan_form.submitting = true;
        self.notice = None;
        let client = Arc::clone(&self.client);
        let tx = self.message_sender();
        tokio::spawn(async move {
            let _ = tx.send(match client.create_loan(&payload).await {
                Ok(()) => AppMessage::MutationDone {
                    section: Section::Loans,
                    kind: MutationKind::Save,
                },
                Err(e) => AppMessage::MutationFailed {
                    section: Section::Loans,
                    kind: MutationKind::Save,
                    error: e.to_string(),
                },
            });
        });
    }

    /// Ask for confirmation before deleting the selected row.
    pub fn request_delete_selected(&mut self) {
        self.confirm = match self.section {
            Section::Books => self.books.get(self.books_index).map(|b| PendingDelete::Book {
                id: b.id.clone(),
            }),
            Section::Members => self
                .members
                .get(self.members_index)
                .map(|m| PendingDelete::Member { id: m.id.clone() }),
            Section::Loans => self.loans.get(self.loans_index).map(|l| PendingDelete::Loan {
                id: l.id.clone(),
            }),
        };
    }

    /// User confirmed the pending delete: issue the call.
    pub fn confirm_delete(&mut self) {
        let Some(pending) = self.confirm.take() else {
            return;
        };
        let client = Arc::clone(&self.client);
        let tx = self.message_sender();
        tokio::spawn(async move {
            let (section, result) = match &pending {
                PendingDelete::Book { id } => (Section::Books, client.delete_book(id).await),
                PendingDelete::Member { id } => (Section::Members, client.delete_member(id).await),
                PendingDelete::Loan { id } => (Section::Loans, client.delete_loan(id).await),
            };
            let _ = tx.send(match result {
                Ok(()) => AppMessage::MutationDone {
                    section,
                    kind: MutationKind::Delete,
                },
                Err(e) => AppMessage::MutationFailed {
                    section,
                    kind: MutationKind::Delete,
                    error: e.to_string(),
                },
            });
        });
    }

    /// User declined the pending delete: drop it, no network call.
    pub fn cancel_delete(&mut self) {
        self.confirm = None;
    }

    /// Mark the selected loan returned.
    ///
    /// Only offered for outstanding loans; a loan that already has a
    /// return date is left alone. Copy counts are the backend's problem.
    pub fn return_selected_loan(&mut self) {
        let Some(loan) = self.loans.get(self.loans_index) else {
            return;
        };
        if !loan.is_outstanding() {
            return;
        }
        let id = loan.id.clone();
        let client = Arc::clone(&self.client);
        let tx = self.message_sender();
        tokio::spawn(async move {
            let _ = tx.send(match client.return_loan(&id).await {
                Ok(()) => AppMessage::MutationDone {
                    section: Section::Loans,
                    kind: MutationKind::Return,
                },
                Err(e) => AppMessage::MutationFailed {
                    section: Section::Loans,
                    kind: MutationKind::Return,
                    error: e.to_string(),
                },
            });
        });
    }

    /// Load the selected row into its section's form and focus it.
    ///
    /// Books and members only; loans have no edit.
    pub fn edit_selected(&mut self) {
        match self.section {
            Section::Books => {
                if let Some(book) = self.books.get(self.books_index) {
                    let book = book.clone();
                    self.book_form.load(&book);
                    self.focus = super::Focus::Form;
                }
            }
            Section::Members => {
                if let Some(member) = self.members.get(self.members_index) {
                    let member = member.clone();
                    self.member_form.load(&member);
                    self.focus = super::Focus::Form;
                }
            }
            Section::Loans => {}
        }
    }
}
