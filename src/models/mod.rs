//! Data models for the library circulation API.
//!
//! These mirror the JSON documents served by the backend. Identifiers are
//! opaque server-assigned strings (`_id` on the wire); all business rules
//! (copy counts, loan validity) live server-side, so nothing here computes
//! derived state.

mod book;
mod loan;
mod member;

pub use book::{Book, BookPayload};
pub use loan::{BookRef, BookSummary, Loan, MemberRef, MemberSummary, NewLoan};
pub use member::{Member, MemberUpdate, NewMember};
