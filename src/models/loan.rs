//! Loan records and their embedded book/member summaries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Book side of a loan, as embedded by the backend's list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Member side of a loan, as embedded by the backend's list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A loan's reference to its book.
///
/// The list endpoint normally embeds a summary document; a reference the
/// backend did not join arrives as a bare identifier string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BookRef {
    Embedded(BookSummary),
    Id(String),
}

/// A loan's reference to its member. Same shape as [`BookRef`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MemberRef {
    Embedded(MemberSummary),
    Id(String),
}

/// A recorded loan.
///
/// Loans are never edited in place: after creation the only transitions are
/// "mark returned" and deletion. A null `returned_at` means the loan is
/// outstanding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Loan {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// The loaned book (embedded summary or bare id)
    #[serde(rename = "bookId", default)]
    pub book: Option<BookRef>,
    /// The borrowing member (embedded summary or bare id)
    #[serde(rename = "memberId", default)]
    pub member: Option<MemberRef>,
    /// When the loan was recorded (server-assigned)
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// When the book is due back
    #[serde(rename = "dueAt")]
    pub due_at: DateTime<Utc>,
    /// When the book came back, or None while outstanding
    #[serde(rename = "returnedAt", default)]
    pub returned_at: Option<DateTime<Utc>>,
}

impl Loan {
    /// Title of the loaned book, or empty when the backend did not embed it.
    pub fn book_title(&self) -> &str {
        match &self.book {
            Some(BookRef::Embedded(summary)) => summary.title.as_deref().unwrap_or(""),
            _ => "",
        }
    }

    /// Name of the borrowing member, or empty when not embedded.
    pub fn member_name(&self) -> &str {
        match &self.member {
            Some(MemberRef::Embedded(summary)) => summary.name.as_deref().unwrap_or(""),
            _ => "",
        }
    }

    /// A loan is outstanding until the backend records a return.
    pub fn is_outstanding(&self) -> bool {
        self.returned_at.is_none()
    }
}

/// Outbound body for loan creation.
///
/// `due_at` is a calendar date with no time component; it serializes as
/// `YYYY-MM-DD`, matching what the backend expects from the date picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewLoan {
    #[serde(rename = "bookId")]
    pub book_id: String,
    #[serde(rename = "memberId")]
    pub member_id: String,
    #[serde(rename = "dueAt")]
    pub due_at: NaiveDate,
}
