//! Form controllers for the three entity types.
//!
//! Each form owns its transient input state and validates it into an
//! outbound payload before any network call happens. A rejected submission
//! never leaves the process; a failed network call never clears the fields,
//! so the user can fix or retry without re-typing.

mod book;
mod loan;
mod member;

pub use book::{BookField, BookForm};
pub use loan::{LoanField, LoanForm};
pub use member::{MemberField, MemberForm};

/// Why a submission was rejected before reaching the network.
///
/// The display strings are the user-visible messages, shown verbatim in
/// the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,
    #[error("ISBN must be exactly 13 digits")]
    BadIsbn,
    #[error("Copies must be a whole number of at least 1")]
    BadCopies,
    #[error("Select book, member, and due date")]
    MissingLoanFields,
    #[error("Due date must be a valid YYYY-MM-DD date")]
    BadDueDate,
}

/// True when the value is empty or whitespace-only.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank("x"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "All fields are required"
        );
        assert_eq!(
            ValidationError::BadIsbn.to_string(),
            "ISBN must be exactly 13 digits"
        );
        assert_eq!(
            ValidationError::MissingLoanFields.to_string(),
            "Select book, member, and due date"
        );
    }
}
