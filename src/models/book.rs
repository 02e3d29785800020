//! Book catalog entries.

use serde::{Deserialize, Serialize};

/// A book as stored by the backend.
///
/// The `isbn` field is whatever string the backend stored — it may still
/// carry hyphens or spaces if it was created by an older client, so it is
/// not re-validated on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// ISBN as stored (not normalized)
    pub isbn: String,
    /// Book title
    pub title: String,
    /// Author name
    pub author: String,
    /// Total copies owned by the library
    pub copies: u32,
}

/// Outbound body for both book creation and update.
///
/// Built by the book form after validation: `isbn` is digits-only and
/// `copies` has already been parsed from the text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookPayload {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub copies: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_deserializes_wire_id() {
        let json = r#"{"_id":"b1","isbn":"9780134685991","title":"Effective Java","author":"Bloch","copies":3}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, "b1");
        assert_eq!(book.isbn, "9780134685991");
        assert_eq!(book.copies, 3);
    }

    #[test]
    fn test_book_isbn_kept_as_stored() {
        // Punctuated ISBNs from older writers pass through untouched
        let json = r#"{"_id":"b2","isbn":"978-0-13-468599-1","title":"T","author":"A","copies":1}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.isbn, "978-0-13-468599-1");
    }

    #[test]
    fn test_book_payload_serializes_flat() {
        let payload = BookPayload {
            isbn: "9780134685991".to_string(),
            title: "Effective Java".to_string(),
            author: "Bloch".to_string(),
            copies: 2,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "isbn": "9780134685991",
                "title": "Effective Java",
                "author": "Bloch",
                "copies": 2
            })
        );
    }
}
