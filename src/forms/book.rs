//! Book form controller.

use crate::models::{Book, BookPayload};

use super::{is_blank, ValidationError};

/// Which book field currently has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookField {
    #[default]
    Isbn,
    Title,
    Author,
    Copies,
}

impl BookField {
    pub fn next(self) -> Self {
        match self {
            BookField::Isbn => BookField::Title,
            BookField::Title => BookField::Author,
            BookField::Author => BookField::Copies,
            BookField::Copies => BookField::Isbn,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            BookField::Isbn => BookField::Copies,
            BookField::Title => BookField::Isbn,
            BookField::Author => BookField::Title,
            BookField::Copies => BookField::Author,
        }
    }
}

/// Transient state of the add/edit book form.
///
/// `editing_id` decides whether a valid submission becomes a create or an
/// update; it is cleared only by a successful submission or an explicit
/// reset, never by a failure.
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub copies: String,
    /// Identifier of the book being edited, or None in create mode
    pub editing_id: Option<String>,
    /// Focused field
    pub field: BookField,
    /// Set while a submission is in flight; further submits are ignored
    pub submitting: bool,
}

/// Strip every non-digit character from an ISBN as typed.
pub fn isbn_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the form is in edit mode.
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.field = self.field.next();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.field = self.field.prev();
    }

    /// Type a character into the focused field.
    ///
    /// The copies field accepts digits only; the others accept anything
    /// printable.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if matches!(self.field, BookField::Copies) && !c.is_ascii_digit() {
            return;
        }
        self.active_value_mut().push(c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.active_value_mut().pop();
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.field {
            BookField::Isbn => &mut self.isbn,
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Copies => &mut self.copies,
        }
    }

    /// Value of the focused field, for cursor rendering.
    pub fn active_value(&self) -> &str {
        match self.field {
            BookField::Isbn => &self.isbn,
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Copies => &self.copies,
        }
    }

    /// Populate the form from an existing book and enter edit mode.
    ///
    /// The ISBN is copied as stored — punctuation and all — not in its
    /// normalized digits-only shape.
    pub fn load(&mut self, book: &Book) {
        self.editing_id = Some(book.id.clone());
        self.isbn = book.isbn.clone();
        self.title = book.title.clone();
        self.author = book.author.clone();
        self.copies = book.copies.to_string();
    }

    /// Clear every field and leave edit mode, unconditionally.
    pub fn reset(&mut self) {
        self.isbn.clear();
        self.title.clear();
        self.author.clear();
        self.copies.clear();
        self.editing_id = None;
    }

    /// Validate the current input into a create/update payload.
    ///
    /// Rejections never issue a network call: every field must be
    /// non-blank, the ISBN must normalize to exactly 13 digits, and copies
    /// must parse to an integer of at least 1.
    pub fn validate(&self) -> Result<BookPayload, ValidationError> {
        if is_blank(&self.isbn)
            || is_blank(&self.title)
            || is_blank(&self.author)
            || is_blank(&self.copies)
        {
            return Err(ValidationError::MissingFields);
        }

        let digits = isbn_digits(&self.isbn);
        if digits.len() != 13 {
            return Err(ValidationError::BadIsbn);
        }

        let copies: u32 = self
            .copies
            .trim()
            .parse()
            .map_err(|_| ValidationError::BadCopies)?;
        if copies < 1 {
            return Err(ValidationError::BadCopies);
        }

        Ok(BookPayload {
            isbn: digits,
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            copies,
        })
    }
}
