//! Member form controller.

use crate::models::{Member, MemberUpdate};

use super::{is_blank, ValidationError};

/// Which member field currently has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberField {
    #[default]
    Name,
    Email,
}

impl MemberField {
    pub fn next(self) -> Self {
        match self {
            MemberField::Name => MemberField::Email,
            MemberField::Email => MemberField::Name,
        }
    }
}

/// Transient state of the add/edit member form.
///
/// Validation is non-empty only. The joined timestamp is not part of the
/// form: creation stamps it at submission time, and updates never send it.
#[derive(Debug, Clone, Default)]
pub struct MemberForm {
    pub name: String,
    pub email: String,
    /// Identifier of the member being edited, or None in create mode
    pub editing_id: Option<String>,
    /// Focused field
    pub field: MemberField,
    /// Set while a submission is in flight; further submits are ignored
    pub submitting: bool,
}

impl MemberForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Move focus to the other field (two fields, so next == prev).
    pub fn focus_next(&mut self) {
        self.field = self.field.next();
    }

    /// Type a character into the focused field.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
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
            MemberField::Name => &mut self.name,
            MemberField::Email => &mut self.email,
        }
    }

    /// Value of the focused field, for cursor rendering.
    pub fn active_value(&self) -> &str {
        match self.field {
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
        }
    }

    /// Populate the form from an existing member and enter edit mode.
    pub fn load(&mut self, member: &Member) {
        self.editing_id = Some(member.id.clone());
        self.name = member.name.clone();
        self.email = member.email.clone();
    }

    /// Clear both fields and leave edit mode, unconditionally.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.editing_id = None;
    }

    /// Validate the current input.
    ///
    /// Returns the name/email pair used directly as the update body; the
    /// create path wraps it with a fresh joined timestamp.
    pub fn validate(&self) -> Result<MemberUpdate, ValidationError> {
        if is_blank(&self.name) || is_blank(&self.email) {
            return Err(ValidationError::MissingFields);
        }
        Ok(MemberUpdate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}
