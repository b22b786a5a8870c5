//! Inline row editing.
//!
//! A [`RowEdit`] is created from a record when the user starts editing a
//! row. It owns a draft copy of the editable fields; the record itself is
//! untouched until [`RowEdit::apply_to`] is called on save. Dropping the
//! `RowEdit` is how an edit is cancelled.

use crate::domain::{Record, RecordId, Role};

/// Editable column currently receiving input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Email,
    Role,
}

impl EditField {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Role,
            Self::Role => Self::Name,
        }
    }
}

/// Draft values of the editable columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// An in-progress edit of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEdit {
    /// Row being edited.
    pub id: RecordId,
    pub draft: Draft,
    /// Column receiving typed input.
    pub field: EditField,
}

impl RowEdit {
    /// Starts editing `record` with focus on the name column.
    #[must_use]
    pub fn begin(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            draft: Draft {
                name: record.name.clone(),
                email: record.email.clone(),
                role: record.role,
            },
            field: EditField::Name,
        }
    }

    /// Types a character into the focused column.
    ///
    /// The role column only offers its two values, so a space toggles it and
    /// every other character is ignored.
    pub fn insert_char(&mut self, c: char) {
        match self.field {
            EditField::Name => self.draft.name.push(c),
            EditField::Email => self.draft.email.push(c),
            EditField::Role if c == ' ' => self.toggle_role(),
            EditField::Role => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            EditField::Name => {
                self.draft.name.pop();
            }
            EditField::Email => {
                self.draft.email.pop();
            }
            EditField::Role => {}
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    /// Flips the draft role. Only acts while the role column is focused.
    pub fn toggle_role(&mut self) {
        if self.field == EditField::Role {
            self.draft.role = self.draft.role.toggled();
        }
    }

    /// Writes the draft into `record`. The id is never touched.
    pub fn apply_to(&self, record: &mut Record) {
        debug_assert_eq!(record.id, self.id);
        record.name.clone_from(&self.draft.name);
        record.email.clone_from(&self.draft.email);
        record.role = self.draft.role;
    }
}
