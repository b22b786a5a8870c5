//! Input mode state machine.
//!
//! The plugin is always in exactly one [`InputMode`]. The mode decides how
//! keys are interpreted and which chrome (search box, confirmation bar,
//! edit cursor) is rendered:
//!
//! - **Normal**: navigate rows and pages, select, start actions
//! - **Search**: typing a query that is applied on Enter
//! - **Editing**: one row's fields are being edited
//! - **Confirm**: a destructive action waits for y/n
//!
//! Holding the [`RowEdit`] inside the mode means at most one row can be in
//! edit mode at any time.

use crate::app::editor::RowEdit;
use crate::domain::RecordId;

/// What a pending delete confirmation will remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// A single row, chosen with the row cursor.
    Row(RecordId),
    /// Every checkbox-selected row.
    Selected,
}

/// Current input handling mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    #[default]
    Normal,

    /// Search box focused. The draft query is committed on Enter.
    Search,

    /// A row is being edited.
    Editing(RowEdit),

    /// Waiting for the user to confirm or decline a delete.
    Confirm(DeleteTarget),
}

impl InputMode {
    #[must_use]
    pub const fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }

    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(self, Self::Search)
    }

    /// Returns the in-progress edit, if a row is being edited.
    #[must_use]
    pub const fn editing(&self) -> Option<&RowEdit> {
        match self {
            Self::Editing(edit) => Some(edit),
            _ => None,
        }
    }
}
