//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data such
//! as pre-computed highlight ranges, row flags and status strings.

use crate::app::pagination::PagerItem;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title and committed search).
    pub header: HeaderInfo,

    /// Search box contents, present while the search box is open.
    pub search_bar: Option<SearchBarInfo>,

    /// Rows of the current page.
    pub rows: Vec<RowItem>,

    /// Message shown in place of rows when the page is empty.
    pub empty_state: Option<EmptyState>,

    /// Pending delete prompt.
    pub confirm: Option<ConfirmInfo>,

    /// Selection counter and pager.
    pub status: StatusInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellItem {
    pub text: String,

    /// Character ranges matching the committed search term.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,

    /// Whether this cell receives typed input in an edited row.
    pub is_focused: bool,
}

/// One member row on the current page.
#[derive(Debug, Clone)]
pub struct RowItem {
    pub id: CellItem,
    pub name: CellItem,
    pub email: CellItem,
    pub role: CellItem,

    /// Whether the row cursor is on this row.
    pub is_cursor: bool,

    /// Whether the row's checkbox is ticked.
    pub is_checked: bool,

    /// Whether this row shows draft values from an in-progress edit.
    pub is_editing: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// "{count} loaded at HH:MM UTC" once the member list has arrived.
    pub loaded: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current input mode.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No members").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,

    /// Rendered in the error color when set.
    pub is_error: bool,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Query being typed.
    pub query: String,
}

/// Delete confirmation bar.
#[derive(Debug, Clone)]
pub struct ConfirmInfo {
    pub prompt: String,
}

/// Bottom status line.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    /// "{selected} of {rows on page} row(s) selected".
    pub selection: String,

    /// "Page {current} of {total}".
    pub page_label: String,

    pub pager: Vec<PagerItem>,
}
