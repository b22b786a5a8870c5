//! Composable UI component renderers.
//!
//! Each component renders one part of the screen at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with member count and committed search
//! - [`search`]: Search input box
//! - [`confirm`]: Delete confirmation prompt
//! - [`table`]: Member table with checkbox, ID, NAME, EMAIL, ROLE, ACTIONS
//! - [`empty`]: Loading, failure and no-match messages
//! - [`status`]: Selection counter and pager
//! - [`footer`]: Keybinding hints

mod confirm;
mod empty;
mod footer;
mod header;
mod search;
mod status;
mod table;

pub use status::pager_label;
pub use table::ColumnLayout;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use std::ops::Range;

use confirm::render_confirm;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use status::render_status;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row`. Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Rows of a page that fit in `capacity` screen lines.
///
/// The window starts at the top of the page and slides down just far enough
/// to keep the cursor row on screen.
#[must_use]
pub fn visible_window(len: usize, cursor: Option<usize>, capacity: usize) -> Range<usize> {
    if len <= capacity {
        return 0..len;
    }
    if capacity == 0 {
        return 0..0;
    }
    let start = cursor.map_or(0, |c| (c + 1).saturating_sub(capacity));
    start..start + capacity
}

/// Renders the table screen.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, while searching]
/// [Confirm prompt, while a delete is pending]
/// [Table Headers]
/// [Table Rows | Empty state]
/// [Blank padding to fill screen]
/// [Status]
/// [Border]
/// [Footer]
/// ```
pub fn render_table_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    if let Some(confirm) = &vm.confirm {
        current_row = render_confirm(current_row, confirm, theme, cols);
    }
    current_row = render_table_headers(current_row, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let status_row = border_row.saturating_sub(1);
    let capacity = status_row.saturating_sub(current_row);

    if let Some(empty) = &vm.empty_state {
        // message and subtitle, one line below the headers
        if capacity >= 3 {
            render_empty_state(current_row + 1, empty, theme, cols);
        }
    } else {
        let cursor = vm.rows.iter().position(|row| row.is_cursor);
        let window = visible_window(vm.rows.len(), cursor, capacity);
        render_table_rows(current_row, &vm.rows[window], theme, cols);
    }

    render_status(status_row, &vm.status, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
