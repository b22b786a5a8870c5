//! Table component renderer.
//!
//! Renders the member page as a six-column table:
//!
//! ```text
//! [ ] ID    NAME              EMAIL                       ROLE      ACTIONS
//! [x] 1     Aaron Miles       aaron@mailinator.com        member    [e]dit [d]elete
//! ```
//!
//! NAME and EMAIL share whatever width is left after the fixed columns.

use crate::ui::helpers::{self, char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CellItem, RowItem};

const CHECKBOX_WIDTH: usize = 4;
const ID_WIDTH: usize = 6;
const ROLE_WIDTH: usize = 10;
const ACTIONS_WIDTH: usize = 20;

const ACTIONS_IDLE: &str = "[e]dit [d]elete";
const ACTIONS_EDITING: &str = "[↵]save [esc]cancel";

/// Column widths for a given terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub id: usize,
    pub name: usize,
    pub email: usize,
    pub role: usize,
}

impl ColumnLayout {
    /// Splits `cols` into columns, giving EMAIL the larger share of the
    /// flexible space.
    #[must_use]
    pub const fn for_width(cols: usize) -> Self {
        let flexible = cols.saturating_sub(CHECKBOX_WIDTH + ID_WIDTH + ROLE_WIDTH + ACTIONS_WIDTH);
        let name = flexible * 2 / 5;
        Self {
            id: ID_WIDTH,
            name,
            email: flexible - name,
            role: ROLE_WIDTH,
        }
    }
}

/// Text of a cell clipped to `width`, leaving one column of spacing.
fn fit(text: &str, width: usize) -> (String, usize) {
    let shown = truncate(text, width.saturating_sub(1));
    let padding = width.saturating_sub(char_len(&shown));
    (shown, padding)
}

/// Renders the column headers. Returns the next available row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let layout = ColumnLayout::for_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", " ".repeat(CHECKBOX_WIDTH));
    for (label, width) in [
        ("ID", layout.id),
        ("NAME", layout.name),
        ("EMAIL", layout.email),
        ("ROLE", layout.role),
    ] {
        let (label, padding) = fit(label, width);
        print!("{label}{}", " ".repeat(padding));
    }
    print!("{}", truncate("ACTIONS", ACTIONS_WIDTH));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows of the page. Returns the next available row.
pub fn render_table_rows(row: usize, items: &[RowItem], theme: &Theme, cols: usize) -> usize {
    let layout = ColumnLayout::for_width(cols);
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, &layout, cols);
    }
    current_row
}

/// Renders one member row.
///
/// Styling precedence: cursor row colors, then the edit background, then
/// normal text. Match highlights and the focused edit cell are drawn on top
/// and restore the row style afterwards.
fn render_table_row(row: usize, item: &RowItem, theme: &Theme, layout: &ColumnLayout, cols: usize) -> usize {
    let base = if item.is_cursor {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else if item.is_editing {
        format!("{}{}", Theme::fg(&theme.colors.text_normal), Theme::bg(&theme.colors.editing_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(row, 1);
    print!("{base}");

    if item.is_checked {
        print!("{}[x]{}{base} ", Theme::fg(&theme.colors.checked_fg), Theme::reset());
    } else {
        print!("[ ] ");
    }

    render_cell(&item.id, layout.id, theme, &base);
    render_cell(&item.name, layout.name, theme, &base);
    render_cell(&item.email, layout.email, theme, &base);
    render_cell(&item.role, layout.role, theme, &base);

    let actions = if item.is_editing { ACTIONS_EDITING } else { ACTIONS_IDLE };
    print!("{}{actions}{base}", Theme::dim());

    let used = CHECKBOX_WIDTH + layout.id + layout.name + layout.email + layout.role + char_len(actions);
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}

fn render_cell(cell: &CellItem, width: usize, theme: &Theme, base: &str) {
    let (text, padding) = fit(&cell.text, width);

    if cell.is_focused {
        print!("{}{}", Theme::underline(), Theme::fg(&theme.colors.focus_fg));
        print!("{text}");
        print!("{}{base}", Theme::reset());
    } else {
        helpers::render_highlighted_text(&text, &cell.highlight_ranges, theme, base);
    }

    print!("{}", " ".repeat(padding));
}
