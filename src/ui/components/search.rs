//! Search bar component renderer.
//!
//! Renders the search input box with a bordered frame and the query being
//! typed. The query is only applied to the table once submitted.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search input box starting at `row`.
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ Search members: bob▏ │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
///
/// When the query is wider than the box, its tail is shown so the insertion
/// point stays visible. Returns the row after the box.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let prefix = " Search members: ";
    let room = inner_width.saturating_sub(char_len(prefix) + 1);
    let query_len = char_len(&search.query);
    let visible: String = search.query.chars().skip(query_len.saturating_sub(room)).collect();
    let search_text = format!("{prefix}{visible}▏");
    let padding = inner_width.saturating_sub(char_len(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
