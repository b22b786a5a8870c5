//! Status bar: selection counter on the left, pager on the right.

use crate::app::pagination::PagerItem;
use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Plain-text rendering of the pager, e.g. `« ‹ 1 … 5 [6] 7 … 12 › »`.
#[must_use]
pub fn pager_label(items: &[PagerItem]) -> String {
    items
        .iter()
        .map(|item| match item {
            PagerItem::First => "«".to_string(),
            PagerItem::Previous => "‹".to_string(),
            PagerItem::Page { number, current: true } => format!("[{number}]"),
            PagerItem::Page { number, current: false } => number.to_string(),
            PagerItem::Gap => "…".to_string(),
            PagerItem::Next => "›".to_string(),
            PagerItem::Last => "»".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the status line at `row`. Returns the next available row.
pub fn render_status(row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    let left = format!(" {}", status.selection);
    let right = format!("{}  {} ", status.page_label, pager_label(&status.pager));
    let gap = cols.saturating_sub(char_len(&left) + char_len(&right));

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{left}");
    print!("{}", " ".repeat(gap));
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{right}");
    print!("{}", Theme::reset());
    row + 1
}
