//! Delete confirmation bar.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ConfirmInfo;

/// Renders the pending delete prompt in the error color.
pub fn render_confirm(row: usize, confirm: &ConfirmInfo, theme: &Theme, cols: usize) -> usize {
    let prompt = truncate(&format!(" {}", confirm.prompt), cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!("{prompt}");
    print!("{}", " ".repeat(cols.saturating_sub(char_len(&prompt))));
    print!("{}", Theme::reset());
    row + 1
}
