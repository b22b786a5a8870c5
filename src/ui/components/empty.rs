//! Empty state component renderer.
//!
//! Shown in the table body while members are loading, after a failed load,
//! when a search matches nothing, or when every row has been deleted.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message centered at `row`.
///
/// The message uses `empty_state_fg`, or `error_fg` for failures; the
/// subtitle is dimmed. Returns the row after the subtitle.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    let message = truncate(&empty.message, cols);
    let msg_len = char_len(&message);
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let subtitle = truncate(&empty.subtitle, cols);
    let sub_len = char_len(&subtitle);
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{subtitle}");
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());

    row + 2
}
