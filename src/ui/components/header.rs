//! Header component renderer.
//!
//! Renders the plugin title bar with centered text, the load time on the
//! right, and optional background styling.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// The title is centered and the line padded to the full terminal width.
/// The load time is right-aligned and dropped when it would overlap the
/// title. Returns the next available row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = char_len(&title);
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{title}");

    let used = padding + title_len;
    match header.loaded.as_deref().map(|loaded| format!("{loaded} ")) {
        Some(loaded) if used + char_len(&loaded) < cols => {
            let loaded_len = char_len(&loaded);
            print!("{}", " ".repeat(cols - used - loaded_len));
            print!("{}{loaded}{}", Theme::dim(), Theme::reset());
        }
        _ => print!("{}", " ".repeat(cols.saturating_sub(used))),
    }

    print!("{}", Theme::reset());
    row + 1
}
