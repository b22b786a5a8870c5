//! Shared rendering utilities and helpers.
//!
//! Low-level text handling used by several components: cursor positioning,
//! fitting text into fixed-width columns and rendering search match
//! highlights with proper ANSI escape sequence management. Everything works
//! on character indices, never byte indices.

use crate::ui::theme::Theme;
use std::ops::Range;

/// Positions the cursor at a specific row and column.
///
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `width` characters, ending in `…` when cut.
///
/// ```
/// use memberdesk::ui::helpers::truncate;
///
/// assert_eq!(truncate("aishwarya@mailinator.com", 10), "aishwarya…");
/// assert_eq!(truncate("bob", 10), "bob");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Splits `len` characters into plain and highlighted segments.
///
/// Ranges are clamped to `len`; empty, reversed or overlapping parts are
/// skipped so that callers can pass ranges computed on an untruncated string.
#[must_use]
pub fn highlight_segments(len: usize, ranges: &[(usize, usize)]) -> Vec<(Range<usize>, bool)> {
    let mut segments = Vec::new();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.max(pos).min(len);
        let end = end.min(len);
        if start >= end {
            continue;
        }
        if start > pos {
            segments.push((pos..start, false));
        }
        segments.push((start..end, true));
        pos = end;
    }

    if pos < len {
        segments.push((pos..len, false));
    }
    segments
}

/// Renders text with highlighted character ranges for search matches.
///
/// `restore` is the style sequence of the surrounding cell; it is re-applied
/// after every highlighted section so the row background survives.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    for (range, highlighted) in highlight_segments(chars.len(), ranges) {
        let section: String = chars[range].iter().collect();
        if highlighted {
            print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
            print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
            print!("{section}");
            print!("{}{restore}", Theme::reset());
        } else {
            print!("{section}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Zoë Ölm", 7), "Zoë Ölm");
        assert_eq!(truncate("Zoë Ölm", 4), "Zoë…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abc", 1), "…");
    }

    #[test]
    fn segments_cover_whole_text() {
        assert_eq!(
            highlight_segments(6, &[(1, 3), (3, 5)]),
            vec![(0..1, false), (1..3, true), (3..5, true), (5..6, false)]
        );
        assert_eq!(highlight_segments(3, &[]), vec![(0..3, false)]);
    }

    #[test]
    fn segments_clamp_ranges_beyond_text() {
        assert_eq!(highlight_segments(4, &[(2, 9)]), vec![(0..2, false), (2..4, true)]);
        assert_eq!(highlight_segments(4, &[(6, 9)]), vec![(0..4, false)]);
        assert_eq!(highlight_segments(4, &[(0, 3), (1, 2)]), vec![(0..3, true), (3..4, false)]);
    }
}
