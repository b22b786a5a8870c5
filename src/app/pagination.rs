//! Fixed-size pagination over the displayed records.
//!
//! Pages are 1-indexed. [`Pagination`] only stores the current page; the
//! page count is always derived from the length of the list being paged, so
//! callers pass that length into every operation and the page is clamped
//! into `[1, max(1, total_pages)]`.

use std::ops::Range;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// Maximum page buttons rendered before the pager collapses ranges into gaps.
const MAX_PAGER_BUTTONS: usize = 7;

/// Number of pages needed for `len` rows.
#[must_use]
pub const fn total_pages(len: usize) -> usize {
    (len + PAGE_SIZE - 1) / PAGE_SIZE
}

/// Current page of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    #[must_use]
    pub const fn new() -> Self {
        Self { current_page: 1 }
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Moves back to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Jumps to `page`, clamped to the pages available for `len` rows.
    pub fn go_to(&mut self, page: usize, len: usize) {
        let last = total_pages(len).max(1);
        self.current_page = page.clamp(1, last);
    }

    /// Re-clamps the current page after the row count changed.
    pub fn clamp(&mut self, len: usize) {
        self.go_to(self.current_page, len);
    }

    pub fn first(&mut self) {
        self.reset();
    }

    pub fn previous(&mut self, len: usize) {
        self.go_to(self.current_page.saturating_sub(1), len);
    }

    pub fn next(&mut self, len: usize) {
        self.go_to(self.current_page + 1, len);
    }

    pub fn last(&mut self, len: usize) {
        self.go_to(total_pages(len), len);
    }

    /// Index range of the current page within a list of `len` rows.
    ///
    /// Empty when there are no rows.
    #[must_use]
    pub fn page_range(&self, len: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * PAGE_SIZE).min(len);
        let end = (start + PAGE_SIZE).min(len);
        start..end
    }
}

/// One element of the page navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    First,
    Previous,
    Page { number: usize, current: bool },
    Gap,
    Next,
    Last,
}

/// Builds the page navigation control for `current` of `total` pages.
///
/// Mirrors a rounded pager with first/last buttons: every page is listed
/// while there are few of them, otherwise the first and last page, the
/// neighbours of the current page and gaps in between.
#[must_use]
pub fn pager_items(current: usize, total: usize) -> Vec<PagerItem> {
    let mut items = vec![PagerItem::First, PagerItem::Previous];

    let page = |number: usize| PagerItem::Page { number, current: number == current };

    if total <= MAX_PAGER_BUTTONS {
        items.extend((1..=total).map(page));
    } else {
        // 1 … (current-1) current (current+1) … total, widened near the edges
        let (window_start, window_end) = if current <= 4 {
            (2, 5)
        } else if current >= total - 3 {
            (total - 4, total - 1)
        } else {
            (current - 1, current + 1)
        };

        items.push(page(1));
        if window_start > 2 {
            items.push(PagerItem::Gap);
        }
        items.extend((window_start..=window_end).map(page));
        if window_end < total - 1 {
            items.push(PagerItem::Gap);
        }
        items.push(page(total));
    }

    items.push(PagerItem::Next);
    items.push(PagerItem::Last);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(25), 3);
    }

    #[test]
    fn last_page_of_25_rows_has_5() {
        let mut pagination = Pagination::new();
        pagination.last(25);

        assert_eq!(pagination.current_page(), 3);
        assert_eq!(pagination.page_range(25), 20..25);
        assert_eq!(pagination.page_range(25).len(), 5);
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let mut pagination = Pagination::new();

        pagination.go_to(99, 25);
        assert_eq!(pagination.current_page(), 3);

        pagination.go_to(0, 25);
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn empty_list_stays_on_page_one() {
        let mut pagination = Pagination::new();
        pagination.next(0);
        pagination.last(0);

        assert_eq!(pagination.current_page(), 1);
        assert!(pagination.page_range(0).is_empty());
    }

    #[test]
    fn shrinking_list_pulls_page_back() {
        let mut pagination = Pagination::new();
        pagination.go_to(3, 21);
        assert_eq!(pagination.page_range(21), 20..21);

        pagination.clamp(20);
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn previous_and_next_step_one_page() {
        let mut pagination = Pagination::new();
        pagination.next(30);
        pagination.next(30);
        assert_eq!(pagination.current_page(), 3);
        pagination.next(30);
        assert_eq!(pagination.current_page(), 3);
        pagination.previous(30);
        assert_eq!(pagination.current_page(), 2);
        pagination.first();
        pagination.previous(30);
        assert_eq!(pagination.current_page(), 1);
    }

    fn numbers(items: &[PagerItem]) -> Vec<Option<usize>> {
        items
            .iter()
            .filter_map(|item| match item {
                PagerItem::Page { number, .. } => Some(Some(*number)),
                PagerItem::Gap => Some(None),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn pager_lists_all_pages_when_few() {
        let items = pager_items(2, 3);
        assert_eq!(items.first(), Some(&PagerItem::First));
        assert_eq!(items.last(), Some(&PagerItem::Last));
        assert_eq!(numbers(&items), vec![Some(1), Some(2), Some(3)]);
        assert!(items.contains(&PagerItem::Page { number: 2, current: true }));
    }

    #[test]
    fn pager_collapses_long_ranges() {
        assert_eq!(
            numbers(&pager_items(6, 12)),
            vec![Some(1), None, Some(5), Some(6), Some(7), None, Some(12)]
        );
        assert_eq!(
            numbers(&pager_items(1, 12)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(12)]
        );
        assert_eq!(
            numbers(&pager_items(12, 12)),
            vec![Some(1), None, Some(8), Some(9), Some(10), Some(11), Some(12)]
        );
    }

    #[test]
    fn pager_with_no_pages_has_only_controls() {
        assert_eq!(
            pager_items(1, 0),
            vec![PagerItem::First, PagerItem::Previous, PagerItem::Next, PagerItem::Last]
        );
    }
}
