//! Case-insensitive substring search over member records.

use crate::domain::Record;

/// Returns the records of `dataset` with at least one field containing
/// `term`, ignoring case, in dataset order. An empty term keeps everything.
#[must_use]
pub fn filter_records(dataset: &[Record], term: &str) -> Vec<Record> {
    let needle = term.to_lowercase();

    let _span = tracing::debug_span!("filter_records",
        dataset_len = dataset.len(),
        term_len = needle.len()
    )
    .entered();

    let filtered: Vec<Record> = dataset
        .iter()
        .filter(|record| record.matches(&needle))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "search filter applied");
    filtered
}

/// Character ranges of every non-overlapping occurrence of `needle` in `text`.
///
/// Comparison is per character on the lowercased form, and ranges are
/// `(start, end)` character indices with an exclusive end, ready for the
/// highlight renderer.
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = needle.chars().map(fold).collect();

    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn dataset() -> Vec<Record> {
        vec![
            Record::new("1", "Alice", "alice@example.com", Role::Admin),
            Record::new("2", "Bob", "bob@example.com", Role::Member),
            Record::new("3", "Carol", "carol@corp.io", Role::Member),
        ]
    }

    #[test]
    fn finds_bob_case_insensitively() {
        let result = filter_records(&dataset(), "BoB");
        assert_eq!(result, vec![Record::new("2", "Bob", "bob@example.com", Role::Member)]);
    }

    #[test]
    fn empty_term_keeps_everything_in_order() {
        assert_eq!(filter_records(&dataset(), ""), dataset());
    }

    #[test]
    fn matches_any_field() {
        let ids = |term: &str| -> Vec<String> {
            filter_records(&dataset(), term)
                .into_iter()
                .map(|r| r.id.to_string())
                .collect()
        };

        assert_eq!(ids("example.com"), vec!["1", "2"]);
        assert_eq!(ids("member"), vec!["2", "3"]);
        assert_eq!(ids("3"), vec!["3"]);
        assert!(ids("zzz").is_empty());
    }

    #[test]
    fn result_is_exactly_the_matching_subset() {
        for term in ["a", "o", "adm", "@", "corp", "1", "x"] {
            let result = filter_records(&dataset(), term);
            let expected: Vec<Record> = dataset()
                .into_iter()
                .filter(|r| r.field_values().iter().any(|v| v.to_lowercase().contains(term)))
                .collect();
            assert_eq!(result, expected, "term {term:?}");
        }
    }

    #[test]
    fn match_ranges_finds_each_occurrence() {
        assert_eq!(match_ranges("Banana", "an"), vec![(1, 3), (3, 5)]);
        assert_eq!(match_ranges("Bob", "BO"), vec![(0, 2)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("Bob", "").is_empty());
        assert!(match_ranges("Bo", "Bob").is_empty());
    }

    #[test]
    fn match_ranges_use_character_indices() {
        assert_eq!(match_ranges("Zoë Ölm", "öl"), vec![(4, 6)]);
    }
}
