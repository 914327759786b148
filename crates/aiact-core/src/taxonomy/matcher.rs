//! Taxonomy Matchers
//!
//! Three disciplines over a lowercase corpus:
//!
//! - [`best_match`]: argmax on distinct keyword hits, strict-greater update,
//!   so ties resolve to the earlier-declared label
//! - [`first_match`]: earliest label with any keyword present
//! - [`all_matches`]: every label with any keyword present, declared order
//!
//! Matching is plain substring containment without word boundaries
//! ("car" matches inside "scarce"). Callers lowercase the corpus once;
//! keywords are declared lowercase.

use super::builtin::Taxonomy;

/// True if any keyword occurs as a substring of the corpus.
pub fn contains_any(corpus: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| corpus.contains(kw))
}

/// Label with the highest count of distinct keyword hits, or `default`
/// when nothing matches. Updates only on a strictly greater count.
pub fn best_match(corpus: &str, table: &[Taxonomy], default: &'static str) -> &'static str {
    let mut best = default;
    let mut best_count = 0;

    for entry in table {
        let count = entry.keywords.iter().filter(|kw| corpus.contains(*kw)).count();
        if count > best_count {
            best_count = count;
            best = entry.label;
        }
    }

    best
}

/// Earliest-declared label with any keyword present.
pub fn first_match(corpus: &str, table: &[Taxonomy]) -> Option<&'static str> {
    table
        .iter()
        .find(|entry| contains_any(corpus, entry.keywords))
        .map(|entry| entry.label)
}

/// Every label with any keyword present, in declared order.
pub fn all_matches(corpus: &str, table: &[Taxonomy]) -> Vec<&'static str> {
    table
        .iter()
        .filter(|entry| contains_any(corpus, entry.keywords))
        .map(|entry| entry.label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRUIT: &[Taxonomy] = &[
        Taxonomy {
            label: "citrus",
            keywords: &["lemon", "orange", "lime"],
        },
        Taxonomy {
            label: "berry",
            keywords: &["strawberry", "blueberry", "raspberry"],
        },
        Taxonomy {
            label: "stone",
            keywords: &["peach", "plum", "cherry"],
        },
    ];

    #[test]
    fn test_best_match_counts_distinct_keywords() {
        let corpus = "a lemon and an orange next to one peach";
        assert_eq!(best_match(corpus, FRUIT, "none"), "citrus");
    }

    #[test]
    fn test_best_match_tie_goes_to_earlier_label() {
        // One hit each for citrus and stone: earlier declaration wins.
        let corpus = "a lime and a plum";
        assert_eq!(best_match(corpus, FRUIT, "none"), "citrus");
    }

    #[test]
    fn test_best_match_later_label_needs_strictly_more() {
        let corpus = "peach plum cherry and one lemon";
        assert_eq!(best_match(corpus, FRUIT, "none"), "stone");
    }

    #[test]
    fn test_best_match_default_on_no_hit() {
        assert_eq!(best_match("nothing relevant", FRUIT, "none"), "none");
    }

    #[test]
    fn test_best_match_single_hit_overrides_default() {
        assert_eq!(best_match("one cherry", FRUIT, "none"), "stone");
    }

    #[test]
    fn test_first_match_stops_at_earliest() {
        let corpus = "cherry lemon strawberry";
        assert_eq!(first_match(corpus, FRUIT), Some("citrus"));
    }

    #[test]
    fn test_first_match_none() {
        assert_eq!(first_match("vegetables only", FRUIT), None);
    }

    #[test]
    fn test_all_matches_in_declared_order() {
        let corpus = "cherry then strawberry";
        assert_eq!(all_matches(corpus, FRUIT), vec!["berry", "stone"]);
    }

    #[test]
    fn test_all_matches_no_duplicates_per_label() {
        let corpus = "lemon orange lime";
        assert_eq!(all_matches(corpus, FRUIT), vec!["citrus"]);
    }

    #[test]
    fn test_substring_matching_ignores_word_boundaries() {
        // "lime" inside "sublime": intentional, matching is unscoped.
        assert!(contains_any("a sublime day", &["lime"]));
        assert_eq!(first_match("a sublime day", FRUIT), Some("citrus"));
    }
}
