//! Information harvesting
//!
//! Stage 1 orchestration: queries the search collaborator for context about
//! an AI system, folds the results into supplementary text, and hands
//! everything to the [`ProfileBuilder`].
//!
//! Retrieval is best-effort throughout. A failing query is reported as a
//! warning and skipped without touching its sibling queries; a fully failed
//! search degrades to an empty context. Harvesting never fails a
//! classification request.

use crate::profile::{ProfileBuilder, SystemProfile};
use crate::search::{SearchHit, SearchProvider};

/// Default number of results requested per query.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Gathers search context and builds system profiles.
pub struct Harvester<'a> {
    provider: &'a dyn SearchProvider,
    max_results: usize,
}

impl<'a> Harvester<'a> {
    pub fn new(provider: &'a dyn SearchProvider) -> Self {
        Self {
            provider,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Build a profile for the described system, enriched with whatever
    /// search context could be gathered.
    pub fn harvest(&self, name: &str, company: &str, description: &str) -> SystemProfile {
        let (context, sources) = self.gather_context(name, company);

        ProfileBuilder::new(name, company, description)
            .with_context(&context)
            .with_sources(sources)
            .build()
    }

    /// Run the fixed query set and fold the hits into one context block.
    ///
    /// Returns the formatted supplementary text and the source URLs in
    /// first-seen order, deduplicated by URL across queries.
    pub fn gather_context(&self, name: &str, company: &str) -> (String, Vec<String>) {
        let queries = [
            format!("{} {} AI system", company, name),
            format!("{} {} use case application", company, name),
        ];

        let mut hits: Vec<SearchHit> = Vec::new();
        let mut sources: Vec<String> = Vec::new();

        for query in &queries {
            match self.provider.search(query, self.max_results) {
                Ok(results) => {
                    for hit in results {
                        if sources.iter().any(|s| s == &hit.url) {
                            continue;
                        }
                        sources.push(hit.url.clone());
                        hits.push(hit);
                    }
                }
                Err(e) => {
                    eprintln!("Warning: search query failed: {}", e);
                }
            }
        }

        (format_hits(&hits), sources)
    }
}

/// Render hits as bullet lines for the analysis corpus. Hits without a
/// snippet carry no information and are dropped.
fn format_hits(hits: &[SearchHit]) -> String {
    hits.iter()
        .filter(|hit| !hit.snippet.is_empty())
        .map(|hit| {
            let title = if hit.title.is_empty() { "Source" } else { &hit.title };
            format!("- {}: {}", title, hit.snippet)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AiActError, Result};
    use crate::search::NullSearch;
    use std::cell::RefCell;

    /// Stub returning one canned batch per query, or an error.
    struct StubSearch {
        batches: RefCell<Vec<Result<Vec<SearchHit>>>>,
    }

    impl StubSearch {
        fn new(batches: Vec<Result<Vec<SearchHit>>>) -> Self {
            Self {
                batches: RefCell::new(batches),
            }
        }
    }

    impl SearchProvider for StubSearch {
        fn search(&self, _query: &str, _max_results: usize) -> Result<Vec<SearchHit>> {
            self.batches.borrow_mut().remove(0)
        }
    }

    fn hit(title: &str, snippet: &str, url: &str) -> SearchHit {
        SearchHit {
            title: title.to_string(),
            snippet: snippet.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_dedup_by_url_across_queries() {
        let stub = StubSearch::new(vec![
            Ok(vec![
                hit("A", "first snippet", "https://a.example"),
                hit("B", "second snippet", "https://b.example"),
            ]),
            Ok(vec![
                hit("A again", "duplicate", "https://a.example"),
                hit("C", "third snippet", "https://c.example"),
            ]),
        ]);

        let (context, sources) = Harvester::new(&stub).gather_context("Nimbus", "Acme");
        assert_eq!(
            sources,
            vec![
                "https://a.example".to_string(),
                "https://b.example".to_string(),
                "https://c.example".to_string(),
            ]
        );
        assert_eq!(
            context,
            "- A: first snippet\n- B: second snippet\n- C: third snippet"
        );
    }

    #[test]
    fn test_failed_query_does_not_abort_siblings() {
        let stub = StubSearch::new(vec![
            Err(AiActError::SearchFailed {
                message: "boom".to_string(),
            }),
            Ok(vec![hit("C", "still here", "https://c.example")]),
        ]);

        let (context, sources) = Harvester::new(&stub).gather_context("Nimbus", "Acme");
        assert_eq!(sources, vec!["https://c.example".to_string()]);
        assert_eq!(context, "- C: still here");
    }

    #[test]
    fn test_fully_failed_search_degrades_to_empty() {
        let stub = StubSearch::new(vec![
            Err(AiActError::SearchFailed {
                message: "boom".to_string(),
            }),
            Err(AiActError::SearchFailed {
                message: "boom again".to_string(),
            }),
        ]);

        let harvester = Harvester::new(&stub);
        let profile = harvester.harvest("Nimbus", "Acme", "A planning tool");
        assert!(profile.additional_info.is_none());
        assert!(profile.search_sources.is_empty());
    }

    #[test]
    fn test_snippetless_hits_are_dropped_from_context() {
        let stub = StubSearch::new(vec![
            Ok(vec![
                hit("A", "", "https://a.example"),
                hit("", "anonymous snippet", "https://b.example"),
            ]),
            Ok(vec![]),
        ]);

        let (context, sources) = Harvester::new(&stub).gather_context("Nimbus", "Acme");
        // The URL still counts as a consulted source.
        assert_eq!(sources.len(), 2);
        assert_eq!(context, "- Source: anonymous snippet");
    }

    #[test]
    fn test_null_provider_harvest() {
        let harvester = Harvester::new(&NullSearch);
        let profile = harvester.harvest("Nimbus", "Acme", "Enhances photos with filters");
        assert!(profile.additional_info.is_none());
        assert!(profile.search_sources.is_empty());
        assert_eq!(profile.name, "Nimbus");
    }

    #[test]
    fn test_context_flows_into_profile_fields() {
        let stub = StubSearch::new(vec![
            Ok(vec![hit(
                "Vendor",
                "supports clinical diagnosis for each patient",
                "https://v.example",
            )]),
            Ok(vec![]),
        ]);

        let profile = Harvester::new(&stub).harvest("Nimbus", "Acme", "A planning tool");
        assert_eq!(profile.sector, "Healthcare");
        assert_eq!(profile.search_sources, vec!["https://v.example".to_string()]);
    }
}
