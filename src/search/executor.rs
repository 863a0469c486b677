use std::collections::HashSet;
use crate::core::config::DEFAULT_MAX_RESULTS;
use crate::core::types::{DocumentId, Occurrence};
use crate::index::inverted::KeywordIndex;

/// Answers "kw1 OR kw2" queries against a built index
#[derive(Debug, Clone, Copy)]
pub struct QueryExecutor {
    pub max_results: usize,
}

impl Default for QueryExecutor {
    fn default() -> Self {
        QueryExecutor {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl QueryExecutor {
    pub fn new(max_results: usize) -> Self {
        QueryExecutor { max_results }
    }

    /// Documents containing either keyword, in descending frequency order.
    ///
    /// Keywords are looked up as given. A document appears at most once and
    /// frequency ties go to the first keyword.
    pub fn execute(&self, index: &KeywordIndex, kw1: &str, kw2: &str) -> Vec<DocumentId> {
        merge_ranked(index.occurrences(kw1), index.occurrences(kw2), self.max_results)
    }
}

/// Merge two frequency-ranked lists into at most `limit` distinct documents
pub fn merge_ranked(first: &[Occurrence], second: &[Occurrence], limit: usize) -> Vec<DocumentId> {
    let mut results: Vec<DocumentId> = Vec::with_capacity(limit.min(first.len() + second.len()));
    let mut seen: HashSet<&DocumentId> = HashSet::new();
    let mut i = 0;
    let mut j = 0;

    while results.len() < limit {
        while i < first.len() && seen.contains(&first[i].document) {
            i += 1;
        }
        while j < second.len() && seen.contains(&second[j].document) {
            j += 1;
        }

        let next = match (first.get(i), second.get(j)) {
            (Some(a), Some(b)) => {
                if a.frequency >= b.frequency {
                    i += 1;
                    a
                } else {
                    j += 1;
                    b
                }
            }
            (Some(a), None) => {
                i += 1;
                a
            }
            (None, Some(b)) => {
                j += 1;
                b
            }
            (None, None) => break,
        };

        seen.insert(&next.document);
        results.push(next.document.clone());
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[(&str, u32)]) -> Vec<Occurrence> {
        entries.iter()
            .map(|(doc, freq)| Occurrence::new(DocumentId::new(*doc), *freq))
            .collect()
    }

    fn ids(docs: &[&str]) -> Vec<DocumentId> {
        docs.iter().map(|d| DocumentId::new(*d)).collect()
    }

    #[test]
    fn test_first_keyword_wins_ties() {
        let deep = list(&[("docA", 5), ("docB", 3)]);
        let world = list(&[("docC", 5), ("docD", 2)]);

        assert_eq!(merge_ranked(&deep, &world, 5), ids(&["docA", "docC", "docB", "docD"]));
        assert_eq!(merge_ranked(&world, &deep, 5), ids(&["docC", "docA", "docB", "docD"]));
    }

    #[test]
    fn test_one_side_empty() {
        let world = list(&[("docC", 5), ("docD", 2)]);
        assert_eq!(merge_ranked(&[], &world, 5), ids(&["docC", "docD"]));
        assert_eq!(merge_ranked(&world, &[], 5), ids(&["docC", "docD"]));
    }

    #[test]
    fn test_both_empty() {
        assert!(merge_ranked(&[], &[], 5).is_empty());
    }

    #[test]
    fn test_shared_documents_emitted_once() {
        let a = list(&[("d1", 9), ("d2", 4), ("d3", 1)]);
        let b = list(&[("d2", 8), ("d1", 6), ("d4", 2)]);

        assert_eq!(merge_ranked(&a, &b, 5), ids(&["d1", "d2", "d4", "d3"]));
    }

    #[test]
    fn test_same_keyword_twice() {
        let a = list(&[("d1", 3), ("d2", 2), ("d3", 1)]);
        assert_eq!(merge_ranked(&a, &a, 5), ids(&["d1", "d2", "d3"]));
    }

    #[test]
    fn test_result_capped() {
        let a = list(&[("a1", 10), ("a2", 8), ("a3", 6), ("a4", 4)]);
        let b = list(&[("b1", 9), ("b2", 7), ("b3", 5), ("b4", 3)]);

        assert_eq!(merge_ranked(&a, &b, 5), ids(&["a1", "b1", "a2", "b2", "a3"]));
        assert_eq!(merge_ranked(&a, &b, 2), ids(&["a1", "b1"]));
    }

    #[test]
    fn test_drains_remaining_side_skipping_seen() {
        let a = list(&[("d1", 1)]);
        let b = list(&[("d2", 5), ("d1", 4), ("d3", 3)]);

        assert_eq!(merge_ranked(&a, &b, 5), ids(&["d2", "d1", "d3"]));
    }

    #[test]
    fn test_executor_treats_missing_keywords_as_empty() {
        let index = KeywordIndex::new();
        let executor = QueryExecutor::default();
        assert!(executor.execute(&index, "deep", "world").is_empty());
    }
}
