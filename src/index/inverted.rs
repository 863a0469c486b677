use std::collections::HashMap;
use tracing::{debug, trace};
use crate::core::types::Occurrence;
use crate::index::loader::FrequencyTable;
use crate::index::posting::OccurrenceList;

/// Midpoints examined per keyword while merging one document.
/// `None` means the keyword's list had no prior entries.
pub type MergeReport = HashMap<String, Option<Vec<usize>>>;

/// Keyword -> occurrences, ranked by descending frequency
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    pub keywords: HashMap<String, OccurrenceList>,
    pub doc_count: usize,
}

impl KeywordIndex {
    pub fn new() -> Self {
        KeywordIndex {
            keywords: HashMap::new(),
            doc_count: 0,
        }
    }

    /// Fold one document's frequency table into the index
    pub fn merge(&mut self, table: FrequencyTable) -> MergeReport {
        let mut report = MergeReport::with_capacity(table.len());

        for (keyword, occurrence) in table.keywords {
            let list = self.keywords.entry(keyword.clone()).or_default();
            let midpoints = list.add_occurrence(occurrence);
            if let Some(mids) = &midpoints {
                trace!(keyword = %keyword, midpoints = ?mids, "repositioned occurrence");
            }
            report.insert(keyword, midpoints);
        }

        self.doc_count += 1;
        debug!(
            document = %table.document,
            keywords = report.len(),
            total_keywords = self.keywords.len(),
            "merged document into index"
        );

        report
    }

    pub fn get(&self, keyword: &str) -> Option<&OccurrenceList> {
        self.keywords.get(keyword)
    }

    /// Ranked occurrences of `keyword`, empty when it is not indexed
    pub fn occurrences(&self, keyword: &str) -> &[Occurrence] {
        self.keywords
            .get(keyword)
            .map(OccurrenceList::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains_key(keyword)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &String> {
        self.keywords.keys()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn total_occurrences(&self) -> usize {
        self.keywords.values().map(OccurrenceList::len).sum()
    }
}
