use std::collections::HashMap;
use tracing::debug;
use crate::analysis::normalizer::Normalizer;
use crate::core::types::{DocumentId, Occurrence};

/// Keyword occurrences for a single document
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    pub document: DocumentId,
    pub keywords: HashMap<String, Occurrence>,
    pub tokens_scanned: usize,
    pub tokens_rejected: usize,
}

impl FrequencyTable {
    pub fn new(document: DocumentId) -> Self {
        FrequencyTable {
            document,
            keywords: HashMap::new(),
            tokens_scanned: 0,
            tokens_rejected: 0,
        }
    }

    /// Count one more sighting of `keyword`
    pub fn record(&mut self, keyword: String) {
        let next = match self.keywords.get(&keyword) {
            Some(existing) => existing.incremented(),
            None => Occurrence::new(self.document.clone(), 1),
        };
        self.keywords.insert(keyword, next);
    }

    pub fn get(&self, keyword: &str) -> Option<&Occurrence> {
        self.keywords.get(keyword)
    }

    pub fn frequency(&self, keyword: &str) -> u32 {
        self.keywords.get(keyword).map_or(0, |o| o.frequency)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Builds frequency tables from raw document tokens
pub struct DocumentLoader<'a> {
    pub normalizer: &'a Normalizer,
}

impl<'a> DocumentLoader<'a> {
    pub fn new(normalizer: &'a Normalizer) -> Self {
        DocumentLoader { normalizer }
    }

    pub fn load<I, S>(&self, document: DocumentId, tokens: I) -> FrequencyTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = FrequencyTable::new(document);

        for token in tokens {
            table.tokens_scanned += 1;
            match self.normalizer.normalize(token.as_ref()) {
                Some(keyword) => table.record(keyword),
                None => table.tokens_rejected += 1,
            }
        }

        debug!(
            document = %table.document,
            keywords = table.len(),
            scanned = table.tokens_scanned,
            rejected = table.tokens_rejected,
            "loaded document keywords"
        );

        table
    }
}
