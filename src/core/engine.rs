use std::collections::HashSet;
use std::path::Path;
use chrono::Utc;
use tracing::{info, warn};
use crate::analysis::filters::stopword::NoiseWords;
use crate::analysis::normalizer::Normalizer;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::IndexStats;
use crate::core::types::{DocumentId, Occurrence};
use crate::index::inverted::{KeywordIndex, MergeReport};
use crate::index::loader::{DocumentLoader, FrequencyTable};
use crate::search::executor::QueryExecutor;
use crate::source::document::{DocumentSource, FileDocumentSource};
use crate::source::manifest::{read_manifest, read_noise_words};

/// Owns the keyword index: built once, then queried
pub struct SearchEngine {
    config: Config,
    normalizer: Normalizer,
    index: KeywordIndex,
    executor: QueryExecutor,
    stats: IndexStats,
    indexed: HashSet<DocumentId>,
}

impl SearchEngine {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let executor = QueryExecutor::new(config.max_results);

        Ok(SearchEngine {
            config,
            normalizer: Normalizer::default(),
            index: KeywordIndex::new(),
            executor,
            stats: IndexStats::default(),
            indexed: HashSet::new(),
        })
    }

    pub fn with_noise_words(mut self, noise_words: NoiseWords) -> Self {
        self.normalizer = Normalizer::new(noise_words);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    pub fn normalize(&self, token: &str) -> Option<String> {
        self.normalizer.normalize(token)
    }

    /// Count the keywords of one document
    pub fn load_keywords_from_document(
        &self,
        document: &DocumentId,
        source: &dyn DocumentSource,
    ) -> Result<FrequencyTable> {
        let tokens = source.tokens(document)?;
        Ok(DocumentLoader::new(&self.normalizer).load(document.clone(), tokens))
    }

    /// Fold a document's keywords into the index.
    ///
    /// A document already in the index is skipped and yields an empty report.
    pub fn merge_keywords(&mut self, table: FrequencyTable) -> MergeReport {
        if !self.indexed.insert(table.document.clone()) {
            warn!(document = %table.document, "document already indexed, skipping");
            return MergeReport::new();
        }

        self.stats.tokens_scanned += table.tokens_scanned;
        self.stats.tokens_rejected += table.tokens_rejected;

        let report = self.index.merge(table);
        self.refresh_stats();
        report
    }

    /// Index every document in `documents`.
    ///
    /// All or nothing: if any document cannot be read the error is returned
    /// and the engine's index is left as it was. Repeated ids, within
    /// `documents` or from an earlier run, are indexed once.
    pub fn index_documents(
        &mut self,
        documents: &[DocumentId],
        source: &dyn DocumentSource,
    ) -> Result<()> {
        info!(documents = documents.len(), "building keyword index");

        let mut pending: HashSet<&DocumentId> = HashSet::new();
        let mut tables = Vec::with_capacity(documents.len());
        for document in documents {
            if self.indexed.contains(document) || !pending.insert(document) {
                warn!(document = %document, "document listed more than once, skipping");
                continue;
            }
            tables.push(self.load_keywords_from_document(document, source)?);
        }

        for table in tables {
            self.merge_keywords(table);
        }
        self.stats.built_at = Some(Utc::now());

        info!(
            documents = self.stats.documents_indexed,
            keywords = self.stats.distinct_keywords,
            occurrences = self.stats.total_occurrences,
            "keyword index built"
        );
        Ok(())
    }

    /// Read the noise words, then index every document the manifest lists
    pub fn make_index(&mut self, manifest: &Path, noise_words: &Path) -> Result<()> {
        let noise = read_noise_words(noise_words)?;
        let documents = read_manifest(manifest)?;
        let source = FileDocumentSource::new(self.config.document_root.clone());

        let previous = std::mem::replace(&mut self.normalizer, Normalizer::new(noise));
        let built = self.index_documents(&documents, &source);
        if built.is_err() {
            self.normalizer = previous;
        }
        built
    }

    /// `make_index` using the configured paths
    pub fn make_index_from_config(&mut self) -> Result<()> {
        let manifest = self.config.manifest_path.clone();
        let noise_words = self.config.noise_words_path.clone();
        self.make_index(&manifest, &noise_words)
    }

    /// Documents containing `kw1` or `kw2`, best first.
    ///
    /// Keywords must already be normalized.
    pub fn top_search(&self, kw1: &str, kw2: &str) -> Vec<DocumentId> {
        self.executor.execute(&self.index, kw1, kw2)
    }

    pub fn occurrences(&self, keyword: &str) -> &[Occurrence] {
        self.index.occurrences(keyword)
    }

    pub fn keyword_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_indexed(&self, document: &DocumentId) -> bool {
        self.indexed.contains(document)
    }

    pub fn document_count(&self) -> usize {
        self.index.doc_count
    }

    fn refresh_stats(&mut self) {
        self.stats.documents_indexed = self.index.doc_count;
        self.stats.distinct_keywords = self.index.len();
        self.stats.total_occurrences = self.index.total_occurrences();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::source::document::MemoryDocumentSource;

    fn ids(docs: &[&str]) -> Vec<DocumentId> {
        docs.iter().map(|d| DocumentId::new(*d)).collect()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config { max_results: 0, ..Config::default() };
        assert_eq!(SearchEngine::new(config).err().unwrap().kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_failed_document_leaves_index_untouched() {
        let source = MemoryDocumentSource::new()
            .with_document("doc1", "alpha beta")
            .with_document("doc2", "gamma");
        let mut engine = SearchEngine::new(Config::default()).unwrap();
        engine.index_documents(&ids(&["doc1"]), &source).unwrap();

        let err = engine
            .index_documents(&ids(&["doc2", "missing", "doc1"]), &source)
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::DocumentNotFound);
        assert_eq!(engine.document_count(), 1);
        assert!(engine.occurrences("gamma").is_empty());
        assert_eq!(engine.keyword_count(), 2);
    }

    #[test]
    fn test_merging_same_document_twice_is_ignored() {
        let source = MemoryDocumentSource::new().with_document("doc1", "cat cat");
        let mut engine = SearchEngine::new(Config::default()).unwrap();
        let doc1 = DocumentId::new("doc1");

        let first = engine.load_keywords_from_document(&doc1, &source).unwrap();
        let second = first.clone();
        assert_eq!(engine.merge_keywords(first).len(), 1);
        assert!(engine.merge_keywords(second).is_empty());

        assert!(engine.is_indexed(&doc1));
        assert_eq!(engine.occurrences("cat").len(), 1);
        assert_eq!(engine.document_count(), 1);
        assert_eq!(engine.stats().tokens_scanned, 2);
    }

    #[test]
    fn test_stats_track_tokens() {
        let source = MemoryDocumentSource::new().with_document("doc1", "The cat, the hat 42");
        let mut engine = SearchEngine::new(Config::default())
            .unwrap()
            .with_noise_words(NoiseWords::new(["the"]));
        engine.index_documents(&ids(&["doc1"]), &source).unwrap();

        let stats = engine.stats();
        assert_eq!(stats.documents_indexed, 1);
        assert_eq!(stats.distinct_keywords, 2);
        assert_eq!(stats.tokens_scanned, 5);
        assert_eq!(stats.tokens_rejected, 3);
        assert!(stats.built_at.is_some());
        assert!((stats.acceptance_rate() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_configured_result_limit() {
        let mut source = MemoryDocumentSource::new();
        let names: Vec<String> = (0..4).map(|i| format!("doc{}", i)).collect();
        for name in &names {
            source.insert(name, "apple");
        }
        let documents: Vec<DocumentId> = names.iter().map(|n| DocumentId::new(n.as_str())).collect();

        let config = Config { max_results: 2, ..Config::default() };
        let mut engine = SearchEngine::new(config).unwrap();
        engine.index_documents(&documents, &source).unwrap();

        assert_eq!(engine.top_search("apple", "pear").len(), 2);
    }
}
