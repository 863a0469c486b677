use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::error::{Error, Result};
use crate::core::types::DocumentId;

/// Supplies the raw tokens of a document
pub trait DocumentSource {
    fn tokens(&self, document: &DocumentId) -> Result<Vec<String>>;
}

/// Reads documents from disk, resolving ids relative to `root`
pub struct FileDocumentSource {
    pub root: PathBuf,
    pub tokenizer: WhitespaceTokenizer,
}

impl FileDocumentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileDocumentSource {
            root: root.into(),
            tokenizer: WhitespaceTokenizer,
        }
    }

    pub fn path_of(&self, document: &DocumentId) -> PathBuf {
        self.root.join(document.as_str())
    }
}

impl DocumentSource for FileDocumentSource {
    fn tokens(&self, document: &DocumentId) -> Result<Vec<String>> {
        let bytes = fs::read(self.path_of(document)).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::document_not_found(document.as_str()),
            _ => Error::from(e),
        })?;

        // Invalid UTF-8 becomes U+FFFD, which the normalizer rejects
        let text = String::from_utf8_lossy(&bytes);
        Ok(self.tokenizer.tokenize(&text).into_iter().map(String::from).collect())
    }
}

/// In-memory documents keyed by id
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentSource {
    pub documents: HashMap<DocumentId, String>,
}

impl MemoryDocumentSource {
    pub fn new() -> Self {
        MemoryDocumentSource::default()
    }

    pub fn with_document(mut self, id: &str, text: &str) -> Self {
        self.insert(id, text);
        self
    }

    pub fn insert(&mut self, id: &str, text: &str) {
        self.documents.insert(DocumentId::new(id), text.to_string());
    }
}

impl DocumentSource for MemoryDocumentSource {
    fn tokens(&self, document: &DocumentId) -> Result<Vec<String>> {
        self.documents
            .get(document)
            .map(|text| WhitespaceTokenizer.tokenize(text).into_iter().map(String::from).collect())
            .ok_or_else(|| Error::document_not_found(document.as_str()))
    }
}
