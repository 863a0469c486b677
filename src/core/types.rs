use serde::{Serialize, Deserialize};
use std::fmt;

/// Identifier of an indexed document (its name in the manifest)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        DocumentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        DocumentId(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        DocumentId(id)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How many times a keyword appears in one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: DocumentId,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: DocumentId, frequency: u32) -> Self {
        Occurrence { document, frequency }
    }

    /// A fresh occurrence with the count bumped by one
    pub fn incremented(&self) -> Self {
        Occurrence {
            document: self.document.clone(),
            frequency: self.frequency + 1,
        }
    }
}
