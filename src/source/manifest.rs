use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use crate::analysis::filters::stopword::NoiseWords;
use crate::core::error::{Error, Result};
use crate::core::types::DocumentId;

fn read_entries(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::resource_not_found(path),
        _ => Error::from(e),
    })?;
    Ok(raw.split_whitespace().map(String::from).collect())
}

/// Document names listed in a manifest file, in file order
pub fn read_manifest(path: &Path) -> Result<Vec<DocumentId>> {
    let documents: Vec<DocumentId> = read_entries(path)?
        .into_iter()
        .map(DocumentId::from)
        .collect();

    if documents.is_empty() {
        warn!(manifest = %path.display(), "manifest lists no documents");
    } else {
        debug!(manifest = %path.display(), documents = documents.len(), "read manifest");
    }
    Ok(documents)
}

pub fn read_noise_words(path: &Path) -> Result<NoiseWords> {
    let words = read_entries(path)?;
    debug!(path = %path.display(), words = words.len(), "read noise words");
    Ok(NoiseWords::new(words))
}
