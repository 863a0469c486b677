use std::fs;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind, Result};

/// Default cap on the number of documents a query returns
pub const DEFAULT_MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub manifest_path: PathBuf,
    pub noise_words_path: PathBuf,
    pub document_root: PathBuf,     // Relative document ids resolve against this
    pub max_results: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest_path: PathBuf::from("docs.txt"),
            noise_words_path: PathBuf::from("noisewords.txt"),
            document_root: PathBuf::from("."),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl Config {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|_| Error::resource_not_found(path))?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "max_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
