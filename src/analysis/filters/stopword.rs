use std::collections::HashSet;

/// Words excluded from indexing. Stored lower-cased so membership is
/// case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    pub words: HashSet<String>,
}

impl NoiseWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        NoiseWords {
            words: words.into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// `word` is expected to already be lower-cased
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
