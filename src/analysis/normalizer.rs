use crate::analysis::filters::punctuation;
use crate::analysis::filters::stopword::NoiseWords;

/// Turns raw tokens into keywords.
///
/// A keyword is a word that, once its trailing punctuation is stripped,
/// consists only of letters and is not a noise word. The result is
/// lower-cased.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    pub noise_words: NoiseWords,
}

impl Normalizer {
    pub fn new(noise_words: NoiseWords) -> Self {
        Normalizer { noise_words }
    }

    pub fn normalize(&self, token: &str) -> Option<String> {
        let stem = punctuation::strip_trailing(token)?;

        if !stem.chars().all(is_letter) {
            return None;
        }

        let keyword = stem.to_lowercase();
        if self.noise_words.contains(&keyword) {
            return None;
        }

        Some(keyword)
    }
}

/// Alphabetic characters other than letter-numbers such as `Ⅻ`
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}
