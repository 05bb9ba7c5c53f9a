//! Lexical and dense text normalization.

use std::collections::HashSet;

use biosearch_core::config::NormalizerConfig;
use biosearch_core::errors::BiosearchResult;
use biosearch_core::traits::ILemmatizer;
use tracing::debug;

use crate::lemmatizer::{lemmatizer_for_language, SnowballLemmatizer};
use crate::stopwords;

/// Typographic punctuation stripped in addition to ASCII punctuation.
const TYPOGRAPHIC_PUNCTUATION: &[char] = &[
    '«', '»', '„', '“', '”', '‘', '’', '‚', '‹', '›', '—', '–', '‒', '‐', '‑', '−', '…', '•',
    '№', '·',
];

fn is_stripped(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_numeric() || TYPOGRAPHIC_PUNCTUATION.contains(&c)
}

/// Text normalizer shared by both ranking paths.
///
/// Holds only immutable state (stop words, lemmatizer), so one instance is
/// shared by every caller.
pub struct TextNormalizer {
    stop_words: HashSet<String>,
    lemmatizer: Box<dyn ILemmatizer>,
}

impl TextNormalizer {
    pub fn new(stop_words: HashSet<String>, lemmatizer: Box<dyn ILemmatizer>) -> Self {
        Self {
            stop_words,
            lemmatizer,
        }
    }

    /// Russian stop words and Snowball Russian lemmatizer.
    pub fn russian() -> Self {
        Self::new(
            stopwords::build_stop_words(&[]),
            Box::new(SnowballLemmatizer::russian()),
        )
    }

    pub fn from_config(config: &NormalizerConfig) -> BiosearchResult<Self> {
        let lemmatizer = lemmatizer_for_language(&config.stemmer_language)?;
        let stop_words = stopwords::build_stop_words(&config.extra_stop_words);
        debug!(
            lemmatizer = lemmatizer.name(),
            stop_words = stop_words.len(),
            "text normalizer initialized"
        );
        Ok(Self::new(stop_words, lemmatizer))
    }

    /// Lowercase, then drop punctuation and digits.
    fn clean(text: &str) -> String {
        text.to_lowercase().chars().filter(|c| !is_stripped(*c)).collect()
    }

    /// Normalize for the TF-IDF model.
    pub fn normalize_lexical(&self, text: &str) -> String {
        let cleaned = Self::clean(text);
        let mut out = String::with_capacity(cleaned.len());

        for token in cleaned.split_whitespace() {
            if self.stop_words.contains(token) {
                continue;
            }
            let lemma = self.lemmatizer.lemma(token);
            // A lemma can collapse onto a stop word; dropping it here keeps the
            // output a fixed point of this function.
            if lemma.is_empty() || self.stop_words.contains(lemma.as_ref()) {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&lemma);
        }

        out
    }

    /// Normalize for the embedding model.
    pub fn normalize_dense(&self, text: &str) -> String {
        let cleaned = Self::clean(text);
        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn lemmatizer_name(&self) -> &str {
        self.lemmatizer.name()
    }

    /// Stable description of the normalization: lemmatizer plus the sorted
    /// stop-word list. Equal signatures produce equal output.
    pub fn signature(&self) -> String {
        let mut words: Vec<&str> = self.stop_words.iter().map(String::as_str).collect();
        words.sort_unstable();
        format!("{}|{}", self.lemmatizer.name(), words.join(","))
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::russian()
    }
}
