//! Lemmatizers: Snowball stemming driven to a fixed point, or identity.

use std::borrow::Cow;

use biosearch_core::errors::{BiosearchError, BiosearchResult};
use biosearch_core::traits::ILemmatizer;
use rust_stemmers::{Algorithm, Stemmer};

/// Upper bound on stemming rounds. Snowball rules only shorten or rewrite a
/// suffix, so real tokens settle in two or three rounds.
const MAX_STEM_ROUNDS: usize = 16;

/// Snowball stemmer applied until the token stops changing.
///
/// A single Snowball pass is not always idempotent (stripping one suffix can
/// expose another), so the fixed point is what makes
/// `lemma(lemma(t)) == lemma(t)` hold.
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
    name: String,
}

impl SnowballLemmatizer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            stemmer: Stemmer::create(algorithm),
            name: format!("snowball-{algorithm:?}").to_lowercase(),
        }
    }

    pub fn russian() -> Self {
        Self::new(Algorithm::Russian)
    }
}

impl ILemmatizer for SnowballLemmatizer {
    fn lemma<'a>(&self, token: &'a str) -> Cow<'a, str> {
        let first = self.stemmer.stem(token);
        if first == token {
            return Cow::Borrowed(token);
        }

        let mut current = first.into_owned();
        for _ in 0..MAX_STEM_ROUNDS {
            let next = self.stemmer.stem(&current).into_owned();
            if next == current {
                break;
            }
            current = next;
        }
        Cow::Owned(current)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Leaves tokens untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityLemmatizer;

impl ILemmatizer for IdentityLemmatizer {
    fn lemma<'a>(&self, token: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(token)
    }

    fn name(&self) -> &str {
        "identity"
    }
}

/// Resolve a configured stemmer language.
pub fn lemmatizer_for_language(language: &str) -> BiosearchResult<Box<dyn ILemmatizer>> {
    let algorithm = match language.trim().to_ascii_lowercase().as_str() {
        "none" | "identity" => return Ok(Box::new(IdentityLemmatizer)),
        "russian" | "ru" => Algorithm::Russian,
        "english" | "en" => Algorithm::English,
        "german" | "de" => Algorithm::German,
        "french" | "fr" => Algorithm::French,
        other => {
            return Err(BiosearchError::ConfigError {
                reason: format!("unsupported stemmer language: {other}"),
            })
        }
    };
    Ok(Box::new(SnowballLemmatizer::new(algorithm)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflected_forms_share_a_lemma() {
        let lem = SnowballLemmatizer::russian();
        assert_eq!(lem.lemma("москве"), lem.lemma("москва"));
    }

    #[test]
    fn lemma_is_a_fixed_point() {
        let lem = SnowballLemmatizer::russian();
        for word in ["мария", "родилась", "москве", "работал", "инженером", "писателями"] {
            let once = lem.lemma(word).into_owned();
            let twice = lem.lemma(&once).into_owned();
            assert_eq!(once, twice, "lemma of {word} is not stable");
        }
    }

    #[test]
    fn latin_tokens_pass_through_russian_stemmer() {
        let lem = SnowballLemmatizer::russian();
        assert_eq!(lem.lemma("tolstoy"), "tolstoy");
    }

    #[test]
    fn identity_keeps_token() {
        assert_eq!(IdentityLemmatizer.lemma("москве"), "москве");
    }

    #[test]
    fn unknown_language_is_config_error() {
        let err = lemmatizer_for_language("klingon").err().unwrap();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn language_lookup_is_case_insensitive() {
        let lem = lemmatizer_for_language("Russian").unwrap();
        assert_eq!(lem.name(), "snowball-russian");
    }
}
