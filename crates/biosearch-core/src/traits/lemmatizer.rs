use std::borrow::Cow;

/// Reduces a lowercase token to its dictionary form.
///
/// Must be idempotent: `lemma(lemma(t)) == lemma(t)`.
pub trait ILemmatizer: Send + Sync {
    fn lemma<'a>(&self, token: &'a str) -> Cow<'a, str>;

    /// Human-readable name, logged at startup.
    fn name(&self) -> &str;
}
