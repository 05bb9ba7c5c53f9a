//! Feature-hashing embedding provider.
//!
//! Generates fixed-dimension vectors by hashing terms into buckets and weighting
//! by term frequency. No model files, fully deterministic: used for offline
//! builds and as the stand-in model in tests.

use std::collections::BTreeMap;

use biosearch_core::errors::BiosearchResult;
use biosearch_core::traits::IEmbeddingProvider;

use crate::similarity::l2_normalize;

/// Deterministic bag-of-words embedding provider.
pub struct HashingProvider {
    dimensions: usize,
}

impl HashingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    /// Tokenize text into lowercase alphanumeric terms of at least two chars.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.chars().count() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if tokens.is_empty() {
            return vec;
        }

        // BTreeMap keeps bucket accumulation order stable across runs.
        let mut tf: BTreeMap<&str, f32> = BTreeMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        for (term, count) in &tf {
            let freq = count / total;
            // Longer terms carry more information than short function words.
            let weight = 1.0 + (term.chars().count() as f32).ln();
            vec[Self::hash_term(term, self.dimensions)] += freq * weight;
        }

        l2_normalize(&mut vec);
        vec
    }
}

impl IEmbeddingProvider for HashingProvider {
    fn embed(&self, text: &str) -> BiosearchResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> BiosearchResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::{cosine_similarity, norm};

    #[test]
    fn empty_text_returns_zero_vector() {
        let p = HashingProvider::new(128);
        let v = p.embed("").unwrap();
        assert_eq!(v.len(), 128);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn produces_correct_dimensions() {
        let p = HashingProvider::new(384);
        let v = p.embed("лев толстой писатель").unwrap();
        assert_eq!(v.len(), 384);
    }

    #[test]
    fn output_is_normalized() {
        let p = HashingProvider::new(256);
        let v = p.embed("мария родилась в москве").unwrap();
        assert!((norm(&v) - 1.0).abs() < 1e-5, "expected unit norm");
    }

    #[test]
    fn deterministic() {
        let p = HashingProvider::new(256);
        let a = p.embed("детерминированный тест").unwrap();
        let b = p.embed("детерминированный тест").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_matches_individual() {
        let p = HashingProvider::new(128);
        let texts = vec!["мария родилась".to_string(), "иван работал".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        for (i, text) in texts.iter().enumerate() {
            assert_eq!(batch[i], p.embed(text).unwrap());
        }
    }

    #[test]
    fn shared_terms_raise_cosine() {
        let p = HashingProvider::new(256);
        let q = p.embed("мария").unwrap();
        let a = p.embed("мария родилась в москве").unwrap();
        let b = p.embed("иван работал инженером").unwrap();
        assert!(cosine_similarity(&q, &a) > cosine_similarity(&q, &b));
    }

    #[test]
    fn zero_dimensions_is_clamped() {
        let p = HashingProvider::new(0);
        assert_eq!(p.dimensions(), 1);
    }
}
