//! One-pass corpus preprocessing: source rows → immutable documents.

use biosearch_core::errors::BiosearchResult;
use biosearch_core::models::{Corpus, Document, SourceRecord};
use rayon::prelude::*;
use tracing::info;

use crate::normalizer::TextNormalizer;

/// Normalize every record and assemble the corpus.
///
/// Records without an explicit id get their 1-based row position. Rows are
/// normalized on the rayon pool; the ordered collect keeps corpus order.
pub fn preprocess(
    records: Vec<SourceRecord>,
    normalizer: &TextNormalizer,
    source_fingerprint: String,
) -> BiosearchResult<Corpus> {
    let documents: Vec<Document> = records
        .into_par_iter()
        .enumerate()
        .map(|(row, record)| Document {
            id: record.id.unwrap_or(row as u64 + 1),
            normalized_lexical: normalizer.normalize_lexical(&record.text),
            normalized_dense: normalizer.normalize_dense(&record.text),
            person: record.person,
            category: record.category,
            text: record.text,
            link: record.link,
        })
        .collect();

    let corpus = Corpus::new(documents, source_fingerprint)?;
    let stats = corpus.info();
    info!(
        documents = stats.document_count,
        lexical_tokens = stats.lexical_token_count,
        dense_tokens = stats.dense_token_count,
        "corpus preprocessed"
    );
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: Option<u64>, text: &str) -> SourceRecord {
        SourceRecord {
            id,
            person: "p".into(),
            category: "c".into(),
            text: text.into(),
            link: "l".into(),
        }
    }

    #[test]
    fn assigns_sequential_ids_when_missing() {
        let n = TextNormalizer::russian();
        let corpus = preprocess(
            vec![record(None, "один"), record(None, "два"), record(None, "три")],
            &n,
            "fp".into(),
        )
        .unwrap();
        assert_eq!(corpus.row_ids(), vec![1, 2, 3]);
        assert_eq!(corpus.source_fingerprint(), "fp");
    }

    #[test]
    fn keeps_explicit_ids_and_order() {
        let n = TextNormalizer::russian();
        let corpus = preprocess(
            vec![record(Some(10), "Мария"), record(Some(4), "Иван")],
            &n,
            String::new(),
        )
        .unwrap();
        assert_eq!(corpus.row_ids(), vec![10, 4]);
        assert_eq!(corpus.documents()[1].normalized_dense, "иван");
    }

    #[test]
    fn duplicate_ids_fail() {
        let n = TextNormalizer::russian();
        let result = preprocess(
            vec![record(Some(1), "a"), record(Some(1), "b")],
            &n,
            String::new(),
        );
        assert!(result.is_err());
    }
}
