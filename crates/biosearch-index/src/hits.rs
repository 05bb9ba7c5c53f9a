use biosearch_core::models::{Corpus, SearchHit};

/// Resolve ranked `(row, score)` pairs into hits through the corpus table.
pub(crate) fn resolve(corpus: &Corpus, ranked: Vec<(usize, f64)>) -> Vec<SearchHit> {
    ranked
        .into_iter()
        .filter_map(|(row, score)| {
            corpus.get(row).map(|doc| SearchHit {
                doc_id: doc.id,
                category: doc.category.clone(),
                text: doc.text.clone(),
                link: doc.link.clone(),
                score,
                relevance: None,
            })
        })
        .collect()
}
