//! RetrievalEngine: owns the corpus, both indexes and the cache handle.
//!
//! Construction is the only state transition. Once built the engine is
//! immutable and serves concurrent searches through `&self`.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use biosearch_core::config::BiosearchConfig;
use biosearch_core::errors::{BiosearchError, BiosearchResult};
use biosearch_core::models::{
    Corpus, CorpusInfo, Document, SearchHit, SearchMethod, SearchResponse, SourceRecord,
};
use biosearch_core::traits::IEmbeddingProvider;
use biosearch_embeddings::{create_provider, EmbeddingEngine};
use biosearch_index::{DenseIndex, LexicalIndex};
use biosearch_observability::{build_span, events, search_span};
use biosearch_storage::{build_fingerprint, load_corpus_source, CorpusSource, IndexCache};
use biosearch_text::{preprocess, TextNormalizer};
use tracing::{debug, info, warn};

use crate::relevance::RelevanceScorer;

/// Whether construction may restore indexes from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuildMode {
    UseCache,
    ForceRebuild,
}

/// The retrieval engine. `Send + Sync`; share it by reference or `Arc`.
pub struct RetrievalEngine {
    config: BiosearchConfig,
    normalizer: TextNormalizer,
    embeddings: EmbeddingEngine,
    cache: Option<IndexCache>,
    corpus: Corpus,
    lexical: LexicalIndex,
    dense: DenseIndex,
}

impl RetrievalEngine {
    /// Load the configured corpus source, restoring indexes from the cache
    /// when it still matches and building them otherwise.
    pub fn open(
        config: BiosearchConfig,
        provider: Arc<dyn IEmbeddingProvider>,
    ) -> BiosearchResult<Self> {
        let source = load_corpus_source(Path::new(&config.corpus.data_path))?;
        Self::assemble(config, provider, source, BuildMode::UseCache)
    }

    /// [`open`](Self::open) with the provider named in the configuration.
    pub fn from_config(config: BiosearchConfig) -> BiosearchResult<Self> {
        let provider = create_provider(&config.embedding)?;
        Self::open(config, provider)
    }

    /// Ignore any cached artifacts, rebuild, and overwrite the cache.
    pub fn rebuild(
        config: BiosearchConfig,
        provider: Arc<dyn IEmbeddingProvider>,
    ) -> BiosearchResult<Self> {
        let source = load_corpus_source(Path::new(&config.corpus.data_path))?;
        Self::assemble(config, provider, source, BuildMode::ForceRebuild)
    }

    /// Build from in-memory source rows instead of the configured CSV.
    pub fn from_records(
        config: BiosearchConfig,
        provider: Arc<dyn IEmbeddingProvider>,
        records: Vec<SourceRecord>,
    ) -> BiosearchResult<Self> {
        let source = CorpusSource::from_records(records);
        Self::assemble(config, provider, source, BuildMode::UseCache)
    }

    fn assemble(
        config: BiosearchConfig,
        provider: Arc<dyn IEmbeddingProvider>,
        source: CorpusSource,
        mode: BuildMode,
    ) -> BiosearchResult<Self> {
        config.validate()?;
        let start = Instant::now();

        let normalizer = TextNormalizer::from_config(&config.normalizer)?;
        let embeddings = EmbeddingEngine::new(provider, &config.embedding);
        let cache = config
            .index
            .cache_enabled
            .then(|| IndexCache::from_config(&config.index));

        let signature = normalizer.signature();
        let dims = embeddings.dimensions().to_string();
        let fingerprint = build_fingerprint(
            &source.fingerprint,
            &[signature.as_str(), embeddings.provider_name(), dims.as_str()],
        );

        let restored = match (&cache, mode) {
            (Some(cache), BuildMode::UseCache) => cache.load(&fingerprint, embeddings.dimensions()),
            _ => None,
        };

        let (corpus, lexical, dense) = match restored {
            Some(state) => (state.corpus, state.lexical, state.dense),
            None => {
                let span = build_span!(source.records.len());
                let _guard = span.enter();

                let corpus = preprocess(source.records, &normalizer, fingerprint)?;
                let lexical = LexicalIndex::build(&corpus);
                let dense = DenseIndex::build(&corpus, &embeddings)?;
                events::indexes_built(
                    corpus.len(),
                    lexical.vectorizer().vocabulary_size(),
                    dense.dims(),
                    elapsed_ms(start),
                );

                if let Some(cache) = &cache {
                    // Serving does not depend on the cache; the next start rebuilds.
                    if let Err(e) = cache.save(&corpus, &lexical, &dense) {
                        warn!(error = %e, "failed to persist indexes");
                    }
                }
                (corpus, lexical, dense)
            }
        };

        info!(
            documents = corpus.len(),
            provider = embeddings.provider_name(),
            lemmatizer = normalizer.lemmatizer_name(),
            cache = cache.is_some(),
            elapsed_ms = elapsed_ms(start),
            "retrieval engine ready"
        );

        Ok(Self {
            config,
            normalizer,
            embeddings,
            cache,
            corpus,
            lexical,
            dense,
        })
    }

    /// Parse `method`, search, and optionally attach relevance scores.
    ///
    /// An unknown method fails before any other work. The response carries
    /// the elapsed search time alongside the hits.
    pub fn search(
        &self,
        query: &str,
        method: &str,
        top_n: usize,
        with_relevance: bool,
    ) -> BiosearchResult<SearchResponse> {
        let method: SearchMethod = method.parse()?;
        self.search_with_method(query, method, top_n, with_relevance)
    }

    /// [`search`](Self::search) with the configured default `top_n`.
    pub fn search_default(&self, query: &str, method: &str) -> BiosearchResult<SearchResponse> {
        self.search(query, method, self.config.search.default_top_n, false)
    }

    pub fn search_with_method(
        &self,
        query: &str,
        method: SearchMethod,
        top_n: usize,
        with_relevance: bool,
    ) -> BiosearchResult<SearchResponse> {
        let span = search_span!(method, top_n);
        let _guard = span.enter();
        let start = Instant::now();

        let mut hits = match method {
            SearchMethod::Lexical => self.search_lexical(query, top_n),
            SearchMethod::Dense => self.search_dense(query, top_n)?,
        };

        if with_relevance {
            for hit in &mut hits {
                hit.relevance = Some(self.score_relevance(query, &hit.text)?);
            }
        }

        let elapsed = elapsed_ms(start);
        events::search_completed(method, top_n, hits.len(), elapsed);
        Ok(SearchResponse {
            method,
            hits,
            elapsed_ms: elapsed,
        })
    }

    /// TF-IDF ranking. Never fails: an all-OOV query returns corpus order.
    pub fn search_lexical(&self, query: &str, top_n: usize) -> Vec<SearchHit> {
        self.lexical
            .search(&self.corpus, &self.normalizer, query, top_n)
    }

    /// Embedding ranking with min-max scaled scores.
    pub fn search_dense(&self, query: &str, top_n: usize) -> BiosearchResult<Vec<SearchHit>> {
        self.dense
            .search(
                &self.corpus,
                &self.normalizer,
                &self.embeddings,
                query,
                top_n,
            )
            .map_err(|e| BiosearchError::query_failed(SearchMethod::Dense, query, e))
    }

    /// Raw cosine between a query and a response text.
    pub fn score_relevance(&self, query: &str, response: &str) -> BiosearchResult<f32> {
        RelevanceScorer::new(&self.normalizer, &self.embeddings)
            .score(query, response)
            .map_err(|e| {
                debug!(error = %e, "relevance scoring failed");
                BiosearchError::query_failed(SearchMethod::Dense, query, e)
            })
    }

    pub fn corpus_info(&self) -> CorpusInfo {
        self.corpus.info()
    }

    pub fn available_methods(&self) -> &'static [SearchMethod] {
        &SearchMethod::ALL
    }

    /// Look up a document by id.
    pub fn document(&self, id: u64) -> Option<&Document> {
        self.corpus
            .position_of(id)
            .and_then(|row| self.corpus.get(row))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &BiosearchConfig {
        &self.config
    }

    pub fn embeddings(&self) -> &EmbeddingEngine {
        &self.embeddings
    }

    /// Whether artifacts are persisted for this engine.
    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
