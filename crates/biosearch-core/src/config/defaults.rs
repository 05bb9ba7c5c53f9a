// Single source of truth for all default values.

// --- Corpus ---
pub const DEFAULT_DATA_PATH: &str = "new_biographies.csv";

// --- Index cache ---
pub const DEFAULT_LEXICAL_INDEX_PATH: &str = "indexes/tfidf_index.bsx";
pub const DEFAULT_DENSE_INDEX_PATH: &str = "indexes/dense_index.bsx";
pub const DEFAULT_CORPUS_CACHE_PATH: &str = "indexes/processed_corpus.bsx";
pub const DEFAULT_CACHE_ENABLED: bool = true;
pub const DEFAULT_ZSTD_LEVEL: i32 = 3;

// --- Normalizer ---
pub const DEFAULT_STEMMER_LANGUAGE: &str = "russian";

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "onnx";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 32;
pub const DEFAULT_PARALLEL_BATCHES: bool = false;
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 10_000;

// --- Search ---
pub const DEFAULT_TOP_N: usize = 5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
