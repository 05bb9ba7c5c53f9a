pub mod embedding;
pub mod lemmatizer;

pub use embedding::IEmbeddingProvider;
pub use lemmatizer::ILemmatizer;
