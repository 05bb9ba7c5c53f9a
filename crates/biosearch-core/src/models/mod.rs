pub mod corpus;
pub mod corpus_info;
pub mod document;
pub mod search_hit;
pub mod search_method;
pub mod search_response;

pub use corpus::Corpus;
pub use corpus_info::CorpusInfo;
pub use document::{Document, SourceRecord};
pub use search_hit::SearchHit;
pub use search_method::SearchMethod;
pub use search_response::SearchResponse;
