//! CSV corpus source reader.
//!
//! Required header columns: `Person`, `Category`, `Text`, `Link`. An `id`
//! (or `Id`) column is optional; without it documents are numbered 1..N
//! during preprocessing.

use std::path::Path;

use biosearch_core::errors::{BiosearchResult, CorpusError};
use biosearch_core::models::SourceRecord;
use csv::StringRecord;
use tracing::info;

use crate::fingerprint::source_fingerprint;

const PERSON: &str = "Person";
const CATEGORY: &str = "Category";
const TEXT: &str = "Text";
const LINK: &str = "Link";
const ID_COLUMNS: [&str; 2] = ["id", "Id"];

/// Raw rows of the corpus source plus their fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSource {
    pub records: Vec<SourceRecord>,
    pub fingerprint: String,
}

impl CorpusSource {
    pub fn from_records(records: Vec<SourceRecord>) -> Self {
        let fingerprint = source_fingerprint(&records);
        Self {
            records,
            fingerprint,
        }
    }
}

struct Columns {
    id: Option<usize>,
    person: usize,
    category: usize,
    text: usize,
    link: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord, path: &str) -> Result<Self, CorpusError> {
        // A UTF-8 BOM sticks to the first header name.
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        };
        let required = |name: &str| {
            find(name).ok_or_else(|| CorpusError::Malformed {
                path: path.to_string(),
                reason: format!("missing column {name}"),
            })
        };
        Ok(Self {
            id: ID_COLUMNS.into_iter().find_map(&find),
            person: required(PERSON)?,
            category: required(CATEGORY)?,
            text: required(TEXT)?,
            link: required(LINK)?,
        })
    }
}

/// Read every row of the corpus CSV.
pub fn load_corpus_source(path: &Path) -> BiosearchResult<CorpusSource> {
    let path_str = path.display().to_string();
    if !path.is_file() {
        return Err(CorpusError::NotFound { path: path_str }.into());
    }

    let malformed = |reason: String| CorpusError::Malformed {
        path: path_str.clone(),
        reason,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| malformed(e.to_string()))?;
    let headers = reader.headers().map_err(|e| malformed(e.to_string()))?.clone();
    let columns = Columns::resolve(&headers, &path_str)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let line = row + 2;
        let record = result.map_err(|e| malformed(format!("line {line}: {e}")))?;
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();

        let id = match columns.id {
            Some(col) => {
                let raw = record.get(col).unwrap_or_default().trim();
                let id = raw
                    .parse::<u64>()
                    .map_err(|_| malformed(format!("line {line}: invalid id {raw:?}")))?;
                Some(id)
            }
            None => None,
        };

        records.push(SourceRecord {
            id,
            person: field(columns.person),
            category: field(columns.category),
            text: field(columns.text),
            link: field(columns.link),
        });
    }

    info!(
        path = %path_str,
        rows = records.len(),
        explicit_ids = columns.id.is_some(),
        "corpus source loaded"
    );
    Ok(CorpusSource::from_records(records))
}
