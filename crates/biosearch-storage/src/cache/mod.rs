//! Index cache: the processed corpus, the lexical model and the dense matrix
//! as three independent artifacts.
//!
//! A load only succeeds when all three artifacts are present, intact, of the
//! current format version, built from the same source rows, and aligned row
//! for row with the restored corpus. Anything else is reported as absent so the
//! engine rebuilds.

pub mod artifact;

use std::path::{Path, PathBuf};

use biosearch_core::config::IndexConfig;
use biosearch_core::constants::CACHE_FORMAT_VERSION;
use biosearch_core::errors::{BiosearchResult, CacheError};
use biosearch_core::models::Corpus;
use biosearch_index::{DenseIndex, LexicalIndex};
use biosearch_observability::{cache_span, events};
use tracing::{debug, info};

use artifact::{ArtifactHeader, ArtifactKind};

/// Everything the engine needs to serve queries.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedState {
    pub corpus: Corpus,
    pub lexical: LexicalIndex,
    pub dense: DenseIndex,
}

/// Handle on the three artifact paths.
#[derive(Debug, Clone)]
pub struct IndexCache {
    corpus_path: PathBuf,
    lexical_path: PathBuf,
    dense_path: PathBuf,
    compression_level: i32,
}

impl IndexCache {
    pub fn new(
        corpus_path: impl Into<PathBuf>,
        lexical_path: impl Into<PathBuf>,
        dense_path: impl Into<PathBuf>,
        compression_level: i32,
    ) -> Self {
        Self {
            corpus_path: corpus_path.into(),
            lexical_path: lexical_path.into(),
            dense_path: dense_path.into(),
            compression_level,
        }
    }

    pub fn from_config(config: &IndexConfig) -> Self {
        Self::new(
            &config.corpus_cache_path,
            &config.lexical_index_path,
            &config.dense_index_path,
            config.compression_level,
        )
    }

    /// Artifact paths in write order: corpus, lexical, dense.
    pub fn paths(&self) -> [&Path; 3] {
        [&self.corpus_path, &self.lexical_path, &self.dense_path]
    }

    /// Persist all three artifacts. Each file is replaced atomically.
    pub fn save(
        &self,
        corpus: &Corpus,
        lexical: &LexicalIndex,
        dense: &DenseIndex,
    ) -> BiosearchResult<()> {
        let span = cache_span!("save", self.corpus_path.display());
        let _guard = span.enter();

        let fingerprint = corpus.source_fingerprint();
        let mut bytes = 0u64;

        let corpus_body = to_json(&self.corpus_path, corpus)?;
        let header = ArtifactHeader::new(ArtifactKind::Corpus, fingerprint, corpus.row_ids());
        bytes += artifact::write_artifact(
            &self.corpus_path,
            &header,
            &corpus_body,
            self.compression_level,
        )?;

        let lexical_body = to_json(&self.lexical_path, lexical)?;
        let header =
            ArtifactHeader::new(ArtifactKind::Lexical, fingerprint, lexical.row_ids().to_vec());
        bytes += artifact::write_artifact(
            &self.lexical_path,
            &header,
            &lexical_body,
            self.compression_level,
        )?;

        let dense_body = artifact::f32_to_le_bytes(dense.data());
        let mut header =
            ArtifactHeader::new(ArtifactKind::Dense, fingerprint, dense.row_ids().to_vec());
        header.dims = Some(dense.dims());
        bytes += artifact::write_artifact(
            &self.dense_path,
            &header,
            &dense_body,
            self.compression_level,
        )?;

        debug!(bytes = bytes, "cache artifacts written");
        events::cache_saved(3, corpus.len());
        Ok(())
    }

    /// Restore the cached state if it still matches the source.
    ///
    /// Returns `None` when any artifact is missing, corrupt, stale or
    /// inconsistent. Inconsistencies are logged at `warn`.
    pub fn load(&self, source_fingerprint: &str, expected_dims: usize) -> Option<CachedState> {
        let span = cache_span!("load", self.corpus_path.display());
        let _guard = span.enter();

        if let Some(missing) = self.paths().into_iter().find(|p| artifact::is_missing(p)) {
            info!(path = %missing.display(), "cache artifact absent");
            return None;
        }

        match self.try_load(source_fingerprint, expected_dims) {
            Ok(state) => {
                events::cache_restored(state.corpus.len());
                Some(state)
            }
            Err(e) => {
                let path = match &e {
                    CacheError::Inconsistent { path, .. }
                    | CacheError::Corrupt { path, .. }
                    | CacheError::Io { path, .. } => path.clone(),
                };
                events::cache_discarded(&path, &e.to_string());
                None
            }
        }
    }

    fn try_load(
        &self,
        source_fingerprint: &str,
        expected_dims: usize,
    ) -> Result<CachedState, CacheError> {
        let (corpus_header, body) = artifact::read_artifact(&self.corpus_path)?;
        check_header(&self.corpus_path, &corpus_header, ArtifactKind::Corpus, source_fingerprint)?;
        let corpus: Corpus = from_json(&self.corpus_path, &body)?;
        if corpus.source_fingerprint() != source_fingerprint {
            return Err(inconsistent(&self.corpus_path, "corpus fingerprint is stale"));
        }
        let row_ids = corpus.row_ids();
        check_rows(&self.corpus_path, &corpus_header, &row_ids)?;

        let (lexical_header, body) = artifact::read_artifact(&self.lexical_path)?;
        check_header(
            &self.lexical_path,
            &lexical_header,
            ArtifactKind::Lexical,
            source_fingerprint,
        )?;
        check_rows(&self.lexical_path, &lexical_header, &row_ids)?;
        let lexical: LexicalIndex = from_json(&self.lexical_path, &body)?;
        lexical
            .validate(&corpus)
            .map_err(|e| inconsistent(&self.lexical_path, e.to_string()))?;

        let (dense_header, body) = artifact::read_artifact(&self.dense_path)?;
        check_header(&self.dense_path, &dense_header, ArtifactKind::Dense, source_fingerprint)?;
        check_rows(&self.dense_path, &dense_header, &row_ids)?;
        let dims = dense_header.dims.unwrap_or(expected_dims);
        let data = artifact::f32_from_le_bytes(&body)
            .ok_or_else(|| corrupt(&self.dense_path, "dense body is not a whole number of f32"))?;
        let dense = DenseIndex::from_parts(dims, data, dense_header.row_ids)
            .map_err(|e| inconsistent(&self.dense_path, e.to_string()))?;
        dense
            .validate(&corpus, expected_dims)
            .map_err(|e| inconsistent(&self.dense_path, e.to_string()))?;

        Ok(CachedState {
            corpus,
            lexical,
            dense,
        })
    }
}

fn check_header(
    path: &Path,
    header: &ArtifactHeader,
    kind: ArtifactKind,
    source_fingerprint: &str,
) -> Result<(), CacheError> {
    if header.kind != kind {
        return Err(inconsistent(
            path,
            format!("expected {} artifact, found {}", kind.as_str(), header.kind.as_str()),
        ));
    }
    if header.format_version != CACHE_FORMAT_VERSION {
        return Err(inconsistent(
            path,
            format!(
                "format version {} (current {CACHE_FORMAT_VERSION})",
                header.format_version
            ),
        ));
    }
    if header.source_fingerprint != source_fingerprint {
        return Err(inconsistent(path, "source fingerprint is stale"));
    }
    Ok(())
}

fn check_rows(path: &Path, header: &ArtifactHeader, corpus_ids: &[u64]) -> Result<(), CacheError> {
    if header.rows != corpus_ids.len() || header.row_ids.len() != header.rows {
        return Err(inconsistent(
            path,
            format!("{} rows, corpus has {}", header.rows, corpus_ids.len()),
        ));
    }
    if header.row_ids != corpus_ids {
        return Err(inconsistent(path, "row ids differ from corpus ids"));
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<Vec<u8>, CacheError> {
    serde_json::to_vec(value).map_err(|e| CacheError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn from_json<T: serde::de::DeserializeOwned>(path: &Path, body: &[u8]) -> Result<T, CacheError> {
    serde_json::from_slice(body).map_err(|e| corrupt(path, format!("body: {e}")))
}

fn inconsistent(path: &Path, reason: impl Into<String>) -> CacheError {
    CacheError::Inconsistent {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

fn corrupt(path: &Path, reason: impl Into<String>) -> CacheError {
    CacheError::Corrupt {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}
