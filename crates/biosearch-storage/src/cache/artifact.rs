//! On-disk artifact format.
//!
//! ```text
//! [magic "BSX1"][header len: u32 LE][header JSON][zstd body][blake3: 32 bytes]
//! ```
//!
//! The checksum covers every byte before it. Writes go to a temp file that is
//! renamed over the target, so a reader never sees a partial artifact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use biosearch_core::constants::CACHE_FORMAT_VERSION;
use biosearch_core::errors::CacheError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAGIC: &[u8; 4] = b"BSX1";
const CHECKSUM_LEN: usize = 32;
const PREFIX_LEN: usize = MAGIC.len() + 4;

/// Which of the three cached artifacts a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Corpus,
    Lexical,
    Dense,
}

impl ArtifactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Corpus => "corpus",
            Self::Lexical => "lexical",
            Self::Dense => "dense",
        }
    }
}

/// Artifact metadata, stored uncompressed ahead of the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactHeader {
    pub kind: ArtifactKind,
    pub format_version: u32,
    pub built_at: DateTime<Utc>,
    pub source_fingerprint: String,
    pub rows: usize,
    pub row_ids: Vec<u64>,
    /// Embedding width, dense artifacts only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dims: Option<usize>,
}

impl ArtifactHeader {
    pub fn new(kind: ArtifactKind, source_fingerprint: &str, row_ids: Vec<u64>) -> Self {
        Self {
            kind,
            format_version: CACHE_FORMAT_VERSION,
            built_at: Utc::now(),
            source_fingerprint: source_fingerprint.to_string(),
            rows: row_ids.len(),
            row_ids,
            dims: None,
        }
    }
}

fn io_error(path: &Path, e: impl std::fmt::Display) -> CacheError {
    CacheError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn corrupt(path: &Path, reason: impl Into<String>) -> CacheError {
    CacheError::Corrupt {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Serialize, compress, checksum and atomically write one artifact.
pub fn write_artifact(
    path: &Path,
    header: &ArtifactHeader,
    body: &[u8],
    compression_level: i32,
) -> Result<u64, CacheError> {
    let header_json = serde_json::to_vec(header).map_err(|e| io_error(path, e))?;
    let header_len = u32::try_from(header_json.len()).map_err(|e| io_error(path, e))?;
    let compressed = zstd::encode_all(body, compression_level).map_err(|e| io_error(path, e))?;

    let mut output =
        Vec::with_capacity(PREFIX_LEN + header_json.len() + compressed.len() + CHECKSUM_LEN);
    output.extend_from_slice(MAGIC);
    output.extend_from_slice(&header_len.to_le_bytes());
    output.extend_from_slice(&header_json);
    output.extend_from_slice(&compressed);
    let checksum = blake3::hash(&output);
    output.extend_from_slice(checksum.as_bytes());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(path, e))?;
    }
    let tmp = temp_path(path);
    fs::write(&tmp, &output).map_err(|e| io_error(path, e))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        io_error(path, e)
    })?;

    Ok(output.len() as u64)
}

/// Read, verify and decompress one artifact.
///
/// A missing file is reported as [`CacheError::Io`] with the `NotFound`
/// reason; use [`is_missing`] to tell it apart from real I/O failures.
pub fn read_artifact(path: &Path) -> Result<(ArtifactHeader, Vec<u8>), CacheError> {
    let raw = fs::read(path).map_err(|e| io_error(path, e))?;
    if raw.len() < PREFIX_LEN + CHECKSUM_LEN {
        return Err(corrupt(path, "file too short"));
    }
    if &raw[..MAGIC.len()] != MAGIC {
        return Err(corrupt(path, "bad magic"));
    }

    let (content, stored) = raw.split_at(raw.len() - CHECKSUM_LEN);
    if blake3::hash(content).as_bytes() != stored {
        return Err(corrupt(path, "checksum mismatch"));
    }

    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(&content[MAGIC.len()..PREFIX_LEN]);
    let header_len = u32::from_le_bytes(len_bytes) as usize;
    let header_end = PREFIX_LEN
        .checked_add(header_len)
        .filter(|end| *end <= content.len())
        .ok_or_else(|| corrupt(path, "header length out of range"))?;

    let header: ArtifactHeader = serde_json::from_slice(&content[PREFIX_LEN..header_end])
        .map_err(|e| corrupt(path, format!("header: {e}")))?;
    let body = zstd::decode_all(&content[header_end..])
        .map_err(|e| corrupt(path, format!("body: {e}")))?;

    Ok((header, body))
}

/// Whether the file is simply not there yet.
pub fn is_missing(path: &Path) -> bool {
    matches!(fs::metadata(path), Err(e) if e.kind() == io::ErrorKind::NotFound)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Encode a row-major f32 matrix as little-endian bytes.
pub fn f32_to_le_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Decode little-endian bytes into f32 values.
pub fn f32_from_le_bytes(bytes: &[u8]) -> Option<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> ArtifactHeader {
        ArtifactHeader::new(ArtifactKind::Lexical, "fp", vec![1, 2, 3])
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("a.bsx");
        write_artifact(&path, &header(), b"payload", 3).unwrap();

        let (h, body) = read_artifact(&path).unwrap();
        assert_eq!(h, header_with_time(&h));
        assert_eq!(body, b"payload");
        assert!(!temp_path(&path).exists());
    }

    fn header_with_time(read: &ArtifactHeader) -> ArtifactHeader {
        ArtifactHeader {
            built_at: read.built_at,
            ..header()
        }
    }

    #[test]
    fn flipped_byte_fails_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.bsx");
        write_artifact(&path, &header(), b"payload", 3).unwrap();

        let mut raw = fs::read(&path).unwrap();
        let mid = raw.len() / 2;
        raw[mid] ^= 0xff;
        fs::write(&path, raw).unwrap();

        assert!(matches!(
            read_artifact(&path),
            Err(CacheError::Corrupt { .. })
        ));
    }

    #[test]
    fn truncated_and_foreign_files_are_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let short = dir.path().join("short.bsx");
        fs::write(&short, b"BSX1").unwrap();
        assert!(matches!(read_artifact(&short), Err(CacheError::Corrupt { .. })));

        let foreign = dir.path().join("foreign.bsx");
        fs::write(&foreign, vec![7u8; 128]).unwrap();
        assert!(matches!(read_artifact(&foreign), Err(CacheError::Corrupt { .. })));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.bsx");
        assert!(is_missing(&path));
        assert!(matches!(read_artifact(&path), Err(CacheError::Io { .. })));
    }

    #[test]
    fn f32_bytes_roundtrip_exact() {
        let values = vec![0.1f32, -3.5, f32::MIN_POSITIVE, 1e-30];
        let bytes = f32_to_le_bytes(&values);
        assert_eq!(f32_from_le_bytes(&bytes).unwrap(), values);
        assert!(f32_from_le_bytes(&bytes[..3]).is_none());
    }
}
