//! Content fingerprint of the corpus source rows.

use biosearch_core::models::SourceRecord;

/// blake3 over every source row, hex encoded.
///
/// Fields are length-prefixed so that shifting text between adjacent columns
/// changes the fingerprint.
pub fn source_fingerprint(records: &[SourceRecord]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(records.len() as u64).to_le_bytes());
    for record in records {
        match record.id {
            Some(id) => {
                hasher.update(&[1]);
                hasher.update(&id.to_le_bytes());
            }
            None => {
                hasher.update(&[0]);
            }
        }
        for field in [&record.person, &record.category, &record.text, &record.link] {
            hasher.update(&(field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
    }
    hasher.finalize().to_hex().to_string()
}

/// Fingerprint of a build: the source rows plus every component whose
/// identity changes the derived indexes (lemmatizer, embedding provider).
pub fn build_fingerprint(source_fingerprint: &str, components: &[&str]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(source_fingerprint.as_bytes());
    for component in components {
        hasher.update(&(component.len() as u64).to_le_bytes());
        hasher.update(component.as_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
