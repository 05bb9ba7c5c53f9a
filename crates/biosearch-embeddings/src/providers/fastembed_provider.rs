//! Local transformer embedding provider backed by fastembed (ONNX Runtime).
//!
//! Loads a local ONNX model plus tokenizer bundle and pools the first
//! (CLS) position of the last hidden state. Never downloads model assets.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use biosearch_core::errors::{BiosearchResult, EmbeddingError};
use biosearch_core::traits::IEmbeddingProvider;
use fastembed::{
    InitOptionsUserDefined, Pooling, TextEmbedding, TokenizerFiles, UserDefinedEmbeddingModel,
};
use tracing::info;

const MODEL_FILE: &str = "model.onnx";
const TOKENIZER_JSON: &str = "tokenizer.json";
const CONFIG_JSON: &str = "config.json";
const SPECIAL_TOKENS_JSON: &str = "special_tokens_map.json";
const TOKENIZER_CONFIG_JSON: &str = "tokenizer_config.json";

/// fastembed-backed transformer provider.
///
/// `TextEmbedding::embed` needs `&mut self`, so the model sits behind a
/// `Mutex` and every call holds it for the duration of one forward pass.
pub struct FastEmbedProvider {
    model: Mutex<TextEmbedding>,
    dimensions: usize,
    name: String,
}

impl FastEmbedProvider {
    /// Files that must exist in the model directory.
    pub fn required_model_files() -> &'static [&'static str] {
        &[
            MODEL_FILE,
            TOKENIZER_JSON,
            CONFIG_JSON,
            SPECIAL_TOKENS_JSON,
            TOKENIZER_CONFIG_JSON,
        ]
    }

    /// Load the model and tokenizer from a local directory.
    ///
    /// # Errors
    /// Returns `EmbeddingError::ModelLoadFailed` if the directory or any
    /// required file is missing, or if the runtime rejects the model.
    pub fn load(model_dir: &Path, dimensions: usize) -> BiosearchResult<Self> {
        let dir_label = model_dir.display().to_string();
        if !model_dir.is_dir() {
            return Err(EmbeddingError::ModelLoadFailed {
                path: dir_label,
                reason: "model directory not found".to_string(),
            }
            .into());
        }

        let missing: Vec<&str> = Self::required_model_files()
            .iter()
            .copied()
            .filter(|name| !model_dir.join(name).is_file())
            .collect();
        if !missing.is_empty() {
            return Err(EmbeddingError::ModelLoadFailed {
                path: dir_label,
                reason: format!("missing files: {}", missing.join(", ")),
            }
            .into());
        }

        let tokenizer_files = TokenizerFiles {
            tokenizer_file: read_required(model_dir.join(TOKENIZER_JSON))?,
            config_file: read_required(model_dir.join(CONFIG_JSON))?,
            special_tokens_map_file: read_required(model_dir.join(SPECIAL_TOKENS_JSON))?,
            tokenizer_config_file: read_required(model_dir.join(TOKENIZER_CONFIG_JSON))?,
        };

        let mut model =
            UserDefinedEmbeddingModel::new(read_required(model_dir.join(MODEL_FILE))?, tokenizer_files);
        model.pooling = Some(Pooling::Cls);

        let model = TextEmbedding::try_new_from_user_defined(model, InitOptionsUserDefined::new())
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                path: dir_label.clone(),
                reason: e.to_string(),
            })?;

        let name = model_dir
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        info!(model = %name, dims = dimensions, "transformer embedding model loaded");

        Ok(Self {
            model: Mutex::new(model),
            dimensions,
            name,
        })
    }

    fn run(&self, texts: &[String]) -> BiosearchResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut model = self
            .model
            .lock()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("model lock poisoned: {e}"),
            })?;

        let embeddings = model
            .embed(texts, Some(texts.len()))
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: e.to_string(),
            })?;

        if let Some(bad) = embeddings.iter().find(|v| v.len() != self.dimensions) {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: bad.len(),
            }
            .into());
        }

        Ok(embeddings)
    }
}

fn read_required(path: PathBuf) -> BiosearchResult<Vec<u8>> {
    fs::read(&path).map_err(|e| {
        EmbeddingError::ModelLoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

impl IEmbeddingProvider for FastEmbedProvider {
    fn embed(&self, text: &str) -> BiosearchResult<Vec<f32>> {
        let mut out = self.run(&[text.to_string()])?;
        out.pop().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "model returned no embedding".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> BiosearchResult<Vec<Vec<f32>>> {
        self.run(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        true
    }
}
