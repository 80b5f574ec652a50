pub mod config;
pub mod hash_encoder;
pub mod similarity;

use std::sync::Arc;

pub use config::EncoderConfig;
pub use hash_encoder::HashSentenceEncoder;
pub use similarity::cosine_similarity;

use tracing::warn;

use crate::error::{ModelError, SignalError};

#[derive(Debug, Clone)]
pub struct Embedding {
    pub vector: Vec<f32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Embedding {
    pub fn new(vector: Vec<f32>) -> Self {
        Self {
            vector,
            created_at: chrono::Utc::now(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.vector.len()
    }
}

/// Sentence-embedding backend for the semantic signal.
///
/// Implementations are loaded once at context initialization, are read-only
/// afterwards, and may be shared across concurrent scoring calls.
/// `name()`/`version()` identify the model generation in logs.
pub trait SentenceEncoder: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &'static str;

    fn version(&self) -> &str;

    fn dimension(&self) -> usize;

    /// Encode raw (un-normalized) text into a dense vector. The encoder
    /// does its own tokenization.
    fn encode(&self, text: &str) -> Result<Embedding, SignalError>;

    /// Similarity between two embeddings produced by this encoder.
    fn similarity(&self, a: &Embedding, b: &Embedding) -> f32 {
        if a.dimension() != b.dimension() {
            warn!(
                a_dimension = a.dimension(),
                b_dimension = b.dimension(),
                "embedding dimension mismatch; returning zero similarity"
            );
            return 0.0;
        }
        cosine_similarity(&a.vector, &b.vector)
    }
}

/// Construct the configured encoder. Unknown names fall back to the
/// deterministic hash encoder unless the configuration marks the encoder
/// required, in which case initialization fails instead.
pub fn create_encoder(config: &EncoderConfig) -> Result<Arc<dyn SentenceEncoder>, ModelError> {
    match config.name.as_str() {
        "hash" => Ok(Arc::new(HashSentenceEncoder::new(config.dimension))),
        other => {
            if config.required {
                return Err(ModelError::UnknownEncoder(other.to_string()));
            }
            warn!(
                encoder = other,
                "unknown sentence encoder; falling back to hash encoder"
            );
            Ok(Arc::new(HashSentenceEncoder::new(config.dimension)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_builds_hash_encoder() {
        let encoder = create_encoder(&EncoderConfig::default()).unwrap();
        assert_eq!(encoder.name(), "hash");
        assert_eq!(encoder.dimension(), 384);
    }

    #[test]
    fn unknown_encoder_falls_back_when_not_required() {
        let config = EncoderConfig {
            name: "transformer".into(),
            ..Default::default()
        };
        let encoder = create_encoder(&config).unwrap();
        assert_eq!(encoder.name(), "hash");
    }

    #[test]
    fn unknown_encoder_is_fatal_when_required() {
        let config = EncoderConfig {
            name: "transformer".into(),
            required: true,
            ..Default::default()
        };
        let err = create_encoder(&config).unwrap_err();
        assert!(matches!(err, ModelError::UnknownEncoder(_)));
    }

    #[test]
    fn default_similarity_rejects_dimension_mismatch() {
        let encoder = HashSentenceEncoder::new(16);
        let a = Embedding::new(vec![1.0; 16]);
        let b = Embedding::new(vec![1.0; 8]);
        assert_eq!(encoder.similarity(&a, &b), 0.0);
    }
}
