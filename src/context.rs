use std::sync::Arc;

use crate::embedding::{create_encoder, EncoderConfig, SentenceEncoder};
use crate::error::ModelError;
use crate::ner::EntityRecognizer;

/// Process-wide model handles, constructed once at startup and injected
/// into every engine. Both handles are read-only after construction and
/// safe to share across concurrent scoring calls; either may be absent,
/// in which case the dependent signal/scan degrades.
#[derive(Clone, Default)]
pub struct MatcherContext {
    pub encoder: Option<Arc<dyn SentenceEncoder>>,
    pub recognizer: Option<Arc<dyn EntityRecognizer>>,
}

impl MatcherContext {
    /// A context with no capabilities: semantic matching disabled, entity
    /// scan skipped. Useful as a test stub and for lexical-only callers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the configured sentence encoder. This is the one blocking
    /// initialization point; the returned context is reused for the
    /// process lifetime.
    pub fn initialize(config: &EncoderConfig) -> Result<Self, ModelError> {
        let encoder = create_encoder(config)?;
        Ok(Self {
            encoder: Some(encoder),
            recognizer: None,
        })
    }

    pub fn with_encoder(mut self, encoder: Arc<dyn SentenceEncoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }

    pub fn with_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn recognizer_ref(&self) -> Option<&dyn EntityRecognizer> {
        self.recognizer.as_deref()
    }
}
