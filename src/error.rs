use thiserror::Error;

/// Failure inside a single similarity signal. The fusion layer decides how
/// these degrade (always to a 0.0 contribution, never to an inflated one).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalError {
    #[error("term vocabulary is empty after stop-word removal")]
    EmptyVocabulary,
    #[error("sentence encoding failed: {0}")]
    Encoding(String),
}

/// Failure reported by an entity-recognition capability.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("entity recognition failed: {0}")]
pub struct NerError(pub String);

/// Failure while scoring a single (resume, job) pair. Batch matching logs
/// these and excludes the job; the batch itself never aborts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("skill extraction failed: {0}")]
    SkillExtraction(#[from] NerError),
}

/// Failure while initializing a process-wide model handle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("unknown sentence encoder {0:?}")]
    UnknownEncoder(String),
    #[error("sentence encoder {name:?} failed to load: {reason}")]
    EncoderLoad { name: String, reason: String },
}
