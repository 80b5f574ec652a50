use crate::embedding::SentenceEncoder;
use crate::error::SignalError;

/// Dense-embedding similarity between two raw texts.
///
/// Both texts are encoded independently; the score is the cosine of the
/// two vectors clamped to [0, 1], so a marginally negative cosine degrades
/// to the conservative zero rather than an inflated value. Callers decide
/// whether the signal is enabled at all; encoding failures propagate for
/// the fusion layer to absorb.
pub fn semantic_similarity(
    encoder: &dyn SentenceEncoder,
    resume_text: &str,
    job_text: &str,
) -> Result<f64, SignalError> {
    let resume_embedding = encoder.encode(resume_text)?;
    let job_embedding = encoder.encode(job_text)?;

    let cosine = encoder.similarity(&resume_embedding, &job_embedding) as f64;
    Ok(cosine.clamp(0.0, 1.0))
}
