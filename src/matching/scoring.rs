use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    lexical::lexical_overlap,
    semantic::semantic_similarity,
    skills::skill_overlap,
    tfidf::term_weighted_similarity,
    weights::SignalWeights,
};
use crate::{
    config::MatchConfig, context::MatcherContext, error::MatchError, normalize::normalize_text,
    skill_extractor, JobRecord, ResumeRecord,
};

/// Per-signal breakdown, each value in [0, 1]. Produced fresh for every
/// (resume, job) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScores {
    pub lexical: f64,
    pub statistical: f64,
    pub semantic: f64,
    pub skills: f64,
}

impl SimilarityScores {
    /// Fixed-order view for rendering and iteration.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("lexical", self.lexical),
            ("statistical", self.statistical),
            ("semantic", self.semantic),
            ("skills", self.skills),
        ]
    }
}

/// Everything one scoring call produces. `overall` is the unrounded fused
/// score; the pipeline rounds only at the exposure boundary.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoredPair {
    pub overall: f64,
    pub scores: SimilarityScores,
    pub matched_skills: Vec<String>,
}

/// The matching engine: a pure function of (records, context, config).
/// Holds no per-call state; the only long-lived members are the injected
/// read-only model handles.
pub struct MatchEngine {
    context: MatcherContext,
    config: MatchConfig,
}

impl MatchEngine {
    pub fn new(context: MatcherContext, config: MatchConfig) -> Self {
        Self { context, config }
    }

    pub fn with_defaults(context: MatcherContext) -> Self {
        Self::new(context, MatchConfig::default())
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score one (resume, job) pair: unrounded overall score in [0, 100]
    /// plus the per-signal breakdown.
    ///
    /// Signal computation failures degrade to a 0.0 contribution and are
    /// logged; only a failing entity-recognition capability is a real
    /// error, which batch matching turns into exclusion of this job.
    pub fn score(
        &self,
        resume: &ResumeRecord,
        job: &JobRecord,
    ) -> Result<(f64, SimilarityScores), MatchError> {
        let scored = self.evaluate(resume, job)?;
        Ok((scored.overall, scored.scores))
    }

    pub(crate) fn evaluate(
        &self,
        resume: &ResumeRecord,
        job: &JobRecord,
    ) -> Result<ScoredPair, MatchError> {
        let resume_text = resume.matching_text();
        let job_text = job.matching_text();
        let resume_normalized = normalize_text(&resume_text);
        let job_normalized = normalize_text(&job_text);

        let lexical = lexical_overlap(&resume_normalized, &job_normalized);

        let statistical = match term_weighted_similarity(&resume_normalized, &job_normalized) {
            Ok(value) => value,
            Err(err) => {
                warn!(job_id = %job.id, error = %err, "statistical signal degraded to zero");
                0.0
            }
        };

        let semantic = if !self.config.use_semantic_matching {
            0.0
        } else {
            match self.context.encoder.as_deref() {
                None => 0.0,
                Some(encoder) => match semantic_similarity(encoder, &resume_text, &job_text) {
                    Ok(value) => value,
                    Err(err) => {
                        warn!(job_id = %job.id, error = %err, "semantic signal degraded to zero");
                        0.0
                    }
                },
            }
        };

        let recognizer = self.context.recognizer_ref();
        let mut resume_skills = skill_extractor::normalize_skill_set(&resume.skills);
        resume_skills.extend(skill_extractor::extract(&resume_text, recognizer)?);
        let mut job_skills = skill_extractor::normalize_skill_set(&job.skills);
        job_skills.extend(skill_extractor::extract(&job_text, recognizer)?);

        let overlap = skill_overlap(&resume_skills, &job_skills);

        let scores = SimilarityScores {
            lexical,
            statistical,
            semantic,
            skills: overlap.score,
        };

        Ok(ScoredPair {
            overall: fuse(&scores, &self.config.weights),
            scores,
            matched_skills: overlap.matched,
        })
    }
}

/// Weighted sum of the four signals, scaled to 0-100 and capped.
fn fuse(scores: &SimilarityScores, weights: &SignalWeights) -> f64 {
    let weighted = weights.lexical * scores.lexical
        + weights.statistical * scores.statistical
        + weights.semantic * scores.semantic
        + weights.skills * scores.skills;

    (weighted * 100.0).min(100.0)
}
