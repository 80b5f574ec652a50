use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::scoring::{MatchEngine, SimilarityScores};
use crate::{JobRecord, ResumeRecord};

/// One ranked match. `overall_score` is rounded to two decimals at this
/// exposure boundary; filtering and ordering happen on the unrounded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub overall_score: f64,
    pub scores: SimilarityScores,
    pub matched_skills: Vec<String>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl MatchEngine {
    /// Score every job against the resume, keep those at or above the
    /// threshold, and rank them by descending score. The sort is stable,
    /// so equal-score jobs retain their input order.
    ///
    /// A job whose scoring fails is logged and excluded; one bad job never
    /// aborts the batch.
    pub fn match_against_set(
        &self,
        resume: &ResumeRecord,
        jobs: &[JobRecord],
        threshold: f64,
    ) -> Vec<MatchResult> {
        info!(job_count = jobs.len(), threshold, "matching jobs against resume");

        let mut ranked: Vec<(f64, MatchResult)> = Vec::with_capacity(jobs.len());
        for job in jobs {
            match self.evaluate(resume, job) {
                Ok(pair) => {
                    if pair.overall >= threshold {
                        ranked.push((
                            pair.overall,
                            MatchResult {
                                job_id: job.id.clone(),
                                overall_score: round2(pair.overall),
                                scores: pair.scores,
                                matched_skills: pair.matched_skills,
                            },
                        ));
                    }
                }
                Err(err) => {
                    warn!(job_id = %job.id, error = %err, "scoring failed; job excluded from batch");
                }
            }
        }

        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        info!(match_count = ranked.len(), threshold, "matches above threshold");

        ranked.into_iter().map(|(_, result)| result).collect()
    }

    /// Top N jobs regardless of threshold: the full ranking at threshold 0,
    /// truncated. Never re-scores or re-thresholds, so the result is always
    /// a prefix of `match_against_set(resume, jobs, 0.0)`.
    pub fn best_matches(
        &self,
        resume: &ResumeRecord,
        jobs: &[JobRecord],
        top_n: usize,
    ) -> Vec<MatchResult> {
        let mut ranked = self.match_against_set(resume, jobs, 0.0);
        ranked.truncate(top_n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::context::MatcherContext;
    use crate::error::NerError;
    use crate::matching::weights::SignalWeights;
    use crate::ner::{Entity, EntityRecognizer};
    use std::collections::BTreeSet;
    use std::sync::Arc;

    fn resume() -> ResumeRecord {
        ResumeRecord {
            text: "Experienced Python developer with Django and AWS".into(),
            skills: vec![],
            ..Default::default()
        }
    }

    fn job(id: &str, skills: &[&str]) -> JobRecord {
        JobRecord {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn skills_only_engine() -> MatchEngine {
        MatchEngine::new(
            MatcherContext::empty(),
            MatchConfig {
                weights: SignalWeights {
                    lexical: 0.0,
                    statistical: 0.0,
                    semantic: 0.0,
                    skills: 1.0,
                },
                use_semantic_matching: false,
                threshold: 0.0,
                top_n: None,
            },
        )
    }

    #[test]
    fn ranks_jobs_by_descending_score() {
        let engine = skills_only_engine();
        let jobs = vec![
            job("weak", &["python", "aws", "docker", "kafka"]), // 2/4
            job("strong", &["python", "aws"]),                  // 2/2
        ];

        let results = engine.match_against_set(&resume(), &jobs, 0.0);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].job_id, "strong");
        assert_eq!(results[1].job_id, "weak");
        assert!(results[0].overall_score >= results[1].overall_score);
    }

    #[test]
    fn threshold_excludes_weak_matches() {
        let engine = skills_only_engine();
        let jobs = vec![
            job("strong", &["python", "aws"]),
            job("weak", &["python", "aws", "docker", "kafka"]),
        ];

        let results = engine.match_against_set(&resume(), &jobs, 70.0);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].job_id, "strong");
    }

    #[test]
    fn lower_thresholds_are_supersets() {
        let engine = skills_only_engine();
        let jobs = vec![
            job("a", &["python", "aws"]),
            job("b", &["python", "aws", "docker"]),
            job("c", &["kafka", "scala"]),
        ];

        let ids = |threshold: f64| -> BTreeSet<String> {
            engine
                .match_against_set(&resume(), &jobs, threshold)
                .into_iter()
                .map(|r| r.job_id)
                .collect()
        };

        let loose = ids(0.0);
        let mid = ids(50.0);
        let strict = ids(90.0);

        assert!(mid.is_subset(&loose));
        assert!(strict.is_subset(&mid));
    }

    #[test]
    fn equal_scores_retain_input_order() {
        let engine = skills_only_engine();
        let jobs = vec![
            job("first", &["python", "aws"]),
            job("second", &["python", "aws"]),
            job("third", &["python", "aws"]),
        ];

        let results = engine.match_against_set(&resume(), &jobs, 0.0);

        let ids: Vec<&str> = results.iter().map(|r| r.job_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn best_matches_is_a_prefix_of_the_full_ranking() {
        let engine = skills_only_engine();
        let jobs = vec![
            job("a", &["python", "aws", "docker", "kafka"]),
            job("b", &["python", "aws"]),
            job("c", &["python"]),
            job("d", &["kafka"]),
        ];

        let full = engine.match_against_set(&resume(), &jobs, 0.0);
        for n in 0..=jobs.len() {
            let top = engine.best_matches(&resume(), &jobs, n);
            assert_eq!(top.as_slice(), &full[..n]);
        }
    }

    #[test]
    fn exposed_scores_are_rounded_to_two_decimals() {
        let engine = skills_only_engine();
        let jobs = vec![job("j", &["python", "aws", "docker"])]; // 2/3 coverage

        let results = engine.match_against_set(&resume(), &jobs, 0.0);

        assert_eq!(results[0].overall_score, 66.67);
        assert_eq!(
            results[0].matched_skills,
            vec!["aws".to_string(), "python".to_string()]
        );
    }

    #[test]
    fn empty_skill_jobs_round_exactly() {
        let engine = MatchEngine::new(
            MatcherContext::empty(),
            MatchConfig {
                weights: SignalWeights {
                    lexical: 0.2,
                    statistical: 0.25,
                    semantic: 0.25,
                    skills: 0.3,
                },
                use_semantic_matching: false,
                threshold: 0.0,
                top_n: None,
            },
        );
        let jobs = vec![job("empty", &[])];

        let results = engine.match_against_set(&resume(), &jobs, 0.0);
        assert_eq!(results[0].overall_score, 30.0);
    }

    #[test]
    fn one_failing_job_does_not_abort_the_batch() {
        struct PoisonRecognizer;
        impl EntityRecognizer for PoisonRecognizer {
            fn name(&self) -> &'static str {
                "poison"
            }
            fn version(&self) -> &str {
                "test"
            }
            fn extract(&self, text: &str) -> Result<Vec<Entity>, NerError> {
                if text.contains("poison") {
                    Err(NerError("recognizer crashed".into()))
                } else {
                    Ok(vec![])
                }
            }
        }

        let engine = MatchEngine::new(
            MatcherContext::empty().with_recognizer(Arc::new(PoisonRecognizer)),
            MatchConfig {
                threshold: 0.0,
                use_semantic_matching: false,
                ..Default::default()
            },
        );

        let mut poisoned = job("bad", &["python"]);
        poisoned.description = "poison pill".into();
        let jobs = vec![job("a", &["python"]), poisoned, job("b", &["aws"])];

        let results = engine.match_against_set(&resume(), &jobs, 0.0);

        let ids: Vec<&str> = results.iter().map(|r| r.job_id.as_str()).collect();
        assert!(ids.contains(&"a"));
        assert!(ids.contains(&"b"));
        assert!(!ids.contains(&"bad"));
    }

    #[test]
    fn empty_job_list_yields_empty_results() {
        let engine = skills_only_engine();
        assert!(engine.match_against_set(&resume(), &[], 0.0).is_empty());
        assert!(engine.best_matches(&resume(), &[], 5).is_empty());
    }
}
