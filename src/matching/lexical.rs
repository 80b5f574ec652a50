use std::collections::HashSet;

use crate::stopwords::is_stop_word;

fn keyword_set(normalized_text: &str) -> HashSet<&str> {
    normalized_text
        .split_whitespace()
        .filter(|t| t.len() > 2 && !is_stop_word(t))
        .collect()
}

/// Jaccard overlap between the keyword sets of two normalized texts.
///
/// Stop words and tokens of length <= 2 carry no signal and are dropped
/// first. An empty job keyword set scores 0.0 — there is nothing to match
/// against.
pub fn lexical_overlap(resume_normalized: &str, job_normalized: &str) -> f64 {
    let resume_keywords = keyword_set(resume_normalized);
    let job_keywords = keyword_set(job_normalized);

    if job_keywords.is_empty() {
        return 0.0;
    }

    let intersection = resume_keywords.intersection(&job_keywords).count();
    let union = resume_keywords.union(&job_keywords).count();

    intersection as f64 / union as f64
}
