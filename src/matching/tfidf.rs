use std::collections::HashMap;

use crate::error::SignalError;
use crate::stopwords::is_stop_word;

/// Vocabulary cap, counted over the pair corpus.
pub const MAX_VOCABULARY: usize = 1000;

/// TF-IDF vectorizer fit on exactly one (resume, job) pair.
///
/// Call-scoped by construction: the vocabulary is fit fresh from the two
/// compared documents, so no term statistics can leak between unrelated
/// comparisons. The flip side is inherited knowingly — scores are not
/// comparable across pairs with very different vocabularies.
pub struct PairVectorizer {
    max_features: usize,
}

impl PairVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features: max_features.max(1),
        }
    }

    /// Unigrams (length >= 2, stop words removed) plus bigrams over the
    /// surviving unigram sequence.
    fn extract_terms(normalized_text: &str) -> Vec<String> {
        let unigrams: Vec<&str> = normalized_text
            .split_whitespace()
            .filter(|t| t.len() >= 2 && !is_stop_word(t))
            .collect();

        let mut terms: Vec<String> = unigrams.iter().map(|t| t.to_string()).collect();
        for pair in unigrams.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }
        terms
    }

    fn term_counts(terms: &[String]) -> HashMap<&str, f64> {
        let mut counts: HashMap<&str, f64> = HashMap::new();
        for term in terms {
            *counts.entry(term.as_str()).or_insert(0.0) += 1.0;
        }
        counts
    }

    /// Cosine similarity between the TF-IDF vectors of the two documents.
    ///
    /// Smoothed IDF over the two-document corpus, L2-normalized vectors.
    /// An empty vocabulary (both documents reduced to nothing by the
    /// stop-word and length filters) is an error for the fusion layer to
    /// absorb; a single empty side scores 0.0.
    pub fn similarity(&self, resume_normalized: &str, job_normalized: &str) -> Result<f64, SignalError> {
        let resume_terms = Self::extract_terms(resume_normalized);
        let job_terms = Self::extract_terms(job_normalized);

        let resume_counts = Self::term_counts(&resume_terms);
        let job_counts = Self::term_counts(&job_terms);

        let mut corpus: HashMap<&str, f64> = HashMap::new();
        for (term, count) in resume_counts.iter().chain(job_counts.iter()) {
            *corpus.entry(*term).or_insert(0.0) += *count;
        }
        if corpus.is_empty() {
            return Err(SignalError::EmptyVocabulary);
        }

        // Deterministic vocabulary selection: corpus frequency descending,
        // then lexicographic.
        let mut vocabulary: Vec<&str> = corpus.keys().copied().collect();
        vocabulary.sort_by(|a, b| {
            corpus[b]
                .partial_cmp(&corpus[a])
                .unwrap()
                .then_with(|| a.cmp(b))
        });
        vocabulary.truncate(self.max_features);

        let n_docs = 2.0_f64;
        let mut resume_vec = Vec::with_capacity(vocabulary.len());
        let mut job_vec = Vec::with_capacity(vocabulary.len());
        for term in &vocabulary {
            let tf_resume = resume_counts.get(term).copied().unwrap_or(0.0);
            let tf_job = job_counts.get(term).copied().unwrap_or(0.0);
            let df = (tf_resume > 0.0) as u32 + (tf_job > 0.0) as u32;
            let idf = ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0;
            resume_vec.push(tf_resume * idf);
            job_vec.push(tf_job * idf);
        }

        let norm_resume = l2_norm(&resume_vec);
        let norm_job = l2_norm(&job_vec);
        if norm_resume == 0.0 || norm_job == 0.0 {
            return Ok(0.0);
        }

        let dot: f64 = resume_vec
            .iter()
            .zip(job_vec.iter())
            .map(|(a, b)| a * b)
            .sum();

        Ok((dot / (norm_resume * norm_job)).min(1.0))
    }
}

impl Default for PairVectorizer {
    fn default() -> Self {
        Self::new(MAX_VOCABULARY)
    }
}

fn l2_norm(vector: &[f64]) -> f64 {
    vector.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// The statistical signal: per-pair TF-IDF cosine similarity.
pub fn term_weighted_similarity(
    resume_normalized: &str,
    job_normalized: &str,
) -> Result<f64, SignalError> {
    PairVectorizer::default().similarity(resume_normalized, job_normalized)
}
