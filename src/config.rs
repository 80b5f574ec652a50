use serde::{Deserialize, Serialize};

use crate::matching::weights::SignalWeights;

/// Engine configuration. All fields have conservative defaults; callers
/// usually deserialize this from their own config layer or read it from
/// `NM_*` environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(default)]
    pub weights: SignalWeights,
    /// Master switch for the semantic signal; off means the signal is a
    /// constant 0.0 regardless of encoder availability.
    #[serde(default = "default_use_semantic")]
    pub use_semantic_matching: bool,
    /// Inclusion threshold on the fused 0-100 score.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Default result-list cap for best-match queries.
    #[serde(default)]
    pub top_n: Option<usize>,
}

fn default_use_semantic() -> bool {
    true
}

fn default_threshold() -> f64 {
    70.0
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: SignalWeights::default(),
            use_semantic_matching: true,
            threshold: 70.0,
            top_n: None,
        }
    }
}

impl MatchConfig {
    /// Read configuration overrides from the environment, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            weights: SignalWeights {
                lexical: env_f64("NM_WEIGHT_LEXICAL", defaults.weights.lexical),
                statistical: env_f64("NM_WEIGHT_STATISTICAL", defaults.weights.statistical),
                semantic: env_f64("NM_WEIGHT_SEMANTIC", defaults.weights.semantic),
                skills: env_f64("NM_WEIGHT_SKILLS", defaults.weights.skills),
            },
            use_semantic_matching: std::env::var("NM_USE_SEMANTIC")
                .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.use_semantic_matching),
            threshold: env_f64("NM_THRESHOLD", defaults.threshold),
            top_n: std::env::var("NM_TOP_N").ok().and_then(|s| s.parse().ok()),
        }
    }
}

fn env_f64(key: &str, fallback: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(fallback)
}
