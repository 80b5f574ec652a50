use serde::{Deserialize, Serialize};

/// Crate-default weight set. Skills coverage dominates, the text signals
/// share the rest.
pub const DEFAULT_WEIGHTS: SignalWeights = SignalWeights {
    lexical: 0.20,
    statistical: 0.25,
    semantic: 0.25,
    skills: 0.30,
};

/// Per-signal fusion weights. Non-negative; they need not sum to 1 — the
/// fused score is a plain weighted sum capped at 100. Entries missing from
/// a deserialized configuration default to 0.25 each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    #[serde(default = "default_weight")]
    pub lexical: f64,
    #[serde(default = "default_weight")]
    pub statistical: f64,
    #[serde(default = "default_weight")]
    pub semantic: f64,
    #[serde(default = "default_weight")]
    pub skills: f64,
}

fn default_weight() -> f64 {
    0.25
}

impl Default for SignalWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl SignalWeights {
    pub fn sum(&self) -> f64 {
        self.lexical + self.statistical + self.semantic + self.skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn missing_entries_deserialize_to_a_quarter() {
        let weights: SignalWeights = serde_json::from_str(r#"{"skills": 0.5}"#).unwrap();
        assert_eq!(weights.skills, 0.5);
        assert_eq!(weights.lexical, 0.25);
        assert_eq!(weights.statistical, 0.25);
        assert_eq!(weights.semantic, 0.25);
    }
}
