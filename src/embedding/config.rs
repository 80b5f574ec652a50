use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Encoder implementation name ("hash").
    pub name: String,
    /// Embedding dimension.
    pub dimension: usize,
    /// When true, a failing or unknown encoder is fatal at initialization.
    /// When false, initialization falls back to the deterministic hash
    /// encoder and semantic matching degrades instead of aborting.
    pub required: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            name: "hash".into(),
            dimension: 384,
            required: false,
        }
    }
}

impl EncoderConfig {
    /// Read the encoder configuration from `NM_ENCODER*` environment
    /// variables, falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: std::env::var("NM_ENCODER").unwrap_or(defaults.name),
            dimension: std::env::var("NM_ENCODER_DIMENSION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.dimension),
            required: std::env::var("NM_ENCODER_REQUIRED")
                .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.required),
        }
    }
}
