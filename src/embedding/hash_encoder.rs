use std::hash::{Hash, Hasher};

use siphasher::sip::SipHasher13;

use super::{Embedding, SentenceEncoder};
use crate::error::SignalError;
use crate::normalize::normalize_text;

// Fixed seeds keep the hash deterministic across processes and Rust
// versions. Changing either value changes every embedding — bump the
// encoder version alongside.
const HASH_SEED_K0: u64 = 0x9e37_79b9_7f4a_7c15;
const HASH_SEED_K1: u64 = 0x517c_c1b7_2722_0a95;

const BIGRAM_WEIGHT: f32 = 0.5;

/// Feature-hashing sentence encoder.
///
/// A deterministic, training-free stand-in for a learned sentence model:
/// unigrams and (half-weighted) bigrams of the normalized text are sign-
/// hashed into a fixed-dimension vector, which is then L2-normalized.
/// Shared vocabulary between two texts lands in shared dimensions, so
/// cosine similarity tracks surface-level topical overlap.
#[derive(Debug)]
pub struct HashSentenceEncoder {
    dimension: usize,
}

impl HashSentenceEncoder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    fn hash_token(&self, token: &str) -> usize {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.dimension
    }

    fn accumulate(&self, vector: &mut [f32], token: &str, weight: f32) {
        let idx = self.hash_token(token);
        // Sign hashing: even hash of the marker token adds, odd subtracts.
        let sign = if self.hash_token(&format!("{token}_sign")) % 2 == 0 {
            1.0
        } else {
            -1.0
        };
        vector[idx] += sign * weight;
    }
}

impl SentenceEncoder for HashSentenceEncoder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn version(&self) -> &str {
        "v1"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn encode(&self, text: &str) -> Result<Embedding, SignalError> {
        let normalized = normalize_text(text);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        let mut vector = vec![0.0f32; self.dimension];
        for token in &tokens {
            self.accumulate(&mut vector, token, 1.0);
        }
        for pair in tokens.windows(2) {
            self.accumulate(&mut vector, &format!("{} {}", pair[0], pair[1]), BIGRAM_WEIGHT);
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        Ok(Embedding::new(vector))
    }
}
