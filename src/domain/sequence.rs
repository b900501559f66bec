// ============================================================
// Layer 3 — Encoded Sequences
// ============================================================
// The classifier only ever sees fixed-length rows of integer
// ids. Every position holds either a vocabulary id or the
// sentinel, which marks unknown tokens and padding alike.

use serde::{Deserialize, Serialize};

use crate::domain::document::Label;

/// Marker for an unknown token or a padding position.
pub const SENTINEL: i64 = -1;

/// Default number of positions in an encoded sequence.
pub const DEFAULT_MAX_LEN: usize = 40;

/// A fixed-length row of token ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedSequence(Vec<i64>);

impl EncodedSequence {
    pub fn new(ids: Vec<i64>) -> Self {
        Self(ids)
    }

    pub fn ids(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of positions holding a known vocabulary id
    pub fn known_tokens(&self) -> usize {
        self.0.iter().filter(|&&id| id != SENTINEL).count()
    }
}

/// One training example: an encoded document and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedSample {
    pub sequence: EncodedSequence,
    pub label: Label,
}

impl EncodedSample {
    pub fn new(sequence: EncodedSequence, label: Label) -> Self {
        Self { sequence, label }
    }
}
