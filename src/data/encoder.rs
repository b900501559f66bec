// ============================================================
// Layer 4 — Sequence Encoder
// ============================================================
// Maps text to a fixed-length row of vocabulary ids.
//
//   1. Normalise and split on single spaces
//   2. token → id, unknown tokens → SENTINEL (-1)
//   3. Shorter than max_len → pad the tail with SENTINEL
//   4. Longer than max_len  → keep the first max_len ids
//
// Example with max_len = 5 and vocabulary {hello:0, world:1}:
//   "Hello World!" → [0, 1, -1, -1, -1]

use crate::data::preprocessor::Preprocessor;
use crate::data::vocabulary::{tokenize, Vocabulary};
use crate::domain::document::Document;
use crate::domain::sequence::{EncodedSample, EncodedSequence, DEFAULT_MAX_LEN, SENTINEL};

#[derive(Debug, Clone)]
pub struct SequenceEncoder {
    max_len: usize,
}

impl SequenceEncoder {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    /// Map every token of `text` to its id, without padding or truncation.
    pub fn encode_unbounded(&self, text: &str, vocab: &Vocabulary) -> Vec<i64> {
        let normalized = Preprocessor::new().normalize(text);
        tokenize(&normalized)
            .map(|token| vocab.get(token).unwrap_or(SENTINEL))
            .collect()
    }

    /// Encode `text` to exactly `max_len` ids.
    pub fn encode(&self, text: &str, vocab: &Vocabulary) -> EncodedSequence {
        let mut ids = self.encode_unbounded(text, vocab);
        // truncate is a no-op for short rows and resize a no-op for long ones
        ids.truncate(self.max_len);
        ids.resize(self.max_len, SENTINEL);
        EncodedSequence::new(ids)
    }

    /// Encode every document into a labelled training sample.
    pub fn encode_all(&self, docs: &[Document], vocab: &Vocabulary) -> Vec<EncodedSample> {
        docs.iter()
            .map(|d| EncodedSample::new(self.encode(&d.text, vocab), d.label))
            .collect()
    }
}

impl Default for SequenceEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEN)
    }
}
