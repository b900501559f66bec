// ============================================================
// Layer 4 — Vocabulary Builder
// ============================================================
// Assigns every distinct token in the training corpus an id,
// in first-seen order: document order, then token order.
//
//   ["hello world", "world peace"] → hello:0 world:1 peace:2
//
// The vocabulary is rebuilt from scratch on every training run
// and is closed: tokens seen only at inference time have no id.
//
// On disk it is a JSON array of tokens; the index is the id.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::preprocessor::Preprocessor;
use crate::domain::document::Document;

/// Split normalised text into tokens on single spaces.
/// Consecutive spaces produce empty fragments, which are not tokens.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|t| !t.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    tokens: Vec<String>,
    ids: HashMap<String, i64>,
}

impl Vocabulary {
    /// Build a vocabulary from a corpus. Text is normalised first, so
    /// raw and already-normalised documents give the same result.
    pub fn build(docs: &[Document]) -> Self {
        let preprocessor = Preprocessor::new();
        let mut vocab = Self::default();

        for doc in docs {
            let text = preprocessor.normalize(&doc.text);
            for token in tokenize(&text) {
                vocab.insert(token);
            }
        }

        tracing::debug!("Built vocabulary of {} tokens from {} documents", vocab.len(), docs.len());
        vocab
    }

    /// Id of `token`, or None if it was never seen during training
    pub fn get(&self, token: &str) -> Option<i64> {
        self.ids.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in id order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    fn insert(&mut self, token: &str) {
        if !self.ids.contains_key(token) {
            let id = self.tokens.len() as i64;
            self.ids.insert(token.to_string(), id);
            self.tokens.push(token.to_string());
        }
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(tokens: Vec<String>) -> Self {
        let mut vocab = Self::default();
        for token in &tokens {
            vocab.insert(token);
        }
        vocab
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocab: Vocabulary) -> Self {
        vocab.tokens
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::Label;

    fn docs(texts: &[&str]) -> Vec<Document> {
        texts.iter().map(|t| Document::new(*t, Label::Human)).collect()
    }

    #[test]
    fn test_hello_world_scenario() {
        let v = Vocabulary::build(&docs(&["Hello World!"]));
        assert_eq!(v.get("hello"), Some(0));
        assert_eq!(v.get("world"), Some(1));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_first_seen_order_across_documents() {
        let v = Vocabulary::build(&docs(&["the cat sat", "the dog sat down"]));
        assert_eq!(v.tokens(), ["the", "cat", "sat", "dog", "down"]);
    }

    #[test]
    fn test_ids_are_unique_and_dense() {
        let v = Vocabulary::build(&docs(&["a b c a", "c d e b", "f a"]));
        let mut ids: Vec<i64> = v.tokens().iter().map(|t| v.get(t).unwrap()).collect();
        ids.sort();
        assert_eq!(ids, (0..v.len() as i64).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_corpus_gives_empty_vocabulary() {
        let v = Vocabulary::build(&[]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_skips_empty_fragments() {
        let v = Vocabulary::build(&docs(&["  spaced   out  ", ""]));
        assert_eq!(v.tokens(), ["spaced", "out"]);
        assert_eq!(v.get(""), None);
    }

    #[test]
    fn test_json_round_trip_keeps_ids() {
        let v = Vocabulary::build(&docs(&["one two three"]));
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"["one","two","three"]"#);
        let back: Vocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get("three"), Some(2));
    }
}
