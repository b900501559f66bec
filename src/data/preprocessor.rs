// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Normalises raw text before it is split into tokens.
//
// Normalisation steps (applied in order):
//   1. Lowercase (full Unicode lowercasing)
//   2. Drop every character outside [a-z0-9] and whitespace
//
// "Hello World!" → "hello world"
//
// Whitespace itself is kept untouched, so runs of spaces and
// newlines survive; the tokenizer decides what to do with them.
//
// Reference: Rust Book §8 (Strings in Rust)

use crate::domain::document::Document;

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Lowercase `text` and strip everything that is not an ASCII
    /// letter, digit, or whitespace. Pure and idempotent.
    pub fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
            .collect()
    }

    /// Normalise every document, keeping labels and order.
    pub fn normalize_all(&self, docs: &[Document]) -> Vec<Document> {
        docs.iter()
            .map(|d| Document::new(self.normalize(&d.text), d.label))
            .collect()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::Label;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let p = Preprocessor::new();
        assert_eq!(p.normalize("Hello World!"), "hello world");
    }

    #[test]
    fn test_keeps_digits_and_whitespace() {
        let p = Preprocessor::new();
        assert_eq!(p.normalize("GPT-4 wrote\tthis\nin 2024."), "gpt4 wrote\tthis\nin 2024");
    }

    #[test]
    fn test_drops_non_ascii_letters() {
        let p = Preprocessor::new();
        assert_eq!(p.normalize("Café déjà vu"), "caf dj vu");
    }

    #[test]
    fn test_is_idempotent() {
        let p = Preprocessor::new();
        for s in ["Hello, World!", "  MIXED case\n123 ", "", "ÄÖÜ ß?"] {
            let once = p.normalize(s);
            assert_eq!(p.normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_all_keeps_labels() {
        let p = Preprocessor::new();
        let docs = vec![
            Document::new("A!", Label::Ai),
            Document::new("B?", Label::Human),
        ];
        let out = p.normalize_all(&docs);
        assert_eq!(out[0], Document::new("a", Label::Ai));
        assert_eq!(out[1], Document::new("b", Label::Human));
    }
}
