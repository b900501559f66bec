// ============================================================
// Layer 3 — Classification Result
// ============================================================
// Turns the classifier's raw AI probability into something a
// person can read: two percentages and a verdict sentence.
//
// Threshold: ai_probability >= 0.5 → AI. A tie goes to AI.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::CheckerError;

/// Probability at or above which text is judged AI-generated
pub const AI_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Ai,
    Human,
}

impl Verdict {
    pub fn from_ai_probability(ai_probability: f32) -> Self {
        if ai_probability >= AI_THRESHOLD {
            Verdict::Ai
        } else {
            Verdict::Human
        }
    }

    /// Completes the sentence "This content was ..."
    pub fn summary(self) -> &'static str {
        match self {
            Verdict::Ai => "generated by AI, and not composed by a human.",
            Verdict::Human => "composed by a human, and not generated by AI.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ai => f.write_str("AI"),
            Verdict::Human => f.write_str("HUMAN"),
        }
    }
}

/// Outcome of classifying a single piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub ai_probability: f32,
    pub human_probability: f32,
    pub verdict: Verdict,
}

impl Classification {
    /// Build a classification from the model's probability that the
    /// text is AI-generated. Rejects values that are not a probability.
    pub fn from_ai_probability(ai_probability: f32) -> Result<Self, CheckerError> {
        if !ai_probability.is_finite() || !(0.0..=1.0).contains(&ai_probability) {
            return Err(CheckerError::InvalidProbability(ai_probability));
        }
        Ok(Self {
            ai_probability,
            human_probability: 1.0 - ai_probability,
            verdict: Verdict::from_ai_probability(ai_probability),
        })
    }

    /// AI involvement as a percentage with two decimals, e.g. "73.12"
    pub fn ai_percentage(&self) -> String {
        format!("{:.2}", self.ai_probability * 100.0)
    }

    /// Human involvement as a percentage with two decimals
    pub fn human_percentage(&self) -> String {
        format!("{:.2}", self.human_probability * 100.0)
    }

    pub fn summary(&self) -> String {
        format!("This content was {}", self.verdict.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_goes_to_ai() {
        let c = Classification::from_ai_probability(0.5).unwrap();
        assert_eq!(c.verdict, Verdict::Ai);
    }

    #[test]
    fn test_below_threshold_is_human() {
        let c = Classification::from_ai_probability(0.4999).unwrap();
        assert_eq!(c.verdict, Verdict::Human);
    }

    #[test]
    fn test_human_probability_is_exact_complement() {
        for p in [0.0f32, 0.1, 0.25, 0.333, 0.5, 0.73, 0.999, 1.0] {
            let c = Classification::from_ai_probability(p).unwrap();
            assert_eq!(c.human_probability, 1.0 - p);
        }
    }

    #[test]
    fn test_rejects_invalid_probability() {
        for p in [f32::NAN, -0.1, 1.5, f32::INFINITY] {
            assert!(matches!(
                Classification::from_ai_probability(p),
                Err(CheckerError::InvalidProbability(_))
            ));
        }
    }

    #[test]
    fn test_percentages_and_summary() {
        let c = Classification::from_ai_probability(0.25).unwrap();
        assert_eq!(c.ai_percentage(), "25.00");
        assert_eq!(c.human_percentage(), "75.00");
        assert_eq!(
            c.summary(),
            "This content was composed by a human, and not generated by AI."
        );
    }
}
