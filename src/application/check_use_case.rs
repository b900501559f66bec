// ============================================================
// Layer 2 — Check Use Case (Inference Workflow)
// ============================================================
// Answers "was this written by AI?":
//
//   Step 1: Reject blank input            (before any I/O)
//   Step 2: Restore the persisted session (Layer 6)
//           └─ on failure: run TrainUseCase and use its session
//   Step 3: Encode with the session's vocabulary (Layer 4)
//   Step 4: Predict on a one-document batch     (Layer 5)
//   Step 5: Threshold into a verdict            (Layer 3)

use anyhow::{anyhow, Result};

use crate::application::session::Session;
use crate::application::train_use_case::{TrainConfig, TrainUseCase};
use crate::data::{encoder::SequenceEncoder, vocabulary::Vocabulary};
use crate::domain::error::CheckerError;
use crate::domain::traits::{Classifier, DatasetSource, ModelStore};
use crate::domain::verdict::Classification;

/// Classify a single text with a trained model and the vocabulary
/// from the training run that produced it. No retries.
pub fn classify<M: Classifier + ?Sized>(
    model:      &M,
    vocabulary: &Vocabulary,
    encoder:    &SequenceEncoder,
    text:       &str,
) -> Result<Classification> {
    let sequence = encoder.encode(text, vocabulary);
    tracing::debug!(
        "Encoded input: {} of {} positions known",
        sequence.known_tokens(),
        sequence.len()
    );

    let probs = model.predict(std::slice::from_ref(&sequence))?;
    let ai_probability = probs
        .first()
        .copied()
        .ok_or_else(|| anyhow!("classifier returned no prediction"))?;

    let result = Classification::from_ai_probability(ai_probability)?;
    tracing::info!(
        "AI probability {:.4} → verdict {}",
        result.ai_probability,
        result.verdict
    );
    Ok(result)
}

pub struct CheckUseCase<'a, S: ?Sized, M> {
    config: &'a TrainConfig,
    source: &'a S,
    store:  &'a M,
}

impl<'a, S, M> CheckUseCase<'a, S, M>
where
    S: DatasetSource + ?Sized,
    M: ModelStore,
{
    pub fn new(config: &'a TrainConfig, source: &'a S, store: &'a M) -> Self {
        Self { config, source, store }
    }

    pub fn run(&self, text: &str) -> Result<Classification> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CheckerError::InputValidation.into());
        }

        let session = match Session::restore(self.store, self.config.max_len) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Content checker failed to load, refining: {e:#}");
                TrainUseCase::new(self.config, self.source, self.store)
                    .execute()?
                    .session
            }
        };

        session.classify(text)
    }
}
