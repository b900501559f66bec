// ============================================================
// Layer 2 — Session
// ============================================================
// The vocabulary and model of the most recent training run,
// travelling together. Created by TrainUseCase, restored from
// a ModelStore, and read by the inference workflow.

use anyhow::{ensure, Result};

use crate::application::check_use_case::classify;
use crate::data::{encoder::SequenceEncoder, vocabulary::Vocabulary};
use crate::domain::traits::{Classifier, ModelStore};
use crate::domain::verdict::Classification;

pub struct Session<M> {
    vocabulary: Vocabulary,
    model:      M,
    encoder:    SequenceEncoder,
}

impl<M: Classifier> Session<M> {
    pub fn new(vocabulary: Vocabulary, model: M) -> Self {
        let encoder = SequenceEncoder::new(model.input_len());
        Self { vocabulary, model, encoder }
    }

    /// Restore model and vocabulary from the store's slot.
    pub fn restore<S>(store: &S, max_len: usize) -> Result<Self>
    where
        S: ModelStore<Model = M>,
    {
        let model = store.load()?;
        ensure!(
            model.input_len() == max_len,
            "persisted model '{}' expects sequences of length {}, not {}",
            store.name(),
            model.input_len(),
            max_len
        );
        let vocabulary = store.load_vocabulary()?;
        Ok(Self::new(vocabulary, model))
    }

    /// Run the inference workflow on `text`.
    pub fn classify(&self, text: &str) -> Result<Classification> {
        classify(&self.model, &self.vocabulary, &self.encoder, text)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}
