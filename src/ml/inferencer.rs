// ============================================================
// Layer 5 — Inferencer
// ============================================================
use anyhow::{anyhow, Result};
use burn::prelude::*;

use crate::data::batcher::ClassifierBatcher;
use crate::domain::sequence::EncodedSequence;
use crate::ml::model::BowClassifier;

pub struct Inferencer<B: Backend> {
    model:   BowClassifier<B>,
    batcher: ClassifierBatcher<B>,
}

impl<B: Backend> Inferencer<B> {
    pub fn new(model: BowClassifier<B>, device: B::Device) -> Self {
        Self { model, batcher: ClassifierBatcher::new(device) }
    }

    /// AI probability for each sequence, in input order.
    pub fn predict(&self, batch: &[EncodedSequence]) -> Result<Vec<f32>> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let inputs = self.batcher.inputs(batch);
        let probs: Vec<f32> = self
            .model
            .forward_probabilities(inputs)
            .into_data()
            .convert::<f32>()
            .to_vec::<f32>()
            .map_err(|e| anyhow!("cannot read predictions: {e:?}"))?;

        tracing::debug!("Predicted {} sequences: {:?}", probs.len(), probs);
        Ok(probs)
    }
}
