// ============================================================
// Layer 4 — Classifier Batcher
// ============================================================
// Stacks encoded samples into tensors for one forward pass.
//
//   Input:  N samples, each a sequence of length L
//   Output: inputs  [N, L] float — raw ids, sentinels included
//           targets [N, 1] int   — 0 = human, 1 = AI
//
// The ids are fed to the dense layer as plain numbers; there is
// no embedding lookup, so the sentinel (-1) is just another value.
//
// Reference: Burn Book §4 (Batcher)

use burn::{prelude::*, tensor::TensorData};

use crate::domain::sequence::{EncodedSample, EncodedSequence};

/// A batch ready for the model forward pass.
#[derive(Debug, Clone)]
pub struct ClassifierBatch<B: Backend> {
    /// Shape: [batch_size, seq_len]
    pub inputs: Tensor<B, 2>,

    /// Shape: [batch_size, 1]
    pub targets: Tensor<B, 2, Int>,
}

/// Holds the target device so tensors are created on the right CPU/GPU.
#[derive(Clone, Debug)]
pub struct ClassifierBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> ClassifierBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    /// Stack sequences into a [batch, seq_len] float tensor.
    /// All sequences must share one length.
    pub fn inputs<'a>(&self, sequences: impl IntoIterator<Item = &'a EncodedSequence>) -> Tensor<B, 2> {
        let mut rows = 0usize;
        let mut seq_len = 0usize;
        let mut flat: Vec<f32> = Vec::new();

        for seq in sequences {
            seq_len = seq.len();
            flat.extend(seq.ids().iter().map(|&id| id as f32));
            rows += 1;
        }

        Tensor::<B, 2>::from_data(TensorData::new(flat, [rows, seq_len]), &self.device)
    }

    /// Convert labelled samples into a ClassifierBatch.
    pub fn batch(&self, items: &[EncodedSample]) -> ClassifierBatch<B> {
        let inputs = self.inputs(items.iter().map(|s| &s.sequence));

        let labels: Vec<i64> = items.iter().map(|s| s.label.target()).collect();
        let targets = Tensor::<B, 2, Int>::from_data(
            TensorData::new(labels, [items.len(), 1]),
            &self.device,
        );

        ClassifierBatch { inputs, targets }
    }
}
