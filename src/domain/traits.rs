// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer is written against these traits only:
//   - DatasetSource  → JsonFileLoader, HttpDatasetLoader
//   - Classifier     → BurnClassifier (any numeric backend fits)
//   - ModelStore     → CheckpointManager (the named model slot)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::data::vocabulary::Vocabulary;
use crate::domain::document::Document;
use crate::domain::sequence::{EncodedSample, EncodedSequence};
use crate::domain::training::{FitPlan, FitReport};

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Anything that can produce the labelled training corpus.
pub trait DatasetSource {
    /// Where the documents come from, for logs and error messages
    fn location(&self) -> &str;

    /// Load every document. Failures are fatal to the calling workflow
    /// and surface as `CheckerError::DatasetLoad`.
    fn load_all(&self) -> Result<Vec<Document>>;
}

// ─── Classifier ───────────────────────────────────────────────────────────────
/// A binary classifier over fixed-length encoded sequences.
pub trait Classifier {
    /// Length every input sequence must have
    fn input_len(&self) -> usize;

    /// Train in place on `samples` following `plan`.
    fn fit(&mut self, samples: Vec<EncodedSample>, plan: &FitPlan) -> Result<FitReport>;

    /// Probability that each sequence is AI-generated, in batch order.
    fn predict(&self, batch: &[EncodedSequence]) -> Result<Vec<f32>>;
}

// ─── ModelStore ───────────────────────────────────────────────────────────────
/// A single named slot holding the latest trained model and the
/// vocabulary it was trained with. Saving overwrites the slot.
pub trait ModelStore {
    type Model: Classifier;

    /// Fixed identifier of the slot
    fn name(&self) -> &str;

    /// Construct an untrained model accepting sequences of `input_len`
    fn create(&self, input_len: usize) -> Result<Self::Model>;

    /// Load the persisted model. Fails with `CheckerError::ModelLoad`.
    fn load(&self) -> Result<Self::Model>;

    /// Load the vocabulary persisted with the model.
    fn load_vocabulary(&self) -> Result<Vocabulary>;

    /// Persist model and vocabulary. Fails with `CheckerError::ModelPersist`.
    fn save(&self, model: &Self::Model, vocabulary: &Vocabulary) -> Result<()>;
}
