// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// The single named slot that holds the latest trained model.
//
// Files written per slot (default name "ridgpt"):
//   checkpoints/
//     ridgpt.mpk.gz       ← model weights (MessagePack + gzip)
//     ridgpt.config.json  ← architecture, needed to rebuild the
//                           layers before loading the weights
//     ridgpt.vocab.json   ← vocabulary of the training run that
//                           produced the weights
//
// Saving overwrites all three. Readers and writers do not
// coordinate; two processes saving at once race on the files.
//
// Weights use full precision so a reloaded model predicts
// exactly what the in-memory model did.
//
// Reference: Burn Book §5 (Records and Checkpointing)

use std::{fs, path::PathBuf};

use anyhow::Result;
use burn::{
    prelude::*,
    record::{FullPrecisionSettings, NamedMpkGzFileRecorder, Recorder},
};

use crate::data::vocabulary::Vocabulary;
use crate::domain::error::CheckerError;
use crate::domain::traits::ModelStore;
use crate::ml::classifier::BurnClassifier;
use crate::ml::model::{BowClassifierConfig, DEFAULT_HIDDEN_UNITS};
use crate::ml::{Device, TrainBackend};

/// Fixed identifier of the persisted model
pub const DEFAULT_MODEL_NAME: &str = "ridgpt";

type ModelRecorder = NamedMpkGzFileRecorder<FullPrecisionSettings>;

pub struct CheckpointManager {
    dir:          PathBuf,
    name:         String,
    hidden_units: usize,
    device:       Device,
}

impl CheckpointManager {
    /// The directory is created lazily on the first save.
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir:          dir.into(),
            name:         name.into(),
            hidden_units: DEFAULT_HIDDEN_UNITS,
            device:       Device::default(),
        }
    }

    /// Hidden layer width used when a fresh model is created
    pub fn with_hidden_units(mut self, hidden_units: usize) -> Self {
        self.hidden_units = hidden_units;
        self
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Weights path without extension — the recorder appends `.mpk.gz`
    fn weights_stem(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    pub fn weights_file(&self) -> PathBuf {
        self.dir.join(format!("{}.mpk.gz", self.name))
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.join(format!("{}.config.json", self.name))
    }

    pub fn vocabulary_file(&self) -> PathBuf {
        self.dir.join(format!("{}.vocab.json", self.name))
    }
}

impl ModelStore for CheckpointManager {
    type Model = BurnClassifier;

    fn name(&self) -> &str {
        &self.name
    }

    fn create(&self, input_len: usize) -> Result<BurnClassifier> {
        let config = BowClassifierConfig::new(input_len).with_hidden_units(self.hidden_units);
        config.validate()?;
        tracing::info!(
            "Creating fresh classifier: {} inputs → {} hidden → 1",
            config.input_len,
            config.hidden_units
        );
        Ok(BurnClassifier::new(config, self.device.clone()))
    }

    fn load(&self) -> Result<BurnClassifier> {
        let fail = |reason: String| CheckerError::model_load(&self.name, reason);

        let config_path = self.config_file();
        let config = BowClassifierConfig::load(&config_path)
            .map_err(|e| fail(format!("cannot read '{}': {e}", config_path.display())))?;
        config.validate().map_err(|e| fail(format!("{e:#}")))?;

        let record = ModelRecorder::new()
            .load(self.weights_stem(), &self.device)
            .map_err(|e| fail(format!("cannot read '{}': {e}", self.weights_file().display())))?;

        let model = config.init::<TrainBackend>(&self.device).load_record(record);
        tracing::info!("Loaded model '{}' from '{}'", self.name, self.dir.display());

        Ok(BurnClassifier::from_parts(model, config, self.device.clone()))
    }

    fn load_vocabulary(&self) -> Result<Vocabulary> {
        let fail = |reason: String| CheckerError::model_load(&self.name, reason);
        let path = self.vocabulary_file();

        let json = fs::read_to_string(&path)
            .map_err(|e| fail(format!("cannot read '{}': {e}", path.display())))?;
        let vocab: Vocabulary = serde_json::from_str(&json)
            .map_err(|e| fail(format!("corrupt vocabulary '{}': {e}", path.display())))?;

        tracing::debug!("Loaded vocabulary of {} tokens", vocab.len());
        Ok(vocab)
    }

    fn save(&self, model: &BurnClassifier, vocabulary: &Vocabulary) -> Result<()> {
        let fail = |reason: String| CheckerError::model_persist(&self.name, reason);

        fs::create_dir_all(&self.dir)
            .map_err(|e| fail(format!("cannot create '{}': {e}", self.dir.display())))?;

        ModelRecorder::new()
            .record(model.model().clone().into_record(), self.weights_stem())
            .map_err(|e| fail(format!("cannot write '{}': {e}", self.weights_file().display())))?;

        model
            .config()
            .save(self.config_file())
            .map_err(|e| fail(format!("cannot write '{}': {e}", self.config_file().display())))?;

        let json = serde_json::to_string(vocabulary.tokens()).map_err(|e| fail(e.to_string()))?;
        fs::write(self.vocabulary_file(), json)
            .map_err(|e| fail(format!("cannot write '{}': {e}", self.vocabulary_file().display())))?;

        tracing::info!("Saved model '{}' to '{}'", self.name, self.dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{Document, Label};
    use crate::domain::sequence::EncodedSequence;
    use crate::domain::traits::Classifier;

    fn is_model_load(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<CheckerError>(), Some(CheckerError::ModelLoad { .. }))
    }

    #[test]
    fn test_load_from_empty_dir_is_model_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointManager::new(dir.path(), DEFAULT_MODEL_NAME);
        assert!(is_model_load(&store.load().err().unwrap()));
        assert!(is_model_load(&store.load_vocabulary().unwrap_err()));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointManager::new(dir.path().join("nested"), "slot").with_hidden_units(8);

        let model = store.create(4).unwrap();
        let vocab = Vocabulary::build(&[Document::new("alpha beta", Label::Ai)]);
        store.save(&model, &vocab).unwrap();

        assert!(store.weights_file().exists());
        assert!(store.config_file().exists());
        assert!(store.vocabulary_file().exists());

        let loaded = store.load().unwrap();
        assert_eq!(loaded.config().hidden_units, 8);
        assert_eq!(store.load_vocabulary().unwrap(), vocab);

        let seq = [EncodedSequence::new(vec![0, 1, -1, -1])];
        assert_eq!(model.predict(&seq).unwrap(), loaded.predict(&seq).unwrap());
    }

    #[test]
    fn test_create_rejects_zero_widths() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointManager::new(dir.path(), DEFAULT_MODEL_NAME);
        assert!(store.create(0).is_err());
        assert!(store.with_hidden_units(0).create(40).is_err());
    }

    #[test]
    fn test_zero_width_config_on_disk_is_model_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointManager::new(dir.path(), DEFAULT_MODEL_NAME);
        BowClassifierConfig::new(0).save(store.config_file()).unwrap();
        assert!(is_model_load(&store.load().err().unwrap()));
    }

    #[test]
    fn test_corrupt_config_is_model_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointManager::new(dir.path(), DEFAULT_MODEL_NAME);
        fs::write(store.config_file(), "not json").unwrap();
        assert!(is_model_load(&store.load().err().unwrap()));
    }

    #[test]
    fn test_save_into_unwritable_location_is_persist_error() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file where the checkpoint directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let store = CheckpointManager::new(&blocker, DEFAULT_MODEL_NAME);
        let model = store.create(4).unwrap();
        let err = store.save(&model, &Vocabulary::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CheckerError>(),
            Some(CheckerError::ModelPersist { .. })
        ));
    }
}
