// ============================================================
// Layer 2 — TrainUseCase (Training Workflow)
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load the labelled dataset      (Layer 4 - data)
//   Step 2: Normalise every document       (Layer 4 - data)
//   Step 3: Build a fresh vocabulary       (Layer 4 - data)
//   Step 4: Encode to fixed-length rows    (Layer 4 - data)
//   Step 5: Load the persisted model, or
//           create a fresh one on failure  (Layer 6 - infra)
//   Step 6: Fit with early stopping        (Layer 5 - ml)
//   Step 7: Persist model + vocabulary     (Layer 6 - infra)
//   Step 8: Append metrics to metrics.csv  (Layer 6 - infra)
//
// Steps 1 and 7 are fatal on failure. Step 5 is not: a missing
// or corrupt model (CheckerError::is_recoverable) just means
// training starts from scratch.
// Nothing in the store is touched before step 7.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::application::session::Session;
use crate::data::{
    encoder::SequenceEncoder, loader::DEFAULT_DATASET, preprocessor::Preprocessor,
    vocabulary::Vocabulary,
};
use crate::domain::error::CheckerError;
use crate::domain::sequence::DEFAULT_MAX_LEN;
use crate::domain::traits::{Classifier, DatasetSource, ModelStore};
use crate::domain::training::{FitPlan, FitReport, Monitor, StoppingPolicy};
use crate::infra::{checkpoint::DEFAULT_MODEL_NAME, metrics::MetricsLogger};
use crate::ml::model::DEFAULT_HIDDEN_UNITS;

// ─── Training Configuration ──────────────────────────────────────────────────
// All knobs for a training run. Defaults: 40-token rows,
// 16 hidden units,
// 20% validation, patience 5, at most 50 epochs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    /// File path or http(s) URL of the labelled dataset
    pub dataset:          String,
    pub checkpoint_dir:   String,
    /// Name of the persisted model slot
    pub model_name:       String,
    pub max_len:          usize,
    pub hidden_units:     usize,
    pub batch_size:       usize,
    pub max_epochs:       usize,
    pub patience:         usize,
    pub lr:               f64,
    pub validation_split: f64,
    pub seed:             u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            dataset:          DEFAULT_DATASET.to_string(),
            checkpoint_dir:   "checkpoints".to_string(),
            model_name:       DEFAULT_MODEL_NAME.to_string(),
            max_len:          DEFAULT_MAX_LEN,
            hidden_units:     DEFAULT_HIDDEN_UNITS,
            batch_size:       32,
            max_epochs:       50,
            patience:         5,
            lr:               1e-3,
            validation_split: 0.2,
            seed:             42,
        }
    }
}

impl TrainConfig {
    /// Reject knobs that cannot describe a trainable model.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.max_len > 0, "max_len must be at least 1");
        ensure!(self.hidden_units > 0, "hidden_units must be at least 1");
        ensure!(self.batch_size > 0, "batch_size must be at least 1");
        ensure!(
            (0.0..1.0).contains(&self.validation_split),
            "validation_split must be in [0, 1), got {}",
            self.validation_split
        );
        Ok(())
    }

    pub fn fit_plan(&self) -> FitPlan {
        FitPlan {
            validation_split: self.validation_split,
            batch_size:       self.batch_size,
            learning_rate:    self.lr,
            seed:             self.seed,
            stopping: StoppingPolicy {
                monitor:    Monitor::ValLoss,
                patience:   self.patience,
                min_delta:  0.0,
                max_epochs: self.max_epochs,
            },
        }
    }
}

/// What a training run leaves behind.
pub struct TrainOutcome<M> {
    /// Vocabulary and model of this run, ready for inference
    pub session: Session<M>,
    pub report:  FitReport,
    /// True when training continued from a persisted model
    pub resumed: bool,
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase<'a, S: ?Sized, M> {
    config: &'a TrainConfig,
    source: &'a S,
    store:  &'a M,
}

impl<'a, S, M> TrainUseCase<'a, S, M>
where
    S: DatasetSource + ?Sized,
    M: ModelStore,
{
    pub fn new(config: &'a TrainConfig, source: &'a S, store: &'a M) -> Self {
        Self { config, source, store }
    }

    /// Execute the full training pipeline end to end.
    pub fn execute(&self) -> Result<TrainOutcome<M::Model>> {
        let cfg = self.config;
        cfg.validate()?;

        // ── Step 1: Load the dataset ──────────────────────────────────────────
        tracing::info!("Loading dataset from '{}'", self.source.location());
        let raw_docs = self.source.load_all()?;
        if raw_docs.is_empty() {
            return Err(CheckerError::EmptyDataset(self.source.location().to_string()).into());
        }

        // ── Step 2: Normalise ─────────────────────────────────────────────────
        let docs = Preprocessor::new().normalize_all(&raw_docs);

        // ── Step 3: Vocabulary from this batch only ───────────────────────────
        let vocabulary = Vocabulary::build(&docs);
        tracing::info!("Vocabulary: {} tokens from {} documents", vocabulary.len(), docs.len());
        if vocabulary.is_empty() {
            tracing::warn!("Dataset has no tokens after normalisation; every row will be padding");
        }

        // ── Step 4: Encode ────────────────────────────────────────────────────
        let samples = SequenceEncoder::new(cfg.max_len).encode_all(&docs, &vocabulary);

        // ── Step 5: Load or create the model ──────────────────────────────────
        let (mut model, resumed) = match self.load_compatible() {
            Ok(model) => (model, true),
            Err(e) if e.downcast_ref::<CheckerError>().map_or(true, CheckerError::is_recoverable) => {
                tracing::warn!("Content checker failed to load, starting fresh: {e:#}");
                (self.store.create(cfg.max_len)?, false)
            }
            Err(e) => return Err(e),
        };

        // ── Step 6: Fit ───────────────────────────────────────────────────────
        let report = model.fit(samples, &cfg.fit_plan())?;
        if let Some(last) = report.last() {
            tracing::info!(
                "Fit finished after {} epochs (early stop: {}), train_loss={:.4}",
                last.epoch,
                report.stopped_early,
                last.train_loss
            );
        }

        // ── Step 7: Persist, overwriting the slot ─────────────────────────────
        self.store.save(&model, &vocabulary)?;

        // ── Step 8: Metrics ───────────────────────────────────────────────────
        let logged = MetricsLogger::new(&cfg.checkpoint_dir)
            .and_then(|m| m.log_report(&report).map(|()| m));
        match logged {
            Ok(m) => tracing::debug!("Metrics appended to '{}'", m.csv_path().display()),
            Err(e) => tracing::warn!("Could not record training metrics: {e:#}"),
        }

        Ok(TrainOutcome {
            session: Session::new(vocabulary, model),
            report,
            resumed,
        })
    }

    /// Load the persisted model if its input length matches this run.
    fn load_compatible(&self) -> Result<M::Model> {
        let model = self.store.load()?;
        if model.input_len() != self.config.max_len {
            return Err(CheckerError::model_load(
                self.store.name(),
                format!(
                    "persisted input length {} differs from configured {}",
                    model.input_len(),
                    self.config.max_len
                ),
            )
            .into());
        }
        Ok(model)
    }
}
