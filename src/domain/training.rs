// ============================================================
// Layer 3 — Training Policy Types
// ============================================================
// Describes HOW a fit should run (split, batch size, learning
// rate, early stopping) and WHAT it produced (per-epoch
// metrics). The training loop itself lives in Layer 5.

use serde::{Deserialize, Serialize};

/// Which metric early stopping watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Monitor {
    /// Validation loss; falls back to training loss when there is
    /// no validation split
    ValLoss,
    TrainLoss,
}

/// Stop once the monitored metric has not improved by more than
/// `min_delta` for `patience` consecutive epochs, or after
/// `max_epochs` epochs, whichever comes first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoppingPolicy {
    pub monitor: Monitor,
    pub patience: usize,
    pub min_delta: f64,
    pub max_epochs: usize,
}

impl Default for StoppingPolicy {
    fn default() -> Self {
        Self {
            monitor: Monitor::ValLoss,
            patience: 5,
            min_delta: 0.0,
            max_epochs: 50,
        }
    }
}

/// Everything a classifier needs to know to fit one batch of samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitPlan {
    /// Fraction of samples held out for validation
    pub validation_split: f64,
    pub batch_size: usize,
    pub learning_rate: f64,
    /// Seed for the split and the per-epoch shuffle
    pub seed: u64,
    pub stopping: StoppingPolicy,
}

impl Default for FitPlan {
    fn default() -> Self {
        Self {
            validation_split: 0.2,
            batch_size: 32,
            learning_rate: 1e-3,
            seed: 42,
            stopping: StoppingPolicy::default(),
        }
    }
}

/// Metrics for a single epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    /// Starts at 1
    pub epoch: usize,
    /// Mean binary cross-entropy over the training batches
    pub train_loss: f64,
    /// Fraction of training samples classified correctly
    pub train_accuracy: f64,
    /// None when the validation split was empty
    pub val_loss: Option<f64>,
    pub val_accuracy: Option<f64>,
}

impl EpochMetrics {
    /// Value of the metric a policy monitors for this epoch
    pub fn monitored(&self, monitor: Monitor) -> f64 {
        match monitor {
            Monitor::ValLoss => self.val_loss.unwrap_or(self.train_loss),
            Monitor::TrainLoss => self.train_loss,
        }
    }
}

/// What a call to `Classifier::fit` produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub epochs: Vec<EpochMetrics>,
    /// True when the stopping policy ended training before max_epochs
    pub stopped_early: bool,
}

impl FitReport {
    pub fn last(&self) -> Option<&EpochMetrics> {
        self.epochs.last()
    }
}
