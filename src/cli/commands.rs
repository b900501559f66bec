// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands:
//   check  — classify a piece of text (trains first if needed)
//   refine — retrain the persisted model on a fresh dataset
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{builder::RangedU64ValueParser, Args, Subcommand};
use crate::application::train_use_case::TrainConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Guess whether a piece of text was written by AI or a human
    Check(CheckArgs),

    /// Retrain the content checker on a freshly loaded dataset
    #[command(alias = "train")]
    Refine(TrainArgs),
}

/// Where the data and model live, plus every training knob.
/// Shared by both commands because `check` trains when no model exists.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Labelled dataset: a JSON file path or an http(s) URL
    #[arg(long, default_value = "dataset.json")]
    pub dataset: String,

    /// Directory holding the persisted model, vocabulary and metrics
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// Name of the persisted model slot
    #[arg(long, default_value = "ridgpt")]
    pub model_name: String,

    /// Tokens per encoded sequence; longer texts are truncated
    #[arg(long, default_value_t = 40, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_len: usize,

    /// Width of the hidden dense layer
    #[arg(long, default_value_t = 16, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub hidden_units: usize,

    #[arg(long, default_value_t = 32, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub batch_size: usize,

    /// Upper bound on training epochs
    #[arg(long, default_value_t = 50)]
    pub epochs: usize,

    /// Epochs without validation-loss improvement before stopping
    #[arg(long, default_value_t = 5)]
    pub patience: usize,

    /// Adam learning rate
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,

    /// Fraction of documents held out for validation
    #[arg(long, default_value_t = 0.2)]
    pub validation_split: f64,

    /// Seed for the validation split and batch shuffling
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            dataset:          a.dataset,
            checkpoint_dir:   a.checkpoint_dir,
            model_name:       a.model_name,
            max_len:          a.max_len,
            hidden_units:     a.hidden_units,
            batch_size:       a.batch_size,
            max_epochs:       a.epochs,
            patience:         a.patience,
            lr:               a.lr,
            validation_split: a.validation_split,
            seed:             a.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// The content to check
    #[arg(long)]
    pub text: String,

    #[command(flatten)]
    pub train: TrainArgs,
}
