// ============================================================
// Layer 2 — RefineUseCase (Refinement Workflow)
// ============================================================
// Re-runs the training workflow against a freshly fetched
// dataset and updates the persisted model in place. Nothing is
// cached between runs: the dataset is fetched and the
// vocabulary rebuilt every time.

use anyhow::Result;

use crate::application::train_use_case::{TrainConfig, TrainOutcome, TrainUseCase};
use crate::domain::traits::{Classifier, DatasetSource, ModelStore};

pub const REFINED_MESSAGE: &str = "Content checker successfully refined.";
pub const REFINE_FAILED_MESSAGE: &str = "Failed to refine the content checker.";

pub struct RefineUseCase<'a, S: ?Sized, M> {
    train: TrainUseCase<'a, S, M>,
}

impl<'a, S, M> RefineUseCase<'a, S, M>
where
    S: DatasetSource + ?Sized,
    M: ModelStore,
{
    pub fn new(config: &'a TrainConfig, source: &'a S, store: &'a M) -> Self {
        Self { train: TrainUseCase::new(config, source, store) }
    }

    pub fn execute(&self) -> Result<TrainOutcome<M::Model>> {
        let outcome = self.train.execute()?;
        tracing::info!(
            "Refinement finished ({} epochs, {} tokens, {}-token rows, resumed from saved model: {})",
            outcome.report.epochs.len(),
            outcome.session.vocabulary().len(),
            outcome.session.model().input_len(),
            outcome.resumed
        );
        Ok(outcome)
    }
}
