// ============================================================
// Layer 5 — BurnClassifier
// ============================================================
// Implements the domain Classifier trait on top of the burn
// model, so the application layer never sees tensors.
//
//   fit()     → seeded 80/20 split, then the explicit epoch loop
//   predict() → model.valid() on the inner backend, sigmoid out

use anyhow::{ensure, Result};
use burn::module::AutodiffModule;
use rand::{rngs::StdRng, SeedableRng};

use crate::data::{dataset::ClassifierDataset, splitter::split_train_val};
use crate::domain::sequence::{EncodedSample, EncodedSequence};
use crate::domain::training::{FitPlan, FitReport};
use crate::domain::traits::Classifier;
use crate::ml::inferencer::Inferencer;
use crate::ml::model::{BowClassifier, BowClassifierConfig};
use crate::ml::trainer::run_training;
use crate::ml::{Device, TrainBackend};

pub struct BurnClassifier {
    model:  BowClassifier<TrainBackend>,
    config: BowClassifierConfig,
    device: Device,
}

impl BurnClassifier {
    /// A freshly initialised, untrained classifier.
    pub fn new(config: BowClassifierConfig, device: Device) -> Self {
        let model = config.init(&device);
        Self { model, config, device }
    }

    /// Wrap a model whose weights were restored elsewhere.
    pub fn from_parts(model: BowClassifier<TrainBackend>, config: BowClassifierConfig, device: Device) -> Self {
        Self { model, config, device }
    }

    pub fn model(&self) -> &BowClassifier<TrainBackend> {
        &self.model
    }

    pub fn config(&self) -> &BowClassifierConfig {
        &self.config
    }

    fn check_lengths<'a>(&self, sequences: impl IntoIterator<Item = &'a EncodedSequence>) -> Result<()> {
        for seq in sequences {
            ensure!(
                seq.len() == self.config.input_len,
                "sequence has length {} but the classifier expects {}",
                seq.len(),
                self.config.input_len
            );
        }
        Ok(())
    }
}

impl Classifier for BurnClassifier {
    fn input_len(&self) -> usize {
        self.config.input_len
    }

    fn fit(&mut self, samples: Vec<EncodedSample>, plan: &FitPlan) -> Result<FitReport> {
        self.check_lengths(samples.iter().map(|s| &s.sequence))?;

        let mut rng = StdRng::seed_from_u64(plan.seed);
        let (train, val) = split_train_val(samples, 1.0 - plan.validation_split, &mut rng);
        let train_set = ClassifierDataset::new(train);
        let val_set   = ClassifierDataset::new(val);

        let (model, report) = run_training(self.model.clone(), &train_set, &val_set, plan, &self.device)?;
        self.model = model;
        Ok(report)
    }

    fn predict(&self, batch: &[EncodedSequence]) -> Result<Vec<f32>> {
        self.check_lengths(batch)?;
        Inferencer::new(self.model.valid(), self.device.clone()).predict(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::Label;
    use crate::domain::training::StoppingPolicy;

    fn classifier(len: usize) -> BurnClassifier {
        BurnClassifier::new(BowClassifierConfig::new(len), Device::default())
    }

    #[test]
    fn test_predict_returns_one_probability_per_row() {
        let c = classifier(3);
        let batch = vec![
            EncodedSequence::new(vec![0, 1, -1]),
            EncodedSequence::new(vec![-1, -1, -1]),
        ];
        let probs = c.predict(&batch).unwrap();
        assert_eq!(probs.len(), 2);
        assert!(probs.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_predict_rejects_wrong_length() {
        let c = classifier(3);
        assert!(c.predict(&[EncodedSequence::new(vec![0, 1])]).is_err());
    }

    #[test]
    fn test_fit_produces_report() {
        let mut c = classifier(3);
        let samples: Vec<EncodedSample> = (0..10)
            .map(|i| {
                let label = if i % 2 == 0 { Label::Ai } else { Label::Human };
                EncodedSample::new(EncodedSequence::new(vec![i, -1, -1]), label)
            })
            .collect();
        let plan = FitPlan {
            stopping: StoppingPolicy { max_epochs: 4, ..StoppingPolicy::default() },
            ..FitPlan::default()
        };

        let report = c.fit(samples, &plan).unwrap();
        assert!(!report.epochs.is_empty());
        // 10 samples → 8 train, 2 validation
        assert!(report.last().unwrap().val_loss.is_some());
    }
}
