// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Explicit epoch loop with Adam and binary cross-entropy.
//
//   - Training runs on MyBackend (Autodiff) for gradients
//   - model.valid() returns the model on MyInnerBackend, so
//     validation batches use the inner backend too
//   - The training order is reshuffled every epoch with a
//     seeded RNG; the first epoch always counts as improvement
//   - After every epoch the EarlyStopping tracker decides
//     whether to continue
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::{bail, Result};
use burn::{
    data::dataset::Dataset,
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::data::{batcher::ClassifierBatcher, dataset::ClassifierDataset};
use crate::domain::training::{EpochMetrics, FitPlan, FitReport};
use crate::ml::early_stopping::EarlyStopping;
use crate::ml::model::{count_correct, BowClassifier};
use crate::ml::{Device, InnerBackend as MyInnerBackend, TrainBackend as MyBackend};

pub fn run_training(
    mut model:  BowClassifier<MyBackend>,
    train_set:  &ClassifierDataset,
    val_set:    &ClassifierDataset,
    plan:       &FitPlan,
    device:     &Device,
) -> Result<(BowClassifier<MyBackend>, FitReport)> {
    if train_set.is_empty() {
        bail!("cannot fit a classifier on an empty training set");
    }
    let batch_size = plan.batch_size.max(1);

    let mut optim = AdamConfig::new().init();

    let train_batcher = ClassifierBatcher::<MyBackend>::new(device.clone());
    let val_batcher   = ClassifierBatcher::<MyInnerBackend>::new(device.clone());

    let mut rng     = StdRng::seed_from_u64(plan.seed);
    let mut order   = (0..train_set.len()).collect::<Vec<usize>>();
    let mut stopper = EarlyStopping::new(plan.stopping.clone());
    let mut report  = FitReport::default();

    tracing::info!(
        "Fitting on {} samples, validating on {} (max {} epochs, patience {})",
        train_set.len(),
        val_set.len(),
        plan.stopping.max_epochs,
        plan.stopping.patience,
    );

    for epoch in 1..=plan.stopping.max_epochs {
        // ── Training phase ────────────────────────────────────────────────────
        order.shuffle(&mut rng);

        let mut loss_sum = 0.0f64;
        let mut correct  = 0usize;

        for chunk in order.chunks(batch_size) {
            let batch = train_batcher.batch(&train_set.gather(chunk));
            let (loss, logits) = model.forward_loss(batch.inputs, batch.targets.clone());

            loss_sum += loss.clone().into_scalar().elem::<f64>() * chunk.len() as f64;
            correct  += count_correct(logits, batch.targets);

            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(plan.learning_rate, model, grads);
        }

        let total = train_set.len() as f64;

        // ── Validation phase ──────────────────────────────────────────────────
        let (val_loss, val_accuracy) = if val_set.is_empty() {
            (None, None)
        } else {
            let (loss, acc) = evaluate(&model.valid(), val_set, &val_batcher, batch_size);
            (Some(loss), Some(acc))
        };

        let metrics = EpochMetrics {
            epoch,
            train_loss: loss_sum / total,
            train_accuracy: correct as f64 / total,
            val_loss,
            val_accuracy,
        };

        tracing::info!(
            "Epoch {:>3}/{} | loss={:.4} | acc={:.1}% | val_loss={} | val_acc={}",
            epoch,
            plan.stopping.max_epochs,
            metrics.train_loss,
            metrics.train_accuracy * 100.0,
            val_loss.map_or("-".to_string(), |l| format!("{l:.4}")),
            val_accuracy.map_or("-".to_string(), |a| format!("{:.1}%", a * 100.0)),
        );

        let stop = stopper.should_stop(&metrics);
        report.epochs.push(metrics);

        if stop {
            tracing::info!("Early stopping after epoch {} (best={:?})", epoch, stopper.best());
            report.stopped_early = epoch < plan.stopping.max_epochs;
            break;
        }
    }

    Ok((model, report))
}

/// Mean loss and accuracy of `model` over every sample in `dataset`.
fn evaluate(
    model:      &BowClassifier<MyInnerBackend>,
    dataset:    &ClassifierDataset,
    batcher:    &ClassifierBatcher<MyInnerBackend>,
    batch_size: usize,
) -> (f64, f64) {
    let indices: Vec<usize> = (0..dataset.len()).collect();
    let mut loss_sum = 0.0f64;
    let mut correct  = 0usize;

    for chunk in indices.chunks(batch_size) {
        let batch = batcher.batch(&dataset.gather(chunk));
        let (loss, logits) = model.forward_loss(batch.inputs, batch.targets.clone());
        loss_sum += loss.into_scalar().elem::<f64>() * chunk.len() as f64;
        correct  += count_correct(logits, batch.targets);
    }

    let total = dataset.len().max(1) as f64;
    (loss_sum / total, correct as f64 / total)
}
