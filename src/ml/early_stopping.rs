// ============================================================
// Layer 5 — Early Stopping
// ============================================================
// Watches one metric across epochs and says when to stop.
// Lower is better for every supported metric (both are losses).
//
//   best  — lowest value seen so far
//   wait  — epochs since `best` last improved
//
// An epoch improves when value < best - min_delta. The first
// epoch always improves. Training stops once wait == patience.

use crate::domain::training::{EpochMetrics, StoppingPolicy};

#[derive(Debug, Clone)]
pub struct EarlyStopping {
    policy: StoppingPolicy,
    best: Option<f64>,
    wait: usize,
}

impl EarlyStopping {
    pub fn new(policy: StoppingPolicy) -> Self {
        Self { policy, best: None, wait: 0 }
    }

    /// Record one epoch; returns true when training should stop.
    pub fn should_stop(&mut self, metrics: &EpochMetrics) -> bool {
        let value = metrics.monitored(self.policy.monitor);

        let improved = match self.best {
            None => !value.is_nan(),
            Some(best) => value < best - self.policy.min_delta,
        };

        if improved {
            self.best = Some(value);
            self.wait = 0;
        } else {
            self.wait += 1;
        }

        self.wait >= self.policy.patience
    }

    pub fn best(&self) -> Option<f64> {
        self.best
    }
}
