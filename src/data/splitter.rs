// ============================================================
// Layer 4 — Train/Validation Splitter
// ============================================================
// Shuffles samples and splits them into two sets:
//   - Training set:   used to update model weights
//   - Validation set: watched by early stopping
//
// The caller supplies the RNG so a seeded run always holds out
// the same documents.
//
// Split ratio: 80% training, 20% validation by default.
// The training share is round(n * train_fraction), taken after
// shuffling. This differs from holding out the unshuffled tail
// with floor(): which documents are held out does not depend on
// dataset order, and 7 samples split 6/1 rather than 5/2.
//
// Reference: rand crate documentation (SliceRandom)

use rand::{seq::SliceRandom, Rng};

/// Shuffle `samples` with `rng` and split into (train, validation).
pub fn split_train_val<T, R: Rng + ?Sized>(
    mut samples: Vec<T>,
    train_fraction: f64,
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    samples.shuffle(rng);

    let total    = samples.len();
    let split_at = ((total as f64) * train_fraction).round() as usize;
    let split_at = split_at.min(total);

    let val = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} validation",
        samples.len(),
        val.len(),
    );

    (samples, val)
}
