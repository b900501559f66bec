// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All burn-specific training and inference code lives here.
//
//   model.rs          — two-layer dense classifier
//                       Linear(L → 16) → ReLU → Linear(16 → 1)
//   early_stopping.rs — tracks the monitored metric across epochs
//   trainer.rs        — explicit epoch loop: Adam + binary
//                       cross-entropy, validation, early stopping
//   inferencer.rs     — probabilities for a batch of sequences
//   classifier.rs     — BurnClassifier, the Classifier trait
//                       implementation the application uses
//
// Backends: ndarray on the CPU by default; build with
// `--features wgpu` to run on the GPU instead.
//
// Reference: Burn Book §3 (Building Blocks), §5 (Training)

pub mod classifier;
pub mod early_stopping;
pub mod inferencer;
pub mod model;
pub mod trainer;

#[cfg(not(feature = "wgpu"))]
pub type InnerBackend = burn::backend::NdArray;
#[cfg(feature = "wgpu")]
pub type InnerBackend = burn::backend::Wgpu;

/// InnerBackend with automatic differentiation, used for fitting
pub type TrainBackend = burn::backend::Autodiff<InnerBackend>;

pub type Device = <InnerBackend as burn::tensor::backend::Backend>::Device;
