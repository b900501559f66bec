// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: no tensors, no printing, no
// direct file access. Each use case borrows a DatasetSource
// and a ModelStore and tells the other layers what to do.
//
// Reference: Clean Architecture pattern

/// Vocabulary + model of the latest training run
pub mod session;

/// The training workflow
pub mod train_use_case;

/// The inference workflow behind the "check" action
pub mod check_use_case;

/// Retraining against a freshly fetched dataset
pub mod refine_use_case;
