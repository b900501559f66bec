// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
//   checkpoint.rs — the named model slot: weights via burn's
//                   file recorder, architecture config and
//                   vocabulary as JSON
//   metrics.rs    — per-epoch training metrics as CSV
//
// Reference: Burn Book §5 (Checkpointing)

/// Model checkpoint saving and loading
pub mod checkpoint;

/// Training metrics CSV logger
pub mod metrics;
