// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the raw JSON dataset to tensor batches:
//
//   dataset.json / URL
//       │
//       ▼
//   loader            → reads { text, label } records
//       │
//       ▼
//   preprocessor      → lowercases, strips punctuation
//       │
//       ▼
//   vocabulary        → token → id, first-seen order
//       │
//       ▼
//   encoder           → fixed-length id rows, -1 for unknown/padding
//       │
//       ▼
//   splitter          → seeded 80/20 train/validation split
//       │
//       ▼
//   dataset / batcher → burn Dataset, [N, L] tensors
//
// Reference: Burn Book §4 (Datasets)

/// Loads the labelled corpus from a file or URL
pub mod loader;

/// Lowercases text and strips non-alphanumerics
pub mod preprocessor;

/// Builds the closed token → id mapping
pub mod vocabulary;

/// Pads/truncates documents to fixed-length id rows
pub mod encoder;

/// Implements Burn's Dataset trait for encoded samples
pub mod dataset;

/// Stacks encoded samples into tensors
pub mod batcher;

/// Shuffles and splits data into train/validation sets
pub mod splitter;
