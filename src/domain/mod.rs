// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits that define what the
// content checker works with. Nothing here touches burn,
// the filesystem, or the network.
//
//   document.rs — a labelled dataset record
//   sequence.rs — fixed-length encoded token ids
//   verdict.rs  — classification result and AI/HUMAN verdict
//   training.rs — fit plan, stopping policy, epoch metrics
//   error.rs    — the error taxonomy shared by every layer
//   traits.rs   — capabilities other layers implement
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

pub mod document;
pub mod error;
pub mod sequence;
pub mod training;
pub mod traits;
pub mod verdict;
