// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Only ModelLoad is recoverable: the training workflow swallows
// it and builds a fresh model. Everything else propagates to the
// CLI boundary. Application code returns anyhow::Result, so
// callers match on a variant with `err.downcast_ref::<CheckerError>()`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("failed to load dataset from '{location}': {reason}")]
    DatasetLoad { location: String, reason: String },

    #[error("dataset at '{0}' contains no documents")]
    EmptyDataset(String),

    #[error("failed to load model '{name}': {reason}")]
    ModelLoad { name: String, reason: String },

    #[error("failed to persist model '{name}': {reason}")]
    ModelPersist { name: String, reason: String },

    #[error("please enter some content")]
    InputValidation,

    #[error("classifier produced {0}, which is not a probability")]
    InvalidProbability(f32),
}

impl CheckerError {
    pub fn dataset_load(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::DatasetLoad {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn model_load(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::ModelLoad {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn model_persist(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::ModelPersist {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether a workflow may compensate for this error internally
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ModelLoad { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_model_load_is_recoverable() {
        assert!(CheckerError::model_load("ridgpt", "missing").is_recoverable());
        assert!(!CheckerError::model_persist("ridgpt", "disk full").is_recoverable());
        assert!(!CheckerError::dataset_load("dataset.json", "404").is_recoverable());
        assert!(!CheckerError::InputValidation.is_recoverable());
    }

    #[test]
    fn test_messages_name_the_source() {
        let err = CheckerError::dataset_load("https://x/d.json", "404 Not Found");
        assert_eq!(
            err.to_string(),
            "failed to load dataset from 'https://x/d.json': 404 Not Found"
        );
    }
}
