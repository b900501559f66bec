// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// One record of the labelled dataset. The JSON form is
//   { "text": "Hello World!", "label": 0 }
// where 0 means written by a human and 1 means AI-generated.

use serde::{Deserialize, Serialize};

/// Ground-truth class of a dataset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Label {
    /// Composed by a human (`0`)
    Human,
    /// Generated by AI (`1`)
    Ai,
}

impl Label {
    /// Binary target value used by the classifier's loss
    pub fn target(self) -> i64 {
        match self {
            Label::Human => 0,
            Label::Ai => 1,
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Human),
            1 => Ok(Label::Ai),
            other => Err(format!("label must be 0 or 1, found {other}")),
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.target() as u8
    }
}

/// A labelled document loaded from the dataset source.
/// Never mutated after load — preprocessing produces new values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Raw text as it appears in the dataset
    pub text: String,

    /// Whether the text is human-written or AI-generated
    pub label: Label,
}

impl Document {
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_integer_labels() {
        let docs: Vec<Document> = serde_json::from_str(
            r#"[{"text":"Hello World!","label":0},{"text":"As an AI","label":1}]"#,
        )
        .unwrap();
        assert_eq!(docs[0], Document::new("Hello World!", Label::Human));
        assert_eq!(docs[1].label, Label::Ai);
    }

    #[test]
    fn test_rejects_out_of_range_label() {
        let res: Result<Document, _> = serde_json::from_str(r#"{"text":"x","label":2}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_serialises_label_as_integer() {
        let json = serde_json::to_string(&Document::new("hi", Label::Ai)).unwrap();
        assert_eq!(json, r#"{"text":"hi","label":1}"#);
    }
}
