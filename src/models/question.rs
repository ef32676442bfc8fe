use serde::{Deserialize, Serialize};

pub const OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];

/// A single multiple-choice question record.
///
/// The question text itself is not stored here; it is the key the record is
/// filed under in the [`QuestionStore`](super::QuestionStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
    /// Label of the correct option. Nothing guarantees it is one of A-D.
    pub answer: String,
}

impl Question {
    pub fn new(
        a: impl Into<String>,
        b: impl Into<String>,
        c: impl Into<String>,
        d: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
            answer: answer.into(),
        }
    }

    /// Options paired with their labels, in label order.
    pub fn options(&self) -> [(&'static str, &str); 4] {
        [
            (OPTION_LABELS[0], self.a.as_str()),
            (OPTION_LABELS[1], self.b.as_str()),
            (OPTION_LABELS[2], self.c.as_str()),
            (OPTION_LABELS[3], self.d.as_str()),
        ]
    }

    /// Whole-input comparison after upper-casing, so "a" matches "A" but
    /// "Aa" does not.
    pub fn is_correct(&self, input: &str) -> bool {
        input.to_uppercase() == self.answer
    }

    pub fn has_valid_answer(&self) -> bool {
        OPTION_LABELS.contains(&self.answer.as_str())
    }
}
