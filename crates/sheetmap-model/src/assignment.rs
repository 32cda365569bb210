//! Resolved-assignment tree produced by one resolution pass.

use serde::{Deserialize, Serialize};

/// Output node pairing a matched field with its value.
///
/// Assignments appear in schema declaration order so downstream consumers
/// (error messages, re-serialization) see a deterministic column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The matched field's stable name.
    pub name: String,
    #[serde(flatten)]
    pub value: AssignmentValue,
}

/// Value shape of a resolved assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentValue {
    /// Raw cell value of a leaf field.
    Scalar(String),
    /// Child assignments of a plain composite field.
    Nested(Vec<Assignment>),
    /// Per-repetition assignment sets of a sequential composite field.
    /// May be empty when no numbered columns were present.
    Repeated(Vec<Vec<Assignment>>),
}

impl Assignment {
    pub fn scalar(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AssignmentValue::Scalar(value.into()),
        }
    }

    pub fn nested(name: impl Into<String>, children: Vec<Assignment>) -> Self {
        Self {
            name: name.into(),
            value: AssignmentValue::Nested(children),
        }
    }

    pub fn repeated(name: impl Into<String>, repetitions: Vec<Vec<Assignment>>) -> Self {
        Self {
            name: name.into(),
            value: AssignmentValue::Repeated(repetitions),
        }
    }

    /// Returns the scalar value, if this assignment is a leaf.
    pub fn as_scalar(&self) -> Option<&str> {
        match &self.value {
            AssignmentValue::Scalar(v) => Some(v),
            _ => None,
        }
    }
}
