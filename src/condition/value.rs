use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar literal on the right-hand side of a comparison.
///
/// Numbers keep the exact textual form the editor sent (`30`, `30.5`, `-1`),
/// so a value prints the same way it was typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Number(serde_json::Number),
    Text(String),
}

impl ConditionValue {
    /// Returns `true` for the empty string. Numbers are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            ConditionValue::Number(_) => false,
            ConditionValue::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Number(n) => write!(f, "{}", n),
            ConditionValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for ConditionValue {
    fn from(value: &str) -> Self {
        ConditionValue::Text(value.to_string())
    }
}

impl From<String> for ConditionValue {
    fn from(value: String) -> Self {
        ConditionValue::Text(value)
    }
}

impl From<i64> for ConditionValue {
    fn from(value: i64) -> Self {
        ConditionValue::Number(value.into())
    }
}

impl From<u64> for ConditionValue {
    fn from(value: u64) -> Self {
        ConditionValue::Number(value.into())
    }
}

impl From<i32> for ConditionValue {
    fn from(value: i32) -> Self {
        ConditionValue::Number(value.into())
    }
}

impl From<f64> for ConditionValue {
    /// Non-finite floats have no JSON representation and become the text `"NaN"`/`"inf"`.
    fn from(value: f64) -> Self {
        match serde_json::Number::from_f64(value) {
            Some(n) => ConditionValue::Number(n),
            None => ConditionValue::Text(value.to_string()),
        }
    }
}
