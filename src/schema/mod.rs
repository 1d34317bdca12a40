//! Declared column types of a stream.
//!
//! The compiler only needs one bit of type information per column: whether
//! it is numeric (emit values bare) or anything else (quote them).

use crate::error::TreeParseError;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// Type tags treated as numeric unless configured otherwise. Matched case-insensitively.
pub const DEFAULT_NUMERIC_TYPES: &[&str] = &[
    "int8", "int16", "int32", "int64", "uint8", "uint16", "uint32", "uint64", "float16",
    "float32", "float64", "number",
];

/// Descriptor of a single stream column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub field_type: String,
}

impl FieldDescriptor {
    pub fn new(field_type: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
        }
    }
}

/// Column name to descriptor mapping supplied alongside a condition tree.
///
/// Decodes from a plain JSON object: `{ "age": { "type": "Int64" } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    from = "AHashMap<String, FieldDescriptor>",
    into = "AHashMap<String, FieldDescriptor>"
)]
pub struct FieldTypeMap {
    fields: AHashMap<String, FieldDescriptor>,
    numeric_types: AHashSet<String>,
}

impl Default for FieldTypeMap {
    fn default() -> Self {
        Self::from(AHashMap::new())
    }
}

impl From<AHashMap<String, FieldDescriptor>> for FieldTypeMap {
    fn from(fields: AHashMap<String, FieldDescriptor>) -> Self {
        Self {
            fields,
            numeric_types: DEFAULT_NUMERIC_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl From<FieldTypeMap> for AHashMap<String, FieldDescriptor> {
    fn from(map: FieldTypeMap) -> Self {
        map.fields
    }
}

impl<K: Into<String>, T: Into<String>> FromIterator<(K, T)> for FieldTypeMap {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(column, field_type)| (column.into(), FieldDescriptor::new(field_type)))
            .collect::<AHashMap<_, _>>();
        Self::from(fields)
    }
}

impl FieldTypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a field map from its JSON object form.
    pub fn from_json(json: &str) -> Result<Self, TreeParseError> {
        serde_json::from_str(json).map_err(|e| TreeParseError::FieldMap(e.to_string()))
    }

    /// Replaces the set of type tags that count as numeric.
    pub fn with_numeric_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.numeric_types = types
            .into_iter()
            .map(|t| t.as_ref().to_ascii_lowercase())
            .collect();
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, field_type: impl Into<String>) {
        self.fields
            .insert(column.into(), FieldDescriptor::new(field_type));
    }

    pub fn get(&self, column: &str) -> Option<&FieldDescriptor> {
        self.fields.get(column)
    }

    /// A column without an entry is never numeric.
    pub fn is_numeric(&self, column: &str) -> bool {
        self.fields.get(column).is_some_and(|descriptor| {
            self.numeric_types
                .contains(&descriptor.field_type.to_ascii_lowercase())
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
