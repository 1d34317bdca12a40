//! Settings file for query synthesis.

use crate::error::ConfigError;
use crate::schema::{DEFAULT_NUMERIC_TYPES, FieldTypeMap};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_TIMESTAMP_COLUMN: &str = "_timestamp";

fn default_timestamp_column() -> String {
    DEFAULT_TIMESTAMP_COLUMN.to_string()
}

fn default_numeric_types() -> Vec<String> {
    DEFAULT_NUMERIC_TYPES.iter().map(|t| t.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySettings {
    /// Column bucketed by `histogram(...)`.
    #[serde(default = "default_timestamp_column")]
    pub timestamp_column: String,
    /// Field type tags whose values are emitted unquoted.
    #[serde(default = "default_numeric_types")]
    pub numeric_types: Vec<String>,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            timestamp_column: default_timestamp_column(),
            numeric_types: default_numeric_types(),
        }
    }
}

impl QuerySettings {
    /// Loads settings from a JSON file; missing keys take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let content = fs::read_to_string(path_ref).map_err(|e| ConfigError::Read {
            path: path_ref.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path_ref.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Applies the configured numeric type tags to a field map.
    pub fn apply_to(&self, field_types: FieldTypeMap) -> FieldTypeMap {
        field_types.with_numeric_types(&self.numeric_types)
    }
}
