use super::aggregation::AggregationSpec;
use crate::condition::ConditionTree;
use crate::error::TreeParseError;
use serde::{Deserialize, Serialize};

/// Condition part of an alert: the filter tree and optional aggregation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryCondition {
    #[serde(default)]
    pub conditions: ConditionTree,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<AggregationSpec>,
}

/// The slice of the alert editor's form the query synthesizer reads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlertFormData {
    pub stream_name: String,
    #[serde(default)]
    pub query_condition: QueryCondition,
}

impl AlertFormData {
    pub fn new(stream_name: impl Into<String>, conditions: ConditionTree) -> Self {
        Self {
            stream_name: stream_name.into(),
            query_condition: QueryCondition {
                conditions,
                aggregation: None,
            },
        }
    }

    pub fn with_aggregation(mut self, aggregation: AggregationSpec) -> Self {
        self.query_condition.aggregation = Some(aggregation);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, TreeParseError> {
        serde_json::from_str(json).map_err(|e| TreeParseError::Form(e.to_string()))
    }
}
