use crate::condition::ConditionValue;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Percentile shorthands accepted in place of an aggregation function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Percentile {
    P50,
    P75,
    P90,
    P95,
    P99,
}

impl Percentile {
    /// Exact, case-sensitive alias lookup (`p50`, `p75`, `p90`, `p95`, `p99`).
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias {
            "p50" => Some(Percentile::P50),
            "p75" => Some(Percentile::P75),
            "p90" => Some(Percentile::P90),
            "p95" => Some(Percentile::P95),
            "p99" => Some(Percentile::P99),
            _ => None,
        }
    }

    pub fn fraction(self) -> &'static str {
        match self {
            Percentile::P50 => "0.5",
            Percentile::P75 => "0.75",
            Percentile::P90 => "0.9",
            Percentile::P95 => "0.95",
            Percentile::P99 => "0.99",
        }
    }
}

/// Threshold applied to the aggregated value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HavingClause {
    #[serde(default)]
    pub column: String,
    #[serde(default)]
    pub operator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ConditionValue>,
}

/// Aggregation settings of an alert.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregationSpec {
    #[serde(default)]
    pub group_by: Vec<String>,
    #[serde(default)]
    pub function: String,
    #[serde(default)]
    pub having: HavingClause,
}

impl AggregationSpec {
    pub fn new(function: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            having: HavingClause {
                column: column.into(),
                ..HavingClause::default()
            },
            ..Self::default()
        }
    }

    pub fn with_group_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Both the function and the aggregated column must be non-blank.
    pub fn is_valid(&self) -> bool {
        !self.function.trim().is_empty() && !self.having.column.trim().is_empty()
    }

    /// `{function}(column) as zo_sql_val`, percentile aliases expanded,
    /// `COUNT(*)` when the spec is incomplete.
    pub fn value_projection(&self) -> String {
        if !self.is_valid() {
            return "COUNT(*) as zo_sql_val".to_string();
        }

        let function = self.function.trim();
        let column = self.having.column.trim();
        match Percentile::from_alias(function) {
            Some(p) => format!(
                "approx_percentile_cont({}, {}) as zo_sql_val",
                column,
                p.fraction()
            ),
            None => format!("{}({}) as zo_sql_val", function, column),
        }
    }

    /// Returns the `, concat(...) as x_axis_2` projection and the `, x_axis_2`
    /// GROUP BY alias, or two empty strings when no non-blank column remains.
    pub fn group_by_fragments(&self) -> (String, String) {
        let columns: Vec<&str> = self
            .group_by
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect();

        if columns.is_empty() {
            return (String::new(), String::new());
        }

        (
            format!(", concat({}) as x_axis_2", columns.iter().join(",' : ',")),
            ", x_axis_2".to_string(),
        )
    }
}
