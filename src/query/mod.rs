//! Alert evaluation query synthesis.
//!
//! Every generated query buckets rows with `histogram(...) AS zo_sql_key` and
//! produces one value column `zo_sql_val`, optionally split by a
//! concatenated `x_axis_2` group key.

mod aggregation;
mod form;
mod settings;

pub use aggregation::{AggregationSpec, HavingClause, Percentile};
pub use form::{AlertFormData, QueryCondition};
pub use settings::{DEFAULT_TIMESTAMP_COLUMN, QuerySettings};

use crate::compiler::{FormatOptions, build_conditions_string};
use crate::condition::ConditionTree;
use crate::schema::FieldTypeMap;
use tracing::debug;

/// SQL-mode compile with a `WHERE` prefix and type-aware quoting.
/// Empty when the tree has nothing to render.
pub fn generate_where_clause(tree: &ConditionTree, field_types: &FieldTypeMap) -> String {
    build_conditions_string(tree, &FormatOptions::where_clause(field_types))
}

/// Builds the alert evaluation query for `form`.
///
/// With aggregation disabled the value is `COUNT(*)`. With it enabled the
/// form's `AggregationSpec` decides the value expression and grouping; a
/// missing or incomplete spec still falls back to `COUNT(*)`.
pub fn generate_sql_query(
    form: &AlertFormData,
    field_types: &FieldTypeMap,
    is_aggregation_enabled: bool,
    timestamp_column: &str,
) -> String {
    let where_clause = generate_where_clause(&form.query_condition.conditions, field_types);

    let (value_projection, group_by_projection, group_by_alias) = if is_aggregation_enabled {
        let spec = form.query_condition.aggregation.clone().unwrap_or_default();
        if !spec.is_valid() {
            debug!(
                stream = %form.stream_name,
                function = %spec.function,
                column = %spec.having.column,
                "incomplete aggregation, falling back to COUNT(*)"
            );
        }
        let (projection, alias) = spec.group_by_fragments();
        (spec.value_projection(), projection, alias)
    } else {
        (
            "COUNT(*) as zo_sql_val".to_string(),
            String::new(),
            String::new(),
        )
    };

    let sql = format!(
        "SELECT histogram({}) AS zo_sql_key, {}{} FROM \"{}\" {} GROUP BY zo_sql_key{} ORDER BY zo_sql_key ASC",
        timestamp_column,
        value_projection,
        group_by_projection,
        form.stream_name,
        where_clause,
        group_by_alias
    );
    debug!(stream = %form.stream_name, aggregated = is_aggregation_enabled, %sql, "query synthesized");
    sql
}

/// `generate_sql_query` with the timestamp column taken from `settings`.
pub fn generate_sql_query_with_settings(
    form: &AlertFormData,
    field_types: &FieldTypeMap,
    is_aggregation_enabled: bool,
    settings: &QuerySettings,
) -> String {
    generate_sql_query(
        form,
        field_types,
        is_aggregation_enabled,
        &settings.timestamp_column,
    )
}
