//! Tests for alert evaluation query synthesis.
mod common;
use common::*;
use jouken::prelude::*;
use jouken::query::generate_sql_query_with_settings;

#[test]
fn test_plain_count_without_conditions() {
    let form = AlertFormData::new("test_stream", ConditionTree::default());
    let sql = generate_sql_query(&form, &FieldTypeMap::new(), false, DEFAULT_TIMESTAMP_COLUMN);

    assert!(sql.contains("SELECT histogram(_timestamp)"));
    assert!(sql.contains("FROM \"test_stream\""));
    assert!(sql.contains("COUNT(*)"));
    assert!(sql.ends_with("GROUP BY zo_sql_key ORDER BY zo_sql_key ASC"));
}

#[test]
fn test_plain_count_with_conditions() {
    let form = AlertFormData::new("users", create_nested_tree());
    let sql = generate_sql_query(&form, &create_field_types(), false, DEFAULT_TIMESTAMP_COLUMN);

    assert_eq!(
        sql,
        format!(
            "SELECT histogram(_timestamp) AS zo_sql_key, COUNT(*) as zo_sql_val FROM \"users\" {} GROUP BY zo_sql_key ORDER BY zo_sql_key ASC",
            NESTED_WHERE
        )
    );
}

#[test]
fn test_aggregation_ignored_when_disabled() {
    let form = AlertFormData::new("s", ConditionTree::default())
        .with_aggregation(AggregationSpec::new("avg", "response_time").with_group_by(["host"]));
    let sql = generate_sql_query(&form, &FieldTypeMap::new(), false, DEFAULT_TIMESTAMP_COLUMN);

    assert!(sql.contains("COUNT(*) as zo_sql_val"));
    assert!(!sql.contains("avg("));
    assert!(!sql.contains("x_axis_2"));
}

#[test]
fn test_average_aggregation() {
    let form = AlertFormData::new("test_stream", ConditionTree::default())
        .with_aggregation(AggregationSpec::new("avg", "response_time"));
    let sql = generate_sql_query(&form, &FieldTypeMap::new(), true, DEFAULT_TIMESTAMP_COLUMN);

    assert!(sql.contains("avg(response_time)"));
    assert!(sql.contains("zo_sql_val"));
    assert!(sql.ends_with("GROUP BY zo_sql_key ORDER BY zo_sql_key ASC"));
}

#[test]
fn test_percentile_aggregation_with_grouping() {
    let form = AlertFormData::new("k8s", create_simple_tree()).with_aggregation(
        AggregationSpec::new("p99", "latency").with_group_by(["namespace", " ", "pod"]),
    );
    let sql = generate_sql_query(&form, &create_field_types(), true, "ts");

    assert_eq!(
        sql,
        "SELECT histogram(ts) AS zo_sql_key, approx_percentile_cont(latency, 0.99) as zo_sql_val, \
         concat(namespace,' : ',pod) as x_axis_2 FROM \"k8s\" WHERE age > 30 AND city = 'delhi' \
         GROUP BY zo_sql_key, x_axis_2 ORDER BY zo_sql_key ASC"
    );
}

#[test]
fn test_incomplete_aggregation_falls_back_to_count() {
    let form = AlertFormData::new("s", ConditionTree::default())
        .with_aggregation(AggregationSpec::new("max", "  ").with_group_by(["host"]));
    let sql = generate_sql_query(&form, &FieldTypeMap::new(), true, DEFAULT_TIMESTAMP_COLUMN);

    assert!(sql.contains("COUNT(*) as zo_sql_val, concat(host) as x_axis_2"));
    assert!(sql.contains("GROUP BY zo_sql_key, x_axis_2"));
}

#[test]
fn test_missing_aggregation_falls_back_to_count() {
    let form = AlertFormData::new("s", ConditionTree::default());
    let sql = generate_sql_query(&form, &FieldTypeMap::new(), true, DEFAULT_TIMESTAMP_COLUMN);
    assert!(sql.contains("COUNT(*) as zo_sql_val FROM \"s\""));
}

#[test]
fn test_settings_choose_timestamp_column() {
    let settings = QuerySettings {
        timestamp_column: "event_time".to_string(),
        ..QuerySettings::default()
    };
    let form = AlertFormData::new("s", ConditionTree::default());
    let sql = generate_sql_query_with_settings(&form, &FieldTypeMap::new(), false, &settings);
    assert!(sql.starts_with("SELECT histogram(event_time) AS zo_sql_key,"));
}

#[test]
fn test_form_from_json() {
    let form = AlertFormData::from_json(
        r#"{
            "stream_name": "default",
            "query_condition": {
                "conditions": {
                    "filterType": "group",
                    "logicalOperator": "AND",
                    "conditions": [
                        { "filterType": "condition", "column": "code", "operator": ">=", "value": 500 }
                    ]
                },
                "aggregation": {
                    "group_by": ["service"],
                    "function": "count",
                    "having": { "column": "code", "operator": ">", "value": 10 }
                }
            }
        }"#,
    )
    .expect("Failed to parse form");

    let field_types: FieldTypeMap = [("code", "UInt16")].into_iter().collect();
    let sql = generate_sql_query(&form, &field_types, true, DEFAULT_TIMESTAMP_COLUMN);
    assert_eq!(
        sql,
        "SELECT histogram(_timestamp) AS zo_sql_key, count(code) as zo_sql_val, concat(service) as x_axis_2 \
         FROM \"default\" WHERE code >= 500 GROUP BY zo_sql_key, x_axis_2 ORDER BY zo_sql_key ASC"
    );
}

#[test]
fn test_form_without_stream_is_rejected() {
    let result = AlertFormData::from_json(r#"{ "query_condition": {} }"#);
    assert!(matches!(result, Err(TreeParseError::Form(_))));
}

#[test]
fn test_generated_queries_pass_local_validation() {
    let form = AlertFormData::new("s", create_nested_tree())
        .with_aggregation(AggregationSpec::new("sum", "age"));
    for aggregate in [false, true] {
        let sql = generate_sql_query(&form, &create_field_types(), aggregate, DEFAULT_TIMESTAMP_COLUMN);
        assert!(validate_query(&sql).is_ok(), "rejected: {}", sql);
    }
}
