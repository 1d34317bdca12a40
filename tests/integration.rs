//! Integration tests for Jouken
//!
//! End-to-end tests that run editor payloads through compilation, query
//! synthesis and local validation.
//!
mod common;
use common::*;
use jouken::prelude::*;

#[cfg(test)]
mod integration_tests {
    use super::*;

    const FIELDS_JSON: &str = r#"{
        "age": { "type": "Int64" },
        "city": { "type": "Utf8" },
        "status": { "type": "Utf8" }
    }"#;

    #[test]
    fn test_editor_payload_to_validation_request() {
        let tree = ConditionTree::from_json(NESTED_TREE_JSON).expect("Failed to parse tree");
        let field_types = FieldTypeMap::from_json(FIELDS_JSON).expect("Failed to parse fields");

        // Preview shown next to the editor
        assert_eq!(
            tree.to_string(),
            "age > '18' and age < '65' and (city = 'NYC' or city = 'LA') and status contains 'premium'"
        );

        let form = AlertFormData::new("members", tree)
            .with_aggregation(AggregationSpec::new("p50", "age").with_group_by(["city"]));
        let sql = generate_sql_query(&form, &field_types, true, DEFAULT_TIMESTAMP_COLUMN);
        assert!(sql.contains(NESTED_WHERE));
        assert!(sql.contains("approx_percentile_cont(age, 0.5) as zo_sql_val"));

        let request = ValidationRequest::prepare(sql.clone(), 1_700_000_000_000_000, 1_700_000_900_000_000)
            .expect("Generated query should pass local checks");
        assert!(request.validate);
        assert_eq!(request.query.sql, sql);
        assert_eq!(request.query.query_fn, None);
    }

    #[test]
    fn test_legacy_alert_compiles_like_new_tree() {
        let legacy: Vec<LegacyCondition> = serde_json::from_str(
            r#"[
                {"column": "age", "operator": ">", "value": 30},
                {"column": "city", "operator": "=", "value": "delhi"}
            ]"#,
        )
        .expect("Failed to parse legacy conditions");
        let tree = legacy
            .into_condition_tree()
            .expect("Failed to convert legacy conditions");

        let field_types = create_field_types();
        assert_eq!(
            generate_where_clause(&tree, &field_types),
            generate_where_clause(&create_simple_tree(), &field_types)
        );
    }

    #[test]
    fn test_tree_survives_serialization() {
        let tree = create_nested_tree();
        let encoded = serde_json::to_string(&tree).expect("Failed to encode tree");
        let decoded = ConditionTree::from_json(&encoded).expect("Failed to decode tree");
        assert_eq!(decoded.to_string(), tree.to_string());
    }

    #[test]
    fn test_columns_needing_types() {
        let tree = ConditionTree::from_json(NESTED_TREE_JSON).expect("Failed to parse tree");
        assert_eq!(tree.columns(), vec!["age", "city", "status"]);
    }

    #[test]
    fn test_settings_and_field_map_together() {
        let settings = QuerySettings {
            numeric_types: vec!["Utf8".to_string()],
            ..QuerySettings::default()
        };
        let field_types = settings.apply_to(create_field_types());
        let tree = ConditionTree::from(ConditionNode::new("city", "=", "7"));
        assert_eq!(generate_where_clause(&tree, &field_types), "WHERE city = 7");
    }
}
