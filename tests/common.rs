//! Common test utilities for building condition trees and field maps.
use jouken::prelude::*;

/// Field types used across tests: `age` is numeric, `city` and `status` are text.
#[allow(dead_code)]
pub fn create_field_types() -> FieldTypeMap {
    [("age", "Int64"), ("city", "Utf8"), ("status", "Utf8")]
        .into_iter()
        .collect()
}

/// Two AND-joined conditions.
///
/// Logic: `age > 30 AND city = 'delhi'`
#[allow(dead_code)]
pub fn create_simple_tree() -> ConditionTree {
    GroupNode::new(LogicalOperator::And)
        .with_condition(ConditionNode::new("age", ">", 30).joined_by(LogicalOperator::And))
        .with_condition(ConditionNode::new("city", "=", "delhi").joined_by(LogicalOperator::And))
        .into()
}

/// Two top-level conditions, a nested OR group attached with AND, and a `contains`.
///
/// Logic: `age > 18 AND age < 65 AND (city = 'NYC' OR city = 'LA') AND status contains 'premium'`
#[allow(dead_code)]
pub fn create_nested_tree() -> ConditionTree {
    let cities = GroupNode::new(LogicalOperator::And)
        .with_condition(ConditionNode::new("city", "=", "NYC"))
        .with_condition(ConditionNode::new("city", "=", "LA").joined_by(LogicalOperator::Or));

    GroupNode::new(LogicalOperator::And)
        .with_condition(ConditionNode::new("age", ">", 18))
        .with_condition(ConditionNode::new("age", "<", 65).joined_by(LogicalOperator::And))
        .with_group(cities)
        .with_condition(
            ConditionNode::new("status", "contains", "premium").joined_by(LogicalOperator::And),
        )
        .into()
}

/// The nested tree as the editor sends it.
#[allow(dead_code)]
pub const NESTED_TREE_JSON: &str = r#"{
    "filterType": "group",
    "logicalOperator": "AND",
    "conditions": [
        { "filterType": "condition", "column": "age", "operator": ">", "value": 18, "logicalOperator": "AND" },
        { "filterType": "condition", "column": "age", "operator": "<", "value": 65, "logicalOperator": "AND" },
        {
            "filterType": "group",
            "logicalOperator": "AND",
            "conditions": [
                { "filterType": "condition", "column": "city", "operator": "=", "value": "NYC", "logicalOperator": "OR" },
                { "filterType": "condition", "column": "city", "operator": "=", "value": "LA", "logicalOperator": "OR" }
            ]
        },
        { "filterType": "condition", "column": "status", "operator": "contains", "value": "premium", "logicalOperator": "AND" }
    ]
}"#;

#[allow(dead_code)]
pub const NESTED_WHERE: &str =
    "WHERE age > 18 AND age < 65 AND (city = 'NYC' OR city = 'LA') AND status LIKE '%premium%'";
