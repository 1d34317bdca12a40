use super::node::{ConditionNode, ConditionTree, GroupNode, LogicalOperator};
use super::value::ConditionValue;
use crate::error::ConversionError;
use serde::Deserialize;

/// A trait for editor payloads that can be converted into a `ConditionTree`.
///
/// This is the extension point for feeding older or foreign filter formats to
/// the compiler. Implement it on your own structs and hand the resulting tree
/// to `build_conditions_string` or `generate_where_clause`.
///
/// # Example
///
/// ```rust
/// use jouken::prelude::*;
/// use jouken::error::ConversionError;
///
/// struct Equals(Vec<(String, String)>);
///
/// impl IntoConditionTree for Equals {
///     fn into_condition_tree(self) -> Result<ConditionTree, ConversionError> {
///         let mut group = GroupNode::new(LogicalOperator::And);
///         for (column, value) in self.0 {
///             group = group.with_condition(
///                 ConditionNode::new(column, "=", value).joined_by(LogicalOperator::And),
///             );
///         }
///         Ok(group.into())
///     }
/// }
///
/// let tree = Equals(vec![("host".into(), "a".into())]).into_condition_tree().unwrap();
/// assert_eq!(tree.to_string(), "host = 'a'");
/// ```
pub trait IntoConditionTree {
    /// Consumes the payload and converts it into a condition tree.
    fn into_condition_tree(self) -> Result<ConditionTree, ConversionError>;
}

/// One row of the flat condition list stored by older alerts.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyCondition {
    pub column: String,
    pub operator: String,
    #[serde(default)]
    pub value: Option<ConditionValue>,
}

/// Flat lists are implicitly AND-joined.
impl IntoConditionTree for Vec<LegacyCondition> {
    fn into_condition_tree(self) -> Result<ConditionTree, ConversionError> {
        let conditions = self
            .into_iter()
            .enumerate()
            .map(|(index, legacy)| {
                if legacy.column.trim().is_empty() {
                    return Err(ConversionError::BlankColumn { index });
                }
                Ok(ConditionTree::Condition(ConditionNode {
                    column: legacy.column,
                    operator: legacy.operator,
                    value: legacy.value,
                    logical_operator: (index > 0).then_some(LogicalOperator::And),
                }))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ConditionTree::Group(GroupNode {
            logical_operator: LogicalOperator::And,
            conditions,
        }))
    }
}
