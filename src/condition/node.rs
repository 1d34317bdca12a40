use super::value::ConditionValue;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boolean connective placed in front of a child when it is not the first in its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[default]
    #[serde(rename = "AND", alias = "and", alias = "And")]
    And,
    #[serde(rename = "OR", alias = "or", alias = "Or")]
    Or,
}

impl LogicalOperator {
    /// Upper-case keyword in SQL mode, lower-case in display mode.
    pub fn keyword(self, sql_mode: bool) -> &'static str {
        match (self, sql_mode) {
            (LogicalOperator::And, true) => "AND",
            (LogicalOperator::And, false) => "and",
            (LogicalOperator::Or, true) => "OR",
            (LogicalOperator::Or, false) => "or",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword(true))
    }
}

/// A single comparison of one column against one value.
///
/// Fields are defaulted on decode so a half-filled editor row still parses;
/// the compiler skips rows missing a column, an operator or a value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionNode {
    #[serde(default)]
    pub column: String,
    #[serde(default)]
    pub operator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ConditionValue>,
    /// Joiner to the previous sibling. Ignored for the first child of a group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_operator: Option<LogicalOperator>,
}

impl ConditionNode {
    pub fn new(
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self {
            column: column.into(),
            operator: operator.into(),
            value: Some(value.into()),
            logical_operator: None,
        }
    }

    /// Sets the joiner used when this condition follows a sibling.
    pub fn joined_by(mut self, operator: LogicalOperator) -> Self {
        self.logical_operator = Some(operator);
        self
    }

    /// A condition renders only when column, operator and value are all present.
    pub fn is_complete(&self) -> bool {
        !self.column.is_empty() && !self.operator.is_empty() && self.value.is_some()
    }
}

/// An ordered list of children joined by their own per-child operators.
///
/// `logical_operator` is what the editor shows on the group row. Seen from the
/// parent it is this group's joiner to the previous sibling; it never decides
/// how the group's own children are joined (each child carries its own).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNode {
    #[serde(default)]
    pub logical_operator: LogicalOperator,
    #[serde(default)]
    pub conditions: Vec<ConditionTree>,
}

impl GroupNode {
    pub fn new(logical_operator: LogicalOperator) -> Self {
        Self {
            logical_operator,
            conditions: Vec::new(),
        }
    }

    pub fn with_condition(mut self, condition: ConditionNode) -> Self {
        self.conditions.push(ConditionTree::Condition(condition));
        self
    }

    pub fn with_group(mut self, group: GroupNode) -> Self {
        self.conditions.push(ConditionTree::Group(group));
        self
    }
}

/// A node of the editor's filter tree, discriminated on the wire by `filterType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "filterType", rename_all = "lowercase")]
pub enum ConditionTree {
    Condition(ConditionNode),
    Group(GroupNode),
}

impl Default for ConditionTree {
    fn default() -> Self {
        ConditionTree::Group(GroupNode::default())
    }
}

impl ConditionTree {
    /// Operator that joins this node to the sibling before it, as held in the parent's list.
    pub fn joiner(&self) -> Option<LogicalOperator> {
        match self {
            ConditionTree::Condition(c) => c.logical_operator,
            ConditionTree::Group(g) => Some(g.logical_operator),
        }
    }

    /// `true` when no complete condition exists anywhere in the tree.
    pub fn is_empty(&self) -> bool {
        match self {
            ConditionTree::Condition(c) => !c.is_complete(),
            ConditionTree::Group(g) => g.conditions.iter().all(ConditionTree::is_empty),
        }
    }

    /// Distinct columns referenced by complete conditions, in first-appearance order.
    pub fn columns(&self) -> Vec<&str> {
        let mut found = Vec::new();
        self.collect_columns(&mut found);
        found.into_iter().unique().collect()
    }

    fn collect_columns<'a>(&'a self, found: &mut Vec<&'a str>) {
        match self {
            ConditionTree::Condition(c) if c.is_complete() => found.push(c.column.as_str()),
            ConditionTree::Condition(_) => {}
            ConditionTree::Group(g) => {
                for child in &g.conditions {
                    child.collect_columns(found);
                }
            }
        }
    }
}

impl From<ConditionNode> for ConditionTree {
    fn from(node: ConditionNode) -> Self {
        ConditionTree::Condition(node)
    }
}

impl From<GroupNode> for ConditionTree {
    fn from(node: GroupNode) -> Self {
        ConditionTree::Group(node)
    }
}
