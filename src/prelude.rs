//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the jouken crate.
//!
//! # Example
//!
//! ```rust
//! use jouken::prelude::*;
//!
//! let tree = ConditionTree::from(
//!     GroupNode::new(LogicalOperator::And)
//!         .with_condition(ConditionNode::new("name", "not_contains", "test")),
//! );
//! let field_types = FieldTypeMap::new();
//! assert_eq!(generate_where_clause(&tree, &field_types), "WHERE name NOT LIKE '%test%'");
//! ```

// Condition tree model
pub use crate::condition::{
    ConditionNode, ConditionTree, ConditionValue, GroupNode, IntoConditionTree, LegacyCondition,
    LogicalOperator,
};

// Compilation
pub use crate::compiler::{
    ConditionCompiler, FormatOptions, OperatorRenderer, build_conditions_string, format_value,
    render_operator,
};
pub use crate::schema::FieldTypeMap;

// Query synthesis and validation
pub use crate::query::{
    AggregationSpec, AlertFormData, DEFAULT_TIMESTAMP_COLUMN, QuerySettings,
    generate_sql_query, generate_where_clause,
};
pub use crate::validation::{ValidationRequest, validate_query};

// Error types
pub use crate::error::{ConfigError, ConversionError, QueryValidationError, TreeParseError};
