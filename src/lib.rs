//! # Jouken - Condition Tree Compiler for Alert Queries
//!
//! **Jouken** turns the filter trees built in a visual condition editor (nested
//! groups of comparisons joined by AND/OR) into text. The same tree compiles
//! into a human-readable preview or into a SQL `WHERE` clause, which is then
//! wrapped into the aggregation query an alert is evaluated with.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Tree**: Decode the editor's JSON into a `ConditionTree` (or convert an older format via `IntoConditionTree`).
//! 2.  **Describe the Stream**: Build a `FieldTypeMap` so numeric columns are emitted unquoted.
//! 3.  **Compile**: Call `build_conditions_string` with `FormatOptions` for a preview or a SQL fragment.
//! 4.  **Synthesize**: Call `generate_sql_query` with an `AlertFormData` to get the full evaluation query, then `validate_query` before sending it on.
//!
//! Compilation is a pure function of its inputs. It never fails: incomplete
//! conditions and empty groups are skipped.
//!
//! ## Quick Start
//!
//! ```rust
//! use jouken::prelude::*;
//!
//! let tree = ConditionTree::from_json(r#"{
//!     "filterType": "group",
//!     "logicalOperator": "AND",
//!     "conditions": [
//!         { "filterType": "condition", "column": "age", "operator": ">", "value": 30 },
//!         { "filterType": "condition", "column": "city", "operator": "=", "value": "delhi", "logicalOperator": "AND" }
//!     ]
//! }"#).unwrap();
//!
//! // Preview for the editor
//! assert_eq!(tree.to_string(), "age > '30' and city = 'delhi'");
//!
//! // SQL with type-aware quoting
//! let field_types: FieldTypeMap = [("age", "Int64"), ("city", "Utf8")].into_iter().collect();
//! let options = FormatOptions::where_clause(&field_types);
//! assert_eq!(
//!     build_conditions_string(&tree, &options),
//!     "WHERE age > 30 AND city = 'delhi'"
//! );
//!
//! // Full alert evaluation query
//! let form = AlertFormData::new("logs", tree)
//!     .with_aggregation(AggregationSpec::new("avg", "age").with_group_by(["city"]));
//! let sql = generate_sql_query(&form, &field_types, true, DEFAULT_TIMESTAMP_COLUMN);
//! assert!(sql.starts_with("SELECT histogram(_timestamp) AS zo_sql_key, avg(age) as zo_sql_val"));
//! assert!(validate_query(&sql).is_ok());
//! ```

pub mod compiler;
pub mod condition;
pub mod error;
pub mod prelude;
pub mod query;
pub mod schema;
pub mod validation;
