use crate::condition::{ConditionNode, ConditionTree, GroupNode};
use ahash::AHashMap;
use itertools::Itertools;
use std::fmt;
use std::sync::LazyLock;
use tracing::{debug, trace};

mod formatter;
mod operators;
mod options;

pub use formatter::format_value;
pub use operators::OperatorRenderer;
pub use options::{FormatOptions, FormatOptionsPayload};

use operators::{PASS_THROUGH, create_renderer_by_name, register_default_renderers};

static DEFAULT_COMPILER: LazyLock<ConditionCompiler> =
    LazyLock::new(|| ConditionCompiler::builder().build());

/// Compiles a condition tree with the default operator table.
///
/// Never fails: incomplete conditions and empty groups compile to nothing and
/// their siblings still render.
pub fn build_conditions_string(tree: &ConditionTree, options: &FormatOptions<'_>) -> String {
    DEFAULT_COMPILER.compile(tree, options)
}

/// Renders one comparison with the default operator table.
pub fn render_operator(column: &str, operator: &str, formatted_value: &str, sql_mode: bool) -> String {
    DEFAULT_COMPILER.render_operator(column, operator, formatted_value, sql_mode)
}

/// Turns condition trees into display strings or SQL fragments.
///
/// Holds only the operator registry, so one instance can serve any number of
/// concurrent callers.
pub struct ConditionCompiler {
    registry: AHashMap<String, Box<dyn OperatorRenderer>>,
}

pub struct ConditionCompilerBuilder {
    registry: AHashMap<String, Box<dyn OperatorRenderer>>,
}

impl Default for ConditionCompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionCompilerBuilder {
    pub fn new() -> Self {
        let mut registry: AHashMap<String, Box<dyn OperatorRenderer>> = AHashMap::new();
        register_default_renderers(&mut registry);
        Self { registry }
    }

    /// Maps an editor-specific operator spelling onto a built-in rule.
    /// Unknown built-in names leave the registry untouched.
    pub fn with_operator_alias(mut self, user_operator: &str, builtin_operator: &str) -> Self {
        if let Some(renderer) = create_renderer_by_name(&builtin_operator.to_lowercase()) {
            self.registry.insert(user_operator.to_lowercase(), renderer);
        }
        self
    }

    pub fn with_custom_operator(mut self, renderer: Box<dyn OperatorRenderer>) -> Self {
        self.registry.insert(renderer.name().to_lowercase(), renderer);
        self
    }

    pub fn build(self) -> ConditionCompiler {
        ConditionCompiler {
            registry: self.registry,
        }
    }
}

impl ConditionCompiler {
    pub fn builder() -> ConditionCompilerBuilder {
        ConditionCompilerBuilder::new()
    }

    pub fn compile(&self, tree: &ConditionTree, options: &FormatOptions<'_>) -> String {
        let compiled = match tree {
            ConditionTree::Group(group) => self.compile_group(group, options),
            ConditionTree::Condition(condition) => {
                self.compile_condition(condition, options).unwrap_or_default()
            }
        };

        if options.sql_mode && options.add_where_prefix && !compiled.trim().is_empty() {
            format!("WHERE {}", compiled)
        } else {
            compiled
        }
    }

    /// Case-insensitive lookup; operators outside the table render as `{column} {operator} {value}`.
    pub fn render_operator(
        &self,
        column: &str,
        operator: &str,
        formatted_value: &str,
        sql_mode: bool,
    ) -> String {
        let renderer: &dyn OperatorRenderer = match self.registry.get(&operator.to_lowercase()) {
            Some(renderer) => renderer.as_ref(),
            None => &PASS_THROUGH,
        };
        renderer.render(column, operator, formatted_value, sql_mode)
    }

    /// Joins the rendered children. The first child never gets a connective;
    /// later ones are prefixed with the joiner they carry in this list.
    fn compile_group(&self, group: &GroupNode, options: &FormatOptions<'_>) -> String {
        group
            .conditions
            .iter()
            .enumerate()
            .filter_map(|(index, child)| {
                let rendered = match child {
                    ConditionTree::Group(nested) => {
                        let inner = self.compile_group(nested, options);
                        if inner.is_empty() {
                            trace!(index, "empty nested group skipped");
                            return None;
                        }
                        format!("({})", inner)
                    }
                    ConditionTree::Condition(condition) => {
                        self.compile_condition(condition, options)?
                    }
                };

                match child.joiner() {
                    Some(joiner) if index > 0 => {
                        Some(format!("{} {}", joiner.keyword(options.sql_mode), rendered))
                    }
                    _ => Some(rendered),
                }
            })
            .join(" ")
    }

    fn compile_condition(
        &self,
        condition: &ConditionNode,
        options: &FormatOptions<'_>,
    ) -> Option<String> {
        if !condition.is_complete() {
            debug!(
                column = %condition.column,
                operator = %condition.operator,
                "incomplete condition skipped"
            );
            return None;
        }

        let field_types = if options.format_values {
            options.stream_field_type_map
        } else {
            None
        };
        let value = format_value(
            &condition.column,
            &condition.operator,
            condition.value.as_ref(),
            field_types,
        );

        let rendered =
            self.render_operator(&condition.column, &condition.operator, &value, options.sql_mode);
        trace!(%rendered, "condition rendered");
        Some(rendered)
    }
}

/// Display-mode preview of the tree.
impl fmt::Display for ConditionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", build_conditions_string(self, &FormatOptions::display()))
    }
}
