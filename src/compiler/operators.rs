use ahash::AHashMap;

/// Renders one comparison for a given operator.
///
/// `operator` is the spelling the user chose and `value` is already formatted
/// (see `format_value`). Registered in a `ConditionCompiler` under a
/// lower-cased name.
pub trait OperatorRenderer: Send + Sync {
    fn name(&self) -> &str;
    fn render(&self, column: &str, operator: &str, value: &str, sql_mode: bool) -> String;
}

/// `{column} {operator} {value}` in both modes.
pub struct InfixRenderer {
    name: &'static str,
}

impl OperatorRenderer for InfixRenderer {
    fn name(&self) -> &str {
        self.name
    }

    fn render(&self, column: &str, operator: &str, value: &str, _sql_mode: bool) -> String {
        format!("{} {} {}", column, operator, value)
    }
}

/// Substring match: the editor keyword in display mode, `LIKE '%value%'` in SQL mode.
pub struct PatternRenderer {
    name: &'static str,
    keyword: &'static str,
    sql_keyword: &'static str,
}

impl OperatorRenderer for PatternRenderer {
    fn name(&self) -> &str {
        self.name
    }

    fn render(&self, column: &str, _operator: &str, value: &str, sql_mode: bool) -> String {
        if sql_mode {
            format!("{} {} '%{}%'", column, self.sql_keyword, value)
        } else {
            format!("{} {} {}", column, self.keyword, value)
        }
    }
}

/// Renderer for operators missing from the table; identical to the infix rule.
pub(super) const PASS_THROUGH: InfixRenderer = InfixRenderer { name: "" };

/// Master macro to define the default operator table, its registration, and lookup by name.
macro_rules! define_operator_table {
    ( $( ($name:literal, Infix) ),* $(,)? ; $( ($pat_name:literal, Pattern, $keyword:literal, $sql_keyword:literal) ),* $(,)? ) => {
        pub(super) fn register_default_renderers(
            registry: &mut AHashMap<String, Box<dyn OperatorRenderer>>,
        ) {
            $( registry.insert($name.to_string(), Box::new(InfixRenderer { name: $name })); )*
            $(
                registry.insert(
                    $pat_name.to_string(),
                    Box::new(PatternRenderer { name: $pat_name, keyword: $keyword, sql_keyword: $sql_keyword }),
                );
            )*
        }

        pub(super) fn create_renderer_by_name(name: &str) -> Option<Box<dyn OperatorRenderer>> {
            match name {
                $( $name => Some(Box::new(InfixRenderer { name: $name })), )*
                $( $pat_name => Some(Box::new(PatternRenderer { name: $pat_name, keyword: $keyword, sql_keyword: $sql_keyword })), )*
                _ => None,
            }
        }
    };
}

define_operator_table! {
    // Comparisons
    ("=", Infix),
    ("<>", Infix),
    ("<", Infix),
    (">", Infix),
    ("<=", Infix),
    (">=", Infix),

    ; // Separator between comparisons and pattern operators

    ("contains", Pattern, "contains", "LIKE"),
    ("not_contains", Pattern, "not_contains", "NOT LIKE"),
    ("notcontains", Pattern, "not_contains", "NOT LIKE"),
}
