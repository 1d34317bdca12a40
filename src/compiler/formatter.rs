use crate::condition::ConditionValue;
use crate::schema::FieldTypeMap;

/// Operator spellings whose values must reach the renderer bare, because the
/// `LIKE '%...%'` template adds its own quotes and wildcards. Case-sensitive.
const PATTERN_OPERATORS: &[&str] = &["contains", "Contains", "not_contains", "NotContains"];

/// Formats a comparison value for the `{value}` slot of an operator template.
///
/// Without a field map every value is quoted. With one, numeric columns and
/// pattern operators get the bare value; everything else is quoted. A missing
/// or empty value quotes to `''`.
pub fn format_value(
    column: &str,
    operator: &str,
    value: Option<&ConditionValue>,
    field_types: Option<&FieldTypeMap>,
) -> String {
    let Some(field_types) = field_types else {
        return quote(value);
    };

    if field_types.is_numeric(column) || PATTERN_OPERATORS.contains(&operator) {
        value.map(ToString::to_string).unwrap_or_default()
    } else {
        quote(value)
    }
}

fn quote(value: Option<&ConditionValue>) -> String {
    match value {
        Some(v) if !v.is_empty() => format!("'{}'", v),
        _ => "''".to_string(),
    }
}
