use crate::schema::FieldTypeMap;
use serde::Deserialize;

/// How a condition tree is projected into text.
///
/// The defaults give display mode: lower-case connectives, every value quoted,
/// operators as the user wrote them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions<'a> {
    /// Upper-case connectives and rewrite `contains`/`not_contains` into `LIKE`.
    pub sql_mode: bool,
    /// Prepend `WHERE ` to a non-empty result. Only honoured in SQL mode.
    pub add_where_prefix: bool,
    /// Quote values according to `stream_field_type_map`.
    pub format_values: bool,
    pub stream_field_type_map: Option<&'a FieldTypeMap>,
}

impl<'a> FormatOptions<'a> {
    /// Human-readable preview.
    pub fn display() -> Self {
        Self::default()
    }

    /// SQL fragment without a `WHERE` prefix and without type-aware quoting.
    pub fn sql() -> Self {
        Self {
            sql_mode: true,
            ..Self::default()
        }
    }

    /// Options used for alert evaluation queries: SQL mode, `WHERE` prefix, typed values.
    pub fn where_clause(field_types: &'a FieldTypeMap) -> Self {
        Self::sql().with_where_prefix().with_field_types(field_types)
    }

    pub fn with_where_prefix(mut self) -> Self {
        self.add_where_prefix = true;
        self
    }

    /// Enables type-aware quoting against `field_types`.
    pub fn with_field_types(mut self, field_types: &'a FieldTypeMap) -> Self {
        self.format_values = true;
        self.stream_field_type_map = Some(field_types);
        self
    }
}

/// Owned, JSON-decodable form of `FormatOptions` as sent by the editor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptionsPayload {
    #[serde(default)]
    pub sql_mode: bool,
    #[serde(default)]
    pub add_where_prefix: bool,
    #[serde(default)]
    pub format_values: bool,
    #[serde(default)]
    pub stream_field_type_map: Option<FieldTypeMap>,
}

impl FormatOptionsPayload {
    /// Borrows the payload as compiler options.
    pub fn options(&self) -> FormatOptions<'_> {
        FormatOptions {
            sql_mode: self.sql_mode,
            add_where_prefix: self.add_where_prefix,
            format_values: self.format_values,
            stream_field_type_map: self.stream_field_type_map.as_ref(),
        }
    }
}
