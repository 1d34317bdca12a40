use thiserror::Error;

/// Errors that can occur while decoding editor payloads (trees, forms, field maps).
#[derive(Error, Debug, Clone)]
pub enum TreeParseError {
    #[error("Failed to parse condition tree JSON: {0}")]
    Json(String),

    #[error("Failed to parse alert form JSON: {0}")]
    Form(String),

    #[error("Failed to parse stream field type map JSON: {0}")]
    FieldMap(String),
}

/// Local pre-validation failures, raised before a query is sent to the search service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryValidationError {
    #[error("Query is empty")]
    EmptyQuery,

    #[error("Selecting all columns is not allowed, use explicit projections instead of 'SELECT *'")]
    SelectStarNotAllowed,

    #[error("Query must start with SELECT, found: '{0}'")]
    MustStartWithSelect(String),
}

/// Errors that can occur when converting a legacy editor format into a `ConditionTree`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Condition at position {index} has a blank column")]
    BlankColumn { index: usize },

    #[error("Invalid legacy data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while loading query settings.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Failed to read settings file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse settings file '{path}': {message}")]
    Parse { path: String, message: String },
}
