//! Checks applied to a synthesized query before it is sent to the search
//! service, and the request body that service expects.
//!
//! Syntax errors are only detected remotely; this module rejects the cases
//! that never need a round trip.

use crate::error::QueryValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SELECT_STAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bselect\s+\*").expect("select-star pattern is a valid regex")
});

/// Rejects blank queries, queries not starting with `SELECT`, and `SELECT *` projections.
pub fn validate_query(sql: &str) -> Result<(), QueryValidationError> {
    let trimmed = sql.trim();
    if trimmed.is_empty() {
        return Err(QueryValidationError::EmptyQuery);
    }

    let first_word = trimmed.split_whitespace().next().unwrap_or_default();
    if !first_word.eq_ignore_ascii_case("select") {
        return Err(QueryValidationError::MustStartWithSelect(
            first_word.to_string(),
        ));
    }

    if SELECT_STAR.is_match(trimmed) {
        return Err(QueryValidationError::SelectStarNotAllowed);
    }

    Ok(())
}

/// Query part of a search request. Times are epoch microseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub sql: String,
    pub start_time: i64,
    pub end_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_fn: Option<String>,
}

/// Body of a validate-only search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub query: SearchQuery,
    pub validate: bool,
}

impl ValidationRequest {
    /// Runs the local checks and wraps `sql` into a request body.
    pub fn prepare(
        sql: impl Into<String>,
        start_time: i64,
        end_time: i64,
    ) -> Result<Self, QueryValidationError> {
        let sql = sql.into();
        validate_query(&sql)?;
        Ok(Self {
            query: SearchQuery {
                sql,
                start_time,
                end_time,
                query_fn: None,
            },
            validate: true,
        })
    }

    /// Attaches a VRL function to run over the results.
    pub fn with_query_fn(mut self, query_fn: impl Into<String>) -> Self {
        self.query.query_fn = Some(query_fn.into());
        self
    }
}
