//! SearchQuery - Validated search text

use std::fmt;

use crate::domain::errors::DomainError;

/// Message returned when the `query` parameter is missing or empty
pub const QUERY_REQUIRED: &str = "Query parameter is required";

/// Non-empty search text, kept exactly as given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validate a raw, possibly missing, query parameter
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw {
            Some(text) if !text.is_empty() => Ok(Self(text.to_string())),
            _ => Err(DomainError::Validation(QUERY_REQUIRED.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Query text in the `k=` form of a search URL.
    ///
    /// Spaces become `+`; every other reserved character is percent-encoded.
    pub fn keywords(&self) -> String {
        self.0
            .split(' ')
            .map(|word| urlencoding::encode(word).into_owned())
            .collect::<Vec<_>>()
            .join("+")
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
