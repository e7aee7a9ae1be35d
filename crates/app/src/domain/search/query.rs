//! Search Query

use thiserror::Error;

/// Queries shorter than this, once trimmed, are not searched.
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchQueryError {
    #[error("query must have at least two characters")]
    TooShort,
}

/// A query long enough to be searched.
///
/// Holds the query exactly as submitted; trimming only decides whether it is
/// searchable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validate a raw query.
    ///
    /// # Errors
    ///
    /// Returns [`SearchQueryError::TooShort`] when the trimmed query has fewer
    /// than [`MIN_QUERY_CHARS`] characters.
    pub fn parse(raw: impl Into<String>) -> Result<Self, SearchQueryError> {
        let raw = raw.into();

        if raw.trim().chars().count() < MIN_QUERY_CHARS {
            return Err(SearchQueryError::TooShort);
        }

        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}
