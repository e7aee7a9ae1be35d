//! Search History Data

use jiff::Timestamp;

use crate::domain::history::records::SearchUuid;

/// A completed search, ready to be recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSearch {
    pub uuid: SearchUuid,

    /// Query exactly as submitted.
    pub query: String,

    /// When the search completed.
    pub searched_at: Timestamp,

    /// Number of listings returned.
    pub results_count: usize,
}

impl NewSearch {
    /// Describe a search that just completed.
    #[must_use]
    pub fn completed(query: impl Into<String>, results_count: usize) -> Self {
        Self {
            uuid: SearchUuid::new(),
            query: query.into(),
            searched_at: Timestamp::now(),
            results_count,
        }
    }
}
