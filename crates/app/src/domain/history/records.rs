//! Search History Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Search UUID
pub type SearchUuid = TypedUuid<SearchHistoryRecord>;

/// Search History Record
#[derive(Debug, Clone)]
pub struct SearchHistoryRecord {
    pub uuid: SearchUuid,
    pub query: String,
    pub searched_at: Timestamp,
    pub results_count: usize,
}
