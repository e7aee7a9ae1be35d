//! Search History Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pricefinder_app::domain::history::{RECENT_SEARCHES_LIMIT, records::SearchHistoryRecord};

use crate::extensions::*;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SearchHistoryResponse {
    /// The unique identifier of the search
    pub id: Uuid,

    /// The query as submitted
    pub query: String,

    /// When the search ran, as an RFC 3339 UTC timestamp
    pub timestamp: String,

    /// Number of listings returned
    pub results_count: usize,
}

impl From<SearchHistoryRecord> for SearchHistoryResponse {
    fn from(search: SearchHistoryRecord) -> Self {
        SearchHistoryResponse {
            id: search.uuid.into(),
            query: search.query,
            timestamp: search.searched_at.to_string(),
            results_count: search.results_count,
        }
    }
}

/// Search History Index Handler
///
/// Returns the ten most recent searches, newest first.
#[endpoint(tags("history"), summary = "Recent Searches")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<SearchHistoryResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let searches = state
        .history
        .recent_searches(RECENT_SEARCHES_LIMIT)
        .await
        .or_500("failed to fetch search history")?;

    Ok(Json(searches.into_iter().map(Into::into).collect()))
}
