//! Search Handler

use salvo::{oapi::extract::QueryParam, prelude::*};
use tracing::debug;

use pricefinder_app::domain::{history::data::NewSearch, search::SearchQuery};

use crate::{
    catalog::models::ProductResponse,
    extensions::*,
    observability::{observe_history_write_failure, observe_search},
};

/// Search Handler
///
/// Searches every marketplace and returns the most relevant listings, best
/// first. Queries shorter than two characters return an empty list.
#[endpoint(tags("search"), summary = "Search Products")]
pub(crate) async fn handler(
    q: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let query = match SearchQuery::parse(q.into_inner()) {
        Ok(query) => query,
        Err(reason) => {
            debug!("skipping search: {reason}");

            return Ok(Json(Vec::new()));
        }
    };

    let results = state.search.search(&query);

    observe_search("search", results.len());

    let recorded = state
        .history
        .record_search(NewSearch::completed(query.into_inner(), results.len()))
        .await
        .or_warn("failed to record search history");

    if recorded.is_none() {
        observe_history_write_failure();
    }

    Ok(Json(results.into_iter().map(Into::into).collect()))
}
