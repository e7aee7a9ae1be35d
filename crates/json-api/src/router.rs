//! API Router

use salvo::Router;

use crate::{catalog, healthcheck, history};

/// Routes served under `/api`.
pub fn api_router() -> Router {
    Router::with_path("api")
        .get(healthcheck::handler)
        .push(Router::with_path("search").get(catalog::search::handler))
        .push(Router::with_path("stats").get(catalog::stats::handler))
        .push(Router::with_path("history").get(history::index::handler))
}
