//! State

use std::sync::Arc;

use pricefinder_app::{
    context::AppContext,
    domain::{history::HistoryService, search::SearchService},
};

/// Services shared by every handler.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) search: Arc<dyn SearchService>,
    pub(crate) history: Arc<dyn HistoryService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(search: Arc<dyn SearchService>, history: Arc<dyn HistoryService>) -> Self {
        Self { search, history }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: &AppContext) -> Arc<Self> {
        Arc::new(Self::new(
            Arc::clone(&app.search),
            Arc::clone(&app.history),
        ))
    }
}
