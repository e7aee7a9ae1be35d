//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use pricefinder_app::domain::{history::MockHistoryService, search::MockSearchService};

use crate::state::State;

pub(crate) fn strict_search_mock() -> MockSearchService {
    let mut search = MockSearchService::new();

    search.expect_search().never();
    search.expect_stats().never();

    search
}

pub(crate) fn strict_history_mock() -> MockHistoryService {
    let mut history = MockHistoryService::new();

    history.expect_record_search().never();
    history.expect_recent_searches().never();

    history
}

pub(crate) fn state_with(search: MockSearchService, history: MockHistoryService) -> Arc<State> {
    Arc::new(State::new(Arc::new(search), Arc::new(history)))
}

pub(crate) fn api_service(
    search: MockSearchService,
    history: MockHistoryService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(search, history)))
            .push(route),
    )
}
