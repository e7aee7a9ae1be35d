//! Search history service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::history::{
    data::NewSearch, errors::HistoryServiceError, records::SearchHistoryRecord,
    repository::PgHistoryRepository,
};

/// Number of searches returned by the history listing.
pub const RECENT_SEARCHES_LIMIT: u32 = 10;

#[derive(Debug, Clone)]
pub struct PgHistoryService {
    repository: PgHistoryRepository,
}

impl PgHistoryService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgHistoryRepository::new(pool),
        }
    }
}

#[async_trait]
impl HistoryService for PgHistoryService {
    async fn record_search(
        &self,
        search: NewSearch,
    ) -> Result<SearchHistoryRecord, HistoryServiceError> {
        self.repository
            .create_search(search)
            .await
            .map_err(Into::into)
    }

    async fn recent_searches(
        &self,
        limit: u32,
    ) -> Result<Vec<SearchHistoryRecord>, HistoryServiceError> {
        self.repository
            .recent_searches(limit)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
/// Search history persistence operations.
pub trait HistoryService: Send + Sync {
    /// Records a completed search.
    async fn record_search(
        &self,
        search: NewSearch,
    ) -> Result<SearchHistoryRecord, HistoryServiceError>;

    /// Retrieves the most recent searches, newest first.
    async fn recent_searches(
        &self,
        limit: u32,
    ) -> Result<Vec<SearchHistoryRecord>, HistoryServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};
    use testresult::TestResult;

    use crate::{domain::history::records::SearchUuid, test::TestContext};

    use super::*;

    fn search_at(query: &str, results_count: usize, searched_at: Timestamp) -> NewSearch {
        NewSearch {
            uuid: SearchUuid::new(),
            query: query.to_string(),
            searched_at,
            results_count,
        }
    }

    #[tokio::test]
    async fn record_search_round_trips() -> TestResult {
        let ctx = TestContext::new().await;
        let search = NewSearch::completed("  Running Shoes ", 11);
        let searched_at = search.searched_at;

        let recorded = ctx.history.record_search(search.clone()).await?;

        assert_eq!(recorded.uuid, search.uuid);
        assert_eq!(recorded.query, "  Running Shoes ");
        assert_eq!(recorded.results_count, 11);

        let recent = ctx.history.recent_searches(RECENT_SEARCHES_LIMIT).await?;
        let stored = recent.first();

        assert_eq!(stored.map(|r| r.query.as_str()), Some("  Running Shoes "));
        assert_eq!(stored.map(|r| r.results_count), Some(11));
        assert!(
            stored.is_some_and(|r| {
                r.searched_at.duration_since(searched_at).abs() < SignedDuration::from_secs(1)
            }),
            "timestamp should survive within a second"
        );

        Ok(())
    }

    #[tokio::test]
    async fn recent_searches_are_newest_first() -> TestResult {
        let ctx = TestContext::new().await;
        let now = Timestamp::now();

        for (offset, query) in [(3, "oldest"), (1, "newest"), (2, "middle")] {
            ctx.history
                .record_search(search_at(
                    query,
                    1,
                    now - SignedDuration::from_mins(offset),
                ))
                .await?;
        }

        let queries: Vec<String> = ctx
            .history
            .recent_searches(RECENT_SEARCHES_LIMIT)
            .await?
            .into_iter()
            .map(|r| r.query)
            .collect();

        assert_eq!(queries, vec!["newest", "middle", "oldest"]);

        Ok(())
    }

    #[tokio::test]
    async fn recent_searches_respects_limit() -> TestResult {
        let ctx = TestContext::new().await;

        for i in 0..12 {
            ctx.history
                .record_search(NewSearch::completed(format!("query {i}"), i))
                .await?;
        }

        let recent = ctx.history.recent_searches(RECENT_SEARCHES_LIMIT).await?;

        assert_eq!(recent.len(), 10);

        Ok(())
    }

    #[tokio::test]
    async fn recent_searches_empty_when_none_recorded() -> TestResult {
        let ctx = TestContext::new().await;

        let recent = ctx.history.recent_searches(RECENT_SEARCHES_LIMIT).await?;

        assert!(recent.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn recording_the_same_search_twice_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let search = NewSearch::completed("lamp", 4);

        ctx.history.record_search(search.clone()).await?;

        let result = ctx.history.record_search(search).await;

        assert!(
            matches!(result, Err(HistoryServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }
}
