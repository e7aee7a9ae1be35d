//! Search History Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::history::{
    data::NewSearch,
    records::{SearchHistoryRecord, SearchUuid},
};

const CREATE_SEARCH_SQL: &str = include_str!("sql/create_search.sql");
const RECENT_SEARCHES_SQL: &str = include_str!("sql/recent_searches.sql");

/// PostgreSQL-backed search history repository.
#[derive(Debug, Clone)]
pub(crate) struct PgHistoryRepository {
    pool: PgPool,
}

impl PgHistoryRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_search(
        &self,
        search: NewSearch,
    ) -> Result<SearchHistoryRecord, sqlx::Error> {
        let results_count =
            i64::try_from(search.results_count).map_err(|e| sqlx::Error::ColumnDecode {
                index: "results_count".to_string(),
                source: Box::new(e),
            })?;

        query_as::<Postgres, SearchHistoryRecord>(CREATE_SEARCH_SQL)
            .bind(search.uuid.into_uuid())
            .bind(search.query)
            .bind(SqlxTimestamp::from(search.searched_at))
            .bind(results_count)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn recent_searches(
        &self,
        limit: u32,
    ) -> Result<Vec<SearchHistoryRecord>, sqlx::Error> {
        query_as::<Postgres, SearchHistoryRecord>(RECENT_SEARCHES_SQL)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SearchHistoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let results_count: i64 = row.try_get("results_count")?;

        let results_count =
            usize::try_from(results_count).map_err(|e| sqlx::Error::ColumnDecode {
                index: "results_count".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: SearchUuid::from_uuid(row.try_get("uuid")?),
            query: row.try_get("query")?,
            searched_at: row.try_get::<SqlxTimestamp, _>("searched_at")?.to_jiff(),
            results_count,
        })
    }
}
