//! Price Stats Handler

use salvo::{oapi::extract::QueryParam, prelude::*};
use tracing::debug;

use pricefinder_app::domain::{search::SearchQuery, stats::PriceStats};

use crate::{catalog::models::StatsResponse, extensions::*, observability::observe_search};

/// Price Stats Handler
///
/// Runs a fresh search for the query and summarises listing prices per
/// marketplace. The listings may differ from an earlier search for the same
/// query.
#[endpoint(tags("search"), summary = "Price Statistics")]
pub(crate) async fn handler(
    q: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<StatsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let stats = match SearchQuery::parse(q.into_inner()) {
        Ok(query) => state.search.stats(&query),
        Err(reason) => {
            debug!("skipping stats: {reason}");

            PriceStats::default()
        }
    };

    observe_search("stats", stats.total_products);

    Ok(Json(stats.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use pricefinder_app::domain::{
        platforms::Platform,
        search::MockSearchService,
        stats::{PlatformStats, aggregate},
    };

    use crate::{
        catalog::tests::make_product,
        test_helpers::{api_service, strict_history_mock, strict_search_mock},
    };

    use super::*;

    fn make_service(search: MockSearchService) -> Service {
        api_service(
            search,
            strict_history_mock(),
            Router::with_path("stats").get(handler),
        )
    }

    #[tokio::test]
    async fn test_stats_summarise_each_platform() -> TestResult {
        let mut search = MockSearchService::new();

        search
            .expect_stats()
            .once()
            .withf(|query| query.as_str() == "lamp")
            .return_once(|_| {
                aggregate(&[
                    make_product(Platform::Amazon, "lamp - Premium Quality", 100.0),
                    make_product(Platform::Meesho, "Affordable lamp", 50.0),
                    make_product(Platform::Amazon, "Best lamp for Home", 200.0),
                    make_product(Platform::Amazon, "lamp Professional Grade", 300.0),
                ])
            });

        search.expect_search().never();

        let response: StatsResponse = TestClient::get("http://example.com/stats?q=lamp")
            .send(&make_service(search))
            .await
            .take_json()
            .await?;

        assert_eq!(response.total_products, 4);

        let platforms: Vec<&str> = response.stats.iter().map(|s| s.platform.as_str()).collect();

        assert_eq!(platforms, vec!["Amazon", "Meesho"]);

        let amazon = response.stats.first();

        assert_eq!(amazon.map(|s| s.count), Some(3));
        assert!(
            amazon.is_some_and(|s| (s.avg_price - 200.0).abs() < 1e-9
                && (s.min_price - 100.0).abs() < 1e-9
                && (s.max_price - 300.0).abs() < 1e-9),
            "unexpected amazon stats"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_stats_pass_single_platform_through() -> TestResult {
        let mut search = MockSearchService::new();

        search.expect_stats().once().return_once(|_| PriceStats {
            stats: vec![PlatformStats {
                platform: Platform::JioMart,
                min_price: 10.0,
                max_price: 10.0,
                avg_price: 10.0,
                count: 1,
            }],
            total_products: 1,
        });

        search.expect_search().never();

        let response: StatsResponse = TestClient::get("http://example.com/stats?q=rice")
            .send(&make_service(search))
            .await
            .take_json()
            .await?;

        assert_eq!(
            response.stats.first().map(|s| s.platform.as_str()),
            Some("JioMart")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_short_query_returns_empty_stats() -> TestResult {
        let response: StatsResponse = TestClient::get("http://example.com/stats?q=x")
            .send(&make_service(strict_search_mock()))
            .await
            .take_json()
            .await?;

        assert!(response.stats.is_empty());
        assert_eq!(response.total_products, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_query_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/stats")
            .send(&make_service(strict_search_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
