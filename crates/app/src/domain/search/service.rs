//! Search service.

use mockall::automock;
use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::domain::{
    products::records::ProductRecord,
    search::{catalog::Catalog, query::SearchQuery},
    stats::{PriceStats, aggregate},
};

/// Catalog search backed by a fresh random source per call.
#[derive(Debug, Clone, Default)]
pub struct CatalogSearchService {
    catalog: Catalog,
}

impl CatalogSearchService {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl SearchService for CatalogSearchService {
    fn search(&self, query: &SearchQuery) -> Vec<ProductRecord> {
        let mut rng = StdRng::from_entropy();

        let results = self.catalog.search(query, &mut rng);

        debug!(
            query = query.as_str(),
            results = results.len(),
            "catalog search completed"
        );

        results
    }

    fn stats(&self, query: &SearchQuery) -> PriceStats {
        aggregate(&self.search(query))
    }
}

#[automock]
pub trait SearchService: Send + Sync {
    /// Ranked listings for a query.
    fn search(&self, query: &SearchQuery) -> Vec<ProductRecord>;

    /// Per-marketplace price summary of a fresh search for the query.
    fn stats(&self, query: &SearchQuery) -> PriceStats;
}
