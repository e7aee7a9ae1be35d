//! Ranking

use crate::domain::{products::records::ProductRecord, search::similarity::score};

/// Listings must score strictly above this to be returned.
pub const MIN_SIMILARITY: f64 = 0.3;

/// Maximum number of listings returned for a search.
pub const MAX_RESULTS: usize = 15;

/// Score every listing against `query`, drop weak matches and return the best
/// [`MAX_RESULTS`], most relevant first.
///
/// Equal scores keep their generation order.
pub fn rank(query: &str, listings: Vec<ProductRecord>) -> Vec<ProductRecord> {
    let mut ranked: Vec<ProductRecord> = listings
        .into_iter()
        .map(|mut listing| {
            listing.similarity_score = score(query, &listing.title);
            listing
        })
        .filter(|listing| listing.similarity_score > MIN_SIMILARITY)
        .collect();

    ranked.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
    ranked.truncate(MAX_RESULTS);

    ranked
}
