//! Catalog response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pricefinder_app::domain::{
    products::records::ProductRecord,
    stats::{PlatformStats, PriceStats},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Listing identifier, fresh for every search
    pub id: Uuid,

    /// Listing title
    pub title: String,

    /// Price in rupees
    pub price: f64,

    /// Price before discount, when the marketplace shows one
    pub original_price: Option<f64>,

    /// Placeholder image URL
    pub image: String,

    /// Listing URL
    pub url: String,

    /// Marketplace name
    pub platform: String,

    /// Star rating out of five
    pub rating: Option<f64>,

    /// Relevance to the query, between 0 and 1
    pub similarity_score: f64,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.uuid.into(),
            title: product.title,
            price: product.price,
            original_price: product.original_price,
            image: product.image,
            url: product.url,
            platform: product.platform.label().to_string(),
            rating: product.rating,
            similarity_score: product.similarity_score,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PlatformStatsResponse {
    /// Marketplace name
    pub platform: String,

    /// Cheapest listing price
    pub min_price: f64,

    /// Most expensive listing price
    pub max_price: f64,

    /// Mean listing price
    pub avg_price: f64,

    /// Number of listings
    pub count: usize,
}

impl From<PlatformStats> for PlatformStatsResponse {
    fn from(stats: PlatformStats) -> Self {
        PlatformStatsResponse {
            platform: stats.platform.label().to_string(),
            min_price: stats.min_price,
            max_price: stats.max_price,
            avg_price: stats.avg_price,
            count: stats.count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StatsResponse {
    /// Price summary per marketplace
    pub stats: Vec<PlatformStatsResponse>,

    /// Number of listings summarised
    pub total_products: usize,
}

impl From<PriceStats> for StatsResponse {
    fn from(stats: PriceStats) -> Self {
        StatsResponse {
            stats: stats.stats.into_iter().map(Into::into).collect(),
            total_products: stats.total_products,
        }
    }
}
