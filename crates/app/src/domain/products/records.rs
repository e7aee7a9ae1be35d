//! Product Records

use crate::{domain::platforms::Platform, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// A synthetic marketplace listing produced for a single search.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub title: String,

    /// Price in rupees, rounded to two decimals.
    pub price: f64,

    /// "Was" price for marketplaces that advertise discounts.
    pub original_price: Option<f64>,

    pub image: String,
    pub url: String,
    pub platform: Platform,

    /// Star rating rounded to one decimal.
    pub rating: Option<f64>,

    /// Relevance to the query in `[0, 1]`; zero until ranked.
    pub similarity_score: f64,
}
