//! Price Statistics Records

use crate::domain::platforms::Platform;

/// Price summary for one marketplace.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformStats {
    pub platform: Platform,
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
    pub count: usize,
}

impl PlatformStats {
    pub(crate) fn first(platform: Platform, price: f64) -> Self {
        Self {
            platform,
            min_price: price,
            max_price: price,
            avg_price: price,
            count: 1,
        }
    }

    /// Fold another price into the summary.
    #[expect(
        clippy::cast_precision_loss,
        reason = "listing counts are tiny"
    )]
    pub(crate) fn observe(&mut self, price: f64) {
        let count = self.count as f64;

        self.min_price = self.min_price.min(price);
        self.max_price = self.max_price.max(price);
        self.avg_price = (self.avg_price * count + price) / (count + 1.0);
        self.count += 1;
    }
}

/// Per-marketplace price summaries for a search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceStats {
    /// One entry per marketplace, in the order each first appeared.
    pub stats: Vec<PlatformStats>,

    /// Number of listings summarised.
    pub total_products: usize,
}
