//! Price statistics reducer.

use rustc_hash::FxHashMap;

use crate::domain::{
    platforms::Platform,
    products::records::ProductRecord,
    stats::records::{PlatformStats, PriceStats},
};

/// Summarise listing prices per marketplace.
pub fn aggregate(products: &[ProductRecord]) -> PriceStats {
    let mut positions: FxHashMap<Platform, usize> = FxHashMap::default();
    let mut stats: Vec<PlatformStats> = Vec::new();

    for product in products {
        match positions
            .get(&product.platform)
            .and_then(|&position| stats.get_mut(position))
        {
            Some(platform_stats) => platform_stats.observe(product.price),
            None => {
                positions.insert(product.platform, stats.len());
                stats.push(PlatformStats::first(product.platform, product.price));
            }
        }
    }

    PriceStats {
        stats,
        total_products: products.len(),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::products::records::ProductUuid;

    use super::*;

    fn product(platform: Platform, price: f64) -> ProductRecord {
        ProductRecord {
            uuid: ProductUuid::new(),
            title: "item".to_string(),
            price,
            original_price: None,
            image: String::new(),
            url: String::new(),
            platform,
            rating: None,
            similarity_score: 1.0,
        }
    }

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn single_platform_min_max_and_mean() {
        let products = [
            product(Platform::Amazon, 100.0),
            product(Platform::Amazon, 200.0),
            product(Platform::Amazon, 300.0),
        ];

        let result = aggregate(&products);

        assert_eq!(result.total_products, 3);
        assert_eq!(result.stats.len(), 1);

        let amazon = result.stats.first();

        assert!(amazon.is_some_and(|s| close(s.avg_price, 200.0)), "avg");
        assert!(amazon.is_some_and(|s| close(s.min_price, 100.0)), "min");
        assert!(amazon.is_some_and(|s| close(s.max_price, 300.0)), "max");
        assert_eq!(amazon.map(|s| s.count), Some(3));
    }

    #[test]
    fn platforms_keep_first_seen_order() {
        let products = [
            product(Platform::Ajio, 10.0),
            product(Platform::Flipkart, 20.0),
            product(Platform::Ajio, 30.0),
            product(Platform::JioMart, 40.0),
        ];

        let result = aggregate(&products);

        let platforms: Vec<Platform> = result.stats.iter().map(|s| s.platform).collect();

        assert_eq!(
            platforms,
            vec![Platform::Ajio, Platform::Flipkart, Platform::JioMart]
        );
        assert_eq!(result.total_products, 4);
    }

    #[test]
    fn running_average_matches_arithmetic_mean() {
        let prices = [512.34, 1999.99, 873.1, 1200.0, 640.55];
        let products: Vec<ProductRecord> = prices
            .iter()
            .map(|&price| product(Platform::Meesho, price))
            .collect();

        let result = aggregate(&products);
        let mean = prices.iter().sum::<f64>() / 5.0;

        assert!(
            result.stats.first().is_some_and(|s| close(s.avg_price, mean)),
            "incremental average should equal the mean"
        );
    }

    #[test]
    fn empty_input_yields_empty_stats() {
        let result = aggregate(&[]);

        assert_eq!(result, PriceStats::default());
    }
}
