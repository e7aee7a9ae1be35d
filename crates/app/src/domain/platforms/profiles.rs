//! Platform Profiles
//!
//! Each marketplace is described by a [`PlatformProfile`]: the listing titles it
//! produces for a query, the price band of each title, whether it shows a "was"
//! price, and the rating band its listings draw from. Adding a marketplace means
//! adding a row to [`BUILTIN_PROFILES`].

use crate::domain::platforms::Platform;

/// Placeholder token replaced with the search query in listing titles.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Inclusive price band, in rupees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Inclusive rating band, on a five star scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingRange {
    pub min: f64,
    pub max: f64,
}

/// A title template and the price band listings with that title are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListingTemplate {
    /// Title with a `{query}` placeholder.
    pub title: &'static str,

    /// Price band for this title.
    pub price: PriceRange,
}

impl ListingTemplate {
    /// Render the title for a query.
    #[must_use]
    pub fn render_title(&self, query: &str) -> String {
        self.title.replace(QUERY_PLACEHOLDER, query)
    }
}

/// Listing generation settings for a single marketplace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformProfile {
    /// Marketplace the listings belong to.
    pub platform: Platform,

    /// Titles generated per search, one listing each.
    pub templates: &'static [ListingTemplate],

    /// Factor applied to the price to produce the "was" price, when the
    /// marketplace advertises discounts.
    pub markup: Option<f64>,

    /// Rating band listings draw from.
    pub rating: RatingRange,

    /// Placeholder image shared by every listing on this marketplace.
    pub image: &'static str,

    /// Product URL prefix; a fresh identifier is appended per listing.
    pub url_base: &'static str,
}

const fn template(title: &'static str, min: f64, max: f64) -> ListingTemplate {
    ListingTemplate {
        title,
        price: PriceRange { min, max },
    }
}

/// The marketplaces searched by default, in query order.
pub const BUILTIN_PROFILES: [PlatformProfile; 5] = [
    PlatformProfile {
        platform: Platform::Amazon,
        templates: &[
            template("{query} - Premium Quality", 500.0, 2000.0),
            template("Best {query} for Home", 800.0, 3000.0),
            template("{query} Professional Grade", 1000.0, 5000.0),
        ],
        markup: Some(1.2),
        rating: RatingRange { min: 3.5, max: 5.0 },
        image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=400&fit=crop&q=80",
        url_base: "https://amazon.in/product/",
    },
    PlatformProfile {
        platform: Platform::Flipkart,
        templates: &[
            template("{query} Latest Model", 600.0, 2500.0),
            template("{query} Special Edition", 700.0, 2800.0),
        ],
        markup: Some(1.15),
        rating: RatingRange { min: 3.8, max: 4.9 },
        image: "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?w=400&h=400&fit=crop&q=80",
        url_base: "https://flipkart.com/product/",
    },
    PlatformProfile {
        platform: Platform::Meesho,
        templates: &[
            template("{query} Budget Friendly", 300.0, 1200.0),
            template("Affordable {query}", 400.0, 1500.0),
        ],
        markup: None,
        rating: RatingRange { min: 3.5, max: 4.5 },
        image: "https://images.unsplash.com/photo-1560393464-5c69a73c5770?w=400&h=400&fit=crop&q=80",
        url_base: "https://meesho.com/product/",
    },
    PlatformProfile {
        platform: Platform::Ajio,
        templates: &[
            template("{query} Designer Collection", 900.0, 3500.0),
            template("Trendy {query}", 1200.0, 4000.0),
        ],
        markup: Some(1.25),
        rating: RatingRange { min: 4.0, max: 4.8 },
        image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=400&fit=crop&q=80",
        url_base: "https://ajio.com/product/",
    },
    PlatformProfile {
        platform: Platform::JioMart,
        templates: &[
            template("{query} Value Pack", 500.0, 2000.0),
            template("{query} Combo Deal", 600.0, 2200.0),
        ],
        markup: None,
        rating: RatingRange { min: 3.7, max: 4.6 },
        image: "https://images.unsplash.com/photo-1572635196237-14b3f281503f?w=400&h=400&fit=crop&q=80",
        url_base: "https://jiomart.com/product/",
    },
];

/// Look up the builtin profile for a platform.
#[must_use]
pub fn builtin_profile(platform: Platform) -> Option<&'static PlatformProfile> {
    BUILTIN_PROFILES
        .iter()
        .find(|profile| profile.platform == platform)
}
