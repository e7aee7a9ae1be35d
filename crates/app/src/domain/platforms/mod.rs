//! Marketplace Platforms

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

pub mod profiles;

pub use profiles::{BUILTIN_PROFILES, ListingTemplate, PlatformProfile, PriceRange, RatingRange};

/// One of the simulated marketplaces a listing can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Amazon,
    Flipkart,
    Meesho,
    Ajio,
    JioMart,
}

impl Platform {
    /// Every platform, in the order the catalog queries them.
    pub const ALL: [Platform; 5] = [
        Platform::Amazon,
        Platform::Flipkart,
        Platform::Meesho,
        Platform::Ajio,
        Platform::JioMart,
    ];

    /// Display label used in API payloads.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::Flipkart => "Flipkart",
            Platform::Meesho => "Meesho",
            Platform::Ajio => "Ajio",
            Platform::JioMart => "JioMart",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}
