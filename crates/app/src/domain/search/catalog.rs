//! Catalog
//!
//! The search pipeline: generate listings from every profile, then rank them.

use rand::Rng;

use crate::domain::{
    platforms::{BUILTIN_PROFILES, PlatformProfile},
    products::{generate, records::ProductRecord},
    search::{query::SearchQuery, ranking::rank},
};

/// The set of marketplaces a search fans out to.
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Vec<PlatformProfile>,
}

impl Catalog {
    #[must_use]
    pub fn new(profiles: Vec<PlatformProfile>) -> Self {
        Self { profiles }
    }

    #[must_use]
    pub fn profiles(&self) -> &[PlatformProfile] {
        &self.profiles
    }

    /// Generate listings for `query` on every marketplace and rank them.
    pub fn search<R>(&self, query: &SearchQuery, rng: &mut R) -> Vec<ProductRecord>
    where
        R: Rng + ?Sized,
    {
        let listings = self
            .profiles
            .iter()
            .flat_map(|profile| generate(profile, query.as_str(), rng))
            .collect();

        rank(query.as_str(), listings)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(BUILTIN_PROFILES.to_vec())
    }
}
