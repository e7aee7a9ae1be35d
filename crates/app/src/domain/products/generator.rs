//! Listing generation.

use rand::Rng;
use smallvec::SmallVec;
use uuid::Uuid;

use crate::domain::{
    platforms::{Platform, PlatformProfile, PriceRange, RatingRange, profiles::builtin_profile},
    products::records::{ProductRecord, ProductUuid},
};

/// Listings produced by one marketplace for one search.
pub type Listings = SmallVec<[ProductRecord; 3]>;

/// Generate one listing per template of `profile` for `query`.
///
/// Prices and ratings are drawn from `rng`; identifiers are always fresh.
pub fn generate<R>(profile: &PlatformProfile, query: &str, rng: &mut R) -> Listings
where
    R: Rng + ?Sized,
{
    profile
        .templates
        .iter()
        .map(|template| {
            let raw_price = draw_price(template.price, rng);

            ProductRecord {
                uuid: ProductUuid::new(),
                title: template.render_title(query),
                price: round_to(raw_price, 2),
                original_price: profile.markup.map(|markup| round_to(raw_price * markup, 2)),
                image: profile.image.to_string(),
                url: format!("{}{}", profile.url_base, Uuid::new_v4()),
                platform: profile.platform,
                rating: Some(round_to(draw_rating(profile.rating, rng), 1)),
                similarity_score: 0.0,
            }
        })
        .collect()
}

/// Generate listings from the builtin profile of `platform`.
pub fn generate_for<R>(platform: Platform, query: &str, rng: &mut R) -> Listings
where
    R: Rng + ?Sized,
{
    builtin_profile(platform)
        .map(|profile| generate(profile, query, rng))
        .unwrap_or_default()
}

fn draw_price<R: Rng + ?Sized>(range: PriceRange, rng: &mut R) -> f64 {
    rng.gen_range(range.min..=range.max)
}

fn draw_rating<R: Rng + ?Sized>(range: RatingRange, rng: &mut R) -> f64 {
    rng.gen_range(range.min..=range.max)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);

    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use rustc_hash::FxHashSet;

    use crate::domain::platforms::BUILTIN_PROFILES;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn decimals_at_most(value: f64, places: i32) -> bool {
        (round_to(value, places) - value).abs() < 1e-9
    }

    #[test]
    fn each_platform_returns_two_or_three_listings() {
        let mut rng = rng();

        for platform in Platform::ALL {
            let listings = generate_for(platform, "shoes", &mut rng);

            assert!(
                (2..=3).contains(&listings.len()),
                "{platform} produced {} listings",
                listings.len()
            );
            assert!(
                listings.iter().all(|listing| listing.platform == platform),
                "{platform} produced a foreign listing"
            );
        }
    }

    #[test]
    fn listing_ids_are_unique() {
        let mut rng = rng();
        let mut seen = FxHashSet::default();

        for platform in Platform::ALL {
            for listing in generate_for(platform, "lamp", &mut rng) {
                assert!(seen.insert(listing.uuid), "duplicate id {}", listing.uuid);
            }
        }
    }

    #[test]
    fn titles_embed_the_query() {
        let mut rng = rng();

        let titles: Vec<String> = generate_for(Platform::Amazon, "Desk Lamp", &mut rng)
            .into_iter()
            .map(|listing| listing.title)
            .collect();

        assert_eq!(
            titles,
            vec![
                "Desk Lamp - Premium Quality".to_string(),
                "Best Desk Lamp for Home".to_string(),
                "Desk Lamp Professional Grade".to_string(),
            ]
        );
    }

    #[test]
    fn prices_and_ratings_stay_in_their_bands() {
        let mut rng = rng();

        for _ in 0..50 {
            for profile in &BUILTIN_PROFILES {
                let listings = generate(profile, "chair", &mut rng);

                for (listing, template) in listings.iter().zip(profile.templates) {
                    assert!(
                        listing.price >= template.price.min - 0.005
                            && listing.price <= template.price.max + 0.005,
                        "price {} outside {:?}",
                        listing.price,
                        template.price
                    );
                    assert!(decimals_at_most(listing.price, 2), "price not rounded");

                    let rating = listing.rating.unwrap_or_default();

                    assert!(
                        rating >= profile.rating.min - 0.05 && rating <= profile.rating.max + 0.05,
                        "rating {rating} outside {:?}",
                        profile.rating
                    );
                    assert!(decimals_at_most(rating, 1), "rating not rounded");
                }
            }
        }
    }

    #[test]
    fn original_price_follows_markup() {
        let mut rng = rng();

        for profile in &BUILTIN_PROFILES {
            for listing in generate(profile, "watch", &mut rng) {
                match profile.markup {
                    Some(markup) => {
                        let original = listing.original_price.unwrap_or_default();

                        assert!(
                            (original - listing.price * markup).abs() < 0.02,
                            "{} original price {original} does not follow markup",
                            profile.platform
                        );
                        assert!(original > listing.price, "no discount shown");
                    }
                    None => assert!(
                        listing.original_price.is_none(),
                        "{} should not show a was price",
                        profile.platform
                    ),
                }
            }
        }
    }

    #[test]
    fn listings_share_the_platform_image_and_url_base() {
        let mut rng = rng();

        for profile in &BUILTIN_PROFILES {
            let listings = generate(profile, "bag", &mut rng);

            for listing in &listings {
                assert_eq!(listing.image, profile.image);
                assert!(listing.url.starts_with(profile.url_base), "bad url base");
                assert!(listing.url.len() > profile.url_base.len(), "missing url id");
            }

            let first = listings.first().map(|listing| listing.url.clone());
            let second = listings.get(1).map(|listing| listing.url.clone());

            assert_ne!(first, second, "urls must be unique per listing");
        }
    }

    #[test]
    fn listings_start_unscored() {
        let mut rng = rng();

        let listings = generate_for(Platform::Ajio, "jacket", &mut rng);

        assert!(listings.iter().all(|listing| listing.similarity_score.abs() < f64::EPSILON));
    }

    #[test]
    fn same_seed_draws_same_prices() {
        let first = generate_for(Platform::Flipkart, "phone", &mut rng());
        let second = generate_for(Platform::Flipkart, "phone", &mut rng());

        let prices = |listings: &Listings| listings.iter().map(|l| l.price).collect::<Vec<_>>();

        assert_eq!(prices(&first), prices(&second));
    }

    #[test]
    fn round_to_keeps_requested_places() {
        assert!((round_to(4.26, 1) - 4.3).abs() < 1e-12);
        assert!((round_to(123.456, 2) - 123.46).abs() < 1e-12);
    }
}
