//! Listing builders shared by unit, behaviour and property tests.

use crate::RawRestaurant;

/// Latitude of central Tijuana, used as the default fixture location.
pub const TIJUANA_LATITUDE: f64 = 32.5149;

/// Longitude of central Tijuana, used as the default fixture location.
pub const TIJUANA_LONGITUDE: f64 = -117.0382;

/// Build a complete raw listing located in central Tijuana.
#[must_use]
pub fn listing(row: usize, name: &str, rating: f64, review_count: f64) -> RawRestaurant {
    listing_at(
        row,
        name,
        rating,
        review_count,
        TIJUANA_LATITUDE,
        TIJUANA_LONGITUDE,
    )
}

/// Build a complete raw listing at an explicit location.
#[must_use]
pub fn listing_at(
    row: usize,
    name: &str,
    rating: f64,
    review_count: f64,
    latitude: f64,
    longitude: f64,
) -> RawRestaurant {
    RawRestaurant::new(row)
        .with_name(name)
        .with_rating(rating.to_string())
        .with_review_count(review_count.to_string())
        .with_coordinates(latitude.to_string(), longitude.to_string())
}

/// Build a listing whose rating cell cannot be parsed.
#[must_use]
pub fn malformed_listing(row: usize, name: &str) -> RawRestaurant {
    RawRestaurant::new(row)
        .with_name(name)
        .with_rating("n/a")
        .with_review_count("10")
        .with_coordinates(TIJUANA_LATITUDE.to_string(), TIJUANA_LONGITUDE.to_string())
}
