use crate::core::distance::distance_km;
use crate::models::{Attraction, Listing};

/// Check if a listing's nightly price lies in `[min, max]` (inclusive)
///
/// An inverted range (`min > max`) matches nothing.
#[inline]
pub fn in_price_range(listing: &Listing, min: i32, max: i32) -> bool {
    listing.price >= min && listing.price <= max
}

/// Check if a listing's neighbourhood is one of `names` (exact match)
#[inline]
pub fn in_neighbourhoods(listing: &Listing, names: &[&str]) -> bool {
    names.contains(&listing.neighbourhood.as_str())
}

/// Case-insensitive substring test against the listing name
#[inline]
pub fn name_contains_term(listing: &Listing, term: &str) -> bool {
    listing.name.to_lowercase().contains(&term.to_lowercase())
}

/// Check if a listing lies within `radius_km` (inclusive) of an attraction
#[inline]
pub fn within_radius(listing: &Listing, attraction: &Attraction, radius_km: f64) -> bool {
    distance_km(
        listing.latitude,
        listing.longitude,
        attraction.latitude,
        attraction.longitude,
    ) <= radius_km
}
