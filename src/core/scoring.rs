use serde::{Deserialize, Serialize};

use crate::core::distance::distance_km;
use crate::models::{Listing, ReferencePoint};

/// Which attributes the best match is chosen by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMatchCriteria {
    #[serde(rename = "usePrice", default)]
    pub use_price: bool,
    #[serde(rename = "useDistance", default)]
    pub use_distance: bool,
    #[serde(rename = "useNights", default)]
    pub use_nights: bool,
}

impl BestMatchCriteria {
    pub fn new(use_price: bool, use_distance: bool, use_nights: bool) -> Self {
        Self {
            use_price,
            use_distance,
            use_nights,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.use_price || self.use_distance || self.use_nights)
    }
}

/// Calculate the best-match score of a listing (lower is better)
///
/// Scoring table:
/// ```text
/// price  distance  nights   score
///   x       x        x      distance * price + nights * price
///   x       x               distance * price
///   x                x      nights * price
///   x                       price
///           x        x      distance + nights
///           x               distance
///                    x      nights
/// ```
/// Distance is measured in kilometres from `reference`. Returns `None`
/// when no criterion is selected.
pub fn best_match_score(
    listing: &Listing,
    criteria: &BestMatchCriteria,
    reference: &ReferencePoint,
) -> Option<f64> {
    let price = f64::from(listing.price);
    let nights = f64::from(listing.minimum_nights);
    let distance = || {
        distance_km(
            listing.latitude,
            listing.longitude,
            reference.latitude,
            reference.longitude,
        )
    };

    let score = match (criteria.use_price, criteria.use_distance, criteria.use_nights) {
        (true, true, true) => distance() * price + nights * price,
        (true, true, false) => distance() * price,
        (true, false, true) => nights * price,
        (true, false, false) => price,
        (false, true, true) => distance() + nights,
        (false, true, false) => distance(),
        (false, false, true) => nights,
        (false, false, false) => return None,
    };

    Some(score)
}
