use serde::{Deserialize, Serialize};
use crate::models::domain::Listing;

/// Outcome of a best-match selection over the comparison list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestMatch {
    pub listing: Listing,
    /// False when no criterion was selected and the winner is arbitrary
    pub matched: bool,
    pub score: Option<f64>,
}

/// Best value per comparison column, used for highlighting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonHighlights {
    #[serde(rename = "minPrice")]
    pub min_price: i32,
    #[serde(rename = "minDistanceKm")]
    pub min_distance_km: f64,
    #[serde(rename = "minNights")]
    pub min_nights: i32,
}
