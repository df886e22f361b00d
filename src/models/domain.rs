use chrono::NaiveDate;
use geo::Point;
use serde::{Deserialize, Serialize};

/// Room type string that identifies a whole-property let
pub const ENTIRE_HOME: &str = "Entire home/apt";

/// Sentinel used by the source data for a missing coordinate
pub const MISSING_COORDINATE: f64 = -1.0;

/// Sentinel used by the source data for a missing price or stay length
pub const MISSING_VALUE: i32 = -1;

/// One property record from the source dataset
///
/// Two listings are equal only when every field matches. Favourites and
/// deduplication rely on this; the comparison list uses a narrower
/// identifier check instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub name: String,
    #[serde(rename = "hostId")]
    pub host_id: String,
    #[serde(rename = "hostName")]
    pub host_name: String,
    pub neighbourhood: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "roomType")]
    pub room_type: String,
    pub price: i32,
    #[serde(rename = "minimumNights")]
    pub minimum_nights: i32,
    #[serde(rename = "numberOfReviews")]
    pub number_of_reviews: i32,
    #[serde(rename = "lastReview", default)]
    pub last_review: String,
    #[serde(rename = "reviewsPerMonth", default)]
    pub reviews_per_month: f64,
    #[serde(rename = "hostListingsCount")]
    pub host_listings_count: i32,
    #[serde(rename = "availability365")]
    pub availability_365: i32,
    #[serde(default)]
    pub image: String,
}

impl Listing {
    /// Cost of the shortest allowed stay (price per night * minimum nights)
    pub fn minimum_price(&self) -> i64 {
        i64::from(self.price) * i64::from(self.minimum_nights)
    }

    /// Exact, case-sensitive room type test against "Entire home/apt"
    pub fn is_entire_home(&self) -> bool {
        self.room_type == ENTIRE_HOME
    }

    pub fn has_location(&self) -> bool {
        self.latitude != MISSING_COORDINATE && self.longitude != MISSING_COORDINATE
    }

    /// Parse the `dd/mm/yyyy` last review date, `None` when empty or malformed
    pub fn last_review_date(&self) -> Option<NaiveDate> {
        if self.last_review.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(&self.last_review, "%d/%m/%Y").ok()
    }

    /// Location as a geo point (x = longitude, y = latitude)
    pub fn location(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// A fixed point of interest used for proximity statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Attraction {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn location(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// A named neighbourhood aggregate derived from the filtered view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Borough {
    pub name: String,
    pub count: usize,
    pub listings: Vec<Listing>,
}

impl Borough {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
            listings: Vec::new(),
        }
    }

    pub fn add_listing(&mut self, listing: Listing) {
        self.count += 1;
        self.listings.push(listing);
    }

    /// Drop all derived state, keeping only the name
    pub fn clear(&mut self) {
        self.count = 0;
        self.listings.clear();
    }
}

/// Lowest and highest nightly price over the full dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i32,
    pub max: i32,
}

/// Reference coordinate distances are measured from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl ReferencePoint {
    /// Charing Cross, the conventional centre of London
    pub const CENTRAL_LONDON: ReferencePoint = ReferencePoint {
        latitude: 51.5074,
        longitude: -0.1277,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl Default for ReferencePoint {
    fn default() -> Self {
        Self::CENTRAL_LONDON
    }
}
