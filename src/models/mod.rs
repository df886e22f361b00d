// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod statistic;

pub use domain::{Listing, Attraction, Borough, PriceRange, ReferencePoint, ENTIRE_HOME, MISSING_COORDINATE, MISSING_VALUE};
pub use requests::PriceFilterRequest;
pub use responses::{BestMatch, ComparisonHighlights};
pub use statistic::{Statistic, StatisticKind, StatisticParameter};
