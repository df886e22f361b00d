// Core engine exports
pub mod comparison;
pub mod distance;
pub mod filters;
pub mod registry;
pub mod scoring;
pub mod session;
pub mod sorter;
pub mod statistics;
pub mod store;

pub use comparison::ComparisonEngine;
pub use distance::{distance_km, distance_between, is_valid_coordinate};
pub use filters::{in_price_range, in_neighbourhoods, name_contains_term, within_radius};
pub use registry::{borough_key, BoroughRegistry, LONDON_BOROUGHS};
pub use scoring::{best_match_score, BestMatchCriteria};
pub use session::AnalyticsSession;
pub use sorter::{sort_by, sort_names_case_insensitive, SortKey};
pub use statistics::StatisticsEngine;
pub use store::ListingStore;
