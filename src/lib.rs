//! Listing Analytics - in-memory analytics engine for short-let property listings
//!
//! This library provides the computational core behind the property browser:
//! price filtering, multi-key sorting, great-circle distances, the statistics
//! panel and best-match selection over a comparison list. Loading records and
//! rendering results are left to the caller.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{
    AnalyticsSession, BestMatchCriteria, BoroughRegistry, ComparisonEngine, ListingStore, SortKey,
    StatisticsEngine, distance::distance_km, sorter::sort_by,
};
pub use error::{EngineError, Result};
pub use models::{Listing, Attraction, Borough, PriceRange, PriceFilterRequest, Statistic, StatisticKind, BestMatch};
