use crate::config::Settings;
use crate::core::{
    comparison::ComparisonEngine,
    statistics::StatisticsEngine,
    store::ListingStore,
};
use crate::error::Result;
use crate::models::{Attraction, Listing, PriceFilterRequest, Statistic, StatisticKind};

/// One interactive session over a loaded dataset
///
/// Wires the store, the statistics panel and the comparison list together
/// so that a price change refreshes the statistics in one call.
#[derive(Debug, Clone)]
pub struct AnalyticsSession {
    store: ListingStore,
    statistics: StatisticsEngine,
    comparison: ComparisonEngine,
}

impl AnalyticsSession {
    /// Build a session from parsed records and settings
    ///
    /// Statistics are computed once over the full dataset.
    pub fn from_settings(
        listings: Vec<Listing>,
        attractions: Vec<Attraction>,
        settings: &Settings,
    ) -> Result<Self> {
        let store = ListingStore::new(listings, settings.borough_registry())?;
        let mut statistics = StatisticsEngine::new(&store, attractions, &settings.engine);
        statistics.update(&store);
        let comparison = ComparisonEngine::new(settings.engine.reference_point());

        Ok(Self {
            store,
            statistics,
            comparison,
        })
    }

    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    pub fn statistics(&self) -> &StatisticsEngine {
        &self.statistics
    }

    pub fn comparison(&self) -> &ComparisonEngine {
        &self.comparison
    }

    pub fn comparison_mut(&mut self) -> &mut ComparisonEngine {
        &mut self.comparison
    }

    /// Apply a user-entered price range and refresh every statistic
    pub fn set_price_range(&mut self, request: PriceFilterRequest) -> Result<PriceFilterRequest> {
        let applied = self.store.apply_price_filter(request)?;
        self.statistics.update(&self.store);
        Ok(applied)
    }

    /// Add or remove a favourite; the filtered view is untouched
    pub fn toggle_favourite(&mut self, listing: &Listing) {
        self.store.toggle_favourite(listing);
    }

    /// Change one statistic's selection, leaving the others untouched
    pub fn select_statistic_choice(&mut self, kind: StatisticKind, choice: &str) -> Result<&Statistic> {
        self.statistics.select_choice(kind, choice, &self.store)
    }
}
