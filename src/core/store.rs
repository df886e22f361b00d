use validator::Validate;

use crate::core::filters::{in_neighbourhoods, in_price_range};
use crate::core::registry::{borough_key, BoroughRegistry};
use crate::core::sorter::sort_names_case_insensitive;
use crate::error::{EngineError, Result};
use crate::models::{Borough, Listing, PriceFilterRequest, PriceRange};

/// Holds the full dataset, the price-filtered view and the favourites
///
/// The full dataset never changes after construction. Borough aggregates
/// are rebuilt from the filtered view whenever the price filter changes.
#[derive(Debug, Clone)]
pub struct ListingStore {
    listings: Vec<Listing>,
    filtered: Vec<Listing>,
    favourites: Vec<Listing>,
    boroughs: BoroughRegistry,
}

impl ListingStore {
    /// Build a store over already-parsed listings
    ///
    /// Fails with `UnknownBorough` if any neighbourhood is missing from the
    /// registry, so later borough rebuilds cannot fail.
    pub fn new(listings: Vec<Listing>, registry: BoroughRegistry) -> Result<Self> {
        if let Some(listing) = listings
            .iter()
            .find(|l| !registry.contains_key(&borough_key(&l.neighbourhood)))
        {
            return Err(EngineError::UnknownBorough {
                neighbourhood: listing.neighbourhood.clone(),
                key: borough_key(&listing.neighbourhood),
            });
        }

        let mut store = Self {
            filtered: listings.clone(),
            listings,
            favourites: Vec::new(),
            boroughs: registry,
        };
        store.rebuild_boroughs();

        tracing::info!(
            "Listing store ready: {} listings across {} boroughs",
            store.listings.len(),
            store.boroughs.len()
        );
        Ok(store)
    }

    /// The full dataset
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// The current price-filtered view
    pub fn filtered(&self) -> &[Listing] {
        &self.filtered
    }

    /// Replace the filtered view with listings priced in `[min, max]`
    pub fn filter_by_price(&mut self, min: i32, max: i32) {
        self.filtered = self
            .listings
            .iter()
            .filter(|listing| in_price_range(listing, min, max))
            .cloned()
            .collect();
        self.rebuild_boroughs();

        tracing::debug!("Price filter [{}, {}] kept {} listings", min, max, self.filtered.len());
    }

    /// Validate a user-entered price range, clamp it to the price ceiling and apply it
    pub fn apply_price_filter(&mut self, request: PriceFilterRequest) -> Result<PriceFilterRequest> {
        request.validate()?;
        let ceiling = self.price_range()?.max;
        let clamped = request.clamp_to(ceiling);
        self.filter_by_price(clamped.from, clamped.to);
        Ok(clamped)
    }

    /// Listings of the filtered view in any of the given neighbourhoods
    pub fn filter_by_neighbourhood(&self, names: &[&str]) -> Vec<Listing> {
        self.filtered
            .iter()
            .filter(|listing| in_neighbourhoods(listing, names))
            .cloned()
            .collect()
    }

    /// Lowest and highest price over the full dataset
    pub fn price_range(&self) -> Result<PriceRange> {
        let mut prices = self.listings.iter().map(|l| l.price);
        let first = prices.next().ok_or(EngineError::EmptyDataset {
            operation: "price range",
        })?;

        let (min, max) = prices.fold((first, first), |(min, max), price| {
            (min.min(price), max.max(price))
        });
        Ok(PriceRange { min, max })
    }

    pub fn favourites(&self) -> &[Listing] {
        &self.favourites
    }

    pub fn is_favourite(&self, listing: &Listing) -> bool {
        self.favourites.contains(listing)
    }

    /// Add the listing to favourites, or remove it if already present
    pub fn toggle_favourite(&mut self, listing: &Listing) {
        if self.is_favourite(listing) {
            self.favourites.retain(|favourite| favourite != listing);
        } else {
            self.favourites.push(listing.clone());
        }
    }

    /// Borough aggregates for the current filtered view
    pub fn boroughs(&self) -> &BoroughRegistry {
        &self.boroughs
    }

    pub fn borough(&self, key: &str) -> Option<&Borough> {
        self.boroughs.get(key)
    }

    /// Borough display names, sorted case-insensitively for selection lists
    pub fn borough_names(&self) -> Vec<String> {
        let mut names = self.boroughs.names();
        sort_names_case_insensitive(&mut names);
        names
    }

    fn rebuild_boroughs(&mut self) {
        self.boroughs.clear_all();
        for listing in &self.filtered {
            // Coverage was checked in `new` and the view is a subset of the dataset
            if let Some(borough) = self.boroughs.get_mut(&borough_key(&listing.neighbourhood)) {
                borough.add_listing(listing.clone());
            }
        }
    }
}
