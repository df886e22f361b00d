use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::EngineSettings;
use crate::core::{
    filters::{name_contains_term, within_radius},
    registry::BoroughRegistry,
    sorter::{sort_by, sort_names_case_insensitive, SortKey},
    store::ListingStore,
};
use crate::error::{EngineError, Result};
use crate::models::{Attraction, Listing, Statistic, StatisticKind, StatisticParameter};

pub const NO_PROPERTIES_IN_RANGE: &str = "There are no available properties within this price range";
pub const NO_REVIEWED_HOST: &str = "There are no available properties within the price range";
pub const NO_HOMES_IN_RANGE: &str = "There are no home/apartments in this price range";

/// Borough with the highest average nightly price
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoroughPrice {
    pub name: String,
    /// Running (price * nights) / nights at the moment the borough took the lead
    pub price_per_night: i64,
}

/// Host with the most reviews across their listings in the view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostReviews {
    pub host_id: String,
    pub host_name: String,
    pub total_reviews: i64,
    pub listings: Vec<Listing>,
}

/// Average reviews per listing rounded to one decimal place, 0 when empty
pub fn average_reviews(listings: &[Listing]) -> f64 {
    if listings.is_empty() {
        return 0.0;
    }
    let total: i64 = listings.iter().map(|l| i64::from(l.number_of_reviews)).sum();
    let average = total as f64 / listings.len() as f64;
    (average * 10.0).round() / 10.0
}

pub fn count_entire_homes(listings: &[Listing]) -> usize {
    listings.iter().filter(|l| l.is_entire_home()).count()
}

/// Find the borough with the highest (sum of price * nights) / (sum of nights)
///
/// The ratio is folded in listing by listing and compared after every
/// step; a borough takes the lead only when its running ratio strictly
/// exceeds the best seen so far. Integer division, as in the price data.
pub fn most_expensive_borough(boroughs: &BoroughRegistry) -> Option<BoroughPrice> {
    let mut leader: Option<BoroughPrice> = None;
    let mut best = 0_i64;

    for borough in boroughs.boroughs() {
        let mut price_sum = 0_i64;
        let mut nights_sum = 0_i64;
        for listing in &borough.listings {
            price_sum += listing.minimum_price();
            nights_sum += i64::from(listing.minimum_nights);
            if nights_sum <= 0 {
                continue;
            }
            let ratio = price_sum / nights_sum;
            if ratio > best {
                best = ratio;
                leader = Some(BoroughPrice {
                    name: borough.name.clone(),
                    price_per_night: ratio,
                });
            }
        }
    }

    leader
}

/// Find the host with the most reviews
///
/// Listings are sorted by host id so each host forms a contiguous run. The
/// running review total of the current run is compared after every listing
/// and the run so far is kept whenever it strictly beats the best total.
pub fn most_reviewed_host(listings: &[Listing]) -> Option<HostReviews> {
    let mut leader: Option<HostReviews> = None;
    let mut best = 0_i64;
    let mut current_host: Option<&str> = None;
    let mut run: Vec<Listing> = Vec::new();
    let mut run_reviews = 0_i64;

    let sorted = sort_by(listings, SortKey::HostId, true);
    for listing in &sorted {
        if current_host != Some(listing.host_id.as_str()) {
            current_host = Some(listing.host_id.as_str());
            run.clear();
            run_reviews = 0;
        }
        run.push(listing.clone());
        run_reviews += i64::from(listing.number_of_reviews);

        if run_reviews > best {
            best = run_reviews;
            leader = Some(HostReviews {
                host_id: listing.host_id.clone(),
                host_name: listing.host_name.clone(),
                total_reviews: run_reviews,
                listings: run.clone(),
            });
        }
    }

    leader
}

/// Listings whose name contains `term`, ignoring case
pub fn listings_with_term(listings: &[Listing], term: &str) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| name_contains_term(l, term))
        .cloned()
        .collect()
}

/// Cheapest "Entire home/apt" in the borough named `borough_name`
///
/// Ties go to the first listing in the borough's list.
pub fn cheapest_entire_home(boroughs: &BoroughRegistry, borough_name: &str) -> Option<Listing> {
    let borough = boroughs.by_name(borough_name)?;
    let mut cheapest: Option<&Listing> = None;
    for listing in borough.listings.iter().filter(|l| l.is_entire_home()) {
        match cheapest {
            Some(current) if listing.price >= current.price => {}
            _ => cheapest = Some(listing),
        }
    }
    cheapest.cloned()
}

/// Listings within `radius_km` of every attraction named `attraction_name`
pub fn listings_near(
    listings: &[Listing],
    attractions: &[Attraction],
    attraction_name: &str,
    radius_km: f64,
) -> Vec<Listing> {
    attractions
        .iter()
        .filter(|a| a.name == attraction_name)
        .flat_map(move |attraction| {
            listings
                .iter()
                .filter(move |l| within_radius(l, attraction, radius_km))
                .cloned()
        })
        .collect()
}

/// Display text for the cheapest home statistic
pub fn describe_home(listing: &Listing) -> String {
    format!(
        "Property ID: {}\nProperty name: {}\nPrice: £{}",
        listing.id, listing.name, listing.price
    )
}

/// Computes the statistics panel values from a store's filtered view
///
/// Parameterized statistics are recomputed on their own when their
/// selection changes; `update` recomputes everything.
#[derive(Debug, Clone)]
pub struct StatisticsEngine {
    statistics: Vec<Statistic>,
    attractions: Vec<Attraction>,
    attraction_radius_km: f64,
}

impl StatisticsEngine {
    /// Create every statistic with an empty value
    ///
    /// Borough choices come from the store's registry and attraction choices
    /// from `attractions`; both are sorted case-insensitively. Garden terms
    /// keep their configured order.
    pub fn new(store: &ListingStore, attractions: Vec<Attraction>, settings: &EngineSettings) -> Self {
        let mut attraction_names: Vec<String> = attractions.iter().map(|a| a.name.clone()).collect();
        sort_names_case_insensitive(&mut attraction_names);

        let statistics = StatisticKind::ALL
            .into_iter()
            .map(|kind| {
                let parameter = match kind {
                    StatisticKind::GardenProperties => StatisticParameter::choice(settings.garden_terms.clone()),
                    StatisticKind::CheapestHome => StatisticParameter::choice(store.borough_names()),
                    StatisticKind::AttractionProperties => StatisticParameter::choice(attraction_names.clone()),
                    _ => StatisticParameter::Fixed,
                };
                Statistic::new(kind, parameter)
            })
            .collect();

        Self {
            statistics,
            attractions,
            attraction_radius_km: settings.attraction_radius_km,
        }
    }

    pub fn statistics(&self) -> &[Statistic] {
        &self.statistics
    }

    pub fn statistic(&self, kind: StatisticKind) -> &Statistic {
        // Every kind is created in `new`
        &self.statistics[Self::index(kind)]
    }

    pub fn value(&self, kind: StatisticKind) -> &str {
        &self.statistic(kind).value
    }

    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    /// Current values keyed by attribute key
    pub fn attributes(&self) -> BTreeMap<&'static str, String> {
        self.statistics
            .iter()
            .map(|s| (s.key(), s.value.clone()))
            .collect()
    }

    /// Recompute every statistic from the store's current filtered view
    pub fn update(&mut self, store: &ListingStore) {
        for kind in StatisticKind::ALL {
            self.recompute(kind, store);
        }
        tracing::debug!("Statistics updated over {} listings", store.filtered().len());
    }

    /// Select a new parameter value and recompute only that statistic
    pub fn select_choice(
        &mut self,
        kind: StatisticKind,
        choice: &str,
        store: &ListingStore,
    ) -> Result<&Statistic> {
        let statistic = &mut self.statistics[Self::index(kind)];
        match &mut statistic.parameter {
            StatisticParameter::Fixed => return Err(EngineError::UnknownStatistic(kind.key())),
            StatisticParameter::Choice { options, selected } => {
                if !options.iter().any(|option| option == choice) {
                    return Err(EngineError::UnknownParameterChoice {
                        statistic: kind.key(),
                        choice: choice.to_string(),
                    });
                }
                *selected = Some(choice.to_string());
            }
        }

        self.recompute(kind, store);
        Ok(self.statistic(kind))
    }

    fn index(kind: StatisticKind) -> usize {
        StatisticKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default()
    }

    fn recompute(&mut self, kind: StatisticKind, store: &ListingStore) {
        let view = store.filtered();
        let index = Self::index(kind);
        let selected = self.statistics[index].parameter.selected().map(str::to_string);

        let (value, listings) = match kind {
            StatisticKind::AvailableProperties => (view.len().to_string(), None),
            StatisticKind::AvgNumberOfReviews => (format!("{:.1}", average_reviews(view)), None),
            StatisticKind::MostExpensiveBorough => {
                let value = match most_expensive_borough(store.boroughs()) {
                    Some(borough) => borough.name,
                    None => {
                        tracing::debug!("No borough has priced listings in range");
                        NO_PROPERTIES_IN_RANGE.to_string()
                    }
                };
                (value, None)
            }
            StatisticKind::EntireHomes => (count_entire_homes(view).to_string(), None),
            StatisticKind::MostReviewedHost => match most_reviewed_host(view) {
                Some(host) => (host.host_name, Some(host.listings)),
                None => (NO_REVIEWED_HOST.to_string(), Some(Vec::new())),
            },
            StatisticKind::GardenProperties => {
                let matches = selected
                    .as_deref()
                    .map(|term| listings_with_term(view, term))
                    .unwrap_or_default();
                (matches.len().to_string(), Some(matches))
            }
            StatisticKind::CheapestHome => {
                let cheapest = selected
                    .as_deref()
                    .and_then(|name| cheapest_entire_home(store.boroughs(), name));
                match cheapest {
                    Some(listing) => (describe_home(&listing), Some(vec![listing])),
                    None => (NO_HOMES_IN_RANGE.to_string(), Some(Vec::new())),
                }
            }
            StatisticKind::AttractionProperties => {
                let matches = selected
                    .as_deref()
                    .map(|name| listings_near(view, &self.attractions, name, self.attraction_radius_km))
                    .unwrap_or_default();
                (matches.len().to_string(), Some(matches))
            }
        };

        tracing::debug!("Statistic {} = {:?}", kind.key(), value);
        let statistic = &mut self.statistics[index];
        statistic.value = value;
        statistic.listings = listings;
    }
}
