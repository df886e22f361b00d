use serde::{Deserialize, Serialize};
use crate::models::domain::Listing;

/// The statistics shown on the statistics panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatisticKind {
    AvailableProperties,
    AvgNumberOfReviews,
    MostExpensiveBorough,
    EntireHomes,
    MostReviewedHost,
    GardenProperties,
    CheapestHome,
    AttractionProperties,
}

impl StatisticKind {
    /// Every statistic, in panel order
    pub const ALL: [StatisticKind; 8] = [
        StatisticKind::AvailableProperties,
        StatisticKind::AvgNumberOfReviews,
        StatisticKind::MostExpensiveBorough,
        StatisticKind::EntireHomes,
        StatisticKind::MostReviewedHost,
        StatisticKind::GardenProperties,
        StatisticKind::CheapestHome,
        StatisticKind::AttractionProperties,
    ];

    /// Stable attribute key
    pub fn key(self) -> &'static str {
        match self {
            StatisticKind::AvailableProperties => "availableProperties",
            StatisticKind::AvgNumberOfReviews => "avgNumberOfReviews",
            StatisticKind::MostExpensiveBorough => "mostExpensiveBorough",
            StatisticKind::EntireHomes => "entireHomes",
            StatisticKind::MostReviewedHost => "mostReviewedHost",
            StatisticKind::GardenProperties => "gardenProperties",
            StatisticKind::CheapestHome => "cheapestHome",
            StatisticKind::AttractionProperties => "attractionProperties",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StatisticKind::AvailableProperties => "Number of available properties",
            StatisticKind::AvgNumberOfReviews => "Average number of reviews per property",
            StatisticKind::MostExpensiveBorough => "Most expensive borough",
            StatisticKind::EntireHomes => "Number of entire home/apartments",
            StatisticKind::MostReviewedHost => "Most reviewed host",
            StatisticKind::GardenProperties => "Number of properties with",
            StatisticKind::CheapestHome => "Cheapest home/apartment in",
            StatisticKind::AttractionProperties => "Number of properties near",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Whether the statistic keeps the listings behind its value for drill-down
    pub fn has_listings(self) -> bool {
        matches!(
            self,
            StatisticKind::MostReviewedHost
                | StatisticKind::GardenProperties
                | StatisticKind::CheapestHome
                | StatisticKind::AttractionProperties
        )
    }
}

/// How a statistic is parameterized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StatisticParameter {
    /// No caller-selectable parameter
    Fixed,
    /// One choice out of an enumerated list
    Choice {
        options: Vec<String>,
        selected: Option<String>,
    },
}

impl StatisticParameter {
    /// A choice list with the first option pre-selected
    pub fn choice(options: Vec<String>) -> Self {
        let selected = options.first().cloned();
        StatisticParameter::Choice { options, selected }
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            StatisticParameter::Fixed => None,
            StatisticParameter::Choice { selected, .. } => selected.as_deref(),
        }
    }

    pub fn options(&self) -> &[String] {
        match self {
            StatisticParameter::Fixed => &[],
            StatisticParameter::Choice { options, .. } => options,
        }
    }
}

/// A single statistic with its current display value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistic {
    pub kind: StatisticKind,
    pub description: String,
    pub value: String,
    pub parameter: StatisticParameter,
    /// Listings behind the value, for statistics that support drill-down
    pub listings: Option<Vec<Listing>>,
}

impl Statistic {
    /// Create a statistic with an empty value
    pub fn new(kind: StatisticKind, parameter: StatisticParameter) -> Self {
        Self {
            kind,
            description: kind.description().to_string(),
            value: String::new(),
            parameter,
            listings: kind.has_listings().then(Vec::new),
        }
    }

    pub fn key(&self) -> &'static str {
        self.kind.key()
    }

    pub fn listings(&self) -> &[Listing] {
        self.listings.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for kind in StatisticKind::ALL {
            assert_eq!(StatisticKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(StatisticKind::from_key("unknown"), None);
    }

    #[test]
    fn test_serde_key_matches_attribute_key() {
        let json = serde_json::to_string(&StatisticKind::MostReviewedHost).unwrap();
        assert_eq!(json, "\"mostReviewedHost\"");
    }

    #[test]
    fn test_choice_defaults_to_first_option() {
        let parameter = StatisticParameter::choice(vec!["garden".to_string(), "terrace".to_string()]);
        assert_eq!(parameter.selected(), Some("garden"));
        assert_eq!(parameter.options().len(), 2);

        let empty = StatisticParameter::choice(vec![]);
        assert_eq!(empty.selected(), None);
    }

    #[test]
    fn test_new_statistic_shape() {
        let fixed = Statistic::new(StatisticKind::EntireHomes, StatisticParameter::Fixed);
        assert!(fixed.value.is_empty());
        assert!(fixed.listings.is_none());

        let host = Statistic::new(StatisticKind::MostReviewedHost, StatisticParameter::Fixed);
        assert_eq!(host.listings, Some(vec![]));
    }
}
