use std::collections::BTreeMap;

use crate::models::Borough;

/// The 33 London boroughs
pub const LONDON_BOROUGHS: [&str; 33] = [
    "Barking and Dagenham",
    "Barnet",
    "Bexley",
    "Brent",
    "Bromley",
    "Camden",
    "City of London",
    "Croydon",
    "Ealing",
    "Enfield",
    "Greenwich",
    "Hackney",
    "Hammersmith and Fulham",
    "Haringey",
    "Harrow",
    "Havering",
    "Hillingdon",
    "Hounslow",
    "Islington",
    "Kensington and Chelsea",
    "Kingston upon Thames",
    "Lambeth",
    "Lewisham",
    "Merton",
    "Newham",
    "Redbridge",
    "Richmond upon Thames",
    "Southwark",
    "Sutton",
    "Tower Hamlets",
    "Waltham Forest",
    "Wandsworth",
    "Westminster",
];

/// Derive a borough key from a neighbourhood name: lower-case, spaces as `_`
pub fn borough_key(neighbourhood: &str) -> String {
    neighbourhood.replace(' ', "_").to_lowercase()
}

/// Mapping from borough key to borough, handed to the store at construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoroughRegistry {
    boroughs: BTreeMap<String, Borough>,
}

impl BoroughRegistry {
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let boroughs = names
            .into_iter()
            .map(|name| (borough_key(name), Borough::new(name)))
            .collect();
        Self { boroughs }
    }

    pub fn london() -> Self {
        Self::from_names(LONDON_BOROUGHS)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.boroughs.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Borough> {
        self.boroughs.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Borough> {
        self.boroughs.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.boroughs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boroughs.is_empty()
    }

    /// Boroughs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Borough)> {
        self.boroughs.iter()
    }

    pub fn boroughs(&self) -> impl Iterator<Item = &Borough> {
        self.boroughs.values()
    }

    /// Find a borough by its display name (exact, case-sensitive)
    pub fn by_name(&self, name: &str) -> Option<&Borough> {
        self.boroughs.values().find(|b| b.name == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.boroughs.values().map(|b| b.name.clone()).collect()
    }

    pub(crate) fn clear_all(&mut self) {
        self.boroughs.values_mut().for_each(Borough::clear);
    }
}
