use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Listing;

/// Listing attribute a sequence can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Price,
    /// Price of the shortest allowed stay (minimum nights * price)
    MinimumPrice,
    MinimumNights,
    Reviews,
    HostName,
    HostId,
    Neighbourhood,
}

impl SortKey {
    /// Ascending comparison of two listings under this key
    ///
    /// Strings compare by code point, not by locale.
    pub fn compare(self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::MinimumPrice => a.minimum_price().cmp(&b.minimum_price()),
            SortKey::MinimumNights => a.minimum_nights.cmp(&b.minimum_nights),
            SortKey::Reviews => a.number_of_reviews.cmp(&b.number_of_reviews),
            SortKey::HostName => a.host_name.cmp(&b.host_name),
            SortKey::HostId => a.host_id.cmp(&b.host_id),
            SortKey::Neighbourhood => a.neighbourhood.cmp(&b.neighbourhood),
        }
    }
}

/// Return a stably sorted copy of `listings`
///
/// Descending order is the exact reverse of the ascending order, so tied
/// listings appear in reverse input order rather than input order.
pub fn sort_by(listings: &[Listing], key: SortKey, ascending: bool) -> Vec<Listing> {
    let mut sorted = listings.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    if !ascending {
        sorted.reverse();
    }
    sorted
}

/// Sort display names case-insensitively, keeping input order for equal names
pub fn sort_names_case_insensitive(names: &mut [String]) {
    names.sort_by_cached_key(|name| name.to_lowercase());
}
