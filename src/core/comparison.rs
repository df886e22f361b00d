use crate::core::{
    distance::distance_km,
    scoring::{best_match_score, BestMatchCriteria},
};
use crate::models::{BestMatch, ComparisonHighlights, Listing, ReferencePoint};

/// Ordered list of listings the user is comparing side by side
///
/// Membership is checked by identifier only, unlike favourites which
/// compare every field.
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine {
    listings: Vec<Listing>,
    reference: ReferencePoint,
}

impl ComparisonEngine {
    pub fn new(reference: ReferencePoint) -> Self {
        Self {
            listings: Vec::new(),
            reference,
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn reference(&self) -> ReferencePoint {
        self.reference
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.listings.iter().any(|l| l.id == id)
    }

    /// Append a listing; returns false if one with the same id is already present
    pub fn add(&mut self, listing: Listing) -> bool {
        if self.contains_id(&listing.id) {
            tracing::warn!("Listing {} is already being compared", listing.id);
            return false;
        }
        self.listings.push(listing);
        true
    }

    /// Remove the first listing equal to `listing`; no-op when absent
    pub fn remove(&mut self, listing: &Listing) {
        if let Some(index) = self.listings.iter().position(|l| l == listing) {
            self.listings.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.listings.clear();
    }

    /// Choose the listing with the lowest score and move it to the front
    ///
    /// The first listing with the minimum score wins. With no criteria the
    /// first listing is returned with `matched = false`. Returns `None` for
    /// an empty comparison list.
    pub fn best_match(&mut self, criteria: &BestMatchCriteria) -> Option<BestMatch> {
        if self.listings.is_empty() {
            return None;
        }

        let mut best: Option<(usize, f64)> = None;
        for (index, listing) in self.listings.iter().enumerate() {
            let Some(score) = best_match_score(listing, criteria, &self.reference) else {
                break;
            };
            // NaN never leads once a comparable score has been seen
            let replaces = match best {
                None => true,
                Some((_, best_score)) => {
                    score < best_score || (best_score.is_nan() && !score.is_nan())
                }
            };
            if replaces {
                best = Some((index, score));
            }
        }

        let (index, score) = match best {
            Some((index, score)) => (index, Some(score)),
            None => (0, None),
        };

        let winner = self.listings.remove(index);
        self.listings.insert(0, winner.clone());

        tracing::debug!(
            "Best match {} (score {:?}) out of {} listings",
            winner.id,
            score,
            self.listings.len()
        );

        Some(BestMatch {
            listing: winner,
            matched: score.is_some(),
            score,
        })
    }

    /// Lowest price, distance and minimum stay across the comparison list
    pub fn highlights(&self) -> Option<ComparisonHighlights> {
        let first = self.listings.first()?;
        let initial = ComparisonHighlights {
            min_price: first.price,
            min_distance_km: self.distance_from_reference(first),
            min_nights: first.minimum_nights,
        };

        Some(self.listings.iter().skip(1).fold(initial, |acc, listing| {
            ComparisonHighlights {
                min_price: acc.min_price.min(listing.price),
                min_distance_km: acc.min_distance_km.min(self.distance_from_reference(listing)),
                min_nights: acc.min_nights.min(listing.minimum_nights),
            }
        }))
    }

    pub fn distance_from_reference(&self, listing: &Listing) -> f64 {
        distance_km(
            listing.latitude,
            listing.longitude,
            self.reference.latitude,
            self.reference.longitude,
        )
    }
}
