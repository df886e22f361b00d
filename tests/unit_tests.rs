// Unit tests for Listing Analytics

use listing_analytics::core::{
    distance::distance_km,
    registry::BoroughRegistry,
    sorter::{sort_by, SortKey},
    store::ListingStore,
};
use listing_analytics::models::{Listing, PriceRange};

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    host_id: &str,
    host_name: &str,
    neighbourhood: &str,
    latitude: f64,
    longitude: f64,
    price: i32,
    minimum_nights: i32,
    number_of_reviews: i32,
    last_review: &str,
    reviews_per_month: f64,
    availability_365: i32,
) -> Listing {
    Listing {
        id: id.to_string(),
        name: name.to_string(),
        host_id: host_id.to_string(),
        host_name: host_name.to_string(),
        neighbourhood: neighbourhood.to_string(),
        latitude,
        longitude,
        room_type: "Private room".to_string(),
        price,
        minimum_nights,
        number_of_reviews,
        last_review: last_review.to_string(),
        reviews_per_month,
        host_listings_count: 1,
        availability_365,
        image: String::new(),
    }
}

fn test_dataset() -> Vec<Listing> {
    vec![
        listing("13355982", "Lovely double bedroom in Kingston Upon Thames", "75741819", "Maria", "Camden", 51.41585101, -0.28649628, 24, 1, 2, "27/07/2016", 0.25, 0),
        listing("4836957", "Modern room 25m from Central London", "18154504", "Anas", "Kingston upon Thames", 51.41148217, -0.290704075, 50, 1, 15, "07/09/2016", 0.67, 364),
        listing("13472704", "Double Room in North Kingston (Richmond Park)", "77078182", "Hannah", "City of London", 51.41572344, -0.292245941, 50, 2, 0, "", 0.0, 0),
        listing("15896822", "Double room in newly refurbished flat", "69018624", "Dafina", "Kingston upon Thames", 51.41003566, -0.306322953, 23, 7, 1, "03/12/2016", 0.32, 61),
    ]
}

fn ids(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.id.as_str()).collect()
}

fn create_store() -> ListingStore {
    ListingStore::new(test_dataset(), BoroughRegistry::london()).unwrap()
}

#[test]
fn test_distance_zero_for_same_point() {
    for l in test_dataset() {
        assert_eq!(distance_km(l.latitude, l.longitude, l.latitude, l.longitude), 0.0);
    }
}

#[test]
fn test_distance_kingston_to_centre() {
    // Kingston upon Thames to Charing Cross is roughly 15 km
    let distance = distance_km(51.41003566, -0.306322953, 51.5074, -0.1277);
    assert!(distance > 14.0 && distance < 18.0, "got {}", distance);
}

#[test]
fn test_sort_by_price_ascending() {
    let sorted = sort_by(&test_dataset(), SortKey::Price, true);
    assert_eq!(ids(&sorted), vec!["15896822", "13355982", "4836957", "13472704"]);
}

#[test]
fn test_sort_by_price_descending_reverses_ties() {
    let sorted = sort_by(&test_dataset(), SortKey::Price, false);
    assert_eq!(ids(&sorted), vec!["13472704", "4836957", "13355982", "15896822"]);
}

#[test]
fn test_sort_idempotent() {
    for key in [
        SortKey::Price,
        SortKey::MinimumPrice,
        SortKey::MinimumNights,
        SortKey::Reviews,
        SortKey::HostName,
        SortKey::HostId,
        SortKey::Neighbourhood,
    ] {
        let once = sort_by(&test_dataset(), key, true);
        let twice = sort_by(&once, key, true);
        assert_eq!(once, twice, "{:?} is not idempotent", key);
    }
}

#[test]
fn test_sort_by_host_name() {
    let ascending = sort_by(&test_dataset(), SortKey::HostName, true);
    assert_eq!(ids(&ascending), vec!["4836957", "15896822", "13472704", "13355982"]);
}

#[test]
fn test_sort_by_neighbourhood() {
    let ascending = sort_by(&test_dataset(), SortKey::Neighbourhood, true);
    assert_eq!(ids(&ascending), vec!["13355982", "13472704", "4836957", "15896822"]);
}

#[test]
fn test_sort_by_reviews_and_nights() {
    let reviews = sort_by(&test_dataset(), SortKey::Reviews, false);
    assert_eq!(ids(&reviews), vec!["4836957", "13355982", "15896822", "13472704"]);

    let nights = sort_by(&test_dataset(), SortKey::MinimumNights, true);
    assert_eq!(ids(&nights), vec!["13355982", "4836957", "13472704", "15896822"]);
}

#[test]
fn test_price_range() {
    assert_eq!(create_store().price_range().unwrap(), PriceRange { min: 23, max: 50 });
}

#[test]
fn test_filter_price() {
    let mut store = create_store();

    // Single property
    store.filter_by_price(23, 23);
    assert_eq!(ids(store.filtered()), vec!["15896822"]);

    // Full range boundaries
    store.filter_by_price(23, 50);
    assert_eq!(store.filtered(), store.listings());

    // Gap between prices
    store.filter_by_price(25, 49);
    assert!(store.filtered().is_empty());

    // Below every price
    store.filter_by_price(0, 22);
    assert!(store.filtered().is_empty());

    // Inverted range
    store.filter_by_price(22, 0);
    assert!(store.filtered().is_empty());

    // Wide bounds
    store.filter_by_price(-10, 10_000_000);
    assert_eq!(store.filtered(), store.listings());
}

#[test]
fn test_filter_price_range_round_trip() {
    let mut store = create_store();
    let range = store.price_range().unwrap();
    store.filter_by_price(range.min, range.max);
    assert_eq!(store.filtered(), store.listings());
}

#[test]
fn test_filter_neighbourhood() {
    let store = create_store();

    assert_eq!(ids(&store.filter_by_neighbourhood(&["City of London"])), vec!["13472704"]);
    assert!(store.filter_by_neighbourhood(&["Croydon"]).is_empty());
    assert_eq!(
        ids(&store.filter_by_neighbourhood(&["Camden", "Kingston upon Thames"])),
        vec!["13355982", "4836957", "15896822"]
    );
}

#[test]
fn test_favourite_toggle_is_own_inverse() {
    let mut store = create_store();
    let first = store.listings()[0].clone();
    let listing = store.listings()[2].clone();

    store.toggle_favourite(&first);
    let before = store.favourites().to_vec();

    store.toggle_favourite(&listing);
    assert!(store.is_favourite(&listing));
    store.toggle_favourite(&listing);

    assert_eq!(store.favourites(), before.as_slice());
}

#[test]
fn test_favourites_compare_all_fields() {
    let mut store = create_store();
    let listing = store.listings()[0].clone();
    let mut edited = listing.clone();
    edited.availability_365 += 1;

    store.toggle_favourite(&listing);
    store.toggle_favourite(&edited);

    // Same id, different fields: both are kept
    assert_eq!(store.favourites().len(), 2);
}
