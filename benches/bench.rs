// Criterion benchmarks for Listing Analytics

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use listing_analytics::config::EngineSettings;
use listing_analytics::core::{
    distance::distance_km,
    registry::{BoroughRegistry, LONDON_BOROUGHS},
    sorter::{sort_by, SortKey},
    BestMatchCriteria, ComparisonEngine, ListingStore, StatisticsEngine,
};
use listing_analytics::models::{Attraction, Listing, ENTIRE_HOME};

fn create_listing(id: usize) -> Listing {
    Listing {
        id: id.to_string(),
        name: if id % 7 == 0 { format!("Flat {} with garden", id) } else { format!("Flat {}", id) },
        host_id: (id % 997).to_string(),
        host_name: format!("Host {}", id % 997),
        neighbourhood: LONDON_BOROUGHS[id % LONDON_BOROUGHS.len()].to_string(),
        latitude: 51.3 + (id as f64 * 0.0001) % 0.4,
        longitude: -0.5 + (id as f64 * 0.0003) % 0.8,
        room_type: if id % 2 == 0 { ENTIRE_HOME } else { "Private room" }.to_string(),
        price: 20 + (id % 480) as i32,
        minimum_nights: 1 + (id % 7) as i32,
        number_of_reviews: (id % 120) as i32,
        last_review: String::new(),
        reviews_per_month: 0.5,
        host_listings_count: 1,
        availability_365: (id % 365) as i32,
        image: String::new(),
    }
}

fn create_dataset(count: usize) -> Vec<Listing> {
    (0..count).map(create_listing).collect()
}

fn bench_distance(c: &mut Criterion) {
    c.bench_function("distance_km", |b| {
        b.iter(|| {
            distance_km(
                black_box(51.41003566),
                black_box(-0.306322953),
                black_box(51.5074),
                black_box(-0.1277),
            )
        });
    });
}

fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");

    for count in [1_000, 10_000, 50_000].iter() {
        let listings = create_dataset(*count);
        group.bench_with_input(BenchmarkId::new("sort_by_price", count), count, |b, _| {
            b.iter(|| sort_by(black_box(&listings), SortKey::Price, true));
        });
        group.bench_with_input(BenchmarkId::new("sort_by_host_id", count), count, |b, _| {
            b.iter(|| sort_by(black_box(&listings), SortKey::HostId, false));
        });
    }

    group.finish();
}

fn bench_filtering(c: &mut Criterion) {
    let mut store = ListingStore::new(create_dataset(50_000), BoroughRegistry::london())
        .expect("generated neighbourhoods are London boroughs");

    c.bench_function("filter_by_price_50000_listings", |b| {
        b.iter(|| store.filter_by_price(black_box(50), black_box(250)));
    });
}

fn bench_statistics(c: &mut Criterion) {
    let store = ListingStore::new(create_dataset(20_000), BoroughRegistry::london())
        .expect("generated neighbourhoods are London boroughs");
    let attractions = vec![
        Attraction::new("Trafalgar Square", 51.5080, -0.1281),
        Attraction::new("Tower of London", 51.5081, -0.0759),
    ];
    let mut engine = StatisticsEngine::new(&store, attractions, &EngineSettings::default());

    c.bench_function("statistics_update_20000_listings", |b| {
        b.iter(|| engine.update(black_box(&store)));
    });
}

fn bench_best_match(c: &mut Criterion) {
    let mut comparison = ComparisonEngine::default();
    for listing in create_dataset(20) {
        comparison.add(listing);
    }
    let criteria = BestMatchCriteria::new(true, true, true);

    c.bench_function("best_match_20_listings", |b| {
        b.iter(|| comparison.best_match(black_box(&criteria)));
    });
}

criterion_group!(
    benches,
    bench_distance,
    bench_sorting,
    bench_filtering,
    bench_statistics,
    bench_best_match
);

criterion_main!(benches);
