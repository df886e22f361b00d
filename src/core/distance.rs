use geo::Point;

/// Statute miles per nautical mile, as used by the legacy minutes-of-arc formula
const STATUTE_MILES_PER_NAUTICAL_MILE: f64 = 1.1515;

/// Kilometres per statute mile
const KM_PER_MILE: f64 = 1.609344;

/// Arc minutes per degree
const MINUTES_PER_DEGREE: f64 = 60.0;

/// Calculate the great-circle distance between two points in kilometres
///
/// Uses the spherical law of cosines: the central angle in degrees is
/// converted to nautical miles (one per arc minute), then to statute miles
/// and finally kilometres.
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometres. Inputs outside [-90, 90] / [-180, 180] give
/// meaningless or NaN results; callers validate coordinates first.
#[inline]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    // acos loses precision near 1.0, so identical points never reach it
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let theta = (lon1 - lon2).to_radians();
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let mut cosine = lat1_rad.sin() * lat2_rad.sin() + lat1_rad.cos() * lat2_rad.cos() * theta.cos();
    // Rounding can push nearby points just above 1.0; NaN is left to propagate
    if cosine > 1.0 {
        cosine = 1.0;
    }

    let angle = cosine.acos().to_degrees();

    angle * MINUTES_PER_DEGREE * STATUTE_MILES_PER_NAUTICAL_MILE * KM_PER_MILE
}

/// Distance between two geo points (x = longitude, y = latitude) in kilometres
#[inline]
pub fn distance_between(a: Point<f64>, b: Point<f64>) -> f64 {
    distance_km(a.y(), a.x(), b.y(), b.x())
}

/// Check that a coordinate lies inside the valid latitude/longitude domain
#[inline]
pub fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::HaversineDistance;

    #[test]
    fn test_distance_london_to_paris() {
        // Distance from London to Paris (approximately 344 km)
        let distance = distance_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_same_point_is_zero() {
        for (lat, lon) in [(51.5074, -0.1277), (51.41003566, -0.306322953), (0.0, 0.0), (-33.8688, 151.2093)] {
            assert_eq!(distance_km(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_close_to_haversine() {
        let a = Point::new(-0.306322953, 51.41003566);
        let b = Point::new(-0.1277, 51.5074);

        let ours = distance_between(a, b);
        let haversine_km = a.haversine_distance(&b) / 1000.0;

        // The legacy constants give a slightly larger earth radius
        assert!((ours - haversine_km).abs() / haversine_km < 0.01);
    }

    #[test]
    fn test_symmetric() {
        let forward = distance_km(51.41585101, -0.28649628, 51.5074, -0.1277);
        let backward = distance_km(51.5074, -0.1277, 51.41585101, -0.28649628);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(distance_km(f64::NAN, 0.0, 51.5, -0.12).is_nan());
    }

    #[test]
    fn test_coordinate_domain() {
        assert!(is_valid_coordinate(51.5, -0.12));
        assert!(is_valid_coordinate(-90.0, 180.0));
        assert!(!is_valid_coordinate(90.5, 0.0));
        assert!(!is_valid_coordinate(0.0, -180.1));
    }
}
