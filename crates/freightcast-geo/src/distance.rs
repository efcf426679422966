use freightcast_core::models::Coordinate;
use geo::{Distance, Haversine, Point};

use crate::cities::CityTable;

/// Great-circle distance between two coordinates in kilometers.
///
/// Haversine on the mean earth radius stays within 0.5% of the WGS 84
/// geodesic.
pub fn great_circle_km(a: Coordinate, b: Coordinate) -> f64 {
    let p1 = Point::new(a.lon, a.lat);
    let p2 = Point::new(b.lon, b.lat);
    Haversine.distance(p1, p2) / 1000.0
}

impl CityTable {
    /// Distance between two named cities, or `None` if either is unknown
    pub fn distance_km(&self, from: &str, to: &str) -> Option<f64> {
        let a = self.coordinate(from)?;
        let b = self.coordinate(to)?;
        Some(great_circle_km(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_on_equator() {
        let d = great_circle_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!((d - 111.195).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_khorgos_to_almaty() {
        let table = CityTable::builtin();
        let d = table.distance_km("Khorgos", "Almaty").unwrap();
        // Roughly 307 km great-circle
        assert!(d > 300.0 && d < 315.0, "got {}", d);
    }

    #[test]
    fn test_unknown_city() {
        let table = CityTable::builtin();
        assert!(table.distance_km("Khorgos", "Atlantis").is_none());
        assert!(table.distance_km("Atlantis", "Khorgos").is_none());
    }

    #[test]
    fn test_same_city_is_zero() {
        let table = CityTable::builtin();
        assert_eq!(table.distance_km("Moscow", "Moscow"), Some(0.0));
    }
}
