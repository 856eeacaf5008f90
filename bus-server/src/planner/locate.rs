//! Proximity lookup over stops and other located things.

use crate::domain::{Coordinate, Stop, TouristSpot};

/// Anything with a fixed position.
pub trait Located {
    fn location(&self) -> &Coordinate;
}

impl Located for Stop {
    fn location(&self) -> &Coordinate {
        &self.location
    }
}

impl Located for TouristSpot {
    fn location(&self) -> &Coordinate {
        &self.location
    }
}

/// Returns every item within `radius_km` of `center`, boundary inclusive.
///
/// Items keep their input order. An empty result is not an error.
pub fn find_nearby<'a, T: Located>(center: &Coordinate, radius_km: f64, items: &'a [T]) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| center.distance_km(item.location()) <= radius_km)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;

    fn stop(id: &str, lat: f64, lng: f64) -> Stop {
        Stop::new(
            StopId::new(id).unwrap(),
            id,
            Coordinate::new(lat, lng).unwrap(),
            vec![],
        )
    }

    fn ids(stops: &[&Stop]) -> Vec<String> {
        stops.iter().map(|s| s.id.to_string()).collect()
    }

    #[test]
    fn finds_stops_inside_radius_in_catalog_order() {
        let stops = vec![
            stop("far", 0.0, 0.1),
            stop("b", 0.0, 0.002),
            stop("a", 0.001, 0.0),
        ];
        let center = Coordinate::new(0.0, 0.0).unwrap();

        let found = find_nearby(&center, 0.5, &stops);
        assert_eq!(ids(&found), ["b", "a"]);
    }

    #[test]
    fn radius_is_inclusive() {
        let stops = vec![stop("edge", 0.0, 0.004)];
        let center = Coordinate::new(0.0, 0.0).unwrap();
        let exact = center.distance_km(&stops[0].location);

        assert_eq!(find_nearby(&center, exact, &stops).len(), 1);
        assert!(find_nearby(&center, exact - 1e-9, &stops).is_empty());
    }

    #[test]
    fn empty_when_nothing_close() {
        let stops = vec![stop("far", 10.0, 10.0)];
        let center = Coordinate::new(0.0, 0.0).unwrap();
        assert!(find_nearby(&center, 0.5, &stops).is_empty());
    }

    #[test]
    fn zero_radius_matches_colocated_only() {
        let stops = vec![stop("here", 1.0, 1.0), stop("near", 1.0, 1.0001)];
        let center = Coordinate::new(1.0, 1.0).unwrap();
        assert_eq!(ids(&find_nearby(&center, 0.0, &stops)), ["here"]);
    }
}
