//! Tourist spot directory.

use std::sync::Arc;

use crate::domain::{Coordinate, TouristSpot};
use crate::planner::find_nearby;

/// Default search radius for nearby spots (km).
pub const DEFAULT_SPOT_RADIUS_KM: f64 = 5.0;

/// Read-only list of tourist spots.
#[derive(Debug, Clone, Default)]
pub struct SpotDirectory {
    spots: Arc<Vec<TouristSpot>>,
}

impl SpotDirectory {
    pub fn new(spots: Vec<TouristSpot>) -> Self {
        Self {
            spots: Arc::new(spots),
        }
    }

    /// Every spot, in load order.
    pub fn all(&self) -> &[TouristSpot] {
        &self.spots
    }

    /// Spots within `radius_km` of `center`, in load order.
    pub fn nearby(&self, center: &Coordinate, radius_km: f64) -> Vec<&TouristSpot> {
        find_nearby(center, radius_km, self.spots.as_slice())
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SpotId;

    fn spot(id: &str, lat: f64, lng: f64) -> TouristSpot {
        TouristSpot {
            id: SpotId::new(id).unwrap(),
            name: id.into(),
            description: String::new(),
            location: Coordinate::new(lat, lng).unwrap(),
            category: "Park".into(),
            rating: Some(4.5),
            image_url: None,
        }
    }

    #[test]
    fn nearby_filters_by_radius() {
        // ~1.1 km, ~4.4 km and ~11 km from the centre
        let dir = SpotDirectory::new(vec![
            spot("near", 0.0, 0.01),
            spot("edge", 0.0, 0.04),
            spot("far", 0.0, 0.1),
        ]);
        let center = Coordinate::new(0.0, 0.0).unwrap();

        let ids: Vec<&str> = dir
            .nearby(&center, DEFAULT_SPOT_RADIUS_KM)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, ["near", "edge"]);
        assert!(dir.nearby(&center, 0.5).is_empty());
        assert_eq!(dir.all().len(), 3);
        assert_eq!(dir.len(), 3);
    }

    #[test]
    fn empty_directory() {
        let dir = SpotDirectory::default();
        assert!(dir.is_empty());
        assert!(dir.nearby(&Coordinate::new(0.0, 0.0).unwrap(), 100.0).is_empty());
    }
}
