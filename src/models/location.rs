//! Geographic location type.

use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A stop (or the depot) identified by its position in the location table.
///
/// Index 0 of the table is conventionally the depot. Serialized as a
/// `[latitude, longitude]` pair.
///
/// # Examples
///
/// ```
/// use rover_routing::models::Location;
///
/// let depot = Location::new(40.7128, -74.0060);
/// assert_eq!(depot.latitude(), 40.7128);
/// assert_eq!(serde_json::to_string(&depot).unwrap(), "[40.7128,-74.006]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a location from degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another location, in kilometres.
    pub fn haversine_km(&self, other: &Location) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

impl From<[f64; 2]> for Location {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Location> for [f64; 2] {
    fn from(location: Location) -> Self {
        [location.latitude, location.longitude]
    }
}
