use crate::services::route_generator::geometry;
use serde::{Deserialize, Serialize};

/// A (latitude, longitude) pair in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Checked constructor for untrusted input (HTTP bodies, config).
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Build without range checks. Generated points may drift past the poles
    /// or the antimeridian and are passed through as-is.
    pub fn from_raw(lat: f64, lng: f64) -> Self {
        Coordinates { lat, lng }
    }

    /// Great-circle distance in kilometers (haversine).
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        geometry::haversine_distance_km(self, other)
    }

    /// Point `distance_km` away along `bearing_rad` (0 = north, clockwise),
    /// using the planar approximation from [`geometry::offset_coordinate`].
    pub fn offset(&self, distance_km: f64, bearing_rad: f64) -> Coordinates {
        geometry::offset_coordinate(self, distance_km, bearing_rad)
    }
}
