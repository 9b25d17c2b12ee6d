use super::geometry::path_length_km;
use crate::constants::WALKING_SPEED_KMH;
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

/// Measured figures shown alongside a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    /// Sum of haversine legs. Can differ materially from the requested target.
    pub distance_km: f64,
    pub estimated_duration_minutes: f64,
    /// e.g. `1時間30分`
    pub duration_label: String,
    /// Interior points, excluding start and return
    pub waypoint_count: usize,
}

impl RouteMetrics {
    pub fn compute(points: &[Coordinates]) -> Self {
        let distance_km = total_distance_km(points);
        let estimated_duration_minutes = estimated_walking_minutes(distance_km);

        RouteMetrics {
            distance_km,
            estimated_duration_minutes,
            duration_label: format_duration(estimated_duration_minutes),
            waypoint_count: points.len().saturating_sub(2),
        }
    }
}

/// Measured length of a route: haversine distance over every consecutive pair.
pub fn total_distance_km(points: &[Coordinates]) -> f64 {
    path_length_km(points)
}

/// Walking time at a fixed 4.5 km/h.
pub fn estimated_walking_minutes(distance_km: f64) -> f64 {
    distance_km / WALKING_SPEED_KMH * 60.0
}

/// `45分` below an hour, `1時間30分` from an hour on.
///
/// The total is rounded to whole minutes before splitting into hours, so
/// 119.6 minutes reads `2時間0分` rather than `1時間60分`.
pub fn format_duration(minutes: f64) -> String {
    let total = minutes.max(0.0).round() as u64;
    let hours = total / 60;
    let mins = total % 60;

    if hours >= 1 {
        format!("{}時間{}分", hours, mins)
    } else {
        format!("{}分", mins)
    }
}
