use crate::models::Coordinates;
use crate::services::route_generator::route_metrics::RouteMetrics;
use serde::{Deserialize, Serialize};

/// One remembered route. Stored newest-first as a JSON array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    /// Millisecond timestamp, unique within the stored list
    pub id: i64,
    /// Local time, e.g. `2026/10/19 9:05:03`
    pub created_at: String,
    pub points: Vec<Coordinates>,
    /// Measured distance with two decimals, e.g. `"3.12"`
    pub distance_km: String,
    pub route_type_label: String,
    pub start: Coordinates,
}

/// A history entry brought back for redrawing, with metrics measured again
/// from its points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoredRoute {
    pub entry: HistoryEntry,
    #[serde(flatten)]
    pub metrics: RouteMetrics,
}

impl RestoredRoute {
    pub fn new(entry: HistoryEntry) -> Self {
        let metrics = RouteMetrics::compute(&entry.points);
        RestoredRoute { entry, metrics }
    }
}
