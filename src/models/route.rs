use crate::constants::{MAX_TARGET_DISTANCE_KM, MAX_WAYPOINTS};
use crate::models::Coordinates;
use crate::services::route_generator::route_metrics::RouteMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteType {
    /// Irregular polygon around the start point
    #[default]
    Loop,
    /// Meandering outbound leg, returning along the same points
    OutAndBack,
    /// Heading drifts step by step, then a straight line home
    Random,
}

impl RouteType {
    pub const ALL: [RouteType; 3] = [RouteType::Loop, RouteType::OutAndBack, RouteType::Random];

    /// Display label stored with history entries
    pub fn label(&self) -> &'static str {
        match self {
            RouteType::Loop => "周回コース",
            RouteType::OutAndBack => "往復コース",
            RouteType::Random => "ランダム探索",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteType::Loop => write!(f, "loop"),
            RouteType::OutAndBack => write!(f, "out-and-back"),
            RouteType::Random => write!(f, "random"),
        }
    }
}

impl FromStr for RouteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "loop" => Ok(RouteType::Loop),
            "out-and-back" | "out_and_back" => Ok(RouteType::OutAndBack),
            "random" | "random-walk" => Ok(RouteType::Random),
            _ => Err(format!("Invalid route type: '{}'", s)),
        }
    }
}

// Request/Response types for API endpoints

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Unset until the user clicks the map or a geolocation lookup succeeds
    #[serde(default)]
    pub start_point: Option<Coordinates>,
    pub distance_km: f64,
    #[serde(default)]
    pub route_type: RouteType,
    #[serde(default = "default_waypoints")]
    pub waypoints: u32,
}

fn default_waypoints() -> u32 {
    5
}

impl RouteRequest {
    pub fn new(
        start_point: Coordinates,
        distance_km: f64,
        route_type: RouteType,
        waypoints: u32,
    ) -> Self {
        RouteRequest {
            start_point: Some(start_point),
            distance_km,
            route_type,
            waypoints,
        }
    }

    /// Range checks on the numeric parameters and, if present, the start point.
    /// A missing start point is not checked here; generation reports it as
    /// [`AppError::StartNotSet`](crate::error::AppError::StartNotSet).
    pub fn validate(&self) -> Result<(), String> {
        if !self.distance_km.is_finite()
            || self.distance_km <= 0.0
            || self.distance_km > MAX_TARGET_DISTANCE_KM
        {
            return Err(format!(
                "distance_km must be greater than 0 and at most {}",
                MAX_TARGET_DISTANCE_KM
            ));
        }
        if !(1..=MAX_WAYPOINTS).contains(&self.waypoints) {
            return Err(format!("waypoints must be between 1 and {}", MAX_WAYPOINTS));
        }
        if let Some(start) = self.start_point {
            Coordinates::new(start.lat, start.lng)?;
        }
        Ok(())
    }
}

/// A synthesized route with its measured metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedRoute {
    pub route_type: RouteType,
    pub target_distance_km: f64,
    /// Start, waypoints in generation order, then back to start
    pub points: Vec<Coordinates>,
    #[serde(flatten)]
    pub metrics: RouteMetrics,
}

impl GeneratedRoute {
    pub fn new(route_type: RouteType, target_distance_km: f64, points: Vec<Coordinates>) -> Self {
        let metrics = RouteMetrics::compute(&points);
        GeneratedRoute {
            route_type,
            target_distance_km,
            points,
            metrics,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    pub route: GeneratedRoute,
    /// Id of the history entry for this route. If the history write failed
    /// the id will not be listed.
    pub history_id: i64,
}
