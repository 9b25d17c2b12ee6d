mod geometric_loop;
pub mod geometry;
mod out_and_back;
mod random_walk;
pub mod route_metrics;

use crate::constants::MIN_TARGET_DISTANCE_KM;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, GeneratedRoute, RouteRequest, RouteType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

pub use geometric_loop::generate_loop;
pub use out_and_back::generate_out_and_back;
pub use random_walk::generate_random_walk;

/// Generators are defined for `waypoints >= 1` and a positive distance only.
/// Anything else is pulled into range instead of producing NaN coordinates.
pub(crate) fn clamp_inputs(target_distance_km: f64, waypoints: u32) -> (f64, usize) {
    let distance = if target_distance_km.is_finite() && target_distance_km > MIN_TARGET_DISTANCE_KM
    {
        target_distance_km
    } else {
        tracing::debug!(
            "Clamping target distance {} to {}km",
            target_distance_km,
            MIN_TARGET_DISTANCE_KM
        );
        MIN_TARGET_DISTANCE_KM
    };

    (distance, waypoints.max(1) as usize)
}

/// Point sequence for one route type, drawing randomness from `rng`.
pub fn generate_points<R: Rng + ?Sized>(
    rng: &mut R,
    route_type: RouteType,
    start: Coordinates,
    target_distance_km: f64,
    waypoints: u32,
) -> Vec<Coordinates> {
    match route_type {
        RouteType::Loop => generate_loop(rng, start, target_distance_km, waypoints),
        RouteType::OutAndBack => generate_out_and_back(rng, start, target_distance_km, waypoints),
        RouteType::Random => generate_random_walk(rng, start, target_distance_km, waypoints),
    }
}

/// Turns route requests into measured routes.
///
/// Owns its random source so handlers can share one instance. Output is
/// intentionally different on every call; seed only for structural tests.
pub struct RouteSynthesizer {
    rng: Mutex<StdRng>,
}

impl RouteSynthesizer {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        RouteSynthesizer {
            rng: Mutex::new(rng),
        }
    }

    /// Validate a request and synthesize its route.
    ///
    /// A request without a start point fails with [`AppError::StartNotSet`]
    /// and nothing is generated.
    pub fn generate(&self, request: &RouteRequest) -> Result<GeneratedRoute> {
        let start = request.start_point.ok_or(AppError::StartNotSet)?;
        request.validate().map_err(AppError::InvalidRequest)?;

        tracing::info!(
            lat = start.lat,
            lng = start.lng,
            distance_km = request.distance_km,
            route_type = %request.route_type,
            waypoints = request.waypoints,
            "Route request: ({:.4}, {:.4}), {:.1}km, type={}, waypoints={}",
            start.lat,
            start.lng,
            request.distance_km,
            request.route_type,
            request.waypoints
        );

        let route = self.generate_route(
            request.route_type,
            start,
            request.distance_km,
            request.waypoints,
        );

        tracing::info!(
            "Route generated: {:.2}km measured (target: {}km), {}",
            route.metrics.distance_km,
            request.distance_km,
            route.metrics.duration_label
        );

        Ok(route)
    }

    /// Synthesize without request validation. Degenerate inputs are clamped.
    pub fn generate_route(
        &self,
        route_type: RouteType,
        start: Coordinates,
        target_distance_km: f64,
        waypoints: u32,
    ) -> GeneratedRoute {
        let points = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            generate_points(&mut *rng, route_type, start, target_distance_km, waypoints)
        };

        GeneratedRoute::new(route_type, target_distance_km, points)
    }
}

impl Default for RouteSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokyo() -> Coordinates {
        Coordinates::new(35.6812, 139.7671).unwrap()
    }

    #[test]
    fn clamp_inputs_guards_degenerate_values() {
        assert_eq!(clamp_inputs(3.0, 5), (3.0, 5));
        assert_eq!(clamp_inputs(3.0, 0), (3.0, 1));
        assert_eq!(clamp_inputs(0.0, 5).0, MIN_TARGET_DISTANCE_KM);
        assert_eq!(clamp_inputs(-2.0, 5).0, MIN_TARGET_DISTANCE_KM);
        assert_eq!(clamp_inputs(f64::NAN, 5).0, MIN_TARGET_DISTANCE_KM);
        assert_eq!(clamp_inputs(f64::INFINITY, 5).0, MIN_TARGET_DISTANCE_KM);
    }

    #[test]
    fn missing_start_is_rejected() {
        let synthesizer = RouteSynthesizer::with_seed(1);
        let request = RouteRequest {
            start_point: None,
            distance_km: 3.0,
            route_type: RouteType::Loop,
            waypoints: 5,
        };
        assert!(matches!(
            synthesizer.generate(&request),
            Err(AppError::StartNotSet)
        ));
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let synthesizer = RouteSynthesizer::with_seed(1);
        let request = RouteRequest::new(tokyo(), 3.0, RouteType::Random, 0);
        assert!(matches!(
            synthesizer.generate(&request),
            Err(AppError::InvalidRequest(_))
        ));
    }

    #[test]
    fn every_type_closes_and_measures_positive() {
        let synthesizer = RouteSynthesizer::with_seed(42);
        for route_type in RouteType::ALL {
            for waypoints in [1, 2, 5, 10] {
                let request = RouteRequest::new(tokyo(), 3.0, route_type, waypoints);
                let route = synthesizer.generate(&request).unwrap();

                assert_eq!(route.points.first().copied(), Some(tokyo()));
                assert_eq!(route.points.last().copied(), Some(tokyo()));
                assert!(route.metrics.distance_km > 0.0);
                assert_eq!(route.route_type, route_type);
                assert_eq!(route.metrics.waypoint_count, route.points.len() - 2);
            }
        }
    }

    #[test]
    fn generate_route_clamps_zero_waypoints() {
        let synthesizer = RouteSynthesizer::with_seed(2);
        let route = synthesizer.generate_route(RouteType::Loop, tokyo(), 0.0, 0);
        assert_eq!(route.points.len(), 3);
        assert!(route.metrics.distance_km > 0.0);
    }

    #[test]
    fn consecutive_calls_differ() {
        let synthesizer = RouteSynthesizer::new();
        let request = RouteRequest::new(tokyo(), 3.0, RouteType::Loop, 5);
        let a = synthesizer.generate(&request).unwrap();
        let b = synthesizer.generate(&request).unwrap();
        assert_ne!(a.points, b.points);
    }
}
