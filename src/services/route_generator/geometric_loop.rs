use super::clamp_inputs;
use crate::constants::{LOOP_RADIUS_JITTER_MAX, LOOP_RADIUS_JITTER_MIN};
use crate::models::Coordinates;
use rand::Rng;
use std::f64::consts::TAU;

/// Circular course around `start`.
///
/// The target distance is read as a circumference, so the base radius is
/// `target / 2π`. Waypoints sit at evenly spaced angles from one random
/// offset, each at its own jittered radius, which gives an irregular polygon
/// instead of a circle. Output is `start, w1..wn, start` (n + 2 points).
pub fn generate_loop<R: Rng + ?Sized>(
    rng: &mut R,
    start: Coordinates,
    target_distance_km: f64,
    waypoints: u32,
) -> Vec<Coordinates> {
    let (target_distance_km, num_waypoints) = clamp_inputs(target_distance_km, waypoints);

    let base_radius_km = target_distance_km / TAU;
    let angle_offset = rng.random_range(0.0..TAU);

    let mut points = Vec::with_capacity(num_waypoints + 2);
    points.push(start);

    for i in 0..num_waypoints {
        let angle = angle_offset + TAU * i as f64 / num_waypoints as f64;
        let radius_km =
            base_radius_km * rng.random_range(LOOP_RADIUS_JITTER_MIN..LOOP_RADIUS_JITTER_MAX);
        points.push(start.offset(radius_km, angle));
    }

    points.push(start); // Return to start

    tracing::debug!(
        waypoints = num_waypoints,
        base_radius_km,
        "Generated loop with {} waypoints (base radius: {:.3}km)",
        num_waypoints,
        base_radius_km
    );

    points
}
