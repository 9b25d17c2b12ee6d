use super::clamp_inputs;
use crate::constants::OUT_AND_BACK_BEARING_JITTER_RAD;
use crate::models::Coordinates;
use rand::Rng;
use std::f64::consts::TAU;

/// Walk out along one random main bearing, then come back the same way.
///
/// Half the target goes to the outbound leg, split into `ceil(n / 2)` equal
/// segments whose bearings each wobble independently around the main one.
/// The return leg is the outbound points reversed without the turnaround
/// point, so the route is `2 * ceil(n / 2) + 1` points long and ends on start.
pub fn generate_out_and_back<R: Rng + ?Sized>(
    rng: &mut R,
    start: Coordinates,
    target_distance_km: f64,
    waypoints: u32,
) -> Vec<Coordinates> {
    let (target_distance_km, num_waypoints) = clamp_inputs(target_distance_km, waypoints);

    let half_distance_km = target_distance_km / 2.0;
    let main_bearing = rng.random_range(0.0..TAU);
    let outbound_segments = num_waypoints.div_ceil(2);
    let segment_km = half_distance_km / outbound_segments as f64;

    let mut points = Vec::with_capacity(2 * outbound_segments + 1);
    points.push(start);

    let mut current = start;
    for _ in 0..outbound_segments {
        let bearing = main_bearing
            + rng.random_range(-OUT_AND_BACK_BEARING_JITTER_RAD..OUT_AND_BACK_BEARING_JITTER_RAD);
        current = current.offset(segment_km, bearing);
        points.push(current);
    }

    let return_leg: Vec<Coordinates> = points.iter().rev().skip(1).copied().collect();
    points.extend(return_leg);

    tracing::debug!(
        outbound_segments,
        segment_km,
        "Generated out-and-back with {} outbound segments of {:.3}km",
        outbound_segments,
        segment_km
    );

    points
}
