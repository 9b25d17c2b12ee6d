use super::clamp_inputs;
use crate::constants::RANDOM_WALK_TURN_RAD;
use crate::models::Coordinates;
use rand::Rng;
use std::f64::consts::TAU;

/// Wander from `start` in `n` equal steps of `target / n`, turning by up to
/// ±90° before each step. The heading accumulates, so the walk drifts rather
/// than resetting direction every step.
///
/// The last point is forced back to `start`. That closing leg is not part of
/// the distance budget: the measured route is longer than the target by
/// however far the walk strayed. Output is `n + 2` points.
pub fn generate_random_walk<R: Rng + ?Sized>(
    rng: &mut R,
    start: Coordinates,
    target_distance_km: f64,
    waypoints: u32,
) -> Vec<Coordinates> {
    let (target_distance_km, num_waypoints) = clamp_inputs(target_distance_km, waypoints);

    let segment_km = target_distance_km / num_waypoints as f64;
    let mut bearing = rng.random_range(0.0..TAU);

    let mut points = Vec::with_capacity(num_waypoints + 2);
    points.push(start);

    let mut current = start;
    for _ in 0..num_waypoints {
        bearing += rng.random_range(-RANDOM_WALK_TURN_RAD..RANDOM_WALK_TURN_RAD);
        current = current.offset(segment_km, bearing);
        points.push(current);
    }

    let closing_leg_km = current.distance_to(&start);
    points.push(start);

    tracing::debug!(
        steps = num_waypoints,
        segment_km,
        closing_leg_km,
        "Generated random walk: {} steps of {:.3}km, {:.3}km back to start",
        num_waypoints,
        segment_km,
        closing_leg_km
    );

    points
}
