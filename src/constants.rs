//! Stable application-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! Runtime knobs live in [`Config`](crate::config::Config).

use std::f64::consts::FRAC_PI_2;

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Geodesy ---

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Kilometers per degree of latitude in the equirectangular offset approximation.
/// Longitude degrees shrink by `cos(lat)`.
pub const KM_PER_DEGREE: f64 = 111.0;

// --- Walking metrics ---

/// Average walking speed behind every duration estimate.
pub const WALKING_SPEED_KMH: f64 = 4.5;

// --- Request limits ---
// Generators clamp degenerate input; the HTTP boundary rejects it using these.

/// Smallest target distance a generator will work with.
pub const MIN_TARGET_DISTANCE_KM: f64 = 0.01;
/// Largest target distance accepted over HTTP. Beyond this the planar offset
/// approximation visibly distorts route shapes.
pub const MAX_TARGET_DISTANCE_KM: f64 = 50.0;
/// Largest waypoint count accepted over HTTP.
pub const MAX_WAYPOINTS: u32 = 50;

// --- Pattern coefficients ---

/// Loop waypoints sit at `radius * U(MIN, MAX)` from the start.
pub const LOOP_RADIUS_JITTER_MIN: f64 = 0.7;
pub const LOOP_RADIUS_JITTER_MAX: f64 = 1.3;
/// Per-segment bearing wobble (radians, +/-) on the outbound leg of an out-and-back.
pub const OUT_AND_BACK_BEARING_JITTER_RAD: f64 = 0.25;
/// Per-step heading change (radians, +/-) of the random walk. Cumulative.
pub const RANDOM_WALK_TURN_RAD: f64 = FRAC_PI_2;

// --- History ---

/// Storage key holding the serialized history list.
pub const HISTORY_STORAGE_KEY: &str = "walking-route-history";
/// History keeps only the most recent entries.
pub const MAX_HISTORY_ENTRIES: usize = 10;
/// Offset used to render `created_at`. Overridden by `HISTORY_UTC_OFFSET_HOURS`.
pub const DEFAULT_HISTORY_UTC_OFFSET_HOURS: i8 = 9;

// --- Geolocation ---

/// How long a position lookup may take before it counts as a timeout.
/// Overridden by `GEOLOCATION_TIMEOUT_SECS`.
pub const DEFAULT_GEOLOCATION_TIMEOUT_SECS: u64 = 10;
