use crate::constants::{EARTH_RADIUS_KM, KM_PER_DEGREE};
use crate::models::Coordinates;

/// Degrees to radians
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Radians to degrees
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

/// Great-circle distance between two coordinates in kilometers.
/// Identical points yield exactly 0.
pub fn haversine_distance_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let delta_lat = deg_to_rad(b.lat - a.lat);
    let delta_lng = deg_to_rad(b.lng - a.lng);

    let h = (delta_lat / 2.0).sin().powi(2)
        + deg_to_rad(a.lat).cos() * deg_to_rad(b.lat).cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Destination point via an equirectangular approximation, not a spherical
/// offset: one degree of latitude is 111 km, one degree of longitude is
/// `111 * cos(origin.lat)` km. Route shapes depend on this exact formula.
///
/// Accurate at neighborhood scale; drifts at high latitudes and beyond ~20 km.
pub fn offset_coordinate(origin: &Coordinates, distance_km: f64, bearing_rad: f64) -> Coordinates {
    let d_lat = distance_km * bearing_rad.cos() / KM_PER_DEGREE;
    let d_lng =
        distance_km * bearing_rad.sin() / (KM_PER_DEGREE * deg_to_rad(origin.lat).cos());

    Coordinates::from_raw(origin.lat + d_lat, origin.lng + d_lng)
}

/// Sum of haversine distances between consecutive points.
/// Empty and single-point paths measure 0.
pub fn path_length_km(points: &[Coordinates]) -> f64 {
    points
        .windows(2)
        .map(|w| haversine_distance_km(&w[0], &w[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn tokyo_station() -> Coordinates {
        Coordinates::new(35.6812, 139.7671).unwrap()
    }

    #[test]
    fn angle_conversions() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-15);
        assert!((rad_to_deg(PI) - 180.0).abs() < 1e-12);
        assert!((rad_to_deg(deg_to_rad(42.5)) - 42.5).abs() < 1e-12);
    }

    #[test]
    fn haversine_identical_points_is_zero() {
        for p in [
            tokyo_station(),
            Coordinates::from_raw(0.0, 0.0),
            Coordinates::from_raw(-89.9, 179.9),
        ] {
            assert_eq!(haversine_distance_km(&p, &p), 0.0);
        }
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = tokyo_station();
        let b = Coordinates::new(35.6586, 139.7454).unwrap();
        let ab = haversine_distance_km(&a, &b);
        let ba = haversine_distance_km(&b, &a);
        assert!((ab - ba).abs() < 1e-12);
        assert!(ab > 2.0 && ab < 4.0, "Tokyo Station to Tokyo Tower: {}", ab);
    }

    #[test]
    fn offset_north_moves_latitude_only() {
        let start = tokyo_station();
        let p = offset_coordinate(&start, 1.11, 0.0);
        assert!((p.lat - (start.lat + 0.01)).abs() < 1e-12);
        assert!((p.lng - start.lng).abs() < 1e-12);
    }

    #[test]
    fn offset_east_scales_by_cos_latitude() {
        let start = tokyo_station();
        let p = offset_coordinate(&start, 1.11, FRAC_PI_2);
        let expected = 0.01 / deg_to_rad(start.lat).cos();
        assert!((p.lng - start.lng - expected).abs() < 1e-9);
        assert!((p.lat - start.lat).abs() < 1e-9);
    }

    #[test]
    fn offset_zero_distance_is_identity() {
        let start = tokyo_station();
        assert_eq!(offset_coordinate(&start, 0.0, 1.234), start);
    }

    #[test]
    fn path_length_of_short_paths() {
        assert_eq!(path_length_km(&[]), 0.0);
        assert_eq!(path_length_km(&[tokyo_station()]), 0.0);

        let start = tokyo_station();
        let north = offset_coordinate(&start, 1.0, 0.0);
        let there_and_back = [start, north, start];
        let len = path_length_km(&there_and_back);
        assert!((len - 2.0 * haversine_distance_km(&start, &north)).abs() < 1e-12);
    }
}
