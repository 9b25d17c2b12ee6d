//! Offline accuracy check: how far measured route length strays from the
//! requested target, per route type.

use crate::models::{Coordinates, RouteType};
use crate::services::route_generator::RouteSynthesizer;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EvalScenario {
    pub name: String,
    pub start: Coordinates,
    pub distance_km: f64,
    pub waypoints: u32,
}

impl EvalScenario {
    fn new(name: &str, lat: f64, lng: f64, distance_km: f64, waypoints: u32) -> Self {
        EvalScenario {
            name: name.to_string(),
            start: Coordinates::from_raw(lat, lng),
            distance_km,
            waypoints,
        }
    }
}

pub fn default_scenarios() -> Vec<EvalScenario> {
    vec![
        EvalScenario::new("tokyo_station_3km", 35.6812, 139.7671, 3.0, 5),
        EvalScenario::new("tokyo_station_1km", 35.6812, 139.7671, 1.0, 3),
        EvalScenario::new("kyoto_5km", 35.0116, 135.7681, 5.0, 8),
        EvalScenario::new("sapporo_10km", 43.0618, 141.3545, 10.0, 6),
        // planar offsets stretch east-west legs this far north
        EvalScenario::new("tromso_5km", 69.6492, 18.9553, 5.0, 6),
    ]
}

/// Measured/target distance ratios over several runs
#[derive(Debug, Clone, Serialize)]
pub struct RatioStats {
    pub runs: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl RatioStats {
    pub fn from_ratios(ratios: &[f64]) -> Option<Self> {
        if ratios.is_empty() {
            return None;
        }
        let sum: f64 = ratios.iter().sum();
        Some(RatioStats {
            runs: ratios.len(),
            mean: sum / ratios.len() as f64,
            min: ratios.iter().copied().fold(f64::INFINITY, f64::min),
            max: ratios.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario: String,
    pub route_type: RouteType,
    pub target_km: f64,
    pub ratio: RatioStats,
}

pub fn run_scenario(
    synthesizer: &RouteSynthesizer,
    scenario: &EvalScenario,
    route_types: &[RouteType],
    runs: usize,
) -> Vec<ScenarioResult> {
    route_types
        .iter()
        .filter_map(|&route_type| {
            let ratios: Vec<f64> = (0..runs)
                .map(|_| {
                    let route = synthesizer.generate_route(
                        route_type,
                        scenario.start,
                        scenario.distance_km,
                        scenario.waypoints,
                    );
                    route.metrics.distance_km / scenario.distance_km
                })
                .collect();

            RatioStats::from_ratios(&ratios).map(|ratio| ScenarioResult {
                scenario: scenario.name.clone(),
                route_type,
                target_km: scenario.distance_km,
                ratio,
            })
        })
        .collect()
}

pub fn format_report(results: &[ScenarioResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:<13} {:>7} {:>6} {:>6} {:>6}\n",
        "scenario", "type", "target", "mean", "min", "max"
    ));
    for r in results {
        out.push_str(&format!(
            "{:<20} {:<13} {:>6.1}k {:>6.2} {:>6.2} {:>6.2}\n",
            r.scenario,
            r.route_type.to_string(),
            r.target_km,
            r.ratio.mean,
            r.ratio.min,
            r.ratio.max
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_stats() {
        assert!(RatioStats::from_ratios(&[]).is_none());

        let stats = RatioStats::from_ratios(&[0.5, 1.0, 1.5]).unwrap();
        assert_eq!(stats.runs, 3);
        assert!((stats.mean - 1.0).abs() < 1e-12);
        assert_eq!(stats.min, 0.5);
        assert_eq!(stats.max, 1.5);
    }

    #[test]
    fn scenario_covers_every_route_type() {
        let synthesizer = RouteSynthesizer::with_seed(8);
        let scenario = &default_scenarios()[0];
        let results = run_scenario(&synthesizer, scenario, &RouteType::ALL, 4);

        assert_eq!(results.len(), RouteType::ALL.len());
        for r in &results {
            assert_eq!(r.ratio.runs, 4);
            assert!(r.ratio.min > 0.0);
        }

        // random walks never come in under budget
        let random = results
            .iter()
            .find(|r| r.route_type == RouteType::Random)
            .unwrap();
        assert!(random.ratio.min >= 0.99);
    }

    #[test]
    fn only_requested_types_run() {
        let synthesizer = RouteSynthesizer::with_seed(3);
        let results = run_scenario(
            &synthesizer,
            &default_scenarios()[0],
            &[RouteType::OutAndBack],
            2,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].route_type, RouteType::OutAndBack);
    }

    #[test]
    fn report_has_a_row_per_result() {
        let synthesizer = RouteSynthesizer::with_seed(8);
        let results = run_scenario(&synthesizer, &default_scenarios()[1], &RouteType::ALL, 2);
        let report = format_report(&results);
        assert_eq!(report.lines().count(), results.len() + 1);
        assert!(report.contains("out-and-back"));
    }
}
