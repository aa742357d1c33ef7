use std::path::Path;
use std::sync::Arc;

use rover_routing::config::{ConfigError, Fleet, FleetConfig};
use rover_routing::constructive::cheapest_arc;
use rover_routing::distance::CostMatrix;
use rover_routing::error::RoutingError;
use rover_routing::evaluation::RouteEvaluator;
use rover_routing::local_search::Deadline;
use rover_routing::models::{Location, Route, RouteStats, Solution};
use rover_routing::solver::{solve, Dispatcher, SolveOptions, TrafficMode};

fn nyc_fleet() -> Fleet {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/nyc_rover.json");
    Fleet::load(path).expect("sample fleet loads")
}

fn total_time(stats: &[RouteStats]) -> f64 {
    stats.iter().map(|s| s.time).sum()
}

#[test]
fn test_nyc_normal_conditions() {
    let dispatcher = Dispatcher::new(Arc::new(nyc_fleet()));
    let report = dispatcher.dispatch("normal").expect("solvable");

    assert_eq!(report.index_routes, vec![vec![0, 1, 2, 4, 3, 0], vec![0, 0]]);
    assert!((report.route_stats[0].time - 63.0).abs() < 1e-10);
    assert!((report.route_stats[0].distance - 95.0).abs() < 1e-10);
    assert_eq!(report.route_stats[1], RouteStats::default());
    assert_eq!(report.routes[1], vec![report.locations[0]; 2]);
}

#[test]
fn test_nyc_traffic_avoids_jammed_arc() {
    let dispatcher = Dispatcher::new(Arc::new(nyc_fleet()));
    let report = dispatcher.dispatch("traffic").expect("solvable");

    assert_eq!(report.index_routes, vec![vec![0, 1, 2, 3, 4, 0], vec![0, 0]]);
    assert!((report.route_stats[0].time - 62.0).abs() < 1e-10);
    assert!((report.route_stats[0].distance - 93.0).abs() < 1e-10);
}

#[test]
fn test_cheapest_arc_beats_round_robin() {
    let fleet = nyc_fleet();
    let times = fleet.time_matrix(TrafficMode::Normal);
    let eval = RouteEvaluator::new(times);

    let greedy = cheapest_arc(times, &[1, 2, 3, 4], 2).expect("solvable");
    let round_robin = Solution::new(vec![
        Route::from_stops(0, 0, &[1, 3]),
        Route::from_stops(1, 0, &[2, 4]),
    ]);

    let greedy_cost = eval.solution_cost(&greedy).expect("in range");
    let round_robin_cost = eval.solution_cost(&round_robin).expect("in range");
    assert!((greedy_cost - 63.0).abs() < 1e-10);
    assert!((round_robin_cost - 94.0).abs() < 1e-10);
}

#[test]
fn test_improvement_on_sample_fleet() {
    let dispatcher = Dispatcher::new(Arc::new(nyc_fleet()));
    let base = dispatcher.dispatch("normal").expect("solvable");
    let improved = dispatcher
        .dispatch_with("normal", &SolveOptions::improved(Deadline::none()))
        .expect("solvable");

    assert!(total_time(&improved.route_stats) <= total_time(&base.route_stats) + 1e-10);
    let mut served: Vec<usize> = improved
        .index_routes
        .iter()
        .flat_map(|r| r[1..r.len() - 1].iter().copied())
        .collect();
    served.sort_unstable();
    assert_eq!(served, vec![1, 2, 3, 4]);
}

#[test]
fn test_unknown_mode_falls_back_to_normal() {
    let dispatcher = Dispatcher::new(Arc::new(nyc_fleet()));
    assert_eq!(
        dispatcher.dispatch("gridlock").expect("solvable"),
        dispatcher.dispatch("normal").expect("solvable")
    );
}

#[test]
fn test_single_vehicle_single_stop() {
    let locs = vec![Location::new(40.7128, -74.0060), Location::new(40.7306, -73.9352)];
    let times = CostMatrix::from_rows(vec![vec![0.0, 7.0], vec![9.0, 0.0]]).expect("valid");
    let report = solve(&locs, &times, &times, 1).expect("solvable");
    assert_eq!(report.index_routes, vec![vec![0, 1, 0]]);
    assert!((report.route_stats[0].time - 16.0).abs() < 1e-10);
}

#[test]
fn test_more_vehicles_than_stops() {
    let fleet = nyc_fleet();
    let report = solve(
        fleet.locations(),
        fleet.time_matrix(TrafficMode::Normal),
        fleet.distance_matrix(),
        6,
    )
    .expect("solvable");
    assert_eq!(report.index_routes.len(), 6);
    let idle = report.index_routes.iter().filter(|r| r.len() == 2).count();
    assert!(idle >= 2);
}

#[test]
fn test_zero_vehicles_is_an_error() {
    let fleet = nyc_fleet();
    let result = solve(
        fleet.locations(),
        fleet.time_matrix(TrafficMode::Normal),
        fleet.distance_matrix(),
        0,
    );
    assert_eq!(result, Err(RoutingError::InvalidVehicleCount { count: 0 }));
}

#[test]
fn test_config_errors_surface() {
    let not_square = r#"{
        "locations": [[0, 0], [1, 1]],
        "num_vehicles": 1,
        "time_matrices": { "normal": [[0, 1], [1]] }
    }"#;
    let err = FleetConfig::from_json_str(not_square)
        .expect("parses")
        .into_fleet()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Matrix { name: "normal time", .. }));

    assert!(matches!(
        FleetConfig::from_json_str("{ not json"),
        Err(ConfigError::Json(_))
    ));
}
