//! Request dispatch against a shared fleet configuration.

use std::sync::Arc;

use tracing::instrument;

use crate::config::Fleet;
use crate::error::Result;

use super::{solve_with, RouteReport, SolveOptions, TrafficMode};

/// Serves route requests against one read-only [`Fleet`].
///
/// Cloning is cheap and clones share the same fleet, so a dispatcher can be
/// handed to as many threads as needed.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use rover_routing::config::FleetConfig;
/// use rover_routing::solver::Dispatcher;
///
/// let fleet = FleetConfig::from_json_str(r#"{
///     "locations": [[40.7128, -74.006], [40.7306, -73.9352], [40.7589, -73.9851]],
///     "num_vehicles": 1,
///     "time_matrices": {
///         "normal": [[0, 10, 15], [10, 0, 8], [15, 8, 0]],
///         "traffic": [[0, 30, 15], [30, 0, 8], [15, 8, 0]]
///     }
/// }"#)
/// .unwrap()
/// .into_fleet()
/// .unwrap();
///
/// let dispatcher = Dispatcher::new(Arc::new(fleet));
/// assert_eq!(dispatcher.dispatch("normal").unwrap().index_routes, vec![vec![0, 1, 2, 0]]);
/// assert_eq!(dispatcher.dispatch("traffic").unwrap().index_routes, vec![vec![0, 2, 1, 0]]);
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher {
    fleet: Arc<Fleet>,
}

impl Dispatcher {
    pub fn new(fleet: Arc<Fleet>) -> Self {
        Self { fleet }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Solves with construction only. Unknown selectors use normal times.
    pub fn dispatch(&self, selector: &str) -> Result<RouteReport> {
        self.dispatch_with(selector, &SolveOptions::default())
    }

    pub fn dispatch_with(&self, selector: &str, options: &SolveOptions) -> Result<RouteReport> {
        self.dispatch_mode(TrafficMode::from_selector(selector), options)
    }

    #[instrument(skip_all, fields(mode = %mode))]
    pub fn dispatch_mode(&self, mode: TrafficMode, options: &SolveOptions) -> Result<RouteReport> {
        solve_with(
            self.fleet.locations(),
            self.fleet.time_matrix(mode),
            self.fleet.distance_matrix(),
            self.fleet.num_vehicles(),
            options,
        )
    }
}
