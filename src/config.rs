//! Static fleet configuration.
//!
//! The location table, the named travel-time matrices, the reporting
//! distance matrix and the vehicle count are loaded once, validated into a
//! read-only [`Fleet`] and handed to the solver explicitly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::distance::CostMatrix;
use crate::error::RoutingError;
use crate::models::Location;
use crate::solver::TrafficMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fleet configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("location table is empty, the depot must be listed first")]
    NoLocations,

    #[error("{name} matrix: {source}")]
    Matrix {
        name: &'static str,
        #[source]
        source: RoutingError,
    },

    #[error("{name} matrix covers {actual} locations, table lists {expected}")]
    LocationCountMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("num_vehicles must be at least 1")]
    InvalidVehicleCount,
}

/// Travel-time matrices keyed by traffic condition.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeMatrices {
    pub normal: Vec<Vec<f64>>,
    /// Falls back to `normal` when absent.
    #[serde(default)]
    pub traffic: Option<Vec<Vec<f64>>>,
}

/// Raw fleet configuration as it appears on disk.
///
/// ```json
/// {
///   "locations": [[40.7128, -74.006], [40.7306, -73.9352]],
///   "num_vehicles": 2,
///   "time_matrices": { "normal": [[0, 10], [10, 0]] },
///   "distance_matrix": [[0, 15], [15, 0]]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct FleetConfig {
    pub locations: Vec<Location>,
    pub num_vehicles: usize,
    pub time_matrices: TimeMatrices,
    /// Great-circle kilometres between locations when absent.
    #[serde(default)]
    pub distance_matrix: Option<Vec<Vec<f64>>>,
}

impl FleetConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Validates every matrix against the location table.
    pub fn into_fleet(self) -> Result<Fleet, ConfigError> {
        if self.locations.is_empty() {
            return Err(ConfigError::NoLocations);
        }

        let normal = load_matrix("normal time", self.time_matrices.normal)?;
        let traffic = match self.time_matrices.traffic {
            Some(rows) => load_matrix("traffic time", rows)?,
            None => normal.clone(),
        };
        let distances = match self.distance_matrix {
            Some(rows) => load_matrix("distance", rows)?,
            None => CostMatrix::haversine(&self.locations).map_err(|source| ConfigError::Matrix {
                name: "distance",
                source,
            })?,
        };

        Fleet::new(self.locations, normal, traffic, distances, self.num_vehicles)
    }
}

fn load_matrix(name: &'static str, rows: Vec<Vec<f64>>) -> Result<CostMatrix, ConfigError> {
    CostMatrix::from_rows(rows).map_err(|source| ConfigError::Matrix { name, source })
}

/// Validated, immutable fleet configuration.
///
/// Construct once at startup and share (e.g. behind an `Arc`); nothing in
/// the crate mutates it.
#[derive(Debug, Clone)]
pub struct Fleet {
    locations: Vec<Location>,
    normal_times: CostMatrix,
    traffic_times: CostMatrix,
    distances: CostMatrix,
    num_vehicles: usize,
}

impl Fleet {
    /// Bundles already-validated matrices, checking they all cover the
    /// location table.
    pub fn new(
        locations: Vec<Location>,
        normal_times: CostMatrix,
        traffic_times: CostMatrix,
        distances: CostMatrix,
        num_vehicles: usize,
    ) -> Result<Self, ConfigError> {
        if locations.is_empty() {
            return Err(ConfigError::NoLocations);
        }
        if num_vehicles == 0 {
            return Err(ConfigError::InvalidVehicleCount);
        }
        for (name, matrix) in [
            ("normal time", &normal_times),
            ("traffic time", &traffic_times),
            ("distance", &distances),
        ] {
            if matrix.size() != locations.len() {
                return Err(ConfigError::LocationCountMismatch {
                    name,
                    expected: locations.len(),
                    actual: matrix.size(),
                });
            }
        }

        Ok(Self {
            locations,
            normal_times,
            traffic_times,
            distances,
            num_vehicles,
        })
    }

    /// Reads and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let fleet = FleetConfig::from_path(path)?.into_fleet()?;
        info!(
            path = %path.display(),
            locations = fleet.locations.len(),
            vehicles = fleet.num_vehicles,
            "fleet configuration loaded"
        );
        Ok(fleet)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Travel times for the given traffic condition.
    pub fn time_matrix(&self, mode: TrafficMode) -> &CostMatrix {
        match mode {
            TrafficMode::Normal => &self.normal_times,
            TrafficMode::Traffic => &self.traffic_times,
        }
    }

    /// Distances used for reporting only.
    pub fn distance_matrix(&self) -> &CostMatrix {
        &self.distances
    }
}
