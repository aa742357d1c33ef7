//! # rover-routing
//!
//! Multi-vehicle route construction and costing for a single-depot fleet.
//! Routes are built with a deterministic cheapest-arc heuristic over a
//! travel-time matrix, optionally polished by local search, and reported
//! with per-route time and distance.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Route, Solution, RouteStats)
//! - [`distance`] — Validated square cost matrix
//! - [`constructive`] — Cheapest-arc route builder
//! - [`evaluation`] — Route time and distance scoring
//! - [`local_search`] — Local search operators (2-opt, Or-opt, Relocate) with a deadline
//! - [`solver`] — Request entry points, traffic modes and the fleet dispatcher
//! - [`config`] — Fleet configuration loading and validation
//! - [`error`] — Error types

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod solver;
