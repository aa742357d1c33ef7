//! Request-level entry points.
//!
//! - [`solve`] / [`solve_with`] — Build, optionally improve, and score routes
//!   for explicit matrices
//! - [`Dispatcher`] — Answers requests against a shared [`Fleet`](crate::config::Fleet)
//! - [`TrafficMode`] — Selects the travel-time matrix for a request

mod dispatcher;
mod facade;
mod mode;

pub use dispatcher::Dispatcher;
pub use facade::{solve, solve_with, RouteReport, SolveOptions};
pub use mode::TrafficMode;
