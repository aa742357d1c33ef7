//! Constructive heuristics for building initial routing solutions.
//!
//! - [`RouteBuilder`] / [`cheapest_arc`] — Multi-vehicle cheapest-arc
//!   extension with deterministic tie-breaking, O(n²m)

mod cheapest_arc;

pub use cheapest_arc::{cheapest_arc, RouteBuilder};
