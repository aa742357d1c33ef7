//! Cost matrices.
//!
//! Provides a dense, validated matrix used for travel times and distances
//! alike.

mod matrix;

pub use matrix::CostMatrix;
