//! Dense, validated cost matrix.

use crate::error::{MatrixDefect, Result, RoutingError};
use crate::models::Location;

/// A dense n×n cost matrix stored in row-major order.
///
/// Entries are directed: `cost(i, j)` need not equal `cost(j, i)`. Every
/// matrix that exists has passed validation, so entries are finite and
/// non-negative and every self-loop costs 0.
///
/// # Examples
///
/// ```
/// use rover_routing::distance::CostMatrix;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0],
///     vec![12.0, 0.0, 8.0],
///     vec![15.0, 8.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(m.size(), 3);
/// assert_eq!(m.cost(0, 1).unwrap(), 10.0);
/// assert_eq!(m.cost(1, 0).unwrap(), 12.0);
/// assert!(m.cost(0, 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Builds a matrix from nested rows, the shape used in configuration
    /// files.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixDefect::Empty.into());
        }

        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MatrixDefect::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                }
                .into());
            }
            data.extend(values);
        }

        Self::from_data(size, data)
    }

    /// Builds a matrix from an explicit row-major buffer of `size * size`
    /// entries.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(MatrixDefect::Empty.into());
        }
        let expected = size.checked_mul(size);
        if expected != Some(data.len()) {
            return Err(MatrixDefect::BadLength {
                len: data.len(),
                expected: expected.unwrap_or(usize::MAX),
            }
            .into());
        }

        for (k, &value) in data.iter().enumerate() {
            let (from, to) = (k / size, k % size);
            if !value.is_finite() {
                return Err(MatrixDefect::NotFinite { from, to }.into());
            }
            if value < 0.0 {
                return Err(MatrixDefect::Negative { from, to, value }.into());
            }
            if from == to && value != 0.0 {
                return Err(MatrixDefect::NonZeroDiagonal { index: from, value }.into());
            }
        }

        Ok(Self { data, size })
    }

    /// Great-circle distances in kilometres between every pair of locations.
    ///
    /// Returns an error only when `locations` is empty.
    pub fn haversine(locations: &[Location]) -> Result<Self> {
        let n = locations.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].haversine_km(&locations[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self::from_data(n, data)
    }

    /// Returns the cost of travelling from `from` to `to`.
    ///
    /// Fails with [`RoutingError::OutOfRange`] if either index is outside
    /// the matrix.
    pub fn cost(&self, from: usize, to: usize) -> Result<f64> {
        self.check_index(from)?;
        self.check_index(to)?;
        Ok(self.get(from, to))
    }

    /// Unchecked lookup for indices that have already been validated.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Fails with [`RoutingError::OutOfRange`] unless `index < size()`.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(RoutingError::OutOfRange {
                index,
                size: self.size,
            })
        }
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cheapest candidate to travel to from `from`, with its
    /// cost. Ties go to the candidate listed first.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest(&self, from: usize, candidates: &[usize]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((c, d));
            }
        }
        best
    }
}
