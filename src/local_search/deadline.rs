//! Caller-supplied time budget for local search.

use std::time::{Duration, Instant};

/// Wall-clock budget for the improvement stage.
///
/// Supplied by the caller; operators poll it between moves and stop early
/// once it has passed, keeping whatever complete solution they hold.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use rover_routing::local_search::Deadline;
///
/// assert!(!Deadline::none().expired());
/// assert!(Deadline::after(Duration::ZERO).expired());
/// assert!(!Deadline::after(Duration::from_secs(3600)).expired());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// No time limit: operators run to a local optimum.
    pub fn none() -> Self {
        Self { at: None }
    }

    /// Expires at the given instant.
    pub fn at(instant: Instant) -> Self {
        Self { at: Some(instant) }
    }

    /// Expires `budget` from now. A budget too large to represent as an
    /// instant means no limit.
    pub fn after(budget: Duration) -> Self {
        Instant::now()
            .checked_add(budget)
            .map_or_else(Self::none, Self::at)
    }

    /// Returns `true` once the deadline has passed.
    pub fn expired(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() >= at)
    }
}
