//! Traffic condition selection.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which travel-time matrix a request is solved against.
///
/// # Examples
///
/// ```
/// use rover_routing::solver::TrafficMode;
///
/// assert_eq!(TrafficMode::from_selector("traffic"), TrafficMode::Traffic);
/// assert_eq!(TrafficMode::from_selector("normal"), TrafficMode::Normal);
/// // Unknown selectors fall back to normal conditions.
/// assert_eq!(TrafficMode::from_selector("rush-hour"), TrafficMode::Normal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficMode {
    /// Baseline travel times.
    #[default]
    Normal,
    /// Congested travel times.
    Traffic,
}

impl TrafficMode {
    /// Parses a request selector. Never fails: anything other than
    /// `"normal"` or `"traffic"` selects [`TrafficMode::Normal`].
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "traffic" => TrafficMode::Traffic,
            "normal" => TrafficMode::Normal,
            other => {
                debug!(selector = other, "unknown mode, using normal");
                TrafficMode::Normal
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficMode::Normal => "normal",
            TrafficMode::Traffic => "traffic",
        }
    }
}

impl fmt::Display for TrafficMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_is_case_sensitive() {
        assert_eq!(TrafficMode::from_selector("Traffic"), TrafficMode::Normal);
        assert_eq!(TrafficMode::from_selector(""), TrafficMode::Normal);
    }

    #[test]
    fn test_display_round_trips_selector() {
        for mode in [TrafficMode::Normal, TrafficMode::Traffic] {
            assert_eq!(TrafficMode::from_selector(&mode.to_string()), mode);
        }
        assert_eq!(TrafficMode::default(), TrafficMode::Normal);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&TrafficMode::Traffic).expect("serializes");
        assert_eq!(json, "\"traffic\"");
    }
}
