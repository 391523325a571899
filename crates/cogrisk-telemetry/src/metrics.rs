//! Session-level metrics of a completed mini-game.
//!
//! # Units
//!
//! - Rates (`*_rate`, `accuracy`, `rt_cv`, `vigilance_decrement`) are fractions in \[0.0, 1.0\]
//! - Response times (`mean_rt`, `median_rt`, `p95_rt`, `std_rt`) and `plan_latency` are seconds
//! - Counts (`trial_count`, `n_correct`, `n_incorrect`, `rule_violations`) are plain numbers
//! - `excess_moves` is the mean number of moves above the optimal solution per problem
//!
//! # Missing Fields
//!
//! Telemetry is often partial: a game may not report every field, and a game may not
//! have been played at all. Every field therefore defaults to `0.0` on deserialization,
//! and absent sessions default to an all-zero record. Zero flows through the scoring
//! pipeline as "no evidence" rather than being rejected.
//!
//! ```
//! use cogrisk_telemetry::GameMetrics;
//!
//! let metrics: GameMetrics = serde_json::from_str(r#"{ "commission_rate": 0.2 }"#).unwrap();
//! assert_eq!(metrics.commission_rate, 0.2);
//! assert_eq!(metrics.omission_rate, 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::GameKind;

/// Flat record of named metrics for one completed session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameMetrics {
    /// Number of trials (or problems) actually presented
    pub trial_count: f64,
    /// Fraction of trials with any response
    pub responded_rate: f64,
    /// Fraction of trials answered correctly
    pub accuracy: f64,
    /// Fraction of trials answered incorrectly
    pub fail_rate: f64,
    /// Fraction of go trials without a response
    pub omission_rate: f64,
    /// Fraction of no-go / stop trials with a response
    pub commission_rate: f64,
    pub mean_rt: f64,
    pub median_rt: f64,
    pub p95_rt: f64,
    pub std_rt: f64,
    /// Coefficient of variation of response times (`std_rt / mean_rt`)
    pub rt_cv: f64,
    /// Accuracy lost between the first and the second half of the session
    pub vigilance_decrement: f64,
    pub n_correct: f64,
    pub n_incorrect: f64,
    /// Fraction of stop-signal trials where the response was not inhibited
    pub stop_failure_rate: f64,
    /// Mean time before the first move of a planning problem
    pub plan_latency: f64,
    /// Mean moves above the optimal solution per planning problem
    pub excess_moves: f64,
    /// Total number of rule violations (illegal moves)
    pub rule_violations: f64,
}

/// Metrics of the three mini-games of one assessment.
///
/// A game that was not played is represented by [`GameMetrics::default()`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameMetricsBundle {
    pub go_no_go: GameMetrics,
    pub stop_signal: GameMetrics,
    pub tower_of_london: GameMetrics,
}

impl GameMetricsBundle {
    #[must_use]
    pub fn get(&self, kind: GameKind) -> &GameMetrics {
        match kind {
            GameKind::GoNoGo => &self.go_no_go,
            GameKind::StopSignal => &self.stop_signal,
            GameKind::TowerOfLondon => &self.tower_of_london,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sessions_default_to_zero() {
        let bundle: GameMetricsBundle =
            serde_json::from_str(r#"{ "go_no_go": { "trial_count": 80 } }"#).unwrap();
        assert_eq!(bundle.go_no_go.trial_count, 80.0);
        assert_eq!(bundle.stop_signal, GameMetrics::default());
        assert_eq!(bundle.tower_of_london, GameMetrics::default());
    }

    #[test]
    fn test_get_matches_field() {
        let mut bundle = GameMetricsBundle::default();
        bundle.stop_signal.stop_failure_rate = 0.45;
        assert_eq!(bundle.get(GameKind::StopSignal).stop_failure_rate, 0.45);
        assert_eq!(bundle.get(GameKind::GoNoGo).stop_failure_rate, 0.0);
    }
}
