//! Per-trial telemetry records.
//!
//! These are the raw events emitted by the mini-games before aggregation.
//! See [`summary`](crate::summary) for the reduction into [`GameMetrics`](crate::GameMetrics).

use serde::{Deserialize, Serialize};

/// Stimulus shown on an inhibition-task trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stimulus {
    /// A response is expected
    Go,
    /// Go/No-Go: the response must be withheld
    NoGo,
    /// Stop-Signal: a stop signal followed the stimulus, the response must be cancelled
    Stop,
}

impl Stimulus {
    /// Whether a response is the correct behaviour for this stimulus.
    #[must_use]
    pub const fn expects_response(self) -> bool {
        matches!(self, Self::Go)
    }
}

/// One Go/No-Go or Stop-Signal trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InhibitionTrial {
    pub stimulus: Stimulus,
    pub responded: bool,
    /// Response time in seconds, present only when the child responded
    #[serde(default)]
    pub rt: Option<f64>,
}

impl InhibitionTrial {
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.responded == self.stimulus.expects_response()
    }
}

/// One Tower-of-London problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanningProblem {
    pub solved: bool,
    /// Moves made above the optimal solution length
    #[serde(default)]
    pub excess_moves: u32,
    /// Seconds between problem onset and the first move
    #[serde(default)]
    pub planning_latency: f64,
    /// Illegal moves attempted (e.g. moving a covered ball)
    #[serde(default)]
    pub rule_violations: u32,
}
