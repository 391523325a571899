use cogrisk_telemetry::{GameMetricsBundle, SubjectProfile};
use serde::{Deserialize, Serialize};

/// Input of the `assess` command: one child and the sessions of all three games.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssessmentRequest {
    pub profile: SubjectProfile,
    pub sessions: GameMetricsBundle,
}
