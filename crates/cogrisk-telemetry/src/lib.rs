//! Input data model for the cognitive mini-game screening pipeline.
//!
//! Three mini-games are played per assessment:
//!
//! - **Go/No-Go** - respond to "go" stimuli, withhold on "no-go" stimuli
//! - **Stop-Signal** - respond to every stimulus unless a stop signal follows it
//! - **Tower-of-London** - rearrange pegs into a goal configuration in as few moves as possible
//!
//! Each completed session is reduced to a flat [`GameMetrics`] record. Records are
//! usually produced by the capture layer, but can also be derived from per-trial
//! telemetry with the [`summary`] module. Together with a [`SubjectProfile`] they
//! are the only inputs the scoring crates consume.
//!
//! All types are immutable inputs: they are deserialized, passed by reference and
//! never modified by the scoring code.

pub use self::{metrics::*, profile::*, trial::*};

pub mod metrics;
pub mod profile;
pub mod summary;
pub mod trial;

/// The mini-games of the task battery.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    #[display("Go/No-Go")]
    GoNoGo,
    #[display("Stop-Signal")]
    StopSignal,
    #[display("Tower-of-London")]
    TowerOfLondon,
}

impl GameKind {
    /// Stable identifier used in metric names (e.g. `go_no_go.commission_rate`).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::GoNoGo => "go_no_go",
            Self::StopSignal => "stop_signal",
            Self::TowerOfLondon => "tower_of_london",
        }
    }
}
