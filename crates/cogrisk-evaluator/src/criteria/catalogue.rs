//! The fixed catalogue of diagnostic indicator criteria.
//!
//! Each entry is data: an identifier, a domain, a label and the signals that inform
//! it. A signal names the metrics it reads and the threshold table that grades them.
//! Criteria without signals have no instrumented proxy in the current task battery
//! and always report no evidence.

use cogrisk_telemetry::{GameKind, GameMetrics, GameMetricsBundle};

use super::{
    Domain, EvidenceLevel,
    rule::{self, BandThresholds, PlanningThresholds},
};

/// A metric field of one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    CommissionRate,
    OmissionRate,
    RtCv,
    VigilanceDecrement,
    StopFailureRate,
    ExcessMoves,
    PlanLatency,
}

impl MetricField {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CommissionRate => "commission_rate",
            Self::OmissionRate => "omission_rate",
            Self::RtCv => "rt_cv",
            Self::VigilanceDecrement => "vigilance_decrement",
            Self::StopFailureRate => "stop_failure_rate",
            Self::ExcessMoves => "excess_moves",
            Self::PlanLatency => "plan_latency",
        }
    }

    /// Reads the field, treating non-finite values as `0`.
    #[must_use]
    pub fn read(self, metrics: &GameMetrics) -> f64 {
        let value = match self {
            Self::CommissionRate => metrics.commission_rate,
            Self::OmissionRate => metrics.omission_rate,
            Self::RtCv => metrics.rt_cv,
            Self::VigilanceDecrement => metrics.vigilance_decrement,
            Self::StopFailureRate => metrics.stop_failure_rate,
            Self::ExcessMoves => metrics.excess_moves,
            Self::PlanLatency => metrics.plan_latency,
        };
        if value.is_finite() { value } else { 0.0 }
    }
}

/// A metric field of a specific game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricRef {
    pub game: GameKind,
    pub field: MetricField,
}

impl MetricRef {
    #[must_use]
    pub const fn new(game: GameKind, field: MetricField) -> Self {
        Self { game, field }
    }

    /// Qualified name such as `go_no_go.commission_rate`.
    #[must_use]
    pub fn qualified_name(self) -> String {
        format!("{}.{}", self.game.id(), self.field.name())
    }

    #[must_use]
    pub fn read(self, bundle: &GameMetricsBundle) -> f64 {
        self.field.read(bundle.get(self.game))
    }
}

/// How a signal turns metrics into an evidence level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalRule {
    /// The mean of the metrics is graded against one band table.
    MeanBands {
        metrics: &'static [MetricRef],
        thresholds: BandThresholds,
    },
    /// Tower-of-London planning organization (see [`PlanningThresholds`]).
    Planning {
        excess_moves: MetricRef,
        latency: MetricRef,
        thresholds: PlanningThresholds,
    },
}

/// A behavioural signal informing one or more criteria.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
    pub name: &'static str,
    pub rule: SignalRule,
}

/// Evidence produced by one signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalGrade {
    pub level: EvidenceLevel,
    pub note: Option<&'static str>,
}

pub(crate) const REFLECTIVE_PLANNING_NOTE: &str =
    "slow planning without excess moves is treated as reflective";

impl Signal {
    /// Metrics read by the signal.
    #[must_use]
    pub fn metrics(&self) -> Vec<MetricRef> {
        match self.rule {
            SignalRule::MeanBands { metrics, .. } => metrics.to_vec(),
            SignalRule::Planning {
                excess_moves,
                latency,
                ..
            } => vec![excess_moves, latency],
        }
    }

    #[must_use]
    pub fn grade(&self, bundle: &GameMetricsBundle) -> SignalGrade {
        let grade = match self.rule {
            SignalRule::MeanBands {
                metrics,
                thresholds,
            } => {
                let values = metrics.iter().map(|m| m.read(bundle)).collect::<Vec<_>>();
                let value = cogrisk_stats::mean(&values).unwrap_or(0.0);
                SignalGrade {
                    level: thresholds.grade(value),
                    note: None,
                }
            }
            SignalRule::Planning {
                excess_moves,
                latency,
                thresholds,
            } => {
                let planning = thresholds.grade(excess_moves.read(bundle), latency.read(bundle));
                SignalGrade {
                    level: planning.level,
                    note: planning
                        .reflective_exemption
                        .then_some(REFLECTIVE_PLANNING_NOTE),
                }
            }
        };
        tracing::trace!(signal = self.name, level = %grade.level, "graded signal");
        grade
    }
}

/// Catalogue entry of a diagnostic criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionTemplate {
    pub id: &'static str,
    pub domain: Domain,
    pub label: &'static str,
    /// Empty when the criterion has no instrumented proxy
    pub signals: &'static [Signal],
}

impl CriterionTemplate {
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        !self.signals.is_empty()
    }
}

pub const COMMISSION: Signal = Signal {
    name: "commission_rate",
    rule: SignalRule::MeanBands {
        metrics: &[
            MetricRef::new(GameKind::GoNoGo, MetricField::CommissionRate),
            MetricRef::new(GameKind::StopSignal, MetricField::CommissionRate),
        ],
        thresholds: rule::COMMISSION_RATE,
    },
};

pub const OMISSION: Signal = Signal {
    name: "omission_rate",
    rule: SignalRule::MeanBands {
        metrics: &[MetricRef::new(GameKind::GoNoGo, MetricField::OmissionRate)],
        thresholds: rule::OMISSION_RATE,
    },
};

pub const RT_VARIABILITY: Signal = Signal {
    name: "rt_variability",
    rule: SignalRule::MeanBands {
        metrics: &[MetricRef::new(GameKind::GoNoGo, MetricField::RtCv)],
        thresholds: rule::RT_VARIABILITY,
    },
};

pub const VIGILANCE_DECREMENT: Signal = Signal {
    name: "vigilance_decrement",
    rule: SignalRule::MeanBands {
        metrics: &[MetricRef::new(
            GameKind::GoNoGo,
            MetricField::VigilanceDecrement,
        )],
        thresholds: rule::VIGILANCE_DECREMENT,
    },
};

pub const STOP_FAILURE: Signal = Signal {
    name: "stop_failure_rate",
    rule: SignalRule::MeanBands {
        metrics: &[MetricRef::new(
            GameKind::StopSignal,
            MetricField::StopFailureRate,
        )],
        thresholds: rule::STOP_FAILURE_RATE,
    },
};

pub const PLANNING_ORGANIZATION: Signal = Signal {
    name: "planning_organization",
    rule: SignalRule::Planning {
        excess_moves: MetricRef::new(GameKind::TowerOfLondon, MetricField::ExcessMoves),
        latency: MetricRef::new(GameKind::TowerOfLondon, MetricField::PlanLatency),
        thresholds: rule::PLANNING_ORGANIZATION,
    },
};

const fn criterion(
    id: &'static str,
    domain: Domain,
    label: &'static str,
    signals: &'static [Signal],
) -> CriterionTemplate {
    CriterionTemplate {
        id,
        domain,
        label,
        signals,
    }
}

/// All criteria in reporting order: nine inattention criteria, then nine
/// hyperactivity-impulsivity criteria.
pub const CATALOGUE: [CriterionTemplate; 18] = [
    criterion(
        "IN1",
        Domain::Inattention,
        "Careless mistakes or poor attention to detail",
        &[OMISSION, RT_VARIABILITY],
    ),
    criterion(
        "IN2",
        Domain::Inattention,
        "Difficulty sustaining attention",
        &[VIGILANCE_DECREMENT, OMISSION],
    ),
    criterion(
        "IN3",
        Domain::Inattention,
        "Does not seem to listen when spoken to directly",
        &[],
    ),
    criterion(
        "IN4",
        Domain::Inattention,
        "Does not follow through on instructions",
        &[],
    ),
    criterion(
        "IN5",
        Domain::Inattention,
        "Difficulty organizing tasks and activities",
        &[PLANNING_ORGANIZATION],
    ),
    criterion(
        "IN6",
        Domain::Inattention,
        "Avoids tasks requiring sustained mental effort",
        &[],
    ),
    criterion(
        "IN7",
        Domain::Inattention,
        "Loses things necessary for tasks",
        &[],
    ),
    criterion(
        "IN8",
        Domain::Inattention,
        "Easily distracted by extraneous stimuli",
        &[RT_VARIABILITY],
    ),
    criterion(
        "IN9",
        Domain::Inattention,
        "Forgetful in daily activities",
        &[],
    ),
    criterion(
        "HI1",
        Domain::HyperactivityImpulsivity,
        "Fidgets or squirms in seat",
        &[],
    ),
    criterion(
        "HI2",
        Domain::HyperactivityImpulsivity,
        "Leaves seat when remaining seated is expected",
        &[],
    ),
    criterion(
        "HI3",
        Domain::HyperactivityImpulsivity,
        "Runs about or climbs in inappropriate situations",
        &[],
    ),
    criterion(
        "HI4",
        Domain::HyperactivityImpulsivity,
        "Unable to play or engage in activities quietly",
        &[],
    ),
    criterion(
        "HI5",
        Domain::HyperactivityImpulsivity,
        "Often \"on the go\"",
        &[],
    ),
    criterion(
        "HI6",
        Domain::HyperactivityImpulsivity,
        "Talks excessively",
        &[],
    ),
    criterion(
        "HI7",
        Domain::HyperactivityImpulsivity,
        "Blurts out answers before questions are completed",
        &[COMMISSION],
    ),
    criterion(
        "HI8",
        Domain::HyperactivityImpulsivity,
        "Difficulty waiting for their turn",
        &[STOP_FAILURE],
    ),
    criterion(
        "HI9",
        Domain::HyperactivityImpulsivity,
        "Interrupts or intrudes on others",
        &[COMMISSION, STOP_FAILURE],
    ),
];
