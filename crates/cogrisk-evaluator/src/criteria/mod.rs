//! Evidence-graded mapping of game metrics onto diagnostic indicator criteria.
//!
//! The engine walks the fixed [`catalogue::CATALOGUE`] and, for each criterion,
//! grades every signal that informs it. The criterion's evidence is the strongest
//! level among its signals (never an average), so one clearly deviant metric is
//! enough to surface it.
//!
//! # Pipeline
//!
//! ```text
//! GameMetricsBundle
//!     ↓ Signal::grade          (threshold tables in [`rule`])
//! per-signal EvidenceLevel
//!     ↓ max
//! Criterion { evidence, note }
//! ```
//!
//! Criteria without an instrumented proxy are still reported, always with
//! [`EvidenceLevel::None`] and a "not measured" note, so the output has a stable
//! 18-entry shape in catalogue order.
//!
//! # Example
//!
//! ```
//! use cogrisk_evaluator::criteria::{EvidenceLevel, infer_criteria};
//! use cogrisk_telemetry::GameMetricsBundle;
//!
//! let mut bundle = GameMetricsBundle::default();
//! bundle.tower_of_london.excess_moves = 5.0;
//!
//! let criteria = infer_criteria(&bundle);
//! assert_eq!(criteria.len(), 18);
//! let planning = criteria.iter().find(|c| c.id == "IN5").unwrap();
//! assert_eq!(planning.evidence, EvidenceLevel::Strong);
//! ```

use cogrisk_telemetry::GameMetricsBundle;
use serde::{Deserialize, Serialize};

use self::catalogue::{CATALOGUE, CriterionTemplate, MetricRef};

pub mod catalogue;
pub mod rule;

pub(crate) const NOT_MEASURED_NOTE: &str = "not measured by the current task battery";

/// Ordinal confidence that a behavioural metric supports a criterion.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceLevel {
    #[default]
    #[display("none")]
    None,
    #[display("weak")]
    Weak,
    #[display("moderate")]
    Moderate,
    #[display("strong")]
    Strong,
}

/// Symptom domain of a criterion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    #[display("Inattention")]
    Inattention,
    #[display("Hyperactivity-Impulsivity")]
    HyperactivityImpulsivity,
}

impl Domain {
    pub const ALL: [Self; 2] = [Self::Inattention, Self::HyperactivityImpulsivity];
}

/// A catalogue criterion with its computed evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    pub id: &'static str,
    pub domain: Domain,
    pub label: &'static str,
    /// Qualified names of the metrics that inform the criterion
    pub metrics: Vec<String>,
    pub evidence: EvidenceLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

impl CriterionTemplate {
    /// Grades the criterion against one assessment.
    #[must_use]
    pub fn evaluate(&self, bundle: &GameMetricsBundle) -> Criterion {
        let metrics = self
            .signals
            .iter()
            .flat_map(|s| s.metrics())
            .map(MetricRef::qualified_name)
            .collect();

        let (evidence, note) = if self.is_measured() {
            let grades = self.signals.iter().map(|s| s.grade(bundle)).collect::<Vec<_>>();
            let evidence = grades
                .iter()
                .map(|g| g.level)
                .max()
                .unwrap_or_default();
            (evidence, grades.iter().find_map(|g| g.note))
        } else {
            (EvidenceLevel::None, Some(NOT_MEASURED_NOTE))
        };

        tracing::trace!(id = self.id, %evidence, "graded criterion");
        Criterion {
            id: self.id,
            domain: self.domain,
            label: self.label,
            metrics,
            evidence,
            note,
        }
    }
}

/// Grades every catalogue criterion, in catalogue order.
#[must_use]
pub fn infer_criteria(bundle: &GameMetricsBundle) -> Vec<Criterion> {
    let criteria = CATALOGUE
        .iter()
        .map(|template| template.evaluate(bundle))
        .collect::<Vec<_>>();
    tracing::debug!(
        graded = criteria
            .iter()
            .filter(|c| c.evidence > EvidenceLevel::None)
            .count(),
        "inferred criteria"
    );
    criteria
}

/// Per-domain overview of graded criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainSummary {
    pub domain: Domain,
    /// Criteria of the domain with an instrumented proxy
    pub measured: usize,
    /// Criteria at moderate evidence or stronger
    pub moderate_or_stronger: usize,
    pub strongest: EvidenceLevel,
}

/// Summarizes graded criteria per domain, in [`Domain::ALL`] order.
#[must_use]
pub fn summarize_domains(criteria: &[Criterion]) -> Vec<DomainSummary> {
    Domain::ALL
        .into_iter()
        .map(|domain| {
            let in_domain = || criteria.iter().filter(move |c| c.domain == domain);
            DomainSummary {
                domain,
                measured: in_domain().filter(|c| !c.metrics.is_empty()).count(),
                moderate_or_stronger: in_domain()
                    .filter(|c| c.evidence >= EvidenceLevel::Moderate)
                    .count(),
                strongest: in_domain().map(|c| c.evidence).max().unwrap_or_default(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(criteria: &'a [Criterion], id: &str) -> &'a Criterion {
        criteria.iter().find(|c| c.id == id).unwrap()
    }

    #[test]
    fn test_empty_bundle_has_no_evidence() {
        let criteria = infer_criteria(&GameMetricsBundle::default());
        assert_eq!(criteria.len(), 18);
        assert!(criteria.iter().all(|c| c.evidence == EvidenceLevel::None));
    }

    #[test]
    fn test_output_follows_catalogue_order() {
        let criteria = infer_criteria(&GameMetricsBundle::default());
        let ids = criteria.iter().map(|c| c.id).collect::<Vec<_>>();
        let expected = CATALOGUE.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids, expected);
        assert_eq!(ids[0], "IN1");
        assert_eq!(ids[17], "HI9");
    }

    #[test]
    fn test_unmeasured_criteria_always_none() {
        let mut bundle = GameMetricsBundle::default();
        for metrics in [
            &mut bundle.go_no_go,
            &mut bundle.stop_signal,
            &mut bundle.tower_of_london,
        ] {
            metrics.commission_rate = 1.0;
            metrics.omission_rate = 1.0;
            metrics.rt_cv = 1.0;
            metrics.vigilance_decrement = 1.0;
            metrics.stop_failure_rate = 1.0;
            metrics.excess_moves = 10.0;
            metrics.plan_latency = 30.0;
        }
        let criteria = infer_criteria(&bundle);
        for criterion in &criteria {
            if criterion.metrics.is_empty() {
                assert_eq!(criterion.evidence, EvidenceLevel::None, "{}", criterion.id);
                assert_eq!(criterion.note, Some(NOT_MEASURED_NOTE));
            } else {
                assert_eq!(criterion.evidence, EvidenceLevel::Strong, "{}", criterion.id);
            }
        }
        assert_eq!(criteria.iter().filter(|c| c.metrics.is_empty()).count(), 11);
    }

    #[test]
    fn test_multi_metric_takes_maximum() {
        let mut bundle = GameMetricsBundle::default();
        bundle.go_no_go.omission_rate = 0.11; // weak
        bundle.go_no_go.rt_cv = 0.31; // strong
        let criteria = infer_criteria(&bundle);
        assert_eq!(find(&criteria, "IN1").evidence, EvidenceLevel::Strong);
        assert_eq!(find(&criteria, "IN2").evidence, EvidenceLevel::Weak);
        assert_eq!(find(&criteria, "IN8").evidence, EvidenceLevel::Strong);
    }

    #[test]
    fn test_stop_failure_and_commission() {
        let mut bundle = GameMetricsBundle::default();
        bundle.stop_signal.stop_failure_rate = 0.42;
        bundle.go_no_go.commission_rate = 0.13;
        bundle.stop_signal.commission_rate = 0.13;
        let criteria = infer_criteria(&bundle);
        assert_eq!(find(&criteria, "HI7").evidence, EvidenceLevel::Weak);
        assert_eq!(find(&criteria, "HI8").evidence, EvidenceLevel::Moderate);
        assert_eq!(find(&criteria, "HI9").evidence, EvidenceLevel::Moderate);
        assert_eq!(
            find(&criteria, "HI9").metrics,
            [
                "go_no_go.commission_rate",
                "stop_signal.commission_rate",
                "stop_signal.stop_failure_rate"
            ]
        );
    }

    #[test]
    fn test_planning_exemption_note() {
        let mut bundle = GameMetricsBundle::default();
        bundle.tower_of_london.plan_latency = 9.0;
        let criteria = infer_criteria(&bundle);
        let planning = find(&criteria, "IN5");
        assert_eq!(planning.evidence, EvidenceLevel::None);
        assert_eq!(planning.note, Some(catalogue::REFLECTIVE_PLANNING_NOTE));

        bundle.tower_of_london.excess_moves = 5.0;
        bundle.tower_of_london.plan_latency = 0.0;
        let criteria = infer_criteria(&bundle);
        let planning = find(&criteria, "IN5");
        assert_eq!(planning.evidence, EvidenceLevel::Strong);
        assert_eq!(planning.note, None);
    }

    #[test]
    fn test_evidence_monotonic_in_metric() {
        let mut previous = EvidenceLevel::None;
        for step in 0..=100 {
            let mut bundle = GameMetricsBundle::default();
            bundle.go_no_go.vigilance_decrement = f64::from(step) * 0.005;
            let level = find(&infer_criteria(&bundle), "IN2").evidence;
            assert!(level >= previous);
            previous = level;
        }
        assert_eq!(previous, EvidenceLevel::Strong);
    }

    #[test]
    fn test_inference_is_deterministic() {
        let mut bundle = GameMetricsBundle::default();
        bundle.go_no_go.rt_cv = 0.25;
        bundle.tower_of_london.excess_moves = 2.0;
        assert_eq!(infer_criteria(&bundle), infer_criteria(&bundle));
    }

    #[test]
    fn test_domain_summaries() {
        let mut bundle = GameMetricsBundle::default();
        bundle.go_no_go.rt_cv = 0.25;
        bundle.stop_signal.stop_failure_rate = 0.31;
        let summaries = summarize_domains(&infer_criteria(&bundle));
        assert_eq!(
            summaries,
            [
                DomainSummary {
                    domain: Domain::Inattention,
                    measured: 4,
                    moderate_or_stronger: 2,
                    strongest: EvidenceLevel::Moderate,
                },
                DomainSummary {
                    domain: Domain::HyperactivityImpulsivity,
                    measured: 3,
                    moderate_or_stronger: 0,
                    strongest: EvidenceLevel::Weak,
                },
            ]
        );
    }

    #[test]
    fn test_serialized_shape() {
        let criteria = infer_criteria(&GameMetricsBundle::default());
        let json = serde_json::to_value(&criteria[2]).unwrap();
        assert_eq!(json["id"], "IN3");
        assert_eq!(json["domain"], "inattention");
        assert_eq!(json["evidence"], "none");
        assert_eq!(json["note"], NOT_MEASURED_NOTE);

        let json = serde_json::to_value(&criteria[0]).unwrap();
        assert!(json.get("note").is_none());
    }
}
