//! Threshold tables that grade metric values into evidence levels.
//!
//! Every table has three ascending cutoffs. A value at or above a cutoff reaches that
//! level; below the `weak` cutoff there is no evidence. Grading is therefore monotonic:
//! a higher metric value never yields a lower level.

use super::EvidenceLevel;

/// Ascending `weak`/`moderate`/`strong` cutoffs for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandThresholds {
    pub weak: f64,
    pub moderate: f64,
    pub strong: f64,
}

impl BandThresholds {
    #[must_use]
    pub const fn new(weak: f64, moderate: f64, strong: f64) -> Self {
        Self {
            weak,
            moderate,
            strong,
        }
    }

    /// Grades `value` against the cutoffs. Non-finite values grade as no evidence.
    ///
    /// ```
    /// use cogrisk_evaluator::criteria::{EvidenceLevel, rule::COMMISSION_RATE};
    ///
    /// assert_eq!(COMMISSION_RATE.grade(0.05), EvidenceLevel::None);
    /// assert_eq!(COMMISSION_RATE.grade(0.12), EvidenceLevel::Weak);
    /// assert_eq!(COMMISSION_RATE.grade(0.20), EvidenceLevel::Moderate);
    /// assert_eq!(COMMISSION_RATE.grade(0.35), EvidenceLevel::Strong);
    /// ```
    #[must_use]
    pub fn grade(&self, value: f64) -> EvidenceLevel {
        if !value.is_finite() {
            EvidenceLevel::None
        } else if value >= self.strong {
            EvidenceLevel::Strong
        } else if value >= self.moderate {
            EvidenceLevel::Moderate
        } else if value >= self.weak {
            EvidenceLevel::Weak
        } else {
            EvidenceLevel::None
        }
    }
}

pub const COMMISSION_RATE: BandThresholds = BandThresholds::new(0.12, 0.18, 0.28);
pub const OMISSION_RATE: BandThresholds = BandThresholds::new(0.10, 0.18, 0.28);
pub const RT_VARIABILITY: BandThresholds = BandThresholds::new(0.18, 0.24, 0.30);
pub const VIGILANCE_DECREMENT: BandThresholds = BandThresholds::new(0.06, 0.10, 0.16);
pub const STOP_FAILURE_RATE: BandThresholds = BandThresholds::new(0.30, 0.40, 0.50);

/// Planning organization grading of the Tower-of-London task.
///
/// Only sessions with excess moves are graded. A plan that is slow but free of excess
/// moves is reflective rather than disorganized, so its latency alone never produces
/// evidence. Otherwise the level is the higher of the move band and the latency band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanningThresholds {
    pub excess_moves: BandThresholds,
    /// Cutoffs in seconds
    pub latency: BandThresholds,
}

/// Outcome of grading a planning session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanningGrade {
    pub level: EvidenceLevel,
    /// The latency band alone would have produced evidence, but there were no excess moves
    pub reflective_exemption: bool,
}

impl PlanningThresholds {
    #[must_use]
    pub fn grade(&self, excess_moves: f64, latency: f64) -> PlanningGrade {
        let latency_level = self.latency.grade(latency);
        if !(excess_moves.is_finite() && excess_moves > 0.0) {
            return PlanningGrade {
                level: EvidenceLevel::None,
                reflective_exemption: latency_level > EvidenceLevel::None,
            };
        }
        PlanningGrade {
            level: self.excess_moves.grade(excess_moves).max(latency_level),
            reflective_exemption: false,
        }
    }
}

pub const PLANNING_ORGANIZATION: PlanningThresholds = PlanningThresholds {
    excess_moves: BandThresholds::new(1.0, 2.0, 4.0),
    latency: BandThresholds::new(2.5, 4.0, 6.0),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoffs_are_inclusive() {
        for table in [
            COMMISSION_RATE,
            OMISSION_RATE,
            RT_VARIABILITY,
            VIGILANCE_DECREMENT,
            STOP_FAILURE_RATE,
        ] {
            assert_eq!(table.grade(table.weak), EvidenceLevel::Weak);
            assert_eq!(table.grade(table.moderate), EvidenceLevel::Moderate);
            assert_eq!(table.grade(table.strong), EvidenceLevel::Strong);
            assert_eq!(table.grade(0.0), EvidenceLevel::None);
        }
    }

    #[test]
    fn test_grading_is_monotonic() {
        for table in [
            COMMISSION_RATE,
            OMISSION_RATE,
            RT_VARIABILITY,
            VIGILANCE_DECREMENT,
            STOP_FAILURE_RATE,
            PLANNING_ORGANIZATION.excess_moves,
            PLANNING_ORGANIZATION.latency,
        ] {
            let mut previous = EvidenceLevel::None;
            for step in 0..=1000 {
                let level = table.grade(f64::from(step) * 0.01);
                assert!(level >= previous);
                previous = level;
            }
            assert_eq!(previous, EvidenceLevel::Strong);
        }
    }

    #[test]
    fn test_non_finite_is_no_evidence() {
        assert_eq!(STOP_FAILURE_RATE.grade(f64::NAN), EvidenceLevel::None);
        assert_eq!(STOP_FAILURE_RATE.grade(f64::INFINITY), EvidenceLevel::None);
    }

    #[test]
    fn test_planning_without_excess_moves_is_none() {
        for latency in [0.0, 1.0, 3.0, 5.0, 10.0, 60.0] {
            let grade = PLANNING_ORGANIZATION.grade(0.0, latency);
            assert_eq!(grade.level, EvidenceLevel::None);
        }
        assert!(PLANNING_ORGANIZATION.grade(0.0, 10.0).reflective_exemption);
        assert!(!PLANNING_ORGANIZATION.grade(0.0, 1.0).reflective_exemption);
    }

    #[test]
    fn test_planning_takes_higher_band() {
        assert_eq!(PLANNING_ORGANIZATION.grade(5.0, 0.0).level, EvidenceLevel::Strong);
        assert_eq!(PLANNING_ORGANIZATION.grade(1.0, 0.0).level, EvidenceLevel::Weak);
        assert_eq!(PLANNING_ORGANIZATION.grade(1.0, 4.5).level, EvidenceLevel::Moderate);
        assert_eq!(PLANNING_ORGANIZATION.grade(0.5, 7.0).level, EvidenceLevel::Strong);
        assert_eq!(PLANNING_ORGANIZATION.grade(0.5, 1.0).level, EvidenceLevel::None);
    }
}
