//! Reduction of per-trial telemetry into session-level [`GameMetrics`].
//!
//! # Inhibition Tasks
//!
//! Go/No-Go and Stop-Signal sessions share the same reduction:
//!
//! - **Omission rate**: go trials without a response / go trials
//! - **Commission rate**: responses on no-go or stop trials / no-go or stop trials
//! - **Response times**: statistics over go trials with a recorded response time
//! - **Vigilance decrement**: accuracy of the first half minus accuracy of the second
//!   half, floored at zero (improvement over time is not a decrement)
//!
//! Stop-Signal sessions additionally report the commission rate as `stop_failure_rate`.
//!
//! # Planning Task
//!
//! Tower-of-London sessions report mean excess moves and mean planning latency per
//! problem, and the total number of rule violations.
//!
//! # Examples
//!
//! ```
//! use cogrisk_telemetry::{InhibitionTrial, Stimulus, summary};
//!
//! let trials = [
//!     InhibitionTrial { stimulus: Stimulus::Go, responded: true, rt: Some(0.45) },
//!     InhibitionTrial { stimulus: Stimulus::Go, responded: false, rt: None },
//!     InhibitionTrial { stimulus: Stimulus::NoGo, responded: true, rt: Some(0.30) },
//!     InhibitionTrial { stimulus: Stimulus::NoGo, responded: false, rt: None },
//! ];
//! let metrics = summary::summarize_go_no_go(&trials);
//! assert_eq!(metrics.trial_count, 4.0);
//! assert_eq!(metrics.omission_rate, 0.5);
//! assert_eq!(metrics.commission_rate, 0.5);
//! ```

use cogrisk_stats::{descriptive::DescriptiveStats, percentiles::compute_percentile, rate};

use crate::{GameMetrics, InhibitionTrial, PlanningProblem};

const RT_PERCENTILE: f64 = 95.0;

/// Summarizes a Go/No-Go session.
#[must_use]
pub fn summarize_go_no_go(trials: &[InhibitionTrial]) -> GameMetrics {
    let metrics = summarize_inhibition(trials);
    tracing::debug!(
        trials = trials.len(),
        commission_rate = metrics.commission_rate,
        omission_rate = metrics.omission_rate,
        "summarized go/no-go session"
    );
    metrics
}

/// Summarizes a Stop-Signal session.
#[must_use]
pub fn summarize_stop_signal(trials: &[InhibitionTrial]) -> GameMetrics {
    let mut metrics = summarize_inhibition(trials);
    metrics.stop_failure_rate = metrics.commission_rate;
    tracing::debug!(
        trials = trials.len(),
        stop_failure_rate = metrics.stop_failure_rate,
        "summarized stop-signal session"
    );
    metrics
}

/// Summarizes a Tower-of-London session.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn summarize_tower_of_london(problems: &[PlanningProblem]) -> GameMetrics {
    let count = problems.len();
    let solved = problems.iter().filter(|p| p.solved).count();
    let excess_moves = problems
        .iter()
        .map(|p| f64::from(p.excess_moves))
        .collect::<Vec<_>>();
    let latencies = problems
        .iter()
        .map(|p| p.planning_latency)
        .filter(|l| l.is_finite())
        .collect::<Vec<_>>();
    let rule_violations = problems
        .iter()
        .map(|p| u64::from(p.rule_violations))
        .sum::<u64>();

    let metrics = GameMetrics {
        trial_count: count as f64,
        accuracy: rate(solved, count),
        fail_rate: rate(count - solved, count),
        n_correct: solved as f64,
        n_incorrect: (count - solved) as f64,
        plan_latency: cogrisk_stats::mean(&latencies).unwrap_or(0.0),
        excess_moves: cogrisk_stats::mean(&excess_moves).unwrap_or(0.0),
        rule_violations: rule_violations as f64,
        ..GameMetrics::default()
    };
    tracing::debug!(
        problems = count,
        excess_moves = metrics.excess_moves,
        plan_latency = metrics.plan_latency,
        "summarized tower-of-london session"
    );
    metrics
}

#[expect(clippy::cast_precision_loss)]
fn summarize_inhibition(trials: &[InhibitionTrial]) -> GameMetrics {
    let count = trials.len();
    let responded = trials.iter().filter(|t| t.responded).count();
    let correct = trials.iter().filter(|t| t.is_correct()).count();

    let (go, withhold): (Vec<&InhibitionTrial>, Vec<&InhibitionTrial>) = trials
        .iter()
        .partition(|t| t.stimulus.expects_response());
    let omissions = go.iter().filter(|t| !t.responded).count();
    let commissions = withhold.iter().filter(|t| t.responded).count();

    let mut metrics = GameMetrics {
        trial_count: count as f64,
        responded_rate: rate(responded, count),
        accuracy: rate(correct, count),
        fail_rate: rate(count - correct, count),
        omission_rate: rate(omissions, go.len()),
        commission_rate: rate(commissions, withhold.len()),
        vigilance_decrement: vigilance_decrement(trials),
        n_correct: correct as f64,
        n_incorrect: (count - correct) as f64,
        ..GameMetrics::default()
    };

    let mut rts = go
        .iter()
        .filter(|t| t.responded)
        .filter_map(|t| t.rt)
        .filter(|rt| rt.is_finite())
        .collect::<Vec<_>>();
    rts.sort_by(f64::total_cmp);
    if let Some(stats) = DescriptiveStats::from_sorted(&rts) {
        metrics.mean_rt = stats.mean;
        metrics.median_rt = stats.median;
        metrics.p95_rt = compute_percentile(&rts, RT_PERCENTILE);
        metrics.std_rt = stats.std_dev;
        metrics.rt_cv = stats.coefficient_of_variation();
    }

    metrics
}

fn vigilance_decrement(trials: &[InhibitionTrial]) -> f64 {
    if trials.len() < 2 {
        return 0.0;
    }
    let (first, second) = trials.split_at(trials.len() / 2);
    let accuracy =
        |half: &[InhibitionTrial]| rate(half.iter().filter(|t| t.is_correct()).count(), half.len());
    (accuracy(first) - accuracy(second)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stimulus;

    fn go(responded: bool, rt: f64) -> InhibitionTrial {
        InhibitionTrial {
            stimulus: Stimulus::Go,
            responded,
            rt: responded.then_some(rt),
        }
    }

    fn withhold(stimulus: Stimulus, responded: bool) -> InhibitionTrial {
        InhibitionTrial {
            stimulus,
            responded,
            rt: responded.then_some(0.3),
        }
    }

    #[test]
    fn test_empty_session_is_all_zero() {
        assert_eq!(summarize_go_no_go(&[]), GameMetrics::default());
        assert_eq!(summarize_tower_of_london(&[]), GameMetrics::default());
    }

    #[test]
    fn test_rt_statistics_use_responded_go_trials_only() {
        let trials = [
            go(true, 0.4),
            go(true, 0.6),
            go(false, 0.0),
            withhold(Stimulus::NoGo, true),
        ];
        let metrics = summarize_go_no_go(&trials);
        assert!((metrics.mean_rt - 0.5).abs() < 1e-12);
        assert!((metrics.median_rt - 0.5).abs() < 1e-12);
        assert!((metrics.std_rt - 0.1).abs() < 1e-12);
        assert!((metrics.rt_cv - 0.2).abs() < 1e-12);
        assert_eq!(metrics.p95_rt, 0.6);
    }

    #[test]
    fn test_counts_and_rates() {
        let trials = [
            go(true, 0.5),
            go(true, 0.5),
            go(false, 0.0),
            withhold(Stimulus::NoGo, false),
        ];
        let metrics = summarize_go_no_go(&trials);
        assert_eq!(metrics.n_correct, 3.0);
        assert_eq!(metrics.n_incorrect, 1.0);
        assert!((metrics.accuracy - 0.75).abs() < 1e-12);
        assert!((metrics.fail_rate - 0.25).abs() < 1e-12);
        assert!((metrics.responded_rate - 0.5).abs() < 1e-12);
        assert!((metrics.omission_rate - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(metrics.commission_rate, 0.0);
        assert_eq!(metrics.stop_failure_rate, 0.0);
    }

    #[test]
    fn test_vigilance_decrement() {
        // First half perfect, second half all omissions
        let mut trials = vec![go(true, 0.5); 4];
        trials.extend(vec![go(false, 0.0); 4]);
        assert!((summarize_go_no_go(&trials).vigilance_decrement - 1.0).abs() < 1e-12);

        // Improvement over time is not a decrement
        trials.reverse();
        assert_eq!(summarize_go_no_go(&trials).vigilance_decrement, 0.0);
    }

    #[test]
    fn test_stop_signal_reports_stop_failure() {
        let trials = [
            go(true, 0.5),
            withhold(Stimulus::Stop, true),
            withhold(Stimulus::Stop, false),
            withhold(Stimulus::Stop, false),
            withhold(Stimulus::Stop, true),
        ];
        let metrics = summarize_stop_signal(&trials);
        assert!((metrics.stop_failure_rate - 0.5).abs() < 1e-12);
        assert_eq!(metrics.stop_failure_rate, metrics.commission_rate);
    }

    #[test]
    fn test_tower_of_london() {
        let problems = [
            PlanningProblem {
                solved: true,
                excess_moves: 0,
                planning_latency: 2.0,
                rule_violations: 0,
            },
            PlanningProblem {
                solved: false,
                excess_moves: 4,
                planning_latency: 4.0,
                rule_violations: 3,
            },
        ];
        let metrics = summarize_tower_of_london(&problems);
        assert_eq!(metrics.trial_count, 2.0);
        assert_eq!(metrics.excess_moves, 2.0);
        assert_eq!(metrics.plan_latency, 3.0);
        assert_eq!(metrics.rule_violations, 3.0);
        assert_eq!(metrics.accuracy, 0.5);
        assert_eq!(metrics.n_incorrect, 1.0);
    }

    #[test]
    fn test_rule_violations_total_does_not_overflow() {
        let problem = PlanningProblem {
            solved: false,
            excess_moves: 0,
            planning_latency: 1.0,
            rule_violations: u32::MAX,
        };
        let metrics = summarize_tower_of_london(&[problem, problem]);
        assert_eq!(metrics.rule_violations, 2.0 * f64::from(u32::MAX));
    }
}
