//! Coarse per-game risk bands.
//!
//! A band is derived from the unweighted mean of three 0–1 metrics of a game:
//!
//! | Mean | Band |
//! |---|---|
//! | `>= 0.40` | high |
//! | `>= 0.25` | medium |
//! | otherwise | low |

use cogrisk_telemetry::{GameKind, GameMetrics, GameMetricsBundle};
use serde::{Deserialize, Serialize};

const HIGH_CUTOFF: f64 = 0.4;
const MEDIUM_CUTOFF: f64 = 0.25;

#[derive(
    Debug,
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
pub enum RiskBand {
    #[display("low")]
    Low,
    #[display("medium")]
    Medium,
    #[display("high")]
    High,
}

/// Band of the unweighted mean of three metrics.
///
/// ```
/// use cogrisk_evaluator::risk_band::{RiskBand, band_from_triad};
///
/// assert_eq!(band_from_triad(0.5, 0.5, 0.5), RiskBand::High);
/// assert_eq!(band_from_triad(0.3, 0.3, 0.3), RiskBand::Medium);
/// assert_eq!(band_from_triad(0.1, 0.1, 0.1), RiskBand::Low);
/// ```
#[must_use]
pub fn band_from_triad(a: f64, b: f64, c: f64) -> RiskBand {
    let mean = (a + b + c) / 3.0;
    if mean >= HIGH_CUTOFF {
        RiskBand::High
    } else if mean >= MEDIUM_CUTOFF {
        RiskBand::Medium
    } else {
        RiskBand::Low
    }
}

/// The three metrics that define the band of a game.
///
/// - Go/No-Go: commission rate, RT coefficient of variation, vigilance decrement
/// - Stop-Signal: stop-failure rate, commission rate, omission rate
/// - Tower-of-London: fail rate, rule violations per problem, excess moves per problem
///
/// The per-problem ratios are clamped to \[0.0, 1.0\] and are zero when no problems
/// were recorded. Non-finite inputs read as zero.
#[must_use]
pub fn risk_triad(kind: GameKind, metrics: &GameMetrics) -> [f64; 3] {
    let triad = match kind {
        GameKind::GoNoGo => [
            metrics.commission_rate,
            metrics.rt_cv,
            metrics.vigilance_decrement,
        ],
        GameKind::StopSignal => [
            metrics.stop_failure_rate,
            metrics.commission_rate,
            metrics.omission_rate,
        ],
        GameKind::TowerOfLondon => [
            metrics.fail_rate,
            per_problem(metrics.rule_violations / metrics.trial_count, metrics.trial_count),
            per_problem(metrics.excess_moves, metrics.trial_count),
        ],
    };
    triad.map(|v| if v.is_finite() { v } else { 0.0 })
}

fn per_problem(ratio: f64, problems: f64) -> f64 {
    if problems > 0.0 {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Risk band of one game.
#[must_use]
pub fn band_game(kind: GameKind, metrics: &GameMetrics) -> RiskBand {
    let [a, b, c] = risk_triad(kind, metrics);
    band_from_triad(a, b, c)
}

/// Risk bands of the three games of one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRiskBands {
    pub go_no_go: RiskBand,
    pub stop_signal: RiskBand,
    pub tower_of_london: RiskBand,
}

#[must_use]
pub fn band_games(bundle: &GameMetricsBundle) -> GameRiskBands {
    GameRiskBands {
        go_no_go: band_game(GameKind::GoNoGo, &bundle.go_no_go),
        stop_signal: band_game(GameKind::StopSignal, &bundle.stop_signal),
        tower_of_london: band_game(GameKind::TowerOfLondon, &bundle.tower_of_london),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(band_from_triad(0.4, 0.4, 0.4), RiskBand::High);
        assert_eq!(band_from_triad(0.25, 0.25, 0.25), RiskBand::Medium);
        assert_eq!(band_from_triad(0.24, 0.25, 0.25), RiskBand::Low);
        assert_eq!(band_from_triad(0.6, 0.4, 0.3), RiskBand::High);
        assert_eq!(band_from_triad(0.0, 0.0, 0.0), RiskBand::Low);
    }

    #[test]
    fn test_cutoff_applies_to_computed_mean() {
        // (0.5 + 0.4 + 0.3) / 3 evaluates to 0.39999999999999997, just below the cutoff
        let mean = (0.5 + 0.4 + 0.3) / 3.0;
        assert!(mean < HIGH_CUTOFF);
        assert_eq!(band_from_triad(0.5, 0.4, 0.3), RiskBand::Medium);
        assert_eq!(band_from_triad(0.0, 0.0, 1.2), RiskBand::Medium);
    }

    #[test]
    fn test_band_is_unweighted() {
        let band = band_from_triad(0.6, 0.15, 0.0);
        assert_eq!(band, band_from_triad(0.0, 0.15, 0.6));
        assert_eq!(band, RiskBand::Medium);
    }

    #[test]
    fn test_go_no_go_triad() {
        let metrics = GameMetrics {
            commission_rate: 0.6,
            rt_cv: 0.4,
            vigilance_decrement: 0.3,
            omission_rate: 0.9,
            ..GameMetrics::default()
        };
        assert_eq!(risk_triad(GameKind::GoNoGo, &metrics), [0.6, 0.4, 0.3]);
        assert_eq!(band_game(GameKind::GoNoGo, &metrics), RiskBand::High);
    }

    #[test]
    fn test_tower_of_london_ratios() {
        let metrics = GameMetrics {
            trial_count: 10.0,
            fail_rate: 0.2,
            rule_violations: 3.0,
            excess_moves: 2.5,
            ..GameMetrics::default()
        };
        let [fail, violations, excess] = risk_triad(GameKind::TowerOfLondon, &metrics);
        assert_eq!(fail, 0.2);
        assert!((violations - 0.3).abs() < 1e-12);
        assert_eq!(excess, 1.0);

        let unplayed = risk_triad(GameKind::TowerOfLondon, &GameMetrics::default());
        assert_eq!(unplayed, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_band_games() {
        let mut bundle = GameMetricsBundle::default();
        bundle.stop_signal.stop_failure_rate = 0.45;
        bundle.stop_signal.commission_rate = 0.45;
        bundle.stop_signal.omission_rate = 0.05;
        let bands = band_games(&bundle);
        assert_eq!(bands.go_no_go, RiskBand::Low);
        assert_eq!(bands.stop_signal, RiskBand::Medium);
        assert_eq!(bands.tower_of_london, RiskBand::Low);
    }
}
