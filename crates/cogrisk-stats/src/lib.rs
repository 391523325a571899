//! Statistical helpers for summarizing game telemetry.
//!
//! This crate provides the small set of statistics needed to turn per-trial
//! response times and outcomes into session-level metrics:
//!
//! - [`descriptive`]: mean, median, population standard deviation and coefficient
//!   of variation of a series
//! - [`percentiles`]: nearest-rank percentiles
//!
//! ```
//! use cogrisk_stats::{descriptive::DescriptiveStats, percentiles::compute_percentile};
//!
//! let rts = [0.4, 0.5, 0.6];
//! let stats = DescriptiveStats::from_sorted(&rts).unwrap();
//! assert!((stats.mean - 0.5).abs() < 1e-12);
//! assert_eq!(compute_percentile(&rts, 95.0), 0.6);
//! ```

pub mod descriptive;
pub mod percentiles;

/// Arithmetic mean of a slice, or `None` when it is empty.
///
/// ```
/// assert_eq!(cogrisk_stats::mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(cogrisk_stats::mean(&[]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Ratio `numerator / denominator`, or `0.0` when the denominator is zero.
///
/// Rates over empty trial sets are reported as zero rather than NaN.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn rate(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
