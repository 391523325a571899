/// Nearest-rank percentile of sorted data.
///
/// For `n` values the k-th percentile is the value at position `floor(n * k / 100)`,
/// clamped to the last element. Returns `f64::NAN` if the input is empty.
///
/// ```
/// use cogrisk_stats::percentiles::compute_percentile;
///
/// let values = [0.3, 0.4, 0.5, 0.6, 0.9];
/// assert_eq!(compute_percentile(&values, 50.0), 0.5);
/// assert_eq!(compute_percentile(&values, 95.0), 0.9);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let idx = ((sorted_values.len() as f64 * percentile) / 100.0) as usize;
    let idx = idx.min(sorted_values.len() - 1);
    sorted_values[idx]
}
