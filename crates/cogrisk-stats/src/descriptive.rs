/// Location and spread of a response-time series.
///
/// Standard deviation is the population (not sample) estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    pub mean: f64,
    /// Mean of the two middle values for even counts
    pub median: f64,
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes the statistics of pre-sorted values, or `None` for an empty slice.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// ```
    /// # use cogrisk_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let mean = crate::mean(sorted_values)?;
        let count = sorted_values.len();
        let median = if count % 2 == 0 {
            f64::midpoint(sorted_values[count / 2 - 1], sorted_values[count / 2])
        } else {
            sorted_values[count / 2]
        };
        let squared_deviations = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .collect::<Vec<_>>();
        let std_dev = crate::mean(&squared_deviations)?.sqrt();

        Some(Self {
            mean,
            median,
            std_dev,
        })
    }

    /// Coefficient of variation (`std_dev / mean`).
    ///
    /// Returns `0.0` when the mean is zero, so an all-zero series reads as
    /// "no variability" instead of NaN.
    ///
    /// ```
    /// # use cogrisk_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_sorted(&[0.4, 0.6]).unwrap();
    /// assert!((stats.coefficient_of_variation() - 0.2).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean.abs() < f64::EPSILON {
            0.0
        } else {
            self.std_dev / self.mean
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert!(DescriptiveStats::from_sorted(&[]).is_none());
    }

    #[test]
    fn test_even_count_median() {
        let stats = DescriptiveStats::from_sorted(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((stats.median - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_population_std_dev() {
        let stats =
            DescriptiveStats::from_sorted(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "sorted")]
    fn test_unsorted_input_panics() {
        let _ = DescriptiveStats::from_sorted(&[3.0, 1.0]);
    }

    #[test]
    fn test_zero_mean_cv() {
        let stats = DescriptiveStats::from_sorted(&[0.0, 0.0]).unwrap();
        assert_eq!(stats.coefficient_of_variation(), 0.0);
    }
}
