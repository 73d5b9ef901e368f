use serde::{Deserialize, Serialize};

/// Descriptive statistics summarizing a sample.
///
/// Measures of central tendency and dispersion for a dataset of `f64`
/// values, such as one team's final scores over a batch of games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Number of values in the sample.
    pub count: usize,
    pub min: f64,
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Upper median (the value at index `count / 2` of the sorted sample).
    pub median: f64,
    /// Population variance.
    pub variance: f64,
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// Returns `None` if the sample is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridiron_stats::descriptive::DescriptiveStats;
    /// let scores = [14.0, 3.0, 7.0, 0.0, 6.0];
    /// let stats = DescriptiveStats::new(scores).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.min, 0.0);
    /// assert_eq!(stats.max, 14.0);
    /// assert_eq!(stats.mean, 6.0);
    /// assert_eq!(stats.median, 6.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from values already sorted in
    /// ascending order, skipping the sort.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridiron_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_sorted(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert_eq!(stats.mean, 5.0);
    /// assert_eq!(stats.std_dev, 2.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let median = sorted_values[count / 2];
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample() {
        assert_eq!(DescriptiveStats::new(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([7.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, 7.0);
        assert_eq!(stats.max, 7.0);
        assert_eq!(stats.median, 7.0);
        assert_eq!(stats.variance, 0.0);
    }

    #[test]
    fn test_even_count_uses_upper_median() {
        let stats = DescriptiveStats::new([3.0, 0.0, 7.0, 6.0]).unwrap();
        assert_eq!(stats.median, 6.0);
    }

    #[test]
    #[should_panic(expected = "sorted")]
    fn test_from_sorted_rejects_unsorted() {
        let _ = DescriptiveStats::from_sorted(&[3.0, 1.0]);
    }
}
