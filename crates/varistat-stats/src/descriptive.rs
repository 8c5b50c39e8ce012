use serde::{Deserialize, Serialize};

use crate::sample::SampleAnalyzer;

/// Descriptive statistics summarizing a sample.
///
/// This structure is a snapshot of the figures a [`SampleAnalyzer`] computes,
/// convenient for printing and serializing. Statistics that are undefined for
/// the sample size (variance and standard deviation of a single value) are
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// The number of values in the sample.
    pub count: usize,
    /// The minimum value in the sample.
    pub min: f64,
    /// The maximum value in the sample.
    pub max: f64,
    /// The difference between the maximum and the minimum.
    pub range: f64,
    /// The median value of the sample.
    pub median: f64,
    /// The first quartile (25th percentile).
    pub q1: f64,
    /// The third quartile (75th percentile).
    pub q3: f64,
    /// The arithmetic mean of the sample.
    pub mean: f64,
    /// The initial moment of the second order, `mean(x²)`.
    pub initial_moment_2: f64,
    /// The central moment of the second order, `mean((x - mean)²)`.
    pub central_moment_2: f64,
    /// The sample variance (`n - 1` denominator).
    pub variance: Option<f64>,
    /// The sample standard deviation.
    pub std_dev: Option<f64>,
}

impl DescriptiveStats {
    /// Collects descriptive statistics from an analyzer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use varistat_stats::{descriptive::DescriptiveStats, sample::SampleAnalyzer};
    /// let analyzer = SampleAnalyzer::new([5.0, 2.0, 4.0, 1.0, 3.0])?;
    /// let stats = DescriptiveStats::from_analyzer(&analyzer);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.variance, Some(2.5));
    /// # Ok::<(), varistat_stats::StatsError>(())
    /// ```
    #[must_use]
    pub fn from_analyzer(analyzer: &SampleAnalyzer) -> Self {
        let (min, max) = analyzer.extremes();
        let (q1, q3) = analyzer.quartiles();
        Self {
            count: analyzer.len(),
            min,
            max,
            range: analyzer.range(),
            median: analyzer.median(),
            q1,
            q3,
            mean: analyzer.mean(),
            initial_moment_2: analyzer.initial_moment(2),
            central_moment_2: analyzer.central_moment(2),
            variance: analyzer.variance().ok(),
            std_dev: analyzer.std_dev().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_has_no_dispersion() {
        let analyzer = SampleAnalyzer::new([7.0]).unwrap();
        let stats = DescriptiveStats::from_analyzer(&analyzer);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.range, 0.0);
        assert_eq!(stats.central_moment_2, 0.0);
        assert_eq!(stats.variance, None);
        assert_eq!(stats.std_dev, None);
    }

    #[test]
    fn test_quartiles_are_copied() {
        let analyzer = SampleAnalyzer::new((1..=10).map(f64::from)).unwrap();
        let stats = DescriptiveStats::from_analyzer(&analyzer);
        assert_eq!((stats.q1, stats.q3), analyzer.quartiles());
        assert_eq!(stats.initial_moment_2, 38.5);
    }
}
