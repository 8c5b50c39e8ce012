//! Exact statistics over raw, ungrouped observations.
//!
//! [`SampleAnalyzer`] sorts its input once on construction and derives every
//! statistic from the raw or sorted values on demand.
//!
//! # Degrees of freedom
//!
//! [`SampleAnalyzer::variance`] and [`SampleAnalyzer::std_dev`] apply Bessel's
//! correction and divide by `n - 1`, while [`SampleAnalyzer::central_moment`]
//! divides by `n`. The second central moment is therefore the population
//! variance and is smaller than the sample variance by a factor of
//! `(n - 1) / n`.
//!
//! # Examples
//!
//! ```
//! use varistat_stats::sample::SampleAnalyzer;
//!
//! let analyzer = SampleAnalyzer::new([4.0, 1.0, 3.0, 2.0])?;
//! assert_eq!(analyzer.extremes(), (1.0, 4.0));
//! assert_eq!(analyzer.median(), 2.5);
//! assert_eq!(analyzer.mean(), 2.5);
//! assert_eq!(analyzer.empirical_distribution(2.0), 0.5);
//! # Ok::<(), varistat_stats::StatsError>(())
//! ```

use crate::{
    error::{self, StatsError},
    frequency::FrequencyTable,
    percentiles,
};

/// Analyzer computing exact descriptive statistics of a sample.
///
/// The sample is guaranteed to be non-empty and to contain only finite values,
/// so the order statistics and the mean are always defined. Only the variance
/// and standard deviation can fail, when the sample holds a single value.
#[derive(Debug, Clone)]
pub struct SampleAnalyzer {
    raw_values: Vec<f64>,
    sorted_values: Vec<f64>,
    frequency_table: FrequencyTable,
}

impl SampleAnalyzer {
    /// Creates an analyzer from unsorted values.
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptySample`] - if `values` yields nothing
    /// * [`StatsError::NonFiniteValue`] - if any value is NaN or infinite
    pub fn new<I>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let raw_values = error::collect_finite(values)?;
        let mut sorted_values = raw_values.clone();
        sorted_values.sort_by(f64::total_cmp);
        let frequency_table = FrequencyTable::from_sorted(&sorted_values);
        Ok(Self {
            raw_values,
            sorted_values,
            frequency_table,
        })
    }

    /// Returns the sample size `n`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw_values.len()
    }

    /// Always `false`; an analyzer cannot be built from an empty sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw_values.is_empty()
    }

    /// Returns the values in input order.
    #[must_use]
    pub fn raw_values(&self) -> &[f64] {
        &self.raw_values
    }

    /// Returns the values sorted in ascending order.
    #[must_use]
    pub fn sorted_values(&self) -> &[f64] {
        &self.sorted_values
    }

    #[must_use]
    pub fn frequency_table(&self) -> &FrequencyTable {
        &self.frequency_table
    }

    /// Returns `(min, max)` of the sample.
    #[must_use]
    pub fn extremes(&self) -> (f64, f64) {
        // non-empty by construction
        let min = self.sorted_values[0];
        let max = self.sorted_values[self.sorted_values.len() - 1];
        (min, max)
    }

    /// Returns `max - min`.
    #[must_use]
    pub fn range(&self) -> f64 {
        let (min, max) = self.extremes();
        max - min
    }

    #[must_use]
    pub fn median(&self) -> f64 {
        percentiles::compute_median(&self.sorted_values)
    }

    /// Returns the first and third quartiles `(Q1, Q3)`.
    ///
    /// Uses linear interpolation between closest ranks, see
    /// [`percentiles::compute_percentile`].
    ///
    /// ```
    /// # use varistat_stats::sample::SampleAnalyzer;
    /// let analyzer = SampleAnalyzer::new((1..=10).map(f64::from))?;
    /// assert_eq!(analyzer.quartiles(), (3.25, 7.75));
    /// # Ok::<(), varistat_stats::StatsError>(())
    /// ```
    #[must_use]
    pub fn quartiles(&self) -> (f64, f64) {
        (
            percentiles::compute_percentile(&self.sorted_values, 25.0),
            percentiles::compute_percentile(&self.sorted_values, 75.0),
        )
    }

    /// Returns the arithmetic mean of the raw values.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.raw_values.iter().sum::<f64>() / self.len() as f64
    }

    /// Returns the sample variance with Bessel's correction, `Σ(x - mean)² / (n - 1)`.
    ///
    /// # Errors
    ///
    /// [`StatsError::InsufficientSample`] if the sample holds a single value.
    #[expect(clippy::cast_precision_loss)]
    pub fn variance(&self) -> Result<f64, StatsError> {
        error::ensure_len(self.len(), 2)?;
        let mean = self.mean();
        let sum_sq = self
            .raw_values
            .iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>();
        Ok(sum_sq / (self.len() - 1) as f64)
    }

    /// Returns the sample standard deviation, the square root of [`Self::variance`].
    ///
    /// # Errors
    ///
    /// [`StatsError::InsufficientSample`] if the sample holds a single value.
    pub fn std_dev(&self) -> Result<f64, StatsError> {
        self.variance().map(f64::sqrt)
    }

    /// Returns the initial (raw) moment of the given order, `mean(x^order)`.
    ///
    /// ```
    /// # use varistat_stats::sample::SampleAnalyzer;
    /// let analyzer = SampleAnalyzer::new([1.0, 2.0, 3.0])?;
    /// assert_eq!(analyzer.initial_moment(1), 2.0);
    /// assert_eq!(analyzer.initial_moment(2), 14.0 / 3.0);
    /// # Ok::<(), varistat_stats::StatsError>(())
    /// ```
    #[must_use]
    pub fn initial_moment(&self, order: u32) -> f64 {
        self.mean_of(|x| powu(x, order))
    }

    /// Returns the central moment of the given order, `mean((x - mean)^order)`.
    ///
    /// Divides by `n`, unlike [`Self::variance`].
    #[must_use]
    pub fn central_moment(&self, order: u32) -> f64 {
        let mean = self.mean();
        self.mean_of(|x| powu(x - mean, order))
    }

    /// Evaluates the empirical distribution function at `x`.
    ///
    /// Returns the fraction of sample values less than or equal to `x`. The
    /// function is a right-continuous step function rising from 0 below the
    /// minimum to 1 at the maximum.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn empirical_distribution(&self, x: f64) -> f64 {
        let count = self.sorted_values.partition_point(|&v| v <= x);
        count as f64 / self.len() as f64
    }

    /// Returns `(value, F(value))` for each distinct value in ascending order.
    ///
    /// These are the corners of the empirical distribution step plot: the
    /// function jumps to `F(value)` at `value` and stays flat until the next
    /// distinct value.
    ///
    /// ```
    /// # use varistat_stats::sample::SampleAnalyzer;
    /// let analyzer = SampleAnalyzer::new([3.0, 1.0, 1.0, 2.0])?;
    /// assert_eq!(
    ///     analyzer.empirical_distribution_steps(),
    ///     vec![(1.0, 0.5), (2.0, 0.75), (3.0, 1.0)]
    /// );
    /// # Ok::<(), varistat_stats::StatsError>(())
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn empirical_distribution_steps(&self) -> Vec<(f64, f64)> {
        let n = self.len() as f64;
        let mut cumulative = 0;
        self.frequency_table
            .iter()
            .map(|(value, count)| {
                cumulative += count;
                (value, cumulative as f64 / n)
            })
            .collect()
    }

    #[expect(clippy::cast_precision_loss)]
    fn mean_of<F>(&self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        self.raw_values.iter().copied().map(f).sum::<f64>() / self.len() as f64
    }
}

fn powu(x: f64, order: u32) -> f64 {
    match i32::try_from(order) {
        Ok(order) => x.powi(order),
        Err(_) => x.powf(f64::from(order)),
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn analyzer(values: &[f64]) -> SampleAnalyzer {
        SampleAnalyzer::new(values.iter().copied()).unwrap()
    }

    fn random_samples() -> impl Iterator<Item = Vec<f64>> {
        let mut rng = Pcg64Mcg::seed_from_u64(0x5eed);
        (0..50).map(move |_| {
            let len = rng.random_range(1..200);
            (0..len)
                .map(|_| f64::from(rng.random_range(-50..50_i32)) * 0.5)
                .collect()
        })
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_sample_is_rejected() {
        let err = SampleAnalyzer::new(std::iter::empty()).unwrap_err();
        assert_eq!(err, StatsError::EmptySample);
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        let err = SampleAnalyzer::new([1.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(err, StatsError::NonFiniteValue { index: 1, .. }));
    }

    #[test]
    fn test_sorted_copy_keeps_raw_order() {
        let a = analyzer(&[3.0, 1.0, 2.0]);
        assert_eq!(a.raw_values(), &[3.0, 1.0, 2.0]);
        assert_eq!(a.sorted_values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_extremes_and_range() {
        let a = analyzer(&[2.5, -1.0, 7.0, 3.0]);
        assert_eq!(a.extremes(), (-1.0, 7.0));
        assert_eq!(a.range(), 8.0);
    }

    #[test]
    fn test_median_even_and_odd() {
        assert_eq!(analyzer(&[1.0, 2.0, 3.0, 4.0]).median(), 2.5);
        assert_eq!(analyzer(&[1.0, 2.0, 3.0]).median(), 2.0);
        assert_eq!(analyzer(&[3.0, 1.0, 2.0]).median(), 2.0);
    }

    #[test]
    fn test_quartiles_linear_interpolation() {
        let a = SampleAnalyzer::new((1..=10).map(f64::from)).unwrap();
        let (q1, q3) = a.quartiles();
        assert_close(q1, 3.25);
        assert_close(q3, 7.75);
    }

    #[test]
    fn test_single_value_sample() {
        let a = analyzer(&[5.0]);
        assert_eq!(a.extremes(), (5.0, 5.0));
        assert_eq!(a.range(), 0.0);
        assert_eq!(a.median(), 5.0);
        assert_eq!(a.quartiles(), (5.0, 5.0));
        assert_eq!(a.mean(), 5.0);
        assert_eq!(a.central_moment(2), 0.0);
        assert_eq!(a.empirical_distribution(5.0), 1.0);
    }

    #[test]
    fn test_variance_requires_two_values() {
        let a = analyzer(&[5.0]);
        let expected = StatsError::InsufficientSample {
            required: 2,
            actual: 1,
        };
        assert_eq!(a.variance(), Err(expected.clone()));
        assert_eq!(a.std_dev(), Err(expected));
    }

    #[test]
    fn test_variance_uses_bessel_correction() {
        let a = analyzer(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        // Σ(x - 5)² = 32
        assert_close(a.variance().unwrap(), 32.0 / 7.0);
        assert_close(a.central_moment(2), 32.0 / 8.0);
    }

    #[test]
    fn test_moments() {
        let a = analyzer(&[1.0, 2.0, 3.0, 4.0]);
        assert_close(a.initial_moment(1), 2.5);
        assert_close(a.initial_moment(2), 7.5);
        assert_close(a.initial_moment(3), 25.0);
        assert_close(a.central_moment(2), 1.25);
        // symmetric sample
        assert_close(a.central_moment(3), 0.0);
        assert_eq!(a.initial_moment(0), 1.0);
    }

    #[test]
    fn test_empirical_distribution_steps() {
        let a = analyzer(&[1.0, 2.0, 2.0, 4.0]);
        assert_eq!(a.empirical_distribution(0.5), 0.0);
        assert_eq!(a.empirical_distribution(1.0), 0.25);
        assert_eq!(a.empirical_distribution(1.999), 0.25);
        assert_eq!(a.empirical_distribution(2.0), 0.75);
        assert_eq!(a.empirical_distribution(3.0), 0.75);
        assert_eq!(a.empirical_distribution(4.0), 1.0);
        assert_eq!(a.empirical_distribution(100.0), 1.0);
    }

    #[test]
    fn test_extremes_bound_every_value() {
        for values in random_samples() {
            let a = analyzer(&values);
            let (min, max) = a.extremes();
            assert!(values.contains(&min));
            assert!(values.contains(&max));
            assert!(values.iter().all(|v| min <= *v && *v <= max));
            assert_eq!(a.range(), max - min);
        }
    }

    #[test]
    fn test_frequency_counts_sum_to_sample_size() {
        for values in random_samples() {
            let a = analyzer(&values);
            assert_eq!(a.frequency_table().total_count(), values.len() as u64);
        }
    }

    #[test]
    fn test_empirical_distribution_is_monotone() {
        for values in random_samples() {
            let a = analyzer(&values);
            let (min, max) = a.extremes();
            assert_eq!(a.empirical_distribution(min - 1.0), 0.0);
            assert_eq!(a.empirical_distribution(max), 1.0);

            let mut prev = 0.0;
            let mut x = min - 1.0;
            while x <= max + 1.0 {
                let f = a.empirical_distribution(x);
                assert!(prev <= f, "F({x}) = {f} < {prev}");
                prev = f;
                x += 0.25;
            }
        }
    }

    #[test]
    fn test_steps_agree_with_distribution_function() {
        for values in random_samples() {
            let a = analyzer(&values);
            for (value, f) in a.empirical_distribution_steps() {
                assert_close(f, a.empirical_distribution(value));
            }
        }
    }

    #[test]
    fn test_moment_identities() {
        for values in random_samples() {
            let a = analyzer(&values);
            assert!(a.central_moment(1).abs() < 1e-9);
            assert_close(a.initial_moment(1), a.mean());
            if a.len() >= 2 {
                let variance = a.variance().unwrap();
                let std_dev = a.std_dev().unwrap();
                assert_close(std_dev * std_dev, variance);
            }
        }
    }
}
