//! Approximate statistics over data grouped into equal-width bins.
//!
//! [`GroupedDataAnalyzer`] splits the sample range `[min, max]` into a fixed
//! number of contiguous, equal-width, half-open bins `[lower, upper)` and counts
//! the values falling into each. The mean and variance are then estimated as if
//! every value sat at the midpoint of its bin.
//!
//! # Bin boundaries
//!
//! Boundaries are computed as `min + i * width` from the bin index rather than
//! by repeated addition, and the upper bound of the last bin is exactly the
//! sample maximum. With strictly half-open bins the maximum therefore never
//! lands in any bin. [`LastBinUpperBound`] selects whether the last bin is
//! closed (the default) or kept half-open like all others.
//!
//! # Degenerate samples
//!
//! When every value is identical the bin width is zero and every bin collapses
//! to the point `[v, v)`. In that case the first bin holds all values and the
//! remaining bins are empty, whatever the [`LastBinUpperBound`] policy.
//!
//! # Examples
//!
//! ```
//! use varistat_stats::grouped::GroupedDataAnalyzer;
//!
//! let values = (1..=10).map(f64::from);
//! let analyzer = GroupedDataAnalyzer::new(values, 5)?;
//!
//! let counts = analyzer.bins().iter().map(|bin| bin.count).collect::<Vec<_>>();
//! assert_eq!(counts, [2, 2, 2, 2, 2]);
//! assert!((analyzer.bin_width() - 1.8).abs() < 1e-12);
//! # Ok::<(), varistat_stats::StatsError>(())
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{self, StatsError};

/// The number of bins used when none is specified.
pub const DEFAULT_NUM_BINS: usize = 5;

/// How the upper bound of the last bin is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LastBinUpperBound {
    /// The last bin is closed, `[lower, max]`, so the sample maximum is counted
    /// and bin frequencies sum to the sample size.
    #[default]
    Inclusive,
    /// The last bin is half-open like every other bin. Values equal to the
    /// sample maximum are left out of every bin, while the estimates still
    /// divide by the full sample size.
    Exclusive,
}

/// Options controlling how a [`GroupedDataAnalyzer`] partitions the sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinningOptions {
    /// The number of bins, must be positive.
    pub num_bins: usize,
    /// Treatment of the last bin's upper bound.
    pub last_bin: LastBinUpperBound,
}

impl Default for BinningOptions {
    fn default() -> Self {
        Self {
            num_bins: DEFAULT_NUM_BINS,
            last_bin: LastBinUpperBound::default(),
        }
    }
}

/// A single bin of grouped data.
///
/// Each bin represents a range of values and the number of sample values that
/// fall within that range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// The range of values covered by this bin.
    ///
    /// The start is inclusive and the end exclusive, except for the last bin
    /// under [`LastBinUpperBound::Inclusive`], whose end is the sample maximum
    /// and is counted in the bin.
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Bin {
    /// Returns the center of the bin, the value every member is assumed to take.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        f64::midpoint(self.range.start, self.range.end)
    }
}

/// Analyzer estimating sample statistics from equal-width bins.
#[derive(Debug, Clone)]
pub struct GroupedDataAnalyzer {
    bins: Vec<Bin>,
    bin_width: f64,
    len: usize,
    options: BinningOptions,
}

impl GroupedDataAnalyzer {
    /// Groups `values` into `num_bins` bins with an inclusive last bin.
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptySample`] - if `values` yields nothing
    /// * [`StatsError::NonFiniteValue`] - if any value is NaN or infinite
    /// * [`StatsError::InvalidBinCount`] - if `num_bins` is zero
    pub fn new<I>(values: I, num_bins: usize) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::with_options(
            values,
            BinningOptions {
                num_bins,
                ..BinningOptions::default()
            },
        )
    }

    /// Groups `values` according to `options`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    #[expect(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn with_options<I>(values: I, options: BinningOptions) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = error::collect_finite(values)?;
        let num_bins = options.num_bins;
        if num_bins == 0 {
            return Err(StatsError::InvalidBinCount);
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Divide before subtracting: `max - min` overflows for finite values of
        // opposite sign near `f64::MAX`.
        let bin_width = max / num_bins as f64 - min / num_bins as f64;

        let edges = (0..=num_bins)
            .map(|idx| {
                if idx == num_bins {
                    max
                } else {
                    min + idx as f64 * bin_width
                }
            })
            .collect::<Vec<_>>();
        let mut bins = edges
            .windows(2)
            .map(|edge| Bin {
                range: edge[0]..edge[1],
                count: 0,
            })
            .collect::<Vec<_>>();

        if min == max {
            bins[0].count = values.len() as u64;
        } else {
            let last_idx = num_bins - 1;
            for &value in &values {
                let idx = bins.iter().position(|bin| bin.range.contains(&value));
                let idx = match (idx, options.last_bin) {
                    (Some(idx), _) => Some(idx),
                    (None, LastBinUpperBound::Inclusive) if value == max => Some(last_idx),
                    (None, _) => None,
                };
                if let Some(idx) = idx {
                    bins[idx].count += 1;
                }
            }
        }

        Ok(Self {
            bins,
            bin_width,
            len: values.len(),
            options,
        })
    }

    /// Returns the bins in ascending order with their frequencies.
    #[must_use]
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    #[must_use]
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    #[must_use]
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    #[must_use]
    pub fn options(&self) -> BinningOptions {
        self.options
    }

    /// Returns the original sample size `n`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; an analyzer cannot be built from an empty sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of values counted in some bin.
    ///
    /// Equal to [`Self::len`] unless the last bin is exclusive, in which case
    /// occurrences of the sample maximum are missing.
    #[must_use]
    pub fn binned_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Returns `true` if all values were identical and the bins have zero width.
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => first.range.start == last.range.end,
            _ => false,
        }
    }

    /// Estimates the mean as `Σ(midpoint · count) / n`.
    ///
    /// `n` is the original sample size, not [`Self::binned_count`].
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn estimate_grouped_mean(&self) -> f64 {
        let weighted_sum = self
            .bins
            .iter()
            .map(|bin| bin.midpoint() * bin.count as f64)
            .sum::<f64>();
        weighted_sum / self.len as f64
    }

    /// Estimates the variance as `Σ(count · (midpoint - grouped_mean)²) / (n - 1)`.
    ///
    /// # Errors
    ///
    /// [`StatsError::InsufficientSample`] if the sample holds a single value.
    #[expect(clippy::cast_precision_loss)]
    pub fn estimate_grouped_variance(&self) -> Result<f64, StatsError> {
        error::ensure_len(self.len, 2)?;
        let mean = self.estimate_grouped_mean();
        let sum_sq = self
            .bins
            .iter()
            .map(|bin| bin.count as f64 * (bin.midpoint() - mean).powi(2))
            .sum::<f64>();
        Ok(sum_sq / (self.len - 1) as f64)
    }
}
