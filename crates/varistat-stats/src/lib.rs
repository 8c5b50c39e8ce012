//! Descriptive statistics for one-dimensional numeric samples.
//!
//! This crate provides two independent analyzers over the same raw data:
//!
//! - **Exact statistics**: order statistics, frequency table, moments, variance
//!   and the empirical distribution function of the raw values
//! - **Grouped statistics**: frequencies over equal-width bins and mean/variance
//!   estimated from the bin midpoints
//!
//! Neither analyzer performs I/O or rendering; they expose the numeric data a
//! caller needs to print reports or draw charts.
//!
//! # Modules
//!
//! - [`sample`]: Exact statistics over raw observations
//! - [`grouped`]: Binning and grouped-data estimates
//! - [`frequency`]: Frequency table of distinct values
//! - [`percentiles`]: Percentile and median computation
//! - [`descriptive`]: Serializable summary of the exact statistics
//!
//! # Examples
//!
//! ## Analyzing raw data
//!
//! ```
//! use varistat_stats::sample::SampleAnalyzer;
//!
//! let analyzer = SampleAnalyzer::new([1.0, 2.0, 3.0, 4.0, 5.0])?;
//! assert_eq!(analyzer.mean(), 3.0);
//! assert_eq!(analyzer.variance()?, 2.5);
//! # Ok::<(), varistat_stats::StatsError>(())
//! ```
//!
//! ## Analyzing grouped data
//!
//! ```
//! use varistat_stats::grouped::{BinningOptions, GroupedDataAnalyzer, LastBinUpperBound};
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let options = BinningOptions {
//!     num_bins: 5,
//!     last_bin: LastBinUpperBound::Exclusive,
//! };
//! let analyzer = GroupedDataAnalyzer::with_options(values, options)?;
//! // The sample maximum is not counted in an exclusive last bin
//! assert_eq!(analyzer.binned_count(), 9);
//! # Ok::<(), varistat_stats::StatsError>(())
//! ```

pub use self::error::StatsError;

pub mod descriptive;
pub mod error;
pub mod frequency;
pub mod grouped;
pub mod percentiles;
pub mod sample;
