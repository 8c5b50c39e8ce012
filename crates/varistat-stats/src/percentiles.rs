/// Computes a single percentile value from sorted data.
///
/// This function interpolates linearly between the closest ranks. For a
/// dataset with n values the p-th percentile sits at the fractional rank
/// `p / 100 * (n - 1)`; the result is the weighted average of the two sorted
/// values bracketing that rank, weighted by the fractional part.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `percentile` - The percentile to compute (0.0 to 100.0, clamped)
///
/// # Returns
///
/// The value at the specified percentile. Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use varistat_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
///
/// assert_eq!(compute_percentile(&values, 25.0), 3.25);
/// assert_eq!(compute_percentile(&values, 50.0), 5.5);
/// assert_eq!(compute_percentile(&values, 75.0), 7.75);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let Some(last) = sorted_values.len().checked_sub(1) else {
        return f64::NAN;
    };
    let rank = percentile.clamp(0.0, 100.0) / 100.0 * last as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - rank.floor();
    sorted_values[lower] + (sorted_values[upper] - sorted_values[lower]) * fraction
}

/// Computes the median of sorted data.
///
/// Odd-length data yields the middle element; even-length data yields the
/// mean of the two middle elements. Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use varistat_stats::percentiles::compute_median;
///
/// assert_eq!(compute_median(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(compute_median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// ```
#[must_use]
pub fn compute_median(sorted_values: &[f64]) -> f64 {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let len = sorted_values.len();
    if len == 0 {
        return f64::NAN;
    }
    let mid = len / 2;
    if len % 2 == 1 {
        sorted_values[mid]
    } else {
        f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
    }
}
