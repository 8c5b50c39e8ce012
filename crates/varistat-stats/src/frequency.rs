use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Frequency table mapping each distinct sample value to its occurrence count.
///
/// Entries are kept in ascending value order, which is the order the frequency
/// polygon and the empirical distribution step plot are drawn in. Values are
/// distinguished by exact numeric equality; no tolerance is applied.
///
/// # Examples
///
/// ```
/// use varistat_stats::frequency::FrequencyTable;
///
/// let table = FrequencyTable::from_sorted(&[1.0, 2.0, 2.0, 5.0]);
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.get(2.0), Some(2));
/// assert_eq!(table.total_count(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// (value, count) pairs, ascending by value, counts always positive.
    entries: Vec<(f64, u64)>,
}

impl FrequencyTable {
    /// Builds a frequency table with a single scan over sorted values.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let mut entries: Vec<(f64, u64)> = Vec::new();
        for &value in sorted_values {
            match entries.last_mut() {
                Some((last, count)) if *last == value => *count += 1,
                _ => entries.push((value, 1)),
            }
        }
        Self { entries }
    }

    /// Returns the number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the occurrence count of `value`, or `None` if it never occurs.
    #[must_use]
    pub fn get(&self, value: f64) -> Option<u64> {
        self.entries
            .binary_search_by(|(v, _)| v.partial_cmp(&value).unwrap_or(Ordering::Less))
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Returns the sum of all counts, i.e. the sample size.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterates over the distinct values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(value, _)| *value)
    }

    /// Iterates over (value, count) pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(f64, u64)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::from_sorted(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total_count(), 0);
    }

    #[test]
    fn test_counts_runs_of_equal_values() {
        let table = FrequencyTable::from_sorted(&[1.5, 1.5, 1.5, 2.0, 3.25, 3.25]);
        assert_eq!(table.as_slice(), &[(1.5, 3), (2.0, 1), (3.25, 2)]);
    }

    #[test]
    fn test_values_are_ascending_and_distinct() {
        let table = FrequencyTable::from_sorted(&[-3.0, -3.0, 0.0, 4.0, 4.0, 9.0]);
        let values = table.values().collect::<Vec<_>>();
        assert_eq!(values, vec![-3.0, 0.0, 4.0, 9.0]);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_nearby_values_are_not_merged() {
        let a = 0.1 + 0.2;
        let b = 0.3;
        let mut values = vec![a, b];
        values.sort_by(f64::total_cmp);
        let table = FrequencyTable::from_sorted(&values);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_get_missing_value() {
        let table = FrequencyTable::from_sorted(&[1.0, 2.0]);
        assert_eq!(table.get(1.5), None);
        assert_eq!(table.get(2.0), Some(1));
    }

    #[test]
    fn test_signed_zeros_share_an_entry() {
        let table = FrequencyTable::from_sorted(&[-0.0, 0.0]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0.0), Some(2));
    }
}
