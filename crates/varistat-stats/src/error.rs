/// Errors reported by the sample and grouped-data analyzers.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The input sequence contained no values.
    #[display("sample is empty")]
    EmptySample,
    /// The input sequence contained NaN or an infinity.
    #[display("sample value #{index} is not finite: {value}")]
    NonFiniteValue { index: usize, value: f64 },
    /// The statistic needs more observations than the sample holds.
    #[display("at least {required} values are required, but the sample has {actual}")]
    InsufficientSample { required: usize, actual: usize },
    /// The number of bins is zero.
    #[display("number of bins must be positive")]
    InvalidBinCount,
}

/// Collects `values` into a vector, rejecting empty and non-finite input.
pub(crate) fn collect_finite<I>(values: I) -> Result<Vec<f64>, StatsError>
where
    I: IntoIterator<Item = f64>,
{
    let values = values.into_iter().collect::<Vec<_>>();
    if values.is_empty() {
        return Err(StatsError::EmptySample);
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(StatsError::NonFiniteValue { index, value });
    }
    Ok(values)
}

/// Returns `InsufficientSample` unless `actual >= required`.
pub(crate) fn ensure_len(actual: usize, required: usize) -> Result<(), StatsError> {
    if actual < required {
        return Err(StatsError::InsufficientSample { required, actual });
    }
    Ok(())
}
