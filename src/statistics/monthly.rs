//! Resampling to calendar-month means

use super::operations::MeanAccumulator;
use crate::dataset::Dataset;
use crate::errors::{ClimateError, Result};
use crate::series::TimeSeries;
use crate::time::YearMonth;
use log::debug;
use std::collections::BTreeMap;

/// Monthly mean of a variable in a dataset
///
/// # Errors
///
/// Returns [`ClimateError::VariableNotFound`] if `var_name` is absent, or
/// the errors of [`monthly_mean`].
pub fn calculate_monthly_mean(dataset: &Dataset, var_name: &str) -> Result<TimeSeries> {
    monthly_mean(dataset.variable(var_name)?)
}

/// Averages a series within each `(year, month)` bucket.
///
/// Produces one point per bucket present in the input, in chronological
/// order, labelled with the last day of the month. A bucket whose
/// observations are all missing yields `NaN`.
///
/// # Errors
///
/// Returns [`ClimateError::AlignmentError`] if the time index decreases.
pub fn monthly_mean(series: &TimeSeries) -> Result<TimeSeries> {
    if !series.is_chronological() {
        return Err(ClimateError::AlignmentError(format!(
            "Time index of '{}' is not in chronological order",
            series.name
        )));
    }

    let mut buckets: BTreeMap<YearMonth, MeanAccumulator> = BTreeMap::new();
    for (timestamp, value) in series.iter() {
        buckets.entry(YearMonth::of(timestamp)).or_default().push(value);
    }

    let mut times = Vec::with_capacity(buckets.len());
    let mut values = Vec::with_capacity(buckets.len());
    for (month, acc) in buckets {
        times.push(month.month_end()?);
        values.push(acc.mean());
    }

    debug!(
        "Resampled '{}' from {} observations to {} monthly means",
        series.name,
        series.len(),
        values.len()
    );

    series.derive(format!("{}_monthly_mean", series.name), times, values)
}
