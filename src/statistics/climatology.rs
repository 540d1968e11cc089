//! Month-of-year climatology and anomalies

use super::operations::MeanAccumulator;
use crate::dataset::Dataset;
use crate::errors::{ClimateError, Result};
use crate::series::TimeSeries;
use chrono::Datelike;
use log::{debug, warn};

/// Mean value for each calendar month, computed across all years
#[derive(Debug, Clone, PartialEq)]
pub struct Climatology {
    months: [MeanAccumulator; 12],
}

impl Climatology {
    /// Groups a series by month-of-year, ignoring the year.
    #[must_use]
    pub fn from_series(series: &TimeSeries) -> Self {
        let mut months = [MeanAccumulator::default(); 12];
        for (timestamp, value) in series.iter() {
            months[timestamp.month0() as usize].push(value);
        }
        Self { months }
    }

    /// Climatological mean for `month` (1..=12); `None` if no valid observation fell in it.
    #[must_use]
    pub fn get(&self, month: u32) -> Option<f64> {
        let acc = self.months.get(month.checked_sub(1)? as usize)?;
        (acc.count() > 0).then(|| acc.mean())
    }

    /// Months with a defined climatology, as `(month, mean)` pairs.
    pub fn months(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (1..=12).filter_map(|month| self.get(month).map(|mean| (month, mean)))
    }

    /// True when all twelve months have a climatology entry.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.months.iter().all(|acc| acc.count() > 0)
    }

    /// Subtracts the matching month's climatology from every observation.
    ///
    /// The result keeps the input's time index exactly. Missing observations
    /// stay `NaN`.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::MissingClimatology`] when a finite observation
    /// falls in a month that has no climatology entry.
    pub fn anomalies(&self, series: &TimeSeries) -> Result<TimeSeries> {
        let values = series
            .iter()
            .map(|(timestamp, value)| {
                if !value.is_finite() {
                    return Ok(f64::NAN);
                }
                let month = timestamp.month();
                self.get(month)
                    .map(|mean| value - mean)
                    .ok_or(ClimateError::MissingClimatology { month })
            })
            .collect::<Result<Vec<f64>>>()?;

        series.derive(
            format!("{}_anomaly", series.name),
            series.times().to_vec(),
            values,
        )
    }
}

/// Computes the month-of-year climatology of a series.
#[must_use]
pub fn compute_climatology(series: &TimeSeries) -> Climatology {
    let climatology = Climatology::from_series(series);
    if !climatology.is_complete() {
        warn!(
            "Climatology of '{}' covers only {} of 12 calendar months",
            series.name,
            climatology.months().count()
        );
    }
    climatology
}

/// Anomalies of a variable relative to its own monthly climatology
///
/// # Errors
///
/// Returns [`ClimateError::VariableNotFound`] if `var_name` is absent.
pub fn calculate_anomalies(dataset: &Dataset, var_name: &str) -> Result<TimeSeries> {
    calculate_anomalies_with_climatology(dataset, var_name).map(|(anomalies, _)| anomalies)
}

/// Like [`calculate_anomalies`], also returning the climatology used.
///
/// # Errors
///
/// Returns [`ClimateError::VariableNotFound`] if `var_name` is absent.
pub fn calculate_anomalies_with_climatology(
    dataset: &Dataset,
    var_name: &str,
) -> Result<(TimeSeries, Climatology)> {
    let series = dataset.variable(var_name)?;
    let climatology = compute_climatology(series);
    let anomalies = climatology.anomalies(series)?;
    debug!(
        "Computed {} anomalies for '{var_name}' against {} climatology months",
        anomalies.len(),
        climatology.months().count()
    );
    Ok((anomalies, climatology))
}
