//! Time-indexed series of observations
//!
//! [`TimeSeries`] is the one-dimensional unit every pipeline stage consumes
//! and produces. Missing observations are stored as `NaN`.

use crate::errors::{ClimateError, Result};
use chrono::NaiveDateTime;

/// A named, time-indexed sequence of `f64` observations
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub name: String,
    pub units: Option<String>,
    pub long_name: Option<String>,
    times: Vec<NaiveDateTime>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a series from parallel time and value vectors.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::AlignmentError`] when the vectors differ in length.
    pub fn new(name: impl Into<String>, times: Vec<NaiveDateTime>, values: Vec<f64>) -> Result<Self> {
        let name = name.into();
        if times.len() != values.len() {
            return Err(ClimateError::AlignmentError(format!(
                "Series '{name}' has {} timestamps but {} values",
                times.len(),
                values.len()
            )));
        }

        Ok(Self {
            name,
            units: None,
            long_name: None,
            times,
            values,
        })
    }

    #[must_use]
    pub fn with_units(mut self, units: Option<String>) -> Self {
        self.units = units;
        self
    }

    #[must_use]
    pub fn with_long_name(mut self, long_name: Option<String>) -> Self {
        self.long_name = long_name;
        self
    }

    /// Build a new series that inherits this one's units and long name.
    ///
    /// # Errors
    ///
    /// Same as [`TimeSeries::new`].
    pub fn derive(
        &self,
        name: impl Into<String>,
        times: Vec<NaiveDateTime>,
        values: Vec<f64>,
    ) -> Result<Self> {
        Ok(Self::new(name, times, values)?
            .with_units(self.units.clone())
            .with_long_name(self.long_name.clone()))
    }

    #[must_use]
    pub fn times(&self) -> &[NaiveDateTime] {
        &self.times
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(timestamp, value)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDateTime, f64)> + '_ {
        self.times.iter().zip(self.values.iter().copied())
    }

    /// Number of finite observations
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_finite()).count()
    }

    /// True when timestamps never decrease.
    #[must_use]
    pub fn is_chronological(&self) -> bool {
        self.times.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// First and last timestamp, if any.
    #[must_use]
    pub fn time_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((*self.times.first()?, *self.times.last()?))
    }
}
