//! In-memory dataset: variable name to time series, plus structure metadata

use crate::errors::{ClimateError, Result};
use crate::metadata::{DatasetSummary, DimensionInfo};
use crate::series::TimeSeries;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Loaded climate dataset
///
/// Holds one [`TimeSeries`] per time-dependent data variable. The summary
/// keeps the file's full structure, including variables that were not loaded
/// as series.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    summary: DatasetSummary,
    variables: BTreeMap<String, TimeSeries>,
}

impl Dataset {
    #[must_use]
    pub fn new(summary: DatasetSummary, variables: BTreeMap<String, TimeSeries>) -> Self {
        Self { summary, variables }
    }

    /// Build a dataset directly from series that share one time index.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::AlignmentError`] if the series differ in length.
    pub fn from_series(series: impl IntoIterator<Item = TimeSeries>) -> Result<Self> {
        let variables: BTreeMap<String, TimeSeries> = series
            .into_iter()
            .map(|s| (s.name.clone(), s))
            .collect();

        let mut lengths = variables.values().map(TimeSeries::len);
        let time_len = lengths.next().unwrap_or(0);
        if lengths.any(|len| len != time_len) {
            return Err(ClimateError::AlignmentError(
                "All series in a dataset must share the time dimension".to_string(),
            ));
        }

        let summary = DatasetSummary {
            source: PathBuf::from("<memory>"),
            dimensions: vec![DimensionInfo {
                name: "time".to_string(),
                length: time_len,
                is_unlimited: false,
            }],
            ..DatasetSummary::default()
        };

        Ok(Self { summary, variables })
    }

    /// Look up a variable's series.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::VariableNotFound`] if the name is absent.
    pub fn variable(&self, name: &str) -> Result<&TimeSeries> {
        self.variables
            .get(name)
            .ok_or_else(|| ClimateError::VariableNotFound {
                var: name.to_string(),
            })
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.variables.keys().map(String::as_str)
    }

    #[must_use]
    pub fn summary(&self) -> &DatasetSummary {
        &self.summary
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
