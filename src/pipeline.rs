//! The analysis pipeline: load, monthly mean, plot, anomalies, plot

use crate::dataset::Dataset;
use crate::errors::Result;
use crate::netcdf_io::{load_climate_data, LoadOptions};
use crate::render::{ChartBackend, ChartKind, RenderContext};
use crate::series::TimeSeries;
use crate::statistics::{calculate_anomalies_with_climatology, calculate_monthly_mean, Climatology};
use log::info;
use std::path::PathBuf;

/// File analysed when none is given on the command line
pub const DEFAULT_FILE_PATH: &str = "your_data.nc";
/// Variable analysed when none is given on the command line
pub const DEFAULT_VARIABLE: &str = "temperature";

/// What to analyse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub file_path: PathBuf,
    pub variable: String,
    pub load: LoadOptions,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            variable: DEFAULT_VARIABLE.to_string(),
            load: LoadOptions::default(),
        }
    }
}

/// Products of one pipeline run
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub monthly_mean: TimeSeries,
    pub climatology: Climatology,
    pub anomalies: TimeSeries,
}

/// Runs the full pipeline on the configured file.
///
/// Any failure aborts the run; the summary and charts already shown stay shown.
///
/// # Errors
///
/// Propagates loader, statistics and rendering errors unchanged.
pub fn run_analysis<B: ChartBackend>(
    config: &AnalysisConfig,
    ctx: &mut RenderContext<B>,
) -> Result<AnalysisReport> {
    let dataset = load_climate_data(&config.file_path, &config.load)?;
    analyze_dataset(&dataset, &config.variable, ctx)
}

/// Runs the statistics and plotting stages on an already loaded dataset.
///
/// # Errors
///
/// Returns [`crate::errors::ClimateError::VariableNotFound`] before any chart
/// is drawn if `var_name` is absent.
pub fn analyze_dataset<B: ChartBackend>(
    dataset: &Dataset,
    var_name: &str,
    ctx: &mut RenderContext<B>,
) -> Result<AnalysisReport> {
    let monthly_mean = calculate_monthly_mean(dataset, var_name)?;
    info!(
        "Computed {} monthly means for '{var_name}'",
        monthly_mean.len()
    );
    ctx.plot(&monthly_mean, var_name, ChartKind::MonthlyMean)?;

    let (anomalies, climatology) = calculate_anomalies_with_climatology(dataset, var_name)?;
    info!(
        "Computed {} anomalies for '{var_name}' ({} climatology months)",
        anomalies.len(),
        climatology.months().count()
    );
    ctx.plot(&anomalies, var_name, ChartKind::Anomaly)?;

    Ok(AnalysisReport {
        monthly_mean,
        climatology,
        anomalies,
    })
}
