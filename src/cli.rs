//! Defines command-line interface options using `clap` for the climate_anomalies application.

use crate::netcdf_io::{LoadOptions, DEFAULT_TIME_DIMENSION};
use crate::pipeline::{AnalysisConfig, DEFAULT_FILE_PATH, DEFAULT_VARIABLE};
use crate::render::BackendKind;
use clap::Parser;
use std::path::PathBuf;

/// Monthly means and anomalies of a NetCDF climate variable
#[derive(Parser, Debug)]
#[command(
    version,
    name = "climate_anomalies",
    about = "Plot monthly means and monthly anomalies of a NetCDF climate variable"
)]
pub struct Args {
    /// Path to the NetCDF file
    #[arg(short, long, default_value = DEFAULT_FILE_PATH)]
    pub file: PathBuf,

    /// Variable to analyse
    #[arg(short = 'n', long, default_value = DEFAULT_VARIABLE)]
    pub variable: String,

    /// Name of the time dimension and its coordinate variable
    #[arg(long, default_value = DEFAULT_TIME_DIMENSION)]
    pub time_dim: String,

    /// How charts are shown
    #[arg(short, long, value_enum, default_value_t = BackendKind::default())]
    pub backend: BackendKind,

    /// Number of threads to use for parallel processing. Defaults to number of CPU cores.
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Pipeline configuration described by these arguments
    #[must_use]
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            file_path: self.file.clone(),
            variable: self.variable.clone(),
            load: LoadOptions {
                time_dimension: self.time_dim.clone(),
            },
        }
    }
}
