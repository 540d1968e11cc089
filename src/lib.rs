//! climate_anomalies: monthly means and anomalies of NetCDF climate variables
//!
//! Loads a gridded, time-indexed NetCDF dataset, resamples one variable to
//! calendar-month means, derives anomalies against the month-of-year
//! climatology, and renders both as line charts.
//!
//! ## Module Organization
//!
//! - [`netcdf_io`]: NetCDF loading with CF time and missing-value decoding
//! - [`dataset`] / [`series`]: the in-memory data model
//! - [`metadata`]: dimension/variable inspection and the structure summary
//! - [`statistics`]: monthly means, climatology and anomalies
//! - [`render`]: chart description, render context and backends
//! - [`pipeline`]: the end-to-end analysis
//! - [`time`]: CF time units and calendar-month keys
//! - [`parallel`]: thread pool configuration
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use climate_anomalies::prelude::*;
//!
//! let config = AnalysisConfig::default();
//! let mut ctx = RenderContext::acquire(HeadlessBackend::new());
//! let report = run_analysis(&config, &mut ctx).unwrap();
//! println!("{} monthly means", report.monthly_mean.len());
//! ```

pub mod cli;
pub mod dataset;
pub mod errors;
pub mod metadata;
pub mod netcdf_io;
pub mod parallel;
pub mod pipeline;
pub mod render;
pub mod series;
pub mod statistics;
pub mod time;

pub use dataset::Dataset;
pub use errors::{ClimateError, Result};
pub use netcdf_io::{load_climate_data, read_dataset, LoadOptions};
pub use pipeline::{analyze_dataset, run_analysis, AnalysisConfig, AnalysisReport};
pub use series::TimeSeries;
pub use statistics::{calculate_anomalies, calculate_monthly_mean, compute_climatology, Climatology};

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::dataset::Dataset;
    pub use crate::errors::{ClimateError, Result};
    pub use crate::netcdf_io::{load_climate_data, LoadOptions};
    pub use crate::parallel::ParallelConfig;
    pub use crate::pipeline::{run_analysis, AnalysisConfig, AnalysisReport};
    pub use crate::render::{ChartBackend, ChartKind, HeadlessBackend, RenderContext};
    pub use crate::series::TimeSeries;
    pub use crate::statistics::{calculate_anomalies, calculate_monthly_mean, Climatology};
}
