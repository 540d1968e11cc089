//! Statistical computations over climate time series
//!
//! # Organization
//!
//! - [`operations`]: the finite-value mean accumulator shared by all groupings
//! - [`parallel`]: parallel reduction of gridded variables to one value per time step
//! - [`monthly`]: resampling to `(year, month)` means
//! - [`climatology`]: month-of-year climatology and anomalies

pub mod climatology;
pub mod monthly;
pub mod operations;
pub mod parallel;

// Re-export the main types and functions for convenience
pub use climatology::{
    calculate_anomalies, calculate_anomalies_with_climatology, compute_climatology, Climatology,
};
pub use monthly::{calculate_monthly_mean, monthly_mean};
pub use operations::MeanAccumulator;
pub use parallel::parallel_time_step_means;
