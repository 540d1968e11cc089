//! Parallel reduction of gridded data to a single series
//!
//! A variable shaped `(time, y, x, ...)` becomes one value per time step:
//! the unweighted mean of the finite grid values at that step.

use super::operations::MeanAccumulator;
use crate::errors::{ClimateError, Result};
use log::debug;
use ndarray::{ArrayD, Axis};
use rayon::prelude::*;

/// Computes the mean over every axis except `time_axis`, in parallel over time steps
///
/// # Errors
///
/// Returns [`ClimateError::AlignmentError`] if `time_axis` is out of bounds.
pub fn parallel_time_step_means(data: &ArrayD<f64>, time_axis: usize) -> Result<Vec<f64>> {
    if time_axis >= data.ndim() {
        return Err(ClimateError::AlignmentError(format!(
            "Time axis {time_axis} is out of bounds for array with {} dimensions",
            data.ndim()
        )));
    }

    let steps = data.len_of(Axis(time_axis));
    debug!(
        "Averaging {} grid cells per step over {steps} time steps across {} threads",
        data.len().checked_div(steps).unwrap_or(0),
        rayon::current_num_threads()
    );

    let means = (0..steps)
        .into_par_iter()
        .map(|step| MeanAccumulator::mean_of(data.index_axis(Axis(time_axis), step).iter()))
        .collect();

    Ok(means)
}
