//! NetCDF loading
//!
//! Opens a file, decodes its time coordinate, reads every time-dependent
//! data variable into a [`TimeSeries`] and closes the file again. Gridded
//! variables are averaged over their non-time dimensions.

use crate::dataset::Dataset;
use crate::errors::{ClimateError, Result};
use crate::metadata::{
    collect_dimensions, collect_global_attributes, get_variable_metadata,
    is_coordinate_variable, numeric_attribute, numeric_attribute_values, string_attribute,
    CoordinateInfo, DatasetSummary,
};
use crate::series::TimeSeries;
use crate::statistics::parallel_time_step_means;
use crate::time::{check_calendar, TimeUnits};
use chrono::NaiveDateTime;
use log::{debug, info, warn};
use ndarray::ArrayD;
use netcdf::{File, Variable};
use std::collections::BTreeMap;
use std::path::Path;

/// Default name of the time dimension and its coordinate variable
pub const DEFAULT_TIME_DIMENSION: &str = "time";

/// Options controlling how a file is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub time_dimension: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            time_dimension: DEFAULT_TIME_DIMENSION.to_string(),
        }
    }
}

/// Loads a NetCDF climate file and prints its structure summary to stdout.
///
/// # Errors
///
/// See [`read_dataset`].
pub fn load_climate_data(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Dataset> {
    let dataset = read_dataset(path, options)?;
    println!("{}", dataset.summary());
    Ok(dataset)
}

/// Reads a NetCDF climate file without printing anything.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the time dimension or its
/// coordinate is missing, or the time units/calendar cannot be decoded.
pub fn read_dataset(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Dataset> {
    let path = path.as_ref();
    let time_dim = options.time_dimension.as_str();

    info!("Opening NetCDF file: {}", path.display());
    let file = netcdf::open(path)?;

    let times = read_time_coordinate(&file, path, time_dim)?;
    info!("Decoded {} time steps", times.len());

    let mut variables = BTreeMap::new();
    let mut summary = DatasetSummary {
        source: path.to_path_buf(),
        dimensions: collect_dimensions(&file),
        global_attributes: collect_global_attributes(&file)?,
        ..DatasetSummary::default()
    };

    for var in file.variables() {
        let metadata = get_variable_metadata(&var);

        if is_coordinate_variable(&var) {
            summary
                .coordinates
                .push(coordinate_info(&var, time_dim, &times));
            continue;
        }

        if let Some(time_axis) = metadata.dimensions.iter().position(|d| d == time_dim) {
            match read_series(&var, &metadata.shape, time_axis, &times) {
                Ok(series) => {
                    debug!("Loaded '{}' ({} observations)", series.name, series.len());
                    variables.insert(series.name.clone(), series);
                }
                Err(e) => warn!("Skipping variable '{}': {e}", metadata.name),
            }
        }

        summary.variables.push(metadata);
    }

    // `file` drops here, closing the handle before the dataset is returned
    Ok(Dataset::new(summary, variables))
}

fn read_time_coordinate(file: &File, path: &Path, time_dim: &str) -> Result<Vec<NaiveDateTime>> {
    let dimension = file
        .dimension(time_dim)
        .ok_or_else(|| ClimateError::DimensionNotFound {
            var: path.display().to_string(),
            dim: time_dim.to_string(),
        })?;

    let var = file.variable(time_dim).ok_or_else(|| {
        ClimateError::TimeError(format!("No coordinate variable for dimension '{time_dim}'"))
    })?;

    let units = string_attribute(&var, "units").ok_or_else(|| {
        ClimateError::TimeError(format!("Time coordinate '{time_dim}' has no units attribute"))
    })?;
    check_calendar(string_attribute(&var, "calendar").as_deref())?;

    let offsets: Vec<f64> = var.get_values::<f64, _>(..)?;
    if offsets.len() != dimension.len() {
        return Err(ClimateError::AlignmentError(format!(
            "Time coordinate has {} values but dimension '{time_dim}' has length {}",
            offsets.len(),
            dimension.len()
        )));
    }

    TimeUnits::parse(&units)?.decode_all(&offsets)
}

fn read_series(
    var: &Variable,
    shape: &[usize],
    time_axis: usize,
    times: &[NaiveDateTime],
) -> Result<TimeSeries> {
    let raw: Vec<f64> = var.get_values::<f64, _>(..)?;
    let data = ArrayD::from_shape_vec(shape.to_vec(), raw)?;
    let data = unpack(var, data);

    let values = parallel_time_step_means(&data, time_axis)?;

    Ok(TimeSeries::new(var.name().to_string(), times.to_vec(), values)?
        .with_units(string_attribute(var, "units"))
        .with_long_name(string_attribute(var, "long_name")))
}

/// Masks fill values to NaN and applies `scale_factor`/`add_offset`.
fn unpack(var: &Variable, data: ArrayD<f64>) -> ArrayD<f64> {
    let fill_values: Vec<f64> = ["_FillValue", "missing_value"]
        .iter()
        .flat_map(|name| numeric_attribute_values(var, name))
        .collect();
    let scale = numeric_attribute(var, "scale_factor").unwrap_or(1.0);
    let offset = numeric_attribute(var, "add_offset").unwrap_or(0.0);

    data.mapv(|raw| {
        if fill_values.iter().any(|&fill| raw == fill) {
            f64::NAN
        } else {
            raw * scale + offset
        }
    })
}

fn coordinate_info(var: &Variable, time_dim: &str, times: &[NaiveDateTime]) -> CoordinateInfo {
    let name = var.name().to_string();

    let (range, units) = if name == time_dim {
        let range = match (times.first(), times.last()) {
            (Some(first), Some(last)) => Some(format!(
                "{} .. {}",
                first.format("%Y-%m-%d %H:%M"),
                last.format("%Y-%m-%d %H:%M")
            )),
            _ => Some("(empty)".to_string()),
        };
        (range, None)
    } else {
        let range = var.get_values::<f64, _>(..).ok().map(|values| {
            let finite = values.iter().copied().filter(|v| v.is_finite());
            let min = finite.clone().fold(f64::INFINITY, f64::min);
            let max = finite.fold(f64::NEG_INFINITY, f64::max);
            if min.is_finite() {
                format!("{min} .. {max}")
            } else {
                "(no finite values)".to_string()
            }
        });
        (range, string_attribute(var, "units"))
    };

    CoordinateInfo {
        dimension: name.clone(),
        name,
        range,
        units,
    }
}
