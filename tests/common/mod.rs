//! Helpers for writing small NetCDF fixtures into temporary directories

#![allow(dead_code)]

use ndarray::Array3;
use netcdf::create;
use std::path::Path;

/// Daily grid for 2023 (non-leap): `temperature(time, lat=2, lon=2)`.
///
/// The four cells at day `t` hold `t-1, t+1, t-2, t+2`, so the grid mean is
/// exactly `t`.
pub fn write_daily_year(path: &Path) -> Result<(), netcdf::Error> {
    let days: usize = 365;
    let mut file = create(path)?;

    file.add_attribute("title", "Synthetic daily temperature")?;
    file.add_attribute("institution", "climate_anomalies test suite")?;

    file.add_dimension("time", days)?;
    file.add_dimension("lat", 2)?;
    file.add_dimension("lon", 2)?;

    {
        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("units", "days since 2023-01-01")?;
        time_var.put_attribute("calendar", "standard")?;
        let offsets: Vec<f64> = (0..days).map(|d| d as f64).collect();
        time_var.put_values(&offsets, ..)?;
    }

    {
        let mut lat_var = file.add_variable::<f32>("lat", &["lat"])?;
        lat_var.put_attribute("units", "degrees_north")?;
        lat_var.put_values(&[-10.0f32, 10.0], ..)?;
    }

    {
        let mut lon_var = file.add_variable::<f32>("lon", &["lon"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put_values(&[100.0f32, 120.0], ..)?;
    }

    {
        let mut temp_var = file.add_variable::<f32>("temperature", &["time", "lat", "lon"])?;
        temp_var.put_attribute("units", "K")?;
        temp_var.put_attribute("long_name", "air temperature")?;

        let mut data = Vec::with_capacity(365 * 4);
        for t in 0..days {
            let t = t as f32;
            data.extend_from_slice(&[t - 1.0, t + 1.0, t - 2.0, t + 2.0]);
        }
        let array = Array3::from_shape_vec((365, 2, 2), data).expect("fixture shape");
        temp_var.put(array.view(), ..)?;
    }

    Ok(())
}

/// Mid-month observations for 2000-2001: `temperature(time)` with
/// `value = month * 10 + year_index * 2`.
pub fn write_two_years_monthly(path: &Path) -> Result<(), netcdf::Error> {
    let mut file = create(path)?;
    file.add_dimension("time", 24)?;

    let mut offsets = Vec::with_capacity(24);
    let mut values = Vec::with_capacity(24);
    let mut day_of_series = 14.0;
    for year_index in 0..2 {
        for month in 1..=12 {
            offsets.push(day_of_series);
            values.push(month as f32 * 10.0 + year_index as f32 * 2.0);
            day_of_series += days_in_month(2000 + year_index, month);
        }
    }

    {
        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("units", "days since 2000-01-01 00:00:00")?;
        time_var.put_values(&offsets, ..)?;
    }

    {
        let mut temp_var = file.add_variable::<f32>("temperature", &["time"])?;
        temp_var.put_attribute("units", "degC")?;
        temp_var.put_values(&values, ..)?;
    }

    Ok(())
}

/// Packed short data with fill values: `tas(time)`, 4 hourly steps.
pub fn write_packed(path: &Path, calendar: &str) -> Result<(), netcdf::Error> {
    let mut file = create(path)?;
    file.add_dimension("time", 4)?;

    {
        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("units", "hours since 2010-05-01")?;
        time_var.put_attribute("calendar", calendar)?;
        time_var.put_values(&[0.0, 6.0, 12.0, 18.0], ..)?;
    }

    {
        let mut tas = file.add_variable::<i16>("tas", &["time"])?;
        tas.put_attribute("_FillValue", -999i16)?;
        tas.put_attribute("scale_factor", 0.5f64)?;
        tas.put_attribute("add_offset", 270.0f64)?;
        tas.put_attribute("units", "K")?;
        tas.put_values(&[10i16, -999, 20, 30], ..)?;
    }

    Ok(())
}

/// Four daily steps of variables that mark missing data in different ways.
///
/// - `rh` (f32): `missing_value` only, holding two sentinels `[-1, -2]`
/// - `sst` (f32): float `_FillValue` of `1e20`
/// - `counts` (u16): unsigned `_FillValue` of `65535`
/// - `ticks` (i64): 64-bit `_FillValue` of `-9999` plus a `missing_value` of `-1`
pub fn write_missing_values(path: &Path) -> Result<(), netcdf::Error> {
    let mut file = create(path)?;
    file.add_dimension("time", 4)?;

    {
        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("units", "days since 2015-03-01")?;
        time_var.put_values(&[0.0, 1.0, 2.0, 3.0], ..)?;
    }

    {
        let mut rh = file.add_variable::<f32>("rh", &["time"])?;
        rh.put_attribute("missing_value", vec![-1.0f32, -2.0])?;
        rh.put_values(&[50.0f32, -1.0, 60.0, -2.0], ..)?;
    }

    {
        let mut sst = file.add_variable::<f32>("sst", &["time"])?;
        sst.put_attribute("_FillValue", 1e20f32)?;
        sst.put_values(&[15.0f32, 1e20, 17.0, 18.0], ..)?;
    }

    {
        let mut counts = file.add_variable::<u16>("counts", &["time"])?;
        counts.put_attribute("_FillValue", 65535u16)?;
        counts.put_values(&[10u16, 65535, 20, 30], ..)?;
    }

    {
        let mut ticks = file.add_variable::<i64>("ticks", &["time"])?;
        ticks.put_attribute("_FillValue", -9999i64)?;
        ticks.put_attribute("missing_value", -1i64)?;
        ticks.put_values(&[1i64, -1, -9999, 4], ..)?;
    }

    Ok(())
}

pub fn days_in_month(year: i32, month: u32) -> f64 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29.0,
        2 => 28.0,
        4 | 6 | 9 | 11 => 30.0,
        _ => 31.0,
    }
}
