mod common;

use chrono::{Datelike, NaiveDate};
use climate_anomalies::{
    errors::{ClimateError, Result},
    netcdf_io::{load_climate_data, read_dataset, LoadOptions},
    pipeline::{run_analysis, AnalysisConfig},
    render::{HeadlessBackend, RenderContext},
};
use tempfile::tempdir;

fn headless() -> RenderContext<HeadlessBackend> {
    RenderContext::acquire(HeadlessBackend::new())
}

#[test]
fn test_daily_year_yields_twelve_monthly_means() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("daily_2023.nc");
    common::write_daily_year(&file_path)?;

    let config = AnalysisConfig {
        file_path,
        ..AnalysisConfig::default()
    };
    let mut ctx = headless();
    let report = run_analysis(&config, &mut ctx)?;

    // One point per month, each the mean of that month's day indices
    let monthly = &report.monthly_mean;
    assert_eq!(monthly.len(), 12);
    assert_eq!(monthly.units.as_deref(), Some("K"));

    let mut day = 0usize;
    for (month, (label, mean)) in (1..=12u32).zip(monthly.iter()) {
        let length = common::days_in_month(2023, month) as usize;
        let expected = (day..day + length).map(|d| d as f64).sum::<f64>() / length as f64;
        assert!((mean - expected).abs() < 1e-9, "month {month}: {mean} != {expected}");
        assert_eq!(label.month(), month);
        assert_eq!(label.day() as usize, length, "labelled at month end");
        day += length;
    }

    // Anomalies keep the daily index
    assert_eq!(report.anomalies.len(), 365);
    assert_eq!(
        report.anomalies.times()[0],
        NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    );
    assert!(report.climatology.is_complete());

    // Two charts were presented, in pipeline order
    assert_eq!(ctx.presented(), 2);
    let backend = ctx.release()?;
    let charts = backend.charts();
    assert_eq!(charts[0].title, "Monthly Mean temperature");
    assert_eq!(charts[0].y_label, "temperature (K)");
    assert_eq!(charts[0].points.len(), 12);
    assert_eq!(charts[1].title, "temperature Anomalies");
    assert_eq!(charts[1].points.len(), 365);

    Ok(())
}

#[test]
fn test_two_year_climatology_and_anomalies() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("monthly_2000_2001.nc");
    common::write_two_years_monthly(&file_path)?;

    let config = AnalysisConfig {
        file_path,
        ..AnalysisConfig::default()
    };
    let report = run_analysis(&config, &mut headless())?;

    // Values are month*10 + 0 (2000) and month*10 + 2 (2001)
    for month in 1..=12u32 {
        let expected = f64::from(month) * 10.0 + 1.0;
        assert_eq!(report.climatology.get(month), Some(expected));
    }

    let anomalies = report.anomalies.values();
    assert_eq!(anomalies.len(), 24);
    assert!(anomalies[..12].iter().all(|&a| a == -1.0));
    assert!(anomalies[12..].iter().all(|&a| a == 1.0));

    // Monthly data resamples onto itself
    assert_eq!(report.monthly_mean.len(), 24);
    assert_eq!(report.monthly_mean.values()[0], 10.0);
    assert_eq!(report.monthly_mean.values()[23], 122.0);

    Ok(())
}

#[test]
fn test_missing_variable_produces_no_chart() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("daily_2023.nc");
    common::write_daily_year(&file_path)?;

    let config = AnalysisConfig {
        file_path,
        variable: "precipitation".to_string(),
        ..AnalysisConfig::default()
    };
    let mut ctx = headless();
    let result = run_analysis(&config, &mut ctx);

    match result {
        Err(ClimateError::VariableNotFound { var }) => assert_eq!(var, "precipitation"),
        other => panic!("Expected VariableNotFound error, got {other:?}"),
    }
    assert_eq!(ctx.presented(), 0);
    assert!(ctx.release()?.charts().is_empty());

    Ok(())
}

#[test]
fn test_missing_file_is_a_netcdf_error() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let result = load_climate_data(temp_dir.path().join("absent.nc"), &LoadOptions::default());
    assert!(matches!(result, Err(ClimateError::NetCDFError(_))));
}

#[test]
fn test_summary_describes_structure() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("daily_2023.nc");
    common::write_daily_year(&file_path)?;

    let dataset = load_climate_data(&file_path, &LoadOptions::default())?;
    let summary = dataset.summary();

    let dim_names: Vec<&str> = summary.dimensions.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(dim_names, vec!["time", "lat", "lon"]);

    let coords: Vec<&str> = summary.coordinates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(coords, vec!["time", "lat", "lon"]);
    assert_eq!(
        summary.coordinates[0].range.as_deref(),
        Some("2023-01-01 00:00 .. 2023-12-31 00:00")
    );
    assert_eq!(summary.coordinates[1].range.as_deref(), Some("-10 .. 10"));

    assert_eq!(summary.variables.len(), 1);
    assert_eq!(summary.variables[0].attribute("units"), Some("K"));
    assert_eq!(
        summary.global_attributes.get("title").map(String::as_str),
        Some("Synthetic daily temperature")
    );

    let text = summary.to_string();
    assert!(text.contains("temperature"));
    assert!(text.contains("(time, lat, lon)"));

    assert_eq!(dataset.variable_names().collect::<Vec<_>>(), vec!["temperature"]);
    assert_eq!(
        dataset.variable("temperature")?.long_name.as_deref(),
        Some("air temperature")
    );

    Ok(())
}

#[test]
fn test_fill_values_and_packing_are_decoded() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("packed.nc");
    common::write_packed(&file_path, "gregorian")?;

    let dataset = read_dataset(&file_path, &LoadOptions::default())?;
    let tas = dataset.variable("tas")?;

    assert_eq!(tas.len(), 4);
    assert_eq!(tas.values()[0], 275.0);
    assert!(tas.values()[1].is_nan());
    assert_eq!(tas.values()[2], 280.0);
    assert_eq!(tas.values()[3], 285.0);
    assert_eq!(tas.times()[3].format("%Y-%m-%d %H:%M").to_string(), "2010-05-01 18:00");

    let mut ctx = headless();
    let report = climate_anomalies::analyze_dataset(&dataset, "tas", &mut ctx)?;
    assert_eq!(report.monthly_mean.values(), &[280.0]);
    assert!(report.anomalies.values()[1].is_nan());
    assert_eq!(report.anomalies.values()[0], -5.0);

    Ok(())
}

#[test]
fn test_missing_value_markers_of_every_type_are_masked() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("missing.nc");
    common::write_missing_values(&file_path)?;

    let dataset = read_dataset(&file_path, &LoadOptions::default())?;

    let assert_masked = |name: &str, expected: [Option<f64>; 4]| -> Result<()> {
        let values = dataset.variable(name)?.values();
        for (i, (value, want)) in values.iter().zip(expected).enumerate() {
            match want {
                Some(v) => assert_eq!(*value, v, "{name}[{i}]"),
                None => assert!(value.is_nan(), "{name}[{i}] = {value}, expected NaN"),
            }
        }
        Ok(())
    };

    // `missing_value` alone, with several sentinels
    assert_masked("rh", [Some(50.0), None, Some(60.0), None])?;
    // Float `_FillValue`
    assert_masked("sst", [Some(15.0), None, Some(17.0), Some(18.0)])?;
    // Unsigned 16-bit fill
    assert_masked("counts", [Some(10.0), None, Some(20.0), Some(30.0)])?;
    // 64-bit fill together with `missing_value`
    assert_masked("ticks", [Some(1.0), None, None, Some(4.0)])?;

    let mut ctx = headless();
    let report = climate_anomalies::analyze_dataset(&dataset, "counts", &mut ctx)?;
    assert_eq!(report.monthly_mean.values(), &[20.0]);

    Ok(())
}

#[test]
fn test_unsupported_calendar_is_rejected() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("noleap.nc");
    common::write_packed(&file_path, "noleap")?;

    let result = read_dataset(&file_path, &LoadOptions::default());
    assert!(matches!(result, Err(ClimateError::TimeError(_))));

    Ok(())
}

#[test]
fn test_unknown_time_dimension() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("packed.nc");
    common::write_packed(&file_path, "standard")?;

    let options = LoadOptions {
        time_dimension: "valid_time".to_string(),
    };
    match read_dataset(&file_path, &options) {
        Err(ClimateError::DimensionNotFound { dim, .. }) => assert_eq!(dim, "valid_time"),
        other => panic!("Expected DimensionNotFound error, got {other:?}"),
    }

    Ok(())
}

#[test]
fn test_repeated_runs_are_bit_identical() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("daily_2023.nc");
    common::write_daily_year(&file_path)?;

    let dataset = read_dataset(&file_path, &LoadOptions::default())?;
    let first = climate_anomalies::analyze_dataset(&dataset, "temperature", &mut headless())?;
    let second = climate_anomalies::analyze_dataset(&dataset, "temperature", &mut headless())?;

    let bits = |values: &[f64]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(first.monthly_mean.values()), bits(second.monthly_mean.values()));
    assert_eq!(bits(first.anomalies.values()), bits(second.anomalies.values()));
    assert_eq!(first.monthly_mean.times(), second.monthly_mean.times());

    Ok(())
}
