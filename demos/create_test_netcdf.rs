//! Creates a sample NetCDF file for trying out climate_anomalies.
//!
//! Writes two years of daily `temperature(time, lat, lon)` with a seasonal
//! cycle, a latitude gradient, a warming trend and a few missing values.

use ndarray::Array3;
use netcdf::create;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = Path::new("your_data.nc");
    let days: usize = 730;
    let lats = [-30.0f32, 0.0, 30.0];
    let lons = [0.0f32, 90.0, 180.0, 270.0];

    println!("🔨 Creating test NetCDF file: {}", output_path.display());

    // Remove existing file if it exists
    if output_path.exists() {
        std::fs::remove_file(output_path)?
    }

    let mut file = create(output_path)?;

    file.add_attribute("title", "Synthetic daily climate data")?;
    file.add_attribute("institution", "climate_anomalies demo")?;
    file.add_attribute("created_by", "create_test_netcdf.rs")?;

    file.add_dimension("time", days)?;
    file.add_dimension("lat", lats.len())?;
    file.add_dimension("lon", lons.len())?;

    {
        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("units", "days since 2022-01-01 00:00:00")?;
        time_var.put_attribute("long_name", "time")?;
        time_var.put_attribute("calendar", "standard")?;
        let offsets: Vec<f64> = (0..days).map(|d| d as f64).collect();
        time_var.put_values(&offsets, ..)?;
    }

    {
        let mut lat_var = file.add_variable::<f32>("lat", &["lat"])?;
        lat_var.put_attribute("units", "degrees_north")?;
        lat_var.put_attribute("long_name", "latitude")?;
        lat_var.put_values(&lats, ..)?;
    }

    {
        let mut lon_var = file.add_variable::<f32>("lon", &["lon"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put_attribute("long_name", "longitude")?;
        lon_var.put_values(&lons, ..)?;
    }

    {
        let mut temp_var = file.add_variable::<f32>("temperature", &["time", "lat", "lon"])?;
        temp_var.put_attribute("units", "K")?;
        temp_var.put_attribute("long_name", "air temperature")?;
        temp_var.put_attribute("standard_name", "air_temperature")?;
        temp_var.put_attribute("_FillValue", -999.0f32)?;

        let mut data = Vec::with_capacity(days * lats.len() * lons.len());
        for day in 0..days {
            let season = 10.0 * (2.0 * std::f32::consts::PI * (day as f32 - 15.0) / 365.0).cos();
            let trend = 0.002 * day as f32;
            for &lat in &lats {
                for (lon_idx, _) in lons.iter().enumerate() {
                    if day % 97 == 0 && lon_idx == 0 {
                        data.push(-999.0);
                        continue;
                    }
                    let hemisphere = if lat < 0.0 { -1.0 } else { 1.0 };
                    let lat_effect = -0.3 * lat.abs();
                    data.push(288.0 + lat_effect + hemisphere * season + trend);
                }
            }
        }

        let temp_array = Array3::from_shape_vec((days, lats.len(), lons.len()), data)?;
        temp_var.put(temp_array.view(), ..)?;
    }

    println!("✅ Successfully created test NetCDF file with:");
    println!("   📏 Dimensions: time({days}), lat({}), lon({})", lats.len(), lons.len());
    println!("   📈 Variables: time, lat, lon, temperature");
    println!("\n🧪 Analyse it with:");
    println!("   cargo run -- --file your_data.nc --variable temperature");

    Ok(())
}
