//! Entry point for the climate_anomalies application.
//! Parses the CLI, configures logging and the thread pool, then runs the pipeline.

use clap::Parser;
use climate_anomalies::cli::Args;
use climate_anomalies::parallel::{get_parallel_info, ParallelConfig};
use climate_anomalies::pipeline::run_analysis;
use climate_anomalies::render::{open_backend, RenderContext};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    println!(
        r#"
------------------------------------------------------------------
     climate_anomalies :: monthly means & anomalies from NetCDF
------------------------------------------------------------------
"#
    );

    ParallelConfig::new(args.threads).setup_global_pool()?;
    get_parallel_info().log_info();

    let config = args.analysis_config();
    let mut ctx = RenderContext::acquire(open_backend(args.backend)?);

    let report = run_analysis(&config, &mut ctx)?;
    ctx.release()?;

    info!(
        "Finished '{}': {} monthly means, {} anomalies",
        config.variable,
        report.monthly_mean.len(),
        report.anomalies.len()
    );

    Ok(())
}
