//! Non-interactive backend for batch runs and tests

use super::chart::Chart;
use super::context::ChartBackend;
use crate::errors::Result;
use log::info;

/// Records every presented chart instead of displaying it
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    charts: Vec<Chart>,
}

impl HeadlessBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Charts presented so far, in order
    #[must_use]
    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }
}

impl ChartBackend for HeadlessBackend {
    fn name(&self) -> &'static str {
        "headless"
    }

    fn present(&mut self, chart: &Chart) -> Result<()> {
        info!(
            "{}: {} of {} points plotted, {} line segments (no display)",
            chart.title,
            chart.finite_points(),
            chart.points.len(),
            chart.segments().len()
        );
        self.charts.push(chart.clone());
        Ok(())
    }
}
