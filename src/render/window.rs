//! Interactive chart windows using eframe and egui_plot

use super::chart::{x_to_timestamp, Chart};
use super::context::ChartBackend;
use crate::errors::{ClimateError, Result};
use eframe::egui;
use egui_plot::{GridMark, Line, Plot, PlotPoint, PlotPoints};
use std::ops::RangeInclusive;

/// Opens one native window per chart and blocks until it is closed
#[derive(Debug, Default)]
pub struct WindowBackend;

impl WindowBackend {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ChartBackend for WindowBackend {
    fn name(&self) -> &'static str {
        "window"
    }

    fn present(&mut self, chart: &Chart) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([chart.width, chart.height])
                .with_title(chart.title.clone()),
            run_and_return: true,
            ..Default::default()
        };

        let app = ChartWindow {
            chart: chart.clone(),
            segments: chart.segments(),
        };

        eframe::run_native(
            &chart.title,
            options,
            Box::new(move |_cc| Ok(Box::new(app))),
        )
        .map_err(|e| ClimateError::RenderError(format!("Cannot display '{}': {e}", chart.title)))
    }
}

struct ChartWindow {
    chart: Chart,
    segments: Vec<Vec<[f64; 2]>>,
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.chart.title);
            });

            Plot::new("series_plot")
                .x_axis_label(self.chart.x_label.clone())
                .y_axis_label(self.chart.y_label.clone())
                .show_grid(self.chart.show_grid)
                .x_axis_formatter(format_date_mark)
                .label_formatter(|_name: &str, point: &PlotPoint| {
                    format!("{}\n{:.3}", format_date(point.x, "%Y-%m-%d"), point.y)
                })
                .allow_drag(true)
                .allow_zoom(true)
                .allow_scroll(true)
                .show(ui, |plot_ui| {
                    for segment in &self.segments {
                        let points: PlotPoints = segment.iter().copied().collect();
                        plot_ui.line(Line::new(points).width(1.5));
                    }
                });
        });
    }
}

fn format_date_mark(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    format_date(mark.value, date_mark_format(mark.step_size))
}

/// Label format for grid marks spaced `step_size` days apart.
///
/// Marks closer than a month would repeat a `%Y-%m` label, so they show the day.
fn date_mark_format(step_size: f64) -> &'static str {
    if step_size < 30.0 {
        "%Y-%m-%d"
    } else {
        "%Y-%m"
    }
}

fn format_date(x: f64, format: &str) -> String {
    x_to_timestamp(x)
        .map(|t| t.format(format).to_string())
        .unwrap_or_default()
}
