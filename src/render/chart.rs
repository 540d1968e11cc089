//! Backend-independent description of a line chart

use crate::series::TimeSeries;
use chrono::{DateTime, NaiveDateTime};

/// Canvas width in pixels (10 in at 100 dpi)
pub const CANVAS_WIDTH: f32 = 1000.0;
/// Canvas height in pixels (6 in at 100 dpi)
pub const CANVAS_HEIGHT: f32 = 600.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Which pipeline product a chart shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    MonthlyMean,
    Anomaly,
}

impl ChartKind {
    #[must_use]
    pub fn title(self, label: &str) -> String {
        match self {
            Self::MonthlyMean => format!("Monthly Mean {label}"),
            Self::Anomaly => format!("{label} Anomalies"),
        }
    }
}

/// A single time/value line plot
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: f32,
    pub height: f32,
    pub show_grid: bool,
    pub points: Vec<(NaiveDateTime, f64)>,
}

impl Chart {
    /// Describes `series` as a line chart labelled after `label`.
    #[must_use]
    pub fn line(series: &TimeSeries, label: &str, kind: ChartKind) -> Self {
        let units = series.units.as_deref().unwrap_or("units");
        Self {
            title: kind.title(label),
            x_label: "Time".to_string(),
            y_label: format!("{label} ({units})"),
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            show_grid: true,
            points: series.iter().map(|(t, v)| (*t, v)).collect(),
        }
    }

    /// Plot-space polylines, split wherever a value is missing.
    ///
    /// X is fractional days since the Unix epoch.
    #[must_use]
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();

        for (timestamp, value) in &self.points {
            if value.is_finite() {
                current.push([timestamp_to_x(timestamp), *value]);
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }

    /// Number of points with a finite value
    #[must_use]
    pub fn finite_points(&self) -> usize {
        self.points.iter().filter(|(_, v)| v.is_finite()).count()
    }
}

/// Maps a timestamp onto the plot's x axis.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn timestamp_to_x(timestamp: &NaiveDateTime) -> f64 {
    timestamp.and_utc().timestamp() as f64 / SECONDS_PER_DAY
}

/// Inverse of [`timestamp_to_x`], `None` outside chrono's range.
#[must_use]
pub fn x_to_timestamp(x: f64) -> Option<NaiveDateTime> {
    let seconds = (x * SECONDS_PER_DAY).round();
    if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let seconds = seconds as i64;
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.naive_utc())
}
