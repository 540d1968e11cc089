//! Explicit render context passed to every chart call

use super::chart::{Chart, ChartKind};
use crate::errors::Result;
use crate::series::TimeSeries;
use log::{debug, info};

/// Something that can present a chart to the user
pub trait ChartBackend {
    /// Short backend name for logging
    fn name(&self) -> &'static str;

    /// Presents one chart, returning once the viewer has been dismissed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ClimateError::RenderError`] if the chart cannot be shown.
    fn present(&mut self, chart: &Chart) -> Result<()>;

    /// Releases any display resources held by the backend.
    ///
    /// # Errors
    ///
    /// Backend specific.
    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<B: ChartBackend + ?Sized> ChartBackend for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn present(&mut self, chart: &Chart) -> Result<()> {
        (**self).present(chart)
    }

    fn release(&mut self) -> Result<()> {
        (**self).release()
    }
}

/// Scoped handle on a chart backend
///
/// Acquired with [`RenderContext::acquire`] and given back with
/// [`RenderContext::release`].
#[derive(Debug)]
pub struct RenderContext<B: ChartBackend> {
    backend: B,
    presented: usize,
}

impl<B: ChartBackend> RenderContext<B> {
    pub fn acquire(backend: B) -> Self {
        debug!("Acquired '{}' render context", backend.name());
        Self {
            backend,
            presented: 0,
        }
    }

    /// Renders `series` as a line chart titled after `label`.
    ///
    /// # Errors
    ///
    /// Propagates the backend's presentation error.
    pub fn plot(&mut self, series: &TimeSeries, label: &str, kind: ChartKind) -> Result<()> {
        let chart = Chart::line(series, label, kind);
        self.present(&chart)
    }

    /// Presents an already built chart.
    ///
    /// # Errors
    ///
    /// Propagates the backend's presentation error.
    pub fn present(&mut self, chart: &Chart) -> Result<()> {
        info!(
            "Rendering '{}' ({} points) with the {} backend",
            chart.title,
            chart.points.len(),
            self.backend.name()
        );
        self.backend.present(chart)?;
        self.presented += 1;
        Ok(())
    }

    /// Number of charts presented so far
    #[must_use]
    pub fn presented(&self) -> usize {
        self.presented
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Ends the context and hands the backend back.
    ///
    /// # Errors
    ///
    /// Propagates the backend's release error.
    pub fn release(mut self) -> Result<B> {
        self.backend.release()?;
        debug!(
            "Released '{}' render context after {} charts",
            self.backend.name(),
            self.presented
        );
        Ok(self.backend)
    }
}
