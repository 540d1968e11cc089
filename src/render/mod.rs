//! Chart rendering
//!
//! Charts are described by [`Chart`] and shown through a [`ChartBackend`]
//! held by an explicit [`RenderContext`]. Two backends exist:
//!
//! - [`HeadlessBackend`]: records charts, never blocks
//! - `WindowBackend` (feature `gui`): blocking native window per chart

pub mod chart;
pub mod context;
pub mod headless;
#[cfg(feature = "gui")]
pub mod window;

pub use chart::{Chart, ChartKind, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use context::{ChartBackend, RenderContext};
pub use headless::HeadlessBackend;
#[cfg(feature = "gui")]
pub use window::WindowBackend;

use crate::errors::Result;

/// Selectable chart backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BackendKind {
    /// Interactive window per chart
    Window,
    /// No display; charts are only logged
    Headless,
}

impl Default for BackendKind {
    fn default() -> Self {
        if cfg!(feature = "gui") {
            Self::Window
        } else {
            Self::Headless
        }
    }
}

/// Creates the backend for `kind`.
///
/// # Errors
///
/// Returns [`crate::errors::ClimateError::RenderError`] when a window backend is requested
/// from a build without the `gui` feature.
pub fn open_backend(kind: BackendKind) -> Result<Box<dyn ChartBackend>> {
    match kind {
        BackendKind::Headless => Ok(Box::new(HeadlessBackend::new())),
        #[cfg(feature = "gui")]
        BackendKind::Window => Ok(Box::new(WindowBackend::new())),
        #[cfg(not(feature = "gui"))]
        BackendKind::Window => Err(crate::errors::ClimateError::RenderError(
            "Window backend unavailable: built without the `gui` feature".to_string(),
        )),
    }
}
