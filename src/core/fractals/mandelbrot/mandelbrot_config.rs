use crate::core::data::image_dimensions::{ImageDimensions, ImageDimensionsError};
use crate::core::data::viewport::Viewport;
use std::time::Duration;

const DEFAULT_WIDTH_PX: u32 = 1000;
const DEFAULT_HEIGHT_PX: u32 = 1000;
const DEFAULT_ITERATION_CAP: u32 = 16384;
const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(50);
const DEFAULT_WINDOW_TITLE: &str = "Mandelbrot";

/// Process-wide settings for the explorer, fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub width_px: u32,
    pub height_px: u32,
    pub iteration_cap: u32,
    /// Cadence of the presentation loop.
    pub frame_interval: Duration,
    /// Region shown at startup and restored by "Reset view".
    pub initial_viewport: Viewport,
    pub window_title: String,
    /// Worker threads for the compute pool; `None` uses available parallelism.
    pub compute_threads: Option<usize>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width_px: DEFAULT_WIDTH_PX,
            height_px: DEFAULT_HEIGHT_PX,
            iteration_cap: DEFAULT_ITERATION_CAP,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            initial_viewport: Viewport::DEFAULT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            compute_threads: None,
        }
    }
}

impl ExplorerConfig {
    pub fn dimensions(&self) -> Result<ImageDimensions, ImageDimensionsError> {
        ImageDimensions::new(self.width_px, self.height_px, self.iteration_cap)
    }
}
