mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use adapters::compute::rayon_context::{ComputeInitError, RayonComputeContext};
pub use adapters::pixel_format::compose_frame;
pub use controllers::interactive::data::frame_report::FrameReport;
pub use controllers::interactive::errors::recompute::RecomputeError;
pub use controllers::interactive::errors::render::RenderError;
pub use controllers::interactive::events::render::RenderEvent;
pub use controllers::interactive::{
    ComputeDispatcher, DisplaySink, FrameSlot, InteractiveController, PresentationLoop,
    RecomputeTrigger, RenderEventPort, RenderWorker, RenderedFrame, SelectionCell,
};
pub use core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    generate_fractal_parallel_rayon, generate_fractal_parallel_rayon_cancelable,
};
pub use core::actions::generate_fractal::ports::compute_backend::{ComputeBackend, ComputeError};
pub use core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferCancelableError, generate_pixel_buffer, generate_pixel_buffer_cancelable,
};
pub use core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use core::data::colour::Colour;
pub use core::data::complex::Complex;
pub use core::data::image_dimensions::{ImageDimensions, ImageDimensionsError};
pub use core::data::iteration_buffer::{IterationBuffer, IterationBufferError};
pub use core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use core::data::point::PixelPoint;
pub use core::data::selection_rect::SelectionRect;
pub use core::data::viewport::{Viewport, ViewportError};
pub use core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use core::fractals::mandelbrot::colour_table::ColourTable;
pub use core::fractals::mandelbrot::mandelbrot_config::ExplorerConfig;
pub use core::util::hsb_to_rgb::hsb_to_rgb;
pub use core::util::pixel_to_complex_coords::pixel_to_complex_coords;

#[cfg(feature = "gui")]
pub use input::gui::commands::errors::RunGuiError;
#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
