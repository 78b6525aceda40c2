use crate::adapters::compute::rayon_context::ComputeInitError;
use crate::controllers::interactive::errors::recompute::RecomputeError;
use crate::core::data::image_dimensions::ImageDimensionsError;
use std::error::Error;
use std::fmt;
use std::io;

/// Anything that stops the explorer from starting or keeps it from running.
#[derive(Debug)]
pub enum RunGuiError {
    Config(ImageDimensionsError),
    ComputeInit(ComputeInitError),
    InitialRender(RecomputeError),
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Surface(pixels::Error),
    Thread(io::Error),
}

impl fmt::Display for RunGuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
            Self::ComputeInit(err) => write!(f, "compute backend unavailable: {}", err),
            Self::InitialRender(err) => write!(f, "initial render failed: {}", err),
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "failed to create pixels surface: {}", err),
            Self::Thread(err) => write!(f, "failed to spawn thread: {}", err),
        }
    }
}

impl Error for RunGuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::ComputeInit(err) => Some(err),
            Self::InitialRender(err) => Some(err),
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Thread(err) => Some(err),
        }
    }
}

impl From<ImageDimensionsError> for RunGuiError {
    fn from(err: ImageDimensionsError) -> Self {
        Self::Config(err)
    }
}

impl From<ComputeInitError> for RunGuiError {
    fn from(err: ComputeInitError) -> Self {
        Self::ComputeInit(err)
    }
}

impl From<RecomputeError> for RunGuiError {
    fn from(err: RecomputeError) -> Self {
        Self::InitialRender(err)
    }
}

impl From<winit::error::EventLoopError> for RunGuiError {
    fn from(err: winit::error::EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<winit::error::OsError> for RunGuiError {
    fn from(err: winit::error::OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for RunGuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<io::Error> for RunGuiError {
    fn from(err: io::Error) -> Self {
        Self::Thread(err)
    }
}
