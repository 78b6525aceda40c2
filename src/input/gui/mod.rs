//! GUI input adapter for interactive fractal exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the status panel.

pub mod app;
pub mod commands;
pub mod events;

pub use events::GuiEvent;
