//! Interactive controller for real-time fractal exploration.
//!
//! This module provides the application layer between window input and the
//! compute pipeline: a drag-to-zoom state machine, a render worker that owns
//! the compute dispatcher, and a fixed-cadence presentation loop.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: pointer gestures fed to `InteractiveController`
//! - **Output**: `RenderEventPort` for recompute outcomes, `DisplaySink` for frames
//! - **Core**: Uses domain actions from `core/` for actual computation

mod controller;
pub mod data;
mod dispatcher;
pub mod errors;
pub mod events;
pub mod frame_slot;
pub mod ports;
mod presentation_loop;
pub mod selection_cell;
mod worker;

pub use controller::InteractiveController;
pub use dispatcher::ComputeDispatcher;
pub use frame_slot::{FrameSlot, RenderedFrame};
pub use ports::display_sink::DisplaySink;
pub use ports::presenter::RenderEventPort;
pub use ports::recompute_trigger::RecomputeTrigger;
pub use presentation_loop::PresentationLoop;
pub use selection_cell::SelectionCell;
pub use worker::RenderWorker;
