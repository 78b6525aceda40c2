//! Port definitions for the interactive controller.
//!
//! Contains trait definitions that define interfaces between the controller
//! and external systems (presentation layer, render worker, display).

pub mod display_sink;
pub mod presenter;
pub mod recompute_trigger;
