use crate::core::data::viewport::Viewport;
use std::time::Duration;

/// Summary of a recompute that finished and was published.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub generation: u64,
    pub viewport: Viewport,
    pub render_duration: Duration,
}
