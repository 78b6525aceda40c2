use crate::controllers::interactive::events::render::RenderEvent;
use std::time::Duration;

/// Render status shown in the panel.
///
/// The displayed viewport is not tracked here; the panel reads it from the
/// frame on screen, which a superseded recompute may replace without a report.
pub struct GuiAppState {
    pub iteration_cap: u32,
    pub latest_requested_generation: u64,
    last_completed_generation: u64,
    pub last_render_duration: Option<Duration>,
    pub last_error_message: Option<String>,
}

impl GuiAppState {
    #[must_use]
    pub fn new(iteration_cap: u32) -> Self {
        Self {
            iteration_cap,
            latest_requested_generation: 0,
            last_completed_generation: 0,
            last_render_duration: None,
            last_error_message: None,
        }
    }

    pub fn record_request(&mut self, generation: u64) {
        self.latest_requested_generation = self.latest_requested_generation.max(generation);
    }

    /// Applies a worker report, ignoring any older than one already applied.
    pub fn apply_render_event(&mut self, event: RenderEvent) {
        let generation = event.generation();
        if generation < self.last_completed_generation {
            return;
        }
        self.last_completed_generation = generation;

        match event {
            RenderEvent::Frame(report) => {
                self.last_render_duration = Some(report.render_duration);
                self.last_error_message = None;
            }
            RenderEvent::Error(error) => {
                self.last_error_message = Some(error.message);
            }
        }
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.latest_requested_generation > self.last_completed_generation
    }
}
