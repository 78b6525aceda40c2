use crate::adapters::pixel_format::compose_frame;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::frame_slot::RenderedFrame;
use crate::controllers::interactive::ports::display_sink::DisplaySink;
use crate::controllers::interactive::ports::presenter::RenderEventPort;
use crate::core::data::image_dimensions::ImageDimensions;
use crate::core::data::selection_rect::SelectionRect;
use crate::input::gui::events::GuiEvent;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use winit::event_loop::EventLoopProxy;

/// Bridges the background threads to the UI thread.
///
/// The presentation loop composes frames into `staging`; the UI thread copies
/// the staging buffer into the pixels surface when it redraws.
pub struct PixelsAdapter {
    render_event: Mutex<Option<RenderEvent>>,
    staging: Mutex<Vec<u8>>,
    staging_fresh: AtomicBool,
    event_loop_proxy: Mutex<EventLoopProxy<GuiEvent>>,
}

impl RenderEventPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        *self
            .render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(event);
        self.wake(GuiEvent::RenderFinished);
    }
}

impl DisplaySink for PixelsAdapter {
    fn present(&self, frame: &RenderedFrame, selection: Option<SelectionRect>) {
        {
            let mut staging = self.staging.lock().unwrap_or_else(PoisonError::into_inner);
            staging.resize(frame.pixels.buffer_size(), 0);
            compose_frame(&frame.pixels, selection, &mut staging);
        }
        self.staging_fresh.store(true, Ordering::Release);
        self.wake(GuiEvent::FrameComposed);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>, dimensions: ImageDimensions) -> Self {
        Self {
            render_event: Mutex::new(None),
            staging: Mutex::new(vec![0; dimensions.pixel_count() * 4]),
            staging_fresh: AtomicBool::new(false),
            event_loop_proxy: Mutex::new(event_loop_proxy),
        }
    }

    pub fn render_event(&self) -> Option<RenderEvent> {
        self.render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Copies the most recently composed frame into `dst` if there is one
    /// that has not been copied yet. Returns whether anything was copied.
    pub fn copy_fresh_frame_into(&self, dst: &mut [u8]) -> bool {
        if !self.staging_fresh.swap(false, Ordering::AcqRel) {
            return false;
        }

        let staging = self.staging.lock().unwrap_or_else(PoisonError::into_inner);
        if staging.len() != dst.len() {
            log::warn!(
                "dropping composed frame of {} bytes for surface of {} bytes",
                staging.len(),
                dst.len()
            );
            return false;
        }

        dst.copy_from_slice(&staging);
        true
    }

    fn wake(&self, event: GuiEvent) {
        // fails only once the event loop has exited
        let _ = self
            .event_loop_proxy
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .send_event(event);
    }
}
