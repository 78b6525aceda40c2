use crate::controllers::interactive::frame_slot::FrameSlot;
use crate::controllers::interactive::ports::recompute_trigger::RecomputeTrigger;
use crate::controllers::interactive::selection_cell::SelectionCell;
use crate::core::data::image_dimensions::ImageDimensions;
use crate::core::data::point::PixelPoint;
use crate::core::data::selection_rect::SelectionRect;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use std::sync::Arc;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum DragState {
    Idle,
    Armed { start: PixelPoint },
    Dragging { start: PixelPoint, end: PixelPoint },
}

/// Turns press, move and release into zoom requests.
///
/// Selections are mapped through the viewport of the frame currently on
/// screen, so a drag always zooms into what the user is looking at even if a
/// newer recompute is still running.
pub struct InteractiveController<T: RecomputeTrigger> {
    trigger: T,
    frame_slot: Arc<FrameSlot>,
    selection: Arc<SelectionCell>,
    dimensions: ImageDimensions,
    home_viewport: Viewport,
    state: DragState,
}

impl<T: RecomputeTrigger> InteractiveController<T> {
    pub fn new(
        trigger: T,
        frame_slot: Arc<FrameSlot>,
        selection: Arc<SelectionCell>,
        dimensions: ImageDimensions,
        home_viewport: Viewport,
    ) -> Self {
        Self {
            trigger,
            frame_slot,
            selection,
            dimensions,
            home_viewport,
            state: DragState::Idle,
        }
    }

    /// Starts a new gesture, discarding any drag whose release was lost.
    pub fn on_press(&mut self, point: PixelPoint) {
        self.selection.clear();
        self.state = DragState::Armed {
            start: point.clamped_to(self.dimensions),
        };
    }

    pub fn on_move(&mut self, point: PixelPoint) {
        let end = point.clamped_to(self.dimensions);

        let start = match self.state {
            DragState::Idle => return,
            DragState::Armed { start } | DragState::Dragging { start, .. } => start,
        };

        self.state = DragState::Dragging { start, end };
        self.selection.set(SelectionRect::new(start, end));
    }

    /// Ends the gesture. Returns the viewport requested, if any.
    pub fn on_release(&mut self) -> Option<Viewport> {
        let state = std::mem::replace(&mut self.state, DragState::Idle);

        let DragState::Dragging { start, end } = state else {
            return None;
        };

        self.selection.clear();

        let selection = SelectionRect::new(start, end);
        if selection.is_degenerate() {
            log::warn!(
                "ignoring selection with no area: {:?} to {:?}",
                selection.start,
                selection.end
            );
            return None;
        }

        let viewport = self.selection_to_viewport(selection)?;
        self.trigger.request_recompute(viewport);

        Some(viewport)
    }

    /// Abandons the current gesture without requesting a recompute.
    pub fn cancel_drag(&mut self) {
        if self.state != DragState::Idle {
            log::debug!("drag cancelled");
        }
        self.state = DragState::Idle;
        self.selection.clear();
    }

    /// Returns to the startup viewport.
    pub fn reset_view(&mut self) -> u64 {
        self.state = DragState::Idle;
        self.selection.clear();

        self.trigger.request_recompute(self.home_viewport)
    }

    /// Viewport of the frame currently on screen.
    #[must_use]
    pub fn displayed_viewport(&self) -> Viewport {
        self.frame_slot.snapshot().viewport
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    #[must_use]
    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    pub fn trigger_mut(&mut self) -> &mut T {
        &mut self.trigger
    }

    fn selection_to_viewport(&self, selection: SelectionRect) -> Option<Viewport> {
        let displayed = self.displayed_viewport();
        let a = pixel_to_complex_coords(selection.start, self.dimensions, displayed);
        let b = pixel_to_complex_coords(selection.end, self.dimensions, displayed);

        match Viewport::from_corners(a, b) {
            Ok(viewport) => Some(viewport),
            Err(err) => {
                log::warn!("ignoring selection: {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::frame_slot::RenderedFrame;
    use crate::core::data::complex::Complex;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTrigger {
        requests: Mutex<Vec<Viewport>>,
    }

    impl RecomputeTrigger for RecordingTrigger {
        fn request_recompute(&self, viewport: Viewport) -> u64 {
            let mut requests = self.requests.lock().unwrap();
            requests.push(viewport);
            requests.len() as u64
        }
    }

    impl RecordingTrigger {
        fn requests(&self) -> Vec<Viewport> {
            self.requests.lock().unwrap().clone()
        }
    }

    struct Fixture {
        controller: InteractiveController<RecordingTrigger>,
        frame_slot: Arc<FrameSlot>,
        selection: Arc<SelectionCell>,
    }

    fn fixture() -> Fixture {
        let dimensions = ImageDimensions::new(1000, 1000, 16).unwrap();
        let frame_slot = Arc::new(FrameSlot::new(RenderedFrame::blank(
            Viewport::DEFAULT,
            ImageDimensions::new(1, 1, 1).unwrap(),
        )));
        let selection = Arc::new(SelectionCell::default());
        let controller = InteractiveController::new(
            RecordingTrigger::default(),
            Arc::clone(&frame_slot),
            Arc::clone(&selection),
            dimensions,
            Viewport::DEFAULT,
        );

        Fixture {
            controller,
            frame_slot,
            selection,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    fn drag(
        controller: &mut InteractiveController<RecordingTrigger>,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Option<Viewport> {
        controller.on_press(PixelPoint::new(from.0, from.1));
        controller.on_move(PixelPoint::new(to.0, to.1));
        controller.on_release()
    }

    #[test]
    fn test_drag_zooms_into_selected_region() {
        let mut f = fixture();

        let viewport = drag(&mut f.controller, (100, 100), (300, 300)).unwrap();

        assert_close(viewport.origin().real, -1.6);
        assert_close(viewport.origin().imag, -1.6);
        assert_close(viewport.width(), 0.8);
        assert_close(viewport.height(), 0.8);
        assert_eq!(f.controller.trigger().requests(), vec![viewport]);
    }

    #[test]
    fn test_up_left_drag_selects_same_region() {
        let mut f = fixture();

        let forward = drag(&mut f.controller, (100, 100), (300, 300)).unwrap();
        let backward = drag(&mut f.controller, (300, 300), (100, 100)).unwrap();

        assert_close(backward.origin().real, forward.origin().real);
        assert_close(backward.origin().imag, forward.origin().imag);
        assert_close(backward.width(), forward.width());
        assert_close(backward.height(), forward.height());
    }

    #[test]
    fn test_press_release_without_move_changes_nothing() {
        let mut f = fixture();

        f.controller.on_press(PixelPoint::new(10, 10));
        let result = f.controller.on_release();

        assert_eq!(result, None);
        assert!(f.controller.trigger().requests().is_empty());
        assert_eq!(f.frame_slot.snapshot().viewport, Viewport::DEFAULT);
    }

    #[test]
    fn test_zero_area_drag_is_ignored() {
        let mut f = fixture();

        let horizontal_line = drag(&mut f.controller, (100, 100), (400, 100));
        let back_to_start = drag(&mut f.controller, (50, 50), (50, 50));

        assert_eq!(horizontal_line, None);
        assert_eq!(back_to_start, None);
        assert!(f.controller.trigger().requests().is_empty());
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut f = fixture();

        f.controller.on_move(PixelPoint::new(20, 20));

        assert!(!f.controller.is_dragging());
        assert_eq!(f.selection.get(), None);
        assert_eq!(f.controller.on_release(), None);
    }

    #[test]
    fn test_selection_is_shared_while_dragging_and_cleared_on_release() {
        let mut f = fixture();

        f.controller.on_press(PixelPoint::new(10, 20));
        assert_eq!(f.selection.get(), None);

        f.controller.on_move(PixelPoint::new(30, 40));
        f.controller.on_move(PixelPoint::new(50, 60));
        assert!(f.controller.is_dragging());
        assert_eq!(
            f.selection.get(),
            Some(SelectionRect::new(PixelPoint::new(10, 20), PixelPoint::new(50, 60)))
        );

        f.controller.on_release();
        assert_eq!(f.selection.get(), None);
        assert!(!f.controller.is_dragging());
    }

    #[test]
    fn test_pointer_positions_are_clamped() {
        let mut f = fixture();

        let viewport = drag(&mut f.controller, (-50, -50), (2000, 2000)).unwrap();

        // clamped to (0, 0) and (999, 999)
        assert_close(viewport.origin().real, -2.0);
        assert_close(viewport.origin().imag, -2.0);
        assert_close(viewport.width(), 3.996);
        assert_close(viewport.height(), 3.996);
    }

    #[test]
    fn test_selection_maps_through_displayed_frame_viewport() {
        let mut f = fixture();
        let displayed = Viewport::new(Complex::new(0.0, 0.0), 1.0, 2.0).unwrap();
        f.frame_slot.publish(Arc::new(RenderedFrame::blank(
            displayed,
            ImageDimensions::new(1, 1, 1).unwrap(),
        )));

        let viewport = drag(&mut f.controller, (0, 0), (500, 500)).unwrap();

        assert_close(viewport.origin().real, 0.0);
        assert_close(viewport.origin().imag, 0.0);
        assert_close(viewport.width(), 0.5);
        assert_close(viewport.height(), 1.0);
    }

    #[test]
    fn test_reset_view_requests_home_viewport() {
        let mut f = fixture();

        f.controller.on_press(PixelPoint::new(1, 1));
        f.controller.on_move(PixelPoint::new(5, 5));
        let generation = f.controller.reset_view();

        assert_eq!(generation, 1);
        assert_eq!(f.controller.trigger().requests(), vec![Viewport::DEFAULT]);
        assert_eq!(f.selection.get(), None);
        assert!(!f.controller.is_dragging());
    }

    #[test]
    fn test_new_press_discards_unreleased_drag() {
        let mut f = fixture();

        f.controller.on_press(PixelPoint::new(10, 10));
        f.controller.on_move(PixelPoint::new(40, 40));
        f.controller.on_press(PixelPoint::new(70, 70));

        assert!(!f.controller.is_dragging());
        assert_eq!(f.selection.get(), None);
        assert_eq!(f.controller.on_release(), None);
        assert!(f.controller.trigger().requests().is_empty());
    }

    #[test]
    fn test_cancel_drag_clears_overlay_without_request() {
        let mut f = fixture();

        f.controller.on_press(PixelPoint::new(10, 10));
        f.controller.on_move(PixelPoint::new(40, 40));
        f.controller.cancel_drag();

        assert!(!f.controller.is_dragging());
        assert_eq!(f.selection.get(), None);
        assert_eq!(f.controller.on_release(), None);
        assert!(f.controller.trigger().requests().is_empty());
    }

    #[test]
    fn test_displayed_viewport_follows_published_frame() {
        let f = fixture();
        let zoomed = Viewport::new(Complex::new(-1.0, -0.5), 0.25, 0.25).unwrap();
        assert_eq!(f.controller.displayed_viewport(), Viewport::DEFAULT);

        // published by a superseded recompute, so no report accompanies it
        f.frame_slot.publish(Arc::new(RenderedFrame::blank(
            zoomed,
            ImageDimensions::new(1, 1, 1).unwrap(),
        )));

        assert_eq!(f.controller.displayed_viewport(), zoomed);
    }
}
