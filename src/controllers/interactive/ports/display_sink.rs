use crate::controllers::interactive::frame_slot::RenderedFrame;
use crate::core::data::selection_rect::SelectionRect;

/// Where the presentation loop sends each tick's frame.
///
/// Implementations copy what they need; `frame` must not be retained.
pub trait DisplaySink: Send + Sync {
    fn present(&self, frame: &RenderedFrame, selection: Option<SelectionRect>);
}
