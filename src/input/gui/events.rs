/// Custom user events for the GUI event loop.
///
/// These events allow background threads (the presentation loop and the
/// render worker) to wake the main UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// The presentation loop composed a new frame into the staging buffer.
    FrameComposed,
    /// The render worker finished a recompute, successfully or not.
    RenderFinished,
}
