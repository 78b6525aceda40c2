use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::display_sink::DisplaySink;
use crate::controllers::interactive::ports::presenter::RenderEventPort;
use crate::core::data::point::PixelPoint;
use egui::Context as EguiContext;
use std::sync::Arc;

pub trait GuiPresenterPort {
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn share_event_port(&self) -> Arc<dyn RenderEventPort>;
    fn share_display_sink(&self) -> Arc<dyn DisplaySink>;
    fn take_render_event(&self) -> Option<RenderEvent>;
    /// Resizes the presentation surface only; the frame buffer keeps its size.
    fn resize_surface(&mut self, width: u32, height: u32);
    /// Maps a window position to the frame pixel under it.
    fn window_pos_to_pixel(&self, position: (f32, f32)) -> PixelPoint;
}
