use crate::core::data::image_dimensions::ImageDimensions;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use winit::{event_loop::EventLoopProxy, window::Window};

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        dimensions: ImageDimensions,
    ) -> Result<T, pixels::Error>;
}
