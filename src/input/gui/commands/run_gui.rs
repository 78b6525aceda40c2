use crate::adapters::compute::rayon_context::RayonComputeContext;
use crate::controllers::interactive::{
    ComputeDispatcher, InteractiveController, PresentationLoop, RenderWorker, SelectionCell,
};
use crate::core::fractals::mandelbrot::mandelbrot_config::ExplorerConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::commands::errors::RunGuiError;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;
use std::marker::PhantomData;
use std::sync::Arc;
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self::with_config(presenter_factory, ExplorerConfig::default())
    }

    pub fn with_config(presenter_factory: F, config: ExplorerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Starts the explorer and blocks until the window is closed.
    ///
    /// The compute backend is created and the first frame rendered before any
    /// window appears; failure at either step is returned as an error.
    pub fn execute(&self) -> Result<(), RunGuiError> {
        let config = &self.config;
        let dimensions = config.dimensions()?;

        let backend = RayonComputeContext::create(config.compute_threads)?;
        let mut dispatcher = ComputeDispatcher::new(backend, dimensions, config.initial_viewport);
        dispatcher.recompute()?;
        log::info!("initial frame rendered for {}", config.initial_viewport);

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(config.window_title.as_str())
                .with_inner_size(PhysicalSize::new(config.width_px, config.height_px))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter: P = self
            .presenter_factory
            .build(window, event_loop_proxy, dimensions)?;

        let worker = RenderWorker::spawn(dispatcher, presenter.share_event_port())?;
        let frame_slot = worker.frame_slot();
        let selection = Arc::new(SelectionCell::default());

        let presentation = PresentationLoop::spawn(
            Arc::clone(&frame_slot),
            Arc::clone(&selection),
            presenter.share_display_sink(),
            config.frame_interval,
        )?;

        let controller = InteractiveController::new(
            worker,
            frame_slot,
            selection,
            dimensions,
            config.initial_viewport,
        );

        let ui_state = GuiAppState::new(dimensions.iteration_cap());
        let app = GuiApp::new(
            window,
            &event_loop,
            presenter,
            controller,
            presentation,
            ui_state,
        );

        app.run(event_loop)?;
        log::info!("explorer closed");

        Ok(())
    }
}
