use crate::controllers::interactive::{InteractiveController, PresentationLoop, RenderWorker};
use crate::core::data::point::PixelPoint;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::events::GuiEvent;
use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: InteractiveController<RenderWorker>,
    presentation: PresentationLoop,
    ui_state: GuiAppState,
    cursor: PixelPoint,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController<RenderWorker>,
        presentation: PresentationLoop,
        ui_state: GuiAppState,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            presenter,
            controller,
            presentation,
            ui_state,
            cursor: PixelPoint::default(),
            egui_ctx,
            egui_state,
        }
    }

    /// Runs the event loop until the window is closed.
    pub fn run(
        mut self,
        event_loop: EventLoop<GuiEvent>,
    ) -> Result<(), winit::error::EventLoopError> {
        let window = self.window;
        let mut redraw_pending = true;

        event_loop.run(|event, elwt| match event {
            Event::UserEvent(GuiEvent::FrameComposed) => {
                redraw_pending = true;
            }
            Event::UserEvent(GuiEvent::RenderFinished) => {
                self.drain_render_events();
                redraw_pending = true;
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                // Forward event to egui first
                let (egui_consumed, egui_repaint) = self.handle_egui_event(event);

                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        self.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = self.update_ui();

                        self.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = self.presenter.render(egui_output, &self.egui_ctx) {
                            log::error!("render error: {}", err);
                            self.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        self.cursor = self
                            .presenter
                            .window_pos_to_pixel((position.x as f32, position.y as f32));
                        self.controller.on_move(self.cursor);
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } if !egui_consumed => {
                        self.controller.on_press(self.cursor);
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Released,
                        button: MouseButton::Left,
                        ..
                    } => {
                        if self.controller.on_release().is_some() {
                            self.ui_state
                                .record_request(self.controller.trigger().latest_generation());
                        }
                    }
                    WindowEvent::Focused(false) => {
                        // the release may never arrive
                        self.controller.cancel_drag();
                    }
                    WindowEvent::Resized(size) => {
                        self.presenter.resize_surface(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        self.presenter.resize_surface(size.width, size.height);
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })
    }

    fn drain_render_events(&mut self) {
        while let Some(event) = self.presenter.take_render_event() {
            self.ui_state.apply_render_event(event);
        }
    }

    /// Stops presenting, then stops the render worker, which releases the
    /// compute backend.
    fn shutdown(&mut self) {
        log::info!("shutting down");
        self.presentation.stop();
        self.controller.trigger_mut().shutdown();
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let mut reset_clicked = false;
        let state = &self.ui_state;
        let displayed_viewport = self.controller.displayed_viewport();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    let origin = displayed_viewport.origin();
                    ui.label(format!("Origin: ({:.6}, {:.6})", origin.real, origin.imag));
                    ui.label(format!(
                        "Size: {:.6e} x {:.6e}",
                        displayed_viewport.width(),
                        displayed_viewport.height()
                    ));
                    ui.label(format!("Iteration cap: {}", state.iteration_cap));

                    ui.separator();
                    if state.is_rendering() {
                        ui.label("Rendering...");
                    } else if let Some(render_duration) = state.last_render_duration {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = &state.last_error_message {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }

                    ui.separator();
                    ui.label("Drag to zoom");
                    if ui.button("Reset view").clicked() {
                        reset_clicked = true;
                    }
                });
        });

        if reset_clicked {
            let generation = self.controller.reset_view();
            self.ui_state.record_request(generation);
        }

        output
    }

    fn handle_egui_event(&mut self, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(self.window, event);
        (response.consumed, response.repaint)
    }
}
