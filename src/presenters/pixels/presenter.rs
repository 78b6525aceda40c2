use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::display_sink::DisplaySink;
use crate::controllers::interactive::ports::presenter::RenderEventPort;
use crate::core::data::image_dimensions::ImageDimensions;
use crate::core::data::point::PixelPoint;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    /// The frame buffer is sized to `dimensions`; the surface to the window.
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        dimensions: ImageDimensions,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(
            dimensions.width_px(),
            dimensions.height_px(),
            surface_texture,
        )?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy, dimensions)),
            surface_width: size.width,
            surface_height: size.height,
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_event_port(&self) -> Arc<dyn RenderEventPort> {
        Arc::clone(&self.adapter) as Arc<dyn RenderEventPort>
    }

    fn share_display_sink(&self) -> Arc<dyn DisplaySink> {
        Arc::clone(&self.adapter) as Arc<dyn DisplaySink>
    }

    fn take_render_event(&self) -> Option<RenderEvent> {
        self.adapter.render_event()
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.adapter.copy_fresh_frame_into(self.pixels.frame_mut());

        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Render egui on top of pixels framebuffer
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep pixels content
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("failed to resize surface to {}x{}: {}", width, height, err);
        }
    }

    fn window_pos_to_pixel(&self, position: (f32, f32)) -> PixelPoint {
        let (x, y) = match self.pixels.window_pos_to_pixel(position) {
            Ok((x, y)) => (x as isize, y as isize),
            Err(outside) => outside,
        };

        PixelPoint::new(
            x.clamp(i32::MIN as isize, i32::MAX as isize) as i32,
            y.clamp(i32::MIN as isize, i32::MAX as isize) as i32,
        )
    }
}
