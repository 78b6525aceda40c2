use mandelbrot_explorer::{
    Colour, ComputeDispatcher, DisplaySink, ExplorerConfig, InteractiveController, PixelPoint,
    PresentationLoop, RayonComputeContext, RenderEvent, RenderEventPort, RenderWorker,
    RenderedFrame, SelectionCell, SelectionRect, Viewport, compose_frame,
};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Default)]
struct RecordingPort {
    events: Mutex<Vec<RenderEvent>>,
}

impl RenderEventPort for RecordingPort {
    fn present(&self, event: RenderEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[derive(Default)]
struct ComposingSink {
    last: Mutex<Option<(Viewport, Vec<u8>)>>,
}

impl DisplaySink for ComposingSink {
    fn present(&self, frame: &RenderedFrame, selection: Option<SelectionRect>) {
        let mut dst = vec![0; frame.pixels.buffer_size()];
        compose_frame(&frame.pixels, selection, &mut dst);
        *self.last.lock().unwrap() = Some((frame.viewport, dst));
    }
}

fn small_config() -> ExplorerConfig {
    ExplorerConfig {
        width_px: 100,
        height_px: 100,
        iteration_cap: 256,
        frame_interval: Duration::from_millis(5),
        compute_threads: Some(2),
        ..ExplorerConfig::default()
    }
}

fn wait_until(timeout: Duration, condition: impl Fn() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}

#[test]
fn drag_to_zoom_renders_and_presents_new_viewport() {
    let config = small_config();
    let dimensions = config.dimensions().unwrap();

    let context = RayonComputeContext::create(config.compute_threads).unwrap();
    let mut dispatcher = ComputeDispatcher::new(context, dimensions, config.initial_viewport);
    let initial = dispatcher.recompute().unwrap();

    let port = Arc::new(RecordingPort::default());
    let worker =
        RenderWorker::spawn(dispatcher, Arc::clone(&port) as Arc<dyn RenderEventPort>).unwrap();
    let frame_slot = worker.frame_slot();
    let selection = Arc::new(SelectionCell::default());
    let sink = Arc::new(ComposingSink::default());
    let mut presentation = PresentationLoop::spawn(
        Arc::clone(&frame_slot),
        Arc::clone(&selection),
        Arc::clone(&sink) as Arc<dyn DisplaySink>,
        config.frame_interval,
    )
    .unwrap();
    let mut controller = InteractiveController::new(
        worker,
        Arc::clone(&frame_slot),
        selection,
        dimensions,
        config.initial_viewport,
    );

    // the point (0, 0) of the plane is at the centre of the default view
    assert_eq!(
        initial.pixels.pixel(50, 50),
        Ok(Colour::OPAQUE_BLACK),
        "origin lies inside the set"
    );

    controller.on_press(PixelPoint::new(10, 10));
    controller.on_move(PixelPoint::new(30, 30));
    assert!(wait_until(Duration::from_secs(2), || {
        sink.last
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|(_, bytes)| bytes[(10 * 100 + 10) * 4..][..4] == [255, 0, 0, 255])
    }));

    let requested = controller.on_release().unwrap();
    assert!((requested.origin().real + 1.6).abs() < 1e-9);
    assert!((requested.width() - 0.8).abs() < 1e-9);

    assert!(wait_until(Duration::from_secs(10), || {
        frame_slot.snapshot().viewport == requested
    }));
    assert!(wait_until(Duration::from_secs(2), || {
        sink.last
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|(viewport, _)| *viewport == requested)
    }));

    presentation.stop();
    controller.trigger_mut().shutdown();

    let events = port.events.lock().unwrap();
    assert!(matches!(
        events.last(),
        Some(RenderEvent::Frame(report)) if report.viewport == requested
    ));
}

#[test]
fn repeated_recompute_of_default_view_is_identical() {
    let config = small_config();
    let dimensions = config.dimensions().unwrap();
    let context = RayonComputeContext::create(Some(3)).unwrap();
    let mut dispatcher = ComputeDispatcher::new(context, dimensions, Viewport::DEFAULT);

    let first = dispatcher.recompute().unwrap();
    let second = dispatcher.recompute().unwrap();

    assert_eq!(first.pixels, second.pixels);
}
