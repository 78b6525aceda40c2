use crate::controllers::interactive::frame_slot::FrameSlot;
use crate::controllers::interactive::ports::display_sink::DisplaySink;
use crate::controllers::interactive::selection_cell::SelectionCell;
use std::io;
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

struct StopSignal {
    stopped: Mutex<bool>,
    wake: Condvar,
}

/// Presents the latest frame and the live selection at a fixed cadence.
///
/// Each tick takes a snapshot of the frame slot, so it never waits for a
/// recompute. Runs until [`PresentationLoop::stop`] is called or the loop is
/// dropped; after `stop` returns the sink is not called again.
pub struct PresentationLoop {
    signal: Arc<StopSignal>,
    handle: Option<JoinHandle<()>>,
}

impl PresentationLoop {
    pub fn spawn(
        frame_slot: Arc<FrameSlot>,
        selection: Arc<SelectionCell>,
        sink: Arc<dyn DisplaySink>,
        interval: Duration,
    ) -> io::Result<Self> {
        let signal = Arc::new(StopSignal {
            stopped: Mutex::new(false),
            wake: Condvar::new(),
        });
        let loop_signal = Arc::clone(&signal);

        let handle = thread::Builder::new()
            .name("mandelbrot-present".to_string())
            .spawn(move || {
                Self::run(&loop_signal, &frame_slot, &selection, sink.as_ref(), interval);
            })?;

        log::debug!("presentation loop started, interval {:?}", interval);

        Ok(Self {
            signal,
            handle: Some(handle),
        })
    }

    /// Wakes the loop, waits for it to exit, and returns.
    pub fn stop(&mut self) {
        {
            let mut stopped = self
                .signal
                .stopped
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *stopped = true;
        }
        self.signal.wake.notify_all();

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("presentation loop panicked");
            }
            log::debug!("presentation loop stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    fn run(
        signal: &StopSignal,
        frame_slot: &FrameSlot,
        selection: &SelectionCell,
        sink: &dyn DisplaySink,
        interval: Duration,
    ) {
        loop {
            let frame = frame_slot.snapshot();
            sink.present(&frame, selection.get());

            let stopped = signal
                .stopped
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let (stopped, _) = signal
                .wake
                .wait_timeout_while(stopped, interval, |stopped| !*stopped)
                .unwrap_or_else(PoisonError::into_inner);

            if *stopped {
                return;
            }
        }
    }
}

impl Drop for PresentationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::frame_slot::RenderedFrame;
    use crate::core::data::complex::Complex;
    use crate::core::data::image_dimensions::ImageDimensions;
    use crate::core::data::point::PixelPoint;
    use crate::core::data::selection_rect::SelectionRect;
    use crate::core::data::viewport::Viewport;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    #[derive(Default)]
    struct RecordingSink {
        count: AtomicUsize,
        seen: Mutex<Vec<(Viewport, Option<SelectionRect>)>>,
    }

    impl DisplaySink for RecordingSink {
        fn present(&self, frame: &RenderedFrame, selection: Option<SelectionRect>) {
            self.count.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push((frame.viewport, selection));
        }
    }

    fn slot() -> Arc<FrameSlot> {
        Arc::new(FrameSlot::new(RenderedFrame::blank(
            Viewport::DEFAULT,
            ImageDimensions::new(2, 2, 2).unwrap(),
        )))
    }

    fn wait_until(timeout: Duration, condition: impl Fn() -> bool) {
        let start = Instant::now();
        while !condition() && start.elapsed() < timeout {
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_presents_repeatedly_at_interval() {
        let sink = Arc::new(RecordingSink::default());
        let mut presentation = PresentationLoop::spawn(
            slot(),
            Arc::new(SelectionCell::default()),
            Arc::clone(&sink) as Arc<dyn DisplaySink>,
            Duration::from_millis(5),
        )
        .unwrap();

        wait_until(Duration::from_secs(2), || {
            sink.count.load(Ordering::SeqCst) >= 3
        });
        presentation.stop();

        assert!(sink.count.load(Ordering::SeqCst) >= 3);
    }

    #[test]
    fn test_stop_is_prompt_and_final() {
        let sink = Arc::new(RecordingSink::default());
        let mut presentation = PresentationLoop::spawn(
            slot(),
            Arc::new(SelectionCell::default()),
            Arc::clone(&sink) as Arc<dyn DisplaySink>,
            Duration::from_secs(60),
        )
        .unwrap();
        wait_until(Duration::from_secs(2), || {
            sink.count.load(Ordering::SeqCst) >= 1
        });

        let start = Instant::now();
        presentation.stop();
        let stopped_after = start.elapsed();
        let count_at_stop = sink.count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(50));

        assert!(stopped_after < Duration::from_secs(1));
        assert!(!presentation.is_running());
        assert_eq!(sink.count.load(Ordering::SeqCst), count_at_stop);
    }

    #[test]
    fn test_presents_latest_frame_and_selection() {
        let frame_slot = slot();
        let selection = Arc::new(SelectionCell::default());
        let sink = Arc::new(RecordingSink::default());
        let zoomed = Viewport::new(Complex::new(-1.0, 0.0), 0.5, 0.5).unwrap();
        let rect = SelectionRect::new(PixelPoint::new(0, 0), PixelPoint::new(1, 1));
        let mut presentation = PresentationLoop::spawn(
            Arc::clone(&frame_slot),
            Arc::clone(&selection),
            Arc::clone(&sink) as Arc<dyn DisplaySink>,
            Duration::from_millis(5),
        )
        .unwrap();

        frame_slot.publish(Arc::new(RenderedFrame::blank(
            zoomed,
            ImageDimensions::new(2, 2, 2).unwrap(),
        )));
        selection.set(rect);
        wait_until(Duration::from_secs(2), || {
            sink.seen.lock().unwrap().contains(&(zoomed, Some(rect)))
        });
        presentation.stop();

        assert!(sink.seen.lock().unwrap().contains(&(zoomed, Some(rect))));
    }

    #[test]
    fn test_drop_stops_loop() {
        let sink = Arc::new(RecordingSink::default());
        let presentation = PresentationLoop::spawn(
            slot(),
            Arc::new(SelectionCell::default()),
            Arc::clone(&sink) as Arc<dyn DisplaySink>,
            Duration::from_millis(5),
        )
        .unwrap();

        drop(presentation);
        let count = sink.count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(30));

        assert_eq!(sink.count.load(Ordering::SeqCst), count);
    }
}
