use crate::controllers::interactive::data::frame_report::FrameReport;
use crate::controllers::interactive::dispatcher::ComputeDispatcher;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::frame_slot::FrameSlot;
use crate::controllers::interactive::ports::presenter::RenderEventPort;
use crate::controllers::interactive::ports::recompute_trigger::RecomputeTrigger;
use crate::core::actions::cancellation::SupersededToken;
use crate::core::actions::generate_fractal::ports::compute_backend::ComputeBackend;
use crate::core::data::viewport::Viewport;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Viewport)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    event_port: Arc<dyn RenderEventPort>,
}

/// Runs recomputes on a dedicated thread that owns the dispatcher.
///
/// Only the newest request is kept. Submitting while a recompute is running
/// cancels it, and a cancelled recompute reports nothing.
pub struct RenderWorker {
    shared: Arc<SharedState>,
    frame_slot: Arc<FrameSlot>,
    worker: Option<JoinHandle<()>>,
}

impl RenderWorker {
    pub fn spawn<B>(
        dispatcher: ComputeDispatcher<B>,
        event_port: Arc<dyn RenderEventPort>,
    ) -> io::Result<Self>
    where
        B: ComputeBackend + 'static,
    {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            event_port,
        });

        let frame_slot = dispatcher.frame_slot();
        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("mandelbrot-render".to_string())
            .spawn(move || {
                Self::worker_loop(&worker_shared, dispatcher);
            })?;

        Ok(Self {
            shared,
            frame_slot,
            worker: Some(worker),
        })
    }

    pub fn submit(&self, viewport: Viewport) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, viewport));
        }

        self.shared.wake.notify_one();

        generation
    }

    /// Stops the worker, cancelling any recompute in flight, and joins it.
    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("render worker panicked");
            }
            log::info!("render worker stopped");
        }
    }

    #[must_use]
    pub fn frame_slot(&self) -> Arc<FrameSlot> {
        Arc::clone(&self.frame_slot)
    }

    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop<B: ComputeBackend>(shared: &SharedState, mut dispatcher: ComputeDispatcher<B>) {
        loop {
            let (job_generation, viewport) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token =
                SupersededToken::new(job_generation, &shared.generation, &shared.shutdown);

            dispatcher.set_viewport(viewport);

            let start = Instant::now();
            let result = dispatcher.recompute_cancelable(&cancel_token);
            let render_duration = start.elapsed();

            match result {
                Ok(frame) => {
                    let current_gen = shared.generation.load(Ordering::Acquire);

                    if job_generation != current_gen {
                        continue;
                    }

                    log::debug!(
                        "render {} finished in {} ms",
                        job_generation,
                        render_duration.as_millis()
                    );

                    shared.event_port.present(RenderEvent::Frame(FrameReport {
                        generation: job_generation,
                        viewport: frame.viewport,
                        render_duration,
                    }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
                Err(err) if err.is_cancelled() => {
                    log::debug!("render {} superseded", job_generation);
                }
                Err(err) => {
                    let current_gen = shared.generation.load(Ordering::Acquire);

                    if job_generation != current_gen {
                        continue;
                    }

                    log::error!("render {} failed: {}", job_generation, err);

                    shared.event_port.present(RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message: err.to_string(),
                    }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
            }
        }
    }
}

impl RecomputeTrigger for RenderWorker {
    fn request_recompute(&self, viewport: Viewport) -> u64 {
        self.submit(viewport)
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
