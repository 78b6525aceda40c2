use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_fractal::ports::compute_backend::{ComputeBackend, ComputeError};
use crate::core::data::image_dimensions::ImageDimensions;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use rayon::{ThreadBuilder, ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::error::Error;
use std::fmt;
use std::io;
use std::thread::{self, JoinHandle};

const BACKEND_NAME: &str = "rayon-cpu";

#[derive(Debug)]
pub enum ComputeInitError {
    ZeroThreads,
    ThreadPool(ThreadPoolBuildError),
}

impl fmt::Display for ComputeInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroThreads => write!(f, "compute thread count must be greater than zero"),
            Self::ThreadPool(err) => write!(f, "failed to build compute thread pool: {}", err),
        }
    }
}

impl Error for ComputeInitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroThreads => None,
            Self::ThreadPool(err) => Some(err),
        }
    }
}

impl From<ThreadPoolBuildError> for ComputeInitError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

/// Join handles of the pool's worker threads.
///
/// Declared after the pool in [`RayonComputeContext`] so the pool is dropped
/// (and its threads told to exit) before these are joined.
struct ComputeThreads(Vec<JoinHandle<()>>);

impl Drop for ComputeThreads {
    fn drop(&mut self) {
        let count = self.0.len();
        for handle in self.0.drain(..) {
            if handle.join().is_err() {
                log::error!("compute thread panicked");
            }
        }
        log::debug!("joined {} compute threads", count);
    }
}

fn spawn_compute_thread(
    worker: ThreadBuilder,
    handles: &mut Vec<JoinHandle<()>>,
) -> io::Result<()> {
    let mut builder = thread::Builder::new();
    if let Some(name) = worker.name() {
        builder = builder.name(name.to_owned());
    }
    if let Some(stack_size) = worker.stack_size() {
        builder = builder.stack_size(stack_size);
    }

    handles.push(builder.spawn(move || worker.run())?);
    Ok(())
}

/// CPU compute backend owning a dedicated rayon pool.
///
/// The pool lives exactly as long as the context. Dropping the context shuts
/// the pool down and joins every worker thread before returning.
pub struct RayonComputeContext {
    pool: ThreadPool,
    threads: ComputeThreads,
}

impl RayonComputeContext {
    /// Builds the pool. `threads` of `None` lets rayon use available parallelism.
    pub fn create(threads: Option<usize>) -> Result<Self, ComputeInitError> {
        if threads == Some(0) {
            return Err(ComputeInitError::ZeroThreads);
        }

        let mut handles = Vec::new();
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads.unwrap_or(0))
            .thread_name(|index| format!("mandelbrot-compute-{}", index))
            .spawn_handler(|worker| spawn_compute_thread(worker, &mut handles))
            .build()?;

        log::info!(
            "compute backend {} ready with {} threads",
            BACKEND_NAME,
            pool.current_num_threads()
        );

        Ok(Self {
            pool,
            threads: ComputeThreads(handles),
        })
    }

    #[must_use]
    pub fn thread_count(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl ComputeBackend for RayonComputeContext {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    fn compute_iterations<C: CancelToken>(
        &mut self,
        viewport: Viewport,
        dimensions: ImageDimensions,
        iterations: &mut IterationBuffer,
        cancel: &C,
    ) -> Result<(), ComputeError> {
        if iterations.dimensions() != dimensions {
            return Err(ComputeError::DimensionMismatch {
                requested: dimensions,
                buffer: iterations.dimensions(),
            });
        }

        let algorithm = MandelbrotAlgorithm::new(dimensions.iteration_cap());

        generate_fractal_parallel_rayon_cancelable(
            &self.pool,
            viewport,
            dimensions,
            &algorithm,
            iterations.counts_mut(),
            cancel,
        )
        .map_err(ComputeError::Cancelled)
    }
}

impl Drop for RayonComputeContext {
    fn drop(&mut self) {
        log::info!(
            "releasing compute backend {} ({} threads)",
            BACKEND_NAME,
            self.threads.0.len()
        );
    }
}
