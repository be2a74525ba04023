use thiserror::Error;

/// Failures while assembling a scene.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("cannot build a BVH over an empty set of hitables")]
    EmptyBvh,
    #[error("hitable #{index} has no bounding box and cannot be put in a BVH")]
    UnboundedPrimitive { index: usize },
}

/// Failures of the render entry point. Nothing inside the sampling loop fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("image dimensions must be positive (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },
    #[error("at least one sample per pixel is required")]
    ZeroSamples,
    #[error("at least one worker thread is required")]
    ZeroThreads,
    #[error("render cancelled after {rows_done} rows")]
    Cancelled { rows_done: usize },
    #[error("a render worker panicked")]
    WorkerPanicked,
}
