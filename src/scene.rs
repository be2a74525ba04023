use crate::background::Background;
use crate::camera::Camera;
use crate::hitable::Hitable;
use std::sync::Arc;

/// Everything a render reads. Built once, shared read-only by every worker.
pub struct Scene {
    pub hitables: Arc<dyn Hitable>, // rendered hitables
    /// Shape diffuse bounces are importance sampled toward (usually the lights).
    pub light: Option<Arc<dyn Hitable>>,
    pub camera: Camera,
    pub bg: Arc<dyn Background>,
}
