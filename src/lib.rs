pub mod aabb;
pub mod affine;
pub mod aliases;
pub mod background;
pub mod camera;
pub mod error;
pub mod hit_record;
pub mod hitable;
pub mod integrator;
pub mod material;
pub mod onb;
pub mod pdf;
pub mod ray;
pub mod render;
pub mod scatter_record;
pub mod scene;
pub mod texture;
pub mod util;

pub use crate::error::{RenderError, SceneError};
pub use crate::integrator::radiance;
pub use crate::render::{render, render_with_cancel, Image, RenderConfig};
pub use crate::scene::Scene;
