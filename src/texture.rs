pub mod checker;
pub mod constant;
pub mod image;
pub mod noise;

use crate::aliases::{Vec2, Vec3};

/// Spatially varying albedo or emission.
pub trait Texture: Send + Sync {
    /// Linear RGB at surface coordinates `uv` and world point `p`.
    /// Solid textures read only `p`, bitmaps only `uv`.
    fn value(&self, uv: &Vec2, p: &Vec3) -> Vec3;
}
