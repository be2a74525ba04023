pub mod bvh_node;
pub mod constant_medium;
pub mod cube;
pub mod flip_normals;
pub mod hitable_list;
pub mod rectangle;
pub mod sphere;
pub mod transform;

use crate::aabb::Aabb;
use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::pdf::random_unit_vector;
use crate::ray::Ray;
use std::f64::consts::PI;

pub use crate::hitable::cube::cube;

/// Anything a ray can be traced against.
pub trait Hitable: Send + Sync {
    /// The nearest intersection with parameter in (t_min, t_max).
    /// `rng` is consumed only by stochastic geometry (participating media).
    fn hit<'s>(
        &'s self,
        ray: &Ray,
        t_min: f64,
        t_max: f64,
        rng: &mut RandGen,
    ) -> Option<HitRecord<'s>>;
    /// A box enclosing this object at every time in [time_0, time_1],
    /// or None for unbounded objects.
    fn bounding_box(&self, time_0: f64, time_1: f64) -> Option<Aabb>;
    /// Samples a direction from `origin` toward this object (used as a light shape).
    /// The default is the uniform sphere, which matches the default density.
    fn random_direction_from(&self, _origin: &Vec3, rng: &mut RandGen) -> Vec3 {
        random_unit_vector(rng)
    }
    /// Solid-angle density of `random_direction_from` at `dir`.
    fn direction_density(&self, _origin: &Vec3, _dir: &Vec3) -> f64 {
        1.0 / (4.0 * PI)
    }
}
