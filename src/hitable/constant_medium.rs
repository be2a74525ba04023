use crate::aabb::Aabb;
use crate::aliases::{RandGen, Vec2, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::material::isotropic::Isotropic;
use crate::ray::Ray;
use crate::texture::Texture;
use rand::Rng;
use std::sync::Arc;

/// A homogeneous participating medium filling a closed boundary.
pub struct ConstantMedium {
    boundary: Arc<dyn Hitable>,
    density: f64,
    phase_function: Isotropic,
}

impl ConstantMedium {
    pub fn new(boundary: Arc<dyn Hitable>, density: f64, albedo: Arc<dyn Texture>) -> Self {
        ConstantMedium {
            boundary,
            density,
            phase_function: Isotropic::new(albedo),
        }
    }
}

impl Hitable for ConstantMedium {
    fn hit<'s>(
        &'s self,
        ray: &Ray,
        t_min: f64,
        t_max: f64,
        rng: &mut RandGen,
    ) -> Option<HitRecord<'s>> {
        // the two boundary crossings of the whole line, clipped to the interval
        let enter = self.boundary.hit(ray, f64::MIN, f64::MAX, rng)?;
        let exit = self.boundary.hit(ray, enter.t + 0.0001, f64::MAX, rng)?;
        let t_enter = enter.t.max(t_min).max(0.0);
        let t_exit = exit.t.min(t_max);
        if t_enter >= t_exit {
            return None;
        }
        let speed = ray.direction.norm();
        let distance_inside_boundary = (t_exit - t_enter) * speed;
        let hit_distance = -(1.0 - rng.gen::<f64>()).ln() / self.density;
        if hit_distance >= distance_inside_boundary {
            return None;
        }
        let t = t_enter + hit_distance / speed;
        Some(HitRecord {
            t,
            point: ray.point_at(t),
            tex_coord: Vec2::zeros(),
            normal: Vec3::new(1.0, 0.0, 0.0), // arbitrary
            material: &self.phase_function,
            time: ray.time,
        })
    }
    fn bounding_box(&self, time_0: f64, time_1: f64) -> Option<Aabb> {
        self.boundary.bounding_box(time_0, time_1)
    }
}
