use crate::aabb::Aabb;
use crate::affine::Affine;
use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::ray::Ray;
use std::sync::Arc;

/// Places an object in the world by a rigid motion (translation and/or rotation).
pub struct Transform {
    original: Arc<dyn Hitable>,
    transform: Affine,     // object space -> world space
    inv_transform: Affine, // world space -> object space
}

impl Transform {
    pub fn new(original: Arc<dyn Hitable>, tr: &Affine) -> Self {
        Transform {
            original,
            transform: *tr,
            inv_transform: tr.inverse(),
        }
    }
    pub fn translate(original: Arc<dyn Hitable>, offset: &Vec3) -> Self {
        Self::new(original, &Affine::translate(offset))
    }
    /// Rotation about the world y-axis.
    pub fn rotate_y(original: Arc<dyn Hitable>, degrees: f64) -> Self {
        Self::new(original, &Affine::rotation_y(degrees))
    }
}

impl Hitable for Transform {
    fn hit<'s>(
        &'s self,
        ray: &Ray,
        t_min: f64,
        t_max: f64,
        rng: &mut RandGen,
    ) -> Option<HitRecord<'s>> {
        self.original
            .hit(&ray.get_transformed(&self.inv_transform), t_min, t_max, rng)
            .map(|rec| rec.get_transformed(&self.transform))
    }
    fn bounding_box(&self, time_0: f64, time_1: f64) -> Option<Aabb> {
        self.original
            .bounding_box(time_0, time_1)
            .map(|bbox| bbox.get_transformed(&self.transform))
    }
    fn random_direction_from(&self, origin: &Vec3, rng: &mut RandGen) -> Vec3 {
        let local_origin = self.inv_transform.act_point(origin);
        let local_dir = self.original.random_direction_from(&local_origin, rng);
        self.transform.act_vec(&local_dir)
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f64 {
        self.original.direction_density(
            &self.inv_transform.act_point(origin),
            &self.inv_transform.act_vec(dir),
        )
    }
}
