use crate::aabb::Aabb;
use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::ray::Ray;
use std::sync::Arc;

/// Reports the wrapped object's hits with the normal negated.
pub struct FlipNormals(Arc<dyn Hitable>);

impl FlipNormals {
    pub fn new(original: Arc<dyn Hitable>) -> Self {
        FlipNormals(original)
    }
}

impl Hitable for FlipNormals {
    fn hit<'s>(
        &'s self,
        ray: &Ray,
        t_min: f64,
        t_max: f64,
        rng: &mut RandGen,
    ) -> Option<HitRecord<'s>> {
        self.0.hit(ray, t_min, t_max, rng).map(|mut rec| {
            rec.normal = -rec.normal;
            rec
        })
    }
    fn bounding_box(&self, time_0: f64, time_1: f64) -> Option<Aabb> {
        self.0.bounding_box(time_0, time_1)
    }
    fn random_direction_from(&self, origin: &Vec3, rng: &mut RandGen) -> Vec3 {
        self.0.random_direction_from(origin, rng)
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f64 {
        self.0.direction_density(origin, dir)
    }
}
