use crate::aabb::Aabb;
use crate::aliases::{RandGen, Vec2, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::material::Material;
use crate::onb::Onb;
use crate::pdf::random_in_cone;
use crate::ray::Ray;
use std::f64::consts::PI;
use std::sync::Arc;

pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Arc<dyn Material>,
}

impl Sphere {
    pub fn new(center: &Vec3, radius: f64, material: Arc<dyn Material>) -> Self {
        Sphere {
            center: *center,
            radius,
            material,
        }
    }
    /// Calculates the parameter t of the ray at which it hits this Sphere.
    pub fn hit_core(center: &Vec3, radius: f64, ray: &Ray, t_min: f64, t_max: f64) -> Option<f64> {
        let oc = ray.origin - center;
        let a = ray.direction.dot(&ray.direction);
        let b = oc.dot(&ray.direction);
        let c = oc.dot(&oc) - radius * radius;
        let disc = b * b - a * c;
        if disc <= 0.0 {
            return None;
        }
        let disc_rt = disc.sqrt();
        let t = (-b - disc_rt) / a;
        if t_min < t && t < t_max {
            return Some(t);
        }
        let t = (-b + disc_rt) / a;
        if t_min < t && t < t_max {
            return Some(t);
        }
        None
    }
    /// convert a point on unit sphere to a uv coordinate
    pub fn get_uv(p: &Vec3) -> Vec2 {
        let phi = f64::atan2(p[2], p[0]);
        let theta = f64::asin(p[1].min(1.0).max(-1.0));
        Vec2::new(1.0 - (phi + PI) / (2.0 * PI), (theta + PI / 2.0) / PI)
    }
    fn record<'s>(
        center: &Vec3,
        radius: f64,
        material: &'s dyn Material,
        ray: &Ray,
        t: f64,
    ) -> HitRecord<'s> {
        let point = ray.point_at(t);
        let normal = (point - center) / radius;
        HitRecord {
            t,
            point,
            tex_coord: Sphere::get_uv(&normal),
            normal,
            material,
            time: ray.time,
        }
    }
}

impl Hitable for Sphere {
    fn hit<'s>(
        &'s self,
        ray: &Ray,
        t_min: f64,
        t_max: f64,
        _rng: &mut RandGen,
    ) -> Option<HitRecord<'s>> {
        Sphere::hit_core(&self.center, self.radius, ray, t_min, t_max)
            .map(|t| Sphere::record(&self.center, self.radius, self.material.as_ref(), ray, t))
    }
    fn bounding_box(&self, _time_0: f64, _time_1: f64) -> Option<Aabb> {
        let rad_vec = Vec3::repeat(self.radius.abs());
        Some(Aabb::new(
            &(self.center - rad_vec),
            &(self.center + rad_vec),
        ))
    }
    fn random_direction_from(&self, origin: &Vec3, rng: &mut RandGen) -> Vec3 {
        let to_center = self.center - origin;
        let cosine_max = cone_cosine(self.radius, to_center.norm_squared());
        let vec_local = random_in_cone(cosine_max, rng);
        Onb::build_from_w(&to_center).local_to_global_vec(&vec_local)
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f64 {
        let to_center = self.center - origin;
        let cosine = to_center.normalize().dot(&dir.normalize());
        let cosine_max = cone_cosine(self.radius, to_center.norm_squared());
        if cosine > cosine_max {
            1.0 / (2.0 * PI * (1.0 - cosine_max))
        } else {
            0.0
        }
    }
}

/// Cosine of the half angle of the cone a sphere subtends from distance sqrt(dist_squared).
/// Origins inside the sphere see the whole sphere of directions.
fn cone_cosine(radius: f64, dist_squared: f64) -> f64 {
    let ratio = radius * radius / dist_squared;
    if ratio >= 1.0 {
        -1.0
    } else {
        (1.0 - ratio).sqrt()
    }
}

/// A sphere whose center moves linearly between two keyframes.
pub struct MovingSphere {
    center_0: Vec3, // center at time = time_0
    center_1: Vec3, // center at time = time_1
    time_0: f64,
    time_1: f64,
    radius: f64,
    material: Arc<dyn Material>,
}

impl MovingSphere {
    pub fn new(
        center_0: &Vec3,
        center_1: &Vec3,
        time_0: f64,
        time_1: f64,
        radius: f64,
        material: Arc<dyn Material>,
    ) -> Self {
        MovingSphere {
            center_0: *center_0,
            center_1: *center_1,
            time_0,
            time_1,
            radius,
            material,
        }
    }
    pub fn center_at(&self, time: f64) -> Vec3 {
        if self.time_1 == self.time_0 {
            return self.center_0;
        }
        self.center_0
            + ((time - self.time_0) / (self.time_1 - self.time_0)) * (self.center_1 - self.center_0)
    }
    pub fn bounding_box_at(&self, time: f64) -> Aabb {
        let rad_vec = Vec3::repeat(self.radius.abs());
        let center = self.center_at(time);
        Aabb::new(&(center - rad_vec), &(center + rad_vec))
    }
}

impl Hitable for MovingSphere {
    fn hit<'s>(
        &'s self,
        ray: &Ray,
        t_min: f64,
        t_max: f64,
        _rng: &mut RandGen,
    ) -> Option<HitRecord<'s>> {
        let center = self.center_at(ray.time);
        Sphere::hit_core(&center, self.radius, ray, t_min, t_max)
            .map(|t| Sphere::record(&center, self.radius, self.material.as_ref(), ray, t))
    }
    fn bounding_box(&self, time_0: f64, time_1: f64) -> Option<Aabb> {
        Some(Aabb::unite(
            &self.bounding_box_at(time_0),
            &self.bounding_box_at(time_1),
        ))
    }
}
