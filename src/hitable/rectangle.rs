use crate::aabb::Aabb;
use crate::aliases::{RandGen, Vec2, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::material::Material;
use crate::ray::Ray;
use rand::Rng;
use std::sync::Arc;

/// Half thickness given to the flat bounding box of a rectangle.
const BBOX_MARGIN: f64 = 0.0001;

/// The coordinate plane a rectangle lies in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plane {
    XY, // normal +z
    XZ, // normal +y
    YZ, // normal +x
}

impl Plane {
    /// (first in-plane axis, second in-plane axis, normal axis)
    fn axes(self) -> (usize, usize, usize) {
        match self {
            Plane::XY => (0, 1, 2),
            Plane::XZ => (0, 2, 1),
            Plane::YZ => (1, 2, 0),
        }
    }
}

/// An axis-aligned rectangle [a0,a1] x [b0,b1] on the plane normal_axis = k.
/// The front side faces the positive normal axis.
pub struct Rectangle {
    plane: Plane,
    a0: f64,
    a1: f64,
    b0: f64,
    b1: f64,
    k: f64,
    material: Arc<dyn Material>,
}

impl Rectangle {
    pub fn new(
        plane: Plane,
        (a0, a1): (f64, f64),
        (b0, b1): (f64, f64),
        k: f64,
        material: Arc<dyn Material>,
    ) -> Self {
        Rectangle {
            plane,
            a0: a0.min(a1),
            a1: a0.max(a1),
            b0: b0.min(b1),
            b1: b0.max(b1),
            k,
            material,
        }
    }
    pub fn xy(x: (f64, f64), y: (f64, f64), z: f64, material: Arc<dyn Material>) -> Self {
        Self::new(Plane::XY, x, y, z, material)
    }
    pub fn xz(x: (f64, f64), z: (f64, f64), y: f64, material: Arc<dyn Material>) -> Self {
        Self::new(Plane::XZ, x, z, y, material)
    }
    pub fn yz(y: (f64, f64), z: (f64, f64), x: f64, material: Arc<dyn Material>) -> Self {
        Self::new(Plane::YZ, y, z, x, material)
    }
    pub fn normal(&self) -> Vec3 {
        let mut n = Vec3::zeros();
        n[self.plane.axes().2] = 1.0;
        n
    }
    pub fn area(&self) -> f64 {
        (self.a1 - self.a0) * (self.b1 - self.b0)
    }
    /// Plane crossing inside the rectangle: (t, u, v).
    fn hit_core(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<(f64, f64, f64)> {
        let (ia, ib, ik) = self.plane.axes();
        let t = (self.k - ray.origin[ik]) / ray.direction[ik];
        // NaN (ray parallel to the plane) fails both comparisons
        if !(t_min < t && t < t_max) {
            return None;
        }
        let a = ray.origin[ia] + t * ray.direction[ia];
        let b = ray.origin[ib] + t * ray.direction[ib];
        if a < self.a0 || a > self.a1 || b < self.b0 || b > self.b1 {
            return None;
        }
        Some((
            t,
            (a - self.a0) / (self.a1 - self.a0),
            (b - self.b0) / (self.b1 - self.b0),
        ))
    }
    fn point_at_ab(&self, a: f64, b: f64) -> Vec3 {
        let (ia, ib, ik) = self.plane.axes();
        let mut p = Vec3::zeros();
        p[ia] = a;
        p[ib] = b;
        p[ik] = self.k;
        p
    }
}

impl Hitable for Rectangle {
    fn hit<'s>(
        &'s self,
        ray: &Ray,
        t_min: f64,
        t_max: f64,
        _rng: &mut RandGen,
    ) -> Option<HitRecord<'s>> {
        self.hit_core(ray, t_min, t_max).map(|(t, u, v)| HitRecord {
            t,
            point: ray.point_at(t),
            tex_coord: Vec2::new(u, v),
            normal: self.normal(),
            material: self.material.as_ref(),
            time: ray.time,
        })
    }
    fn bounding_box(&self, _time_0: f64, _time_1: f64) -> Option<Aabb> {
        Some(
            Aabb::new(
                &self.point_at_ab(self.a0, self.b0),
                &self.point_at_ab(self.a1, self.b1),
            )
            .padded(BBOX_MARGIN),
        )
    }
    fn random_direction_from(&self, origin: &Vec3, rng: &mut RandGen) -> Vec3 {
        let a = self.a0 + rng.gen::<f64>() * (self.a1 - self.a0);
        let b = self.b0 + rng.gen::<f64>() * (self.b1 - self.b0);
        self.point_at_ab(a, b) - origin
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f64 {
        let ray = Ray::new(origin, dir, 0.0);
        match self.hit_core(&ray, 0.001, f64::MAX) {
            Some((t, _, _)) => {
                let dist_squared = t * t * dir.norm_squared();
                let cosine = (dir.dot(&self.normal()) / dir.norm()).abs();
                dist_squared / (cosine * self.area())
            }
            None => 0.0,
        }
    }
}
