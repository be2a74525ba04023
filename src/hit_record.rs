use crate::affine::Affine;
use crate::aliases::{Vec2, Vec3};
use crate::material::Material;

/// A single ray/surface intersection. Built fresh by each `Hitable::hit` call.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    pub t: f64,
    pub point: Vec3,
    pub tex_coord: Vec2,
    pub normal: Vec3,
    pub material: &'a dyn Material,
    pub time: f64,
}

impl<'a> HitRecord<'a> {
    pub fn get_transformed(&self, tr: &Affine) -> HitRecord<'a> {
        HitRecord {
            t: self.t,
            point: tr.act_point(&self.point),
            tex_coord: self.tex_coord,
            normal: tr.act_2_vec(&self.normal).normalize(),
            material: self.material,
            time: self.time,
        }
    }
    /// The nearer of two optional hits.
    pub fn min_opt(x: Option<HitRecord<'a>>, y: Option<HitRecord<'a>>) -> Option<HitRecord<'a>> {
        match (x, y) {
            (Some(a), Some(b)) => Some(if b.t < a.t { b } else { a }),
            (a, None) => a,
            (None, b) => b,
        }
    }
}
