use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;
use crate::texture::Texture;
use std::sync::Arc;

/// An emitter. Absorbs everything it is hit by.
pub struct DiffuseLight {
    pub emit: Arc<dyn Texture>,
    one_sided: bool,
}

impl DiffuseLight {
    /// Emits toward both sides of the surface.
    pub fn new(emit: Arc<dyn Texture>) -> Self {
        DiffuseLight {
            emit,
            one_sided: false,
        }
    }
    /// Emits only toward the side the surface normal points to.
    pub fn one_sided(emit: Arc<dyn Texture>) -> Self {
        DiffuseLight {
            emit,
            one_sided: true,
        }
    }
}

impl Material for DiffuseLight {
    fn scatter(&self, _ray: &Ray, _rec: &HitRecord, _rng: &mut RandGen) -> ScatterRecord {
        ScatterRecord::Absorbed
    }
    fn emitted(&self, ray_in: &Ray, rec: &HitRecord) -> Vec3 {
        if self.one_sided && rec.normal.dot(&ray_in.direction) >= 0.0 {
            Vec3::zeros()
        } else {
            self.emit.value(&rec.tex_coord, &rec.point)
        }
    }
}
