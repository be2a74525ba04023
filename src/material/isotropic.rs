use crate::aliases::RandGen;
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::pdf::constant::ConstantPdf;
use crate::pdf::ScatterPdf;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;
use crate::texture::Texture;
use std::f64::consts::PI;
use std::sync::Arc;

/// Phase function of a participating medium: scatters uniformly in all directions.
pub struct Isotropic {
    pub albedo: Arc<dyn Texture>,
}

impl Isotropic {
    pub fn new(albedo: Arc<dyn Texture>) -> Self {
        Isotropic { albedo }
    }
}

impl Material for Isotropic {
    fn scatter(&self, _ray: &Ray, rec: &HitRecord, _rng: &mut RandGen) -> ScatterRecord {
        ScatterRecord::Diffuse {
            attenuation: self.albedo.value(&rec.tex_coord, &rec.point),
            pdf: ScatterPdf::Uniform(ConstantPdf::new()),
        }
    }
    fn scattering_pdf(&self, _ray: &Ray, _rec: &HitRecord, _scattered: &Ray) -> f64 {
        1.0 / (4.0 * PI)
    }
}
