pub mod dielectric;
pub mod diffuse_light;
pub mod isotropic;
pub mod lambertian;
pub mod metal;

use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;

pub trait Material: Send + Sync {
    /// Decides how an incoming ray leaves the surface at `rec`.
    fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> ScatterRecord;
    /// Calculates the emitted light from HitRecord.
    fn emitted(&self, _ray_in: &Ray, _rec: &HitRecord) -> Vec3 {
        Vec3::zeros()
    }
    /// Density of the material's own scattering distribution at `scattered`.
    /// Only meaningful for materials producing `ScatterRecord::Diffuse`, and it must
    /// equal the density of the pdf they return there.
    fn scattering_pdf(&self, _ray: &Ray, _rec: &HitRecord, _scattered: &Ray) -> f64 {
        0.0
    }
}

/// * `n` - must be normalized
pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
    debug_assert!((n.norm() - 1.0).abs() < 1e-3);
    v - 2.0 * v.dot(n) * n
}

/// Snell refraction of `v` through a surface with normal `n` (facing `v`'s origin side),
/// `r` = n_incident / n_transmitted. None on total internal reflection.
pub fn refract(v: &Vec3, n: &Vec3, r: f64) -> Option<Vec3> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let d = 1.0 - r * r * (1.0 - dt * dt);
    if d > 0.0 {
        Some(r * (uv - n * dt) - n * d.sqrt())
    } else {
        None
    }
}
