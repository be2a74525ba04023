use crate::aliases::Vec3;
use crate::pdf::ScatterPdf;
use crate::ray::Ray;

/// Outcome of one scatter event.
/// The pdf of a diffuse outcome is owned by the outcome itself and dies with it.
pub enum ScatterRecord {
    /// Delta distribution: the only possible outgoing ray.
    Specular { ray: Ray, attenuation: Vec3 },
    /// Finite distribution to be importance sampled by the integrator.
    Diffuse { attenuation: Vec3, pdf: ScatterPdf },
    Absorbed,
}
