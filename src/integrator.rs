use crate::aliases::{RandGen, Vec3};
use crate::pdf::hitable::HitablePdf;
use crate::pdf::mixture::MixturePdf;
use crate::pdf::Pdf;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;
use crate::scene::Scene;

/// Bounce cap of a traced path.
pub const MAX_DEPTH: usize = 50;

/// Rays restart this far along to avoid hitting the surface they left.
const T_MIN: f64 = 0.001;

/// Estimates the radiance arriving along `ray`.
///
/// Each bounce adds the emission of the surface hit, weighted by the path
/// throughput so far. Specular bounces multiply the throughput by their
/// attenuation. Diffuse bounces sample a 50/50 mixture of the light shape and the
/// material's own pdf, and weight by `scattering_pdf / mixture density`.
/// At `max_depth` bounces only the emission of the last hit counts.
///
/// A vanishing mixture density yields NaN or Inf here; callers sanitize the
/// per-sample result.
pub fn radiance(ray: &Ray, scene: &Scene, max_depth: usize, rng: &mut RandGen) -> Vec3 {
    let mut light_out = Vec3::zeros();
    let mut throughput = Vec3::repeat(1.0);
    let mut ray = *ray;
    for depth in 0..=max_depth {
        let rec = match scene.hitables.hit(&ray, T_MIN, f64::MAX, rng) {
            Some(rec) => rec,
            None => {
                light_out += throughput.component_mul(&scene.bg.color(&ray));
                break;
            }
        };
        light_out += throughput.component_mul(&rec.material.emitted(&ray, &rec));
        if depth == max_depth {
            break;
        }
        match rec.material.scatter(&ray, &rec, rng) {
            ScatterRecord::Absorbed => break,
            ScatterRecord::Specular {
                ray: out_ray,
                attenuation,
            } => {
                // delta distribution: already perfectly sampled
                throughput = throughput.component_mul(&attenuation);
                ray = out_ray;
            }
            ScatterRecord::Diffuse { attenuation, pdf } => {
                let light_pdf = scene
                    .light
                    .as_ref()
                    .map(|light| HitablePdf::new(light.as_ref(), &rec.point));
                let mixture = match &light_pdf {
                    Some(light_pdf) => MixturePdf::half(light_pdf, &pdf),
                    None => MixturePdf::zero(&pdf),
                };
                let dir = mixture.generate(rng);
                let out_ray = Ray::new(&rec.point, &dir, ray.time);
                let weight =
                    rec.material.scattering_pdf(&ray, &rec, &out_ray) / mixture.density(&dir);
                throughput = throughput.component_mul(&(weight * attenuation));
                ray = out_ray;
            }
        }
        if throughput == Vec3::zeros() {
            break;
        }
    }
    light_out
}
