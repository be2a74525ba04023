use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::material::{reflect, Material};
use crate::pdf::rnd_in_unit_sphere;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;

pub struct Metal {
    pub albedo: Vec3,
    pub fuzziness: f64,
}

impl Metal {
    /// `fuzziness` is clamped to at most 1.
    pub fn new(albedo: &Vec3, fuzziness: f64) -> Self {
        Metal {
            albedo: *albedo,
            fuzziness: fuzziness.min(1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> ScatterRecord {
        let fuz = if self.fuzziness == 0.0 {
            Vec3::zeros()
        } else {
            self.fuzziness * rnd_in_unit_sphere(rng)
        };
        let reflected = reflect(&ray.direction.normalize(), &rec.normal) + fuz;
        if reflected.dot(&rec.normal) <= 0.0 {
            return ScatterRecord::Absorbed;
        }
        ScatterRecord::Specular {
            ray: Ray::new(&rec.point, &reflected, ray.time),
            attenuation: self.albedo,
        }
    }
}
