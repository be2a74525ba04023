use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::material::{reflect, refract, Material};
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;
use rand::Rng;

/// Clear glass-like material.
pub struct Dielectric {
    pub ref_idx: f64,
}

impl Dielectric {
    pub fn new(ref_idx: f64) -> Self {
        Dielectric { ref_idx }
    }
}

/// Approximation formula of probability of reflection when a light enter into a material
pub fn schlick_formula(cosine: f64, ref_idx: f64) -> f64 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

impl Material for Dielectric {
    fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> ScatterRecord {
        // r = relative refractive index
        // n = a normal vector facing the incoming ray
        // c = cosine(angle of incidence)
        let in_dir_dot_normal = ray.direction.dot(&rec.normal);
        let (r, n, c) = if in_dir_dot_normal > 0.0 {
            (
                self.ref_idx,
                -rec.normal,
                in_dir_dot_normal / ray.direction.norm(),
            )
        } else {
            (
                1.0 / self.ref_idx,
                rec.normal,
                -in_dir_dot_normal / ray.direction.norm(),
            )
        };
        let direction = match refract(&ray.direction, &n, r) {
            Some(refracted) => {
                // Schlick takes the angle on the optically thinner side:
                // the transmitted one when leaving the glass
                let cosine = if in_dir_dot_normal > 0.0 {
                    -refracted.dot(&n)
                } else {
                    c
                };
                if rng.gen::<f64>() < schlick_formula(cosine, r) {
                    reflect(&ray.direction.normalize(), &n)
                } else {
                    refracted
                }
            }
            None => reflect(&ray.direction.normalize(), &n),
        };
        ScatterRecord::Specular {
            ray: Ray::new(&rec.point, &direction, ray.time),
            attenuation: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{RandGen, Vec2, Vec3};
    use crate::hit_record::HitRecord;
    use crate::material::dielectric::{schlick_formula, Dielectric};
    use crate::material::Material;
    use crate::ray::Ray;
    use crate::scatter_record::ScatterRecord;
    use rand::SeedableRng;

    fn record(material: &dyn Material) -> HitRecord {
        HitRecord {
            t: 1.0,
            point: Vec3::zeros(),
            tex_coord: Vec2::zeros(),
            normal: Vec3::new(0.0, 1.0, 0.0),
            material,
            time: 0.0,
        }
    }

    #[test]
    fn schlick_limits() {
        assert!((schlick_formula(1.0, 1.5) - 0.04).abs() < 1e-12);
        assert!((schlick_formula(0.0, 1.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normal_incidence_mostly_refracts_straight_through() {
        let mut rng = RandGen::seed_from_u64(16);
        let mat = Dielectric::new(1.5);
        let rec = record(&mat);
        let ray = Ray::new(&Vec3::new(0.0, 1.0, 0.0), &Vec3::new(0.0, -1.0, 0.0), 0.0);
        let mut through = 0;
        const N: usize = 10_000;
        for _ in 0..N {
            match mat.scatter(&ray, &rec, &mut rng) {
                ScatterRecord::Specular { ray: out, attenuation } => {
                    assert_eq!(attenuation, Vec3::new(1.0, 1.0, 1.0));
                    if out.direction[1] < 0.0 {
                        through += 1;
                    }
                }
                _ => panic!("dielectric always scatters specularly"),
            }
        }
        // reflectance at normal incidence is 4%
        let ratio = through as f64 / N as f64;
        assert!((ratio - 0.96).abs() < 0.01, "ratio {}", ratio);
    }

    #[test]
    fn leaving_glass_uses_outside_angle() {
        let mut rng = RandGen::seed_from_u64(23);
        let mat = Dielectric::new(1.5);
        let rec = record(&mat);
        // 40 degrees from the normal inside, just under the critical angle (41.8)
        let theta = 40f64.to_radians();
        let dir = Vec3::new(theta.sin(), theta.cos(), 0.0);
        let ray = Ray::new(&(-dir), &dir, 0.0);
        let cos_out = (1.0 - (1.5 * theta.sin()).powi(2)).sqrt();
        let expected = schlick_formula(cos_out, 1.5);
        assert!(expected > 0.2);
        let mut reflected = 0;
        const N: usize = 20_000;
        for _ in 0..N {
            match mat.scatter(&ray, &rec, &mut rng) {
                ScatterRecord::Specular { ray: out, .. } => {
                    if out.direction[1] < 0.0 {
                        reflected += 1;
                    }
                }
                _ => panic!("dielectric always scatters specularly"),
            }
        }
        let ratio = reflected as f64 / N as f64;
        assert!((ratio - expected).abs() < 0.015, "{} vs {}", ratio, expected);
    }

    #[test]
    fn total_internal_reflection_from_inside() {
        let mut rng = RandGen::seed_from_u64(17);
        let mat = Dielectric::new(1.5);
        let rec = record(&mat);
        // leaving the glass at a grazing angle: beyond the critical angle
        let ray = Ray::new(&Vec3::new(-1.0, -0.1, 0.0), &Vec3::new(1.0, 0.1, 0.0), 0.0);
        for _ in 0..100 {
            match mat.scatter(&ray, &rec, &mut rng) {
                ScatterRecord::Specular { ray: out, .. } => assert!(out.direction[1] < 0.0),
                _ => panic!("dielectric always scatters specularly"),
            }
        }
    }
}
