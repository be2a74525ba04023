pub mod constant;
pub mod cosine;
pub mod hitable;
pub mod mixture;

use crate::aliases::{RandGen, Vec2, Vec3};
use crate::pdf::constant::ConstantPdf;
use crate::pdf::cosine::CosinePdf;
use rand::Rng;
use std::f64::consts::PI;

/// Probability distribution function on directions
pub trait Pdf {
    /// Probability density at a direction.
    /// dir is not required to be normalized
    fn density(&self, dir: &Vec3) -> f64;
    /// Generates a random direction following this pdf.
    fn generate(&self, rng: &mut RandGen) -> Vec3;
}

/// The finite distributions a material can hand out with a diffuse scatter.
/// Lives on the stack of the scatter call that produced it.
pub enum ScatterPdf {
    Cosine(CosinePdf),
    Uniform(ConstantPdf),
}

impl Pdf for ScatterPdf {
    fn density(&self, dir: &Vec3) -> f64 {
        match self {
            ScatterPdf::Cosine(pdf) => pdf.density(dir),
            ScatterPdf::Uniform(pdf) => pdf.density(dir),
        }
    }
    fn generate(&self, rng: &mut RandGen) -> Vec3 {
        match self {
            ScatterPdf::Cosine(pdf) => pdf.generate(rng),
            ScatterPdf::Uniform(pdf) => pdf.generate(rng),
        }
    }
}

pub fn rnd_in_unit_sphere(rng: &mut RandGen) -> Vec3 {
    loop {
        let p = Vec3::new(
            2.0 * rng.gen::<f64>() - 1.0,
            2.0 * rng.gen::<f64>() - 1.0,
            2.0 * rng.gen::<f64>() - 1.0,
        );
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

pub fn rnd_in_unit_disc(rng: &mut RandGen) -> Vec2 {
    loop {
        let p = Vec2::new(2.0 * rng.gen::<f64>() - 1.0, 2.0 * rng.gen::<f64>() - 1.0);
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniformly distributed point on the unit sphere.
pub fn random_unit_vector(rng: &mut RandGen) -> Vec3 {
    random_in_cone(-1.0, rng)
}

/// Calculates a random point on a unit hemisphere (x^2+y^2+z^2=1, z>=0)
/// such that pdf(d)/sin(t) ~= cos(t) where t is angle between d and n=(0,0,1)
pub fn random_cosine_direction(rng: &mut RandGen) -> Vec3 {
    let r0 = rng.gen::<f64>();
    let rr0 = r0.sqrt();
    let r1 = rng.gen::<f64>();
    let angle = 2.0 * PI * r1;
    let z = (1.0 - r0).sqrt();
    let x = angle.cos() * rr0;
    let y = angle.sin() * rr0;
    Vec3::new(x, y, z)
}

/// Generate uniformly a random (normalized) direction vector in a cone around +z
pub fn random_in_cone(cos_half_angle: f64, rng: &mut RandGen) -> Vec3 {
    let r1 = rng.gen::<f64>();
    let r2 = rng.gen::<f64>();
    let z = 1.0 + r1 * (cos_half_angle - 1.0);
    let sine = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * r2;
    let x = phi.cos() * sine;
    let y = phi.sin() * sine;
    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use crate::aliases::RandGen;
    use crate::pdf::{random_cosine_direction, random_in_cone, rnd_in_unit_disc, rnd_in_unit_sphere};
    use rand::SeedableRng;

    #[test]
    fn samplers_stay_in_their_domains() {
        let mut rng = RandGen::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(rnd_in_unit_sphere(&mut rng).norm() < 1.0);
            assert!(rnd_in_unit_disc(&mut rng).norm() < 1.0);
            let c = random_cosine_direction(&mut rng);
            assert!((c.norm() - 1.0).abs() < 1e-9 && c[2] >= 0.0);
            let cone = random_in_cone(0.9, &mut rng);
            assert!((cone.norm() - 1.0).abs() < 1e-9 && cone[2] >= 0.9 - 1e-12);
        }
    }
}
