use crate::aliases::{RandGen, Vec3};
use crate::hitable::Hitable;
use crate::pdf::Pdf;

/// Directions from a shading point toward a light shape.
/// Both sampling and density are delegated to the shape itself.
pub struct HitablePdf<'a> {
    origin: Vec3,
    target: &'a dyn Hitable,
}

impl<'a> HitablePdf<'a> {
    pub fn new(target: &'a dyn Hitable, origin: &Vec3) -> Self {
        HitablePdf {
            origin: *origin,
            target,
        }
    }
}

impl<'a> Pdf for HitablePdf<'a> {
    fn density(&self, dir: &Vec3) -> f64 {
        self.target.direction_density(&self.origin, dir)
    }
    fn generate(&self, rng: &mut RandGen) -> Vec3 {
        let dir = self.target.random_direction_from(&self.origin, rng);
        debug_assert!(dir.iter().all(|c| c.is_finite()));
        dir
    }
}
