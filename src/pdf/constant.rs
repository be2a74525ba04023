use super::Pdf;
use crate::aliases::{RandGen, Vec3};
use crate::pdf::random_unit_vector;
use std::f64::consts::PI;

/// Uniform density over the whole sphere of directions.
pub struct ConstantPdf;

impl Pdf for ConstantPdf {
    fn density(&self, _dir: &Vec3) -> f64 {
        1.0 / (4.0 * PI)
    }
    fn generate(&self, rng: &mut RandGen) -> Vec3 {
        random_unit_vector(rng)
    }
}

impl ConstantPdf {
    pub fn new() -> Self {
        ConstantPdf {}
    }
}

impl Default for ConstantPdf {
    fn default() -> Self {
        Self::new()
    }
}
