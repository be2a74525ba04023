use crate::aliases::{Mat3, Vec3};
use nalgebra::{Rotation3, Vector3};

/// 3d invertible affine transformation
#[derive(Clone, Copy, Debug)]
pub struct Affine {
    a: Mat3,
    b: Vec3,
    a_inv: Mat3, // the inverse matrix of a
    a_det: f64,  // the determinant of a
}

impl Affine {
    /// The basic constructor.
    /// Only rigid motions are exposed: the light-sampling densities forwarded
    /// through `Transform` assume solid angles are preserved.
    fn new(a: &Mat3, b: &Vec3) -> Self {
        // rotations and the identity are always invertible
        let a_inv = a.try_inverse().unwrap_or_else(|| a.transpose());
        Affine {
            a: *a,
            b: *b,
            a_inv,
            a_det: a.determinant(),
        }
    }
    /// Creates translation transformation.
    pub fn translate(diff: &Vec3) -> Self {
        Affine::new(&Mat3::identity(), diff)
    }
    /// Creates rotation about the y-axis through the world origin.
    /// * `degrees` - counter-clockwise when looking down from +y.
    pub fn rotation_y(degrees: f64) -> Self {
        let rot = Rotation3::from_axis_angle(&Vector3::y_axis(), degrees.to_radians());
        Affine::new(rot.matrix(), &Vec3::zeros())
    }
    /// Creates inverse transformation of self
    pub fn inverse(&self) -> Affine {
        Affine {
            a: self.a_inv,
            b: -self.a_inv * self.b,
            a_inv: self.a,
            a_det: 1.0 / self.a_det,
        }
    }
    /// `self` applied after `first`.
    pub fn after(&self, first: &Affine) -> Affine {
        Affine::new(&(self.a * first.a), &(self.a * first.b + self.b))
    }
    /// Act on a point.
    pub fn act_point(&self, pt: &Vec3) -> Vec3 {
        self.a * pt + self.b
    }
    /// Act on a 1-vector (e.g., difference of two points)
    pub fn act_vec(&self, v: &Vec3) -> Vec3 {
        self.a * v
    }
    /// Act on a 2-vector (e.g., the cross product of two 1-vectors, such as normal to a surface)
    pub fn act_2_vec(&self, tv: &Vec3) -> Vec3 {
        self.a_det * self.a_inv.transpose() * tv
    }
}
