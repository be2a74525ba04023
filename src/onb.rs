use crate::aliases::Vec3;
use std::ops::Index;

/// Right-handed frame (u, v, w) used to lift directions sampled around +z
/// onto an arbitrary axis. Indexing yields u, v, w in that order.
pub struct Onb {
    axis: [Vec3; 3],
}

impl Onb {
    /// Frame whose w is the direction of `w_dir` (any nonzero length).
    pub fn build_from_w(w_dir: &Vec3) -> Self {
        let w = w_dir.normalize();
        // helper axis must not be parallel to w
        let helper = if w[0].abs() > 0.9 {
            Vec3::new(0.0, 1.0, 0.0)
        } else {
            Vec3::new(1.0, 0.0, 0.0)
        };
        let v = w.cross(&helper).normalize();
        let u = v.cross(&w);
        Onb { axis: [u, v, w] }
    }
    pub fn u(&self) -> &Vec3 {
        &self.axis[0]
    }
    pub fn v(&self) -> &Vec3 {
        &self.axis[1]
    }
    pub fn w(&self) -> &Vec3 {
        &self.axis[2]
    }
    /// Maps local coordinates (a, b, c) to a u + b v + c w.
    pub fn local_to_global_vec(&self, uvw: &Vec3) -> Vec3 {
        uvw[0] * self.u() + uvw[1] * self.v() + uvw[2] * self.w()
    }
}

impl Index<usize> for Onb {
    type Output = Vec3;
    fn index(&self, index: usize) -> &Vec3 {
        &self.axis[index]
    }
}
