use crate::affine::Affine;
use crate::aliases::Vec3;
use crate::ray::Ray;
use crate::util::{max_vec3, min_vec3};
use itertools::iproduct;

/// Axis-Aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: &Vec3, max: &Vec3) -> Self {
        Aabb {
            min: *min,
            max: *max,
        }
    }
    pub fn empty() -> Self {
        Aabb::new(
            &Vec3::repeat(f64::INFINITY),
            &Vec3::repeat(f64::NEG_INFINITY),
        )
    }
    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0] || self.min[1] > self.max[1] || self.min[2] > self.max[2]
    }
    /// Slab test against the ray restricted to [t_min, t_max].
    pub fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> bool {
        let mut t_min_int = t_min; // int = intersection
        let mut t_max_int = t_max;
        for a in 0..3 {
            let inv_d = 1.0 / ray.direction[a];
            let mut t0 = (self.min[a] - ray.origin[a]) * inv_d;
            let mut t1 = (self.max[a] - ray.origin[a]) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min_int = f64::max(t_min_int, t0);
            t_max_int = f64::min(t_max_int, t1);
            if t_min_int > t_max_int {
                // a zero-thickness slab still counts as a hit
                return false;
            }
        }
        true
    }
    pub fn unite(lhs: &Aabb, rhs: &Aabb) -> Aabb {
        Aabb::new(&min_vec3(&lhs.min, &rhs.min), &max_vec3(&lhs.max, &rhs.max))
    }
    pub fn append_point(&mut self, point: Vec3) {
        self.min = min_vec3(&self.min, &point);
        self.max = max_vec3(&self.max, &point);
    }
    pub fn from_points(pts: Vec<Vec3>) -> Self {
        let mut ret = Self::empty();
        for pt in pts {
            ret.append_point(pt);
        }
        ret
    }
    /// Inflates every axis by `margin` on both sides.
    pub fn padded(&self, margin: f64) -> Aabb {
        let pad = Vec3::repeat(margin);
        Aabb::new(&(self.min - pad), &(self.max + pad))
    }
    pub fn contains(&self, rhs: &Aabb) -> bool {
        rhs.is_empty()
            || (0..3).all(|a| self.min[a] <= rhs.min[a] && rhs.max[a] <= self.max[a])
    }
    pub fn get_transformed(&self, aff: &Affine) -> Aabb {
        if self.is_empty() {
            Self::empty()
        } else {
            Self::from_points(self.vertices().iter().map(|p| aff.act_point(p)).collect())
        }
    }
    pub fn vertices(&self) -> Vec<Vec3> {
        let self_min_max: [&Vec3; 2] = [&self.min, &self.max];
        iproduct!(0..2, 0..2, 0..2)
            .map(|(ix, iy, iz)| {
                Vec3::new(
                    self_min_max[ix][0],
                    self_min_max[iy][1],
                    self_min_max[iz][2],
                )
            })
            .collect()
    }
    pub fn compare_min(&self, rhs: &Aabb, axis: usize) -> std::cmp::Ordering {
        self.min[axis]
            .partial_cmp(&rhs.min[axis])
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}
