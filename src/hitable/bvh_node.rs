use crate::aabb::Aabb;
use crate::aliases::RandGen;
use crate::error::SceneError;
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::ray::Ray;
use log::debug;
use rand::Rng;
use std::sync::Arc;

/// Bounding Volume Hierarchy node.
/// Its box contains both children's boxes at every time of the construction interval.
pub struct BvhNode {
    pub left: Arc<dyn Hitable>,
    pub right: Arc<dyn Hitable>, // same object as left for a single-element node
    pub aabb: Aabb,
}

impl BvhNode {
    /// Constructor
    /// time_0, time_1: the interval the boxes must be valid for (moving hitables).
    /// list: non-empty, every element bounded.
    pub fn new(
        list: Vec<Arc<dyn Hitable>>,
        time_0: f64,
        time_1: f64,
        rng: &mut RandGen,
    ) -> Result<Self, SceneError> {
        if list.is_empty() {
            return Err(SceneError::EmptyBvh);
        }
        let count = list.len();
        let mut items = Vec::with_capacity(count);
        for (index, hitable) in list.into_iter().enumerate() {
            let bbox = hitable
                .bounding_box(time_0, time_1)
                .ok_or(SceneError::UnboundedPrimitive { index })?;
            items.push((hitable, bbox));
        }
        let node = Self::construct(items, rng);
        debug!("built BVH over {} hitables", count);
        Ok(node)
    }
    /// Recursively builds the tree over (hitable, its bounding box) pairs.
    fn construct(mut items: Vec<(Arc<dyn Hitable>, Aabb)>, rng: &mut RandGen) -> Self {
        let axis = rng.gen_range(0..3);
        items.sort_by(|a, b| a.1.compare_min(&b.1, axis));
        let ((left, left_box), (right, right_box)) = match items.len() {
            1 => {
                let only = items.swap_remove(0);
                (only.clone(), only)
            }
            2 => {
                let second = items.swap_remove(1);
                let first = items.swap_remove(0);
                (first, second)
            }
            len => {
                let right_items = items.split_off(len / 2);
                let left_node = Self::construct(items, rng);
                let right_node = Self::construct(right_items, rng);
                let (left_box, right_box) = (left_node.aabb, right_node.aabb);
                (
                    (Arc::new(left_node) as Arc<dyn Hitable>, left_box),
                    (Arc::new(right_node) as Arc<dyn Hitable>, right_box),
                )
            }
        };
        BvhNode {
            left,
            right,
            aabb: Aabb::unite(&left_box, &right_box),
        }
    }
}

impl Hitable for BvhNode {
    fn hit<'s>(
        &'s self,
        ray: &Ray,
        t_min: f64,
        t_max: f64,
        rng: &mut RandGen,
    ) -> Option<HitRecord<'s>> {
        if !self.aabb.hit(ray, t_min, t_max) {
            return None;
        }
        let hit_left = self.left.hit(ray, t_min, t_max, rng);
        if Arc::ptr_eq(&self.left, &self.right) {
            return hit_left;
        }
        // a left hit does not rule out a nearer right hit
        let closest = hit_left.map_or(t_max, |rec| rec.t);
        let hit_right = self.right.hit(ray, t_min, closest, rng);
        HitRecord::min_opt(hit_left, hit_right)
    }
    fn bounding_box(&self, _t0: f64, _t1: f64) -> Option<Aabb> {
        Some(self.aabb)
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{RandGen, Vec3};
    use crate::error::SceneError;
    use crate::hitable::bvh_node::BvhNode;
    use crate::hitable::sphere::Sphere;
    use crate::hitable::Hitable;
    use crate::material::lambertian::Lambertian;
    use crate::ray::Ray;
    use rand::SeedableRng;
    use std::sync::Arc;

    struct Plane;

    impl Hitable for Plane {
        fn hit<'s>(
            &'s self,
            _ray: &Ray,
            _t_min: f64,
            _t_max: f64,
            _rng: &mut RandGen,
        ) -> Option<crate::hit_record::HitRecord<'s>> {
            None
        }
        fn bounding_box(&self, _time_0: f64, _time_1: f64) -> Option<crate::aabb::Aabb> {
            None
        }
    }

    #[test]
    fn rejects_empty_and_unbounded_input() {
        let mut rng = RandGen::seed_from_u64(0);
        assert_eq!(
            BvhNode::new(vec![], 0.0, 1.0, &mut rng).err(),
            Some(SceneError::EmptyBvh)
        );
        let mat = Arc::new(Lambertian::rgb(0.5, 0.5, 0.5));
        let list: Vec<Arc<dyn Hitable>> = vec![
            Arc::new(Sphere::new(&Vec3::zeros(), 1.0, mat)),
            Arc::new(Plane),
        ];
        assert_eq!(
            BvhNode::new(list, 0.0, 1.0, &mut rng).err(),
            Some(SceneError::UnboundedPrimitive { index: 1 })
        );
    }

    #[test]
    fn single_primitive_is_aliased() {
        let mut rng = RandGen::seed_from_u64(0);
        let mat = Arc::new(Lambertian::rgb(0.5, 0.5, 0.5));
        let node = BvhNode::new(
            vec![Arc::new(Sphere::new(&Vec3::new(0.0, 0.0, -3.0), 1.0, mat))],
            0.0,
            1.0,
            &mut rng,
        )
        .unwrap();
        assert!(Arc::ptr_eq(&node.left, &node.right));
        let ray = Ray::new(&Vec3::zeros(), &Vec3::new(0.0, 0.0, -1.0), 0.0);
        let rec = node.hit(&ray, 0.001, f64::MAX, &mut rng).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn nearer_right_child_wins() {
        let mut rng = RandGen::seed_from_u64(0);
        let mat = Arc::new(Lambertian::rgb(0.5, 0.5, 0.5));
        // overlapping along every axis so the sort order cannot predict distance
        let list: Vec<Arc<dyn Hitable>> = vec![
            Arc::new(Sphere::new(&Vec3::new(0.0, 0.0, -10.0), 5.0, mat.clone())),
            Arc::new(Sphere::new(&Vec3::new(0.0, 0.0, -4.0), 1.0, mat)),
        ];
        for seed in 0..8 {
            let mut build_rng = RandGen::seed_from_u64(seed);
            let node = BvhNode::new(list.clone(), 0.0, 1.0, &mut build_rng).unwrap();
            let ray = Ray::new(&Vec3::zeros(), &Vec3::new(0.0, 0.0, -1.0), 0.0);
            let rec = node.hit(&ray, 0.001, f64::MAX, &mut rng).unwrap();
            assert!((rec.t - 3.0).abs() < 1e-9);
        }
    }
}
