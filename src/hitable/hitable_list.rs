use crate::aabb::Aabb;
use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::pdf::random_unit_vector;
use crate::ray::Ray;
use rand::Rng;
use std::f64::consts::PI;
use std::sync::Arc;

/// Unordered collection scanned linearly.
pub struct HitableList {
    pub list: Vec<Arc<dyn Hitable>>,
}

impl HitableList {
    pub fn new(objs: Vec<Arc<dyn Hitable>>) -> Self {
        HitableList { list: objs }
    }
}

impl Hitable for HitableList {
    fn hit<'s>(
        &'s self,
        ray: &Ray,
        t_min: f64,
        t_max: f64,
        rng: &mut RandGen,
    ) -> Option<HitRecord<'s>> {
        let mut res: Option<HitRecord> = None;
        let mut closest_so_far = t_max;
        for obj in &self.list {
            if let Some(tmp_rec) = obj.hit(ray, t_min, closest_so_far, rng) {
                closest_so_far = tmp_rec.t;
                res = Some(tmp_rec);
            }
        }
        res
    }
    fn bounding_box(&self, time_0: f64, time_1: f64) -> Option<Aabb> {
        let mut cur = Aabb::empty();
        for hitable in &self.list {
            cur = Aabb::unite(&cur, &hitable.bounding_box(time_0, time_1)?);
        }
        Some(cur)
    }
    /// Picks a member uniformly and samples toward it.
    fn random_direction_from(&self, origin: &Vec3, rng: &mut RandGen) -> Vec3 {
        if self.list.is_empty() {
            return random_unit_vector(rng);
        }
        let idx = rng.gen_range(0..self.list.len());
        self.list[idx].random_direction_from(origin, rng)
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f64 {
        if self.list.is_empty() {
            return 1.0 / (4.0 * PI);
        }
        let sum: f64 = self
            .list
            .iter()
            .map(|o| o.direction_density(origin, dir))
            .sum();
        sum / self.list.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{RandGen, Vec3};
    use crate::hitable::hitable_list::HitableList;
    use crate::hitable::sphere::Sphere;
    use crate::hitable::Hitable;
    use crate::material::lambertian::Lambertian;
    use crate::ray::Ray;
    use rand::SeedableRng;
    use std::sync::Arc;

    #[test]
    fn nearest_member_wins() {
        let mut rng = RandGen::seed_from_u64(0);
        let mat = Arc::new(Lambertian::rgb(0.5, 0.5, 0.5));
        let list = HitableList::new(vec![
            Arc::new(Sphere::new(&Vec3::new(0.0, 0.0, -10.0), 1.0, mat.clone())),
            Arc::new(Sphere::new(&Vec3::new(0.0, 0.0, -4.0), 1.0, mat.clone())),
            Arc::new(Sphere::new(&Vec3::new(0.0, 0.0, -7.0), 1.0, mat)),
        ]);
        let ray = Ray::new(&Vec3::zeros(), &Vec3::new(0.0, 0.0, -1.0), 0.0);
        let rec = list.hit(&ray, 0.001, f64::MAX, &mut rng).unwrap();
        assert!((rec.t - 3.0).abs() < 1e-9);
        let bbox = list.bounding_box(0.0, 1.0).unwrap();
        assert_eq!(bbox.min, Vec3::new(-1.0, -1.0, -11.0));
        assert_eq!(bbox.max, Vec3::new(1.0, 1.0, -3.0));
    }

    #[test]
    fn density_is_member_average() {
        let mat = Arc::new(Lambertian::rgb(0.5, 0.5, 0.5));
        let a = Arc::new(Sphere::new(&Vec3::new(0.0, 0.0, -4.0), 1.0, mat.clone()));
        let b = Arc::new(Sphere::new(&Vec3::new(0.0, 4.0, 0.0), 1.0, mat));
        let list = HitableList::new(vec![a.clone(), b.clone()]);
        let dir = Vec3::new(0.0, 0.0, -1.0);
        let origin = Vec3::zeros();
        let expected =
            0.5 * (a.direction_density(&origin, &dir) + b.direction_density(&origin, &dir));
        assert_eq!(list.direction_density(&origin, &dir), expected);
        assert!(expected > 0.0);
    }
}
