use crate::aliases::{RandGen, Vec3};
use crate::pdf::rnd_in_unit_disc;
use crate::ray::Ray;
use rand::Rng;

/// Thin-lens camera with a shutter interval.
#[derive(Clone, Debug)]
pub struct Camera {
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    origin: Vec3,
    lens_radius: f64,
    u: Vec3, // a unit vector directing right
    v: Vec3, // a unit vector directing up
    time_0: f64, // shutter open
    time_1: f64, // shutter close
}

impl Camera {
    #[allow(clippy::too_many_arguments)]
    pub fn new_time(
        look_from: &Vec3,
        look_at: &Vec3,
        view_up: &Vec3,
        vfov: f64,   // vertical field of view in degrees
        aspect: f64, // width over height
        aperture: f64,
        focus_dist: f64,
        time_0: f64, // shutter open
        time_1: f64, // shutter close
    ) -> Self {
        let theta = vfov.to_radians();
        let half_height = (theta * 0.5).tan();
        let half_width = aspect * half_height;
        let origin = *look_from;
        let w = (look_from - look_at).normalize();
        let u = view_up.cross(&w).normalize();
        let v = w.cross(&u);
        let lower_left_corner = origin - focus_dist * (half_width * u + half_height * v + w);
        let horizontal = u * 2.0 * focus_dist * half_width;
        let vertical = v * 2.0 * focus_dist * half_height;
        Camera {
            lower_left_corner,
            horizontal,
            vertical,
            origin,
            lens_radius: aperture * 0.5,
            u,
            v,
            time_0,
            time_1,
        }
    }
    /// A camera with an instantaneous shutter at time 0.
    pub fn new(
        look_from: &Vec3,
        look_at: &Vec3,
        view_up: &Vec3,
        vfov: f64,
        aspect: f64,
        aperture: f64,
        focus_dist: f64,
    ) -> Self {
        Camera::new_time(
            look_from, look_at, view_up, vfov, aspect, aperture, focus_dist, 0.0, 0.0,
        )
    }
    /// Ray through film coordinates (s, t) in [0,1]^2, (0,0) at the lower left.
    pub fn get_ray(&self, s: f64, t: f64, rng: &mut RandGen) -> Ray {
        let r = self.lens_radius * rnd_in_unit_disc(rng);
        let offset = r.x * self.u + r.y * self.v;
        let time = self.time_0 + rng.gen::<f64>() * (self.time_1 - self.time_0);
        Ray::new(
            &(self.origin + offset),
            &(self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset),
            time,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{RandGen, Vec3};
    use crate::camera::Camera;
    use rand::SeedableRng;

    #[test]
    fn pinhole_center_ray_points_at_target() {
        let mut rng = RandGen::seed_from_u64(0);
        let cam = Camera::new(
            &Vec3::new(278.0, 278.0, -800.0),
            &Vec3::new(278.0, 278.0, 0.0),
            &Vec3::new(0.0, 1.0, 0.0),
            40.0,
            1.0,
            0.0,
            10.0,
        );
        let ray = cam.get_ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.origin, Vec3::new(278.0, 278.0, -800.0));
        let dir = ray.direction.normalize();
        assert!((dir - Vec3::new(0.0, 0.0, 1.0)).norm() < 1e-12);
        // top edge of the film is vfov/2 above the axis
        let top = cam.get_ray(0.5, 1.0, &mut rng).direction.normalize();
        assert!((top[1].atan2(top[2]).to_degrees() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn lens_and_shutter_sampling() {
        let mut rng = RandGen::seed_from_u64(1);
        let look_from = Vec3::new(13.0, 2.0, 3.0);
        let look_at = Vec3::zeros();
        let focus_dist = (look_from - look_at).norm();
        let cam = Camera::new_time(
            &look_from,
            &look_at,
            &Vec3::new(0.0, 1.0, 0.0),
            20.0,
            1.5,
            2.0,
            focus_dist,
            0.25,
            0.75,
        );
        for _ in 0..500 {
            let ray = cam.get_ray(0.5, 0.5, &mut rng);
            assert!((ray.origin - look_from).norm() < 1.0);
            assert!(ray.time >= 0.25 && ray.time < 0.75);
            // every lens sample converges on the focus point
            assert!((ray.point_at(1.0) - look_at).norm() < 1e-9);
        }
    }
}
