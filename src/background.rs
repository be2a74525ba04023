use crate::aliases::Vec3;
use crate::ray::Ray;

/// Radiance arriving along rays that leave the scene.
pub trait Background: Send + Sync {
    fn color(&self, ray: &Ray) -> Vec3;
}

/// The same radiance from every direction; black for scenes lit only by emitters.
pub struct AmbientLight {
    color: Vec3,
}

impl AmbientLight {
    pub fn new(color: &Vec3) -> Self {
        Self { color: *color }
    }
    pub fn black() -> Self {
        Self::new(&Vec3::zeros())
    }
}

impl Background for AmbientLight {
    fn color(&self, _ray: &Ray) -> Vec3 {
        self.color
    }
}

/// Vertical blend from `horizon` (looking down) to `zenith` (looking up).
pub struct SkyGradient {
    horizon: Vec3,
    zenith: Vec3,
}

impl SkyGradient {
    pub fn new(horizon: &Vec3, zenith: &Vec3) -> Self {
        Self {
            horizon: *horizon,
            zenith: *zenith,
        }
    }
}

impl Default for SkyGradient {
    /// White to light blue.
    fn default() -> Self {
        Self::new(&Vec3::new(1.0, 1.0, 1.0), &Vec3::new(0.5, 0.7, 1.0))
    }
}

impl Background for SkyGradient {
    fn color(&self, ray: &Ray) -> Vec3 {
        let t = 0.5 * (ray.direction.normalize()[1] + 1.0);
        (1.0 - t) * self.horizon + t * self.zenith
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::Vec3;
    use crate::background::{Background, SkyGradient};
    use crate::ray::Ray;

    #[test]
    fn gradient_endpoints() {
        let sky = SkyGradient::default();
        let up = Ray::new(&Vec3::zeros(), &Vec3::new(0.0, 3.0, 0.0), 0.0);
        let down = Ray::new(&Vec3::zeros(), &Vec3::new(0.0, -1.0, 0.0), 0.0);
        let level = Ray::new(&Vec3::zeros(), &Vec3::new(1.0, 0.0, 0.0), 0.0);
        assert_eq!(sky.color(&up), Vec3::new(0.5, 0.7, 1.0));
        assert_eq!(sky.color(&down), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(sky.color(&level), Vec3::new(0.75, 0.85, 1.0));
    }
}
