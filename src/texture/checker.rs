use crate::aliases::{Vec2, Vec3};
use crate::texture::Texture;
use std::sync::Arc;

/// 3d checkerboard choosing between two textures by the sign of sin(fx)sin(fy)sin(fz).
pub struct CheckerTexture {
    frequency: f64,
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl CheckerTexture {
    pub fn new(odd: Arc<dyn Texture>, even: Arc<dyn Texture>) -> Self {
        Self::with_frequency(odd, even, 10.0)
    }
    pub fn with_frequency(odd: Arc<dyn Texture>, even: Arc<dyn Texture>, frequency: f64) -> Self {
        CheckerTexture {
            frequency,
            even,
            odd,
        }
    }
}

impl Texture for CheckerTexture {
    fn value(&self, uv: &Vec2, p: &Vec3) -> Vec3 {
        let x = self.frequency * p;
        let sines = f64::sin(x[0]) * f64::sin(x[1]) * f64::sin(x[2]);
        if sines < 0.0 {
            self.odd.value(uv, p)
        } else {
            self.even.value(uv, p)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{Vec2, Vec3};
    use crate::texture::checker::CheckerTexture;
    use crate::texture::constant::ConstantTexture;
    use crate::texture::Texture;
    use std::sync::Arc;

    #[test]
    fn alternates_by_sign_of_sines() {
        let dark = Vec3::new(0.2, 0.3, 0.1);
        let light = Vec3::new(0.9, 0.9, 0.9);
        let checker = CheckerTexture::new(
            Arc::new(ConstantTexture::new(&dark)),
            Arc::new(ConstantTexture::new(&light)),
        );
        let uv = Vec2::zeros();
        // sin(1)^3 > 0
        assert_eq!(checker.value(&uv, &Vec3::new(0.1, 0.1, 0.1)), light);
        // sin(-1) sin(1) sin(1) < 0
        assert_eq!(checker.value(&uv, &Vec3::new(-0.1, 0.1, 0.1)), dark);
    }
}
