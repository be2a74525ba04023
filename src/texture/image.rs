use crate::aliases::{Vec2, Vec3};
use crate::texture::Texture;

/// A pre-decoded bitmap, row-major, top row first, `channels` bytes per pixel.
/// Decoding is left to the caller; the buffer is not validated beyond
/// clamping lookups into range.
pub struct ImageTexture {
    data: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
}

impl ImageTexture {
    pub fn new(data: Vec<u8>, width: usize, height: usize, channels: usize) -> Self {
        ImageTexture {
            data,
            width,
            height,
            channels,
        }
    }
}

impl Texture for ImageTexture {
    fn value(&self, uv: &Vec2, _p: &Vec3) -> Vec3 {
        if self.width == 0 || self.height == 0 || self.channels == 0 {
            return Vec3::new(0.0, 1.0, 1.0); // solid cyan flags a missing image
        }
        // v = 1 is the top row of the bitmap
        let i = ((uv[0] * self.width as f64).max(0.0) as usize).min(self.width - 1);
        let j = (((1.0 - uv[1]) * self.height as f64 - 0.001).max(0.0) as usize)
            .min(self.height - 1);
        let base = self.channels * (i + j * self.width);
        let mut col = Vec3::zeros();
        for c in 0..3 {
            // grey images repeat their single channel
            let byte = self
                .data
                .get(base + c.min(self.channels - 1))
                .copied()
                .unwrap_or(0);
            col[c] = byte as f64 / 255.0;
        }
        col
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{Vec2, Vec3};
    use crate::texture::image::ImageTexture;
    use crate::texture::Texture;

    fn two_by_two() -> ImageTexture {
        // top row: red, green; bottom row: blue, white
        ImageTexture::new(
            vec![
                255, 0, 0, 0, 255, 0, //
                0, 0, 255, 255, 255, 255,
            ],
            2,
            2,
            3,
        )
    }

    #[test]
    fn samples_the_right_texel() {
        let tex = two_by_two();
        let p = Vec3::zeros();
        assert_eq!(tex.value(&Vec2::new(0.25, 0.75), &p), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(tex.value(&Vec2::new(0.75, 0.75), &p), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(tex.value(&Vec2::new(0.25, 0.25), &p), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn clamps_out_of_range_coordinates() {
        let tex = two_by_two();
        let p = Vec3::zeros();
        assert_eq!(tex.value(&Vec2::new(5.0, -3.0), &p), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(tex.value(&Vec2::new(-1.0, 2.0), &p), Vec3::new(1.0, 0.0, 0.0));
    }
}
