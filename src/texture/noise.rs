use crate::aliases::{RandGen, Vec2, Vec3};
use crate::pdf::rnd_in_unit_sphere;
use crate::texture::Texture;
use rand::Rng;
use std::sync::Arc;

const POINT_COUNT: usize = 256;

/// Gradient (Perlin) noise over random unit-ball vectors.
pub struct Perlin {
    perm_x: Box<[u8; POINT_COUNT]>,   // permutation of {0,1,...,255}
    perm_y: Box<[u8; POINT_COUNT]>,   // permutation of {0,1,...,255}
    perm_z: Box<[u8; POINT_COUNT]>,   // permutation of {0,1,...,255}
    ranvec: Box<[Vec3; POINT_COUNT]>, // random vectors in the unit ball
}

impl Perlin {
    pub fn new(rng: &mut RandGen) -> Self {
        Perlin {
            perm_x: Self::generate_perm(rng),
            perm_y: Self::generate_perm(rng),
            perm_z: Self::generate_perm(rng),
            ranvec: Self::generate_ranvec(rng),
        }
    }
    fn generate_perm(rng: &mut RandGen) -> Box<[u8; POINT_COUNT]> {
        let mut res = Box::new([0u8; POINT_COUNT]);
        for (i, slot) in res.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for i in (1..POINT_COUNT).rev() {
            let j = rng.gen_range(0..=i);
            res.swap(i, j);
        }
        res
    }
    fn generate_ranvec(rng: &mut RandGen) -> Box<[Vec3; POINT_COUNT]> {
        let mut res = Box::new([Vec3::zeros(); POINT_COUNT]);
        for v in res.iter_mut() {
            *v = rnd_in_unit_sphere(rng);
        }
        res
    }
    fn perlin_interpolate(c: &[[[Vec3; 2]; 2]; 2], point: &Vec3) -> f64 {
        let mut herm_cubic = Vec3::zeros();
        for i in 0..3 {
            herm_cubic[i] = point[i] * point[i] * (3.0 - 2.0 * point[i]);
        }
        let mut accum = 0.0;
        for (i, plane) in c.iter().enumerate() {
            for (j, row) in plane.iter().enumerate() {
                for (k, grad) in row.iter().enumerate() {
                    let (fi, fj, fk) = (i as f64, j as f64, k as f64);
                    let weight = point - Vec3::new(fi, fj, fk);
                    accum += (fi * herm_cubic[0] + (1.0 - fi) * (1.0 - herm_cubic[0]))
                        * (fj * herm_cubic[1] + (1.0 - fj) * (1.0 - herm_cubic[1]))
                        * (fk * herm_cubic[2] + (1.0 - fk) * (1.0 - herm_cubic[2]))
                        * grad.dot(&weight);
                }
            }
        }
        accum
    }
    /// returns values in [-1,1]
    pub fn noise(&self, p: &Vec3) -> f64 {
        let fract = p.map(|x| x - x.floor());
        let base = p.map(|x| x.floor());
        let (i, j, k) = (base[0] as i64, base[1] as i64, base[2] as i64);
        let wrap = |x: i64| (x & (POINT_COUNT as i64 - 1)) as usize;
        let mut c = [[[Vec3::zeros(); 2]; 2]; 2];
        for (di, plane) in c.iter_mut().enumerate() {
            for (dj, row) in plane.iter_mut().enumerate() {
                for (dk, grad) in row.iter_mut().enumerate() {
                    let idx = self.perm_x[wrap(i + di as i64)]
                        ^ self.perm_y[wrap(j + dj as i64)]
                        ^ self.perm_z[wrap(k + dk as i64)];
                    *grad = self.ranvec[idx as usize];
                }
            }
        }
        Self::perlin_interpolate(&c, &fract)
    }
    /// Sum of 7 octaves, amplitude halving and frequency doubling each octave.
    pub fn turb(&self, p: &Vec3) -> f64 {
        const DEPTH: usize = 7;
        let mut accum = 0.0;
        let mut p_m = *p;
        let mut weight = 1.0;
        for _ in 0..DEPTH {
            accum += weight * self.noise(&p_m);
            weight *= 0.5;
            p_m *= 2.0;
        }
        accum.abs()
    }
}

/// Marble-like grey: 0.5 (1 + sin(scale z + 10 turb(p))).
pub struct NoiseTexture {
    perlin: Arc<Perlin>,
    scale: f64,
}

impl NoiseTexture {
    pub fn new(scale: f64, rng: &mut RandGen) -> Self {
        NoiseTexture {
            perlin: Arc::new(Perlin::new(rng)),
            scale,
        }
    }
}

impl Texture for NoiseTexture {
    fn value(&self, _uv: &Vec2, p: &Vec3) -> Vec3 {
        Vec3::repeat(0.5 * (1.0 + f64::sin(self.scale * p[2] + 10.0 * self.perlin.turb(p))))
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{RandGen, Vec2, Vec3};
    use crate::texture::noise::{NoiseTexture, Perlin};
    use crate::texture::Texture;
    use rand::{Rng, SeedableRng};

    #[test]
    fn noise_is_bounded_and_vanishes_on_lattice() {
        let mut rng = RandGen::seed_from_u64(12);
        let perlin = Perlin::new(&mut rng);
        for _ in 0..2000 {
            let p = Vec3::new(
                rng.gen_range(-300.0..300.0),
                rng.gen_range(-300.0..300.0),
                rng.gen_range(-300.0..300.0),
            );
            let n = perlin.noise(&p);
            assert!(n.is_finite() && n.abs() <= 2.0);
        }
        assert_eq!(perlin.noise(&Vec3::new(3.0, -7.0, 255.0)), 0.0);
    }

    #[test]
    fn texture_is_grey_in_unit_range() {
        let mut rng = RandGen::seed_from_u64(13);
        let tex = NoiseTexture::new(4.0, &mut rng);
        for _ in 0..500 {
            let p = Vec3::new(rng.gen(), rng.gen(), rng.gen()) * 10.0;
            let c = tex.value(&Vec2::zeros(), &p);
            assert!(c[0] == c[1] && c[1] == c[2]);
            assert!((0.0..=1.0).contains(&c[0]));
        }
    }
}
