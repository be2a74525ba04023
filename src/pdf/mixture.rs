use crate::aliases::{RandGen, Vec3};
use crate::pdf::Pdf;
use rand::Rng;

/// Draws from `a_pdf` with probability `mix`, from `b_pdf` otherwise.
pub struct MixturePdf<'a, 'b> {
    mix: f64,
    a_pdf: Option<&'a dyn Pdf>, // None when mix == 0.0
    b_pdf: &'b dyn Pdf,
}

impl<'a, 'b> MixturePdf<'a, 'b> {
    pub fn new(mix: f64, a_pdf: &'a dyn Pdf, b_pdf: &'b dyn Pdf) -> Self {
        debug_assert!((0.0..=1.0).contains(&mix));
        if mix == 0.0 {
            Self::zero(b_pdf)
        } else {
            MixturePdf {
                mix,
                a_pdf: Some(a_pdf),
                b_pdf,
            }
        }
    }
    /// The fair 50/50 mixture.
    pub fn half(a_pdf: &'a dyn Pdf, b_pdf: &'b dyn Pdf) -> Self {
        Self::new(0.5, a_pdf, b_pdf)
    }
    /// Degenerates to `b_pdf` alone.
    pub fn zero(b_pdf: &'b dyn Pdf) -> Self {
        MixturePdf {
            mix: 0.0,
            a_pdf: None,
            b_pdf,
        }
    }
}

impl<'a, 'b> Pdf for MixturePdf<'a, 'b> {
    fn density(&self, dir: &Vec3) -> f64 {
        match self.a_pdf {
            Some(a_pdf) => {
                self.mix * a_pdf.density(dir) + (1.0 - self.mix) * self.b_pdf.density(dir)
            }
            None => self.b_pdf.density(dir),
        }
    }
    fn generate(&self, rng: &mut RandGen) -> Vec3 {
        match self.a_pdf {
            Some(a_pdf) => {
                if rng.gen::<f64>() < self.mix {
                    a_pdf.generate(rng)
                } else {
                    self.b_pdf.generate(rng)
                }
            }
            None => self.b_pdf.generate(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{RandGen, Vec3};
    use crate::pdf::constant::ConstantPdf;
    use crate::pdf::cosine::CosinePdf;
    use crate::pdf::mixture::MixturePdf;
    use crate::pdf::{random_unit_vector, Pdf};
    use rand::SeedableRng;

    #[test]
    fn half_mixture_density_is_the_mean() {
        let mut rng = RandGen::seed_from_u64(3);
        let cosine = CosinePdf::new(&Vec3::new(0.0, 1.0, 0.0));
        let uniform = ConstantPdf::new();
        let mixture = MixturePdf::half(&cosine, &uniform);
        for _ in 0..1000 {
            let d = random_unit_vector(&mut rng);
            assert_eq!(
                mixture.density(&d),
                0.5 * (cosine.density(&d) + uniform.density(&d))
            );
        }
    }

    #[test]
    fn zero_mixture_is_the_second_pdf() {
        let mut rng = RandGen::seed_from_u64(4);
        let cosine = CosinePdf::new(&Vec3::new(0.0, 0.0, 1.0));
        let uniform = ConstantPdf::new();
        let mixture = MixturePdf::new(0.0, &uniform, &cosine);
        for _ in 0..100 {
            let d = mixture.generate(&mut rng);
            assert_eq!(mixture.density(&d), cosine.density(&d));
            assert!(d[2] >= -1e-9);
        }
    }

    #[test]
    fn coin_flip_is_fair() {
        let mut rng = RandGen::seed_from_u64(5);
        let up = CosinePdf::new(&Vec3::new(0.0, 0.0, 1.0));
        let down = CosinePdf::new(&Vec3::new(0.0, 0.0, -1.0));
        let mixture = MixturePdf::half(&up, &down);
        const N: usize = 20_000;
        let ups = (0..N)
            .filter(|_| mixture.generate(&mut rng)[2] > 0.0)
            .count();
        let ratio = ups as f64 / N as f64;
        assert!((ratio - 0.5).abs() < 0.02, "ratio {}", ratio);
    }
}
