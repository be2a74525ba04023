use crate::aliases::RandGen;
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::pdf::cosine::CosinePdf;
use crate::pdf::ScatterPdf;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;
use crate::texture::constant::ConstantTexture;
use crate::texture::Texture;
use std::f64::consts::PI;
use std::sync::Arc;

pub struct Lambertian {
    pub albedo: Arc<dyn Texture>,
}

impl Lambertian {
    pub fn new(texture: Arc<dyn Texture>) -> Self {
        Lambertian { albedo: texture }
    }
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(Arc::new(ConstantTexture::rgb(r, g, b)))
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray: &Ray, rec: &HitRecord, _rng: &mut RandGen) -> ScatterRecord {
        ScatterRecord::Diffuse {
            attenuation: self.albedo.value(&rec.tex_coord, &rec.point),
            pdf: ScatterPdf::Cosine(CosinePdf::new(&rec.normal)),
        }
    }
    fn scattering_pdf(&self, _ray: &Ray, rec: &HitRecord, scattered: &Ray) -> f64 {
        let cosine = rec.normal.dot(&scattered.direction.normalize());
        (cosine / PI).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{RandGen, Vec2, Vec3};
    use crate::hit_record::HitRecord;
    use crate::material::lambertian::Lambertian;
    use crate::material::Material;
    use crate::pdf::Pdf;
    use crate::ray::Ray;
    use crate::scatter_record::ScatterRecord;
    use rand::SeedableRng;

    fn record(material: &dyn Material) -> HitRecord {
        HitRecord {
            t: 1.0,
            point: Vec3::zeros(),
            tex_coord: Vec2::zeros(),
            normal: Vec3::new(0.0, 1.0, 0.0),
            material,
            time: 0.0,
        }
    }

    #[test]
    fn reported_density_matches_sampling_density() {
        let mut rng = RandGen::seed_from_u64(14);
        let mat = Lambertian::rgb(0.5, 0.5, 0.5);
        let rec = record(&mat);
        let ray = Ray::new(&Vec3::new(0.0, 1.0, 1.0), &Vec3::new(0.0, -1.0, -1.0), 0.0);
        for _ in 0..200 {
            match mat.scatter(&ray, &rec, &mut rng) {
                ScatterRecord::Diffuse { pdf, .. } => {
                    let dir = pdf.generate(&mut rng);
                    let scattered = Ray::new(&rec.point, &dir, 0.0);
                    let reported = mat.scattering_pdf(&ray, &rec, &scattered);
                    assert!((reported - pdf.density(&dir)).abs() < 1e-12);
                }
                _ => panic!("lambertian must scatter diffusely"),
            }
        }
    }

    #[test]
    fn no_energy_gain() {
        // attenuation * scattering_pdf / pdf averages to the albedo
        let mut rng = RandGen::seed_from_u64(15);
        let albedo = Vec3::new(0.8, 0.5, 0.1);
        let mat = Lambertian::rgb(albedo[0], albedo[1], albedo[2]);
        let rec = record(&mat);
        let ray = Ray::new(&Vec3::new(0.0, 1.0, 0.0), &Vec3::new(0.0, -1.0, 0.0), 0.0);
        const N: usize = 20_000;
        let mut sum = Vec3::zeros();
        for _ in 0..N {
            if let ScatterRecord::Diffuse { attenuation, pdf } = mat.scatter(&ray, &rec, &mut rng) {
                let dir = pdf.generate(&mut rng);
                let scattered = Ray::new(&rec.point, &dir, 0.0);
                let density = pdf.density(&dir);
                if density > 0.0 {
                    sum += attenuation * mat.scattering_pdf(&ray, &rec, &scattered) / density;
                }
            }
        }
        let mean = sum / N as f64;
        for c in 0..3 {
            assert!(mean[c] <= albedo[c] + 1e-9);
            assert!((mean[c] - albedo[c]).abs() < 1e-3);
        }
    }
}
