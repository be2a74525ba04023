use pathtrace::aliases::{RandGen, Vec3};
use pathtrace::background::{AmbientLight, SkyGradient};
use pathtrace::camera::Camera;
use pathtrace::hitable::hitable_list::HitableList;
use pathtrace::hitable::rectangle::Rectangle;
use pathtrace::hitable::sphere::Sphere;
use pathtrace::hitable::Hitable;
use pathtrace::material::diffuse_light::DiffuseLight;
use pathtrace::material::lambertian::Lambertian;
use pathtrace::scene::Scene;
use pathtrace::texture::constant::ConstantTexture;
use pathtrace::texture::image::ImageTexture;
use pathtrace::texture::noise::NoiseTexture;
use std::path::Path;
use std::sync::Arc;

fn camera(aspect_ratio: f64, look_from: &Vec3, look_at: &Vec3) -> Camera {
    Camera::new(
        look_from,
        look_at,
        &Vec3::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        0.0,
        10.0,
    )
}

/// Marble spheres lit by a spherical and a rectangular lamp.
pub fn perlin_spheres(aspect_ratio: f64, rng: &mut RandGen) -> Scene {
    let marble = Arc::new(Lambertian::new(Arc::new(NoiseTexture::new(4.0, rng))));
    let lamp = Arc::new(DiffuseLight::new(Arc::new(ConstantTexture::rgb(4.0, 4.0, 4.0))));
    let sphere_lamp: Arc<dyn Hitable> =
        Arc::new(Sphere::new(&Vec3::new(0.0, 7.0, 0.0), 2.0, lamp.clone()));
    let rect_lamp: Arc<dyn Hitable> = Arc::new(Rectangle::xy((3.0, 5.0), (1.0, 3.0), -2.0, lamp));
    let objs: Vec<Arc<dyn Hitable>> = vec![
        Arc::new(Sphere::new(
            &Vec3::new(0.0, -1000.0, 0.0),
            1000.0,
            marble.clone(),
        )),
        Arc::new(Sphere::new(&Vec3::new(0.0, 2.0, 0.0), 2.0, marble)),
        sphere_lamp.clone(),
        rect_lamp.clone(),
    ];
    Scene {
        hitables: Arc::new(HitableList::new(objs)),
        light: Some(Arc::new(HitableList::new(vec![sphere_lamp, rect_lamp]))),
        camera: camera(
            aspect_ratio,
            &Vec3::new(26.0, 3.0, 6.0),
            &Vec3::new(0.0, 2.0, 0.0),
        ),
        bg: Arc::new(AmbientLight::black()),
    }
}

/// A sphere wrapped in an equirectangular bitmap, under the sky.
pub fn globe(aspect_ratio: f64, texture: &Path) -> anyhow::Result<Scene> {
    let bitmap = image::open(texture)?.to_rgb8();
    let (width, height) = bitmap.dimensions();
    let texture = ImageTexture::new(bitmap.into_raw(), width as usize, height as usize, 3);
    let globe = Sphere::new(
        &Vec3::zeros(),
        2.0,
        Arc::new(Lambertian::new(Arc::new(texture))),
    );
    Ok(Scene {
        hitables: Arc::new(globe),
        light: None,
        camera: camera(aspect_ratio, &Vec3::new(13.0, 2.0, 3.0), &Vec3::zeros()),
        bg: Arc::new(SkyGradient::default()),
    })
}
