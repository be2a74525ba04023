use pathtrace::aliases::{RandGen, Vec3};
use pathtrace::background::SkyGradient;
use pathtrace::camera::Camera;
use pathtrace::error::SceneError;
use pathtrace::hitable::bvh_node::BvhNode;
use pathtrace::hitable::sphere::{MovingSphere, Sphere};
use pathtrace::hitable::Hitable;
use pathtrace::material::dielectric::Dielectric;
use pathtrace::material::lambertian::Lambertian;
use pathtrace::material::metal::Metal;
use pathtrace::scene::Scene;
use pathtrace::texture::checker::CheckerTexture;
use pathtrace::texture::constant::ConstantTexture;
use rand::Rng;
use std::sync::Arc;

/// A field of small spheres, the diffuse ones bouncing up during the shutter,
/// around three big ones on a checkered ground, lit by the sky.
pub fn scene(aspect_ratio: f64, rng: &mut RandGen) -> Result<Scene, SceneError> {
    let mut objs = Vec::<Arc<dyn Hitable>>::new();
    let checker = Arc::new(CheckerTexture::new(
        Arc::new(ConstantTexture::rgb(0.2, 0.3, 0.1)),
        Arc::new(ConstantTexture::rgb(0.9, 0.9, 0.9)),
    ));
    objs.push(Arc::new(Sphere::new(
        &Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(checker)),
    ))); // ground
    for a in -10..10 {
        for b in -10..10 {
            let choose_mat = rng.gen::<f64>();
            let center = Vec3::new(
                a as f64 + 0.9 * rng.gen::<f64>(),
                0.2,
                b as f64 + 0.9 * rng.gen::<f64>(),
            );
            if (center - Vec3::new(4.0, 0.2, 0.0)).norm() <= 0.9 {
                continue;
            }
            if choose_mat < 0.8 {
                let albedo = Vec3::from_fn(|_, _| rng.gen::<f64>() * rng.gen::<f64>());
                objs.push(Arc::new(MovingSphere::new(
                    &center,
                    &(center + Vec3::new(0.0, 0.5 * rng.gen::<f64>(), 0.0)),
                    0.0,
                    1.0,
                    0.2,
                    Arc::new(Lambertian::new(Arc::new(ConstantTexture::new(&albedo)))),
                )));
            } else if choose_mat < 0.95 {
                let albedo = Vec3::from_fn(|_, _| 0.5 * (1.0 + rng.gen::<f64>()));
                objs.push(Arc::new(Sphere::new(
                    &center,
                    0.2,
                    Arc::new(Metal::new(&albedo, 0.5 * rng.gen::<f64>())),
                )));
            } else {
                objs.push(Arc::new(Sphere::new(
                    &center,
                    0.2,
                    Arc::new(Dielectric::new(1.5)),
                )));
            }
        }
    }
    objs.push(Arc::new(Sphere::new(
        &Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    objs.push(Arc::new(Sphere::new(
        &Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::rgb(0.4, 0.2, 0.1)),
    )));
    objs.push(Arc::new(Sphere::new(
        &Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(&Vec3::new(0.7, 0.6, 0.5), 0.0)),
    )));
    let hitables = Arc::new(BvhNode::new(objs, 0.0, 1.0, rng)?);
    let camera = Camera::new_time(
        &Vec3::new(13.0, 2.0, 3.0),
        &Vec3::zeros(),
        &Vec3::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        0.1,  // aperture
        10.0, // dist_to_focus
        0.0,
        1.0,
    );
    Ok(Scene {
        hitables,
        light: None,
        camera,
        bg: Arc::new(SkyGradient::default()),
    })
}
