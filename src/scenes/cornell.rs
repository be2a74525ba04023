use pathtrace::affine::Affine;
use pathtrace::aliases::Vec3;
use pathtrace::background::AmbientLight;
use pathtrace::camera::Camera;
use pathtrace::hitable::constant_medium::ConstantMedium;
use pathtrace::hitable::cube;
use pathtrace::hitable::flip_normals::FlipNormals;
use pathtrace::hitable::hitable_list::HitableList;
use pathtrace::hitable::rectangle::Rectangle;
use pathtrace::hitable::sphere::Sphere;
use pathtrace::hitable::transform::Transform;
use pathtrace::hitable::Hitable;
use pathtrace::material::dielectric::Dielectric;
use pathtrace::material::diffuse_light::DiffuseLight;
use pathtrace::material::lambertian::Lambertian;
use pathtrace::material::Material;
use pathtrace::scene::Scene;
use pathtrace::texture::constant::ConstantTexture;
use std::sync::Arc;

const L: f64 = 555.0;

fn camera(aspect_ratio: f64) -> Camera {
    Camera::new_time(
        &Vec3::new(278.0, 278.0, -800.0),
        &Vec3::new(278.0, 278.0, 0.0),
        &Vec3::new(0.0, 1.0, 0.0),
        40.0,
        aspect_ratio,
        0.0,  // aperture
        10.0, // dist_to_focus
        0.0,  // time_0
        1.0,  // time_1
    )
}

/// The five walls, normals facing into the box.
fn walls(white: &Arc<dyn Material>) -> Vec<Arc<dyn Hitable>> {
    let red: Arc<dyn Material> = Arc::new(Lambertian::rgb(0.65, 0.05, 0.05));
    let green: Arc<dyn Material> = Arc::new(Lambertian::rgb(0.12, 0.45, 0.15));
    vec![
        Arc::new(FlipNormals::new(Arc::new(Rectangle::yz((0.0, L), (0.0, L), L, green)))), // left
        Arc::new(Rectangle::yz((0.0, L), (0.0, L), 0.0, red)), // right
        Arc::new(FlipNormals::new(Arc::new(Rectangle::xz((0.0, L), (0.0, L), L, white.clone())))), // ceiling
        Arc::new(Rectangle::xz((0.0, L), (0.0, L), 0.0, white.clone())), // floor
        Arc::new(FlipNormals::new(Arc::new(Rectangle::xy((0.0, L), (0.0, L), L, white.clone())))), // back
    ]
}

fn box_at(p1: &Vec3, degrees: f64, offset: &Vec3, material: Arc<dyn Material>) -> Arc<dyn Hitable> {
    // rotate about the box's corner at the origin, then move it into place
    let placement = Affine::translate(offset).after(&Affine::rotation_y(degrees));
    Arc::new(Transform::new(
        Arc::new(cube(&Vec3::zeros(), p1, material)),
        &placement,
    ))
}

/// Glass sphere and a tall box under a small one-sided ceiling light.
/// Diffuse bounces are steered toward the light and the sphere.
pub fn cornell_box(aspect_ratio: f64) -> Scene {
    let white: Arc<dyn Material> = Arc::new(Lambertian::rgb(0.73, 0.73, 0.73));
    let light_material = Arc::new(DiffuseLight::one_sided(Arc::new(ConstantTexture::rgb(
        15.0, 15.0, 15.0,
    ))));
    let light = Arc::new(Rectangle::xz(
        (213.0, 343.0),
        (227.0, 332.0),
        554.0,
        light_material,
    ));
    let glass_sphere = Arc::new(Sphere::new(
        &Vec3::new(190.0, 90.0, 190.0),
        90.0,
        Arc::new(Dielectric::new(1.5)),
    ));
    let mut objs = walls(&white);
    objs.push(Arc::new(FlipNormals::new(light.clone()))); // light, facing down
    objs.push(glass_sphere.clone());
    objs.push(box_at(
        &Vec3::new(165.0, 330.0, 165.0),
        15.0,
        &Vec3::new(265.0, 0.0, 295.0),
        white,
    )); // tall box
    let importance: Vec<Arc<dyn Hitable>> = vec![light, glass_sphere];
    Scene {
        hitables: Arc::new(HitableList::new(objs)),
        light: Some(Arc::new(HitableList::new(importance))),
        camera: camera(aspect_ratio),
        bg: Arc::new(AmbientLight::black()),
    }
}

/// Two boxes of smoke, one white and one black, under a wide light.
pub fn cornell_smoke(aspect_ratio: f64) -> Scene {
    let white: Arc<dyn Material> = Arc::new(Lambertian::rgb(0.73, 0.73, 0.73));
    let light = Arc::new(Rectangle::xz(
        (113.0, 443.0),
        (127.0, 432.0),
        554.0,
        Arc::new(DiffuseLight::new(Arc::new(ConstantTexture::rgb(7.0, 7.0, 7.0)))),
    ));
    let short_box = box_at(
        &Vec3::new(165.0, 165.0, 165.0),
        -18.0,
        &Vec3::new(130.0, 0.0, 65.0),
        white.clone(),
    );
    let tall_box = box_at(
        &Vec3::new(165.0, 330.0, 165.0),
        15.0,
        &Vec3::new(265.0, 0.0, 295.0),
        white.clone(),
    );
    let mut objs = walls(&white);
    objs.push(light.clone());
    objs.push(Arc::new(ConstantMedium::new(
        short_box,
        0.01,
        Arc::new(ConstantTexture::rgb(1.0, 1.0, 1.0)),
    )));
    objs.push(Arc::new(ConstantMedium::new(
        tall_box,
        0.01,
        Arc::new(ConstantTexture::rgb(0.0, 0.0, 0.0)),
    )));
    Scene {
        hitables: Arc::new(HitableList::new(objs)),
        light: Some(light),
        camera: camera(aspect_ratio),
        bg: Arc::new(AmbientLight::black()),
    }
}
