use crate::aliases::Vec3;
use crate::hitable::flip_normals::FlipNormals;
use crate::hitable::hitable_list::HitableList;
use crate::hitable::rectangle::Rectangle;
use crate::hitable::Hitable;
use crate::material::Material;
use std::sync::Arc;

/// The six faces of the box [p0, p1], normals pointing outward.
/// Only the surface is hit; wrap it in a `ConstantMedium` for a volume.
pub fn cube(p0: &Vec3, p1: &Vec3, material: Arc<dyn Material>) -> HitableList {
    let x = (p0[0], p1[0]);
    let y = (p0[1], p1[1]);
    let z = (p0[2], p1[2]);
    let faces: Vec<Arc<dyn Hitable>> = vec![
        Arc::new(Rectangle::xy(x, y, p1[2], material.clone())),
        Arc::new(FlipNormals::new(Arc::new(Rectangle::xy(
            x,
            y,
            p0[2],
            material.clone(),
        )))),
        Arc::new(Rectangle::xz(x, z, p1[1], material.clone())),
        Arc::new(FlipNormals::new(Arc::new(Rectangle::xz(
            x,
            z,
            p0[1],
            material.clone(),
        )))),
        Arc::new(Rectangle::yz(y, z, p1[0], material.clone())),
        Arc::new(FlipNormals::new(Arc::new(Rectangle::yz(
            y, z, p0[0], material,
        )))),
    ];
    HitableList::new(faces)
}
