mod cornell;
mod random_spheres;
mod textured;

use clap::ValueEnum;
use pathtrace::aliases::RandGen;
use pathtrace::scene::Scene;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScenesType {
    CornellBox,
    CornellSmoke,
    RandomSpheres,
    Perlin,
    Globe,
}

/// Builds the chosen scene. `texture` is only read by scenes that need a bitmap.
pub fn get(
    scene_type: ScenesType,
    aspect_ratio: f64,
    texture: Option<&Path>,
    rng: &mut RandGen,
) -> anyhow::Result<Scene> {
    let scene = match scene_type {
        ScenesType::CornellBox => self::cornell::cornell_box(aspect_ratio),
        ScenesType::CornellSmoke => self::cornell::cornell_smoke(aspect_ratio),
        ScenesType::RandomSpheres => self::random_spheres::scene(aspect_ratio, rng)?,
        ScenesType::Perlin => self::textured::perlin_spheres(aspect_ratio, rng),
        ScenesType::Globe => {
            let path = texture.ok_or_else(|| anyhow::anyhow!("the globe scene needs --texture"))?;
            self::textured::globe(aspect_ratio, path)?
        }
    };
    Ok(scene)
}
