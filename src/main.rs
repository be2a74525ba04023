mod scenes;

use crate::scenes::ScenesType;
use anyhow::{bail, Context};
use clap::Parser;
use log::info;
use pathtrace::aliases::RandGen;
use pathtrace::render::{render, RenderConfig};
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Monte-Carlo path tracer writing one PNG per run.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 500)]
    width: usize,
    #[arg(long, default_value_t = 500)]
    height: usize,
    /// Samples per pixel
    #[arg(short, long, default_value_t = 10)]
    samples: usize,
    /// Maximum number of bounces per path
    #[arg(long, default_value_t = pathtrace::integrator::MAX_DEPTH)]
    max_depth: usize,
    /// Worker threads (defaults to the available parallelism)
    #[arg(short, long)]
    threads: Option<usize>,
    /// Seed for scene generation and sampling (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = ScenesType::CornellBox)]
    scene: ScenesType,
    /// Equirectangular bitmap for the globe scene
    #[arg(long)]
    texture: Option<PathBuf>,
    #[arg(short, long, default_value = "image.png")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let start_time = Instant::now();
    if !output_dir_exists(&args.output) {
        bail!(
            "output directory does not exist: {}",
            args.output.display()
        );
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut config = RenderConfig {
        width: args.width,
        height: args.height,
        samples_per_pixel: args.samples,
        max_depth: args.max_depth,
        seed: Some(seed),
        ..RenderConfig::default()
    };
    if let Some(threads) = args.threads {
        config.threads = threads;
    }
    config.validate()?;
    info!("scene {:?}, seed {}", args.scene, seed);
    let mut rng = RandGen::seed_from_u64(seed);
    let scene = scenes::get(
        args.scene,
        config.aspect(),
        args.texture.as_deref(),
        &mut rng,
    )?;
    info!(
        "scene constructed ({:.3} secs elapsed)",
        start_time.elapsed().as_secs_f64()
    );
    let image = render(&scene, &config)?;
    image::save_buffer(
        &args.output,
        &image.pixels,
        image.width as u32,
        image.height as u32,
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("cannot write {}", args.output.display()))?;
    info!(
        "saved {} ({:.3} secs elapsed)",
        args.output.display(),
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn output_dir_exists(path: &Path) -> bool {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.is_dir(),
        _ => true, // bare file name: current directory
    }
}
