use crate::aliases::{RandGen, Vec3};
use crate::error::RenderError;
use crate::integrator::{radiance, MAX_DEPTH};
use crate::scene::Scene;
use crate::util::{sanitize_vec3, to_byte};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Sender};
use std::time::Instant;

/// Knobs of one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub samples_per_pixel: usize,
    pub max_depth: usize,
    pub threads: usize,
    /// Base seed of the per-row random streams. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 500,
            height: 500,
            samples_per_pixel: 10,
            max_depth: MAX_DEPTH,
            threads: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            seed: None,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::ZeroSamples);
        }
        if self.threads == 0 {
            return Err(RenderError::ZeroThreads);
        }
        Ok(())
    }
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// 8-bit RGB raster, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>, // width * height * 3
}

impl Image {
    /// Pixel at column `x` of row `y` (row 0 is the top), None outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 3;
        let rgb = self.pixels.get(idx..idx + 3)?;
        Some([rgb[0], rgb[1], rgb[2]])
    }
    /// Mean of all channel bytes.
    pub fn mean(&self) -> f64 {
        if self.pixels.is_empty() {
            return 0.0;
        }
        self.pixels.iter().map(|&b| b as f64).sum::<f64>() / self.pixels.len() as f64
    }
}

struct RowResult {
    row: usize, // output row, 0 at the top
    bytes: Vec<u8>,
    nan_samples: usize,
}

/// Renders `scene` to completion.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<Image, RenderError> {
    render_with_cancel(scene, config, &AtomicBool::new(false))
}

/// Renders `scene`, checking `cancel` before each row is started.
///
/// Rows are handed to workers through a shared counter. Each row draws from its
/// own generator seeded by the base seed and the row index, so the image does
/// not depend on the number of threads.
pub fn render_with_cancel(
    scene: &Scene,
    config: &RenderConfig,
    cancel: &AtomicBool,
) -> Result<Image, RenderError> {
    config.validate()?;
    let seed = match config.seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random();
            info!("no seed given, using {}", seed);
            seed
        }
    };
    info!(
        "rendering {}x{} at {} spp, max depth {}, {} threads",
        config.width, config.height, config.samples_per_pixel, config.max_depth, config.threads
    );
    let start_time = Instant::now();
    let row_len = config.width * 3;
    let mut pixels = vec![0u8; row_len * config.height];
    let next_row = AtomicUsize::new(0);
    let (rows_done, nan_samples) = crossbeam::scope(|scope| {
        let (tx, rx) = channel::<RowResult>();
        for _ in 0..config.threads {
            let tx = tx.clone();
            let next_row = &next_row;
            scope.spawn(move |_| trace_rows(scene, config, seed, next_row, cancel, tx));
        }
        drop(tx); // rx iteration ends once every worker is done
        let mut rows_done = 0;
        let mut nan_samples = 0;
        for res in rx {
            pixels[res.row * row_len..(res.row + 1) * row_len].copy_from_slice(&res.bytes);
            rows_done += 1;
            nan_samples += res.nan_samples;
            if rows_done % 64 == 0 {
                debug!(
                    "{}/{} rows ({:.3} secs)",
                    rows_done,
                    config.height,
                    start_time.elapsed().as_secs_f64()
                );
            }
        }
        (rows_done, nan_samples)
    })
    .map_err(|_| RenderError::WorkerPanicked)?;
    if nan_samples > 0 {
        warn!("{} samples were NaN and counted as black", nan_samples);
    }
    if rows_done < config.height {
        info!("cancelled after {} rows", rows_done);
        return Err(RenderError::Cancelled { rows_done });
    }
    info!(
        "rendered in {:.3} secs",
        start_time.elapsed().as_secs_f64()
    );
    Ok(Image {
        width: config.width,
        height: config.height,
        pixels,
    })
}

fn trace_rows(
    scene: &Scene,
    config: &RenderConfig,
    seed: u64,
    next_row: &AtomicUsize,
    cancel: &AtomicBool,
    tx: Sender<RowResult>,
) {
    loop {
        if cancel.load(Ordering::Relaxed) {
            return;
        }
        let row = next_row.fetch_add(1, Ordering::Relaxed);
        if row >= config.height {
            return;
        }
        let res = trace_row(scene, config, seed, row);
        if tx.send(res).is_err() {
            return;
        }
    }
}

fn row_rng(seed: u64, row: usize) -> RandGen {
    RandGen::seed_from_u64(seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn trace_row(scene: &Scene, config: &RenderConfig, seed: u64, row: usize) -> RowResult {
    let mut rng = row_rng(seed, row);
    // film v grows upward, output rows grow downward
    let j = config.height - 1 - row;
    let mut bytes = Vec::with_capacity(config.width * 3);
    let mut nan_samples = 0;
    for i in 0..config.width {
        let mut col = Vec3::zeros();
        for _ in 0..config.samples_per_pixel {
            let u = (i as f64 + rng.gen::<f64>()) / config.width as f64;
            let v = (j as f64 + rng.gen::<f64>()) / config.height as f64;
            let ray = scene.camera.get_ray(u, v, &mut rng);
            let mut sample = radiance(&ray, scene, config.max_depth, &mut rng);
            if sanitize_vec3(&mut sample) {
                nan_samples += 1;
            }
            col += sample;
        }
        col /= config.samples_per_pixel as f64;
        bytes.extend(col.iter().map(|&c| to_byte(c)));
    }
    RowResult {
        row,
        bytes,
        nan_samples,
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::Vec3;
    use crate::background::{AmbientLight, SkyGradient};
    use crate::camera::Camera;
    use crate::error::RenderError;
    use crate::hitable::hitable_list::HitableList;
    use crate::render::{render, render_with_cancel, RenderConfig};
    use crate::scene::Scene;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn empty_scene(bg: Vec3) -> Scene {
        Scene {
            hitables: Arc::new(HitableList::new(vec![])),
            light: None,
            camera: Camera::new(
                &Vec3::zeros(),
                &Vec3::new(0.0, 0.0, -1.0),
                &Vec3::new(0.0, 1.0, 0.0),
                90.0,
                1.0,
                0.0,
                1.0,
            ),
            bg: Arc::new(AmbientLight::new(&bg)),
        }
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 8,
            height: 6,
            samples_per_pixel: 2,
            threads: 3,
            seed: Some(5),
            ..RenderConfig::default()
        }
    }

    #[test]
    fn rejects_degenerate_configs() {
        let scene = empty_scene(Vec3::zeros());
        let zero_width = RenderConfig {
            width: 0,
            ..small_config()
        };
        assert_eq!(
            render(&scene, &zero_width),
            Err(RenderError::ZeroDimension {
                width: 0,
                height: 6
            })
        );
        let zero_spp = RenderConfig {
            samples_per_pixel: 0,
            ..small_config()
        };
        assert_eq!(render(&scene, &zero_spp), Err(RenderError::ZeroSamples));
        let zero_threads = RenderConfig {
            threads: 0,
            ..small_config()
        };
        assert_eq!(render(&scene, &zero_threads), Err(RenderError::ZeroThreads));
    }

    #[test]
    fn uniform_background_fills_image() {
        let scene = empty_scene(Vec3::new(0.25, 1.0, 0.0));
        let image = render(&scene, &small_config()).unwrap();
        assert_eq!(image.pixels.len(), 8 * 6 * 3);
        for y in 0..6 {
            for x in 0..8 {
                // sqrt(0.25) * 255.99 = 127.995
                assert_eq!(image.pixel(x, y), Some([127, 255, 0]));
            }
        }
        assert_eq!(image.pixel(8, 0), None);
        assert_eq!(image.pixel(0, 6), None);
    }

    #[test]
    fn top_row_looks_up() {
        let mut scene = empty_scene(Vec3::zeros());
        scene.bg = Arc::new(SkyGradient::new(
            &Vec3::new(0.0, 0.0, 0.0),
            &Vec3::new(1.0, 1.0, 1.0),
        ));
        let image = render(&scene, &small_config()).unwrap();
        let top = image.pixel(0, 0).unwrap();
        let bottom = image.pixel(0, 5).unwrap();
        assert!(top[0] > bottom[0]);
    }

    #[test]
    fn cancelled_before_start() {
        let scene = empty_scene(Vec3::zeros());
        let cancel = AtomicBool::new(true);
        assert_eq!(
            render_with_cancel(&scene, &small_config(), &cancel),
            Err(RenderError::Cancelled { rows_done: 0 })
        );
    }

    #[test]
    fn independent_of_thread_count() {
        let mut scene = empty_scene(Vec3::zeros());
        scene.bg = Arc::new(SkyGradient::default());
        let one = RenderConfig {
            threads: 1,
            ..small_config()
        };
        let many = RenderConfig {
            threads: 4,
            ..small_config()
        };
        assert_eq!(render(&scene, &one), render(&scene, &many));
    }
}
