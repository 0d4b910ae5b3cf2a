use std::sync::Arc;
use std::time::Instant;

use crossbeam::channel::unbounded;
use rayon::prelude::*;
use tracing::info;

use crate::color::Color;
use crate::error::Result;
use crate::integrator::RayCastIntegrator;
use crate::math::{Point3, Ray};
use crate::parsing::config::RenderSettings;
use crate::renderer::Film;
use crate::world::World;

/// Brute-force renderer: every screen point gets a full trace, with the
/// points fanned out round-robin over the rayon pool.
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }

    /// Render `world` at the configured resolution.
    ///
    /// Screen points live on the `z = 0` plane with y growing upward; the
    /// primary ray runs from the scene camera through each of them. Workers
    /// push `(x, y, color)` results over a channel and the film is filled
    /// in whatever order they arrive, flipping the row index because the
    /// film is stored top-down. The first worker error aborts the render.
    pub fn render(&self, world: Arc<World>, settings: &RenderSettings) -> Result<Film<Color>> {
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        let chunk_count = (settings.threads as usize).max(1);
        info!(width, height, chunks = chunk_count, "starting render");
        let now = Instant::now();

        let integrator = RayCastIntegrator::new(Arc::clone(&world));
        let chunks = interleave_screen_points(width, height, chunk_count);

        let (tx, rx) = unbounded();
        chunks
            .into_par_iter()
            .try_for_each_with(tx, |tx, chunk| -> Result<()> {
                for (x, y) in chunk {
                    let screen_point = Point3::new(x as f32, y as f32, 0.0);
                    let ray = Ray::through(world.camera, screen_point)?;
                    let color = integrator.color(ray)?;
                    tx.send((x, y, color)).unwrap();
                }
                Ok(())
            })?;

        let mut film = Film::new(width, height, world.background);
        for (x, y, color) in rx.try_iter() {
            film.write_at(x, height - 1 - y, color)?;
        }
        info!(elapsed_ms = now.elapsed().as_millis() as u64, "render finished");
        Ok(film)
    }
}

/// Round-robin split of the screen points: pixel `i` lands in chunk
/// `i % count`. Interleaving balances load when per-pixel cost clusters
/// spatially, which it does wherever shapes do.
fn interleave_screen_points(
    width: usize,
    height: usize,
    count: usize,
) -> Vec<Vec<(usize, usize)>> {
    let mut chunks = vec![Vec::new(); count];
    for index in 0..width * height {
        chunks[index % count].push((index % width, index / width));
    }
    chunks
}
