mod film;
mod naive;

pub use film::Film;
pub use naive::NaiveRenderer;

use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::color::Color;

/// Encode a finished film as a PNG at `path`.
pub fn output_film(film: &Film<Color>, path: &Path) -> anyhow::Result<()> {
    let mut image: image::RgbImage =
        image::ImageBuffer::new(film.width as u32, film.height as u32);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let color = film.at(x as usize, y as usize)?;
        *pixel = image::Rgb([color.r, color.g, color.b]);
    }
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}
