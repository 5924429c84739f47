//! PNG output: SVG text is parsed with usvg, drawn into a tiny-skia pixmap
//! and encoded with the `image` PNG encoder.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use resvg::{tiny_skia, usvg};
use tracing::debug;

use super::age_chart::AgeChart;
use super::element::SvgElement;
use crate::config::ChartConfig;
use crate::error::{DeckError, Result};

/// Writes one chart to one file.
pub trait ChartBackend {
    /// Draw `chart` and write it to `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be drawn or the file cannot be written.
    fn write_chart(&self, chart: &AgeChart, path: &Path) -> Result<()>;
}

/// Raster backend producing PNG files.
pub struct PngBackend {
    options: usvg::Options<'static>,
}

impl PngBackend {
    /// Build a backend with the fonts named in `config` loaded.
    ///
    /// # Errors
    /// Returns `FileRead` if one of `config.font_files` cannot be loaded.
    pub fn new(config: &ChartConfig) -> Result<Self> {
        let mut options = usvg::Options::default();
        if config.load_system_fonts {
            options.fontdb_mut().load_system_fonts();
        }
        for font in &config.font_files {
            options
                .fontdb_mut()
                .load_font_file(font)
                .map_err(|source| DeckError::FileRead {
                    path: font.clone(),
                    source,
                })?;
        }
        if let Some(first) = config.font_family.split(',').next() {
            options.font_family = first.trim().to_string();
        }
        debug!(faces = options.fontdb.len(), "font database ready");

        Ok(Self { options })
    }

    /// Draw SVG text onto a white pixmap of the given size.
    ///
    /// # Errors
    /// Returns `Svg` if the SVG cannot be parsed or the pixmap cannot be allocated.
    pub fn rasterize(&self, svg: &str, width: u32, height: u32) -> Result<tiny_skia::Pixmap> {
        let tree = usvg::Tree::from_str(svg, &self.options)
            .map_err(|e| DeckError::Svg(format!("parse failed: {e}")))?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| DeckError::Svg(format!("cannot allocate {width}x{height} pixmap")))?;
        pixmap.fill(tiny_skia::Color::WHITE);
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

/// Encode an opaque pixmap as PNG. With an opaque background the
/// premultiplied pixel data equals straight RGBA.
fn write_png(pixmap: &tiny_skia::Pixmap, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    PngEncoder::new(&mut writer).write_image(
        pixmap.data(),
        pixmap.width(),
        pixmap.height(),
        ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;
    Ok(())
}

impl ChartBackend for PngBackend {
    fn write_chart(&self, chart: &AgeChart, path: &Path) -> Result<()> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (width, height) = (chart.width.round() as u32, chart.height.round() as u32);

        // The pixmap is dropped on return, success or not.
        let pixmap = self.rasterize(&chart.render(), width, height)?;
        write_png(&pixmap, path)?;
        debug!(path = %path.display(), width, height, "wrote chart");
        Ok(())
    }
}

#[cfg(test)]
#[path = "raster_tests.rs"]
mod tests;
