//! In-memory slide deck, saved as a PowerPoint package.
//!
//! Slides are appended in order and never reordered. Every slide uses the
//! single "Title Only" layout with the chart image placed below the title.

mod parts;
mod slide;

use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use image::ImageReader;
use tracing::debug;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::error::{DeckError, Result};

pub use parts::{SLIDE_HEIGHT_EMU, SLIDE_WIDTH_EMU};
pub use slide::{PICTURE_HEIGHT_EMU, PICTURE_LEFT_EMU, PICTURE_TOP_EMU, PictureExtent};

/// One slide: its title and the embedded PNG.
#[derive(Debug, Clone)]
pub struct SlideRecord {
    pub title: String,
    image: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

impl SlideRecord {
    #[must_use]
    pub fn extent(&self) -> PictureExtent {
        PictureExtent::for_pixels(self.width_px, self.height_px)
    }
}

/// Ordered, append-only slide collection.
#[derive(Debug, Default)]
pub struct Deck {
    title: String,
    slides: Vec<SlideRecord>,
}

impl Deck {
    /// Create an empty deck; `title` goes into the document properties.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slides: Vec::new(),
        }
    }

    /// Append a slide showing the image at `image_path` under `title`.
    ///
    /// The image is read into memory, so the file may be overwritten
    /// afterwards without affecting the deck.
    ///
    /// # Errors
    /// Returns `FileRead` if the image cannot be read, or an image error if
    /// its dimensions cannot be determined.
    pub fn add_slide(&mut self, image_path: &Path, title: impl Into<String>) -> Result<()> {
        let image = fs::read(image_path).map_err(|source| DeckError::FileRead {
            path: image_path.to_path_buf(),
            source,
        })?;
        let (width_px, height_px) = ImageReader::new(Cursor::new(&image))
            .with_guessed_format()?
            .into_dimensions()?;

        self.slides.push(SlideRecord {
            title: title.into(),
            image,
            width_px,
            height_px,
        });
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Write the deck to `path`, replacing any existing file.
    ///
    /// The package is written to a temporary file in the same directory and
    /// renamed over `path` only when complete, so a failed save leaves
    /// whatever was at `path` before.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        replace_file(path, |sink| self.write_to(sink))?;
        debug!(path = %path.display(), slides = self.len(), "saved deck");
        Ok(())
    }

    /// Write the package to any seekable sink.
    ///
    /// # Errors
    /// Returns an error if the archive cannot be written.
    pub fn write_to<W: Write + Seek>(&self, sink: W) -> Result<()> {
        let xml = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        // PNG data is already compressed.
        let media = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        let count = self.slides.len();
        let mut zip = zip::ZipWriter::new(sink);

        let fixed = [
            ("[Content_Types].xml", parts::content_types(count)),
            ("_rels/.rels", parts::root_rels()),
            ("docProps/app.xml", parts::app_properties(count)),
            ("docProps/core.xml", parts::core_properties(&self.title)),
            ("ppt/presentation.xml", parts::presentation(count)),
            ("ppt/_rels/presentation.xml.rels", parts::presentation_rels(count)),
            ("ppt/slideMasters/slideMaster1.xml", parts::slide_master()),
            ("ppt/slideMasters/_rels/slideMaster1.xml.rels", parts::slide_master_rels()),
            ("ppt/slideLayouts/slideLayout1.xml", parts::slide_layout()),
            ("ppt/slideLayouts/_rels/slideLayout1.xml.rels", parts::slide_layout_rels()),
            ("ppt/theme/theme1.xml", parts::theme()),
            ("ppt/presProps.xml", parts::presentation_properties()),
            ("ppt/viewProps.xml", parts::view_properties()),
            ("ppt/tableStyles.xml", parts::table_styles()),
        ];
        for (name, content) in fixed {
            zip.start_file(name, xml)?;
            zip.write_all(content.as_bytes())?;
        }

        for (i, record) in self.slides.iter().enumerate() {
            zip.start_file(parts::slide_part_name(i), xml)?;
            zip.write_all(slide::slide_xml(&record.title, record.extent()).as_bytes())?;
            zip.start_file(parts::slide_rels_part_name(i), xml)?;
            zip.write_all(parts::slide_rels(i).as_bytes())?;
            zip.start_file(parts::media_part_name(i), media)?;
            zip.write_all(&record.image)?;
        }

        zip.finish()?;
        Ok(())
    }
}

/// Run `write` against a temporary sibling of `path`, then move it into place.
/// On error the temporary file is removed and `path` is not touched.
fn replace_file(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<&mut File>) -> Result<()>,
) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = tempfile::Builder::new()
        .prefix(".incidence-deck-")
        .suffix(".tmp")
        .tempfile_in(dir)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }

    temp.persist(path).map_err(|e| DeckError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
