//! PNG reading and writing for the image-based color tools.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;
use tracing::debug;

/// Decoded image as 8-bit RGBA rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// `width * height * 4` bytes, row-major
    pub pixels: Vec<u8>,
}

impl RgbaImage {
    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / 4
    }
}

/// Decodes PNG data from any reader.
///
/// Palette, low bit depth and 16-bit images are expanded to 8 bits per
/// channel; gray and RGB images gain an opaque alpha channel.
pub fn decode_png<R: Read>(reader: R) -> Result<RgbaImage> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().context("Not a readable PNG image")?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .context("Failed to decode PNG image data")?;
    let data = &buf[..frame.buffer_size()];

    let pixels: Vec<u8> = match frame.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::Indexed => anyhow::bail!("Indexed PNG was not expanded"),
    };

    debug!(
        width = frame.width,
        height = frame.height,
        color = ?frame.color_type,
        "PNG decoded"
    );
    Ok(RgbaImage {
        width: frame.width,
        height: frame.height,
        pixels,
    })
}

/// Reads a PNG file.
pub fn read_png(path: &Path) -> Result<RgbaImage> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open image: {}", path.display()))?;
    decode_png(BufReader::new(file)).with_context(|| format!("Failed to read {}", path.display()))
}

/// Writes an RGBA8 PNG file.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<()> {
    let expected = image.width as usize * image.height as usize * 4;
    if image.pixels.len() != expected {
        anyhow::bail!(
            "Pixel buffer has {} bytes, expected {expected} for {}x{}",
            image.pixels.len(),
            image.width,
            image.height
        );
    }

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create image: {}", path.display()))?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .context("Failed to write PNG header")?;
    writer
        .write_image_data(&image.pixels)
        .context("Failed to write PNG image data")?;
    writer.finish().context("Failed to finish PNG file")?;

    debug!(path = %path.display(), "PNG written");
    Ok(())
}
