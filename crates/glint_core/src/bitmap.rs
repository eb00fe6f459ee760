//! 24-bit uncompressed bitmap reading and writing.
//!
//! Files are standard BMPs: a 14-byte file header, a 40-byte info header and
//! bottom-up rows of blue-green-red pixels, each row padded to a multiple of
//! four bytes. In memory, pixels are kept top-down and row-major.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;

use glint_math::Color;
use image::codecs::bmp::BmpEncoder;
use image::{ColorType, ImageFormat};
use thiserror::Error;

/// Errors that can occur while reading or writing a bitmap.
#[derive(Error, Debug)]
pub enum BitmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image coding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Bitmap has zero size ({width}x{height})")]
    ZeroSize { width: u32, height: u32 },

    #[error("Pixel buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

pub type BitmapResult<T> = Result<T, BitmapError>;

/// A decoded bitmap.
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    /// Row-major, row 0 at the top of the image.
    pub pixels: Vec<Color>,
}

impl Bitmap {
    /// Get the pixel at (x, y), with y = 0 the top row.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[pixel_index(self.width, x, y)]
    }
}

/// Row-major index of (x, y), computed in `usize` so large images do not
/// wrap around.
#[inline]
pub(crate) fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Reject zero sizes and pixel buffers that do not fill `width * height`.
pub(crate) fn check_dimensions(width: u32, height: u32, pixels: usize) -> BitmapResult<()> {
    if width == 0 || height == 0 {
        return Err(BitmapError::ZeroSize { width, height });
    }
    let expected = width as usize * height as usize;
    if pixels != expected {
        return Err(BitmapError::BufferSize {
            expected,
            actual: pixels,
        });
    }
    Ok(())
}

/// Encode top-down `pixels` as a 24-bit bitmap into `writer`.
///
/// Channels are clamped to [0, 255] and truncated on the way out.
pub fn encode_bitmap<W: Write>(
    writer: &mut W,
    width: u32,
    height: u32,
    pixels: &[Color],
) -> BitmapResult<()> {
    check_dimensions(width, height, pixels.len())?;

    let bytes: Vec<u8> = pixels.iter().flat_map(|c| c.to_rgb8()).collect();
    BmpEncoder::new(writer).encode(&bytes, width, height, ColorType::Rgb8)?;
    Ok(())
}

/// Write top-down `pixels` to a bitmap file at `path`.
pub fn write_bitmap(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
    pixels: &[Color],
) -> BitmapResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    encode_bitmap(&mut writer, width, height, pixels)?;
    writer.flush()?;

    log::debug!("Wrote bitmap: {} ({}x{})", path.display(), width, height);
    Ok(())
}

/// Decode a bitmap from `reader`.
pub fn decode_bitmap<R: BufRead + Seek>(reader: R) -> BitmapResult<Bitmap> {
    let image = image::load(reader, ImageFormat::Bmp)?.to_rgb8();
    let (width, height) = image.dimensions();

    let pixels: Vec<Color> = image.pixels().map(|p| Color::from(p.0)).collect();
    check_dimensions(width, height, pixels.len())?;

    Ok(Bitmap {
        width,
        height,
        pixels,
    })
}

/// Read a bitmap file from `path`.
pub fn read_bitmap(path: impl AsRef<Path>) -> BitmapResult<Bitmap> {
    let path = path.as_ref();
    let bitmap = decode_bitmap(BufReader::new(File::open(path)?))?;

    log::debug!(
        "Loaded bitmap: {} ({}x{})",
        path.display(),
        bitmap.width,
        bitmap.height
    );
    Ok(bitmap)
}
