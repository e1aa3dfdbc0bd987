//! Image to text conversion.
//!
//! An image is resized, optionally inverted, and every pixel is reduced to a
//! brightness in `0..=255` that picks a character from [`RAMP`], sparse
//! glyphs for dark pixels through dense glyphs for bright ones.

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use tracing::{debug, info};

/// Characters ordered from darkest to brightest.
pub const RAMP: &str = "`^\",:;Il!i~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

#[derive(thiserror::Error, Debug)]
pub enum AsciiArtError {
    #[error("failed to load image {}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// How a pixel's three channels collapse into one brightness value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Brightness {
    /// Integer mean of the channels.
    Average,
    /// Midpoint of the brightest and darkest channel.
    Lightness,
    /// Perceptual weighting, green heaviest.
    #[default]
    Luminosity,
}

impl Brightness {
    pub fn of(self, pixel: Rgb<u8>) -> f64 {
        let [r, g, b] = pixel.0;
        match self {
            Brightness::Average => f64::from((u16::from(r) + u16::from(g) + u16::from(b)) / 3),
            Brightness::Lightness => {
                let max = r.max(g).max(b);
                let min = r.min(g).min(b);
                (f64::from(max) + f64::from(min)) / 2.0
            }
            Brightness::Luminosity => {
                0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct AsciiArtConfig {
    brightness: Brightness,
    invert: bool,
    size: Option<(u32, u32)>,
    color: Color,
}

impl Default for AsciiArtConfig {
    fn default() -> Self {
        Self {
            brightness: Brightness::default(),
            invert: false,
            size: Some((240, 320)),
            color: Color::White,
        }
    }
}

impl AsciiArtConfig {
    pub fn brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = brightness;
        self
    }

    /// Swap dark and bright before picking characters.
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Resize to `width` characters by `height` lines before converting.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width.max(1), height.max(1)));
        self
    }

    /// Convert at the image's own resolution.
    pub fn keep_size(mut self) -> Self {
        self.size = None;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

fn ramp_index(brightness: f64) -> usize {
    let last = RAMP.len() - 1;
    ((brightness / 255.0 * last as f64) as usize).min(last)
}

/// Ramp character for a brightness in `0..=255`.
pub fn ramp_char(brightness: f64) -> char {
    char::from(RAMP.as_bytes()[ramp_index(brightness)])
}

fn invert(pixel: Rgb<u8>) -> Rgb<u8> {
    Rgb(pixel.0.map(|c| 255 - c))
}

pub fn load_image(path: &Path) -> Result<RgbImage, AsciiArtError> {
    let image = image::open(path)
        .map_err(|source| AsciiArtError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();
    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "loaded image"
    );
    Ok(image)
}

/// One string per line of output, top to bottom.
pub fn to_ascii(image: &RgbImage, config: &AsciiArtConfig) -> Vec<String> {
    let image = match config.size {
        Some((width, height)) if (width, height) != image.dimensions() => {
            debug!(width, height, "resizing image");
            Cow::Owned(imageops::resize(image, width, height, FilterType::Triangle))
        }
        _ => Cow::Borrowed(image),
    };

    image
        .rows()
        .map(|row| {
            row.map(|&pixel| {
                let pixel = if config.invert { invert(pixel) } else { pixel };
                ramp_char(config.brightness.of(pixel))
            })
            .collect()
        })
        .collect()
}

/// Writes `lines` in the configured colour, resetting it afterwards.
pub fn write_ascii<W: Write>(
    out: &mut W,
    lines: &[String],
    config: &AsciiArtConfig,
) -> io::Result<()> {
    queue!(out, SetForegroundColor(config.color))?;
    for line in lines {
        queue!(out, Print(line), Print('\n'))?;
    }
    queue!(out, ResetColor)?;
    out.flush()
}
