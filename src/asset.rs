//! Icon images for the grid.
//!
//! An [`IconAsset`] is decoded once (PNG or JPEG), converted to RGBA and scaled
//! to the grid's icon size. Drawing it alpha-blends each pixel onto the canvas.
//! A missing or undecodable file is not fatal: [`IconAsset::load_or_placeholder`]
//! logs a warning and returns `None`, and the grid draws placeholder glyphs.

use std::path::Path;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::Point;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use tracing::{debug, warn};

use crate::canvas::Canvas;
use crate::error::{Error, Result};

/// Square RGBA icon, already scaled to its display size.
#[derive(Clone, Debug)]
pub struct IconAsset {
    image: RgbaImage,
}

impl IconAsset {
    /// Decode `path` and scale it to `size` x `size`.
    pub fn load(
        path: &Path,
        size: u32,
    ) -> Result<Self> {
        let decoded = image::open(path).map_err(|source| Error::AssetLoad {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), width = decoded.width(), height = decoded.height(), "icon decoded");
        Ok(Self::from_image(&decoded, size))
    }

    /// Like [`load`](Self::load), but a failure is logged and yields `None`.
    pub fn load_or_placeholder(
        path: &Path,
        size: u32,
    ) -> Option<Self> {
        match Self::load(path, size) {
            Ok(asset) => Some(asset),
            Err(e) => {
                warn!("{e}; drawing placeholders instead");
                None
            }
        }
    }

    /// Scale an already decoded image to `size` x `size`.
    pub fn from_image(
        image: &DynamicImage,
        size: u32,
    ) -> Self {
        Self::from_rgba(&image.to_rgba8(), size)
    }

    fn from_rgba(
        image: &RgbaImage,
        size: u32,
    ) -> Self {
        let image = if image.dimensions() == (size, size) {
            image.clone()
        } else {
            imageops::resize(image, size, size, FilterType::Triangle)
        };
        Self { image }
    }

    /// Edge length in pixels.
    #[inline]
    pub fn size(&self) -> u32 { self.image.width() }

    /// Copy of this asset scaled to `size`.
    pub fn resized(
        &self,
        size: u32,
    ) -> Self {
        Self::from_rgba(&self.image, size)
    }

    /// Alpha-blend the icon onto `canvas` with its top-left corner at `origin`.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        origin: Point,
    ) {
        for (x, y, pixel) in self.image.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            if a == 0 {
                continue;
            }
            let point = origin + Point::new(x as i32, y as i32);
            canvas.blend_pixel(point, Rgb888::new(r, g, b), f32::from(a) / 255.0);
        }
    }
}
