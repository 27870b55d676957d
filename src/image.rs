use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::info;
use rand::random;
use thiserror::Error;

use crate::geometry::Rect;
use crate::utils::Color;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("unable to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("unable to write {path:?}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// A CPU-side RGBA image that sprites sample from and renderers draw into.
///
/// Sprites borrow images rather than owning them, so an `Image` must stay
/// alive for as long as any sprite references it.
pub struct Image {
    pixels: RgbaImage,
}

impl Image {
    pub fn solid(width: u32, height: u32, color: Color) -> Image {
        Image {
            pixels: RgbaImage::from_pixel(width, height, color.into()),
        }
    }

    pub fn noise(width: u32, height: u32) -> Image {
        let mut pixels = RgbaImage::new(width, height);
        for pixel in pixels.pixels_mut() {
            *pixel = image::Rgba([random::<u8>(), random::<u8>(), random::<u8>(), 255]);
        }
        Image { pixels }
    }

    pub fn from_file(path: &Path) -> Result<Image, ImageError> {
        let bytes = std::fs::read(path).map_err(|source| ImageError::Io {
            path: path.to_owned(),
            source,
        })?;
        let image = Self::from_memory(&bytes)?;
        info!(
            "loaded image {:?} ({}x{})",
            path,
            image.width(),
            image.height()
        );
        Ok(image)
    }

    pub fn from_memory(bytes: &[u8]) -> Result<Image, ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Image {
            pixels: decoded.to_rgba8(),
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ImageError> {
        self.pixels.save(path).map_err(|source| ImageError::Encode {
            path: path.to_owned(),
            source,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Fetch a texel. Out-of-range coordinates clamp to the nearest edge,
    /// matching how the renderers sample. Empty images have no texels to
    /// clamp to and return transparent black.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        if self.width() == 0 || self.height() == 0 {
            return Color::TRANSPARENT;
        }
        let x = x.min(self.width() - 1);
        let y = y.min(self.height() - 1);
        (*self.pixels.get_pixel(x, y)).into()
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width() && y < self.height() {
            self.pixels.put_pixel(x, y, color.into());
        }
    }

    /// Map a pixel rectangle to normalized [0, 1] texture coordinates.
    pub fn tex_coords(&self, rect: Rect<i32>) -> Rect<f32> {
        if self.width() == 0 || self.height() == 0 {
            return Rect::new(0.0, 0.0, 0.0, 0.0);
        }
        let w = self.width() as f32;
        let h = self.height() as f32;
        Rect {
            x: rect.x as f32 / w,
            y: rect.y as f32 / h,
            w: rect.w as f32 / w,
            h: rect.h as f32 / h,
        }
    }
}
