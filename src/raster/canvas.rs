//! Pixel access traits implemented for in-memory RGBA buffers

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::TRANSPARENT;

/// Four-channel color as `[r, g, b, a]`
pub type Color = [u8; 4];

/// Read-only pixel access
pub trait Raster {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Color at `(x, y)`, or `None` outside the image
    fn pixel(&self, x: u32, y: u32) -> Option<Color>;

    /// Dimensions as `(width, height)`
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// Writable pixel access
pub trait RasterMut: Raster {
    /// Overwrite the color at `(x, y)`
    ///
    /// Writes outside the image are ignored.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

impl Raster for RgbaImage {
    fn width(&self) -> u32 {
        Self::width(self)
    }

    fn height(&self) -> u32 {
        Self::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.get_pixel_checked(x, y).map(|pixel| pixel.0)
    }
}

impl RasterMut for RgbaImage {
    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(pixel) = self.get_pixel_mut_checked(x, y) {
            *pixel = Rgba(color);
        }
    }
}

/// Create a fully transparent canvas of the given size
pub fn blank_canvas(width: u32, height: u32) -> RgbaImage {
    ImageBuffer::from_pixel(width, height, Rgba(TRANSPARENT))
}
