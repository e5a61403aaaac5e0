//! Instance masks rasterized from polygons.
//!
//! A [`Mask`] is an 8-bit single-channel image aligned to the source image's
//! pixel grid, holding 1 inside the object and 0 elsewhere. It has two
//! encodings for `image/object/mask`: a dense float list and a PNG blob.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, GrayImage, ImageEncoder, Luma};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

use crate::ir::Polygon;

/// Pixel value for mask membership.
pub const MASK_FOREGROUND: u8 = 1;

/// Vertices are clamped to this magnitude before rasterizing.
const MAX_VERTEX_COORD: i32 = 1 << 20;

/// A binary pixel mask.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    pixels: GrayImage,
}

impl Mask {
    /// An all-background mask.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            pixels: GrayImage::new(width, height),
        }
    }

    /// Fills `polygon` (outline included) on a `width` x `height` grid.
    ///
    /// Vertices outside the grid are clipped by the rasterizer. Non-finite
    /// vertices are skipped.
    pub fn from_polygon(polygon: &Polygon, width: u32, height: u32) -> Self {
        let mut mask = Self::empty(width, height);

        let mut points: Vec<Point<i32>> = polygon
            .points
            .iter()
            .filter(|p| p.is_finite())
            .map(|p| {
                let (x, y) = p.to_pixel_i32();
                Point::new(
                    x.clamp(-MAX_VERTEX_COORD, MAX_VERTEX_COORD),
                    y.clamp(-MAX_VERTEX_COORD, MAX_VERTEX_COORD),
                )
            })
            .collect();

        // The rasterizer rejects an explicitly closed ring
        points.dedup();
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        match points.as_slice() {
            [] => {}
            [only] => mask.set_if_inside(only.x, only.y),
            _ => draw_polygon_mut(&mut mask.pixels, &points, Luma([MASK_FOREGROUND])),
        }

        mask
    }

    fn set_if_inside(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.pixels.put_pixel(x as u32, y as u32, Luma([MASK_FOREGROUND]));
        }
    }

    /// Decodes a PNG written by [`Mask::to_png`].
    pub fn from_png(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?;
        Ok(Self {
            pixels: decoded.into_luma8(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.as_raw().len()
    }

    /// Whether the pixel at (`x`, `y`) belongs to the object.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.pixels
            .get_pixel_checked(x, y)
            .is_some_and(|p| p.0[0] != 0)
    }

    /// Number of foreground pixels.
    pub fn foreground_count(&self) -> usize {
        self.pixels.as_raw().iter().filter(|&&v| v != 0).count()
    }

    /// Row-major membership values, 0.0 or 1.0.
    pub fn to_dense(&self) -> Vec<f32> {
        self.pixels.as_raw().iter().map(|&v| f32::from(v)).collect()
    }

    /// Encodes as an 8-bit grayscale PNG holding 0/1 values.
    pub fn to_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf).write_image(
            self.pixels.as_raw(),
            self.width(),
            self.height(),
            ExtendedColorType::L8,
        )?;
        Ok(buf)
    }
}
