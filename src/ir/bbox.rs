//! Bounding boxes in XYXY form.

use super::coord::Coord;
use super::{Normalized, Pixel};

/// An axis-aligned bounding box in XYXY format (xmin, ymin, xmax, ymax).
///
/// The constructor does not enforce `min < max`; degenerate boxes are
/// representable so that the normalizer can decide what to drop.
#[derive(Clone, Copy, PartialEq)]
pub struct BBoxXYXY<TSpace> {
    pub min: Coord<TSpace>,
    pub max: Coord<TSpace>,
}

impl<TSpace> BBoxXYXY<TSpace> {
    #[inline]
    pub fn from_xyxy(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            min: Coord::new(xmin, ymin),
            max: Coord::new(xmax, ymax),
        }
    }

    #[inline]
    pub fn xmin(&self) -> f64 {
        self.min.x
    }

    #[inline]
    pub fn ymin(&self) -> f64 {
        self.min.y
    }

    #[inline]
    pub fn xmax(&self) -> f64 {
        self.max.x
    }

    #[inline]
    pub fn ymax(&self) -> f64 {
        self.max.y
    }
}

impl<TSpace> std::fmt::Debug for BBoxXYXY<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBoxXYXY")
            .field("xmin", &self.min.x)
            .field("ymin", &self.min.y)
            .field("xmax", &self.max.x)
            .field("ymax", &self.max.y)
            .finish()
    }
}

impl BBoxXYXY<Pixel> {
    /// Builds a box from an inclusive pixel rectangle.
    ///
    /// A rectangle of `width` pixels starting at `x` covers columns
    /// `x ..= x + width - 1`, so a 1-pixel-wide box has `xmin == xmax`.
    #[inline]
    pub fn from_inclusive_xywh(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self::from_xyxy(
            x as f64,
            y as f64,
            x.saturating_add(width).saturating_sub(1) as f64,
            y.saturating_add(height).saturating_sub(1) as f64,
        )
    }

    /// Divides each edge by the corresponding image dimension.
    pub fn to_normalized(&self, image_width: f64, image_height: f64) -> BBoxXYXY<Normalized> {
        BBoxXYXY::from_xyxy(
            self.min.x / image_width,
            self.min.y / image_height,
            self.max.x / image_width,
            self.max.y / image_height,
        )
    }
}

impl BBoxXYXY<Normalized> {
    /// Returns true if `0 <= xmin < xmax <= 1` and `0 <= ymin < ymax <= 1`.
    ///
    /// NaN edges fail every comparison and are therefore rejected.
    #[inline]
    pub fn is_valid_unit_box(&self) -> bool {
        (0.0 <= self.min.x && self.min.x < self.max.x && self.max.x <= 1.0)
            && (0.0 <= self.min.y && self.min.y < self.max.y && self.max.y <= 1.0)
    }
}
