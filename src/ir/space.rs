//! Coordinate space marker types.
//!
//! Zero-sized types used as type parameters to keep pixel-space and
//! normalized-space geometry apart at compile time.

use std::fmt;

/// Marker type for pixel coordinates, origin at the top-left corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Marker type for coordinates normalized to `[0, 1]` by the image extent.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
