//! Input representation for example conversion.
//!
//! This module defines the types the external driver hands to the
//! converter: an [`AnnotatedImage`] carrying encoded bytes, and the
//! [`LocatedObject`]s found in it.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: Marker types keep pixel-space geometry (object
//!    rectangles, polygon vertices) apart from normalized box edges.
//!
//! 2. **Permissive Construction**: Objects may carry negative, empty or
//!    out-of-image rectangles. The normalizer drops those instead of the
//!    constructors refusing them.
//!
//! # Example
//!
//! ```
//! use tfod_example::ir::{AnnotatedImage, ImageFormat, LocatedObject, Polygon};
//!
//! let image = AnnotatedImage::new("image.jpg", 640, 480, Some(vec![0xFF, 0xD8]), ImageFormat::Jpeg);
//! let objects = vec![
//!     LocatedObject::new(10, 20, 100, 50).with_label("person"),
//!     LocatedObject::new(200, 100, 30, 30)
//!         .with_label("dog")
//!         .with_polygon(Polygon::from_points([(200.0, 100.0), (229.0, 100.0), (215.0, 129.0)])),
//! ];
//! assert_eq!(objects.len(), 2);
//! assert_eq!(image.format.default_extension(), "jpg");
//! ```

mod bbox;
mod coord;
mod ids;
mod model;
mod space;

pub use bbox::BBoxXYXY;
pub use coord::Coord;
pub use ids::ClassId;
pub use model::{AnnotatedImage, ImageFormat, LocatedObject, Polygon, LABEL_METADATA_KEY};
pub use space::{Normalized, Pixel};
