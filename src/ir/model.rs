//! Input model: an encoded image and the objects located in it.
//!
//! These types are what the external driver hands to the record builder.
//! They are read-only to the conversion core.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::bbox::BBoxXYXY;
use super::coord::Coord;
use super::space::Pixel;
use crate::error::TfExampleError;

/// Metadata key holding an object's label.
pub const LABEL_METADATA_KEY: &str = "type";

/// Encoding of an [`AnnotatedImage`]'s bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Bmp,
    Gif,
    Tiff,
    Webp,
}

impl ImageFormat {
    /// The canonical file extension written to `image/format`.
    pub fn default_extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Gif => "gif",
            ImageFormat::Tiff => "tif",
            ImageFormat::Webp => "webp",
        }
    }

    /// Looks up a format by file extension, ignoring case and a leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "jpe" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "bmp" => Some(ImageFormat::Bmp),
            "gif" => Some(ImageFormat::Gif),
            "tif" | "tiff" => Some(ImageFormat::Tiff),
            "webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    fn from_image_type(filename: &str, image_type: imagesize::ImageType) -> Result<Self, TfExampleError> {
        use imagesize::ImageType;

        match image_type {
            ImageType::Jpeg => Ok(ImageFormat::Jpeg),
            ImageType::Png => Ok(ImageFormat::Png),
            ImageType::Bmp => Ok(ImageFormat::Bmp),
            ImageType::Gif => Ok(ImageFormat::Gif),
            ImageType::Tiff => Ok(ImageFormat::Tiff),
            ImageType::Webp => Ok(ImageFormat::Webp),
            other => Err(TfExampleError::UnsupportedImageFormat {
                filename: filename.to_string(),
                format: format!("{:?}", other),
            }),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_extension())
    }
}

/// An image together with its encoded bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotatedImage {
    /// Filename identifying the image.
    pub filename: String,

    /// Width of the image in pixels.
    pub width: u32,

    /// Height of the image in pixels.
    pub height: u32,

    /// Encoded image bytes. Examples cannot be built without them.
    pub data: Option<Vec<u8>>,

    /// Encoding of `data`.
    pub format: ImageFormat,
}

impl AnnotatedImage {
    pub fn new(
        filename: impl Into<String>,
        width: u32,
        height: u32,
        data: Option<Vec<u8>>,
        format: ImageFormat,
    ) -> Self {
        Self {
            filename: filename.into(),
            width,
            height,
            data,
            format,
        }
    }

    /// Creates an image from encoded bytes, reading dimensions and format
    /// from the image header.
    pub fn from_encoded(filename: impl Into<String>, data: Vec<u8>) -> Result<Self, TfExampleError> {
        let filename = filename.into();

        let image_type = imagesize::image_type(&data).map_err(|source| TfExampleError::ImageProbe {
            filename: filename.clone(),
            source,
        })?;
        let format = ImageFormat::from_image_type(&filename, image_type)?;

        let size = imagesize::blob_size(&data).map_err(|source| TfExampleError::ImageProbe {
            filename: filename.clone(),
            source,
        })?;
        let width = u32::try_from(size.width).map_err(|_| TfExampleError::UnsupportedImageFormat {
            filename: filename.clone(),
            format: format!("image width {} does not fit in u32", size.width),
        })?;
        let height = u32::try_from(size.height).map_err(|_| TfExampleError::UnsupportedImageFormat {
            filename: filename.clone(),
            format: format!("image height {} does not fit in u32", size.height),
        })?;

        Ok(Self::new(filename, width, height, Some(data), format))
    }
}

/// A closed polygon in pixel coordinates.
///
/// The closing edge from the last vertex back to the first is implicit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Coord<Pixel>>,
}

impl Polygon {
    pub fn new(points: Vec<Coord<Pixel>>) -> Self {
        Self { points }
    }

    pub fn from_points<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Coord<Pixel>>,
    {
        Self {
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enclosed area by the shoelace formula, always non-negative.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }

        let twice_signed: f64 = (0..n)
            .map(|i| {
                let a = &self.points[i];
                let b = &self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();

        twice_signed.abs() / 2.0
    }
}

/// One annotated region within an image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocatedObject {
    /// Left edge, in pixels.
    pub x: i64,

    /// Top edge, in pixels.
    pub y: i64,

    /// Width in pixels (inclusive extent).
    pub width: i64,

    /// Height in pixels (inclusive extent).
    pub height: i64,

    /// Optional outline of the region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Polygon>,

    /// Free-form metadata; the label lives under [`LABEL_METADATA_KEY`].
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl LocatedObject {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            polygon: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Sets the label metadata entry.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.with_metadata(LABEL_METADATA_KEY, label)
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_polygon(mut self, polygon: Polygon) -> Self {
        self.polygon = Some(polygon);
        self
    }

    pub fn has_polygon(&self) -> bool {
        self.polygon.is_some()
    }

    /// The rectangle as an inclusive pixel box.
    pub fn bbox(&self) -> BBoxXYXY<Pixel> {
        BBoxXYXY::from_inclusive_xywh(self.x, self.y, self.width, self.height)
    }

    /// Area of the rectangle, `width * height`.
    pub fn rect_area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }
}
