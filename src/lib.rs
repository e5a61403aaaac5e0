//! tfod-example: object detection annotations to TensorFlow Example records.
//!
//! Converts an image and its located objects into a `tf.train.Example`
//! following the TensorFlow Object Detection API schema: normalized boxes,
//! first-seen class ids, optional instance masks (PNG or dense), and a
//! SHA-256 key over the encoded image.
//!
//! # Modules
//!
//! - [`ir`]: Input types (AnnotatedImage, LocatedObject, Polygon, etc.)
//! - [`conversion`]: Object normalization and example building
//! - [`example`]: The `tf.train.Example` protobuf messages
//! - [`mask`]: Polygon rasterization and mask encodings
//! - [`error`]: Error types
//!
//! # Example
//!
//! ```
//! use tfod_example::conversion::{ConvertOptions, ExampleConverter};
//! use tfod_example::example::keys;
//! use tfod_example::ir::{AnnotatedImage, ImageFormat, LocatedObject};
//!
//! let mut converter = ExampleConverter::new(ConvertOptions::default());
//! let image = AnnotatedImage::new("cat.jpg", 640, 480, Some(vec![0xFF, 0xD8, 0xFF]), ImageFormat::Jpeg);
//! let objects = [LocatedObject::new(64, 48, 320, 240).with_label("cat")];
//!
//! let example = converter.convert(&image, &objects)?;
//! assert!(example.contains(keys::BBOX_XMIN));
//! let bytes = example.to_bytes();
//! assert!(!bytes.is_empty());
//! # Ok::<(), tfod_example::TfExampleError>(())
//! ```

pub mod conversion;
pub mod error;
pub mod example;
pub mod ir;
pub mod mask;

pub use conversion::{build_example, ConvertOptions, ExampleConverter, LabelClassTable};
pub use error::TfExampleError;
pub use example::Example;
