//! Conversion from annotated images to `tf.train.Example` records.
//!
//! The pieces are usable on their own ([`normalize_objects`],
//! [`build_example`]), or through [`ExampleConverter`], which owns the
//! options, the label resolver and the label table for one conversion run.
//!
//! # Class ids
//!
//! Class ids are assigned in the order labels are first seen across the
//! whole run. Processing the same images in a different order yields
//! different ids, so one run must use one table and visit images
//! sequentially. A driver that fans out across threads has to serialize
//! access to the table (for example behind a `Mutex`) around each call.

mod build;
mod label;
mod normalize;
mod options;

pub use build::{build_example, negative_example, sha256_hex};
pub use label::{LabelClassTable, LabelResolver, MetadataLabelResolver};
pub use normalize::{normalize_objects, NormalizedObjects};
pub use options::{ConvertOptions, MaskEncoding, SourceIdType};

use crate::error::TfExampleError;
use crate::example::Example;
use crate::ir::{AnnotatedImage, LocatedObject};

/// Converts the images of one run, keeping class ids stable across them.
#[derive(Debug)]
pub struct ExampleConverter<R = MetadataLabelResolver> {
    options: ConvertOptions,
    resolver: R,
    table: LabelClassTable,
}

impl ExampleConverter<MetadataLabelResolver> {
    /// A converter reading labels from the `"type"` metadata key.
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_resolver(options, MetadataLabelResolver::default())
    }
}

impl<R: LabelResolver> ExampleConverter<R> {
    pub fn with_resolver(options: ConvertOptions, resolver: R) -> Self {
        Self {
            options,
            resolver,
            table: LabelClassTable::new(),
        }
    }

    /// Starts from a pre-seeded table instead of an empty one.
    pub fn with_table(mut self, table: LabelClassTable) -> Self {
        self.table = table;
        self
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// The labels seen so far.
    pub fn table(&self) -> &LabelClassTable {
        &self.table
    }

    /// Ends the run, handing back the final label table.
    pub fn into_table(self) -> LabelClassTable {
        self.table
    }

    /// Builds the example for one image. See [`build_example`].
    pub fn convert(
        &mut self,
        image: &AnnotatedImage,
        objects: &[LocatedObject],
    ) -> Result<Example, TfExampleError> {
        build_example(image, objects, &self.options, &mut self.table, &self.resolver)
    }
}
