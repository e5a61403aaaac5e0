//! `tf.train.Example` records for the TensorFlow Object Detection API.
//!
//! [`Example`] is the output of conversion: a flat map from feature name to
//! a typed list. The [`keys`] module lists every name the builder writes.
//!
//! Serialized bytes from [`Example::to_bytes`] are what a TFRecord writer
//! frames; the framing itself is left to the sink.

mod feature;
mod proto;

pub use proto::feature::Kind as FeatureKind;
pub use proto::{BytesList, Example, Feature, Features, FloatList, Int64List};

use prost::Message;
use std::collections::BTreeMap;

use crate::error::TfExampleError;

/// Feature names of the object detection schema.
pub mod keys {
    pub const IMAGE_HEIGHT: &str = "image/height";
    pub const IMAGE_WIDTH: &str = "image/width";
    pub const IMAGE_FILENAME: &str = "image/filename";
    pub const IMAGE_SOURCE_ID: &str = "image/source_id";
    pub const IMAGE_ENCODED: &str = "image/encoded";
    pub const IMAGE_FORMAT: &str = "image/format";
    pub const IMAGE_KEY_SHA256: &str = "image/key/sha256";
    pub const BBOX_XMIN: &str = "image/object/bbox/xmin";
    pub const BBOX_XMAX: &str = "image/object/bbox/xmax";
    pub const BBOX_YMIN: &str = "image/object/bbox/ymin";
    pub const BBOX_YMAX: &str = "image/object/bbox/ymax";
    pub const CLASS_TEXT: &str = "image/object/class/text";
    pub const CLASS_LABEL: &str = "image/object/class/label";
    pub const IS_CROWD: &str = "image/object/is_crowd";
    pub const AREA: &str = "image/object/area";
    pub const MASK: &str = "image/object/mask";

    /// Per-object fields that every record carries, even when empty.
    pub const OBJECT_LIST_FIELDS: [&str; 8] = [
        BBOX_XMIN, BBOX_XMAX, BBOX_YMIN, BBOX_YMAX, CLASS_TEXT, CLASS_LABEL, IS_CROWD, AREA,
    ];
}

impl Example {
    pub fn from_features(feature: BTreeMap<String, Feature>) -> Self {
        Self {
            features: Some(Features { feature }),
        }
    }

    /// Looks up a feature by name.
    pub fn feature(&self, key: &str) -> Option<&Feature> {
        self.features.as_ref().and_then(|f| f.feature.get(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.feature(key).is_some()
    }

    /// Feature names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .flat_map(|f| f.feature.keys().map(String::as_str))
    }

    /// Serializes to protobuf wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    /// Parses protobuf wire format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TfExampleError> {
        Ok(Example::decode(bytes)?)
    }
}
