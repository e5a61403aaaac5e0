//! Conversion options.
//!
//! Options are validated once when constructed or parsed; the builder never
//! re-checks them per image.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TfExampleError;

/// How `image/object/mask` is encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaskEncoding {
    /// One PNG blob per object, in a bytes list.
    #[default]
    Png,
    /// All masks concatenated into one float list.
    Dense,
}

impl MaskEncoding {
    pub fn from_dense_flag(dense: bool) -> Self {
        if dense {
            MaskEncoding::Dense
        } else {
            MaskEncoding::Png
        }
    }

    pub fn is_dense(&self) -> bool {
        matches!(self, MaskEncoding::Dense)
    }
}

/// What to store in `image/source_id`.
///
/// Some training pipelines parse `source_id` as a number and fail on
/// filenames; `NumericDummy` writes `"0"` for those.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SourceIdType {
    #[default]
    Filename,
    NumericDummy,
}

impl SourceIdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceIdType::Filename => "filename",
            SourceIdType::NumericDummy => "numeric-dummy",
        }
    }
}

impl FromStr for SourceIdType {
    type Err = TfExampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "filename" => Ok(SourceIdType::Filename),
            "numeric-dummy" => Ok(SourceIdType::NumericDummy),
            other => Err(TfExampleError::UnknownSourceIdType(other.to_string())),
        }
    }
}

impl TryFrom<String> for SourceIdType {
    type Error = TfExampleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SourceIdType> for String {
    fn from(value: SourceIdType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SourceIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for building examples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawOptions", into = "RawOptions")]
pub struct ConvertOptions {
    pub mask_encoding: MaskEncoding,
    pub source_id_type: SourceIdType,
}

/// On-disk shape of [`ConvertOptions`].
#[derive(Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawOptions {
    dense: bool,
    source_id_type: SourceIdType,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self {
            dense: false,
            source_id_type: SourceIdType::Filename,
        }
    }
}

impl From<RawOptions> for ConvertOptions {
    fn from(raw: RawOptions) -> Self {
        Self {
            mask_encoding: MaskEncoding::from_dense_flag(raw.dense),
            source_id_type: raw.source_id_type,
        }
    }
}

impl From<ConvertOptions> for RawOptions {
    fn from(opts: ConvertOptions) -> Self {
        Self {
            dense: opts.mask_encoding.is_dense(),
            source_id_type: opts.source_id_type,
        }
    }
}

impl ConvertOptions {
    /// Builds options from the `dense` flag and a `source_id_type` name.
    pub fn new(dense: bool, source_id_type: &str) -> Result<Self, TfExampleError> {
        Ok(Self {
            mask_encoding: MaskEncoding::from_dense_flag(dense),
            source_id_type: source_id_type.parse()?,
        })
    }

    pub fn with_mask_encoding(mut self, mask_encoding: MaskEncoding) -> Self {
        self.mask_encoding = mask_encoding;
        self
    }

    pub fn with_source_id_type(mut self, source_id_type: SourceIdType) -> Self {
        self.source_id_type = source_id_type;
        self
    }

    /// Parses options from JSON, e.g. `{"dense": true, "source_id_type": "numeric-dummy"}`.
    pub fn from_json_str(json: &str) -> Result<Self, TfExampleError> {
        serde_json::from_str(json).map_err(TfExampleError::OptionsJsonParse)
    }

    /// Parses options from YAML. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TfExampleError> {
        serde_yaml::from_str(yaml).map_err(TfExampleError::OptionsYamlParse)
    }
}
