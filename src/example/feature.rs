//! Wrapping plain values into [`Feature`]s.
//!
//! Scalars become single-element lists, matching how TensorFlow stores
//! `image/height` and friends.

use super::proto::feature::Kind;
use super::proto::{BytesList, Feature, FloatList, Int64List};

impl Feature {
    pub fn bytes_list(value: Vec<Vec<u8>>) -> Self {
        Self {
            kind: Some(Kind::BytesList(BytesList { value })),
        }
    }

    pub fn float_list(value: Vec<f32>) -> Self {
        Self {
            kind: Some(Kind::FloatList(FloatList { value })),
        }
    }

    pub fn int64_list(value: Vec<i64>) -> Self {
        Self {
            kind: Some(Kind::Int64List(Int64List { value })),
        }
    }

    /// A single byte string.
    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Self::bytes_list(vec![value.into()])
    }

    /// A single integer.
    pub fn int64(value: i64) -> Self {
        Self::int64_list(vec![value])
    }

    pub fn as_bytes_list(&self) -> Option<&[Vec<u8>]> {
        match &self.kind {
            Some(Kind::BytesList(list)) => Some(&list.value),
            _ => None,
        }
    }

    pub fn as_float_list(&self) -> Option<&[f32]> {
        match &self.kind {
            Some(Kind::FloatList(list)) => Some(&list.value),
            _ => None,
        }
    }

    pub fn as_int64_list(&self) -> Option<&[i64]> {
        match &self.kind {
            Some(Kind::Int64List(list)) => Some(&list.value),
            _ => None,
        }
    }

    /// Number of values, whatever the list type.
    pub fn len(&self) -> usize {
        match &self.kind {
            Some(Kind::BytesList(list)) => list.value.len(),
            Some(Kind::FloatList(list)) => list.value.len(),
            Some(Kind::Int64List(list)) => list.value.len(),
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<i64> for Feature {
    fn from(value: i64) -> Self {
        Feature::int64(value)
    }
}

impl From<u32> for Feature {
    fn from(value: u32) -> Self {
        Feature::int64(i64::from(value))
    }
}

impl From<&str> for Feature {
    fn from(value: &str) -> Self {
        Feature::bytes(value.as_bytes())
    }
}

impl From<&[u8]> for Feature {
    fn from(value: &[u8]) -> Self {
        Feature::bytes(value)
    }
}

impl From<Vec<Vec<u8>>> for Feature {
    fn from(value: Vec<Vec<u8>>) -> Self {
        Feature::bytes_list(value)
    }
}

impl From<Vec<f32>> for Feature {
    fn from(value: Vec<f32>) -> Self {
        Feature::float_list(value)
    }
}

impl From<Vec<i64>> for Feature {
    fn from(value: Vec<i64>) -> Self {
        Feature::int64_list(value)
    }
}
