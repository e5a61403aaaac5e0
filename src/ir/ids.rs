//! Newtype class identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A positive integer class id, as written to `image/object/class/label`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(pub u64);

impl ClassId {
    #[inline]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id as stored in an int64 feature list.
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.0 as i64
    }
}

impl From<u64> for ClassId {
    fn from(id: u64) -> Self {
        ClassId::new(id)
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_ordering() {
        assert!(ClassId(1) < ClassId(2));
        assert_eq!(ClassId(7).as_i64(), 7);
    }
}
