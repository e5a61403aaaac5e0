//! Label resolution and first-seen class id assignment.

use std::collections::HashMap;

use crate::ir::{ClassId, LocatedObject, LABEL_METADATA_KEY};

/// Resolves the label of a located object.
pub trait LabelResolver {
    fn label_of(&self, object: &LocatedObject) -> String;
}

/// Reads the label from an object's metadata.
///
/// Objects without the key get an empty label, which is assigned a class
/// like any other.
#[derive(Clone, Debug)]
pub struct MetadataLabelResolver {
    key: String,
}

impl MetadataLabelResolver {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for MetadataLabelResolver {
    fn default() -> Self {
        Self::new(LABEL_METADATA_KEY)
    }
}

impl LabelResolver for MetadataLabelResolver {
    fn label_of(&self, object: &LocatedObject) -> String {
        object.metadata.get(&self.key).cloned().unwrap_or_default()
    }
}

impl<F> LabelResolver for F
where
    F: Fn(&LocatedObject) -> String,
{
    fn label_of(&self, object: &LocatedObject) -> String {
        self(object)
    }
}

/// Label to class id mapping for one conversion run.
///
/// Ids start at 1 and follow the order labels are first seen. The table only
/// grows: an assigned id is never changed or reused. Because ids depend on
/// encounter order, a table must not be shared between runs.
#[derive(Clone, Debug, Default)]
pub struct LabelClassTable {
    ids: HashMap<String, ClassId>,
    labels: Vec<String>,
}

impl LabelClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the table; duplicates keep their first id.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for label in labels {
            table.class_for(label.as_ref());
        }
        table
    }

    /// Returns the id for `label`, assigning `len() + 1` if it is new.
    pub fn class_for(&mut self, label: &str) -> ClassId {
        if let Some(id) = self.ids.get(label) {
            return *id;
        }

        let id = ClassId::new(self.labels.len() as u64 + 1);
        tracing::debug!(label, class = id.as_u64(), "assigned new class id");
        self.ids.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        id
    }

    pub fn get(&self, label: &str) -> Option<ClassId> {
        self.ids.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels with their ids, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(idx, label)| (ClassId::new(idx as u64 + 1), label.as_str()))
    }
}
