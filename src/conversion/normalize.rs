//! Per-object normalization.
//!
//! Turns located objects into the parallel per-object vectors of the
//! example schema, dropping boxes that are degenerate or leave the image.

use super::label::{LabelClassTable, LabelResolver};
use crate::ir::{ClassId, LocatedObject};
use crate::mask::Mask;

/// Parallel per-object vectors, one entry per accepted object.
///
/// `masks` is aligned with the other vectors: it holds `None` for accepted
/// objects that have no polygon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedObjects {
    pub lefts: Vec<f32>,
    pub rights: Vec<f32>,
    pub tops: Vec<f32>,
    pub bottoms: Vec<f32>,
    pub labels: Vec<Vec<u8>>,
    pub classes: Vec<ClassId>,
    pub masks: Vec<Option<Mask>>,
    pub is_crowd: Vec<bool>,
    pub areas: Vec<f32>,
}

impl NormalizedObjects {
    /// Number of accepted objects.
    pub fn len(&self) -> usize {
        self.lefts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lefts.is_empty()
    }

    /// True if at least one accepted object carried a polygon.
    pub fn has_masks(&self) -> bool {
        self.masks.iter().any(Option::is_some)
    }
}

/// Normalizes `objects` against an `image_width` x `image_height` image.
///
/// Objects are visited in order. Each label is resolved and assigned a class
/// in `table` before the box is checked, so a dropped object still claims an
/// id for its label. A box is kept only when
/// `0 <= left < right <= 1` and `0 <= top < bottom <= 1`, where right and
/// bottom use the inclusive pixel extent (`x + width - 1`). Dropped objects
/// produce no output.
pub fn normalize_objects<R>(
    objects: &[LocatedObject],
    image_width: u32,
    image_height: u32,
    table: &mut LabelClassTable,
    resolver: &R,
) -> NormalizedObjects
where
    R: LabelResolver + ?Sized,
{
    let mut out = NormalizedObjects::default();

    for (idx, object) in objects.iter().enumerate() {
        let label = resolver.label_of(object);
        let class = table.class_for(&label);

        let bbox = object
            .bbox()
            .to_normalized(f64::from(image_width), f64::from(image_height));

        if !bbox.is_valid_unit_box() {
            tracing::debug!(
                index = idx,
                label = label.as_str(),
                x = object.x,
                y = object.y,
                width = object.width,
                height = object.height,
                "dropping object outside normalized bounds"
            );
            continue;
        }

        out.lefts.push(bbox.xmin() as f32);
        out.rights.push(bbox.xmax() as f32);
        out.tops.push(bbox.ymin() as f32);
        out.bottoms.push(bbox.ymax() as f32);
        out.labels.push(label.into_bytes());
        out.classes.push(class);
        out.is_crowd.push(false);

        match &object.polygon {
            Some(polygon) => {
                out.masks
                    .push(Some(Mask::from_polygon(polygon, image_width, image_height)));
                out.areas.push(polygon.area() as f32);
            }
            None => {
                out.masks.push(None);
                out.areas.push(object.rect_area() as f32);
            }
        }
    }

    out
}
