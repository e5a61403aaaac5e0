//! Assembling examples from an image and its normalized objects.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use super::label::{LabelClassTable, LabelResolver};
use super::normalize::{normalize_objects, NormalizedObjects};
use super::options::{ConvertOptions, MaskEncoding, SourceIdType};
use crate::error::TfExampleError;
use crate::example::{keys, Example, Feature};
use crate::ir::{AnnotatedImage, LocatedObject};
use crate::mask::Mask;

/// Lowercase hex SHA-256 digest of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Builds the example for one image.
///
/// An empty `objects` slice yields [`negative_example`]. Otherwise the
/// objects are normalized against the image (assigning classes in `table`)
/// and the positive record is assembled. `image/object/mask` is written only
/// when some accepted object has a polygon; objects without one then get an
/// all-zero mask so the mask list stays aligned with the boxes.
///
/// # Errors
/// - [`TfExampleError::MissingImageData`] if the image has no encoded bytes.
/// - [`TfExampleError::MaskEncode`] if a mask cannot be PNG-encoded.
pub fn build_example<R>(
    image: &AnnotatedImage,
    objects: &[LocatedObject],
    options: &ConvertOptions,
    table: &mut LabelClassTable,
    resolver: &R,
) -> Result<Example, TfExampleError>
where
    R: LabelResolver + ?Sized,
{
    let data = require_data(image)?;

    if objects.is_empty() {
        return Ok(negative_example_from(image, data));
    }

    let normalized = normalize_objects(objects, image.width, image.height, table, resolver);

    let source_id: &[u8] = match options.source_id_type {
        SourceIdType::Filename => image.filename.as_bytes(),
        SourceIdType::NumericDummy => b"0",
    };

    let mut features = image_features(image, data, source_id);

    let NormalizedObjects {
        lefts,
        rights,
        tops,
        bottoms,
        labels,
        classes,
        masks,
        is_crowd,
        areas,
    } = normalized;

    let has_masks = masks.iter().any(Option::is_some);
    let object_count = lefts.len();

    insert(&mut features, keys::BBOX_XMIN, Feature::float_list(lefts));
    insert(&mut features, keys::BBOX_XMAX, Feature::float_list(rights));
    insert(&mut features, keys::BBOX_YMIN, Feature::float_list(tops));
    insert(&mut features, keys::BBOX_YMAX, Feature::float_list(bottoms));
    insert(&mut features, keys::CLASS_TEXT, Feature::bytes_list(labels));
    insert(
        &mut features,
        keys::CLASS_LABEL,
        Feature::int64_list(classes.iter().map(|c| c.as_i64()).collect()),
    );
    insert(
        &mut features,
        keys::IS_CROWD,
        Feature::int64_list(is_crowd.iter().map(|&crowd| i64::from(crowd)).collect()),
    );
    insert(&mut features, keys::AREA, Feature::float_list(areas));

    if has_masks {
        let masks: Vec<Mask> = masks
            .into_iter()
            .map(|m| m.unwrap_or_else(|| Mask::empty(image.width, image.height)))
            .collect();
        let feature = encode_masks(&image.filename, &masks, options.mask_encoding)?;
        insert(&mut features, keys::MASK, feature);
    }

    tracing::trace!(
        filename = image.filename.as_str(),
        input_objects = objects.len(),
        kept_objects = object_count,
        masks = has_masks,
        "built example"
    );

    Ok(Example::from_features(features))
}

/// Builds the record for an image without annotations.
///
/// All per-object list fields are present and empty, there is no mask
/// field, and `image/source_id` is always the filename.
pub fn negative_example(image: &AnnotatedImage) -> Result<Example, TfExampleError> {
    let data = require_data(image)?;
    Ok(negative_example_from(image, data))
}

fn negative_example_from(image: &AnnotatedImage, data: &[u8]) -> Example {
    let mut features = image_features(image, data, image.filename.as_bytes());

    for key in [keys::BBOX_XMIN, keys::BBOX_XMAX, keys::BBOX_YMIN, keys::BBOX_YMAX, keys::AREA] {
        insert(&mut features, key, Feature::float_list(Vec::new()));
    }
    insert(&mut features, keys::CLASS_TEXT, Feature::bytes_list(Vec::new()));
    insert(&mut features, keys::CLASS_LABEL, Feature::int64_list(Vec::new()));
    insert(&mut features, keys::IS_CROWD, Feature::int64_list(Vec::new()));

    tracing::trace!(filename = image.filename.as_str(), "built negative example");

    Example::from_features(features)
}

fn require_data(image: &AnnotatedImage) -> Result<&[u8], TfExampleError> {
    image
        .data
        .as_deref()
        .ok_or_else(|| TfExampleError::MissingImageData {
            filename: image.filename.clone(),
        })
}

/// Image-level scalar fields shared by positive and negative records.
fn image_features(image: &AnnotatedImage, data: &[u8], source_id: &[u8]) -> BTreeMap<String, Feature> {
    let mut features = BTreeMap::new();
    insert(&mut features, keys::IMAGE_HEIGHT, Feature::from(image.height));
    insert(&mut features, keys::IMAGE_WIDTH, Feature::from(image.width));
    insert(&mut features, keys::IMAGE_FILENAME, Feature::from(image.filename.as_str()));
    insert(&mut features, keys::IMAGE_SOURCE_ID, Feature::from(source_id));
    insert(&mut features, keys::IMAGE_ENCODED, Feature::from(data));
    insert(
        &mut features,
        keys::IMAGE_FORMAT,
        Feature::from(image.format.default_extension()),
    );
    insert(&mut features, keys::IMAGE_KEY_SHA256, Feature::from(sha256_hex(data).as_str()));
    features
}

fn encode_masks(filename: &str, masks: &[Mask], encoding: MaskEncoding) -> Result<Feature, TfExampleError> {
    match encoding {
        MaskEncoding::Dense => Ok(Feature::float_list(masks.iter().flat_map(Mask::to_dense).collect())),
        MaskEncoding::Png => {
            let blobs = masks
                .iter()
                .map(|mask| {
                    mask.to_png().map_err(|source| TfExampleError::MaskEncode {
                        filename: filename.to_string(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Feature::bytes_list(blobs))
        }
    }
}

fn insert(features: &mut BTreeMap<String, Feature>, key: &str, feature: Feature) {
    features.insert(key.to_string(), feature);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::label::MetadataLabelResolver;
    use crate::ir::{ImageFormat, Polygon};

    fn image(w: u32, h: u32) -> AnnotatedImage {
        AnnotatedImage::new("img_01.jpg", w, h, Some(b"fake jpeg bytes".to_vec()), ImageFormat::Jpeg)
    }

    fn build(
        image: &AnnotatedImage,
        objects: &[LocatedObject],
        options: &ConvertOptions,
        table: &mut LabelClassTable,
    ) -> Result<Example, TfExampleError> {
        build_example(image, objects, options, table, &MetadataLabelResolver::default())
    }

    #[test]
    fn test_sha256_hex_known_value() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_negative_example_shape() {
        let example = negative_example(&image(4, 3)).expect("negative example");

        for key in keys::OBJECT_LIST_FIELDS {
            let feature = example.feature(key).expect("object field present");
            assert!(feature.is_empty(), "{} should be empty", key);
        }
        assert!(!example.contains(keys::MASK));
        assert_eq!(
            example.feature(keys::IMAGE_SOURCE_ID).and_then(Feature::as_bytes_list),
            Some(&[b"img_01.jpg".to_vec()][..])
        );
        assert_eq!(
            example.feature(keys::BBOX_XMIN).and_then(Feature::as_float_list),
            Some(&[][..])
        );
        assert_eq!(
            example.feature(keys::CLASS_LABEL).and_then(Feature::as_int64_list),
            Some(&[][..])
        );
    }

    #[test]
    fn test_all_filtered_objects_give_positive_shape() {
        let mut table = LabelClassTable::new();
        let options = ConvertOptions::default().with_source_id_type(SourceIdType::NumericDummy);
        let objects = vec![LocatedObject::new(50, 50, 5, 5).with_label("far")];

        let example = build(&image(10, 10), &objects, &options, &mut table).expect("build");
        assert!(example.feature(keys::BBOX_XMIN).expect("xmin").is_empty());
        assert_eq!(
            example.feature(keys::IMAGE_SOURCE_ID).and_then(Feature::as_bytes_list),
            Some(&[b"0".to_vec()][..])
        );
        assert!(!example.contains(keys::MASK));
    }

    #[test]
    fn test_missing_polygon_gets_zero_mask() {
        let mut table = LabelClassTable::new();
        let options = ConvertOptions::default().with_mask_encoding(MaskEncoding::Dense);
        let objects = vec![
            LocatedObject::new(0, 0, 3, 3).with_label("plain"),
            LocatedObject::new(0, 0, 3, 3)
                .with_label("outlined")
                .with_polygon(Polygon::from_points([(1.0, 1.0)])),
        ];

        let example = build(&image(4, 3), &objects, &options, &mut table).expect("build");
        let dense = example
            .feature(keys::MASK)
            .and_then(Feature::as_float_list)
            .expect("dense masks");

        assert_eq!(dense.len(), 2 * 12);
        assert!(dense[..12].iter().all(|&v| v == 0.0));
        assert_eq!(dense[12..].iter().filter(|&&v| v == 1.0).count(), 1);
        assert_eq!(dense[12 + 4 + 1], 1.0);
    }

    #[test]
    fn test_is_crowd_is_zero() {
        let mut table = LabelClassTable::new();
        let objects = vec![
            LocatedObject::new(0, 0, 3, 3).with_label("a"),
            LocatedObject::new(1, 1, 2, 2).with_label("b"),
        ];
        let example = build(&image(4, 4), &objects, &ConvertOptions::default(), &mut table).expect("build");
        assert_eq!(
            example.feature(keys::IS_CROWD).and_then(Feature::as_int64_list),
            Some(&[0i64, 0][..])
        );
    }

    #[test]
    fn test_missing_data_is_fatal() {
        let mut table = LabelClassTable::new();
        let mut img = image(4, 4);
        img.data = None;

        let err = build(&img, &[], &ConvertOptions::default(), &mut table).unwrap_err();
        assert!(matches!(err, TfExampleError::MissingImageData { .. }));
        assert!(negative_example(&img).is_err());
    }
}
