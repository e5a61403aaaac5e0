#![allow(dead_code)]

use tfod_example::conversion::{ConvertOptions, ExampleConverter};
use tfod_example::example::{keys, Example, Feature};
use tfod_example::ir::{AnnotatedImage, ImageFormat};

/// A minimal 24-bit BMP with the given dimensions and black pixels.
pub fn bmp_bytes(width: u32, height: u32) -> Vec<u8> {
    let row_stride = (width * 3).div_ceil(4) * 4;
    let pixel_array_size = row_stride * height;
    let file_size = 54 + pixel_array_size;

    let mut bytes = Vec::with_capacity(file_size as usize);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&file_size.to_le_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes.extend_from_slice(&54u32.to_le_bytes());

    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&(width as i32).to_le_bytes());
    bytes.extend_from_slice(&(height as i32).to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&pixel_array_size.to_le_bytes());
    bytes.extend_from_slice(&2835u32.to_le_bytes());
    bytes.extend_from_slice(&2835u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    bytes.resize(file_size as usize, 0);
    bytes
}

/// A JPEG-tagged image whose bytes are not a real JPEG; the converter never
/// decodes them.
pub fn jpeg_image(filename: &str, width: u32, height: u32) -> AnnotatedImage {
    let data = format!("jpeg:{}:{}x{}", filename, width, height).into_bytes();
    AnnotatedImage::new(filename, width, height, Some(data), ImageFormat::Jpeg)
}

pub fn converter(dense: bool, source_id_type: &str) -> ExampleConverter {
    ExampleConverter::new(ConvertOptions::new(dense, source_id_type).expect("valid options"))
}

pub fn floats<'a>(example: &'a Example, key: &str) -> &'a [f32] {
    example
        .feature(key)
        .and_then(Feature::as_float_list)
        .unwrap_or_else(|| panic!("{} should be a float list", key))
}

pub fn ints<'a>(example: &'a Example, key: &str) -> &'a [i64] {
    example
        .feature(key)
        .and_then(Feature::as_int64_list)
        .unwrap_or_else(|| panic!("{} should be an int64 list", key))
}

pub fn bytes<'a>(example: &'a Example, key: &str) -> &'a [Vec<u8>] {
    example
        .feature(key)
        .and_then(Feature::as_bytes_list)
        .unwrap_or_else(|| panic!("{} should be a bytes list", key))
}

/// The single value of a scalar bytes feature.
pub fn scalar_bytes<'a>(example: &'a Example, key: &str) -> &'a [u8] {
    let values = bytes(example, key);
    assert_eq!(values.len(), 1, "{} should hold one value", key);
    &values[0]
}

/// Asserts every per-object list holds `n` entries.
pub fn assert_object_count(example: &Example, n: usize) {
    for key in keys::OBJECT_LIST_FIELDS {
        let feature = example
            .feature(key)
            .unwrap_or_else(|| panic!("{} missing", key));
        assert_eq!(feature.len(), n, "{} length", key);
    }
}
