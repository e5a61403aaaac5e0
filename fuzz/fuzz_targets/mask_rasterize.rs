//! Fuzz target for polygon rasterization.
//!
//! The first two bytes pick a small canvas; the rest are read as
//! little-endian `i16` vertex pairs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tfod_example::ir::Polygon;
use tfod_example::mask::Mask;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 || data.len() > 4096 {
        return;
    }

    let width = u32::from(data[0] % 64) + 1;
    let height = u32::from(data[1] % 64) + 1;

    let points = data[2..].chunks_exact(4).map(|c| {
        let x = i16::from_le_bytes([c[0], c[1]]);
        let y = i16::from_le_bytes([c[2], c[3]]);
        (f64::from(x), f64::from(y))
    });

    let mask = Mask::from_polygon(&Polygon::from_points(points), width, height);
    assert_eq!(mask.pixel_count(), (width * height) as usize);
    let _ = mask.to_dense();
});
