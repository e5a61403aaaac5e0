#![allow(dead_code)]

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

use tfod_example::ir::{LocatedObject, Polygon};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Image dimensions small enough that distinct edges stay distinct in `f32`.
pub fn arb_image_dims() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=512, 1u32..=512)
}

fn label_strategy() -> BoxedStrategy<String> {
    prop::sample::select(vec!["cat", "dog", "bird", "car", "person", ""])
        .prop_map(str::to_string)
        .boxed()
}

/// Objects placed around a `width` x `height` image, including ones that
/// start before it, run past it, or have zero or negative extent.
pub fn arb_object_near(width: u32, height: u32) -> BoxedStrategy<LocatedObject> {
    let w = i64::from(width);
    let h = i64::from(height);
    (
        -4i64..=w + 4,
        -4i64..=h + 4,
        -2i64..=w + 4,
        -2i64..=h + 4,
        label_strategy(),
        any::<bool>(),
    )
        .prop_map(|(x, y, ow, oh, label, with_polygon)| {
            let obj = LocatedObject::new(x, y, ow, oh).with_label(label);
            if with_polygon {
                let (x0, y0) = (x as f64, y as f64);
                let (x1, y1) = ((x + ow - 1) as f64, (y + oh - 1) as f64);
                obj.with_polygon(Polygon::from_points([(x0, y0), (x1, y0), (x1, y1), (x0, y1)]))
            } else {
                obj
            }
        })
        .boxed()
}

/// An image size with a list of objects around it.
pub fn arb_scene(max_objects: usize) -> BoxedStrategy<((u32, u32), Vec<LocatedObject>)> {
    arb_image_dims()
        .prop_flat_map(move |(w, h)| {
            (
                Just((w, h)),
                proptest::collection::vec(arb_object_near(w, h), 0..=max_objects),
            )
        })
        .boxed()
}

/// Integer form of the normalizer's acceptance test.
pub fn fits_inclusive(obj: &LocatedObject, width: u32, height: u32) -> bool {
    let (w, h) = (i64::from(width), i64::from(height));
    obj.x >= 0
        && obj.y >= 0
        && obj.width >= 2
        && obj.height >= 2
        && obj.x + obj.width - 1 <= w
        && obj.y + obj.height - 1 <= h
}
