//! Fuzz target for decoding serialized examples.
//!
//! Feeds arbitrary bytes to the protobuf decoder and re-encodes whatever
//! parses, checking for panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tfod_example::Example;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(example) = Example::from_bytes(data) {
        let _ = example.to_bytes();
    }
});
