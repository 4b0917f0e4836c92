//! Fuzz target for adapter construction from free text.
//!
//! This fuzzer feeds arbitrary UTF-8 to the input classifier and the
//! primary-backend resolution path, checking for panics or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ucrs::Ucrs;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = Ucrs::new(text);
});
