//! Fuzz target for the proj-string parameter parser.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ucrs::ProjParams;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let params = ProjParams::parse(text);
    // Normalization must be a fixpoint even on fuzzer input.
    let reparsed = ProjParams::parse(&params.to_proj_string());
    assert_eq!(params, reparsed);
});
