#![no_main]
use libfuzzer_sys::fuzz_target;
use secstrings::{extract_strings_from_bytes, ExtractConfig};

fuzz_target!(|data: &[u8]| {
    let _ = extract_strings_from_bytes(data, &ExtractConfig::default());
});
