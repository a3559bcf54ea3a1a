#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(literal) = std::str::from_utf8(data) {
        // Decoding arbitrary text should never panic
        let _ = icongen::decode_literal(literal);
    }
});
