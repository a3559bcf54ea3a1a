#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let literal = icongen::escape_bytes(data);
    let expected: Vec<u8> = data.iter().copied().filter(|&b| b != b'\n').collect();
    assert_eq!(icongen::decode_literal(&literal), Some(expected));
});
