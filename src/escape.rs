//! Byte escaping for embedded string literals
//!
//! Every byte except line-feed becomes `\` followed by its lowercase hex
//! value, unpadded (`0x09` → `\9`, `0xff` → `\ff`). Line-feeds are dropped.

use std::fmt::Write as _;
use std::io::{self, BufReader, Read};

/// The only byte that is dropped instead of escaped.
pub const LINE_FEED: u8 = b'\n';

/// Append the escaped form of `byte` to `out`.
///
/// Line-feed appends nothing.
pub fn push_escaped(out: &mut String, byte: u8) {
    if byte == LINE_FEED {
        return;
    }
    // Writing to a String cannot fail.
    let _ = write!(out, "\\{:x}", byte);
}

/// Escape an in-memory byte slice.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for &byte in bytes {
        push_escaped(&mut out, byte);
    }
    out
}

/// Escape everything `reader` yields, streaming through a buffer.
///
/// Produces the same text as reading one byte at a time.
pub fn escape_reader<R: Read>(reader: R) -> io::Result<String> {
    let mut out = String::new();
    for byte in BufReader::new(reader).bytes() {
        push_escaped(&mut out, byte?);
    }
    Ok(out)
}

/// Decode an escaped literal back into bytes.
///
/// Returns `None` if `literal` is not a sequence of `\<hex>` tokens.
pub fn decode_literal(literal: &str) -> Option<Vec<u8>> {
    if literal.is_empty() {
        return Some(Vec::new());
    }
    let rest = literal.strip_prefix('\\')?;
    rest.split('\\')
        .map(|token| {
            let well_formed = (1..=2).contains(&token.len())
                && token.bytes().all(|b| b.is_ascii_hexdigit());
            if !well_formed {
                return None;
            }
            u8::from_str_radix(token, 16).ok()
        })
        .collect()
}
