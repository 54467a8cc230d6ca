//! Hexadecimal text codec.
//!
//! Encoding is strict (uppercase, optional single-space separator); decoding
//! is deliberately lenient so that hex pasted out of device logs or typed by
//! hand survives stray separators and noise. Malformed input is never an
//! error: unrecognized characters just reset the pending digit.

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Encode `bytes` as uppercase hex, two characters per byte.
///
/// With `spaced`, bytes are separated by a single space; there is never a
/// leading or trailing space. Empty input yields an empty string.
pub fn to_hex(bytes: &[u8], spaced: bool) -> String {
    if bytes.is_empty() {
        return String::new();
    }
    let per_byte = if spaced { 3 } else { 2 };
    let mut out = String::with_capacity(bytes.len() * per_byte);
    for (pos, b) in bytes.iter().enumerate() {
        if spaced && pos != 0 {
            out.push(' ');
        }
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0F) as usize] as char);
    }
    out
}

/// Decode hex text into bytes, skipping anything that is not a hex digit.
///
/// Digits accumulate pairwise (first digit = high nibble). Any non-digit,
/// including the space separators [`to_hex`] emits, resets the pending
/// accumulator without error. A trailing unpaired digit is still emitted as
/// a byte with a zero high nibble. The output length is exactly the number
/// of assembled bytes.
pub fn hex_to_bytes(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() / 2 + 1);
    let mut pending: Option<u8> = None;
    for ch in text.bytes() {
        match nibble(ch) {
            Some(low) => match pending.take() {
                Some(high) => out.push((high << 4) | low),
                None => pending = Some(low),
            },
            None => pending = None,
        }
    }
    if let Some(last) = pending {
        out.push(last);
    }
    out
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}
