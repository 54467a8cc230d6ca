//! Value decoding: native-endian bytes to typed values.
//!
//! Decoding never mutates the input buffer. Whenever a transformation is
//! needed (byte-order reversal), it runs on a local copy of the relevant
//! window; otherwise decoding borrows or refcount-slices the input.

use std::borrow::Cow;

use bytes::{Buf, Bytes};
use tracing::trace;

use crate::error::{Error, Result};
use crate::shape::{ScalarKind, ValueShape};
use crate::value::Value;

/// A decoded value plus the exact number of input bytes it consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub value: Value,
    /// Authoritative for advancing the caller's read cursor through a
    /// larger message.
    pub consumed: usize,
}

// ── Public entry points ────────────────────────────────────────────────────

/// Decode the whole of `buffer` as `shape`, from the start, in stored order.
pub fn decode_value(buffer: &Bytes, shape: &ValueShape) -> Result<Decoded> {
    decode_value_at(buffer, shape, 0, None, false)
}

/// Decode `shape` from `buffer` starting at `offset`.
///
/// `count` is the element count for arrays and the byte count for text and
/// raw bytes; `None` means "consume from `offset` to the end". For a scalar
/// shape only `Some(1)` or `None` is accepted — a scalar consumes exactly
/// its natural width.
///
/// With `reverse`, the byte order of the consumed window is reversed (on a
/// local copy) before reinterpretation, for protocols that transmit scalars
/// opposite to the host's native endianness. `reverse` is ignored for
/// [`ValueShape::Text`]: text is decoded from the bytes in stored order.
pub fn decode_value_at(
    buffer: &Bytes,
    shape: &ValueShape,
    offset: usize,
    count: Option<usize>,
    reverse: bool,
) -> Result<Decoded> {
    if offset > buffer.len() {
        return Err(Error::InvalidArgument(format!(
            "offset {} past end of {}-byte buffer",
            offset,
            buffer.len()
        )));
    }
    if let Some(n) = count {
        if n != 1 && matches!(shape, ValueShape::Scalar(_)) {
            return Err(Error::InvalidArgument(format!(
                "scalar decode consumes exactly its width; count {} is invalid",
                n
            )));
        }
    }

    // Zero-copy fast path: the whole buffer as opaque bytes.
    if matches!(shape, ValueShape::RawBytes)
        && offset == 0
        && count.is_none_or(|n| n == buffer.len())
    {
        trace!(consumed = buffer.len(), "decoded raw bytes pass-through");
        return Ok(Decoded {
            value: Value::Bytes(buffer.clone()),
            consumed: buffer.len(),
        });
    }

    let available = buffer.len() - offset;
    // The consumed span is fixed by shape and count before any data is read.
    let consumed = match shape {
        ValueShape::Text | ValueShape::RawBytes => count.unwrap_or(available),
        ValueShape::Scalar(kind) => kind.width(),
        ValueShape::FixedArray(elem) => {
            let width = elem.scalar_element()?.width();
            // Rest-of-buffer sentinel: integer division drops a partial
            // trailing element, and it is not counted as consumed.
            let n = count.unwrap_or(available / width);
            n.checked_mul(width).ok_or_else(|| {
                Error::InvalidArgument(format!("array count {} overflows the byte span", n))
            })?
        }
    };
    if consumed > available {
        return Err(Error::OutOfRange {
            offset,
            needed: consumed,
            available,
        });
    }
    let window = &buffer[offset..offset + consumed];

    // Reversal runs on a local copy; the caller's buffer is never touched.
    let work: Cow<'_, [u8]> = if reverse && !matches!(shape, ValueShape::Text) {
        let mut copy = window.to_vec();
        copy.reverse();
        Cow::Owned(copy)
    } else {
        Cow::Borrowed(window)
    };

    let value = match shape {
        ValueShape::Text => {
            // Invalid sequences become U+FFFD rather than failing the call.
            Value::Text(String::from_utf8_lossy(&work).into_owned())
        }
        ValueShape::RawBytes => match work {
            Cow::Owned(reversed) => Value::Bytes(Bytes::from(reversed)),
            Cow::Borrowed(_) => Value::Bytes(buffer.slice(offset..offset + consumed)),
        },
        ValueShape::Scalar(kind) => get_scalar(*kind, &work),
        ValueShape::FixedArray(elem) => {
            let kind = elem.scalar_element()?;
            let mut items = Vec::with_capacity(consumed / kind.width());
            for chunk in work.chunks_exact(kind.width()) {
                items.push(get_scalar(kind, chunk));
            }
            Value::Array(items)
        }
    };
    trace!(?shape, consumed, "decoded value");
    Ok(Decoded { value, consumed })
}

/// Reinterpret an exact-width slice as one scalar, native byte order.
fn get_scalar(kind: ScalarKind, mut bytes: &[u8]) -> Value {
    match kind {
        ScalarKind::Bool => Value::Bool(bytes.get_u8() != 0),
        ScalarKind::U8 => Value::U8(bytes.get_u8()),
        ScalarKind::I8 => Value::I8(bytes.get_i8()),
        ScalarKind::U16 => Value::U16(bytes.get_u16_ne()),
        ScalarKind::I16 => Value::I16(bytes.get_i16_ne()),
        ScalarKind::U32 => Value::U32(bytes.get_u32_ne()),
        ScalarKind::I32 => Value::I32(bytes.get_i32_ne()),
        ScalarKind::U64 => Value::U64(bytes.get_u64_ne()),
        ScalarKind::I64 => Value::I64(bytes.get_i64_ne()),
        ScalarKind::F32 => Value::F32(bytes.get_f32_ne()),
        ScalarKind::F64 => Value::F64(bytes.get_f64_ne()),
    }
}
