//! Value encoding: typed values to native-endian bytes.
//!
//! ## Wire format summary
//! - Scalars: fixed width per [`ScalarKind`], native byte order
//! - Fixed arrays: elements written consecutively, no count prefix
//! - Text: UTF-8 bytes, no length prefix
//! - Raw bytes: passed through untouched
//!
//! The output carries no type tags; the consumer must know the shape.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::error::{Error, Result};
use crate::shape::{ScalarKind, ValueShape};
use crate::value::Value;

// ── Public entry points ────────────────────────────────────────────────────

/// Encode `value` under `shape` into a freshly allocated buffer.
///
/// A [`Value::Bytes`] input is returned as-is under any shape: `Bytes` clones
/// are refcounted, so the pass-through copies nothing.
pub fn encode_value(value: &Value, shape: &ValueShape) -> Result<Bytes> {
    if let Value::Bytes(bytes) = value {
        return Ok(bytes.clone());
    }
    let mut buf = BytesMut::new();
    encode_value_into(value, shape, &mut buf)?;
    Ok(buf.freeze())
}

/// Encode `value` under `shape`, appending to `buf`.
///
/// Returns the number of bytes written. Useful when assembling a larger
/// frame field by field. On error nothing is appended.
pub fn encode_value_into(value: &Value, shape: &ValueShape, buf: &mut BytesMut) -> Result<usize> {
    let written = match (shape, value) {
        // Already-bytes input passes through untouched, whatever the shape.
        (_, Value::Bytes(bytes)) => {
            buf.extend_from_slice(bytes);
            bytes.len()
        }
        (ValueShape::Text, Value::Text(text)) => {
            buf.extend_from_slice(text.as_bytes());
            text.len()
        }
        (ValueShape::Scalar(kind), value) => {
            buf.reserve(kind.width());
            put_scalar(value, *kind, buf)?;
            kind.width()
        }
        (ValueShape::FixedArray(elem), Value::Array(items)) => {
            let kind = elem.scalar_element()?;
            // Validate every element first so a mismatch mid-array leaves
            // `buf` unchanged.
            for (pos, item) in items.iter().enumerate() {
                if item.kind() != Some(kind) {
                    return Err(Error::InvalidArgument(format!(
                        "array element {} is {:?}, expected {}",
                        pos, item, kind
                    )));
                }
            }
            buf.reserve(kind.width() * items.len());
            for item in items {
                put_scalar(item, kind, buf)?;
            }
            kind.width() * items.len()
        }
        (shape, value) => {
            return Err(Error::InvalidArgument(format!(
                "value {:?} does not fit shape {:?}",
                value, shape
            )));
        }
    };
    trace!(?shape, written, "encoded value");
    Ok(written)
}

/// Write one scalar in its native-endian fixed-width representation.
fn put_scalar(value: &Value, kind: ScalarKind, buf: &mut BytesMut) -> Result<()> {
    match (kind, value) {
        (ScalarKind::Bool, Value::Bool(v)) => buf.put_u8(*v as u8),
        (ScalarKind::U8, Value::U8(v)) => buf.put_u8(*v),
        (ScalarKind::I8, Value::I8(v)) => buf.put_i8(*v),
        (ScalarKind::U16, Value::U16(v)) => buf.put_u16_ne(*v),
        (ScalarKind::I16, Value::I16(v)) => buf.put_i16_ne(*v),
        (ScalarKind::U32, Value::U32(v)) => buf.put_u32_ne(*v),
        (ScalarKind::I32, Value::I32(v)) => buf.put_i32_ne(*v),
        (ScalarKind::U64, Value::U64(v)) => buf.put_u64_ne(*v),
        (ScalarKind::I64, Value::I64(v)) => buf.put_i64_ne(*v),
        (ScalarKind::F32, Value::F32(v)) => buf.put_f32_ne(*v),
        (ScalarKind::F64, Value::F64(v)) => buf.put_f64_ne(*v),
        (kind, value) => {
            return Err(Error::InvalidArgument(format!(
                "value {:?} does not match scalar kind {}",
                value, kind
            )));
        }
    }
    Ok(())
}
