//! # byteshape
//!
//! Schema-less binary marshaling between raw byte buffers and typed values,
//! driven by runtime shape descriptors. Intended as the lowest layer of a
//! device communication stack, with a lenient hex text codec and buffer
//! scanning helpers packaged alongside.
//!
//! ## Overview
//!
//! There is no schema language and no embedded type tags: the caller supplies
//! a [`ValueShape`] describing the layout, and every decode reports exactly
//! how many bytes it consumed so the caller can walk a larger message. All
//! multi-byte scalars use the host's native byte order; the decode-side
//! `reverse` flag handles protocols transmitting the opposite ordering.
//!
//! ## Shape to wire mapping
//!
//! | `ValueShape`        | Wire encoding |
//! |---------------------|---------------|
//! | `Scalar(Bool)`      | 1 byte: 0 or 1 (decode: nonzero is true) |
//! | `Scalar(U8/I8)`     | 1 byte |
//! | `Scalar(U16/I16)`   | 2 bytes, native-endian |
//! | `Scalar(U32/I32)`   | 4 bytes, native-endian |
//! | `Scalar(U64/I64)`   | 8 bytes, native-endian |
//! | `Scalar(F32/F64)`   | IEEE 754, 4/8 bytes, native-endian |
//! | `FixedArray(elem)`  | elements consecutively, no count prefix |
//! | `Text`              | UTF-8 bytes, no length prefix |
//! | `RawBytes`          | pass-through, no reinterpretation |
//!
//! ## Example
//!
//! ```rust
//! use byteshape::{ScalarKind, Value, ValueShape, decode_value_at, encode_value};
//!
//! let shape = ValueShape::Scalar(ScalarKind::U32);
//! let wire = encode_value(&Value::U32(0xDEAD_BEEF), &shape).unwrap();
//! assert_eq!(wire.len(), 4);
//!
//! let decoded = decode_value_at(&wire, &shape, 0, Some(1), false).unwrap();
//! assert_eq!(decoded.value, Value::U32(0xDEAD_BEEF));
//! assert_eq!(decoded.consumed, 4);
//! ```
//!
//! The library is pure and stateless: no I/O, no shared state, every call
//! safe to run concurrently with different inputs.

pub mod de;
pub mod error;
pub mod hex;
pub mod scan;
pub mod ser;
pub mod shape;
pub mod value;

pub use de::{Decoded, decode_value, decode_value_at};
pub use error::{Error, Result};
pub use hex::{hex_to_bytes, to_hex};
pub use scan::{bitmask_equals, find_pattern};
pub use ser::{encode_value, encode_value_into};
pub use shape::{ScalarKind, ValueShape};
pub use value::Value;
