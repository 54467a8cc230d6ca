//! Shape descriptors: the caller-supplied description of what a byte span
//! contains.
//!
//! Marshaling is not self-describing — nothing in the output identifies the
//! type — so every encode/decode call receives a [`ValueShape`] telling the
//! marshaler how to lay the value out. Descriptors serialize with serde so
//! that protocol field tables can declare them in configuration files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed-width scalar kinds.
///
/// Every kind has a statically known byte width, which is what lets the
/// marshaler size allocations and compute consumed-byte counts before
/// touching any data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    /// One byte; encodes as 0 or 1, decodes nonzero as `true`.
    Bool,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl ScalarKind {
    /// Byte width of the native fixed-width representation.
    pub const fn width(self) -> usize {
        match self {
            ScalarKind::Bool | ScalarKind::U8 | ScalarKind::I8 => 1,
            ScalarKind::U16 | ScalarKind::I16 => 2,
            ScalarKind::U32 | ScalarKind::I32 | ScalarKind::F32 => 4,
            ScalarKind::U64 | ScalarKind::I64 | ScalarKind::F64 => 8,
        }
    }

    /// Canonical short name, the form [`FromStr`] always accepts.
    pub const fn as_str(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::U8 => "u8",
            ScalarKind::I8 => "i8",
            ScalarKind::U16 => "u16",
            ScalarKind::I16 => "i16",
            ScalarKind::U32 => "u32",
            ScalarKind::I32 => "i32",
            ScalarKind::U64 => "u64",
            ScalarKind::I64 => "i64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
        }
    }
}

impl FromStr for ScalarKind {
    type Err = Error;

    /// Parse a kind name as device configuration files spell them.
    ///
    /// Accepts the canonical Rust-style names plus the aliases industrial
    /// register tables commonly use ("word" for u16, "long" for i32, ...).
    /// Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Ok(ScalarKind::Bool),
            "u8" | "uint8" | "byte" => Ok(ScalarKind::U8),
            "i8" | "int8" | "sbyte" => Ok(ScalarKind::I8),
            "u16" | "uint16" | "ushort" | "word" => Ok(ScalarKind::U16),
            "i16" | "int16" | "short" => Ok(ScalarKind::I16),
            "u32" | "uint32" | "uint" | "dword" => Ok(ScalarKind::U32),
            "i32" | "int32" | "int" | "long" => Ok(ScalarKind::I32),
            "u64" | "uint64" | "ulong" => Ok(ScalarKind::U64),
            "i64" | "int64" => Ok(ScalarKind::I64),
            "f32" | "float" | "single" => Ok(ScalarKind::F32),
            "f64" | "double" => Ok(ScalarKind::F64),
            other => Err(Error::InvalidArgument(format!(
                "unknown scalar kind: {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of a value's byte layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueShape {
    /// A single fixed-width scalar in native byte order.
    Scalar(ScalarKind),

    /// A contiguous run of equally shaped elements. The element count is not
    /// part of the shape; it comes from the value on encode and from the
    /// `count` argument (or the remaining buffer) on decode.
    ///
    /// The element must itself be fixed-width: the marshaler rejects
    /// variable-width elements (e.g. nested text) with
    /// [`Error::UnsupportedShape`].
    FixedArray(Box<ValueShape>),

    /// UTF-8 text. Width is unknown until decoded; it is bounded by the
    /// explicit byte count or the rest of the buffer.
    Text,

    /// Opaque bytes, passed through without reinterpretation.
    RawBytes,
}

impl ValueShape {
    /// Convenience constructor for an array of scalars.
    pub fn array_of(kind: ScalarKind) -> Self {
        ValueShape::FixedArray(Box::new(ValueShape::Scalar(kind)))
    }

    /// Static byte width, when the shape has one.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            ValueShape::Scalar(kind) => Some(kind.width()),
            _ => None,
        }
    }

    /// Resolve the element kind of a fixed array, rejecting anything the
    /// marshaler cannot size statically.
    pub(crate) fn scalar_element(&self) -> Result<ScalarKind> {
        match self {
            ValueShape::Scalar(kind) => Ok(*kind),
            other => Err(Error::UnsupportedShape(format!(
                "fixed array element must be a fixed-width scalar, got {:?}",
                other
            ))),
        }
    }
}
