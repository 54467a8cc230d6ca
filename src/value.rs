//! Runtime-typed values.
//!
//! [`Value`] is the in-memory side of marshaling: one variant per scalar kind
//! plus text, opaque bytes, and arrays. Callers usually build values through
//! the `From` impls and read them back by matching.

use bytes::Bytes;

use crate::shape::ScalarKind;

/// A value paired with a [`crate::ValueShape`] at the call site.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
    Text(String),
    Bytes(Bytes),
    Array(Vec<Value>),
}

impl Value {
    /// The scalar kind this value encodes as, or `None` for text, bytes and
    /// arrays.
    pub fn kind(&self) -> Option<ScalarKind> {
        match self {
            Value::Bool(_) => Some(ScalarKind::Bool),
            Value::U8(_) => Some(ScalarKind::U8),
            Value::I8(_) => Some(ScalarKind::I8),
            Value::U16(_) => Some(ScalarKind::U16),
            Value::I16(_) => Some(ScalarKind::I16),
            Value::U32(_) => Some(ScalarKind::U32),
            Value::I32(_) => Some(ScalarKind::I32),
            Value::U64(_) => Some(ScalarKind::U64),
            Value::I64(_) => Some(ScalarKind::I64),
            Value::F32(_) => Some(ScalarKind::F32),
            Value::F64(_) => Some(ScalarKind::F64),
            Value::Text(_) | Value::Bytes(_) | Value::Array(_) => None,
        }
    }

    /// Borrow the inner bytes, if this is a `Bytes` value.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow the inner text, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the inner elements, if this is an `Array` value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

macro_rules! value_from {
    ($($variant:ident: $t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    Bool: bool,
    U8: u8,
    I8: i8,
    U16: u16,
    I16: i16,
    U32: u32,
    I32: i32,
    U64: u64,
    I64: i64,
    F32: f32,
    F64: f64,
    Text: String,
    Bytes: Bytes,
    Array: Vec<Value>,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(v))
    }
}

impl From<&'static [u8]> for Value {
    fn from(v: &'static [u8]) -> Self {
        Value::Bytes(Bytes::from_static(v))
    }
}
