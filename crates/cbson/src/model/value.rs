//! Value types for BSON elements.
//!
//! Values form a closed set of kinds. Each kind maps to exactly one BSON
//! element tag; nothing "text-like" is accepted as text unless it is a
//! [`Text`].

use std::borrow::Cow;

use crate::error::EncodeError;
use crate::model::Oid;

/// BSON element type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementType {
    Double = 0x01,
    String = 0x02,
    Document = 0x03,
    Array = 0x04,
    Binary = 0x05,
    ObjectId = 0x07,
    Boolean = 0x08,
    DateTime = 0x09,
    Null = 0x0A,
    Int32 = 0x10,
    Int64 = 0x12,
}

impl ElementType {
    /// Creates an ElementType from its wire representation.
    pub fn from_u8(v: u8) -> Option<ElementType> {
        match v {
            0x01 => Some(ElementType::Double),
            0x02 => Some(ElementType::String),
            0x03 => Some(ElementType::Document),
            0x04 => Some(ElementType::Array),
            0x05 => Some(ElementType::Binary),
            0x07 => Some(ElementType::ObjectId),
            0x08 => Some(ElementType::Boolean),
            0x09 => Some(ElementType::DateTime),
            0x0A => Some(ElementType::Null),
            0x10 => Some(ElementType::Int32),
            0x12 => Some(ElementType::Int64),
            _ => None,
        }
    }
}

/// Text held in one of the code-unit widths a host string may use.
///
/// Only [`Text::Utf8`] is guaranteed representable; the wider forms are
/// validated when re-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Text<'a> {
    /// Already UTF-8.
    Utf8(Cow<'a, str>),
    /// UTF-16 code units; may contain unpaired surrogates.
    Utf16(Cow<'a, [u16]>),
    /// UCS-4 code points; may contain surrogates or values above U+10FFFF.
    Ucs4(Cow<'a, [u32]>),
}

impl Text<'_> {
    /// Re-encodes the text as UTF-8.
    ///
    /// UTF-8 input is returned borrowed. Wider input is converted and fails
    /// with [`EncodeError::Encoding`] at the first unrepresentable code unit.
    pub fn to_utf8(&self) -> Result<Cow<'_, str>, EncodeError> {
        match self {
            Text::Utf8(s) => Ok(Cow::Borrowed(s)),
            Text::Utf16(units) => {
                let mut out = String::with_capacity(units.len());
                let mut position = 0;
                for decoded in char::decode_utf16(units.iter().copied()) {
                    match decoded {
                        Ok(c) => {
                            position += c.len_utf16();
                            out.push(c);
                        }
                        Err(e) => {
                            return Err(EncodeError::Encoding {
                                position,
                                unit: e.unpaired_surrogate() as u32,
                            });
                        }
                    }
                }
                Ok(Cow::Owned(out))
            }
            Text::Ucs4(points) => {
                let mut out = String::with_capacity(points.len());
                for (position, &unit) in points.iter().enumerate() {
                    let c = char::from_u32(unit).ok_or(EncodeError::Encoding { position, unit })?;
                    out.push(c);
                }
                Ok(Cow::Owned(out))
            }
        }
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(s: &'a str) -> Self {
        Text::Utf8(Cow::Borrowed(s))
    }
}

impl From<String> for Text<'static> {
    fn from(s: String) -> Self {
        Text::Utf8(Cow::Owned(s))
    }
}

/// A value that can be placed in a BSON element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// 64-bit IEEE 754 float.
    Double(f64),

    /// Text, re-encoded to UTF-8 on the wire.
    String(Text<'a>),

    /// Already-encoded embedded document bytes.
    Document(Cow<'a, [u8]>),

    /// Already-encoded array document bytes.
    Array(Cow<'a, [u8]>),

    /// Binary data with its BSON subtype byte.
    Binary { subtype: u8, bytes: Cow<'a, [u8]> },

    /// 12-byte identifier in construction order.
    ObjectId(Oid),

    Boolean(bool),

    /// Milliseconds since the Unix epoch.
    DateTime(i64),

    Null,

    Int32(i32),

    Int64(i64),
}

impl Value<'_> {
    /// Returns the element tag this value is written under.
    pub fn element_type(&self) -> ElementType {
        match self {
            Value::Double(_) => ElementType::Double,
            Value::String(_) => ElementType::String,
            Value::Document(_) => ElementType::Document,
            Value::Array(_) => ElementType::Array,
            Value::Binary { .. } => ElementType::Binary,
            Value::ObjectId(_) => ElementType::ObjectId,
            Value::Boolean(_) => ElementType::Boolean,
            Value::DateTime(_) => ElementType::DateTime,
            Value::Null => ElementType::Null,
            Value::Int32(_) => ElementType::Int32,
            Value::Int64(_) => ElementType::Int64,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(Text::from(s))
    }
}

impl From<String> for Value<'static> {
    fn from(s: String) -> Self {
        Value::String(Text::from(s))
    }
}

impl From<i32> for Value<'static> {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value<'static> {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value<'static> {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<bool> for Value<'static> {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}
