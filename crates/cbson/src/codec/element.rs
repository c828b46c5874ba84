//! Element encoding/decoding for BSON.
//!
//! An element is `tag | name | payload`. The encoder copies the name bytes
//! verbatim; bounding them (the trailing NUL) is the caller's job, see
//! [`encode_key`].

use std::borrow::Cow;

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_ELEMENT_SIZE, MAX_STRING_LEN};
use crate::model::{ElementType, Text, Value};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes one element whose name is NUL-terminated (zero-copy).
///
/// The whole input must be consumed by the element.
pub fn decode_element(bytes: &[u8]) -> Result<(&str, Value<'_>), DecodeError> {
    let mut reader = Reader::new(bytes);

    let tag = reader.read_byte("element.type")?;
    let element_type = ElementType::from_u8(tag).ok_or(DecodeError::InvalidElementType { tag })?;
    let name = reader.read_cstring("element.name")?;

    let value = match element_type {
        ElementType::String => {
            let s = reader.read_string("element.string")?;
            Value::String(Text::Utf8(Cow::Borrowed(s)))
        }
        other => return Err(DecodeError::UnsupportedType { element_type: other }),
    };

    if !reader.is_empty() {
        return Err(DecodeError::TrailingBytes { count: reader.remaining_len() });
    }

    Ok((name, value))
}

// =============================================================================
// ENCODING
// =============================================================================

/// Options for element encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Largest encoded element, in bytes, the encoder will produce.
    ///
    /// `None` (the default) only enforces what the i32 length prefix can
    /// represent. Use [`EncodeOptions::document_capped`] to reject elements
    /// that could never fit a server-sized document.
    pub max_element_size: Option<usize>,
}

impl EncodeOptions {
    /// Creates default encoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options capped at [`MAX_ELEMENT_SIZE`] (16 MiB).
    pub fn document_capped() -> Self {
        Self::with_max_element_size(MAX_ELEMENT_SIZE)
    }

    /// Creates options with a custom element size cap.
    pub fn with_max_element_size(max_element_size: usize) -> Self {
        Self { max_element_size: Some(max_element_size) }
    }
}

/// Encodes `name` and `value` into a single BSON element.
///
/// Only [`Value::String`] has a fast-path encoding; every other kind fails
/// with [`EncodeError::UnsupportedType`] so the caller can fall back to a
/// complete encoder (see [`EncodeError::is_fallback`]).
///
/// For a string the output is:
///
/// ```text
/// 0x02 | name | len: i32 LE | utf8 | 0x00      (len = utf8.len() + 1)
/// ```
pub fn encode_element(name: &[u8], value: &Value<'_>) -> Result<Vec<u8>, EncodeError> {
    encode_element_with_options(name, value, EncodeOptions::default())
}

/// Encodes a single element with the given options.
pub fn encode_element_with_options(
    name: &[u8],
    value: &Value<'_>,
    options: EncodeOptions,
) -> Result<Vec<u8>, EncodeError> {
    match value {
        Value::String(text) => encode_string(name, text, options),
        Value::Double(_)
        | Value::Document(_)
        | Value::Array(_)
        | Value::Binary { .. }
        | Value::ObjectId(_)
        | Value::Boolean(_)
        | Value::DateTime(_)
        | Value::Null
        | Value::Int32(_)
        | Value::Int64(_) => Err(EncodeError::UnsupportedType {
            element_type: value.element_type(),
        }),
    }
}

fn encode_string(name: &[u8], text: &Text<'_>, options: EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    let utf8 = text.to_utf8()?;

    if utf8.len() > MAX_STRING_LEN {
        return Err(EncodeError::LengthExceedsLimit {
            field: "string",
            len: utf8.len(),
            max: MAX_STRING_LEN,
        });
    }
    // Bounded by MAX_STRING_LEN, so the terminator still fits an i32.
    let payload_len = utf8.len() + 1;

    let total = element_len(name.len(), payload_len)?;
    if let Some(max) = options.max_element_size.filter(|&max| total > max) {
        return Err(EncodeError::LengthExceedsLimit {
            field: "element",
            len: total,
            max,
        });
    }

    let mut writer = Writer::try_with_capacity(total)?;
    writer.write_byte(ElementType::String as u8);
    writer.write_bytes(name);
    writer.write_string(&utf8, payload_len as i32);

    debug_assert_eq!(writer.len(), total);
    Ok(writer.into_bytes())
}

/// Total element size: tag + name + length prefix + payload.
fn element_len(name_len: usize, payload_len: usize) -> Result<usize, EncodeError> {
    1usize
        .checked_add(name_len)
        .and_then(|n| n.checked_add(4))
        .and_then(|n| n.checked_add(payload_len))
        .ok_or(EncodeError::LengthExceedsLimit {
            field: "name",
            len: name_len,
            max: usize::MAX.saturating_sub(5).saturating_sub(payload_len),
        })
}

/// Builds a correctly bounded element name: the key bytes followed by NUL.
///
/// Keys with an interior NUL would truncate on the wire and are rejected.
pub fn encode_key(name: &str) -> Result<Vec<u8>, EncodeError> {
    if let Some(position) = name.bytes().position(|b| b == 0) {
        return Err(EncodeError::InteriorNul { position });
    }
    let mut writer = Writer::try_with_capacity(name.len() + 1)?;
    writer.write_bytes(name.as_bytes());
    writer.write_byte(0);
    Ok(writer.into_bytes())
}
