//! cbson: fast-path BSON element and ObjectId encoding.
//!
//! This crate provides the two leaf transforms a BSON document encoder is
//! built on:
//!
//! - reordering a 12-byte ObjectId into wire order
//! - encoding one `(name, value)` pair into a BSON element
//!
//! # Quick Start
//!
//! ```rust
//! use cbson::{encode_element, encode_key, shuffle_oid, Value};
//!
//! let key = encode_key("greeting").unwrap();
//! let bytes = encode_element(&key, &Value::from("hi")).unwrap();
//! assert_eq!(bytes[0], 0x02);
//! assert_eq!(&bytes[bytes.len() - 7..], &[3, 0, 0, 0, b'h', b'i', 0]);
//!
//! let wire = shuffle_oid(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]).unwrap();
//! assert_eq!(wire, [7, 6, 5, 4, 3, 2, 1, 0, 11, 10, 9, 8]);
//! ```
//!
//! # Type coverage
//!
//! Only strings have a fast-path encoding. Every other [`Value`] kind fails
//! with [`EncodeError::UnsupportedType`]; check
//! [`EncodeError::is_fallback`] and hand such values to a complete encoder.
//!
//! # Modules
//!
//! - [`model`]: ObjectIds, element types and values
//! - [`codec`]: Element and ObjectId encoding, plus a string element decoder
//! - [`error`]: Error types
//! - [`limits`]: Wire size limits
//!
//! # Wire Format
//!
//! A string element is laid out as:
//!
//! ```text
//! 0x02 | name | len: i32 LE | utf8 | 0x00
//! ```
//!
//! where `len` counts the UTF-8 bytes plus the trailing NUL. Length prefixes
//! are always little-endian regardless of host.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{
    decode_element, encode_element, encode_element_with_options, encode_key, shuffle_oid,
    unshuffle_oid, EncodeOptions,
};
pub use error::{DecodeError, EncodeError, ErrorCode};
pub use model::{format_oid, parse_oid, ElementType, Oid, Text, Value, NIL_OID};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
