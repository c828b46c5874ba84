//! Binary encoding/decoding for BSON elements and ObjectIds.

pub mod element;
pub mod oid;
pub mod primitives;

pub use element::{
    decode_element, encode_element, encode_element_with_options, encode_key, EncodeOptions,
};
pub use oid::{shuffle_oid, unshuffle_oid, OID_SHUFFLE};
pub use primitives::{Reader, Writer};
