//! ObjectId identifiers.
//!
//! An ObjectId is 12 opaque bytes. This crate never interprets its
//! segments; it only moves them into wire order (see
//! [`crate::codec::shuffle_oid`]) and formats them for display.

use crate::limits::OID_LEN;

/// A 12-byte ObjectId in construction order.
pub type Oid = [u8; OID_LEN];

/// The all-zero ObjectId.
pub const NIL_OID: Oid = [0u8; OID_LEN];

/// Formats an ObjectId as 24 lowercase hex characters.
pub fn format_oid(oid: &Oid) -> String {
    let mut s = String::with_capacity(OID_LEN * 2);
    for byte in oid {
        s.push_str(&format!("{:02x}", byte));
    }
    s
}

/// Parses an ObjectId from 24 hex characters.
pub fn parse_oid(s: &str) -> Option<Oid> {
    if s.len() != OID_LEN * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let mut oid = [0u8; OID_LEN];
    for (i, chunk) in s.as_bytes().chunks(2).enumerate() {
        let byte_str = std::str::from_utf8(chunk).ok()?;
        oid[i] = u8::from_str_radix(byte_str, 16).ok()?;
    }
    Some(oid)
}
