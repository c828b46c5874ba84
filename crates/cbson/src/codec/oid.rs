//! ObjectId wire ordering.
//!
//! ObjectIds are built as an 8-byte group followed by a 4-byte group. On the
//! wire each group is byte-reversed:
//!
//! ```text
//! in:  b0 b1 b2 b3 b4 b5 b6 b7 | b8 b9 b10 b11
//! out: b7 b6 b5 b4 b3 b2 b1 b0 | b11 b10 b9 b8
//! ```
//!
//! This is a fixed permutation, not an endianness conversion of any
//! single integer.

use crate::error::EncodeError;
use crate::limits::OID_LEN;
use crate::model::Oid;

/// Output byte `i` is input byte `OID_SHUFFLE[i]`.
pub const OID_SHUFFLE: [usize; OID_LEN] = [7, 6, 5, 4, 3, 2, 1, 0, 11, 10, 9, 8];

/// Reorders an ObjectId into wire order.
///
/// The length is checked before anything is written; the input is never
/// modified and the result is a fresh array.
pub fn shuffle_oid(bytes: &[u8]) -> Result<Oid, EncodeError> {
    if bytes.len() != OID_LEN {
        return Err(EncodeError::InvalidLength {
            field: "oid",
            expected: OID_LEN,
            actual: bytes.len(),
        });
    }

    let mut shuffled = [0u8; OID_LEN];
    for (out, &src) in shuffled.iter_mut().zip(OID_SHUFFLE.iter()) {
        *out = bytes[src];
    }
    Ok(shuffled)
}

/// Restores construction order from wire order.
///
/// Reversing each group twice is the identity, so this applies the same
/// table as [`shuffle_oid`].
pub fn unshuffle_oid(bytes: &[u8]) -> Result<Oid, EncodeError> {
    shuffle_oid(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_known_vector() {
        let input = [0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        assert_eq!(
            shuffle_oid(&input).unwrap(),
            [7, 6, 5, 4, 3, 2, 1, 0, 11, 10, 9, 8]
        );
    }

    #[test]
    fn test_shuffle_is_involution() {
        let input = [0x50, 0x7f, 0x1f, 0x77, 0xbc, 0xf8, 0x6c, 0xd7, 0x99, 0x43, 0x90, 0x11];
        let wire = shuffle_oid(&input).unwrap();
        assert_ne!(wire, input);
        assert_eq!(unshuffle_oid(&wire).unwrap(), input);
    }

    #[test]
    fn test_table_is_permutation() {
        let mut seen = [false; OID_LEN];
        for &i in &OID_SHUFFLE {
            assert!(!seen[i]);
            seen[i] = true;
        }
        // Segments never mix.
        assert!(OID_SHUFFLE[..8].iter().all(|&i| i < 8));
        assert!(OID_SHUFFLE[8..].iter().all(|&i| i >= 8));
    }

    #[test]
    fn test_invalid_length() {
        for len in [0usize, 1, 11, 13, 16, 24] {
            let input = vec![0xAB; len];
            assert_eq!(
                shuffle_oid(&input),
                Err(EncodeError::InvalidLength { field: "oid", expected: 12, actual: len })
            );
        }
    }
}
