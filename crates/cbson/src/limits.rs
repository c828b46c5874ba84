//! Size limits for BSON elements.
//!
//! BSON length prefixes are signed 32-bit integers, so no length written to
//! the wire may exceed `i32::MAX`.

/// Length of an ObjectId in bytes.
pub const OID_LEN: usize = 12;

/// Largest value a BSON length prefix can carry.
pub const MAX_LENGTH_PREFIX: usize = i32::MAX as usize;

/// Maximum UTF-8 byte length of a string payload (prefix counts the NUL).
pub const MAX_STRING_LEN: usize = MAX_LENGTH_PREFIX - 1;

/// Opt-in maximum size of one encoded element (16 MiB, the BSON document cap).
pub const MAX_ELEMENT_SIZE: usize = 16 * 1024 * 1024;
