//! Error types for BSON element encoding and decoding.

use thiserror::Error;

use crate::model::ElementType;

/// Flat error codes shared by encode and decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Input has the wrong fixed length
    InvalidLength,
    /// E002: Value kind has no encoding rule on this path
    UnsupportedType,
    /// E003: Text cannot be represented as UTF-8
    Encoding,
    /// E004: Output buffer could not be allocated
    OutOfMemory,
    /// E005: Malformed length/terminator/tag or size limit exceeded
    MalformedEncoding,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidLength => "E001",
            ErrorCode::UnsupportedType => "E002",
            ErrorCode::Encoding => "E003",
            ErrorCode::OutOfMemory => "E004",
            ErrorCode::MalformedEncoding => "E005",
        }
    }
}

/// Error during element or identifier encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("[E001] {field} must be of length {expected}, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("[E002] no fast-path encoder for {element_type:?} yet")]
    UnsupportedType { element_type: ElementType },

    #[error("[E003] code unit {unit:#x} at index {position} cannot be encoded as UTF-8")]
    Encoding { position: usize, unit: u32 },

    #[error("[E004] failed to allocate {requested} bytes for element")]
    OutOfMemory { requested: usize },

    #[error("[E005] {field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("[E005] key contains NUL byte at index {position}")]
    InteriorNul { position: usize },
}

impl EncodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EncodeError::InvalidLength { .. } => ErrorCode::InvalidLength,
            EncodeError::UnsupportedType { .. } => ErrorCode::UnsupportedType,
            EncodeError::Encoding { .. } => ErrorCode::Encoding,
            EncodeError::OutOfMemory { .. } => ErrorCode::OutOfMemory,
            EncodeError::LengthExceedsLimit { .. } | EncodeError::InteriorNul { .. } => {
                ErrorCode::MalformedEncoding
            }
        }
    }

    /// Returns true when the value should be retried on a complete (slower)
    /// encoder instead of aborting.
    ///
    /// Only [`EncodeError::UnsupportedType`] qualifies; every other variant
    /// means the input itself is unusable.
    pub fn is_fallback(&self) -> bool {
        matches!(self, EncodeError::UnsupportedType { .. })
    }
}

/// Error during element decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("[E005] unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("[E003] invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("[E005] invalid element type: {tag:#04x}")]
    InvalidElementType { tag: u8 },

    #[error("[E002] no fast-path decoder for {element_type:?} yet")]
    UnsupportedType { element_type: ElementType },

    #[error("[E005] invalid string length {len} (remaining: {remaining})")]
    InvalidStringLength { len: i32, remaining: usize },

    #[error("[E005] {context} is missing its NUL terminator")]
    MissingTerminator { context: &'static str },

    #[error("[E005] {count} trailing bytes after element")]
    TrailingBytes { count: usize },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::InvalidUtf8 { .. } => ErrorCode::Encoding,
            DecodeError::UnsupportedType { .. } => ErrorCode::UnsupportedType,
            _ => ErrorCode::MalformedEncoding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unsupported_type_is_fallback() {
        let unsupported = EncodeError::UnsupportedType { element_type: ElementType::Int32 };
        assert!(unsupported.is_fallback());
        assert_eq!(unsupported.code(), ErrorCode::UnsupportedType);

        let fatal = [
            EncodeError::InvalidLength { field: "oid", expected: 12, actual: 3 },
            EncodeError::Encoding { position: 0, unit: 0xD800 },
            EncodeError::OutOfMemory { requested: usize::MAX },
            EncodeError::InteriorNul { position: 1 },
        ];
        for err in fatal {
            assert!(!err.is_fallback(), "{err} should not be a fallback");
        }
    }

    #[test]
    fn test_error_messages() {
        let err = EncodeError::InvalidLength { field: "oid", expected: 12, actual: 11 };
        assert_eq!(err.to_string(), "[E001] oid must be of length 12, got 11");
        assert_eq!(err.code().code(), "E001");

        let err = DecodeError::InvalidElementType { tag: 0x7f };
        assert_eq!(err.to_string(), "[E005] invalid element type: 0x7f");
    }
}
