//! Data model types for BSON elements.
//!
//! - Identifiers (ObjectIds)
//! - Values (the closed set of element kinds)

pub mod oid;
pub mod value;

pub use oid::{format_oid, parse_oid, Oid, NIL_OID};
pub use value::{ElementType, Text, Value};
