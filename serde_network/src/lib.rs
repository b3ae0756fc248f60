//! Serde (de)serialization of the bitcoin network format
//!
//! Primitives are little-endian, variable length sequences are
//! prefixed with a compact-size and fixed size arrays and structs are
//! written field by field without any framing.
//!
//! The deserializer is strict: it never reads past the end of its input
//! and reports how many bytes are left, such that callers can reject
//! trailing data.

use serde::{Serialize, Deserialize};

mod ser;
pub use crate::ser::Serializer;
mod de;
pub use crate::de::Deserializer;
mod error;
pub use crate::error::{Error, Result};
pub use crate::ser::encode_compact_size;
pub use crate::de::decode_compact_size;


pub fn serialize<T>(out: &mut Vec<u8>, value: &T) -> Result<()>
    where T: Serialize
{
    let mut ser = Serializer::new(out);
    Serialize::serialize(value, &mut ser)
}

/// Deserializes a value from the front of `bytes`
///
/// Bytes that are not needed for `T` are silently ignored;
/// use `deserialize_exact` or `Deserializer::remaining` to reject them
pub fn deserialize<'de, T>(bytes: &'de [u8]) -> Result<T>
    where T: Deserialize<'de>
{
    Deserializer::new(bytes).deserialize()
}

/// Deserializes a value that must span the entire buffer
pub fn deserialize_exact<'de, T>(bytes: &'de [u8]) -> Result<T>
    where T: Deserialize<'de>
{
    let mut de = Deserializer::new(bytes);
    let result = de.deserialize()?;

    if !de.is_empty() {
        return Err(Error::TrailingBytes(de.remaining()));
    }
    Ok(result)
}
