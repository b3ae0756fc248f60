use byteorder::{LittleEndian, ReadBytesExt};
use serde::de::{self, Deserialize, DeserializeSeed, Visitor};
use std::str;
use crate::{Error, Result};


pub fn decode_compact_size<R: ::std::io::Read>(reader: &mut R) -> Result<usize> {

    let byte1: u8 = reader.read_u8()?;
    let result = match byte1 {
        0xff => reader.read_u64::<LittleEndian>()? as usize,
        0xfe => reader.read_u32::<LittleEndian>()? as usize,
        0xfd => reader.read_u16::<LittleEndian>()? as usize,
        _ => byte1 as usize
    };
    Ok(result)
}



pub struct Deserializer<'de> {
    bytes: &'de [u8],
}

impl<'de> Deserializer<'de> {
    pub fn new(bytes: &'de [u8]) -> Self {
        Deserializer { bytes: bytes }
    }

    pub fn deserialize<T>(&mut self) -> Result<T> where T: serde::Deserialize<'de>
    {
        Deserialize::deserialize(self)
    }

    /// Number of bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }

    /// True if the entire input has been consumed
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn decode_compact_size(&mut self) -> Result<usize> {
        decode_compact_size(&mut self.bytes)
    }

    /// Reads a compact-size prefixed slice
    ///
    /// The prefix is checked against the remaining input before splitting
    #[inline]
    fn read_slice(&mut self) -> Result<&'de [u8]> {
        let len = self.decode_compact_size()?;
        if len > self.bytes.len() {
            return Err(Error::EndOfBufferError);
        }
        let (slice, rest) = self.bytes.split_at(len);
        self.bytes = rest;
        Ok(slice)
    }

}

/// Element access for a known number of elements
///
/// Used for compact-size prefixed sequences as well as fixed
/// size arrays, tuples and structs
struct Counted<'a, 'de: 'a> {
    deserializer: &'a mut Deserializer<'de>,
    remaining: usize,
}

impl<'de, 'a> de::SeqAccess<'de> for Counted<'a, 'de> {
    type Error = Error;

    #[inline]
    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
        where T: DeserializeSeed<'de>
    {
        if self.remaining > 0 {
            self.remaining -= 1;
            seed.deserialize(&mut *self.deserializer).map(Some)
        } else {
            Ok(None)
        }
    }

    fn size_hint(&self) -> Option<usize> {
        // a hostile prefix must not turn into a huge allocation
        Some(self.remaining.min(self.deserializer.remaining()))
    }
}

macro_rules! impl_nums {
    ($ty:ty, $dser_method:ident, $visitor_method:ident, $reader_method:ident) => {
        #[inline]
        fn $dser_method<V>(self, visitor: V) -> Result<V::Value>
            where V: Visitor<'de>
        {
            let value: $ty = self.bytes.$reader_method::<LittleEndian>()?;
            visitor.$visitor_method(value)
        }
    };
}

macro_rules! impl_unsupported {
    ($method: ident, $what: expr) => {
        fn $method<V>(self, _visitor: V) -> Result<V::Value>
            where V: Visitor<'de>
        {
            Err(Error::Unsupported($what))
        }
    };
}

impl<'de, 'a> serde::Deserializer<'de> for &'a mut Deserializer<'de> {
    type Error = Error;

    impl_unsupported!(deserialize_any, "self-describing value");
    impl_unsupported!(deserialize_ignored_any, "ignored value");
    impl_unsupported!(deserialize_char, "char");
    impl_unsupported!(deserialize_map, "map");
    impl_unsupported!(deserialize_identifier, "identifier");

    impl_nums!(u16, deserialize_u16, visit_u16, read_u16);
    impl_nums!(u32, deserialize_u32, visit_u32, read_u32);
    impl_nums!(u64, deserialize_u64, visit_u64, read_u64);
    impl_nums!(i16, deserialize_i16, visit_i16, read_i16);
    impl_nums!(i32, deserialize_i32, visit_i32, read_i32);
    impl_nums!(i64, deserialize_i64, visit_i64, read_i64);
    impl_nums!(f32, deserialize_f32, visit_f32, read_f32);
    impl_nums!(f64, deserialize_f64, visit_f64, read_f64);

    #[inline]
    fn deserialize_u8<V>(self, visitor: V) -> Result<V::Value>
        where V: Visitor<'de>
    {
        visitor.visit_u8(self.bytes.read_u8()?)
    }

    #[inline]
    fn deserialize_i8<V>(self, visitor: V) -> Result<V::Value>
        where V: Visitor<'de>
    {
        visitor.visit_i8(self.bytes.read_i8()?)
    }

    #[inline]
    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
        where V: Visitor<'de>
    {
        visitor.visit_bool(self.bytes.read_u8()? != 0)
    }

    // Strings are compact-size prefixed, like var_str in the version message
    #[inline]
    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
        where V: Visitor<'de>
    {
        let slice = self.read_slice()?;
        let s = str::from_utf8(slice)
            .map_err(|e| Error::Custom(e.to_string()))?;
        visitor.visit_borrowed_str(s)
    }

    #[inline]
    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
        where V: Visitor<'de>
    {
        self.deserialize_str(visitor)
    }

    #[inline]
    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
        where V: Visitor<'de>
    {
        visitor.visit_borrowed_bytes(self.read_slice()?)
    }

    #[inline]
    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
        where V: Visitor<'de>
    {
        visitor.visit_borrowed_bytes(self.read_slice()?)
    }

    // Options are a single marker byte, optionally followed by the value
    #[inline]
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
        where V: Visitor<'de>
    {
        match self.bytes.read_u8()? {
            0 => visitor.visit_none(),
            _ => visitor.visit_some(self)
        }
    }

    #[inline]
    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
        where V: Visitor<'de>
    {
        visitor.visit_unit()
    }

    #[inline]
    fn deserialize_enum<V>(self,
                           _enum: &'static str,
                           _variants: &'static [&'static str],
                           _visitor: V)
                           -> Result<V::Value>
        where V: Visitor<'de>
    {
        Err(Error::Unsupported("enum"))
    }

    // Tuple deserialization is invoked for a fixed length array
    #[inline]
    fn deserialize_tuple<V>(self, len: usize, visitor: V) -> Result<V::Value>
        where V: Visitor<'de>
    {
        visitor.visit_seq(Counted {
            deserializer: self,
            remaining: len,
        })
    }

    // Variable length sequence is decoded as compact-length prefixed
    #[inline]
    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
        where V: Visitor<'de>
    {
        let len = self.decode_compact_size()?;

        visitor.visit_seq(Counted {
            deserializer: self,
            remaining: len,
        })
    }


    #[inline]
    fn deserialize_struct<V>(self,
                             _name: &str,
                             fields: &'static [&'static str],
                             visitor: V)
                             -> Result<V::Value>
        where V: Visitor<'de>
    {
        visitor.visit_seq(Counted {
            deserializer: self,
            remaining: fields.len(),
        })
    }


    #[inline]
    fn deserialize_newtype_struct<V>(self, _name: &str, visitor: V) -> Result<V::Value>
        where V: Visitor<'de>
    {
        visitor.visit_newtype_struct(self)
    }

    #[inline]
    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
        where V: Visitor<'de>
    {
        visitor.visit_unit()
    }

    #[inline]
    fn deserialize_tuple_struct<V>(self,
                                   _name: &'static str,
                                   len: usize,
                                   visitor: V)
                                   -> Result<V::Value>
        where V: Visitor<'de>
    {
        self.deserialize_tuple(len, visitor)
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}
