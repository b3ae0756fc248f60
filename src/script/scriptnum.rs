//! Script numbers
//!
//! Scriptnums are stored as little-endian, sign-and-magnitude
//! which means that the highest bit of the last byte
//! determines the sign. The encoding is minimal: zero is the empty
//! array and no byte is added unless the sign bit requires it.

use crate::script::opcode::{OP_0, OP_1, OP_1NEGATE};
use crate::script::opcode_pushdata::push_data;


/// Serializes `n` as a minimally encoded scriptnum
pub fn serialize(n: i64) -> Vec<u8> {

    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut magnitude = n.unsigned_abs();

    let mut result: Vec<u8> = Vec::with_capacity(9);
    while magnitude > 0 {
        result.push((magnitude & 0xFF) as u8);
        magnitude >>= 8;
    }

    // If the top bit of the last byte is in use, the sign needs an extra byte;
    // otherwise it is folded into the last byte
    let last = result.len() - 1;
    if result[last] & 0x80 != 0 {
        result.push(if negative { 0x80 } else { 0x00 });
    }
    else if negative {
        result[last] |= 0x80;
    }

    result
}

/// Interprets `bytes` as a scriptnum
///
/// Accepts non-minimal encodings; returns None if the value
/// does not fit an i64
pub fn deserialize(bytes: &[u8]) -> Option<i64> {

    if bytes.is_empty() {
        return Some(0);
    }
    if bytes.len() > 9 {
        return None;
    }

    let signed_magnitude = bytes.iter()
        .enumerate()
        .fold(0u128, |sum, (n, byte)| sum | ((*byte as u128) << (n * 8)));

    let sign_bit_mask = 0x80_u128 << ((bytes.len() - 1) * 8);
    let magnitude = (signed_magnitude & !sign_bit_mask) as i128;

    let value = if signed_magnitude & sign_bit_mask != 0 { -magnitude } else { magnitude };

    if value < i64::min_value() as i128 || value > i64::max_value() as i128 {
        None
    }
    else {
        Some(value as i64)
    }
}

/// Appends the shortest push of `n`
///
/// -1 and 1 to 16 have their own opcodes, 0 is OP_0 and
/// everything else is pushed as a scriptnum
pub fn push_int(script: &mut Vec<u8>, n: i64) {
    if n == -1 {
        script.push(OP_1NEGATE);
    }
    else if n >= 1 && n <= 16 {
        script.push(OP_1 + (n as u8 - 1));
    }
    else if n == 0 {
        script.push(OP_0);
    }
    else {
        push_data(script, &serialize(n));
    }
}


#[cfg(test)]
mod test {

    use super::*;
    use crate::script::opcode::OP_16;

    #[test]
    fn test_serialize() {
        assert_eq!(serialize(0), Vec::<u8>::new());
        assert_eq!(serialize(1), vec![0x01]);
        assert_eq!(serialize(-1), vec![0x81]);
        assert_eq!(serialize(127), vec![0x7f]);
        assert_eq!(serialize(128), vec![0x80, 0x00]);
        assert_eq!(serialize(-128), vec![0x80, 0x80]);
        assert_eq!(serialize(255), vec![0xff, 0x00]);
        assert_eq!(serialize(256), vec![0x00, 0x01]);
        assert_eq!(serialize(-0x7fff_ffff), vec![0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_serialize_extremes() {
        assert_eq!(serialize(i64::max_value()),
                   vec![0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f]);
        assert_eq!(serialize(i64::min_value()),
                   vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x80]);
    }

    #[test]
    fn test_deserialize() {
        assert_eq!(deserialize(&[]), Some(0));
        assert_eq!(deserialize(&[0x81]), Some(-1));
        assert_eq!(deserialize(&[0x80, 0x00]), Some(128));
        assert_eq!(deserialize(&[0x80, 0x80]), Some(-128));
        // negative zero
        assert_eq!(deserialize(&[0x80]), Some(0));
        assert_eq!(deserialize(&[0; 10]), None);
        assert_eq!(deserialize(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00]), None);
    }

    #[test]
    fn test_push_int() {
        let push = |n| { let mut s = Vec::new(); push_int(&mut s, n); s };

        assert_eq!(push(0), vec![OP_0]);
        assert_eq!(push(-1), vec![OP_1NEGATE]);
        assert_eq!(push(1), vec![OP_1]);
        assert_eq!(push(16), vec![OP_16]);
        assert_eq!(push(17), vec![0x01, 0x11]);
        assert_eq!(push(-2), vec![0x01, 0x82]);
        assert_eq!(push(1000), vec![0x02, 0xe8, 0x03]);
    }
}
