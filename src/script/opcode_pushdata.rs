/*
 * 2016 Tomas van der Wansem
 * No rights reserved
 */

//! Encoding and decoding of the opcodes that push data on the stack
//!
//! A push of up to 75 bytes uses the length itself as opcode;
//! longer pushes use OP_PUSHDATA1, OP_PUSHDATA2 or OP_PUSHDATA4
//! followed by a little-endian length of 1, 2 or 4 bytes

use byteorder::{ByteOrder, LittleEndian};

use crate::script::opcode::*;


/// Returns the width of the length field that follows
/// OP_PUSHDATA1, OP_PUSHDATA2 and OP_PUSHDATA4
pub fn size_from_opcode(opcode: u8) -> Option<usize> {
    match opcode {
        OP_PUSHDATA1 => Some(1),
        OP_PUSHDATA2 => Some(2),
        OP_PUSHDATA4 => Some(4),
        _            => None
    }
}

/// Reads a 1, 2 or 4 byte little-endian push length
///
/// A push length is a plain unsigned integer, not a script number
pub fn read_push_length(bytes: &[u8]) -> usize {
    LittleEndian::read_uint(bytes, bytes.len()) as usize
}

/// Appends `data` as a single push, using the shortest push opcode
///
/// An empty push is encoded as OP_0
pub fn push_data(script: &mut Vec<u8>, data: &[u8]) {
    let len = data.len();

    if len < OP_PUSHDATA1 as usize {
        script.push(len as u8);
    }
    else if len <= 0xff {
        script.push(OP_PUSHDATA1);
        script.push(len as u8);
    }
    else if len <= 0xffff {
        let mut field = [0u8; 2];
        LittleEndian::write_u16(&mut field, len as u16);
        script.push(OP_PUSHDATA2);
        script.extend_from_slice(&field);
    }
    else {
        let mut field = [0u8; 4];
        LittleEndian::write_u32(&mut field, len as u32);
        script.push(OP_PUSHDATA4);
        script.extend_from_slice(&field);
    }

    script.extend_from_slice(data);
}


#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_size_from_opcode() {
        assert_eq!(Some(1), size_from_opcode(76));
        assert_eq!(Some(2), size_from_opcode(77));
        assert_eq!(Some(4), size_from_opcode(78));
        assert_eq!(None,    size_from_opcode(75));
        assert_eq!(None,    size_from_opcode(OP_ADD));
    }

    #[test]
    fn test_read_push_length() {
        assert_eq!(read_push_length(&[0x4b]), 75);
        assert_eq!(read_push_length(&[0x00, 0x01]), 256);
        assert_eq!(read_push_length(&[0x01, 0x00, 0x01, 0x00]), 0x10001);
    }

    #[test]
    fn test_push_data_sizes() {
        let mut script = Vec::new();
        push_data(&mut script, &[]);
        assert_eq!(script, vec![OP_0]);

        let mut script = Vec::new();
        push_data(&mut script, &[7; 75]);
        assert_eq!(script[0], 75);
        assert_eq!(script.len(), 76);

        let mut script = Vec::new();
        push_data(&mut script, &[7; 76]);
        assert_eq!(&script[..2], &[OP_PUSHDATA1, 76]);
        assert_eq!(script.len(), 78);

        let mut script = Vec::new();
        push_data(&mut script, &[7; 256]);
        assert_eq!(&script[..3], &[OP_PUSHDATA2, 0x00, 0x01]);
        assert_eq!(script.len(), 259);

        let mut script = Vec::new();
        push_data(&mut script, &vec![7; 0x10000]);
        assert_eq!(&script[..5], &[OP_PUSHDATA4, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(script.len(), 0x10005);
    }
}
