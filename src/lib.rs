//! Script assembly and hex decoding
//!
//! Assembles scripts from the text format used in test vectors, and decodes
//! transactions, blocks and hashes from hex strings.


mod merkle_tree;

pub mod hash;
pub mod script;
pub mod transaction;
pub mod block;
pub mod decode;


pub use crate::hash::Hash;
pub use crate::transaction::{Transaction, TxInput, TxOutput};
pub use crate::block::{Block, Header};
pub use crate::script::{assemble, AssembleError};
pub use crate::decode::{
    decode_hex_block, decode_hex_tx, is_hex,
    parse_hash_str, parse_hash_value, parse_hex_value,
    DecodeError, ParseError
};
