//! Decoding of human supplied hex strings
//!
//! Transactions and blocks decode to a value or a `DecodeError`; nothing
//! partial is returned. Hashes and hex values fail with a `ParseError` that
//! names the offending field, for reporting back to whoever supplied it.

use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::block::Block;
use crate::hash::Hash;
use crate::transaction::Transaction;


#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("not a hex string")]
    NotHex,

    #[error("malformed data: {0}")]
    Malformed(#[from] serde_network::Error),

    #[error("{remaining} bytes of trailing data")]
    TrailingData { remaining: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("{field} must be hexadecimal string (not '{value}')")]
    NotHex { field: String, value: String },
}


/// Returns true for a non-empty, even length string of hex digits
pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.len() % 2 == 0 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn hex_bytes(hex: &str) -> Result<Vec<u8>, DecodeError> {
    if !is_hex(hex) {
        return Err(DecodeError::NotHex);
    }
    hex::decode(hex).map_err(|_| DecodeError::NotHex)
}


/// Decodes a transaction that must span the entire hex string
pub fn decode_hex_tx(hex: &str) -> Result<Transaction, DecodeError> {
    let data = hex_bytes(hex)?;

    let mut de = serde_network::Deserializer::new(&data);
    let tx: Transaction = de.deserialize().map_err(|e| {
        debug!("transaction decode failed: {}", e);
        e
    })?;

    if !de.is_empty() {
        debug!("transaction followed by {} bytes", de.remaining());
        return Err(DecodeError::TrailingData { remaining: de.remaining() });
    }
    Ok(tx)
}

/// Decodes a block from the start of the hex string
///
/// Unlike `decode_hex_tx`, data following the block is ignored.
pub fn decode_hex_block(hex: &str) -> Result<Block, DecodeError> {
    let data = hex_bytes(hex)?;

    serde_network::deserialize(&data).map_err(|e| {
        debug!("block decode failed: {}", e);
        DecodeError::Malformed(e)
    })
}


/// Parses a hash from its display form
pub fn parse_hash_str(hex: &str, name: &str) -> Result<Hash, ParseError> {
    if !is_hex(hex) {
        return Err(ParseError::NotHex { field: name.to_owned(), value: hex.to_owned() });
    }
    Ok(Hash::from_hex(hex))
}

/// Like `parse_hash_str`; anything but a JSON string counts as ""
pub fn parse_hash_value(value: &Value, name: &str) -> Result<Hash, ParseError> {
    parse_hash_str(value.as_str().unwrap_or(""), name)
}

/// Parses a JSON string of hex digits to bytes
pub fn parse_hex_value(value: &Value, name: &str) -> Result<Vec<u8>, ParseError> {
    let hex = value.as_str().unwrap_or("");

    let not_hex = || ParseError::NotHex { field: name.to_owned(), value: hex.to_owned() };

    if !is_hex(hex) {
        return Err(not_hex());
    }
    hex::decode(hex).map_err(|_| not_hex())
}
