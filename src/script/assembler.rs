//! Assembles a script from its textual representation
//!
//! The format is the one used by the reference test vectors: words are
//! separated by whitespace and each word is one of
//!
//! * a decimal number (`-12`), pushed as the shortest number push
//! * raw hex (`0x4c02`), inserted as-is and *not* wrapped in a push
//! * a single-quoted string (`'abc'`), pushed as data
//! * an opcode name, with or without `OP_` (`OP_ADD`, `ADD`)
//!
//! Because raw hex can spell out push opcodes and their payload in separate
//! words, the assembler tracks the push that is in progress and checks that
//! each payload has exactly the announced length.

use std::mem;

use log::trace;
use thiserror::Error;

use crate::script::opcode::{self, OP_PUSHDATA1};
use crate::script::opcode_pushdata::{push_data, read_push_length, size_from_opcode};
use crate::script::scriptnum::push_int;
use crate::script::tokenizer::tokenize;


#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssembleError {

    /// A word that is neither number, hex, string nor opcode;
    /// reported with the entire script
    #[error("Error parsing script: {script}")]
    Unparsable { script: String },

    /// Returned by `encode_token` for an unrecognized word
    #[error("Unrecognized word: {token}")]
    UnknownToken { token: String },

    #[error("Hex numbers expected to be formatted in full-byte chunks (ex: 0x00 instead of 0x0)")]
    BadHexChunk,

    #[error("Wrong number of bytes being pushed. Expected:{expected} Pushed:{pushed}")]
    WrongPushSize { expected: usize, pushed: usize },
}


/// The push that is in progress between words
///
/// After an opcode that announces a push, the next word must emit exactly
/// the announced number of bytes. For OP_PUSHDATA1/2/4 this happens twice:
/// first the length field itself is expected, and once it is known, the
/// payload it describes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PushState {
    expected_push_size: usize,
    length_field_width: usize,
}

impl PushState {

    pub fn new() -> PushState {
        PushState::default()
    }

    /// Number of bytes the next word must emit; 0 if unconstrained
    pub fn expected_push_size(&self) -> usize {
        self.expected_push_size
    }

    /// Width of the length field currently expected; 0 unless the
    /// previous word was OP_PUSHDATA1/2/4
    pub fn length_field_width(&self) -> usize {
        self.length_field_width
    }

    /// Advances the state over the bytes `emitted` by a single word
    pub fn step(&mut self, emitted: &[u8]) -> Result<(), AssembleError> {

        let pushed = emitted.len();
        let expected = mem::replace(&mut self.expected_push_size, 0);

        if expected != 0 {
            if pushed != expected {
                return Err(AssembleError::WrongPushSize { expected, pushed });
            }

            // This word was the length field of OP_PUSHDATAn;
            // it announces the size of the next word
            if self.length_field_width != 0 {
                self.expected_push_size = read_push_length(&emitted[..self.length_field_width]);
                self.length_field_width = 0;
            }
            return Ok(());
        }

        // A single byte may be an opcode that starts a push
        if pushed == 1 {
            let op = emitted[0];

            if op < OP_PUSHDATA1 {
                self.expected_push_size = op as usize;
            }
            else if let Some(width) = size_from_opcode(op) {
                self.expected_push_size = width;
                self.length_field_width = width;
            }
        }

        Ok(())
    }
}


fn is_decimal(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}


/// Appends the encoding of a single word to `script`
pub fn encode_token(token: &str, script: &mut Vec<u8>) -> Result<(), AssembleError> {

    if is_decimal(token) {
        // out of range values clamp to the nearest bound
        let n: i64 = token.parse().unwrap_or_else(|_|
            if token.starts_with('-') { i64::min_value() } else { i64::max_value() });

        push_int(script, n);
    }
    else if token.starts_with("0x") && token.len() > 2 {
        // Raw hex data, inserted NOT pushed onto stack
        let raw = hex::decode(&token[2..])
            .map_err(|_| AssembleError::BadHexChunk)?;

        script.extend_from_slice(&raw);
    }
    else if token.len() >= 2 && token.starts_with('\'') && token.ends_with('\'') {
        // Single-quoted string, pushed as data; no escapes, and as words
        // are split on whitespace, neither are spaces
        push_data(script, token[1..token.len() - 1].as_bytes());
    }
    else if let Some(op) = opcode::lookup(token) {
        script.push(op);
    }
    else {
        return Err(AssembleError::UnknownToken { token: token.to_owned() });
    }

    Ok(())
}


/// Assembles `script` into bytes
///
/// Fails on the first word that cannot be encoded or that does not match
/// the size of a push in progress. No partial script is returned.
pub fn assemble(script: &str) -> Result<Vec<u8>, AssembleError> {

    let mut result = Vec::new();
    let mut push_state = PushState::new();

    for token in tokenize(script) {
        let token_start = result.len();

        encode_token(token, &mut result).map_err(|e| match e {
            AssembleError::UnknownToken { .. } => AssembleError::Unparsable { script: script.to_owned() },
            e => e
        })?;

        push_state.step(&result[token_start..])?;

        trace!("assembled {:?} to {} bytes, expecting {}",
            token, result.len() - token_start, push_state.expected_push_size());
    }

    Ok(result)
}
