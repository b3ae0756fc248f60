//! SCRIPTING interface
//!
//! Assembling scripts from text and reading their push instructions back.
//! Script execution is not done here.


pub mod opcode;

pub mod opcode_pushdata;

pub mod scriptnum;

pub mod tokenizer;

pub mod assembler;

pub mod reader;

pub use self::assembler::{assemble, encode_token, AssembleError, PushState};
pub use self::reader::{Instruction, Reader};

#[derive(Debug, PartialEq, Eq)]
pub enum ScriptError {
    UnexpectedEndOfScript,
}
