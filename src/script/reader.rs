//! Strict instruction reader
//!
//! Walks a script instruction by instruction. Pushes whose payload runs
//! past the end of the script are an error, not a shorter push.

use crate::script::ScriptError;
use crate::script::opcode::OP_PUSHDATA1;
use crate::script::opcode_pushdata::{read_push_length, size_from_opcode};


#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Instruction<'a> {
    /// Data pushed by OP_0, a direct push or OP_PUSHDATA1/2/4
    Push(&'a [u8]),

    /// Any other opcode
    Op(u8),
}


/// Reader provides the instructions of a script
pub struct Reader<'a> {
    script: &'a [u8],
    ip:     usize
}


impl<'a> Reader<'a> {

    pub fn new(script: &'a [u8]) -> Reader<'a> {
        Reader {
            script: script,
            ip:     0
        }
    }

    /// Returns the next `count` bytes after the instruction pointer
    ///
    /// Can return an UnexpectedEndOfScript if not enough bytes are available
    fn next_bytes(&mut self, count: usize) -> Result<&'a [u8], ScriptError> {
        if self.script.len() - self.ip < count {
            return Err(ScriptError::UnexpectedEndOfScript);
        }

        let old_ip = self.ip;
        self.ip += count;
        Ok(&self.script[old_ip..self.ip])
    }

    fn next_instruction(&mut self, opcode: u8) -> Result<Instruction<'a>, ScriptError> {
        if opcode < OP_PUSHDATA1 {
            return self.next_bytes(opcode as usize).map(Instruction::Push);
        }

        match size_from_opcode(opcode) {
            Some(width) => {
                let count = read_push_length(self.next_bytes(width)?);
                self.next_bytes(count).map(Instruction::Push)
            },
            None => Ok(Instruction::Op(opcode))
        }
    }

    /// Collects all data pushed by the script; fails if the script has
    /// any malformed push
    pub fn pushes(script: &'a [u8]) -> Result<Vec<&'a [u8]>, ScriptError> {
        let mut result = Vec::new();
        for instruction in Reader::new(script) {
            if let Instruction::Push(data) = instruction? {
                result.push(data);
            }
        }
        Ok(result)
    }
}

impl<'a> Iterator for Reader<'a> {
    type Item = Result<Instruction<'a>, ScriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ip >= self.script.len() {
            return None;
        }

        let opcode = self.script[self.ip];
        self.ip += 1;

        let result = self.next_instruction(opcode);
        if result.is_err() {
            // nothing sensible follows a broken push
            self.ip = self.script.len();
        }
        Some(result)
    }
}
