use std::io;
use thiserror::Error;

/// Raised by a single instruction step.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecError {
    #[error("instruction not handled: {opcode:#04x} at {addr:#06x}")]
    UnknownOpcode { opcode: u8, addr: u16 },
}

/// Errors surfaced while reading a program image.
#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("cannot read program image: {0}")]
    Io(#[from] io::Error),
    #[error("malformed program line {line}: {text:?}")]
    Syntax { line: usize, text: String },
}
