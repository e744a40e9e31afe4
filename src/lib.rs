//! An instruction-level MOS 6502 core: a flat 64 KiB memory and a cpu that runs
//! against a caller-supplied cycle budget.

mod macros;

pub mod bus;
pub mod error;
pub mod prog;
pub mod six502;

pub use bus::{ByteAccess, Memory, WordAccess, MEM_SIZE};
pub use error::{ExecError, ProgramError};
pub use prog::Program;
pub use six502::{AddressingMode, Flags, Opcode, Six502, RESET_VECTOR, STACK_BASE, ZERO_PAGE_END};
