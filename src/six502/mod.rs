mod addr_mode;
mod fetch;
mod flags;
mod opcodes;

use crate::bus::Memory;
use std::fmt;

pub use addr_mode::AddressingMode;
pub use flags::Flags;
pub use opcodes::Opcode;

/// Execution begins here after reset. This core starts running at the vector location
/// itself instead of loading a pointer from $FFFC/$FFFD.
pub const RESET_VECTOR: u16 = 0xfffc;
/// SP is held as a full address into page one and is never moved by JSR.
pub const STACK_BASE: u16 = 0x0100;
/// Last address of page zero.
pub const ZERO_PAGE_END: u16 = 0x00ff;

#[derive(Debug, Clone)]
pub struct Six502 {
    /// the major use for the accumulator is transferring data from memory to the accumulator or from the accumulator to memory.
    pub a: u8,
    pub x: u8,
    pub y: u8,
    /// the program counter addresses the next byte of the instruction stream
    pub pc: u16,
    pub sp: u16,
    /// flags
    pub p: Flags,
    /// cycles consumed since the last reset
    cy: u64,
}

impl Default for Six502 {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: RESET_VECTOR,
            sp: STACK_BASE,
            p: Flags::empty(),
            cy: 0,
        }
    }
}

impl Six502 {
    /// A cpu in the same register state `reset` leaves it in. Memory is not touched.
    pub fn new() -> Self {
        Default::default()
    }

    /// Puts the processor in a known state: PC at the reset vector, SP at the stack base,
    /// all registers and flags cleared, and memory zeroed.
    pub fn reset(&mut self, mem: &mut Memory) {
        *self = Self::new();
        mem.initialize();
        log::debug!(target: "six502", "reset: pc={:#06x} sp={:#06x}", self.pc, self.sp);
    }

    /// cycles consumed since the last reset
    pub fn cycles(&self) -> u64 {
        self.cy
    }
}

impl fmt::Display for Six502 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC={:04X} SP={:04X} A={:02X} X={:02X} Y={:02X} P={}",
            self.pc, self.sp, self.a, self.x, self.y, self.p
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_deterministic() {
        let mut mem = Memory::new();
        mem.load(0x0000, &[0xde, 0xad, 0xbe, 0xef]);
        mem[0xfffc] = 0xa9;
        let mut cpu = Six502::new();
        cpu.a = 0x11;
        cpu.x = 0x22;
        cpu.y = 0x33;
        cpu.pc = 0x1234;
        cpu.sp = 0x01ff;
        cpu.p = Flags::all();
        cpu.execute(2, &mut mem);

        cpu.reset(&mut mem);
        assert!(mem.iter().all(|&b| b == 0));
        assert_eq!((cpu.a, cpu.x, cpu.y), (0, 0, 0));
        assert_eq!(cpu.p, Flags::empty());
        assert_eq!(cpu.pc, RESET_VECTOR);
        assert_eq!(cpu.sp, STACK_BASE);
        assert_eq!(cpu.cycles(), 0);
    }

    #[test]
    fn display_dumps_registers() {
        let mut cpu = Six502::new();
        cpu.a = 0x64;
        cpu.pc = 0x4244;
        cpu.p = Flags::NEGATIVE | Flags::CARRY;
        assert_eq!(cpu.to_string(), "PC=4244 SP=0100 A=64 X=00 Y=00 P=N------C");
    }
}
