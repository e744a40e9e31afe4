use super::addr_mode::AddressingMode::{self, *};
use super::Six502;
use crate::bus::Memory;
use crate::error::ExecError;

/// The instructions the decoder knows. The discriminant is the opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// load accumulator, immediate
    LdaIm = 0xa9,
    /// load accumulator, zero page
    LdaZp = 0xa5,
    /// load accumulator, zero page indexed by X
    LdaZpX = 0xb5,
    /// jump to subroutine, absolute
    Jsr = 0x20,
}

impl Opcode {
    pub const ALL: [Opcode; 4] = [Opcode::LdaIm, Opcode::LdaZp, Opcode::LdaZpX, Opcode::Jsr];

    pub fn decode(op: u8) -> Option<Opcode> {
        match op {
            0xa9 => Some(Opcode::LdaIm),
            0xa5 => Some(Opcode::LdaZp),
            0xb5 => Some(Opcode::LdaZpX),
            0x20 => Some(Opcode::Jsr),
            _ => None,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::LdaIm | Opcode::LdaZp | Opcode::LdaZpX => "LDA",
            Opcode::Jsr => "JSR",
        }
    }

    pub fn mode(self) -> AddressingMode {
        match self {
            Opcode::LdaIm => Immediate,
            Opcode::LdaZp => ZP,
            Opcode::LdaZpX => ZP_X_Idxd,
            Opcode::Jsr => Absolute,
        }
    }

    /// Cycles the instruction takes, opcode fetch included.
    pub fn cycles(self) -> i32 {
        match self {
            Opcode::LdaIm => 2,
            Opcode::LdaZp => 3,
            Opcode::LdaZpX => 4,
            Opcode::Jsr => 6,
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(op: u8) -> Result<Self, Self::Error> {
        Opcode::decode(op).ok_or(op)
    }
}

// load ops
impl Six502 {
    /// load accumulator with memory. data is transferred from memory into the accumulator.
    /// zero flag is set if the acc is zero, otherwise resets.
    /// negative flag is set if bit 7 of the accumulator is a 1, otherwise resets
    pub(super) fn lda(&mut self, mode: AddressingMode, cycles: &mut i32, mem: &Memory) {
        self.a = mode.load(self, cycles, mem);
        self.lda_set_status();
    }
}

// jumps and calls
impl Six502 {
    /// jsr stores PC-1 (the address of the last byte of the jsr) at SP and jumps to the absolute operand.
    /// SP stays where it is; the return address always lands at STACK_BASE.
    pub(super) fn jsr(&mut self, cycles: &mut i32, mem: &mut Memory) {
        let addr = self.fetch_word(cycles, mem);
        mem.write_word(self.sp, self.pc.wrapping_sub(1), cycles);
        self.pc = addr;
        self.tick(cycles);
    }
}

impl Six502 {
    /// The first byte of an instruction is the OP CODE. step fetches it, then lets the handler pick up
    /// whatever operand bytes the addressing mode calls for. The budget is debited as the bus is driven,
    /// so an instruction always runs to completion even if it overdraws.
    ///
    /// An unknown opcode costs only its fetch and leaves everything but PC untouched.
    pub fn step(&mut self, cycles: &mut i32, mem: &mut Memory) -> Result<Opcode, ExecError> {
        let start = *cycles;
        let addr = self.pc;
        let op = self.fetch_byte(cycles, mem);

        let result = match Opcode::decode(op) {
            Some(opcode) => {
                log::trace!(target: "six502", "{addr:#06x} {}", opcode.mnemonic());
                match opcode {
                    Opcode::LdaIm | Opcode::LdaZp | Opcode::LdaZpX => self.lda(opcode.mode(), cycles, mem),
                    Opcode::Jsr => self.jsr(cycles, mem),
                }
                Ok(opcode)
            }
            None => Err(ExecError::UnknownOpcode { opcode: op, addr }),
        };

        self.cy = self.cy.wrapping_add((i64::from(start) - i64::from(*cycles)) as u64);
        result
    }

    /// Runs instructions while the budget is positive. The budget is only checked between instructions.
    /// Unknown opcodes are reported and skipped. Returns the cycles consumed, which can exceed `cycles`
    /// by the overdraw of the last instruction.
    pub fn execute(&mut self, cycles: i32, mem: &mut Memory) -> i64 {
        let mut left = cycles;
        while left > 0 {
            if let Err(e) = self.step(&mut left, mem) {
                log::warn!(target: "six502", "{e}");
            }
        }
        i64::from(cycles) - i64::from(left)
    }
}
