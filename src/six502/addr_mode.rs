use super::Six502;
use crate::bus::Memory;

/// [reference](https://www.masswerk.at/6502/6502_instruction_set.html)
/// The addressing modes the decoder understands. The opcode selects one; the bytes following it
/// are interpreted by the mode to produce either the operand itself or an effective address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum AddressingMode {
    // OPC #$BB: operand is the byte BB, as is.
    Immediate,

    // OPC $LL: operand is a zero page address. only the first 256 bytes of memory are reachable
    ZP,

    // OPC $LL,X: operand is a zero page address; effective address is LL + X without carry
    ZP_X_Idxd,

    // OPC $LLHH: operand is address $HHLL (i.e. read little-endian)
    Absolute,
}

impl AddressingMode {
    /// effective_addr consumes the operand bytes and returns the address they select.
    /// Immediate selects no address; its operand is the next instruction byte.
    pub(super) fn effective_addr(&self, cpu: &mut Six502, cycles: &mut i32, mem: &Memory) -> Option<u16> {
        match self {
            AddressingMode::Immediate => None,
            AddressingMode::ZP => Some(cpu.fetch_byte(cycles, mem) as u16),
            // add the `u8`s before widening so the sum never carries into the high byte.
            // the index add is an internal cycle
            AddressingMode::ZP_X_Idxd => {
                let zp = cpu.fetch_byte(cycles, mem);
                let addr = zp.wrapping_add(cpu.x);
                cpu.tick(cycles);
                Some(addr as u16)
            }
            AddressingMode::Absolute => Some(cpu.fetch_word(cycles, mem)),
        }
    }

    /// load produces the operand byte for the mode.
    pub(super) fn load(&self, cpu: &mut Six502, cycles: &mut i32, mem: &Memory) -> u8 {
        match self.effective_addr(cpu, cycles, mem) {
            Some(addr) => cpu.read_byte(cycles, addr, mem),
            None => cpu.fetch_byte(cycles, mem),
        }
    }
}
