use super::Six502;
use crate::bus::{ByteAccess, Memory};

// Every helper here is one bus access and debits one cycle per byte moved.
impl Six502 {
    /// Reads the instruction-stream byte at PC and bumps PC.
    pub fn fetch_byte(&mut self, cycles: &mut i32, mem: &Memory) -> u8 {
        let addr = self.pc;
        self.pc = self.pc.wrapping_add(1);
        self.tick(cycles);
        mem.load_u8(addr)
    }

    /// Reads a little-endian word from the instruction stream: low byte at PC, high byte at PC+1.
    pub fn fetch_word(&mut self, cycles: &mut i32, mem: &Memory) -> u16 {
        let lo = self.fetch_byte(cycles, mem);
        let hi = self.fetch_byte(cycles, mem);
        u16::from_le_bytes([lo, hi])
    }

    /// Reads operand data at `addr`. PC is left alone.
    pub fn read_byte(&mut self, cycles: &mut i32, addr: u16, mem: &Memory) -> u8 {
        self.tick(cycles);
        mem.load_u8(addr)
    }

    // internal operations with no bus traffic (index adds, pc adjust) cost a cycle too
    pub(super) fn tick(&mut self, cycles: &mut i32) {
        *cycles = cycles.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_byte_bumps_pc_and_debits_one() {
        let mut mem = Memory::new();
        mem[0x1234] = 0x5A;
        let mut cpu = Six502::new();
        cpu.pc = 0x1234;
        let mut cycles = 3;
        assert_eq!(cpu.fetch_byte(&mut cycles, &mem), 0x5A);
        assert_eq!(cpu.pc, 0x1235);
        assert_eq!(cycles, 2);
    }

    #[test]
    fn fetch_byte_wraps_pc() {
        let mut mem = Memory::new();
        mem[0xFFFF] = 0x11;
        let mut cpu = Six502::new();
        cpu.pc = 0xFFFF;
        let mut cycles = 1;
        assert_eq!(cpu.fetch_byte(&mut cycles, &mem), 0x11);
        assert_eq!(cpu.pc, 0x0000);
        assert_eq!(cycles, 0);
    }

    #[test]
    fn fetch_word_is_little_endian_and_debits_two() {
        let mut mem = Memory::new();
        mem.load(0x8000, &[0x34, 0x12]);
        let mut cpu = Six502::new();
        cpu.pc = 0x8000;
        let mut cycles = 5;
        assert_eq!(cpu.fetch_word(&mut cycles, &mem), 0x1234);
        assert_eq!(cpu.pc, 0x8002);
        assert_eq!(cycles, 3);
    }

    #[test]
    fn fetch_advances_pc_from_any_start() {
        let mem = Memory::new();
        let mut cpu = Six502::new();
        for start in (0..=u16::MAX).step_by(0x0101).chain([0xFFFE, 0xFFFF]) {
            let mut cycles = 0;
            cpu.pc = start;
            cpu.fetch_byte(&mut cycles, &mem);
            assert_eq!(cpu.pc, start.wrapping_add(1));
            cpu.pc = start;
            cpu.fetch_word(&mut cycles, &mem);
            assert_eq!(cpu.pc, start.wrapping_add(2));
            assert_eq!(cycles, -3);
        }
    }

    #[test]
    fn read_byte_leaves_pc_alone() {
        let mut mem = Memory::new();
        mem[0x0042] = 0x37;
        let mut cpu = Six502::new();
        let pc = cpu.pc;
        let mut cycles = 1;
        assert_eq!(cpu.read_byte(&mut cycles, 0x0042, &mem), 0x37);
        assert_eq!(cpu.pc, pc);
        assert_eq!(cycles, 0);
    }
}
