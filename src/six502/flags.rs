//! |   |   |   |   |   |   |   |   |
//! | N | V |   | B | D | I | Z | C |     PROCESSOR STATUS REGISTER
//! |   |   |   |   |   |   |   |   |
//!
//! Bit 5 is the expansion bit. It is never defined here, so every `Flags` value holds
//! exactly the seven status bits, each either set or clear.
//! http://users.telenet.be/kim1-6502/6502/proman.html#3

use super::Six502;

bitflags::bitflags! {
    pub struct Flags: u8 {
        /// set by additions that carry out of bit 7, used as the ninth bit by shifts and rotates
        const CARRY    = 0b0000_0001;
        /// set when the 8 bits of a result are all 0
        const ZERO     = 0b0000_0010;
        /// masks the IRQ line
        const IRQ      = 0b0000_0100;
        /// BCD arithmetic. held but never acted on
        const DECIMAL  = 0b0000_1000;
        const BREAK    = 0b0001_0000;
        const OVERFLOW = 0b0100_0000;
        /// mirrors bit 7 of the result of every data movement
        const NEGATIVE = 0b1000_0000;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::empty()
    }
}

impl Flags {
    // N V - B D I Z C, most significant first
    const ORDER: [(Flags, char); 8] = [
        (Flags::NEGATIVE, 'N'),
        (Flags::OVERFLOW, 'V'),
        (Flags::empty(), '-'),
        (Flags::BREAK, 'B'),
        (Flags::DECIMAL, 'D'),
        (Flags::IRQ, 'I'),
        (Flags::ZERO, 'Z'),
        (Flags::CARRY, 'C'),
    ];
}

impl std::fmt::Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (flag, name) in Flags::ORDER {
            let c = if !flag.is_empty() && self.contains(flag) {
                name
            } else {
                '-'
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl Six502 {
    pub fn flag(&self, flag: Flags) -> bool {
        self.p.contains(flag)
    }

    // assert_flag sets the flag if the condition holds and clears it otherwise,
    // so every op that affects a flag leaves it up to date
    pub(super) fn assert_flag(&mut self, flag: Flags, cond: bool) {
        self.p.set(flag, cond);
    }

    /// The zero flag is set if the result is 0, otherwise the zero flag is reset
    pub(super) fn update_z(&mut self, v: u8) {
        self.assert_flag(Flags::ZERO, v == 0);
    }

    /// The negative flag follows bit 7 of the result
    pub(super) fn update_n(&mut self, v: u8) {
        self.assert_flag(Flags::NEGATIVE, v & 0x80 != 0);
    }

    /// status update after any LDA. only Z and N are touched
    pub(super) fn lda_set_status(&mut self) {
        self.update_z(self.a);
        self.update_n(self.a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lda_status_tracks_every_accumulator_value() {
        let mut cpu = Six502::new();
        for v in 0..=u8::MAX {
            cpu.a = v;
            cpu.lda_set_status();
            assert_eq!(cpu.flag(Flags::ZERO), v == 0, "Z for {v:#04x}");
            assert_eq!(cpu.flag(Flags::NEGATIVE), v & 0x80 != 0, "N for {v:#04x}");
        }
    }

    #[test]
    fn lda_status_leaves_other_flags_alone() {
        let mut cpu = Six502::new();
        let others = Flags::CARRY | Flags::IRQ | Flags::DECIMAL | Flags::BREAK | Flags::OVERFLOW;
        cpu.p = others | Flags::ZERO;
        cpu.a = 0x84;
        cpu.lda_set_status();
        assert_eq!(cpu.p, others | Flags::NEGATIVE);
    }

    #[test]
    fn expansion_bit_is_never_stored() {
        assert_eq!(Flags::from_bits_truncate(0xFF).bits(), 0b1101_1111);
        assert_eq!(Flags::all().bits(), 0b1101_1111);
    }

    #[test]
    fn display_follows_register_layout() {
        assert_eq!(Flags::empty().to_string(), "--------");
        assert_eq!((Flags::NEGATIVE | Flags::ZERO).to_string(), "N-----Z-");
        assert_eq!(Flags::all().to_string(), "NV-BDIZC");
    }
}
