use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 always read as zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const Z = 0x80;
        const N = 0x40;
        const H = 0x20;
        const C = 0x10;
    }
}

impl Flags {
    /// `Flags::Z` when `value` is zero, otherwise empty.
    #[inline]
    pub fn zero_if(value: u8) -> Flags {
        if value == 0 {
            Flags::Z
        } else {
            Flags::empty()
        }
    }
}

/// Registers for the Game Boy CPU (LR35902).
///
/// Each pair is a single 16-bit store; the 8-bit registers are views that
/// shift and mask into their pair, so a half can never drift out of sync
/// with the pair it belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    af: u16,
    bc: u16,
    de: u16,
    hl: u16,
    sp: u16,
    pc: u16,
}

#[inline]
fn high(pair: u16) -> u8 {
    (pair >> 8) as u8
}

#[inline]
fn low(pair: u16) -> u8 {
    pair as u8
}

#[inline]
fn with_high(pair: u16, value: u8) -> u16 {
    (pair & 0x00FF) | (u16::from(value) << 8)
}

#[inline]
fn with_low(pair: u16, value: u8) -> u16 {
    (pair & 0xFF00) | u16::from(value)
}

impl Registers {
    // 16-bit pairs.

    #[inline]
    pub fn af(&self) -> u16 {
        self.af
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        // Lower 4 bits of F are always zero.
        self.af = value & 0xFFF0;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        self.bc
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        self.bc = value;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        self.de
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        self.de = value;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.hl
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        self.hl = value;
    }

    #[inline]
    pub fn sp(&self) -> u16 {
        self.sp
    }

    #[inline]
    pub fn set_sp(&mut self, value: u16) {
        self.sp = value;
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }

    #[inline]
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    // 8-bit views.

    #[inline]
    pub fn a(&self) -> u8 {
        high(self.af)
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.af = with_high(self.af, value);
    }

    #[inline]
    pub fn f(&self) -> u8 {
        low(self.af)
    }

    #[inline]
    pub fn set_f(&mut self, value: u8) {
        self.af = with_low(self.af, value & 0xF0);
    }

    #[inline]
    pub fn b(&self) -> u8 {
        high(self.bc)
    }

    #[inline]
    pub fn set_b(&mut self, value: u8) {
        self.bc = with_high(self.bc, value);
    }

    #[inline]
    pub fn c(&self) -> u8 {
        low(self.bc)
    }

    #[inline]
    pub fn set_c(&mut self, value: u8) {
        self.bc = with_low(self.bc, value);
    }

    #[inline]
    pub fn d(&self) -> u8 {
        high(self.de)
    }

    #[inline]
    pub fn set_d(&mut self, value: u8) {
        self.de = with_high(self.de, value);
    }

    #[inline]
    pub fn e(&self) -> u8 {
        low(self.de)
    }

    #[inline]
    pub fn set_e(&mut self, value: u8) {
        self.de = with_low(self.de, value);
    }

    #[inline]
    pub fn h(&self) -> u8 {
        high(self.hl)
    }

    #[inline]
    pub fn set_h(&mut self, value: u8) {
        self.hl = with_high(self.hl, value);
    }

    #[inline]
    pub fn l(&self) -> u8 {
        low(self.hl)
    }

    #[inline]
    pub fn set_l(&mut self, value: u8) {
        self.hl = with_low(self.hl, value);
    }

    // Flags.

    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.f())
    }

    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.set_f(flags.bits());
    }

    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.flags().contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        let mut flags = self.flags();
        flags.set(flag, value);
        self.set_flags(flags);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_and_halves_agree() {
        let mut regs = Registers::default();

        regs.set_bc(0x1234);
        assert_eq!(regs.b(), 0x12);
        assert_eq!(regs.c(), 0x34);

        regs.set_d(0xAB);
        regs.set_e(0xCD);
        assert_eq!(regs.de(), 0xABCD);

        regs.set_hl(0x5678);
        regs.set_l(0x00);
        assert_eq!(regs.hl(), 0x5600);
        assert_eq!(regs.h(), 0x56);
    }

    #[test]
    fn setting_one_half_preserves_the_other() {
        let mut regs = Registers::default();
        for pair in [0x0000u16, 0x00FF, 0xFF00, 0xA55A, 0xFFFF] {
            regs.set_bc(pair);
            regs.set_b(0x42);
            assert_eq!(regs.c(), pair as u8);
            regs.set_bc(pair);
            regs.set_c(0x42);
            assert_eq!(regs.b(), (pair >> 8) as u8);
        }
    }

    #[test]
    fn low_nibble_of_f_reads_as_zero() {
        let mut regs = Registers::default();
        regs.set_af(0x12FF);
        assert_eq!(regs.a(), 0x12);
        assert_eq!(regs.f(), 0xF0);

        regs.set_f(0x0F);
        assert_eq!(regs.f(), 0x00);
        assert_eq!(regs.a(), 0x12);
    }

    #[test]
    fn set_flag_leaves_other_flags_alone() {
        let mut regs = Registers::default();
        regs.set_flags(Flags::Z | Flags::C);
        regs.set_flag(Flags::H, true);
        assert_eq!(regs.flags(), Flags::Z | Flags::H | Flags::C);

        regs.set_flag(Flags::Z, false);
        assert_eq!(regs.flags(), Flags::H | Flags::C);
        assert!(regs.flag(Flags::C));
        assert!(!regs.flag(Flags::N));
        assert_eq!(regs.a(), 0x00);
    }
}
