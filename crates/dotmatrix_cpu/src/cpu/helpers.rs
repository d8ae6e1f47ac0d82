use super::instruction::{Cond, Indirect, R16, R8, StackPair};
use super::{Bus, Cpu, Flags};

impl Cpu {
    /// Read an 8-bit register, or memory at HL for `R8::HlInd`.
    #[inline]
    pub(super) fn read_r8<B: Bus>(&self, bus: &mut B, reg: R8) -> u8 {
        match reg {
            R8::B => self.regs.b(),
            R8::C => self.regs.c(),
            R8::D => self.regs.d(),
            R8::E => self.regs.e(),
            R8::H => self.regs.h(),
            R8::L => self.regs.l(),
            R8::HlInd => bus.read8(self.regs.hl()),
            R8::A => self.regs.a(),
        }
    }

    /// Write an 8-bit register, or memory at HL for `R8::HlInd`.
    #[inline]
    pub(super) fn write_r8<B: Bus>(&mut self, bus: &mut B, reg: R8, value: u8) {
        match reg {
            R8::B => self.regs.set_b(value),
            R8::C => self.regs.set_c(value),
            R8::D => self.regs.set_d(value),
            R8::E => self.regs.set_e(value),
            R8::H => self.regs.set_h(value),
            R8::L => self.regs.set_l(value),
            R8::HlInd => bus.write8(self.regs.hl(), value),
            R8::A => self.regs.set_a(value),
        }
    }

    #[inline]
    pub(super) fn read_r16(&self, reg: R16) -> u16 {
        match reg {
            R16::BC => self.regs.bc(),
            R16::DE => self.regs.de(),
            R16::HL => self.regs.hl(),
            R16::SP => self.regs.sp(),
        }
    }

    #[inline]
    pub(super) fn write_r16(&mut self, reg: R16, value: u16) {
        match reg {
            R16::BC => self.regs.set_bc(value),
            R16::DE => self.regs.set_de(value),
            R16::HL => self.regs.set_hl(value),
            R16::SP => self.regs.set_sp(value),
        }
    }

    #[inline]
    pub(super) fn read_stack_pair(&self, pair: StackPair) -> u16 {
        match pair {
            StackPair::BC => self.regs.bc(),
            StackPair::DE => self.regs.de(),
            StackPair::HL => self.regs.hl(),
            StackPair::AF => self.regs.af(),
        }
    }

    #[inline]
    pub(super) fn write_stack_pair(&mut self, pair: StackPair, value: u16) {
        match pair {
            StackPair::BC => self.regs.set_bc(value),
            StackPair::DE => self.regs.set_de(value),
            StackPair::HL => self.regs.set_hl(value),
            // Lower 4 bits of F are masked off by `set_af`.
            StackPair::AF => self.regs.set_af(value),
        }
    }

    /// Resolve an LD (rr),A / LD A,(rr) address, applying the HL post
    /// increment/decrement.
    #[inline]
    pub(super) fn indirect_addr(&mut self, ind: Indirect) -> u16 {
        match ind {
            Indirect::BC => self.regs.bc(),
            Indirect::DE => self.regs.de(),
            Indirect::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            Indirect::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    #[inline]
    pub(super) fn condition(&self, cond: Cond) -> bool {
        match cond {
            Cond::NZ => !self.flag(Flags::Z),
            Cond::Z => self.flag(Flags::Z),
            Cond::NC => !self.flag(Flags::C),
            Cond::C => self.flag(Flags::C),
        }
    }

    /// Push a 16-bit value: high byte at SP-1, low byte at SP-2, SP -= 2.
    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        let sp = self.regs.sp();
        bus.write8(sp.wrapping_sub(1), hi);
        bus.write8(sp.wrapping_sub(2), lo);
        self.regs.set_sp(sp.wrapping_sub(2));
    }

    /// Pop a 16-bit value: low byte from SP, high byte from SP+1, SP += 2.
    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let sp = self.regs.sp();
        let value = bus.read16(sp);
        self.regs.set_sp(sp.wrapping_add(2));
        value
    }
}
