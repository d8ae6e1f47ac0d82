use crate::cpu::instruction::{ShiftOp, R8};
use crate::cpu::{alu, Bus, Cpu};

impl Cpu {
    /// Rotate/shift/swap group. Unlike RLCA and friends, Z follows the
    /// result.
    pub(super) fn exec_shift<B: Bus>(&mut self, bus: &mut B, op: ShiftOp, target: R8) {
        let value = self.read_r8(bus, target);
        let result = self.alu(|f| match op {
            ShiftOp::Rlc => alu::rotate_left(f, value),
            ShiftOp::Rrc => alu::rotate_right(f, value),
            ShiftOp::Rl => alu::rotate_left_through_carry(f, value),
            ShiftOp::Rr => alu::rotate_right_through_carry(f, value),
            ShiftOp::Sla => alu::shift_left(f, value),
            ShiftOp::Sra => alu::shift_right_arithmetic(f, value),
            ShiftOp::Swap => alu::swap_nibbles(f, value),
            ShiftOp::Srl => alu::shift_right_logical(f, value),
        });
        self.write_r8(bus, target, result);
    }

    /// BIT never writes back, even for (HL).
    pub(super) fn exec_bit<B: Bus>(&mut self, bus: &mut B, index: u8, target: R8) {
        let value = self.read_r8(bus, target);
        self.alu(|f| alu::bit_test(f, value, index));
    }

    pub(super) fn exec_res<B: Bus>(&mut self, bus: &mut B, index: u8, target: R8) {
        let value = self.read_r8(bus, target);
        self.write_r8(bus, target, alu::reset_bit(value, index));
    }

    pub(super) fn exec_set<B: Bus>(&mut self, bus: &mut B, index: u8, target: R8) {
        let value = self.read_r8(bus, target);
        self.write_r8(bus, target, alu::set_bit(value, index));
    }
}
