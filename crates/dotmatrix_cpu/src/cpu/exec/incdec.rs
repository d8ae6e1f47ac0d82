use crate::cpu::instruction::R8;
use crate::cpu::{alu, Bus, Cpu};

impl Cpu {
    /// INC r / INC (HL). C is preserved.
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, target: R8) {
        let value = self.read_r8(bus, target);
        let result = self.alu(|f| alu::inc8(f, value));
        self.write_r8(bus, target, result);
    }

    /// DEC r / DEC (HL). C is preserved.
    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, target: R8) {
        let value = self.read_r8(bus, target);
        let result = self.alu(|f| alu::dec8(f, value));
        self.write_r8(bus, target, result);
    }
}
