use crate::cpu::instruction::{Indirect, R8};
use crate::cpu::{alu, Bus, Cpu};

impl Cpu {
    pub(super) fn exec_ld_r_r<B: Bus>(&mut self, bus: &mut B, dst: R8, src: R8) {
        debug_assert!(!(dst == R8::HlInd && src == R8::HlInd), "0x76 is HALT");
        let value = self.read_r8(bus, src);
        self.write_r8(bus, dst, value);
    }

    pub(super) fn exec_store_a_indirect<B: Bus>(&mut self, bus: &mut B, ind: Indirect) {
        let addr = self.indirect_addr(ind);
        bus.write8(addr, self.regs.a());
    }

    pub(super) fn exec_load_a_indirect<B: Bus>(&mut self, bus: &mut B, ind: Indirect) {
        let addr = self.indirect_addr(ind);
        let value = bus.read8(addr);
        self.regs.set_a(value);
    }

    /// LD HL,SP+e: SP itself is left alone.
    pub(super) fn exec_ld_hl_sp_offset(&mut self, offset: i8) {
        let sp = self.regs.sp();
        let result = self.alu(|f| alu::add_sp_offset(f, sp, offset));
        self.regs.set_hl(result);
    }
}
