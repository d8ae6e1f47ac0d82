use crate::cpu::instruction::Cond;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_jp_cond(&mut self, cond: Cond, addr: u16) {
        if self.condition(cond) {
            self.regs.set_pc(addr);
        }
    }

    /// JR e: the displacement is relative to the byte after the operand.
    pub(super) fn exec_jr(&mut self, offset: i8) {
        let target = self.regs.pc().wrapping_add(offset as i16 as u16);
        self.regs.set_pc(target);
    }

    pub(super) fn exec_jr_cond(&mut self, cond: Cond, offset: i8) {
        if self.condition(cond) {
            self.exec_jr(offset);
        }
    }

    pub(super) fn exec_call_cond<B: Bus>(&mut self, bus: &mut B, cond: Cond, addr: u16) {
        if self.condition(cond) {
            self.exec_call(bus, addr);
        }
    }

    pub(super) fn exec_ret_cond<B: Bus>(&mut self, bus: &mut B, cond: Cond) {
        if self.condition(cond) {
            self.exec_ret(bus);
        }
    }
}
