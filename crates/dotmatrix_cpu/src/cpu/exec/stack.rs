use crate::cpu::instruction::StackPair;
use crate::cpu::{Bus, Cpu, RstMode};

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, pair: StackPair) {
        let value = self.read_stack_pair(pair);
        self.push_u16(bus, value);
    }

    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, pair: StackPair) {
        let value = self.pop_u16(bus);
        self.write_stack_pair(pair, value);
    }

    /// CALL a16: PC already points at the next instruction, which is the
    /// return address.
    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, addr: u16) {
        let ret = self.regs.pc();
        self.push_u16(bus, ret);
        self.regs.set_pc(addr);
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.pop_u16(bus);
        self.regs.set_pc(addr);
    }

    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) {
        self.exec_ret(bus);
        if !self.ime {
            log::debug!("RETI: IME enabled, returning to 0x{:04X}", self.regs.pc());
        }
        self.ime = true;
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, vector: u8) {
        debug_assert!(vector & !0x38 == 0);
        match self.config.rst {
            RstMode::PushReturn => {
                let ret = self.regs.pc();
                self.push_u16(bus, ret);
            }
            RstMode::JumpOnly => {}
        }
        self.regs.set_pc(vector as u16);
    }
}
