use crate::cpu::{Cpu, PowerState, StopLength};

impl Cpu {
    pub(super) fn exec_halt(&mut self) {
        log::debug!("HALT at PC=0x{:04X}", self.regs.pc().wrapping_sub(1));
        self.power = PowerState::Halted;
    }

    /// STOP. With `StopLength::WithPadding` the byte after the opcode is
    /// skipped as well.
    pub(super) fn exec_stop(&mut self) {
        let pc = self.regs.pc();
        log::debug!("STOP at PC=0x{:04X}", pc.wrapping_sub(1));
        if self.config.stop == StopLength::WithPadding {
            self.regs.set_pc(pc.wrapping_add(1));
        }
        self.power = PowerState::Stopped;
    }

    pub(super) fn exec_di(&mut self) {
        if self.ime {
            log::debug!("DI at PC=0x{:04X}", self.regs.pc().wrapping_sub(1));
        }
        self.ime = false;
    }

    /// EI takes effect as soon as the instruction completes.
    pub(super) fn exec_ei(&mut self) {
        if !self.ime {
            log::debug!("EI at PC=0x{:04X}", self.regs.pc().wrapping_sub(1));
        }
        self.ime = true;
    }
}
