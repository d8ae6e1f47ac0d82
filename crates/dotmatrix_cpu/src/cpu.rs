pub mod alu;
mod bus;
mod config;
pub mod decode;
mod error;
mod exec;
mod helpers;
mod init;
pub mod instruction;
mod regs;
mod step;

pub use bus::Bus;
pub use config::{
    Add16Flags, CpuConfig, InitialState, LogicFlags, RotateAFlags, RstMode, StopLength,
};
pub use decode::decode;
pub use error::CpuError;
pub use instruction::{AluOp, Cond, Indirect, Instruction, R16, R8, ShiftOp, StackPair};
pub use regs::{Flags, Registers};

/// Power request recorded by HALT and STOP.
///
/// The core only records the request; gating the clock and waking up on an
/// interrupt or joypad line belong to the clock/power component that owns
/// the run loop, which observes this through [`Cpu::power_state`] and
/// clears it with [`Cpu::wake`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerState {
    #[default]
    Running,
    Halted,
    Stopped,
}

/// Game Boy CPU core.
///
/// Owns the architectural state (registers, flags, IME) and advances it one
/// instruction per [`Cpu::step`] against a borrowed [`Bus`].
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    ime: bool,
    power: PowerState,
    config: CpuConfig,
}

impl Cpu {
    /// Interrupt master enable.
    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    /// Set IME from outside the instruction stream.
    ///
    /// Interrupt dispatch is not part of this core; the interrupt controller
    /// uses this to clear IME when it vectors to a handler.
    #[inline]
    pub fn set_ime(&mut self, enabled: bool) {
        self.ime = enabled;
    }

    #[inline]
    pub fn power_state(&self) -> PowerState {
        self.power
    }

    /// Leave HALT/STOP.
    pub fn wake(&mut self) {
        if self.power != PowerState::Running {
            log::debug!("CPU wake from {:?} at PC=0x{:04X}", self.power, self.regs.pc());
        }
        self.power = PowerState::Running;
    }

    #[inline]
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.set_flag(flag, value);
    }

    /// Run an ALU function against the current flags and store the flags it
    /// leaves behind.
    #[inline]
    fn alu<R>(&mut self, op: impl FnOnce(&mut Flags) -> R) -> R {
        let mut flags = self.regs.flags();
        let result = op(&mut flags);
        self.regs.set_flags(flags);
        result
    }
}
