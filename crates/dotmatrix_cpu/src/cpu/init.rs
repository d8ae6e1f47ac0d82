use super::{Cpu, CpuConfig, InitialState, PowerState, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: true,
            power: PowerState::Running,
            config,
        };
        cpu.apply_initial_state();
        cpu
    }

    /// Reset the CPU to the initial state selected by its configuration.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.power = PowerState::Running;
        self.apply_initial_state();
    }

    fn apply_initial_state(&mut self) {
        match self.config.initial_state {
            InitialState::PowerOn => {
                self.regs.set_af(0x0000);
                self.regs.set_bc(0x0000);
                self.regs.set_de(0x0000);
                self.regs.set_hl(0x0000);
                self.regs.set_sp(0xFFFE);
                self.regs.set_pc(0x0000);
                self.ime = true;
            }
            InitialState::PostBoot => {
                // DMG values once the boot ROM hands control to the
                // cartridge (Pan Docs, "Power Up Sequence").
                self.regs.set_af(0x01B0);
                self.regs.set_bc(0x0013);
                self.regs.set_de(0x00D8);
                self.regs.set_hl(0x014D);
                self.regs.set_sp(0xFFFE);
                self.regs.set_pc(0x0100);
                // The game enables interrupts itself via EI/RETI.
                self.ime = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::{Cpu, CpuConfig, Flags, InitialState, PowerState};

    #[test]
    fn power_on_state() {
        let cpu = Cpu::new();
        assert_eq!(cpu.regs.af(), 0x0000);
        assert_eq!(cpu.regs.bc(), 0x0000);
        assert_eq!(cpu.regs.de(), 0x0000);
        assert_eq!(cpu.regs.hl(), 0x0000);
        assert_eq!(cpu.regs.sp(), 0xFFFE);
        assert_eq!(cpu.regs.pc(), 0x0000);
        assert!(cpu.ime());
        assert_eq!(cpu.power_state(), PowerState::Running);
    }

    #[test]
    fn post_boot_state() {
        let cpu = Cpu::with_config(CpuConfig {
            initial_state: InitialState::PostBoot,
            ..CpuConfig::default()
        });
        assert_eq!(cpu.regs.a(), 0x01);
        assert_eq!(cpu.regs.flags(), Flags::Z | Flags::H | Flags::C);
        assert_eq!(cpu.regs.bc(), 0x0013);
        assert_eq!(cpu.regs.de(), 0x00D8);
        assert_eq!(cpu.regs.hl(), 0x014D);
        assert_eq!(cpu.regs.sp(), 0xFFFE);
        assert_eq!(cpu.regs.pc(), 0x0100);
        assert!(!cpu.ime());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut cpu = Cpu::new();
        cpu.regs.set_hl(0xBEEF);
        cpu.regs.set_pc(0x1234);
        cpu.set_ime(false);
        cpu.reset();
        assert_eq!(cpu.regs.hl(), 0x0000);
        assert_eq!(cpu.regs.pc(), 0x0000);
        assert!(cpu.ime());
    }
}
