use super::decode::decode;
use super::instruction::Instruction;
use super::{Bus, Cpu, CpuError};

impl Cpu {
    /// Fetch, decode and execute one instruction, returning what ran.
    ///
    /// PC is advanced past the whole instruction before it executes. An
    /// illegal opcode is reported without touching any CPU state, so PC is
    /// left on the offending byte.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<Instruction, CpuError> {
        let pc = self.regs.pc();
        let instr = match decode(bus, pc) {
            Ok(instr) => instr,
            Err(err) => {
                log::error!(
                    "GB CPU: {err} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X} IME={ime})",
                    sp = self.regs.sp(),
                    af = self.regs.af(),
                    bc = self.regs.bc(),
                    de = self.regs.de(),
                    hl = self.regs.hl(),
                    ime = self.ime,
                );
                return Err(err);
            }
        };

        log::trace!("{pc:04X}: {instr}");
        self.regs.set_pc(pc.wrapping_add(instr.len()));
        self.execute(bus, instr);
        Ok(instr)
    }
}
