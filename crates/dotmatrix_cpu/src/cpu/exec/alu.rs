use crate::cpu::instruction::{AluOp, R16};
use crate::cpu::{alu, Add16Flags, Cpu, Flags, LogicFlags, RotateAFlags};

impl Cpu {
    /// Accumulator ALU group: `op A, value`. CP leaves A untouched.
    pub(super) fn exec_alu_op(&mut self, op: AluOp, value: u8) {
        let a = self.regs.a();
        let result = match op {
            AluOp::Add => self.alu(|f| alu::add8(f, a, value)),
            AluOp::Adc => self.alu(|f| alu::adc8(f, a, value)),
            AluOp::Sub => self.alu(|f| alu::sub8(f, a, value)),
            AluOp::Sbc => self.alu(|f| alu::sbc8(f, a, value)),
            AluOp::And => self.alu(|f| alu::and8(f, a, value)),
            AluOp::Xor => match self.config.logic {
                LogicFlags::ZeroOnly => self.alu(|f| alu::xor8_zero_only(f, a, value)),
                LogicFlags::Hardware => self.alu(|f| alu::xor8(f, a, value)),
            },
            AluOp::Or => match self.config.logic {
                LogicFlags::ZeroOnly => self.alu(|f| alu::or8_zero_only(f, a, value)),
                LogicFlags::Hardware => self.alu(|f| alu::or8(f, a, value)),
            },
            AluOp::Cp => {
                self.alu(|f| alu::cp8(f, a, value));
                return;
            }
        };
        self.regs.set_a(result);
    }

    pub(super) fn exec_add_hl(&mut self, src: R16) {
        let hl = self.regs.hl();
        let value = self.read_r16(src);
        let result = match self.config.add16 {
            Add16Flags::LowByte => self.alu(|f| alu::add16(f, hl, value)),
            Add16Flags::Hardware => self.alu(|f| alu::add16_hw(f, hl, value)),
        };
        self.regs.set_hl(result);
    }

    pub(super) fn exec_add_sp(&mut self, offset: i8) {
        let sp = self.regs.sp();
        let result = self.alu(|f| alu::add_sp_offset(f, sp, offset));
        self.regs.set_sp(result);
    }

    pub(super) fn exec_daa(&mut self) {
        let a = self.regs.a();
        let result = self.alu(|f| alu::daa(f, a));
        self.regs.set_a(result);
    }

    /// CPL: A = !A, N and H set.
    pub(super) fn exec_cpl(&mut self) {
        self.regs.set_a(!self.regs.a());
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, true);
    }

    pub(super) fn exec_scf(&mut self) {
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::C, true);
    }

    pub(super) fn exec_ccf(&mut self) {
        let carry = self.flag(Flags::C);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::C, !carry);
    }

    /// RLCA/RRCA/RLA/RRA: `rotate` on A, with Z per `RotateAFlags`.
    pub(super) fn exec_rotate_a(&mut self, rotate: fn(&mut Flags, u8) -> u8) {
        let a = self.regs.a();
        let result = self.alu(|f| rotate(f, a));
        self.regs.set_a(result);
        if self.config.rotate_a == RotateAFlags::ZeroCleared {
            self.set_flag(Flags::Z, false);
        }
    }
}
