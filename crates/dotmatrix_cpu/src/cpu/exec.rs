mod alu;
mod cb;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::instruction::Instruction;
use super::{Bus, Cpu};

impl Cpu {
    /// Apply a decoded instruction.
    ///
    /// PC has already been advanced past the instruction, so relative jumps
    /// and return addresses are computed from the following byte.
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B, instr: Instruction) {
        use Instruction::*;

        match instr {
            Nop => {}
            Stop => self.exec_stop(),
            Halt => self.exec_halt(),
            Di => self.exec_di(),
            Ei => self.exec_ei(),

            // 8-bit transfers.
            Ld { dst, src } => self.exec_ld_r_r(bus, dst, src),
            LdImm(dst, value) => self.write_r8(bus, dst, value),
            StoreA(ind) => self.exec_store_a_indirect(bus, ind),
            LoadA(ind) => self.exec_load_a_indirect(bus, ind),
            StoreAAbs(addr) => bus.write8(addr, self.regs.a()),
            LoadAAbs(addr) => {
                let value = bus.read8(addr);
                self.regs.set_a(value);
            }
            StoreAHigh(offset) => bus.write8(0xFF00 | offset as u16, self.regs.a()),
            LoadAHigh(offset) => {
                let value = bus.read8(0xFF00 | offset as u16);
                self.regs.set_a(value);
            }
            StoreAHighC => bus.write8(0xFF00 | self.regs.c() as u16, self.regs.a()),
            LoadAHighC => {
                let value = bus.read8(0xFF00 | self.regs.c() as u16);
                self.regs.set_a(value);
            }

            // 16-bit transfers and stack.
            LdImm16(dst, value) => self.write_r16(dst, value),
            StoreSp(addr) => bus.write16(addr, self.regs.sp()),
            LdSpHl => self.regs.set_sp(self.regs.hl()),
            LdHlSpOffset(offset) => self.exec_ld_hl_sp_offset(offset),
            Push(pair) => self.exec_push(bus, pair),
            Pop(pair) => self.exec_pop(bus, pair),

            // Arithmetic and logic.
            Alu(op, src) => {
                let value = self.read_r8(bus, src);
                self.exec_alu_op(op, value);
            }
            AluImm(op, value) => self.exec_alu_op(op, value),
            Inc(target) => self.exec_inc8(bus, target),
            Dec(target) => self.exec_dec8(bus, target),
            Daa => self.exec_daa(),
            Cpl => self.exec_cpl(),
            Scf => self.exec_scf(),
            Ccf => self.exec_ccf(),
            AddHl(src) => self.exec_add_hl(src),
            AddSp(offset) => self.exec_add_sp(offset),
            Inc16(target) => self.write_r16(target, self.read_r16(target).wrapping_add(1)),
            Dec16(target) => self.write_r16(target, self.read_r16(target).wrapping_sub(1)),
            Rlca => self.exec_rotate_a(super::alu::rotate_left),
            Rrca => self.exec_rotate_a(super::alu::rotate_right),
            Rla => self.exec_rotate_a(super::alu::rotate_left_through_carry),
            Rra => self.exec_rotate_a(super::alu::rotate_right_through_carry),

            // Control flow.
            Jp(addr) => self.regs.set_pc(addr),
            JpCond(cond, addr) => self.exec_jp_cond(cond, addr),
            JpHl => self.regs.set_pc(self.regs.hl()),
            Jr(offset) => self.exec_jr(offset),
            JrCond(cond, offset) => self.exec_jr_cond(cond, offset),
            Call(addr) => self.exec_call(bus, addr),
            CallCond(cond, addr) => self.exec_call_cond(bus, cond, addr),
            Ret => self.exec_ret(bus),
            RetCond(cond) => self.exec_ret_cond(bus, cond),
            Reti => self.exec_reti(bus),
            Rst(vector) => self.exec_rst(bus, vector),

            // 0xCB table.
            Shift(op, target) => self.exec_shift(bus, op, target),
            Bit(index, target) => self.exec_bit(bus, index, target),
            Res(index, target) => self.exec_res(bus, index, target),
            Set(index, target) => self.exec_set(bus, index, target),
        }
    }
}
