//! Property-based tests for CPU invariants.
//!
//! These use proptest to check the ALU, register file and step loop over
//! the full range of operand values.

use dotmatrix_cpu::cpu::{alu, decode};
use dotmatrix_cpu::{Bus, Cpu, CpuError, Flags, FlatMemory, Instruction, Registers};
use proptest::prelude::*;

const HOLES: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

fn flags_strategy() -> impl Strategy<Value = Flags> {
    (0u8..16).prop_map(|bits| Flags::from_bits_truncate(bits << 4))
}

/// Instructions that load PC from somewhere other than the fallthrough.
fn is_control_flow(instr: &Instruction) -> bool {
    matches!(
        instr,
        Instruction::Jp(_)
            | Instruction::JpCond(..)
            | Instruction::JpHl
            | Instruction::Jr(_)
            | Instruction::JrCond(..)
            | Instruction::Call(_)
            | Instruction::CallCond(..)
            | Instruction::Ret
            | Instruction::RetCond(_)
            | Instruction::Reti
            | Instruction::Rst(_)
    )
}

// ========== ALU Property Tests ==========

proptest! {
    /// Property: ADD matches the widened sum, with H and C from the nibble
    /// and byte carries.
    #[test]
    fn prop_add8_result_and_flags(a in any::<u8>(), b in any::<u8>(), flags in flags_strategy()) {
        let mut f = flags;
        let result = alu::add8(&mut f, a, b);
        let sum = a as u16 + b as u16;

        prop_assert_eq!(result, sum as u8);
        prop_assert_eq!(f.contains(Flags::Z), sum as u8 == 0);
        prop_assert!(!f.contains(Flags::N));
        prop_assert_eq!(f.contains(Flags::H), (a & 0x0F) + (b & 0x0F) > 0x0F);
        prop_assert_eq!(f.contains(Flags::C), sum > 0xFF);
    }

    /// Property: SUB wraps, sets N, and borrows exactly when the
    /// subtrahend is larger.
    #[test]
    fn prop_sub8_result_and_flags(a in any::<u8>(), b in any::<u8>(), flags in flags_strategy()) {
        let mut f = flags;
        let result = alu::sub8(&mut f, a, b);

        prop_assert_eq!(result, a.wrapping_sub(b));
        prop_assert_eq!(f.contains(Flags::Z), a == b);
        prop_assert!(f.contains(Flags::N));
        prop_assert_eq!(f.contains(Flags::H), (a & 0x0F) < (b & 0x0F));
        prop_assert_eq!(f.contains(Flags::C), a < b);
    }

    /// Property: CP leaves the same flags as SUB.
    #[test]
    fn prop_cp8_matches_sub8_flags(a in any::<u8>(), b in any::<u8>(), flags in flags_strategy()) {
        let mut sub_flags = flags;
        let mut cp_flags = flags;
        alu::sub8(&mut sub_flags, a, b);
        alu::cp8(&mut cp_flags, a, b);
        prop_assert_eq!(sub_flags, cp_flags);
    }

    /// Property: INC followed by DEC restores the value and never touches C.
    #[test]
    fn prop_inc_dec_roundtrip_preserves_carry(value in any::<u8>(), carry in any::<bool>()) {
        let mut f = Flags::empty();
        f.set(Flags::C, carry);

        let up = alu::inc8(&mut f, value);
        prop_assert_eq!(f.contains(Flags::C), carry);
        let down = alu::dec8(&mut f, up);
        prop_assert_eq!(f.contains(Flags::C), carry);
        prop_assert_eq!(down, value);
    }

    /// Property: SET then RES of the same bit restores a clear bit, and
    /// neither disturbs the other seven.
    #[test]
    fn prop_set_reset_bit_roundtrip(value in any::<u8>(), index in 0u8..8) {
        let mask = 1u8 << index;
        let set = alu::set_bit(value, index);
        let reset = alu::reset_bit(set, index);

        prop_assert_eq!(set & mask, mask);
        prop_assert_eq!(reset & mask, 0);
        prop_assert_eq!(set & !mask, value & !mask);
        prop_assert_eq!(reset, value & !mask);
        prop_assert_eq!(alu::set_bit(alu::reset_bit(value, index), index), value | mask);
    }

    /// Property: any bit index behaves like its low three bits.
    #[test]
    fn prop_bit_index_wraps_to_low_three_bits(value in any::<u8>(), index in any::<u8>(), flags in flags_strategy()) {
        prop_assert_eq!(alu::set_bit(value, index), alu::set_bit(value, index & 7));
        prop_assert_eq!(alu::reset_bit(value, index), alu::reset_bit(value, index & 7));

        let mut wide = flags;
        let mut narrow = flags;
        alu::bit_test(&mut wide, value, index);
        alu::bit_test(&mut narrow, value, index & 7);
        prop_assert_eq!(wide, narrow);
    }

    /// Property: the Z-only OR and XOR match the hardware result and keep
    /// N, H and C.
    #[test]
    fn prop_zero_only_logic_keeps_nhc(a in any::<u8>(), b in any::<u8>(), flags in flags_strategy()) {
        let keep = Flags::N | Flags::H | Flags::C;
        let mut hw = flags;

        let mut f = flags;
        prop_assert_eq!(alu::or8_zero_only(&mut f, a, b), alu::or8(&mut hw, a, b));
        prop_assert_eq!(f.contains(Flags::Z), a | b == 0);
        prop_assert_eq!(f & keep, flags & keep);

        let mut f = flags;
        prop_assert_eq!(alu::xor8_zero_only(&mut f, a, b), alu::xor8(&mut hw, a, b));
        prop_assert_eq!(f.contains(Flags::Z), a == b);
        prop_assert_eq!(f & keep, flags & keep);
    }

    /// Property: BIT reports the complement of the tested bit in Z and
    /// keeps C.
    #[test]
    fn prop_bit_test_flags(value in any::<u8>(), index in 0u8..8, flags in flags_strategy()) {
        let mut f = flags;
        alu::bit_test(&mut f, value, index);

        prop_assert_eq!(f.contains(Flags::Z), value & (1 << index) == 0);
        prop_assert!(!f.contains(Flags::N));
        prop_assert!(f.contains(Flags::H));
        prop_assert_eq!(f.contains(Flags::C), flags.contains(Flags::C));
    }

    /// Property: eight circular rotates in either direction are the identity.
    #[test]
    fn prop_eight_rotates_are_identity(value in any::<u8>()) {
        let mut f = Flags::empty();
        let mut left = value;
        let mut right = value;
        for _ in 0..8 {
            left = alu::rotate_left(&mut f, left);
            right = alu::rotate_right(&mut f, right);
        }
        prop_assert_eq!(left, value);
        prop_assert_eq!(right, value);
    }

    /// Property: nine rotates through carry restore both the value and C.
    #[test]
    fn prop_nine_rotates_through_carry_are_identity(value in any::<u8>(), carry in any::<bool>()) {
        let mut f = Flags::empty();
        f.set(Flags::C, carry);
        let mut v = value;
        for _ in 0..9 {
            v = alu::rotate_left_through_carry(&mut f, v);
        }
        prop_assert_eq!(v, value);
        prop_assert_eq!(f.contains(Flags::C), carry);
    }

    /// Property: SWAP twice is the identity.
    #[test]
    fn prop_swap_twice_is_identity(value in any::<u8>()) {
        let mut f = Flags::empty();
        let once = alu::swap_nibbles(&mut f, value);
        prop_assert_eq!(alu::swap_nibbles(&mut f, once), value);
    }
}

// ========== Register File Property Tests ==========

proptest! {
    /// Property: writing one half of a pair leaves the other half intact.
    #[test]
    fn prop_setting_half_preserves_other_half(pair in any::<u16>(), value in any::<u8>()) {
        let mut regs = Registers::default();

        regs.set_bc(pair);
        regs.set_b(value);
        prop_assert_eq!(regs.c(), pair as u8);
        prop_assert_eq!(regs.bc(), (value as u16) << 8 | (pair & 0x00FF));

        regs.set_hl(pair);
        regs.set_l(value);
        prop_assert_eq!(regs.h(), (pair >> 8) as u8);
        prop_assert_eq!(regs.hl(), (pair & 0xFF00) | value as u16);

        regs.set_af(pair);
        regs.set_a(value);
        prop_assert_eq!(regs.f(), pair as u8 & 0xF0);
    }

    /// Property: the low nibble of F reads as zero whatever is written.
    #[test]
    fn prop_f_low_nibble_always_zero(af in any::<u16>(), f in any::<u8>()) {
        let mut regs = Registers::default();
        regs.set_af(af);
        prop_assert_eq!(regs.af() & 0x000F, 0);
        regs.set_f(f);
        prop_assert_eq!(regs.f() & 0x0F, 0);
    }
}

// ========== Step Property Tests ==========

proptest! {
    /// Property: decoding never fails for anything but the opcode holes.
    #[test]
    fn prop_decode_only_rejects_holes(bytes in any::<[u8; 3]>(), pc in any::<u16>()) {
        let mut memory = FlatMemory::new();
        memory.load(pc, &bytes);

        match decode(&mut memory, pc) {
            Ok(instr) => prop_assert!(!HOLES.contains(&bytes[0]), "{instr} decoded from a hole"),
            Err(CpuError::IllegalOpcode { opcode, addr }) => {
                prop_assert!(HOLES.contains(&opcode));
                prop_assert_eq!(opcode, bytes[0]);
                prop_assert_eq!(addr, pc);
            }
        }
    }

    /// Property: outside control flow, PC advances by exactly the
    /// instruction length.
    #[test]
    fn prop_pc_advances_by_instruction_length(bytes in any::<[u8; 3]>(), hl in 0xC000u16..0xDFFF) {
        let mut memory = FlatMemory::new();
        memory.load(0x0100, &bytes);
        let mut cpu = Cpu::new();
        cpu.regs.set_pc(0x0100);
        cpu.regs.set_hl(hl);

        if let Ok(instr) = cpu.step(&mut memory) {
            if !is_control_flow(&instr) {
                prop_assert_eq!(cpu.regs.pc(), 0x0100 + instr.len(), "{}", instr);
            }
        }
    }

    /// Property: an illegal opcode leaves registers, IME and memory alone.
    #[test]
    fn prop_illegal_opcode_changes_nothing(
        opcode in prop::sample::select(HOLES.to_vec()),
        af in any::<u16>(),
        bc in any::<u16>(),
        hl in any::<u16>(),
        sp in any::<u16>(),
        pc in any::<u16>(),
        ime in any::<bool>(),
    ) {
        let mut memory = FlatMemory::new();
        memory.write8(pc, opcode);
        let mut cpu = Cpu::new();
        cpu.regs.set_af(af);
        cpu.regs.set_bc(bc);
        cpu.regs.set_hl(hl);
        cpu.regs.set_sp(sp);
        cpu.regs.set_pc(pc);
        cpu.set_ime(ime);
        let regs = cpu.regs;
        let before = memory.clone();

        let result = cpu.step(&mut memory);

        prop_assert_eq!(result, Err(CpuError::IllegalOpcode { opcode, addr: pc }));
        prop_assert_eq!(cpu.regs, regs);
        prop_assert_eq!(cpu.ime(), ime);
        prop_assert!(memory.as_slice() == before.as_slice());
    }
}
