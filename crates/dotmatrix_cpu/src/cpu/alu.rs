//! Arithmetic, logic, rotate/shift and bit operations.
//!
//! Every operation is a plain function over its operands and the current
//! flag set: it returns the primary result and leaves the resulting Z/N/H/C
//! state in `flags`. The executor loads F, calls into here and writes F back.

use super::Flags;

/// 8-bit ADD.
pub fn add8(flags: &mut Flags, a: u8, b: u8) -> u8 {
    let full = a as u16 + b as u16;
    let result = full as u8;

    *flags = Flags::zero_if(result);
    flags.set(Flags::H, (a & 0x0F) + (b & 0x0F) > 0x0F);
    flags.set(Flags::C, full > 0xFF);
    result
}

/// 8-bit ADC: ADD with the incoming carry folded into both the nibble and
/// byte sums.
pub fn adc8(flags: &mut Flags, a: u8, b: u8) -> u8 {
    let carry_in = flags.contains(Flags::C) as u8;
    let half = (a & 0x0F) + (b & 0x0F) + carry_in;
    let full = a as u16 + b as u16 + carry_in as u16;
    let result = full as u8;

    *flags = Flags::zero_if(result);
    flags.set(Flags::H, half > 0x0F);
    flags.set(Flags::C, full > 0xFF);
    result
}

/// 16-bit ADD with byte-granularity carries.
///
/// H and C both report an overflow of the *low byte* sum past 0xFF rather
/// than carries out of bits 11 and 15. Z reflects the 16-bit result.
/// See [`add16_hw`] for the hardware ADD HL,rr flag behaviour.
pub fn add16(flags: &mut Flags, a: u16, b: u16) -> u16 {
    let result = a.wrapping_add(b);
    let low_carry = (a & 0x00FF) + (b & 0x00FF) > 0x00FF;

    *flags = Flags::empty();
    flags.set(Flags::Z, result == 0);
    flags.set(Flags::H, low_carry);
    flags.set(Flags::C, low_carry);
    result
}

/// 16-bit ADD as the LR35902 performs `ADD HL,rr`.
///
/// Z is unaffected; N is cleared; H is the carry out of bit 11 and C the
/// carry out of bit 15.
pub fn add16_hw(flags: &mut Flags, a: u16, b: u16) -> u16 {
    flags.remove(Flags::N);
    flags.set(Flags::H, (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF);
    flags.set(Flags::C, a as u32 + b as u32 > 0xFFFF);
    a.wrapping_add(b)
}

/// Add a signed 8-bit displacement to a 16-bit base (`ADD SP,e` and
/// `LD HL,SP+e`).
///
/// Z and N are cleared; H and C are computed from the low nibble and low
/// byte of the unsigned addition.
pub fn add_sp_offset(flags: &mut Flags, base: u16, offset: i8) -> u16 {
    let offset = offset as i16 as u16;

    *flags = Flags::empty();
    flags.set(Flags::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
    flags.set(Flags::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
    base.wrapping_add(offset)
}

/// 8-bit SUB.
pub fn sub8(flags: &mut Flags, a: u8, b: u8) -> u8 {
    let result = a.wrapping_sub(b);

    *flags = Flags::zero_if(result) | Flags::N;
    flags.set(Flags::H, (a & 0x0F) < (b & 0x0F));
    flags.set(Flags::C, a < b);
    result
}

/// 8-bit SBC: SUB with the incoming carry as an extra borrow.
pub fn sbc8(flags: &mut Flags, a: u8, b: u8) -> u8 {
    let carry_in = flags.contains(Flags::C) as i16;
    let half = (a & 0x0F) as i16 - (b & 0x0F) as i16 - carry_in;
    let full = a as i16 - b as i16 - carry_in;
    let result = full as u8;

    *flags = Flags::zero_if(result) | Flags::N;
    flags.set(Flags::H, half < 0);
    flags.set(Flags::C, full < 0);
    result
}

/// Compare: the flags of `a - b`, with the difference discarded.
#[inline]
pub fn cp8(flags: &mut Flags, a: u8, b: u8) {
    sub8(flags, a, b);
}

#[inline]
pub fn and8(flags: &mut Flags, a: u8, b: u8) -> u8 {
    let result = a & b;
    *flags = Flags::zero_if(result) | Flags::H;
    result
}

#[inline]
pub fn or8(flags: &mut Flags, a: u8, b: u8) -> u8 {
    let result = a | b;
    *flags = Flags::zero_if(result);
    result
}

#[inline]
pub fn xor8(flags: &mut Flags, a: u8, b: u8) -> u8 {
    let result = a ^ b;
    *flags = Flags::zero_if(result);
    result
}

/// OR that writes only Z, leaving N, H and C as they were.
#[inline]
pub fn or8_zero_only(flags: &mut Flags, a: u8, b: u8) -> u8 {
    let result = a | b;
    flags.set(Flags::Z, result == 0);
    result
}

/// XOR that writes only Z, leaving N, H and C as they were.
#[inline]
pub fn xor8_zero_only(flags: &mut Flags, a: u8, b: u8) -> u8 {
    let result = a ^ b;
    flags.set(Flags::Z, result == 0);
    result
}

/// 8-bit increment used by INC r and INC (HL).
///
/// Z, N, H as for `add8(value, 1)`; C keeps its previous value.
pub fn inc8(flags: &mut Flags, value: u8) -> u8 {
    let carry = flags.contains(Flags::C);
    let result = add8(flags, value, 1);
    flags.set(Flags::C, carry);
    result
}

/// 8-bit decrement used by DEC r and DEC (HL).
///
/// Z, N, H as for `sub8(value, 1)`; C keeps its previous value.
pub fn dec8(flags: &mut Flags, value: u8) -> u8 {
    let carry = flags.contains(Flags::C);
    let result = sub8(flags, value, 1);
    flags.set(Flags::C, carry);
    result
}

#[inline]
fn shifted(flags: &mut Flags, result: u8, carry_out: bool) -> u8 {
    *flags = Flags::zero_if(result);
    flags.set(Flags::C, carry_out);
    result
}

/// RLC: bit 7 goes to both C and bit 0.
pub fn rotate_left(flags: &mut Flags, value: u8) -> u8 {
    shifted(flags, value.rotate_left(1), value & 0x80 != 0)
}

/// RL: rotate left through the carry flag.
pub fn rotate_left_through_carry(flags: &mut Flags, value: u8) -> u8 {
    let carry_in = flags.contains(Flags::C) as u8;
    shifted(flags, (value << 1) | carry_in, value & 0x80 != 0)
}

/// RRC: bit 0 goes to both C and bit 7.
pub fn rotate_right(flags: &mut Flags, value: u8) -> u8 {
    shifted(flags, value.rotate_right(1), value & 0x01 != 0)
}

/// RR: rotate right through the carry flag.
pub fn rotate_right_through_carry(flags: &mut Flags, value: u8) -> u8 {
    let carry_in = if flags.contains(Flags::C) { 0x80 } else { 0 };
    shifted(flags, (value >> 1) | carry_in, value & 0x01 != 0)
}

/// SLA
pub fn shift_left(flags: &mut Flags, value: u8) -> u8 {
    shifted(flags, value << 1, value & 0x80 != 0)
}

/// SRA: bit 7 is replicated.
pub fn shift_right_arithmetic(flags: &mut Flags, value: u8) -> u8 {
    shifted(flags, (value >> 1) | (value & 0x80), value & 0x01 != 0)
}

/// SRL
pub fn shift_right_logical(flags: &mut Flags, value: u8) -> u8 {
    shifted(flags, value >> 1, value & 0x01 != 0)
}

pub fn swap_nibbles(flags: &mut Flags, value: u8) -> u8 {
    shifted(flags, value.rotate_left(4), false)
}

/// Single-bit mask; only the low three bits of `index` are used.
#[inline]
fn bit_mask(index: u8) -> u8 {
    1 << (index & 0x07)
}

/// BIT b: Z is the complement of the tested bit, N=0, H=1, C preserved.
pub fn bit_test(flags: &mut Flags, value: u8, index: u8) {
    let set = value & bit_mask(index) != 0;
    flags.set(Flags::Z, !set);
    flags.remove(Flags::N);
    flags.insert(Flags::H);
}

#[inline]
pub fn set_bit(value: u8, index: u8) -> u8 {
    value | bit_mask(index)
}

#[inline]
pub fn reset_bit(value: u8, index: u8) -> u8 {
    value & !bit_mask(index)
}

/// Decimal adjust the accumulator after a BCD addition or subtraction.
///
/// Uses C, H and N from the previous operation; N is left unchanged, H is
/// cleared, C is set whenever the high-digit correction applies.
pub fn daa(flags: &mut Flags, a: u8) -> u8 {
    let mut adjust: u8 = if flags.contains(Flags::C) { 0x60 } else { 0x00 };
    if flags.contains(Flags::H) {
        adjust |= 0x06;
    }

    let result = if !flags.contains(Flags::N) {
        // After an addition.
        if a & 0x0F > 0x09 {
            adjust |= 0x06;
        }
        if a > 0x99 {
            adjust |= 0x60;
        }
        a.wrapping_add(adjust)
    } else {
        // After a subtraction.
        a.wrapping_sub(adjust)
    };

    flags.set(Flags::C, adjust >= 0x60);
    flags.remove(Flags::H);
    flags.set(Flags::Z, result == 0);
    result
}
