use super::instruction::{AluOp, Cond, Indirect, Instruction, R16, R8, ShiftOp, StackPair};
use super::{Bus, CpuError};

/// Escape byte selecting the bit-operation table.
pub const CB_PREFIX: u8 = 0xCB;

/// Decode the instruction starting at `pc`.
///
/// Only reads from the bus; CPU state is untouched. Operand bytes are read
/// only once the opcode is known to be legal, and addresses wrap at the
/// top of the address space.
pub fn decode<B: Bus>(bus: &mut B, pc: u16) -> Result<Instruction, CpuError> {
    let opcode = bus.read8(pc);
    if opcode == CB_PREFIX {
        let cb = bus.read8(pc.wrapping_add(1));
        return Ok(decode_cb(cb));
    }

    let mut operands = Operands { bus, pc };
    decode_primary(opcode, &mut operands).ok_or(CpuError::IllegalOpcode { opcode, addr: pc })
}

/// Lazy access to the immediate bytes that follow an opcode.
struct Operands<'a, B: Bus> {
    bus: &'a mut B,
    pc: u16,
}

impl<B: Bus> Operands<'_, B> {
    #[inline]
    fn d8(&mut self) -> u8 {
        self.bus.read8(self.pc.wrapping_add(1))
    }

    #[inline]
    fn r8(&mut self) -> i8 {
        self.d8() as i8
    }

    #[inline]
    fn d16(&mut self) -> u16 {
        self.bus.read16(self.pc.wrapping_add(1))
    }
}

/// Decode an unprefixed opcode, or `None` for the opcode holes.
fn decode_primary<B: Bus>(opcode: u8, ops: &mut Operands<'_, B>) -> Option<Instruction> {
    use Instruction::*;

    // Standard x/y/z/p/q field split of the opcode byte.
    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;
    let p = (opcode >> 4) & 0x03;

    let instr = match opcode {
        0x00 => Nop,
        0x10 => Stop,
        0x76 => Halt,

        // 16-bit immediate loads.
        0x01 | 0x11 | 0x21 | 0x31 => LdImm16(R16::from_index(p), ops.d16()),

        // LD (BC/DE/HL±), A
        0x02 | 0x12 | 0x22 | 0x32 => StoreA(Indirect::from_index(p)),

        // LD A, (BC/DE/HL±)
        0x0A | 0x1A | 0x2A | 0x3A => LoadA(Indirect::from_index(p)),

        0x03 | 0x13 | 0x23 | 0x33 => Inc16(R16::from_index(p)),
        0x0B | 0x1B | 0x2B | 0x3B => Dec16(R16::from_index(p)),
        0x09 | 0x19 | 0x29 | 0x39 => AddHl(R16::from_index(p)),

        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => Inc(R8::from_index(y)),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => Dec(R8::from_index(y)),

        // LD r, d8 (and LD (HL), d8)
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
            LdImm(R8::from_index(y), ops.d8())
        }

        0x07 => Rlca,
        0x0F => Rrca,
        0x17 => Rla,
        0x1F => Rra,

        0x08 => StoreSp(ops.d16()),

        0x18 => Jr(ops.r8()),
        0x20 | 0x28 | 0x30 | 0x38 => JrCond(Cond::from_index(y), ops.r8()),

        0x27 => Daa,
        0x2F => Cpl,
        0x37 => Scf,
        0x3F => Ccf,

        // LD r1, r2 (0x76 is HALT, handled above).
        0x40..=0x7F => Ld {
            dst: R8::from_index(y),
            src: R8::from_index(z),
        },

        0x80..=0xBF => Alu(AluOp::from_index(y), R8::from_index(z)),

        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
            AluImm(AluOp::from_index(y), ops.d8())
        }

        0xC0 | 0xC8 | 0xD0 | 0xD8 => RetCond(Cond::from_index(y)),
        0xC9 => Ret,
        0xD9 => Reti,

        0xC1 | 0xD1 | 0xE1 | 0xF1 => Pop(StackPair::from_index(p)),
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Push(StackPair::from_index(p)),

        0xC2 | 0xCA | 0xD2 | 0xDA => JpCond(Cond::from_index(y), ops.d16()),
        0xC3 => Jp(ops.d16()),
        0xE9 => JpHl,

        0xC4 | 0xCC | 0xD4 | 0xDC => CallCond(Cond::from_index(y), ops.d16()),
        0xCD => Call(ops.d16()),

        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Rst(opcode & 0x38),

        0xE0 => StoreAHigh(ops.d8()),
        0xF0 => LoadAHigh(ops.d8()),
        0xE2 => StoreAHighC,
        0xF2 => LoadAHighC,
        0xEA => StoreAAbs(ops.d16()),
        0xFA => LoadAAbs(ops.d16()),

        0xE8 => AddSp(ops.r8()),
        0xF8 => LdHlSpOffset(ops.r8()),
        0xF9 => LdSpHl,

        0xF3 => Di,
        0xFB => Ei,

        // Opcode holes: D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD.
        // (0xCB never reaches here.)
        0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD | 0xCB => {
            return None
        }
    };

    Some(instr)
}

/// Decode the byte following the 0xCB prefix. The table is total.
pub fn decode_cb(cb: u8) -> Instruction {
    let x = cb >> 6;
    let y = (cb >> 3) & 0x07;
    let target = R8::from_index(cb & 0x07);

    match x {
        0 => Instruction::Shift(ShiftOp::from_index(y), target),
        1 => Instruction::Bit(y, target),
        2 => Instruction::Res(y, target),
        _ => Instruction::Set(y, target),
    }
}
