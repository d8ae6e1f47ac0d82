//! Decoded instruction representation.
//!
//! The decoder turns the bytes at PC into an [`Instruction`]; the executor
//! matches on it exhaustively, so every opcode the decoder accepts has a
//! handler the compiler checks for.

use std::fmt;

/// 8-bit operand in the standard opcode encoding order
/// (0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum R8 {
    B,
    C,
    D,
    E,
    H,
    L,
    /// Memory at the address in HL.
    HlInd,
    A,
}

impl R8 {
    pub fn from_index(index: u8) -> R8 {
        match index & 0x07 {
            0 => R8::B,
            1 => R8::C,
            2 => R8::D,
            3 => R8::E,
            4 => R8::H,
            5 => R8::L,
            6 => R8::HlInd,
            _ => R8::A,
        }
    }
}

/// 16-bit register pair operand of LD rr,nn / INC rr / DEC rr / ADD HL,rr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum R16 {
    BC,
    DE,
    HL,
    SP,
}

impl R16 {
    pub fn from_index(index: u8) -> R16 {
        match index & 0x03 {
            0 => R16::BC,
            1 => R16::DE,
            2 => R16::HL,
            _ => R16::SP,
        }
    }
}

/// Register pair operand of PUSH/POP (AF takes SP's slot).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackPair {
    BC,
    DE,
    HL,
    AF,
}

impl StackPair {
    pub fn from_index(index: u8) -> StackPair {
        match index & 0x03 {
            0 => StackPair::BC,
            1 => StackPair::DE,
            2 => StackPair::HL,
            _ => StackPair::AF,
        }
    }
}

/// Address operand of LD (rr),A / LD A,(rr).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indirect {
    BC,
    DE,
    /// (HL), then HL += 1.
    HlInc,
    /// (HL), then HL -= 1.
    HlDec,
}

impl Indirect {
    pub fn from_index(index: u8) -> Indirect {
        match index & 0x03 {
            0 => Indirect::BC,
            1 => Indirect::DE,
            2 => Indirect::HlInc,
            _ => Indirect::HlDec,
        }
    }
}

/// Branch condition: exactly one flag test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cond {
    NZ,
    Z,
    NC,
    C,
}

impl Cond {
    pub fn from_index(index: u8) -> Cond {
        match index & 0x03 {
            0 => Cond::NZ,
            1 => Cond::Z,
            2 => Cond::NC,
            _ => Cond::C,
        }
    }
}

/// Accumulator ALU operation (opcodes 0x80–0xBF and the d8 forms).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub fn from_index(index: u8) -> AluOp {
        match index & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// CB-prefixed rotate/shift operation (CB 00–3F).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl ShiftOp {
    pub fn from_index(index: u8) -> ShiftOp {
        match index & 0x07 {
            0 => ShiftOp::Rlc,
            1 => ShiftOp::Rrc,
            2 => ShiftOp::Rl,
            3 => ShiftOp::Rr,
            4 => ShiftOp::Sla,
            5 => ShiftOp::Sra,
            6 => ShiftOp::Swap,
            _ => ShiftOp::Srl,
        }
    }
}

/// A fully decoded instruction, immediates included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    Nop,
    /// STOP. Encoded as the single opcode byte; the hardware padding byte
    /// is handled by the executor.
    Stop,
    Halt,

    // 8-bit loads.
    /// LD r,r' including the (HL) forms.
    Ld { dst: R8, src: R8 },
    /// LD r,d8 including LD (HL),d8.
    LdImm(R8, u8),
    /// LD (BC/DE/HL+/HL-),A
    StoreA(Indirect),
    /// LD A,(BC/DE/HL+/HL-)
    LoadA(Indirect),
    /// LD (a16),A
    StoreAAbs(u16),
    /// LD A,(a16)
    LoadAAbs(u16),
    /// LDH (a8),A
    StoreAHigh(u8),
    /// LDH A,(a8)
    LoadAHigh(u8),
    /// LD (C),A
    StoreAHighC,
    /// LD A,(C)
    LoadAHighC,

    // 16-bit loads.
    LdImm16(R16, u16),
    /// LD (a16),SP
    StoreSp(u16),
    /// LD SP,HL
    LdSpHl,
    /// LD HL,SP+r8
    LdHlSpOffset(i8),
    Push(StackPair),
    Pop(StackPair),

    // 8-bit arithmetic/logic.
    Alu(AluOp, R8),
    AluImm(AluOp, u8),
    Inc(R8),
    Dec(R8),
    Daa,
    Cpl,
    Scf,
    Ccf,

    // 16-bit arithmetic.
    AddHl(R16),
    /// ADD SP,r8
    AddSp(i8),
    Inc16(R16),
    Dec16(R16),

    // Accumulator rotates.
    Rlca,
    Rrca,
    Rla,
    Rra,

    // Control flow.
    Jp(u16),
    JpCond(Cond, u16),
    /// JP (HL)
    JpHl,
    Jr(i8),
    JrCond(Cond, i8),
    Call(u16),
    CallCond(Cond, u16),
    Ret,
    RetCond(Cond),
    Reti,
    /// RST to one of the eight zero-page vectors 00, 08, …, 38.
    Rst(u8),

    // Interrupt master enable.
    Di,
    Ei,

    // CB-prefixed.
    Shift(ShiftOp, R8),
    Bit(u8, R8),
    Res(u8, R8),
    Set(u8, R8),
}

#[allow(clippy::len_without_is_empty)]
impl Instruction {
    /// Encoded size in bytes, prefix and immediates included.
    pub fn len(&self) -> u16 {
        use Instruction::*;
        match self {
            Shift(..) | Bit(..) | Res(..) | Set(..) => 2,

            LdImm(..) | StoreAHigh(_) | LoadAHigh(_) | LdHlSpOffset(_)
            | AluImm(..) | AddSp(_) | Jr(_) | JrCond(..) => 2,

            StoreAAbs(_) | LoadAAbs(_) | LdImm16(..) | StoreSp(_) | Jp(_) | JpCond(..)
            | Call(_) | CallCond(..) => 3,

            Nop | Stop | Halt | Ld { .. } | StoreA(_) | LoadA(_) | StoreAHighC | LoadAHighC
            | LdSpHl | Push(_) | Pop(_) | Alu(..) | Inc(_) | Dec(_) | Daa | Cpl | Scf
            | Ccf | AddHl(_) | Inc16(_) | Dec16(_) | Rlca | Rrca | Rla | Rra | JpHl | Ret
            | RetCond(_) | Reti | Rst(_) | Di | Ei => 1,
        }
    }

    /// Whether this instruction comes from the CB-prefixed table.
    pub fn is_prefixed(&self) -> bool {
        matches!(
            self,
            Instruction::Shift(..) | Instruction::Bit(..) | Instruction::Res(..) | Instruction::Set(..)
        )
    }
}

impl fmt::Display for R8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            R8::B => "B",
            R8::C => "C",
            R8::D => "D",
            R8::E => "E",
            R8::H => "H",
            R8::L => "L",
            R8::HlInd => "(HL)",
            R8::A => "A",
        };
        f.write_str(name)
    }
}

impl fmt::Display for R16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            R16::BC => "BC",
            R16::DE => "DE",
            R16::HL => "HL",
            R16::SP => "SP",
        };
        f.write_str(name)
    }
}

impl fmt::Display for StackPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StackPair::BC => "BC",
            StackPair::DE => "DE",
            StackPair::HL => "HL",
            StackPair::AF => "AF",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Indirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indirect::BC => "(BC)",
            Indirect::DE => "(DE)",
            Indirect::HlInc => "(HL+)",
            Indirect::HlDec => "(HL-)",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cond::NZ => "NZ",
            Cond::Z => "Z",
            Cond::NC => "NC",
            Cond::C => "C",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ShiftOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftOp::Rlc => "RLC",
            ShiftOp::Rrc => "RRC",
            ShiftOp::Rl => "RL",
            ShiftOp::Rr => "RR",
            ShiftOp::Sla => "SLA",
            ShiftOp::Sra => "SRA",
            ShiftOp::Swap => "SWAP",
            ShiftOp::Srl => "SRL",
        };
        f.write_str(name)
    }
}

impl AluOp {
    fn mnemonic(&self) -> &'static str {
        match self {
            AluOp::Add => "ADD A,",
            AluOp::Adc => "ADC A,",
            AluOp::Sub => "SUB ",
            AluOp::Sbc => "SBC A,",
            AluOp::And => "AND ",
            AluOp::Xor => "XOR ",
            AluOp::Or => "OR ",
            AluOp::Cp => "CP ",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;
        match *self {
            Nop => write!(f, "NOP"),
            Stop => write!(f, "STOP"),
            Halt => write!(f, "HALT"),

            Ld { dst, src } => write!(f, "LD {dst},{src}"),
            LdImm(dst, n) => write!(f, "LD {dst},${n:02X}"),
            StoreA(ind) => write!(f, "LD {ind},A"),
            LoadA(ind) => write!(f, "LD A,{ind}"),
            StoreAAbs(addr) => write!(f, "LD (${addr:04X}),A"),
            LoadAAbs(addr) => write!(f, "LD A,(${addr:04X})"),
            StoreAHigh(n) => write!(f, "LDH (${n:02X}),A"),
            LoadAHigh(n) => write!(f, "LDH A,(${n:02X})"),
            StoreAHighC => write!(f, "LD (C),A"),
            LoadAHighC => write!(f, "LD A,(C)"),

            LdImm16(rr, nn) => write!(f, "LD {rr},${nn:04X}"),
            StoreSp(addr) => write!(f, "LD (${addr:04X}),SP"),
            LdSpHl => write!(f, "LD SP,HL"),
            LdHlSpOffset(e) => write!(f, "LD HL,SP{e:+}"),
            Push(rr) => write!(f, "PUSH {rr}"),
            Pop(rr) => write!(f, "POP {rr}"),

            Alu(op, r) => write!(f, "{}{r}", op.mnemonic()),
            AluImm(op, n) => write!(f, "{}${n:02X}", op.mnemonic()),
            Inc(r) => write!(f, "INC {r}"),
            Dec(r) => write!(f, "DEC {r}"),
            Daa => write!(f, "DAA"),
            Cpl => write!(f, "CPL"),
            Scf => write!(f, "SCF"),
            Ccf => write!(f, "CCF"),

            AddHl(rr) => write!(f, "ADD HL,{rr}"),
            AddSp(e) => write!(f, "ADD SP,{e}"),
            Inc16(rr) => write!(f, "INC {rr}"),
            Dec16(rr) => write!(f, "DEC {rr}"),

            Rlca => write!(f, "RLCA"),
            Rrca => write!(f, "RRCA"),
            Rla => write!(f, "RLA"),
            Rra => write!(f, "RRA"),

            Jp(addr) => write!(f, "JP ${addr:04X}"),
            JpCond(cc, addr) => write!(f, "JP {cc},${addr:04X}"),
            JpHl => write!(f, "JP (HL)"),
            Jr(e) => write!(f, "JR {e}"),
            JrCond(cc, e) => write!(f, "JR {cc},{e}"),
            Call(addr) => write!(f, "CALL ${addr:04X}"),
            CallCond(cc, addr) => write!(f, "CALL {cc},${addr:04X}"),
            Ret => write!(f, "RET"),
            RetCond(cc) => write!(f, "RET {cc}"),
            Reti => write!(f, "RETI"),
            Rst(vector) => write!(f, "RST ${vector:02X}"),

            Di => write!(f, "DI"),
            Ei => write!(f, "EI"),

            Shift(op, r) => write!(f, "{op} {r}"),
            Bit(b, r) => write!(f, "BIT {b},{r}"),
            Res(b, r) => write!(f, "RES {b},{r}"),
            Set(b, r) => write!(f, "SET {b},{r}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disassembly_uses_conventional_mnemonics() {
        assert_eq!(Instruction::LdImm(R8::A, 0x05).to_string(), "LD A,$05");
        assert_eq!(Instruction::JrCond(Cond::NZ, -2).to_string(), "JR NZ,-2");
        assert_eq!(Instruction::Bit(7, R8::HlInd).to_string(), "BIT 7,(HL)");
        assert_eq!(Instruction::Alu(AluOp::Xor, R8::A).to_string(), "XOR A");
        assert_eq!(Instruction::AluImm(AluOp::Add, 0x03).to_string(), "ADD A,$03");
        assert_eq!(Instruction::LdHlSpOffset(-8).to_string(), "LD HL,SP-8");
        assert_eq!(Instruction::LdHlSpOffset(4).to_string(), "LD HL,SP+4");
        assert_eq!(Instruction::Call(0x0200).to_string(), "CALL $0200");
        assert_eq!(Instruction::LoadA(Indirect::HlInc).to_string(), "LD A,(HL+)");
    }

    #[test]
    fn lengths_cover_prefix_and_immediates() {
        assert_eq!(Instruction::Nop.len(), 1);
        assert_eq!(Instruction::Stop.len(), 1);
        assert_eq!(Instruction::Jr(0).len(), 2);
        assert_eq!(Instruction::Call(0).len(), 3);
        assert_eq!(Instruction::Set(0, R8::B).len(), 2);
        assert!(Instruction::Set(0, R8::B).is_prefixed());
        assert!(!Instruction::Ret.is_prefixed());
    }
}
