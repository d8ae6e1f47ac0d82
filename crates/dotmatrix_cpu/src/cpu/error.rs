/// Errors that can occur while stepping the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// The byte at `addr` is one of the primary opcode holes
    /// (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD).
    ///
    /// Nothing was executed: registers, flags, IME and memory are exactly
    /// as they were before the step and PC still points at the opcode.
    IllegalOpcode { opcode: u8, addr: u16 },
}

impl std::fmt::Display for CpuError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CpuError::IllegalOpcode { opcode, addr } => {
                write!(f, "illegal opcode 0x{opcode:02X} at 0x{addr:04X}")
            }
        }
    }
}

impl std::error::Error for CpuError {}
