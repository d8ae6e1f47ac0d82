/// Flag behaviour of `ADD HL,rr`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Add16Flags {
    /// H and C both report a carry out of the low byte; Z follows the
    /// 16-bit result.
    #[default]
    LowByte,
    /// LR35902 behaviour: H from bit 11, C from bit 15, Z unaffected.
    Hardware,
}

/// What `RST t` does with the return address.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum RstMode {
    /// Push the address of the next instruction, then jump (LR35902).
    #[default]
    PushReturn,
    /// Jump to the vector without touching the stack.
    JumpOnly,
}

/// Flag behaviour of `OR` and `XOR`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum LogicFlags {
    /// Only Z is written; N, H and C keep their previous values.
    #[default]
    ZeroOnly,
    /// LR35902 behaviour: Z from the result, N, H and C cleared.
    Hardware,
}

/// Z flag behaviour of the accumulator rotates RLCA, RLA, RRCA and RRA.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum RotateAFlags {
    /// Z follows the result, as for the CB-prefixed rotates.
    #[default]
    ZeroFromResult,
    /// LR35902 behaviour: Z is always cleared.
    ZeroCleared,
}

/// Encoded length of `STOP`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum StopLength {
    /// A single opcode byte; execution resumes at the next byte.
    #[default]
    Single,
    /// LR35902 behaviour: the byte after the opcode is padding and skipped.
    WithPadding,
}

/// Register state a freshly created or reset CPU starts from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum InitialState {
    /// All pairs and PC zero, SP=$FFFE, IME set.
    #[default]
    PowerOn,
    /// DMG register values after the boot ROM hands over to the cartridge
    /// at $0100 (Pan Docs "Power Up Sequence"), IME clear.
    PostBoot,
}

/// Behavioural choices for the CPU core.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct CpuConfig {
    pub add16: Add16Flags,
    pub logic: LogicFlags,
    pub rotate_a: RotateAFlags,
    pub rst: RstMode,
    pub stop: StopLength,
    pub initial_state: InitialState,
}

impl CpuConfig {
    /// Configuration that follows the LR35902 everywhere a choice exists.
    pub fn hardware() -> Self {
        Self {
            add16: Add16Flags::Hardware,
            logic: LogicFlags::Hardware,
            rotate_a: RotateAFlags::ZeroCleared,
            rst: RstMode::PushReturn,
            stop: StopLength::WithPadding,
            initial_state: InitialState::PowerOn,
        }
    }
}
