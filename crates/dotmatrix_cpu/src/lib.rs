pub mod cpu;
pub mod memory;

pub use cpu::{
    Bus, Cpu, CpuConfig, CpuError, Flags, Instruction, PowerState, Registers,
};
pub use memory::FlatMemory;

/// Size of the CPU-visible address space (64 KiB).
pub const ADDRESS_SPACE: usize = 0x10000;
