use crate::cpu::Bus;
use crate::ADDRESS_SPACE;

/// Flat 64 KiB memory with no mapping or IO side effects.
///
/// Stands in for the real memory bus in tests and in the trace tool. Every
/// address is plain RAM, including the ROM area and the high page.
#[derive(Clone)]
pub struct FlatMemory {
    bytes: Box<[u8; ADDRESS_SPACE]>,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory").finish_non_exhaustive()
    }
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; ADDRESS_SPACE]),
        }
    }

    /// Copy `data` into memory starting at `addr`, wrapping past 0xFFFF.
    pub fn load(&mut self, addr: u16, data: &[u8]) {
        for (offset, &byte) in data.iter().enumerate() {
            let target = addr.wrapping_add(offset as u16);
            self.bytes[target as usize] = byte;
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl Bus for FlatMemory {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }
}

impl std::ops::Index<u16> for FlatMemory {
    type Output = u8;

    fn index(&self, addr: u16) -> &u8 {
        &self.bytes[addr as usize]
    }
}

impl std::ops::IndexMut<u16> for FlatMemory {
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.bytes[addr as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_wraps_at_top_of_address_space() {
        let mut mem = FlatMemory::new();
        mem.load(0xFFFE, &[0x11, 0x22, 0x33]);
        assert_eq!(mem[0xFFFE], 0x11);
        assert_eq!(mem[0xFFFF], 0x22);
        assert_eq!(mem[0x0000], 0x33);
    }

    #[test]
    fn read16_and_write16_are_little_endian() {
        let mut mem = FlatMemory::new();
        mem.write16(0xC000, 0x1234);
        assert_eq!(mem[0xC000], 0x34);
        assert_eq!(mem[0xC001], 0x12);
        assert_eq!(mem.read16(0xC000), 0x1234);
    }
}
