/// Abstraction over the Game Boy bus (memory and IO).
///
/// The CPU core only ever reads and writes single bytes; cartridge banking,
/// IO register mirroring and the rest of the memory map live behind this
/// trait. Reads take `&mut self` because IO registers may have read side
/// effects.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read of `addr` and `addr + 1` (wrapping).
    #[inline]
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Little-endian 16-bit write to `addr` and `addr + 1` (wrapping).
    #[inline]
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}

impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        (**self).read8(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        (**self).write8(addr, value)
    }
}
