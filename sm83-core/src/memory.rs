mod interrupts;

pub use interrupts::{InterruptManager, InterruptType};

use crate::cartridge::Cartridge;
use crate::cpu::CpuBusProvider;
use interrupts::Interrupts;

const VRAM_SIZE: usize = 0x2000;
const WRAM_SIZE: usize = 0x2000;
const OAM_SIZE: usize = 0xA0;
const IO_SIZE: usize = 0x80;
const HRAM_SIZE: usize = 0x7F;

/// The DMG memory map.
///
/// Every address resolves to one of the regions below, addresses that have
/// no backing memory in this core (external RAM, the area after OAM) read
/// as `0xFF` and ignore writes.
pub struct Bus {
    cartridge: Cartridge,
    vram: Box<[u8; VRAM_SIZE]>,
    wram: Box<[u8; WRAM_SIZE]>,
    oam: [u8; OAM_SIZE],
    io: [u8; IO_SIZE],
    hram: [u8; HRAM_SIZE],
    interrupts: Interrupts,
}

impl Default for Bus {
    fn default() -> Self {
        Self::new(Cartridge::default())
    }
}

impl Bus {
    pub fn new(cartridge: Cartridge) -> Self {
        Self {
            cartridge,
            vram: Box::new([0; VRAM_SIZE]),
            wram: Box::new([0; WRAM_SIZE]),
            oam: [0; OAM_SIZE],
            io: [0; IO_SIZE],
            hram: [0; HRAM_SIZE],
            interrupts: Interrupts::default(),
        }
    }

    /// Replaces the mapped ROM, the rest of memory is untouched
    pub fn load_cartridge(&mut self, cartridge: Cartridge) {
        self.cartridge = cartridge;
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    pub fn vram(&self) -> &[u8] {
        &self.vram[..]
    }

    pub fn oam(&self) -> &[u8] {
        &self.oam
    }

    /// The interrupt the CPU would service next if `IME` allows it
    pub fn peek_next_interrupt(&self) -> Option<InterruptType> {
        self.interrupts.get_highest_interrupt()
    }

    fn read_io(&self, offset: u8) -> u8 {
        match offset {
            0x0F => self.interrupts.read_interrupt_flags(), // interrupts flags
            0x00..=0x7F => self.io[offset as usize],        // io block
            0x80..=0xFE => self.hram[offset as usize & 0x7F], // hram
            0xFF => self.interrupts.read_interrupt_enable(), // interrupts enable
        }
    }

    fn write_io(&mut self, offset: u8, data: u8) {
        match offset {
            0x0F => self.interrupts.write_interrupt_flags(data), // interrupts flags
            0x00..=0x7F => self.io[offset as usize] = data,      // io block
            0x80..=0xFE => self.hram[offset as usize & 0x7F] = data, // hram
            0xFF => self.interrupts.write_interrupt_enable(data), // interrupts enable
        }
    }
}

impl CpuBusProvider for Bus {
    fn read(&self, addr: u16) -> u8 {
        let page = (addr >> 8) as u8;
        let offset = addr as u8;

        match page {
            0x00..=0x7F => self.cartridge.read_rom(addr),             // rom
            0x80..=0x9F => self.vram[addr as usize & 0x1FFF],         // vram
            0xA0..=0xBF => 0xFF,                                      // no sram
            0xC0..=0xDF => self.wram[addr as usize & 0x1FFF],         // wram
            0xE0..=0xFD => self.wram[(addr - 0x2000) as usize & 0x1FFF], // echo
            0xFE if offset <= 0x9F => self.oam[offset as usize],      // oam
            0xFE => 0xFF,                                             // unused
            0xFF => self.read_io(offset),
        }
    }

    fn write(&mut self, addr: u16, data: u8) {
        let page = (addr >> 8) as u8;
        let offset = addr as u8;

        match page {
            0x00..=0x7F => {}                                          // rom
            0x80..=0x9F => self.vram[addr as usize & 0x1FFF] = data,   // vram
            0xA0..=0xBF => {}                                          // no sram
            0xC0..=0xDF => self.wram[addr as usize & 0x1FFF] = data,   // wram
            0xE0..=0xFD => self.wram[(addr - 0x2000) as usize & 0x1FFF] = data, // echo
            0xFE if offset <= 0x9F => self.oam[offset as usize] = data, // oam
            0xFE => {}                                                 // unused
            0xFF => self.write_io(offset, data),
        }
    }
}

impl InterruptManager for Bus {
    fn request_interrupt(&mut self, interrupt: InterruptType) {
        self.interrupts.request_interrupt(interrupt);
    }
}

#[cfg(test)]
mod tests {
    use super::{Bus, InterruptManager, InterruptType};
    use crate::cartridge::Cartridge;
    use crate::cpu::CpuBusProvider;

    #[test]
    fn rom_is_read_only() {
        let mut bus = Bus::new(Cartridge::from_bytes(&[0x12, 0x34]));

        bus.write(0x0000, 0xFF);
        assert_eq!(bus.read(0x0000), 0x12);
        assert_eq!(bus.read(0x0001), 0x34);
        assert_eq!(bus.read(0x0002), 0x00);
    }

    #[test]
    fn echo_ram_mirrors_wram() {
        let mut bus = Bus::default();

        for k in 0..0x1E00u16 {
            bus.write(0xC000 + k, k as u8 ^ 0x5A);
            assert_eq!(bus.read(0xE000 + k), k as u8 ^ 0x5A);

            bus.write(0xE000 + k, k as u8);
            assert_eq!(bus.read(0xC000 + k), k as u8);
        }

        // the top of wram has no mirror
        bus.write(0xDE00, 0x77);
        assert_eq!(bus.read(0xFE00), 0x00);
    }

    #[test]
    fn unmapped_regions() {
        let mut bus = Bus::default();

        bus.write(0xA123, 0x42);
        assert_eq!(bus.read(0xA123), 0xFF);

        bus.write(0xFEA0, 0x42);
        assert_eq!(bus.read(0xFEA0), 0xFF);
        assert_eq!(bus.read(0xFEFF), 0xFF);
    }

    #[test]
    fn regions_are_separate() {
        let mut bus = Bus::default();

        bus.write(0x8000, 1);
        bus.write(0x9FFF, 2);
        bus.write(0xFE00, 3);
        bus.write(0xFE9F, 4);
        bus.write(0xFF00, 5);
        bus.write(0xFF7F, 6);
        bus.write(0xFF80, 7);
        bus.write(0xFFFE, 8);

        assert_eq!(bus.read(0x8000), 1);
        assert_eq!(bus.read(0x9FFF), 2);
        assert_eq!(bus.read(0xFE00), 3);
        assert_eq!(bus.read(0xFE9F), 4);
        assert_eq!(bus.read(0xFF00), 5);
        assert_eq!(bus.read(0xFF7F), 6);
        assert_eq!(bus.read(0xFF80), 7);
        assert_eq!(bus.read(0xFFFE), 8);

        assert_eq!(bus.vram()[0], 1);
        assert_eq!(bus.oam()[0x9F], 4);
        assert_eq!(bus.read(0xC000), 0);
    }

    #[test]
    fn interrupt_registers() {
        let mut bus = Bus::default();

        assert_eq!(bus.read(0xFF0F), 0xE0);
        bus.write(0xFF0F, 0x01);
        assert_eq!(bus.read(0xFF0F), 0xE1);

        bus.write(0xFFFF, 0xFF);
        assert_eq!(bus.read(0xFFFF), 0xFF);

        bus.write(0xFF0F, 0x00);
        bus.request_interrupt(InterruptType::Joypad);
        assert_eq!(bus.read(0xFF0F), 0xF0);
        assert_eq!(bus.peek_next_interrupt(), Some(InterruptType::Joypad));
    }

    #[test]
    fn word_helpers_are_little_endian() {
        let mut bus = Bus::default();

        bus.write_word(0xC000, 0xBEEF);
        assert_eq!(bus.read(0xC000), 0xEF);
        assert_eq!(bus.read(0xC001), 0xBE);
        assert_eq!(bus.read_word(0xC000), 0xBEEF);

        bus.write_dword(0xC010, 0x1234_5678);
        assert_eq!(bus.read(0xC010), 0x78);
        assert_eq!(bus.read(0xC013), 0x12);
        assert_eq!(bus.read_dword(0xC010), 0x1234_5678);
    }
}
