mod error;

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub use error::CartridgeError;

/// Size of the address space a cartridge without a bank controller can map
pub const ROM_CAPACITY: usize = 0x8000;

/// A flat, read only cartridge ROM mapped at `0x0000..=0x7FFF`.
///
/// There is no bank switching, anything beyond the first 32KiB of a file is
/// dropped, and addresses past the loaded length read as `0`.
pub struct Cartridge {
    file_path: Option<PathBuf>,
    rom: Box<[u8; ROM_CAPACITY]>,
    rom_len: usize,
}

impl Default for Cartridge {
    fn default() -> Self {
        Self {
            file_path: None,
            rom: Box::new([0; ROM_CAPACITY]),
            rom_len: 0,
        }
    }
}

impl Cartridge {
    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Self, CartridgeError> {
        let mut file = File::open(file_path.as_ref())?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        if data.is_empty() {
            return Err(CartridgeError::EmptyRom);
        }

        let mut cartridge = Self::from_bytes(&data);
        cartridge.file_path = Some(file_path.as_ref().to_path_buf());

        Ok(cartridge)
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        if data.len() > ROM_CAPACITY {
            log::warn!(
                "rom is {} bytes, only the first {} bytes are mapped (no bank controller)",
                data.len(),
                ROM_CAPACITY
            );
        }

        let rom_len = data.len().min(ROM_CAPACITY);
        let mut rom = Box::new([0; ROM_CAPACITY]);
        rom[..rom_len].copy_from_slice(&data[..rom_len]);

        Self {
            file_path: None,
            rom,
            rom_len,
        }
    }

    /// Places `program` at `origin` in an otherwise zeroed ROM, parts that
    /// do not fit are dropped
    pub fn from_program(origin: u16, program: &[u8]) -> Self {
        let origin = origin as usize;
        let end = (origin + program.len()).min(ROM_CAPACITY);

        let mut cartridge = Self::default();
        if origin < end {
            cartridge.rom[origin..end].copy_from_slice(&program[..end - origin]);
            cartridge.rom_len = end;
        }
        cartridge
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Number of bytes that came from the loaded image
    pub fn rom_len(&self) -> usize {
        self.rom_len
    }

    pub fn read_rom(&self, addr: u16) -> u8 {
        let addr = addr as usize;
        if addr < self.rom_len {
            self.rom[addr]
        } else {
            0
        }
    }
}
