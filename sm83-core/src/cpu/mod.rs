mod cpu;
mod error;
mod exec;
pub mod instruction;
mod instructions_table;

use byteorder::{ByteOrder, LittleEndian};

pub use cpu::{Cpu, CpuFlags, CpuRegisters};
pub use error::CpuError;
pub use instruction::{DecodedInstruction, InstructionDescriptor};
pub use instructions_table::InstructionTable;

/// Address of the interrupt flags register (`IF`)
pub const INTERRUPT_FLAGS_ADDR: u16 = 0xFF0F;
/// Address of the interrupt enable register (`IE`)
pub const INTERRUPT_ENABLE_ADDR: u16 = 0xFFFF;

/// The memory the CPU is connected to.
///
/// Reading has no side effects, which is what allows the decoder to look
/// ahead without disturbing the emulation. Multi-byte accesses are little
/// endian and are always composed from single byte accesses.
pub trait CpuBusProvider {
    fn read(&self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);

    fn read_word(&self, addr: u16) -> u16 {
        LittleEndian::read_u16(&[self.read(addr), self.read(addr.wrapping_add(1))])
    }

    fn write_word(&mut self, addr: u16, data: u16) {
        let mut buf = [0; 2];
        LittleEndian::write_u16(&mut buf, data);
        self.write(addr, buf[0]);
        self.write(addr.wrapping_add(1), buf[1]);
    }

    fn read_dword(&self, addr: u16) -> u32 {
        let mut buf = [0; 4];
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = self.read(addr.wrapping_add(i as u16));
        }
        LittleEndian::read_u32(&buf)
    }

    fn write_dword(&mut self, addr: u16, data: u32) {
        let mut buf = [0; 4];
        LittleEndian::write_u32(&mut buf, data);
        for (i, byte) in buf.iter().enumerate() {
            self.write(addr.wrapping_add(i as u16), *byte);
        }
    }
}
