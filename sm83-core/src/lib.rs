mod cartridge;
pub mod cpu;
mod memory;

#[cfg(test)]
mod tests;

use std::path::Path;

pub use cartridge::{Cartridge, CartridgeError};
pub use cpu::{
    Cpu, CpuBusProvider, CpuError, CpuFlags, CpuRegisters, DecodedInstruction,
    InstructionDescriptor, InstructionTable,
};
pub use memory::{Bus, InterruptManager, InterruptType};

/// T-cycles the DMG spends on one video frame (456 cycles * 154 lines)
pub const CYCLES_PER_FRAME: u32 = 456 * 154;

#[derive(Debug, Clone, Copy)]
pub struct GameBoyConfig {
    /// Number of T-cycles [`GameBoy::clock_for_frame`] runs for
    pub cycles_per_frame: u32,
    /// Log every executed instruction at `trace` level
    pub trace_execution: bool,
}

impl Default for GameBoyConfig {
    fn default() -> Self {
        Self {
            cycles_per_frame: CYCLES_PER_FRAME,
            trace_execution: false,
        }
    }
}

pub struct GameBoy {
    cpu: Cpu,
    bus: Bus,
    config: GameBoyConfig,
}

impl GameBoy {
    /// Maps `cartridge` and puts the CPU in its post boot rom state
    pub fn new(cartridge: Cartridge, config: GameBoyConfig) -> Self {
        let bus = Bus::new(cartridge);
        let mut cpu = Cpu::new(InstructionTable::build());

        cpu.set_trace(config.trace_execution);
        cpu.reset(&bus);

        Self { cpu, bus, config }
    }

    pub fn from_file<P: AsRef<Path>>(
        file_path: P,
        config: GameBoyConfig,
    ) -> Result<Self, CartridgeError> {
        let cartridge = Cartridge::from_file(file_path)?;

        Ok(Self::new(cartridge, config))
    }

    /// Executes one instruction, returns the T-cycles it took
    pub fn step(&mut self) -> Result<u8, CpuError> {
        self.cpu.execute_instruction(&mut self.bus)
    }

    /// Steps until the CPU enters `HALT` or `max_steps` instructions ran,
    /// returns the number of steps executed
    pub fn run_until_halt(&mut self, max_steps: usize) -> Result<usize, CpuError> {
        let mut steps = 0;

        while steps < max_steps && !self.cpu.is_halted() {
            self.step()?;
            steps += 1;
        }

        Ok(steps)
    }

    /// There is no video to sync to, so a frame is a fixed number of
    /// cycles, counted by the CPU frame counter. Cycles past the end of the
    /// frame are carried into the next one.
    pub fn clock_for_frame(&mut self) -> Result<(), CpuError> {
        while self.cpu.cycles_this_frame() < self.config.cycles_per_frame {
            self.step()?;
        }
        self.cpu.end_frame(self.config.cycles_per_frame);

        Ok(())
    }

    /// Decodes `count` instructions from the current `PC`, nothing is executed
    pub fn disassemble(&self, count: usize) -> Vec<DecodedInstruction> {
        self.cpu.fetch_instructions(&self.bus, count)
    }

    pub fn request_interrupt(&mut self, interrupt: InterruptType) {
        self.bus.request_interrupt(interrupt);
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn config(&self) -> &GameBoyConfig {
        &self.config
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.bus.cartridge().file_path()
    }
}
