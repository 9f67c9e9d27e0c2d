#![cfg(test)]

use super::cpu::{Cpu, CpuBusProvider, CpuError, CpuRegisters, InstructionTable};

/// Where test programs are placed, same as the reset `PC`
const PROGRAM_START: u16 = 0x0100;

/// Runs a program from `PROGRAM_START` for a number of steps and then
/// checks the machine with the given block
macro_rules! cpu_tests {
    ($($test_name: ident, [$($byte: expr),* $(,)?], $steps: expr, |$gb: ident| $check: block;)*) => {
        $(
            #[test]
            #[allow(unused_mut)]
            fn $test_name() {
                let mut $gb = crate::tests::TestingGameBoy::with_program(&[$($byte),*]);

                $gb.run_steps($steps);

                $check
            }
        )*
    };
}

// defined after the macro so that it can use it
mod control_flow_tests;
mod flags_tests;
mod gameboy_tests;
mod interrupt_tests;

/// 64KiB of plain RAM, unlike the real bus every address is writable,
/// which lets tests place code and data anywhere
struct FlatRam {
    memory: Box<[u8; 0x10000]>,
}

impl Default for FlatRam {
    fn default() -> Self {
        Self {
            memory: Box::new([0; 0x10000]),
        }
    }
}

impl CpuBusProvider for FlatRam {
    fn read(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.memory[addr as usize] = data;
    }
}

struct TestingGameBoy {
    cpu: Cpu,
    bus: FlatRam,
}

impl TestingGameBoy {
    pub fn with_program(program: &[u8]) -> Self {
        let mut gb = Self {
            cpu: Cpu::new(InstructionTable::build()),
            bus: FlatRam::default(),
        };

        gb.load(PROGRAM_START, program);
        gb.cpu.reset(&gb.bus);

        gb
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        for (i, byte) in data.iter().enumerate() {
            self.bus.write(addr.wrapping_add(i as u16), *byte);
        }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    pub fn write(&mut self, addr: u16, data: u8) {
        self.bus.write(addr, data);
    }

    pub fn try_step(&mut self) -> Result<u8, CpuError> {
        self.cpu.execute_instruction(&mut self.bus)
    }

    pub fn step(&mut self) -> u8 {
        self.try_step().unwrap()
    }

    /// Returns the total cycles of all the steps
    pub fn run_steps(&mut self, steps: usize) -> u32 {
        (0..steps).map(|_| self.step() as u32).sum()
    }

    pub fn regs(&self) -> CpuRegisters {
        self.cpu.registers()
    }

    /// Replaces the registers and moves `PC` back to the program start
    pub fn restart_with(&mut self, mut regs: CpuRegisters) {
        regs.pc = PROGRAM_START;
        self.cpu.set_registers(regs);
    }
}
