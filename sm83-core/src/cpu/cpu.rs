use super::error::CpuError;
use super::instruction::{DecodedInstruction, InstructionDescriptor, OperandType};
use super::instructions_table::InstructionTable;
use super::{CpuBusProvider, INTERRUPT_ENABLE_ADDR, INTERRUPT_FLAGS_ADDR};
use crate::memory::InterruptType;

use bitflags::bitflags;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Cost of a step where the CPU stays halted
const HALT_IDLE_CYCLES: u8 = 4;
/// Cost of pushing `PC` and jumping to an interrupt vector
const INTERRUPT_DISPATCH_CYCLES: u8 = 20;

bitflags! {
    pub struct CpuFlags: u8 {
        const Z = 1 << 7;
        const N = 1 << 6;
        const H = 1 << 5;
        const C = 1 << 4;
    }
}

/// A copy of the register file, used by hosts and debuggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuRegisters {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Display for CpuRegisters {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "AF:{:02X}{:02X} BC:{:02X}{:02X} DE:{:02X}{:02X} HL:{:02X}{:02X} SP:{:04X} PC:{:04X}",
            self.a, self.f, self.b, self.c, self.d, self.e, self.h, self.l, self.sp, self.pc
        )
    }
}

pub struct Cpu {
    pub(super) reg_a: u8,
    pub(super) reg_b: u8,
    pub(super) reg_c: u8,
    pub(super) reg_d: u8,
    pub(super) reg_e: u8,
    pub(super) reg_h: u8,
    pub(super) reg_l: u8,
    pub(super) reg_f: CpuFlags,

    pub(super) reg_sp: u16,

    pub(super) reg_pc: u16,

    pub(super) ime: bool,
    /// set by `EI`, moved into `ime` at the start of the next step
    pub(super) ei_pending: bool,
    pub(super) halted: bool,

    /// address of the instruction currently executing
    pub(super) instruction_pc: u16,

    cycles_this_frame: u32,
    total_cycles: u64,

    trace: bool,

    pub(super) table: InstructionTable,
    next_instruction: Option<InstructionDescriptor>,
}

impl Cpu {
    pub fn new(table: InstructionTable) -> Self {
        let mut cpu = Self {
            reg_a: 0,
            reg_b: 0,
            reg_c: 0,
            reg_d: 0,
            reg_e: 0,
            reg_h: 0,
            reg_l: 0,
            reg_f: CpuFlags::from_bits_truncate(0),
            reg_sp: 0,
            reg_pc: 0,

            ime: false,
            ei_pending: false,
            halted: false,

            instruction_pc: 0,

            cycles_this_frame: 0,
            total_cycles: 0,

            trace: false,

            table,
            next_instruction: None,
        };

        cpu.reset_registers();

        cpu
    }

    /// Puts the CPU in the state the DMG boot rom leaves it in and
    /// decodes the first instruction.
    pub fn reset<P: CpuBusProvider + ?Sized>(&mut self, bus: &P) {
        self.reset_registers();
        self.next_instruction = Some(self.table.resolve(bus, self.reg_pc));
    }

    fn reset_registers(&mut self) {
        // initial values of the registers (DMG)
        self.reg_af_write(0x01B0);
        self.reg_bc_write(0x0013);
        self.reg_de_write(0x00D8);
        self.reg_hl_write(0x014D);
        self.reg_sp = 0xFFFE;
        self.reg_pc = 0x0100;

        self.ime = false;
        self.ei_pending = false;
        self.halted = false;
        self.cycles_this_frame = 0;
        self.total_cycles = 0;
    }

    /// Log every executed instruction at `trace` level
    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    pub fn table(&self) -> &InstructionTable {
        &self.table
    }

    /// Runs a single instruction (or a halted idle step) followed by the
    /// interrupt check, returns the number of T-cycles consumed.
    pub fn execute_instruction<P: CpuBusProvider>(
        &mut self,
        bus: &mut P,
    ) -> Result<u8, CpuError> {
        if self.ei_pending {
            self.ime = true;
            self.ei_pending = false;
        }

        let cycles = if self.halted {
            if self.wake_from_halt(&*bus) && !self.ime {
                self.step(bus)?
            } else {
                HALT_IDLE_CYCLES
            }
        } else {
            self.step(bus)?
        };
        self.add_cycles(cycles);

        let cycles = cycles + self.check_interrupts(bus);

        self.next_instruction = Some(self.table.resolve(&*bus, self.reg_pc));

        Ok(cycles)
    }

    fn step<P: CpuBusProvider>(&mut self, bus: &mut P) -> Result<u8, CpuError> {
        let instruction = self.table.resolve(&*bus, self.reg_pc);

        if self.trace && log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "{:<32} {}",
                self.fetch_instruction(&*bus, self.reg_pc).to_string(),
                self.registers()
            );
        }

        self.instruction_pc = self.reg_pc;
        self.reg_pc = self.reg_pc.wrapping_add(instruction.length as u16);

        instruction.execute(self, bus)
    }

    /// Leaves the halted state if any enabled interrupt is requested,
    /// `IME` does not matter here
    fn wake_from_halt<P: CpuBusProvider>(&mut self, bus: &P) -> bool {
        let pending = bus.read(INTERRUPT_ENABLE_ADDR) & bus.read(INTERRUPT_FLAGS_ADDR) & 0x1F;

        if pending != 0 {
            log::debug!("waking up from HALT, pending interrupts {:02X}", pending);
            self.halted = false;
        }

        !self.halted
    }

    fn check_interrupts<P: CpuBusProvider>(&mut self, bus: &mut P) -> u8 {
        if !self.ime {
            return 0;
        }

        let requested = bus.read(INTERRUPT_FLAGS_ADDR);
        let pending = bus.read(INTERRUPT_ENABLE_ADDR) & requested & 0x1F;

        let interrupt = match InterruptType::from_pending(pending) {
            Some(interrupt) => interrupt,
            None => return 0,
        };

        log::debug!(
            "servicing {:?} interrupt, returning to {:04X}",
            interrupt,
            self.reg_pc
        );

        // a `HALT` in this same step is over, the handler has to run
        self.halted = false;
        self.ime = false;
        self.push_word_to_stack(bus, self.reg_pc);
        self.reg_pc = interrupt.vector();
        bus.write(INTERRUPT_FLAGS_ADDR, requested & !interrupt.bit());

        self.add_cycles(INTERRUPT_DISPATCH_CYCLES);
        INTERRUPT_DISPATCH_CYCLES
    }

    fn add_cycles(&mut self, cycles: u8) {
        self.cycles_this_frame = self.cycles_this_frame.wrapping_add(cycles as u32);
        self.total_cycles = self.total_cycles.wrapping_add(cycles as u64);
    }

    /// Decodes the instruction at `address`, does not change any state
    pub fn fetch_instruction<P: CpuBusProvider + ?Sized>(
        &self,
        bus: &P,
        address: u16,
    ) -> DecodedInstruction {
        DecodedInstruction::decode(&self.table, bus, address)
    }

    /// Decodes `count` instructions starting from the current `PC`
    pub fn fetch_instructions<P: CpuBusProvider + ?Sized>(
        &self,
        bus: &P,
        count: usize,
    ) -> Vec<DecodedInstruction> {
        let mut address = self.reg_pc;

        (0..count)
            .map(|_| {
                let instruction = self.fetch_instruction(bus, address);
                address = instruction.next_address();
                instruction
            })
            .collect()
    }

    /// The instruction at `PC`, decoded at the end of the last step or reset
    pub fn next_instruction(&self) -> Option<&InstructionDescriptor> {
        self.next_instruction.as_ref()
    }

    pub fn push_word_to_stack<P: CpuBusProvider + ?Sized>(&mut self, bus: &mut P, data: u16) {
        self.reg_sp = self.reg_sp.wrapping_sub(1);
        bus.write(self.reg_sp, (data >> 8) as u8);
        self.reg_sp = self.reg_sp.wrapping_sub(1);
        bus.write(self.reg_sp, data as u8);
    }

    pub fn pop_word_from_stack<P: CpuBusProvider + ?Sized>(&mut self, bus: &P) -> u16 {
        let low = bus.read(self.reg_sp);
        self.reg_sp = self.reg_sp.wrapping_add(1);
        let high = bus.read(self.reg_sp);
        self.reg_sp = self.reg_sp.wrapping_add(1);

        ((high as u16) << 8) | low as u16
    }

    pub fn registers(&self) -> CpuRegisters {
        CpuRegisters {
            a: self.reg_a,
            f: self.reg_f.bits(),
            b: self.reg_b,
            c: self.reg_c,
            d: self.reg_d,
            e: self.reg_e,
            h: self.reg_h,
            l: self.reg_l,
            sp: self.reg_sp,
            pc: self.reg_pc,
        }
    }

    /// The low nibble of `F` is dropped
    pub fn set_registers(&mut self, regs: CpuRegisters) {
        self.reg_a = regs.a;
        self.reg_f = CpuFlags::from_bits_truncate(regs.f);
        self.reg_b = regs.b;
        self.reg_c = regs.c;
        self.reg_d = regs.d;
        self.reg_e = regs.e;
        self.reg_h = regs.h;
        self.reg_l = regs.l;
        self.reg_sp = regs.sp;
        self.reg_pc = regs.pc;
    }

    pub fn pc(&self) -> u16 {
        self.reg_pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.reg_pc = pc;
    }

    pub fn sp(&self) -> u16 {
        self.reg_sp
    }

    pub fn set_sp(&mut self, sp: u16) {
        self.reg_sp = sp;
    }

    pub fn af(&self) -> u16 {
        self.reg_af_read()
    }

    pub fn bc(&self) -> u16 {
        self.reg_bc_read()
    }

    pub fn de(&self) -> u16 {
        self.reg_de_read()
    }

    pub fn hl(&self) -> u16 {
        self.reg_hl_read()
    }

    pub fn flags(&self) -> CpuFlags {
        self.reg_f
    }

    pub fn flag(&self, flag: CpuFlags) -> bool {
        self.flag_get(flag)
    }

    pub fn set_flag(&mut self, flag: CpuFlags, value: bool) {
        self.flag_set(flag, value);
    }

    pub fn ime(&self) -> bool {
        self.ime
    }

    pub fn set_ime(&mut self, ime: bool) {
        self.ime = ime;
        self.ei_pending = false;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn cycles_this_frame(&self) -> u32 {
        self.cycles_this_frame
    }

    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    pub fn reset_frame_cycles(&mut self) {
        self.cycles_this_frame = 0;
    }

    /// Ends a frame of `frame_cycles`, the cycles the last instruction ran
    /// past the end of the frame count towards the next one
    pub fn end_frame(&mut self, frame_cycles: u32) {
        self.cycles_this_frame = self.cycles_this_frame.saturating_sub(frame_cycles);
    }
}

impl Cpu {
    #[inline]
    pub(super) fn reg_af_read(&self) -> u16 {
        (self.reg_a as u16) << 8 | self.reg_f.bits() as u16
    }

    #[inline]
    pub(super) fn reg_bc_read(&self) -> u16 {
        (self.reg_b as u16) << 8 | self.reg_c as u16
    }

    #[inline]
    pub(super) fn reg_de_read(&self) -> u16 {
        (self.reg_d as u16) << 8 | self.reg_e as u16
    }

    #[inline]
    pub(super) fn reg_hl_read(&self) -> u16 {
        (self.reg_h as u16) << 8 | self.reg_l as u16
    }

    #[inline]
    pub(super) fn reg_af_write(&mut self, data: u16) {
        self.reg_a = (data >> 8) as u8;
        // the lower 4 bits of `F` do not exist
        self.reg_f = CpuFlags::from_bits_truncate(data as u8);
    }

    #[inline]
    pub(super) fn reg_bc_write(&mut self, data: u16) {
        self.reg_b = (data >> 8) as u8;
        self.reg_c = data as u8;
    }

    #[inline]
    pub(super) fn reg_de_write(&mut self, data: u16) {
        self.reg_d = (data >> 8) as u8;
        self.reg_e = data as u8;
    }

    #[inline]
    pub(super) fn reg_hl_write(&mut self, data: u16) {
        self.reg_h = (data >> 8) as u8;
        self.reg_l = data as u8;
    }

    #[inline]
    pub(super) fn flag_get(&self, flag: CpuFlags) -> bool {
        self.reg_f.intersects(flag)
    }

    #[inline]
    pub(super) fn flag_set(&mut self, flag: CpuFlags, value: bool) {
        self.reg_f.set(flag, value);
    }

    /// Operand bytes are read behind `PC`, which already points to the
    /// next instruction
    pub(super) fn read_operand(&mut self, bus: &dyn CpuBusProvider, ty: OperandType) -> u16 {
        match ty {
            OperandType::RegA => self.reg_a as u16,
            OperandType::RegB => self.reg_b as u16,
            OperandType::RegC => self.reg_c as u16,
            OperandType::RegD => self.reg_d as u16,
            OperandType::RegE => self.reg_e as u16,
            OperandType::RegH => self.reg_h as u16,
            OperandType::RegL => self.reg_l as u16,
            OperandType::AddrHL => bus.read(self.reg_hl_read()) as u16,
            OperandType::AddrHLDec => {
                let hl = self.reg_hl_read();
                let result = bus.read(hl) as u16;
                self.reg_hl_write(hl.wrapping_sub(1));
                result
            }
            OperandType::AddrHLInc => {
                let hl = self.reg_hl_read();
                let result = bus.read(hl) as u16;
                self.reg_hl_write(hl.wrapping_add(1));
                result
            }
            OperandType::AddrBC => bus.read(self.reg_bc_read()) as u16,
            OperandType::AddrDE => bus.read(self.reg_de_read()) as u16,
            OperandType::RegAF => self.reg_af_read(),
            OperandType::RegBC => self.reg_bc_read(),
            OperandType::RegDE => self.reg_de_read(),
            OperandType::RegHL => self.reg_hl_read(),
            OperandType::RegSP => self.reg_sp,
            OperandType::Imm8 => bus.read(self.reg_pc.wrapping_sub(1)) as u16,
            OperandType::Imm8Signed => {
                bus.read(self.reg_pc.wrapping_sub(1)) as i8 as i16 as u16
            }
            OperandType::Imm16 => bus.read_word(self.reg_pc.wrapping_sub(2)),
            OperandType::HighAddr8 => {
                let addr = 0xFF00 | bus.read(self.reg_pc.wrapping_sub(1)) as u16;
                bus.read(addr) as u16
            }
            OperandType::HighAddrC => bus.read(0xFF00 | self.reg_c as u16) as u16,
            OperandType::Addr16 => {
                let addr = bus.read_word(self.reg_pc.wrapping_sub(2));
                bus.read(addr) as u16
            }
            OperandType::Arg(arg) => arg as u16,
            OperandType::CondNZ
            | OperandType::CondZ
            | OperandType::CondNC
            | OperandType::CondC
            | OperandType::Implied => 0,
            OperandType::Addr16Val16 => unreachable!(),
        }
    }

    pub(super) fn write_operand(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        ty: OperandType,
        data: u16,
    ) {
        match ty {
            OperandType::RegA => self.reg_a = data as u8,
            OperandType::RegB => self.reg_b = data as u8,
            OperandType::RegC => self.reg_c = data as u8,
            OperandType::RegD => self.reg_d = data as u8,
            OperandType::RegE => self.reg_e = data as u8,
            OperandType::RegH => self.reg_h = data as u8,
            OperandType::RegL => self.reg_l = data as u8,
            OperandType::AddrHL => bus.write(self.reg_hl_read(), data as u8),
            OperandType::AddrHLDec => {
                let hl = self.reg_hl_read();
                bus.write(hl, data as u8);
                self.reg_hl_write(hl.wrapping_sub(1));
            }
            OperandType::AddrHLInc => {
                let hl = self.reg_hl_read();
                bus.write(hl, data as u8);
                self.reg_hl_write(hl.wrapping_add(1));
            }
            OperandType::AddrBC => bus.write(self.reg_bc_read(), data as u8),
            OperandType::AddrDE => bus.write(self.reg_de_read(), data as u8),
            OperandType::RegAF => self.reg_af_write(data),
            OperandType::RegBC => self.reg_bc_write(data),
            OperandType::RegDE => self.reg_de_write(data),
            OperandType::RegHL => self.reg_hl_write(data),
            OperandType::RegSP => self.reg_sp = data,
            OperandType::HighAddr8 => {
                let addr = 0xFF00 | bus.read(self.reg_pc.wrapping_sub(1)) as u16;
                bus.write(addr, data as u8);
            }
            OperandType::HighAddrC => bus.write(0xFF00 | self.reg_c as u16, data as u8),
            OperandType::Addr16 => {
                let addr = bus.read_word(self.reg_pc.wrapping_sub(2));
                bus.write(addr, data as u8);
            }
            OperandType::Addr16Val16 => {
                let addr = bus.read_word(self.reg_pc.wrapping_sub(2));
                bus.write_word(addr, data);
            }
            OperandType::Implied => {}
            OperandType::Imm16
            | OperandType::Imm8
            | OperandType::Imm8Signed
            | OperandType::Arg(_)
            | OperandType::CondNZ
            | OperandType::CondZ
            | OperandType::CondNC
            | OperandType::CondC => unreachable!(),
        }
    }

    pub(super) fn check_cond(&self, cond: OperandType) -> bool {
        match cond {
            OperandType::CondNC => !self.flag_get(CpuFlags::C),
            OperandType::CondC => self.flag_get(CpuFlags::C),
            OperandType::CondNZ => !self.flag_get(CpuFlags::Z),
            OperandType::CondZ => self.flag_get(CpuFlags::Z),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cpu;
    use crate::cpu::InstructionTable;

    #[test]
    fn cycle_counters_wrap_around() {
        let mut cpu = Cpu::new(InstructionTable::build());
        cpu.cycles_this_frame = u32::MAX - 2;
        cpu.total_cycles = u64::MAX - 1;

        cpu.add_cycles(4);

        assert_eq!(cpu.cycles_this_frame(), 1);
        assert_eq!(cpu.total_cycles(), 2);
    }

    #[test]
    fn end_frame_keeps_the_overshoot() {
        let mut cpu = Cpu::new(InstructionTable::build());

        cpu.add_cycles(24);
        cpu.end_frame(20);
        assert_eq!(cpu.cycles_this_frame(), 4);

        cpu.end_frame(20);
        assert_eq!(cpu.cycles_this_frame(), 0);
    }
}
