//! Execution functions referenced by the instruction tables.
//!
//! Each one runs after `PC` has been moved past the instruction and returns
//! the T-cycles it consumed, which is the descriptor's count except for
//! conditional control flow that was not taken.

use super::cpu::{Cpu, CpuFlags};
use super::error::CpuError;
use super::instruction::InstructionDescriptor;
use super::CpuBusProvider;

const JR_NOT_TAKEN_CYCLES: u8 = 8;
const JP_NOT_TAKEN_CYCLES: u8 = 12;
const CALL_NOT_TAKEN_CYCLES: u8 = 12;
const RET_NOT_TAKEN_CYCLES: u8 = 8;

type ExecResult = Result<u8, CpuError>;

// misc / control
impl Cpu {
    pub(super) fn exec_nop(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        Ok(inst.cycles)
    }

    /// Without a joypad or speed switch to wait for, this does nothing
    pub(super) fn exec_stop(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        log::debug!("STOP at {:04X} ignored", self.instruction_pc);
        Ok(inst.cycles)
    }

    pub(super) fn exec_halt(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.halted = true;
        Ok(inst.cycles)
    }

    pub(super) fn exec_illegal(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        Err(CpuError::IllegalOpcode {
            opcode: inst.opcode,
            pc: self.instruction_pc,
        })
    }

    pub(super) fn exec_unimplemented(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        Err(CpuError::UnimplementedOpcode {
            opcode: inst.opcode,
            prefixed: inst.prefixed,
            pc: self.instruction_pc,
        })
    }

    /// Only reached when the `CB` slot of the base table is executed by
    /// itself, the CPU normally resolves the prefix while fetching.
    pub(super) fn exec_prefix(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        _inst: &InstructionDescriptor,
    ) -> ExecResult {
        let opcode = bus.read(self.reg_pc);
        self.reg_pc = self.reg_pc.wrapping_add(1);

        let prefixed = *self.table.prefixed(opcode);
        prefixed.execute(self, bus)
    }

    pub(super) fn exec_di(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.ime = false;
        self.ei_pending = false;
        Ok(inst.cycles)
    }

    pub(super) fn exec_ei(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.ei_pending = true;
        Ok(inst.cycles)
    }
}

// loads and stack
impl Cpu {
    pub(super) fn exec_ld(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (dest, src) = inst.operands;
        let data = self.read_operand(bus, src);
        self.write_operand(bus, dest, data);

        Ok(inst.cycles)
    }

    pub(super) fn exec_ld_hl_sp(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (dest, src) = inst.operands;
        let offset = self.read_operand(bus, src);
        let result = self.sp_add_signed(offset);
        self.write_operand(bus, dest, result);

        Ok(inst.cycles)
    }

    pub(super) fn exec_push(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let data = self.read_operand(bus, inst.operands.1);
        self.push_word_to_stack(bus, data);

        Ok(inst.cycles)
    }

    pub(super) fn exec_pop(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let data = self.pop_word_from_stack(&*bus);
        self.write_operand(bus, inst.operands.0, data);

        Ok(inst.cycles)
    }
}

// 8-bit arithmetic and logic
impl Cpu {
    fn alu_add(&mut self, a: u8, b: u8, carry: bool) -> u8 {
        let carry = carry as u16;
        let result = a as u16 + b as u16 + carry;

        self.flag_set(CpuFlags::Z, result & 0xFF == 0);
        self.flag_set(CpuFlags::N, false);
        self.flag_set(
            CpuFlags::H,
            (a as u16 & 0xF) + (b as u16 & 0xF) + carry > 0xF,
        );
        self.flag_set(CpuFlags::C, result > 0xFF);

        result as u8
    }

    fn alu_sub(&mut self, a: u8, b: u8, carry: bool) -> u8 {
        let carry = carry as u16;
        let result = (a as u16).wrapping_sub(b as u16).wrapping_sub(carry);

        self.flag_set(CpuFlags::Z, result & 0xFF == 0);
        self.flag_set(CpuFlags::N, true);
        self.flag_set(CpuFlags::H, (a as u16 & 0xF) < (b as u16 & 0xF) + carry);
        self.flag_set(CpuFlags::C, (a as u16) < b as u16 + carry);

        result as u8
    }

    fn set_logic_flags(&mut self, result: u8, half_carry: bool) {
        self.flag_set(CpuFlags::Z, result == 0);
        self.flag_set(CpuFlags::N, false);
        self.flag_set(CpuFlags::H, half_carry);
        self.flag_set(CpuFlags::C, false);
    }

    pub(super) fn exec_inc(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let dest = inst.operands.0;
        let value = self.read_operand(bus, dest) as u8;
        let result = value.wrapping_add(1);

        self.flag_set(CpuFlags::Z, result == 0);
        self.flag_set(CpuFlags::N, false);
        self.flag_set(CpuFlags::H, value & 0xF == 0xF);

        self.write_operand(bus, dest, result as u16);
        Ok(inst.cycles)
    }

    pub(super) fn exec_dec(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let dest = inst.operands.0;
        let value = self.read_operand(bus, dest) as u8;
        let result = value.wrapping_sub(1);

        self.flag_set(CpuFlags::Z, result == 0);
        self.flag_set(CpuFlags::N, true);
        self.flag_set(CpuFlags::H, value & 0xF == 0);

        self.write_operand(bus, dest, result as u16);
        Ok(inst.cycles)
    }

    pub(super) fn exec_add(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (dest, src) = inst.operands;
        let src = self.read_operand(bus, src) as u8;
        let result = self.alu_add(self.reg_a, src, false);
        self.write_operand(bus, dest, result as u16);

        Ok(inst.cycles)
    }

    pub(super) fn exec_adc(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (dest, src) = inst.operands;
        let src = self.read_operand(bus, src) as u8;
        let carry = self.flag_get(CpuFlags::C);
        let result = self.alu_add(self.reg_a, src, carry);
        self.write_operand(bus, dest, result as u16);

        Ok(inst.cycles)
    }

    pub(super) fn exec_sub(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (dest, src) = inst.operands;
        let src = self.read_operand(bus, src) as u8;
        let result = self.alu_sub(self.reg_a, src, false);
        self.write_operand(bus, dest, result as u16);

        Ok(inst.cycles)
    }

    pub(super) fn exec_sbc(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (dest, src) = inst.operands;
        let src = self.read_operand(bus, src) as u8;
        let carry = self.flag_get(CpuFlags::C);
        let result = self.alu_sub(self.reg_a, src, carry);
        self.write_operand(bus, dest, result as u16);

        Ok(inst.cycles)
    }

    pub(super) fn exec_cp(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let src = self.read_operand(bus, inst.operands.1) as u8;
        // only the flags are kept
        self.alu_sub(self.reg_a, src, false);

        Ok(inst.cycles)
    }

    pub(super) fn exec_and(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (dest, src) = inst.operands;
        let result = self.reg_a & self.read_operand(bus, src) as u8;
        self.set_logic_flags(result, true);
        self.write_operand(bus, dest, result as u16);

        Ok(inst.cycles)
    }

    pub(super) fn exec_xor(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (dest, src) = inst.operands;
        let result = self.reg_a ^ self.read_operand(bus, src) as u8;
        self.set_logic_flags(result, false);
        self.write_operand(bus, dest, result as u16);

        Ok(inst.cycles)
    }

    pub(super) fn exec_or(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (dest, src) = inst.operands;
        let result = self.reg_a | self.read_operand(bus, src) as u8;
        self.set_logic_flags(result, false);
        self.write_operand(bus, dest, result as u16);

        Ok(inst.cycles)
    }

    pub(super) fn exec_daa(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let mut carry = self.flag_get(CpuFlags::C);
        let half_carry = self.flag_get(CpuFlags::H);

        if !self.flag_get(CpuFlags::N) {
            // the upper digit is checked first, on the uncorrected value
            if carry || self.reg_a > 0x99 {
                self.reg_a = self.reg_a.wrapping_add(0x60);
                carry = true;
            }
            if half_carry || self.reg_a & 0xF > 0x9 {
                self.reg_a = self.reg_a.wrapping_add(0x06);
            }
        } else {
            if carry {
                self.reg_a = self.reg_a.wrapping_sub(0x60);
            }
            if half_carry {
                self.reg_a = self.reg_a.wrapping_sub(0x06);
            }
        }

        self.flag_set(CpuFlags::Z, self.reg_a == 0);
        self.flag_set(CpuFlags::H, false);
        self.flag_set(CpuFlags::C, carry);

        Ok(inst.cycles)
    }

    pub(super) fn exec_cpl(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.reg_a = !self.reg_a;

        self.flag_set(CpuFlags::N, true);
        self.flag_set(CpuFlags::H, true);

        Ok(inst.cycles)
    }

    pub(super) fn exec_scf(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.flag_set(CpuFlags::N, false);
        self.flag_set(CpuFlags::H, false);
        self.flag_set(CpuFlags::C, true);

        Ok(inst.cycles)
    }

    pub(super) fn exec_ccf(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.flag_set(CpuFlags::N, false);
        self.flag_set(CpuFlags::H, false);
        self.flag_set(CpuFlags::C, !self.flag_get(CpuFlags::C));

        Ok(inst.cycles)
    }
}

// 16-bit arithmetic
impl Cpu {
    /// `SP + e`, flags come from the unsigned addition of the low byte
    fn sp_add_signed(&mut self, offset: u16) -> u16 {
        let sp = self.reg_sp;

        self.flag_set(CpuFlags::Z, false);
        self.flag_set(CpuFlags::N, false);
        self.flag_set(CpuFlags::H, (sp & 0xF) + (offset & 0xF) > 0xF);
        self.flag_set(CpuFlags::C, (sp & 0xFF) + (offset & 0xFF) > 0xFF);

        sp.wrapping_add(offset)
    }

    pub(super) fn exec_inc16(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let dest = inst.operands.0;
        let result = self.read_operand(bus, dest).wrapping_add(1);
        self.write_operand(bus, dest, result);

        Ok(inst.cycles)
    }

    pub(super) fn exec_dec16(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let dest = inst.operands.0;
        let result = self.read_operand(bus, dest).wrapping_sub(1);
        self.write_operand(bus, dest, result);

        Ok(inst.cycles)
    }

    pub(super) fn exec_add16(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (dest, src) = inst.operands;
        let a = self.read_operand(bus, dest);
        let b = self.read_operand(bus, src);
        let result = a as u32 + b as u32;

        self.flag_set(CpuFlags::N, false);
        self.flag_set(CpuFlags::H, (a & 0xFFF) + (b & 0xFFF) > 0xFFF);
        self.flag_set(CpuFlags::C, result > 0xFFFF);

        self.write_operand(bus, dest, result as u16);
        Ok(inst.cycles)
    }

    pub(super) fn exec_add_sp(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let offset = self.read_operand(bus, inst.operands.1);
        self.reg_sp = self.sp_add_signed(offset);

        Ok(inst.cycles)
    }
}

// jumps, calls and returns
impl Cpu {
    pub(super) fn exec_jp(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (cond, src) = inst.operands;
        let target = self.read_operand(bus, src);

        if self.check_cond(cond) {
            self.reg_pc = target;
            Ok(inst.cycles)
        } else {
            Ok(JP_NOT_TAKEN_CYCLES)
        }
    }

    pub(super) fn exec_jp_hl(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.reg_pc = self.reg_hl_read();
        Ok(inst.cycles)
    }

    pub(super) fn exec_jr(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (cond, src) = inst.operands;
        // already sign extended
        let offset = self.read_operand(bus, src);

        if self.check_cond(cond) {
            self.reg_pc = self.reg_pc.wrapping_add(offset);
            Ok(inst.cycles)
        } else {
            Ok(JR_NOT_TAKEN_CYCLES)
        }
    }

    pub(super) fn exec_call(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (cond, src) = inst.operands;
        let target = self.read_operand(bus, src);

        if self.check_cond(cond) {
            self.push_word_to_stack(bus, self.reg_pc);
            self.reg_pc = target;
            Ok(inst.cycles)
        } else {
            Ok(CALL_NOT_TAKEN_CYCLES)
        }
    }

    pub(super) fn exec_ret(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        if self.check_cond(inst.operands.0) {
            self.reg_pc = self.pop_word_from_stack(&*bus);
            Ok(inst.cycles)
        } else {
            Ok(RET_NOT_TAKEN_CYCLES)
        }
    }

    /// Unlike `EI`, the enable takes effect right away
    pub(super) fn exec_reti(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.reg_pc = self.pop_word_from_stack(&*bus);
        self.ime = true;

        Ok(inst.cycles)
    }

    pub(super) fn exec_rst(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let location = self.read_operand(bus, inst.operands.0);
        self.push_word_to_stack(bus, self.reg_pc);
        self.reg_pc = location;

        Ok(inst.cycles)
    }
}

// rotates, shifts and bit operations
impl Cpu {
    fn set_shift_flags(&mut self, result: u8, carry: bool) {
        self.flag_set(CpuFlags::Z, result == 0);
        self.flag_set(CpuFlags::N, false);
        self.flag_set(CpuFlags::H, false);
        self.flag_set(CpuFlags::C, carry);
    }

    /// Runs `f(value, carry_in) -> (result, carry_out)` on the destination
    /// operand and updates the flags
    fn shift_operand(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
        f: fn(u8, bool) -> (u8, bool),
    ) -> ExecResult {
        let dest = inst.operands.0;
        let value = self.read_operand(bus, dest) as u8;
        let (result, carry) = f(value, self.flag_get(CpuFlags::C));

        self.set_shift_flags(result, carry);
        self.write_operand(bus, dest, result as u16);

        Ok(inst.cycles)
    }

    /// The accumulator rotates always clear `Z`
    fn shift_accumulator(
        &mut self,
        inst: &InstructionDescriptor,
        f: fn(u8, bool) -> (u8, bool),
    ) -> ExecResult {
        let (result, carry) = f(self.reg_a, self.flag_get(CpuFlags::C));

        self.reg_a = result;
        self.set_shift_flags(result, carry);
        self.flag_set(CpuFlags::Z, false);

        Ok(inst.cycles)
    }

    pub(super) fn exec_rlca(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.shift_accumulator(inst, rlc)
    }

    pub(super) fn exec_rla(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.shift_accumulator(inst, rl)
    }

    pub(super) fn exec_rrca(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.shift_accumulator(inst, rrc)
    }

    pub(super) fn exec_rra(
        &mut self,
        _bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.shift_accumulator(inst, rr)
    }

    pub(super) fn exec_rlc(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.shift_operand(bus, inst, rlc)
    }

    pub(super) fn exec_rrc(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.shift_operand(bus, inst, rrc)
    }

    pub(super) fn exec_rl(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.shift_operand(bus, inst, rl)
    }

    pub(super) fn exec_rr(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.shift_operand(bus, inst, rr)
    }

    pub(super) fn exec_sla(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.shift_operand(bus, inst, |value, _| (value << 1, value & 0x80 != 0))
    }

    pub(super) fn exec_sra(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.shift_operand(bus, inst, |value, _| {
            ((value >> 1) | (value & 0x80), value & 1 != 0)
        })
    }

    pub(super) fn exec_srl(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.shift_operand(bus, inst, |value, _| (value >> 1, value & 1 != 0))
    }

    pub(super) fn exec_swap(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        self.shift_operand(bus, inst, |value, _| (value.rotate_left(4), false))
    }

    pub(super) fn exec_bit(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (dest, bit) = inst.operands;
        let bit = self.read_operand(bus, bit);
        let value = self.read_operand(bus, dest);

        self.flag_set(CpuFlags::Z, (value >> bit) & 1 == 0);
        self.flag_set(CpuFlags::N, false);
        self.flag_set(CpuFlags::H, true);

        Ok(inst.cycles)
    }

    pub(super) fn exec_res(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (dest, bit) = inst.operands;
        let bit = self.read_operand(bus, bit);
        let value = self.read_operand(bus, dest);
        self.write_operand(bus, dest, value & !(1 << bit));

        Ok(inst.cycles)
    }

    pub(super) fn exec_set(
        &mut self,
        bus: &mut dyn CpuBusProvider,
        inst: &InstructionDescriptor,
    ) -> ExecResult {
        let (dest, bit) = inst.operands;
        let bit = self.read_operand(bus, bit);
        let value = self.read_operand(bus, dest);
        self.write_operand(bus, dest, value | (1 << bit));

        Ok(inst.cycles)
    }
}

fn rlc(value: u8, _carry: bool) -> (u8, bool) {
    (value.rotate_left(1), value & 0x80 != 0)
}

fn rrc(value: u8, _carry: bool) -> (u8, bool) {
    (value.rotate_right(1), value & 1 != 0)
}

fn rl(value: u8, carry: bool) -> (u8, bool) {
    ((value << 1) | carry as u8, value & 0x80 != 0)
}

fn rr(value: u8, carry: bool) -> (u8, bool) {
    ((value >> 1) | ((carry as u8) << 7), value & 1 != 0)
}
