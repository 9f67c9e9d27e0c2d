//! The two opcode tables of the SM83.
//!
//! Both tables are filled once by [`InstructionTable::build`] and are never
//! modified afterwards. Cycle counts are in T-cycles, for conditional control
//! flow the stored count is the cost of the taken branch, the execution
//! function returns the smaller not taken cost by itself.

use super::cpu::Cpu;
use super::instruction::OperandType::*;
use super::instruction::{ExecFn, InstructionDescriptor, OperandType};
use super::CpuBusProvider;

const PREFIX_OPCODE: u8 = 0xCB;

/// The base and `CB` prefixed instruction tables, owned by the [`Cpu`].
pub struct InstructionTable {
    base: Box<[InstructionDescriptor; 256]>,
    prefixed: Box<[InstructionDescriptor; 256]>,
    missing: Vec<(bool, u8)>,
}

impl InstructionTable {
    pub fn build() -> Self {
        let mut base = TableBuilder::new(false);
        build_base(&mut base);

        let mut prefixed = TableBuilder::new(true);
        build_prefixed(&mut prefixed);

        let mut missing = Vec::new();
        let base = base.finish(&mut missing);
        let prefixed = prefixed.finish(&mut missing);

        for (is_prefixed, opcode) in &missing {
            log::warn!(
                "opcode {}{:02X} has no instruction, using a placeholder",
                if *is_prefixed { "CB " } else { "" },
                opcode
            );
        }

        Self {
            base,
            prefixed,
            missing,
        }
    }

    pub fn base(&self, opcode: u8) -> &InstructionDescriptor {
        &self.base[opcode as usize]
    }

    pub fn prefixed(&self, opcode: u8) -> &InstructionDescriptor {
        &self.prefixed[opcode as usize]
    }

    /// Slots `(is_prefixed, opcode)` that were left with the failing
    /// placeholder, empty for a complete table
    pub fn missing_opcodes(&self) -> &[(bool, u8)] {
        &self.missing
    }

    /// Resolves the instruction at `addr`, following the `CB` prefix
    pub fn resolve<P: CpuBusProvider + ?Sized>(
        &self,
        bus: &P,
        addr: u16,
    ) -> InstructionDescriptor {
        let opcode = bus.read(addr);

        if opcode == PREFIX_OPCODE {
            *self.prefixed(bus.read(addr.wrapping_add(1)))
        } else {
            *self.base(opcode)
        }
    }
}

impl Default for InstructionTable {
    fn default() -> Self {
        Self::build()
    }
}

struct TableBuilder {
    is_prefixed: bool,
    slots: [Option<InstructionDescriptor>; 256],
}

impl TableBuilder {
    fn new(is_prefixed: bool) -> Self {
        Self {
            is_prefixed,
            slots: [None; 256],
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn op(
        &mut self,
        opcode: u8,
        mnemonic: &'static str,
        length: u8,
        cycles: u8,
        affects_flags: bool,
        exec: ExecFn,
        operands: (OperandType, OperandType),
    ) {
        let slot = &mut self.slots[opcode as usize];
        assert!(slot.is_none(), "opcode {:02X} defined twice", opcode);

        *slot = Some(InstructionDescriptor::new(
            opcode,
            self.is_prefixed,
            mnemonic,
            length,
            cycles,
            affects_flags,
            exec,
            operands,
        ));
    }

    fn finish(self, missing: &mut Vec<(bool, u8)>) -> Box<[InstructionDescriptor; 256]> {
        let is_prefixed = self.is_prefixed;

        Box::new(std::array::from_fn(|i| {
            self.slots[i].unwrap_or_else(|| {
                missing.push((is_prefixed, i as u8));
                InstructionDescriptor::unimplemented(i as u8, is_prefixed)
            })
        }))
    }
}

fn build_base(t: &mut TableBuilder) {
    t.op(0x00, "NOP", 1, 4, false, Cpu::exec_nop, (Implied, Implied));
    t.op(0x01, "LD BC,nn", 3, 12, false, Cpu::exec_ld, (RegBC, Imm16));
    t.op(0x02, "LD (BC),A", 1, 8, false, Cpu::exec_ld, (AddrBC, RegA));
    t.op(0x03, "INC BC", 1, 8, false, Cpu::exec_inc16, (RegBC, Implied));
    t.op(0x04, "INC B", 1, 4, true, Cpu::exec_inc, (RegB, Implied));
    t.op(0x05, "DEC B", 1, 4, true, Cpu::exec_dec, (RegB, Implied));
    t.op(0x06, "LD B,n", 2, 8, false, Cpu::exec_ld, (RegB, Imm8));
    t.op(0x07, "RLCA", 1, 4, true, Cpu::exec_rlca, (Implied, Implied));
    t.op(0x08, "LD (nn),SP", 3, 20, false, Cpu::exec_ld, (Addr16Val16, RegSP));
    t.op(0x09, "ADD HL,BC", 1, 8, true, Cpu::exec_add16, (RegHL, RegBC));
    t.op(0x0A, "LD A,(BC)", 1, 8, false, Cpu::exec_ld, (RegA, AddrBC));
    t.op(0x0B, "DEC BC", 1, 8, false, Cpu::exec_dec16, (RegBC, Implied));
    t.op(0x0C, "INC C", 1, 4, true, Cpu::exec_inc, (RegC, Implied));
    t.op(0x0D, "DEC C", 1, 4, true, Cpu::exec_dec, (RegC, Implied));
    t.op(0x0E, "LD C,n", 2, 8, false, Cpu::exec_ld, (RegC, Imm8));
    t.op(0x0F, "RRCA", 1, 4, true, Cpu::exec_rrca, (Implied, Implied));

    t.op(0x10, "STOP", 2, 4, false, Cpu::exec_stop, (Implied, Implied));
    t.op(0x11, "LD DE,nn", 3, 12, false, Cpu::exec_ld, (RegDE, Imm16));
    t.op(0x12, "LD (DE),A", 1, 8, false, Cpu::exec_ld, (AddrDE, RegA));
    t.op(0x13, "INC DE", 1, 8, false, Cpu::exec_inc16, (RegDE, Implied));
    t.op(0x14, "INC D", 1, 4, true, Cpu::exec_inc, (RegD, Implied));
    t.op(0x15, "DEC D", 1, 4, true, Cpu::exec_dec, (RegD, Implied));
    t.op(0x16, "LD D,n", 2, 8, false, Cpu::exec_ld, (RegD, Imm8));
    t.op(0x17, "RLA", 1, 4, true, Cpu::exec_rla, (Implied, Implied));
    t.op(0x18, "JR e", 2, 12, false, Cpu::exec_jr, (Implied, Imm8Signed));
    t.op(0x19, "ADD HL,DE", 1, 8, true, Cpu::exec_add16, (RegHL, RegDE));
    t.op(0x1A, "LD A,(DE)", 1, 8, false, Cpu::exec_ld, (RegA, AddrDE));
    t.op(0x1B, "DEC DE", 1, 8, false, Cpu::exec_dec16, (RegDE, Implied));
    t.op(0x1C, "INC E", 1, 4, true, Cpu::exec_inc, (RegE, Implied));
    t.op(0x1D, "DEC E", 1, 4, true, Cpu::exec_dec, (RegE, Implied));
    t.op(0x1E, "LD E,n", 2, 8, false, Cpu::exec_ld, (RegE, Imm8));
    t.op(0x1F, "RRA", 1, 4, true, Cpu::exec_rra, (Implied, Implied));

    t.op(0x20, "JR NZ,e", 2, 12, false, Cpu::exec_jr, (CondNZ, Imm8Signed));
    t.op(0x21, "LD HL,nn", 3, 12, false, Cpu::exec_ld, (RegHL, Imm16));
    t.op(0x22, "LD (HL+),A", 1, 8, false, Cpu::exec_ld, (AddrHLInc, RegA));
    t.op(0x23, "INC HL", 1, 8, false, Cpu::exec_inc16, (RegHL, Implied));
    t.op(0x24, "INC H", 1, 4, true, Cpu::exec_inc, (RegH, Implied));
    t.op(0x25, "DEC H", 1, 4, true, Cpu::exec_dec, (RegH, Implied));
    t.op(0x26, "LD H,n", 2, 8, false, Cpu::exec_ld, (RegH, Imm8));
    t.op(0x27, "DAA", 1, 4, true, Cpu::exec_daa, (Implied, Implied));
    t.op(0x28, "JR Z,e", 2, 12, false, Cpu::exec_jr, (CondZ, Imm8Signed));
    t.op(0x29, "ADD HL,HL", 1, 8, true, Cpu::exec_add16, (RegHL, RegHL));
    t.op(0x2A, "LD A,(HL+)", 1, 8, false, Cpu::exec_ld, (RegA, AddrHLInc));
    t.op(0x2B, "DEC HL", 1, 8, false, Cpu::exec_dec16, (RegHL, Implied));
    t.op(0x2C, "INC L", 1, 4, true, Cpu::exec_inc, (RegL, Implied));
    t.op(0x2D, "DEC L", 1, 4, true, Cpu::exec_dec, (RegL, Implied));
    t.op(0x2E, "LD L,n", 2, 8, false, Cpu::exec_ld, (RegL, Imm8));
    t.op(0x2F, "CPL", 1, 4, true, Cpu::exec_cpl, (Implied, Implied));

    t.op(0x30, "JR NC,e", 2, 12, false, Cpu::exec_jr, (CondNC, Imm8Signed));
    t.op(0x31, "LD SP,nn", 3, 12, false, Cpu::exec_ld, (RegSP, Imm16));
    t.op(0x32, "LD (HL-),A", 1, 8, false, Cpu::exec_ld, (AddrHLDec, RegA));
    t.op(0x33, "INC SP", 1, 8, false, Cpu::exec_inc16, (RegSP, Implied));
    t.op(0x34, "INC (HL)", 1, 12, true, Cpu::exec_inc, (AddrHL, Implied));
    t.op(0x35, "DEC (HL)", 1, 12, true, Cpu::exec_dec, (AddrHL, Implied));
    t.op(0x36, "LD (HL),n", 2, 12, false, Cpu::exec_ld, (AddrHL, Imm8));
    t.op(0x37, "SCF", 1, 4, true, Cpu::exec_scf, (Implied, Implied));
    t.op(0x38, "JR C,e", 2, 12, false, Cpu::exec_jr, (CondC, Imm8Signed));
    t.op(0x39, "ADD HL,SP", 1, 8, true, Cpu::exec_add16, (RegHL, RegSP));
    t.op(0x3A, "LD A,(HL-)", 1, 8, false, Cpu::exec_ld, (RegA, AddrHLDec));
    t.op(0x3B, "DEC SP", 1, 8, false, Cpu::exec_dec16, (RegSP, Implied));
    t.op(0x3C, "INC A", 1, 4, true, Cpu::exec_inc, (RegA, Implied));
    t.op(0x3D, "DEC A", 1, 4, true, Cpu::exec_dec, (RegA, Implied));
    t.op(0x3E, "LD A,n", 2, 8, false, Cpu::exec_ld, (RegA, Imm8));
    t.op(0x3F, "CCF", 1, 4, true, Cpu::exec_ccf, (Implied, Implied));

    t.op(0x40, "LD B,B", 1, 4, false, Cpu::exec_ld, (RegB, RegB));
    t.op(0x41, "LD B,C", 1, 4, false, Cpu::exec_ld, (RegB, RegC));
    t.op(0x42, "LD B,D", 1, 4, false, Cpu::exec_ld, (RegB, RegD));
    t.op(0x43, "LD B,E", 1, 4, false, Cpu::exec_ld, (RegB, RegE));
    t.op(0x44, "LD B,H", 1, 4, false, Cpu::exec_ld, (RegB, RegH));
    t.op(0x45, "LD B,L", 1, 4, false, Cpu::exec_ld, (RegB, RegL));
    t.op(0x46, "LD B,(HL)", 1, 8, false, Cpu::exec_ld, (RegB, AddrHL));
    t.op(0x47, "LD B,A", 1, 4, false, Cpu::exec_ld, (RegB, RegA));
    t.op(0x48, "LD C,B", 1, 4, false, Cpu::exec_ld, (RegC, RegB));
    t.op(0x49, "LD C,C", 1, 4, false, Cpu::exec_ld, (RegC, RegC));
    t.op(0x4A, "LD C,D", 1, 4, false, Cpu::exec_ld, (RegC, RegD));
    t.op(0x4B, "LD C,E", 1, 4, false, Cpu::exec_ld, (RegC, RegE));
    t.op(0x4C, "LD C,H", 1, 4, false, Cpu::exec_ld, (RegC, RegH));
    t.op(0x4D, "LD C,L", 1, 4, false, Cpu::exec_ld, (RegC, RegL));
    t.op(0x4E, "LD C,(HL)", 1, 8, false, Cpu::exec_ld, (RegC, AddrHL));
    t.op(0x4F, "LD C,A", 1, 4, false, Cpu::exec_ld, (RegC, RegA));

    t.op(0x50, "LD D,B", 1, 4, false, Cpu::exec_ld, (RegD, RegB));
    t.op(0x51, "LD D,C", 1, 4, false, Cpu::exec_ld, (RegD, RegC));
    t.op(0x52, "LD D,D", 1, 4, false, Cpu::exec_ld, (RegD, RegD));
    t.op(0x53, "LD D,E", 1, 4, false, Cpu::exec_ld, (RegD, RegE));
    t.op(0x54, "LD D,H", 1, 4, false, Cpu::exec_ld, (RegD, RegH));
    t.op(0x55, "LD D,L", 1, 4, false, Cpu::exec_ld, (RegD, RegL));
    t.op(0x56, "LD D,(HL)", 1, 8, false, Cpu::exec_ld, (RegD, AddrHL));
    t.op(0x57, "LD D,A", 1, 4, false, Cpu::exec_ld, (RegD, RegA));
    t.op(0x58, "LD E,B", 1, 4, false, Cpu::exec_ld, (RegE, RegB));
    t.op(0x59, "LD E,C", 1, 4, false, Cpu::exec_ld, (RegE, RegC));
    t.op(0x5A, "LD E,D", 1, 4, false, Cpu::exec_ld, (RegE, RegD));
    t.op(0x5B, "LD E,E", 1, 4, false, Cpu::exec_ld, (RegE, RegE));
    t.op(0x5C, "LD E,H", 1, 4, false, Cpu::exec_ld, (RegE, RegH));
    t.op(0x5D, "LD E,L", 1, 4, false, Cpu::exec_ld, (RegE, RegL));
    t.op(0x5E, "LD E,(HL)", 1, 8, false, Cpu::exec_ld, (RegE, AddrHL));
    t.op(0x5F, "LD E,A", 1, 4, false, Cpu::exec_ld, (RegE, RegA));

    t.op(0x60, "LD H,B", 1, 4, false, Cpu::exec_ld, (RegH, RegB));
    t.op(0x61, "LD H,C", 1, 4, false, Cpu::exec_ld, (RegH, RegC));
    t.op(0x62, "LD H,D", 1, 4, false, Cpu::exec_ld, (RegH, RegD));
    t.op(0x63, "LD H,E", 1, 4, false, Cpu::exec_ld, (RegH, RegE));
    t.op(0x64, "LD H,H", 1, 4, false, Cpu::exec_ld, (RegH, RegH));
    t.op(0x65, "LD H,L", 1, 4, false, Cpu::exec_ld, (RegH, RegL));
    t.op(0x66, "LD H,(HL)", 1, 8, false, Cpu::exec_ld, (RegH, AddrHL));
    t.op(0x67, "LD H,A", 1, 4, false, Cpu::exec_ld, (RegH, RegA));
    t.op(0x68, "LD L,B", 1, 4, false, Cpu::exec_ld, (RegL, RegB));
    t.op(0x69, "LD L,C", 1, 4, false, Cpu::exec_ld, (RegL, RegC));
    t.op(0x6A, "LD L,D", 1, 4, false, Cpu::exec_ld, (RegL, RegD));
    t.op(0x6B, "LD L,E", 1, 4, false, Cpu::exec_ld, (RegL, RegE));
    t.op(0x6C, "LD L,H", 1, 4, false, Cpu::exec_ld, (RegL, RegH));
    t.op(0x6D, "LD L,L", 1, 4, false, Cpu::exec_ld, (RegL, RegL));
    t.op(0x6E, "LD L,(HL)", 1, 8, false, Cpu::exec_ld, (RegL, AddrHL));
    t.op(0x6F, "LD L,A", 1, 4, false, Cpu::exec_ld, (RegL, RegA));

    t.op(0x70, "LD (HL),B", 1, 8, false, Cpu::exec_ld, (AddrHL, RegB));
    t.op(0x71, "LD (HL),C", 1, 8, false, Cpu::exec_ld, (AddrHL, RegC));
    t.op(0x72, "LD (HL),D", 1, 8, false, Cpu::exec_ld, (AddrHL, RegD));
    t.op(0x73, "LD (HL),E", 1, 8, false, Cpu::exec_ld, (AddrHL, RegE));
    t.op(0x74, "LD (HL),H", 1, 8, false, Cpu::exec_ld, (AddrHL, RegH));
    t.op(0x75, "LD (HL),L", 1, 8, false, Cpu::exec_ld, (AddrHL, RegL));
    t.op(0x76, "HALT", 1, 4, false, Cpu::exec_halt, (Implied, Implied));
    t.op(0x77, "LD (HL),A", 1, 8, false, Cpu::exec_ld, (AddrHL, RegA));
    t.op(0x78, "LD A,B", 1, 4, false, Cpu::exec_ld, (RegA, RegB));
    t.op(0x79, "LD A,C", 1, 4, false, Cpu::exec_ld, (RegA, RegC));
    t.op(0x7A, "LD A,D", 1, 4, false, Cpu::exec_ld, (RegA, RegD));
    t.op(0x7B, "LD A,E", 1, 4, false, Cpu::exec_ld, (RegA, RegE));
    t.op(0x7C, "LD A,H", 1, 4, false, Cpu::exec_ld, (RegA, RegH));
    t.op(0x7D, "LD A,L", 1, 4, false, Cpu::exec_ld, (RegA, RegL));
    t.op(0x7E, "LD A,(HL)", 1, 8, false, Cpu::exec_ld, (RegA, AddrHL));
    t.op(0x7F, "LD A,A", 1, 4, false, Cpu::exec_ld, (RegA, RegA));

    t.op(0x80, "ADD A,B", 1, 4, true, Cpu::exec_add, (RegA, RegB));
    t.op(0x81, "ADD A,C", 1, 4, true, Cpu::exec_add, (RegA, RegC));
    t.op(0x82, "ADD A,D", 1, 4, true, Cpu::exec_add, (RegA, RegD));
    t.op(0x83, "ADD A,E", 1, 4, true, Cpu::exec_add, (RegA, RegE));
    t.op(0x84, "ADD A,H", 1, 4, true, Cpu::exec_add, (RegA, RegH));
    t.op(0x85, "ADD A,L", 1, 4, true, Cpu::exec_add, (RegA, RegL));
    t.op(0x86, "ADD A,(HL)", 1, 8, true, Cpu::exec_add, (RegA, AddrHL));
    t.op(0x87, "ADD A,A", 1, 4, true, Cpu::exec_add, (RegA, RegA));
    t.op(0x88, "ADC A,B", 1, 4, true, Cpu::exec_adc, (RegA, RegB));
    t.op(0x89, "ADC A,C", 1, 4, true, Cpu::exec_adc, (RegA, RegC));
    t.op(0x8A, "ADC A,D", 1, 4, true, Cpu::exec_adc, (RegA, RegD));
    t.op(0x8B, "ADC A,E", 1, 4, true, Cpu::exec_adc, (RegA, RegE));
    t.op(0x8C, "ADC A,H", 1, 4, true, Cpu::exec_adc, (RegA, RegH));
    t.op(0x8D, "ADC A,L", 1, 4, true, Cpu::exec_adc, (RegA, RegL));
    t.op(0x8E, "ADC A,(HL)", 1, 8, true, Cpu::exec_adc, (RegA, AddrHL));
    t.op(0x8F, "ADC A,A", 1, 4, true, Cpu::exec_adc, (RegA, RegA));

    t.op(0x90, "SUB B", 1, 4, true, Cpu::exec_sub, (RegA, RegB));
    t.op(0x91, "SUB C", 1, 4, true, Cpu::exec_sub, (RegA, RegC));
    t.op(0x92, "SUB D", 1, 4, true, Cpu::exec_sub, (RegA, RegD));
    t.op(0x93, "SUB E", 1, 4, true, Cpu::exec_sub, (RegA, RegE));
    t.op(0x94, "SUB H", 1, 4, true, Cpu::exec_sub, (RegA, RegH));
    t.op(0x95, "SUB L", 1, 4, true, Cpu::exec_sub, (RegA, RegL));
    t.op(0x96, "SUB (HL)", 1, 8, true, Cpu::exec_sub, (RegA, AddrHL));
    t.op(0x97, "SUB A", 1, 4, true, Cpu::exec_sub, (RegA, RegA));
    t.op(0x98, "SBC A,B", 1, 4, true, Cpu::exec_sbc, (RegA, RegB));
    t.op(0x99, "SBC A,C", 1, 4, true, Cpu::exec_sbc, (RegA, RegC));
    t.op(0x9A, "SBC A,D", 1, 4, true, Cpu::exec_sbc, (RegA, RegD));
    t.op(0x9B, "SBC A,E", 1, 4, true, Cpu::exec_sbc, (RegA, RegE));
    t.op(0x9C, "SBC A,H", 1, 4, true, Cpu::exec_sbc, (RegA, RegH));
    t.op(0x9D, "SBC A,L", 1, 4, true, Cpu::exec_sbc, (RegA, RegL));
    t.op(0x9E, "SBC A,(HL)", 1, 8, true, Cpu::exec_sbc, (RegA, AddrHL));
    t.op(0x9F, "SBC A,A", 1, 4, true, Cpu::exec_sbc, (RegA, RegA));

    t.op(0xA0, "AND B", 1, 4, true, Cpu::exec_and, (RegA, RegB));
    t.op(0xA1, "AND C", 1, 4, true, Cpu::exec_and, (RegA, RegC));
    t.op(0xA2, "AND D", 1, 4, true, Cpu::exec_and, (RegA, RegD));
    t.op(0xA3, "AND E", 1, 4, true, Cpu::exec_and, (RegA, RegE));
    t.op(0xA4, "AND H", 1, 4, true, Cpu::exec_and, (RegA, RegH));
    t.op(0xA5, "AND L", 1, 4, true, Cpu::exec_and, (RegA, RegL));
    t.op(0xA6, "AND (HL)", 1, 8, true, Cpu::exec_and, (RegA, AddrHL));
    t.op(0xA7, "AND A", 1, 4, true, Cpu::exec_and, (RegA, RegA));
    t.op(0xA8, "XOR B", 1, 4, true, Cpu::exec_xor, (RegA, RegB));
    t.op(0xA9, "XOR C", 1, 4, true, Cpu::exec_xor, (RegA, RegC));
    t.op(0xAA, "XOR D", 1, 4, true, Cpu::exec_xor, (RegA, RegD));
    t.op(0xAB, "XOR E", 1, 4, true, Cpu::exec_xor, (RegA, RegE));
    t.op(0xAC, "XOR H", 1, 4, true, Cpu::exec_xor, (RegA, RegH));
    t.op(0xAD, "XOR L", 1, 4, true, Cpu::exec_xor, (RegA, RegL));
    t.op(0xAE, "XOR (HL)", 1, 8, true, Cpu::exec_xor, (RegA, AddrHL));
    t.op(0xAF, "XOR A", 1, 4, true, Cpu::exec_xor, (RegA, RegA));

    t.op(0xB0, "OR B", 1, 4, true, Cpu::exec_or, (RegA, RegB));
    t.op(0xB1, "OR C", 1, 4, true, Cpu::exec_or, (RegA, RegC));
    t.op(0xB2, "OR D", 1, 4, true, Cpu::exec_or, (RegA, RegD));
    t.op(0xB3, "OR E", 1, 4, true, Cpu::exec_or, (RegA, RegE));
    t.op(0xB4, "OR H", 1, 4, true, Cpu::exec_or, (RegA, RegH));
    t.op(0xB5, "OR L", 1, 4, true, Cpu::exec_or, (RegA, RegL));
    t.op(0xB6, "OR (HL)", 1, 8, true, Cpu::exec_or, (RegA, AddrHL));
    t.op(0xB7, "OR A", 1, 4, true, Cpu::exec_or, (RegA, RegA));
    t.op(0xB8, "CP B", 1, 4, true, Cpu::exec_cp, (RegA, RegB));
    t.op(0xB9, "CP C", 1, 4, true, Cpu::exec_cp, (RegA, RegC));
    t.op(0xBA, "CP D", 1, 4, true, Cpu::exec_cp, (RegA, RegD));
    t.op(0xBB, "CP E", 1, 4, true, Cpu::exec_cp, (RegA, RegE));
    t.op(0xBC, "CP H", 1, 4, true, Cpu::exec_cp, (RegA, RegH));
    t.op(0xBD, "CP L", 1, 4, true, Cpu::exec_cp, (RegA, RegL));
    t.op(0xBE, "CP (HL)", 1, 8, true, Cpu::exec_cp, (RegA, AddrHL));
    t.op(0xBF, "CP A", 1, 4, true, Cpu::exec_cp, (RegA, RegA));

    t.op(0xC0, "RET NZ", 1, 20, false, Cpu::exec_ret, (CondNZ, Implied));
    t.op(0xC1, "POP BC", 1, 12, false, Cpu::exec_pop, (RegBC, Implied));
    t.op(0xC2, "JP NZ,nn", 3, 16, false, Cpu::exec_jp, (CondNZ, Imm16));
    t.op(0xC3, "JP nn", 3, 16, false, Cpu::exec_jp, (Implied, Imm16));
    t.op(0xC4, "CALL NZ,nn", 3, 24, false, Cpu::exec_call, (CondNZ, Imm16));
    t.op(0xC5, "PUSH BC", 1, 16, false, Cpu::exec_push, (Implied, RegBC));
    t.op(0xC6, "ADD A,n", 2, 8, true, Cpu::exec_add, (RegA, Imm8));
    t.op(0xC7, "RST 00H", 1, 16, false, Cpu::exec_rst, (Arg(0x00), Implied));
    t.op(0xC8, "RET Z", 1, 20, false, Cpu::exec_ret, (CondZ, Implied));
    t.op(0xC9, "RET", 1, 16, false, Cpu::exec_ret, (Implied, Implied));
    t.op(0xCA, "JP Z,nn", 3, 16, false, Cpu::exec_jp, (CondZ, Imm16));
    t.op(0xCB, "PREFIX CB", 1, 4, false, Cpu::exec_prefix, (Implied, Implied));
    t.op(0xCC, "CALL Z,nn", 3, 24, false, Cpu::exec_call, (CondZ, Imm16));
    t.op(0xCD, "CALL nn", 3, 24, false, Cpu::exec_call, (Implied, Imm16));
    t.op(0xCE, "ADC A,n", 2, 8, true, Cpu::exec_adc, (RegA, Imm8));
    t.op(0xCF, "RST 08H", 1, 16, false, Cpu::exec_rst, (Arg(0x08), Implied));

    t.op(0xD0, "RET NC", 1, 20, false, Cpu::exec_ret, (CondNC, Implied));
    t.op(0xD1, "POP DE", 1, 12, false, Cpu::exec_pop, (RegDE, Implied));
    t.op(0xD2, "JP NC,nn", 3, 16, false, Cpu::exec_jp, (CondNC, Imm16));
    t.op(0xD3, "ILLEGAL", 1, 4, false, Cpu::exec_illegal, (Implied, Implied));
    t.op(0xD4, "CALL NC,nn", 3, 24, false, Cpu::exec_call, (CondNC, Imm16));
    t.op(0xD5, "PUSH DE", 1, 16, false, Cpu::exec_push, (Implied, RegDE));
    t.op(0xD6, "SUB n", 2, 8, true, Cpu::exec_sub, (RegA, Imm8));
    t.op(0xD7, "RST 10H", 1, 16, false, Cpu::exec_rst, (Arg(0x10), Implied));
    t.op(0xD8, "RET C", 1, 20, false, Cpu::exec_ret, (CondC, Implied));
    t.op(0xD9, "RETI", 1, 16, false, Cpu::exec_reti, (Implied, Implied));
    t.op(0xDA, "JP C,nn", 3, 16, false, Cpu::exec_jp, (CondC, Imm16));
    t.op(0xDB, "ILLEGAL", 1, 4, false, Cpu::exec_illegal, (Implied, Implied));
    t.op(0xDC, "CALL C,nn", 3, 24, false, Cpu::exec_call, (CondC, Imm16));
    t.op(0xDD, "ILLEGAL", 1, 4, false, Cpu::exec_illegal, (Implied, Implied));
    t.op(0xDE, "SBC A,n", 2, 8, true, Cpu::exec_sbc, (RegA, Imm8));
    t.op(0xDF, "RST 18H", 1, 16, false, Cpu::exec_rst, (Arg(0x18), Implied));

    t.op(0xE0, "LDH (n),A", 2, 12, false, Cpu::exec_ld, (HighAddr8, RegA));
    t.op(0xE1, "POP HL", 1, 12, false, Cpu::exec_pop, (RegHL, Implied));
    t.op(0xE2, "LD (C),A", 1, 8, false, Cpu::exec_ld, (HighAddrC, RegA));
    t.op(0xE3, "ILLEGAL", 1, 4, false, Cpu::exec_illegal, (Implied, Implied));
    t.op(0xE4, "ILLEGAL", 1, 4, false, Cpu::exec_illegal, (Implied, Implied));
    t.op(0xE5, "PUSH HL", 1, 16, false, Cpu::exec_push, (Implied, RegHL));
    t.op(0xE6, "AND n", 2, 8, true, Cpu::exec_and, (RegA, Imm8));
    t.op(0xE7, "RST 20H", 1, 16, false, Cpu::exec_rst, (Arg(0x20), Implied));
    t.op(0xE8, "ADD SP,e", 2, 16, true, Cpu::exec_add_sp, (RegSP, Imm8Signed));
    t.op(0xE9, "JP HL", 1, 4, false, Cpu::exec_jp_hl, (Implied, Implied));
    t.op(0xEA, "LD (nn),A", 3, 16, false, Cpu::exec_ld, (Addr16, RegA));
    t.op(0xEB, "ILLEGAL", 1, 4, false, Cpu::exec_illegal, (Implied, Implied));
    t.op(0xEC, "ILLEGAL", 1, 4, false, Cpu::exec_illegal, (Implied, Implied));
    t.op(0xED, "ILLEGAL", 1, 4, false, Cpu::exec_illegal, (Implied, Implied));
    t.op(0xEE, "XOR n", 2, 8, true, Cpu::exec_xor, (RegA, Imm8));
    t.op(0xEF, "RST 28H", 1, 16, false, Cpu::exec_rst, (Arg(0x28), Implied));

    t.op(0xF0, "LDH A,(n)", 2, 12, false, Cpu::exec_ld, (RegA, HighAddr8));
    t.op(0xF1, "POP AF", 1, 12, true, Cpu::exec_pop, (RegAF, Implied));
    t.op(0xF2, "LD A,(C)", 1, 8, false, Cpu::exec_ld, (RegA, HighAddrC));
    t.op(0xF3, "DI", 1, 4, false, Cpu::exec_di, (Implied, Implied));
    t.op(0xF4, "ILLEGAL", 1, 4, false, Cpu::exec_illegal, (Implied, Implied));
    t.op(0xF5, "PUSH AF", 1, 16, false, Cpu::exec_push, (Implied, RegAF));
    t.op(0xF6, "OR n", 2, 8, true, Cpu::exec_or, (RegA, Imm8));
    t.op(0xF7, "RST 30H", 1, 16, false, Cpu::exec_rst, (Arg(0x30), Implied));
    t.op(0xF8, "LD HL,SP+e", 2, 12, true, Cpu::exec_ld_hl_sp, (RegHL, Imm8Signed));
    t.op(0xF9, "LD SP,HL", 1, 8, false, Cpu::exec_ld, (RegSP, RegHL));
    t.op(0xFA, "LD A,(nn)", 3, 16, false, Cpu::exec_ld, (RegA, Addr16));
    t.op(0xFB, "EI", 1, 4, false, Cpu::exec_ei, (Implied, Implied));
    t.op(0xFC, "ILLEGAL", 1, 4, false, Cpu::exec_illegal, (Implied, Implied));
    t.op(0xFD, "ILLEGAL", 1, 4, false, Cpu::exec_illegal, (Implied, Implied));
    t.op(0xFE, "CP n", 2, 8, true, Cpu::exec_cp, (RegA, Imm8));
    t.op(0xFF, "RST 38H", 1, 16, false, Cpu::exec_rst, (Arg(0x38), Implied));
}

fn build_prefixed(t: &mut TableBuilder) {
    t.op(0x00, "RLC B", 2, 8, true, Cpu::exec_rlc, (RegB, Implied));
    t.op(0x01, "RLC C", 2, 8, true, Cpu::exec_rlc, (RegC, Implied));
    t.op(0x02, "RLC D", 2, 8, true, Cpu::exec_rlc, (RegD, Implied));
    t.op(0x03, "RLC E", 2, 8, true, Cpu::exec_rlc, (RegE, Implied));
    t.op(0x04, "RLC H", 2, 8, true, Cpu::exec_rlc, (RegH, Implied));
    t.op(0x05, "RLC L", 2, 8, true, Cpu::exec_rlc, (RegL, Implied));
    t.op(0x06, "RLC (HL)", 2, 16, true, Cpu::exec_rlc, (AddrHL, Implied));
    t.op(0x07, "RLC A", 2, 8, true, Cpu::exec_rlc, (RegA, Implied));

    t.op(0x08, "RRC B", 2, 8, true, Cpu::exec_rrc, (RegB, Implied));
    t.op(0x09, "RRC C", 2, 8, true, Cpu::exec_rrc, (RegC, Implied));
    t.op(0x0A, "RRC D", 2, 8, true, Cpu::exec_rrc, (RegD, Implied));
    t.op(0x0B, "RRC E", 2, 8, true, Cpu::exec_rrc, (RegE, Implied));
    t.op(0x0C, "RRC H", 2, 8, true, Cpu::exec_rrc, (RegH, Implied));
    t.op(0x0D, "RRC L", 2, 8, true, Cpu::exec_rrc, (RegL, Implied));
    t.op(0x0E, "RRC (HL)", 2, 16, true, Cpu::exec_rrc, (AddrHL, Implied));
    t.op(0x0F, "RRC A", 2, 8, true, Cpu::exec_rrc, (RegA, Implied));

    t.op(0x10, "RL B", 2, 8, true, Cpu::exec_rl, (RegB, Implied));
    t.op(0x11, "RL C", 2, 8, true, Cpu::exec_rl, (RegC, Implied));
    t.op(0x12, "RL D", 2, 8, true, Cpu::exec_rl, (RegD, Implied));
    t.op(0x13, "RL E", 2, 8, true, Cpu::exec_rl, (RegE, Implied));
    t.op(0x14, "RL H", 2, 8, true, Cpu::exec_rl, (RegH, Implied));
    t.op(0x15, "RL L", 2, 8, true, Cpu::exec_rl, (RegL, Implied));
    t.op(0x16, "RL (HL)", 2, 16, true, Cpu::exec_rl, (AddrHL, Implied));
    t.op(0x17, "RL A", 2, 8, true, Cpu::exec_rl, (RegA, Implied));

    t.op(0x18, "RR B", 2, 8, true, Cpu::exec_rr, (RegB, Implied));
    t.op(0x19, "RR C", 2, 8, true, Cpu::exec_rr, (RegC, Implied));
    t.op(0x1A, "RR D", 2, 8, true, Cpu::exec_rr, (RegD, Implied));
    t.op(0x1B, "RR E", 2, 8, true, Cpu::exec_rr, (RegE, Implied));
    t.op(0x1C, "RR H", 2, 8, true, Cpu::exec_rr, (RegH, Implied));
    t.op(0x1D, "RR L", 2, 8, true, Cpu::exec_rr, (RegL, Implied));
    t.op(0x1E, "RR (HL)", 2, 16, true, Cpu::exec_rr, (AddrHL, Implied));
    t.op(0x1F, "RR A", 2, 8, true, Cpu::exec_rr, (RegA, Implied));

    t.op(0x20, "SLA B", 2, 8, true, Cpu::exec_sla, (RegB, Implied));
    t.op(0x21, "SLA C", 2, 8, true, Cpu::exec_sla, (RegC, Implied));
    t.op(0x22, "SLA D", 2, 8, true, Cpu::exec_sla, (RegD, Implied));
    t.op(0x23, "SLA E", 2, 8, true, Cpu::exec_sla, (RegE, Implied));
    t.op(0x24, "SLA H", 2, 8, true, Cpu::exec_sla, (RegH, Implied));
    t.op(0x25, "SLA L", 2, 8, true, Cpu::exec_sla, (RegL, Implied));
    t.op(0x26, "SLA (HL)", 2, 16, true, Cpu::exec_sla, (AddrHL, Implied));
    t.op(0x27, "SLA A", 2, 8, true, Cpu::exec_sla, (RegA, Implied));

    t.op(0x28, "SRA B", 2, 8, true, Cpu::exec_sra, (RegB, Implied));
    t.op(0x29, "SRA C", 2, 8, true, Cpu::exec_sra, (RegC, Implied));
    t.op(0x2A, "SRA D", 2, 8, true, Cpu::exec_sra, (RegD, Implied));
    t.op(0x2B, "SRA E", 2, 8, true, Cpu::exec_sra, (RegE, Implied));
    t.op(0x2C, "SRA H", 2, 8, true, Cpu::exec_sra, (RegH, Implied));
    t.op(0x2D, "SRA L", 2, 8, true, Cpu::exec_sra, (RegL, Implied));
    t.op(0x2E, "SRA (HL)", 2, 16, true, Cpu::exec_sra, (AddrHL, Implied));
    t.op(0x2F, "SRA A", 2, 8, true, Cpu::exec_sra, (RegA, Implied));

    t.op(0x30, "SWAP B", 2, 8, true, Cpu::exec_swap, (RegB, Implied));
    t.op(0x31, "SWAP C", 2, 8, true, Cpu::exec_swap, (RegC, Implied));
    t.op(0x32, "SWAP D", 2, 8, true, Cpu::exec_swap, (RegD, Implied));
    t.op(0x33, "SWAP E", 2, 8, true, Cpu::exec_swap, (RegE, Implied));
    t.op(0x34, "SWAP H", 2, 8, true, Cpu::exec_swap, (RegH, Implied));
    t.op(0x35, "SWAP L", 2, 8, true, Cpu::exec_swap, (RegL, Implied));
    t.op(0x36, "SWAP (HL)", 2, 16, true, Cpu::exec_swap, (AddrHL, Implied));
    t.op(0x37, "SWAP A", 2, 8, true, Cpu::exec_swap, (RegA, Implied));

    t.op(0x38, "SRL B", 2, 8, true, Cpu::exec_srl, (RegB, Implied));
    t.op(0x39, "SRL C", 2, 8, true, Cpu::exec_srl, (RegC, Implied));
    t.op(0x3A, "SRL D", 2, 8, true, Cpu::exec_srl, (RegD, Implied));
    t.op(0x3B, "SRL E", 2, 8, true, Cpu::exec_srl, (RegE, Implied));
    t.op(0x3C, "SRL H", 2, 8, true, Cpu::exec_srl, (RegH, Implied));
    t.op(0x3D, "SRL L", 2, 8, true, Cpu::exec_srl, (RegL, Implied));
    t.op(0x3E, "SRL (HL)", 2, 16, true, Cpu::exec_srl, (AddrHL, Implied));
    t.op(0x3F, "SRL A", 2, 8, true, Cpu::exec_srl, (RegA, Implied));

    t.op(0x40, "BIT 0,B", 2, 8, true, Cpu::exec_bit, (RegB, Arg(0)));
    t.op(0x41, "BIT 0,C", 2, 8, true, Cpu::exec_bit, (RegC, Arg(0)));
    t.op(0x42, "BIT 0,D", 2, 8, true, Cpu::exec_bit, (RegD, Arg(0)));
    t.op(0x43, "BIT 0,E", 2, 8, true, Cpu::exec_bit, (RegE, Arg(0)));
    t.op(0x44, "BIT 0,H", 2, 8, true, Cpu::exec_bit, (RegH, Arg(0)));
    t.op(0x45, "BIT 0,L", 2, 8, true, Cpu::exec_bit, (RegL, Arg(0)));
    t.op(0x46, "BIT 0,(HL)", 2, 12, true, Cpu::exec_bit, (AddrHL, Arg(0)));
    t.op(0x47, "BIT 0,A", 2, 8, true, Cpu::exec_bit, (RegA, Arg(0)));

    t.op(0x48, "BIT 1,B", 2, 8, true, Cpu::exec_bit, (RegB, Arg(1)));
    t.op(0x49, "BIT 1,C", 2, 8, true, Cpu::exec_bit, (RegC, Arg(1)));
    t.op(0x4A, "BIT 1,D", 2, 8, true, Cpu::exec_bit, (RegD, Arg(1)));
    t.op(0x4B, "BIT 1,E", 2, 8, true, Cpu::exec_bit, (RegE, Arg(1)));
    t.op(0x4C, "BIT 1,H", 2, 8, true, Cpu::exec_bit, (RegH, Arg(1)));
    t.op(0x4D, "BIT 1,L", 2, 8, true, Cpu::exec_bit, (RegL, Arg(1)));
    t.op(0x4E, "BIT 1,(HL)", 2, 12, true, Cpu::exec_bit, (AddrHL, Arg(1)));
    t.op(0x4F, "BIT 1,A", 2, 8, true, Cpu::exec_bit, (RegA, Arg(1)));

    t.op(0x50, "BIT 2,B", 2, 8, true, Cpu::exec_bit, (RegB, Arg(2)));
    t.op(0x51, "BIT 2,C", 2, 8, true, Cpu::exec_bit, (RegC, Arg(2)));
    t.op(0x52, "BIT 2,D", 2, 8, true, Cpu::exec_bit, (RegD, Arg(2)));
    t.op(0x53, "BIT 2,E", 2, 8, true, Cpu::exec_bit, (RegE, Arg(2)));
    t.op(0x54, "BIT 2,H", 2, 8, true, Cpu::exec_bit, (RegH, Arg(2)));
    t.op(0x55, "BIT 2,L", 2, 8, true, Cpu::exec_bit, (RegL, Arg(2)));
    t.op(0x56, "BIT 2,(HL)", 2, 12, true, Cpu::exec_bit, (AddrHL, Arg(2)));
    t.op(0x57, "BIT 2,A", 2, 8, true, Cpu::exec_bit, (RegA, Arg(2)));

    t.op(0x58, "BIT 3,B", 2, 8, true, Cpu::exec_bit, (RegB, Arg(3)));
    t.op(0x59, "BIT 3,C", 2, 8, true, Cpu::exec_bit, (RegC, Arg(3)));
    t.op(0x5A, "BIT 3,D", 2, 8, true, Cpu::exec_bit, (RegD, Arg(3)));
    t.op(0x5B, "BIT 3,E", 2, 8, true, Cpu::exec_bit, (RegE, Arg(3)));
    t.op(0x5C, "BIT 3,H", 2, 8, true, Cpu::exec_bit, (RegH, Arg(3)));
    t.op(0x5D, "BIT 3,L", 2, 8, true, Cpu::exec_bit, (RegL, Arg(3)));
    t.op(0x5E, "BIT 3,(HL)", 2, 12, true, Cpu::exec_bit, (AddrHL, Arg(3)));
    t.op(0x5F, "BIT 3,A", 2, 8, true, Cpu::exec_bit, (RegA, Arg(3)));

    t.op(0x60, "BIT 4,B", 2, 8, true, Cpu::exec_bit, (RegB, Arg(4)));
    t.op(0x61, "BIT 4,C", 2, 8, true, Cpu::exec_bit, (RegC, Arg(4)));
    t.op(0x62, "BIT 4,D", 2, 8, true, Cpu::exec_bit, (RegD, Arg(4)));
    t.op(0x63, "BIT 4,E", 2, 8, true, Cpu::exec_bit, (RegE, Arg(4)));
    t.op(0x64, "BIT 4,H", 2, 8, true, Cpu::exec_bit, (RegH, Arg(4)));
    t.op(0x65, "BIT 4,L", 2, 8, true, Cpu::exec_bit, (RegL, Arg(4)));
    t.op(0x66, "BIT 4,(HL)", 2, 12, true, Cpu::exec_bit, (AddrHL, Arg(4)));
    t.op(0x67, "BIT 4,A", 2, 8, true, Cpu::exec_bit, (RegA, Arg(4)));

    t.op(0x68, "BIT 5,B", 2, 8, true, Cpu::exec_bit, (RegB, Arg(5)));
    t.op(0x69, "BIT 5,C", 2, 8, true, Cpu::exec_bit, (RegC, Arg(5)));
    t.op(0x6A, "BIT 5,D", 2, 8, true, Cpu::exec_bit, (RegD, Arg(5)));
    t.op(0x6B, "BIT 5,E", 2, 8, true, Cpu::exec_bit, (RegE, Arg(5)));
    t.op(0x6C, "BIT 5,H", 2, 8, true, Cpu::exec_bit, (RegH, Arg(5)));
    t.op(0x6D, "BIT 5,L", 2, 8, true, Cpu::exec_bit, (RegL, Arg(5)));
    t.op(0x6E, "BIT 5,(HL)", 2, 12, true, Cpu::exec_bit, (AddrHL, Arg(5)));
    t.op(0x6F, "BIT 5,A", 2, 8, true, Cpu::exec_bit, (RegA, Arg(5)));

    t.op(0x70, "BIT 6,B", 2, 8, true, Cpu::exec_bit, (RegB, Arg(6)));
    t.op(0x71, "BIT 6,C", 2, 8, true, Cpu::exec_bit, (RegC, Arg(6)));
    t.op(0x72, "BIT 6,D", 2, 8, true, Cpu::exec_bit, (RegD, Arg(6)));
    t.op(0x73, "BIT 6,E", 2, 8, true, Cpu::exec_bit, (RegE, Arg(6)));
    t.op(0x74, "BIT 6,H", 2, 8, true, Cpu::exec_bit, (RegH, Arg(6)));
    t.op(0x75, "BIT 6,L", 2, 8, true, Cpu::exec_bit, (RegL, Arg(6)));
    t.op(0x76, "BIT 6,(HL)", 2, 12, true, Cpu::exec_bit, (AddrHL, Arg(6)));
    t.op(0x77, "BIT 6,A", 2, 8, true, Cpu::exec_bit, (RegA, Arg(6)));

    t.op(0x78, "BIT 7,B", 2, 8, true, Cpu::exec_bit, (RegB, Arg(7)));
    t.op(0x79, "BIT 7,C", 2, 8, true, Cpu::exec_bit, (RegC, Arg(7)));
    t.op(0x7A, "BIT 7,D", 2, 8, true, Cpu::exec_bit, (RegD, Arg(7)));
    t.op(0x7B, "BIT 7,E", 2, 8, true, Cpu::exec_bit, (RegE, Arg(7)));
    t.op(0x7C, "BIT 7,H", 2, 8, true, Cpu::exec_bit, (RegH, Arg(7)));
    t.op(0x7D, "BIT 7,L", 2, 8, true, Cpu::exec_bit, (RegL, Arg(7)));
    t.op(0x7E, "BIT 7,(HL)", 2, 12, true, Cpu::exec_bit, (AddrHL, Arg(7)));
    t.op(0x7F, "BIT 7,A", 2, 8, true, Cpu::exec_bit, (RegA, Arg(7)));

    t.op(0x80, "RES 0,B", 2, 8, false, Cpu::exec_res, (RegB, Arg(0)));
    t.op(0x81, "RES 0,C", 2, 8, false, Cpu::exec_res, (RegC, Arg(0)));
    t.op(0x82, "RES 0,D", 2, 8, false, Cpu::exec_res, (RegD, Arg(0)));
    t.op(0x83, "RES 0,E", 2, 8, false, Cpu::exec_res, (RegE, Arg(0)));
    t.op(0x84, "RES 0,H", 2, 8, false, Cpu::exec_res, (RegH, Arg(0)));
    t.op(0x85, "RES 0,L", 2, 8, false, Cpu::exec_res, (RegL, Arg(0)));
    t.op(0x86, "RES 0,(HL)", 2, 16, false, Cpu::exec_res, (AddrHL, Arg(0)));
    t.op(0x87, "RES 0,A", 2, 8, false, Cpu::exec_res, (RegA, Arg(0)));

    t.op(0x88, "RES 1,B", 2, 8, false, Cpu::exec_res, (RegB, Arg(1)));
    t.op(0x89, "RES 1,C", 2, 8, false, Cpu::exec_res, (RegC, Arg(1)));
    t.op(0x8A, "RES 1,D", 2, 8, false, Cpu::exec_res, (RegD, Arg(1)));
    t.op(0x8B, "RES 1,E", 2, 8, false, Cpu::exec_res, (RegE, Arg(1)));
    t.op(0x8C, "RES 1,H", 2, 8, false, Cpu::exec_res, (RegH, Arg(1)));
    t.op(0x8D, "RES 1,L", 2, 8, false, Cpu::exec_res, (RegL, Arg(1)));
    t.op(0x8E, "RES 1,(HL)", 2, 16, false, Cpu::exec_res, (AddrHL, Arg(1)));
    t.op(0x8F, "RES 1,A", 2, 8, false, Cpu::exec_res, (RegA, Arg(1)));

    t.op(0x90, "RES 2,B", 2, 8, false, Cpu::exec_res, (RegB, Arg(2)));
    t.op(0x91, "RES 2,C", 2, 8, false, Cpu::exec_res, (RegC, Arg(2)));
    t.op(0x92, "RES 2,D", 2, 8, false, Cpu::exec_res, (RegD, Arg(2)));
    t.op(0x93, "RES 2,E", 2, 8, false, Cpu::exec_res, (RegE, Arg(2)));
    t.op(0x94, "RES 2,H", 2, 8, false, Cpu::exec_res, (RegH, Arg(2)));
    t.op(0x95, "RES 2,L", 2, 8, false, Cpu::exec_res, (RegL, Arg(2)));
    t.op(0x96, "RES 2,(HL)", 2, 16, false, Cpu::exec_res, (AddrHL, Arg(2)));
    t.op(0x97, "RES 2,A", 2, 8, false, Cpu::exec_res, (RegA, Arg(2)));

    t.op(0x98, "RES 3,B", 2, 8, false, Cpu::exec_res, (RegB, Arg(3)));
    t.op(0x99, "RES 3,C", 2, 8, false, Cpu::exec_res, (RegC, Arg(3)));
    t.op(0x9A, "RES 3,D", 2, 8, false, Cpu::exec_res, (RegD, Arg(3)));
    t.op(0x9B, "RES 3,E", 2, 8, false, Cpu::exec_res, (RegE, Arg(3)));
    t.op(0x9C, "RES 3,H", 2, 8, false, Cpu::exec_res, (RegH, Arg(3)));
    t.op(0x9D, "RES 3,L", 2, 8, false, Cpu::exec_res, (RegL, Arg(3)));
    t.op(0x9E, "RES 3,(HL)", 2, 16, false, Cpu::exec_res, (AddrHL, Arg(3)));
    t.op(0x9F, "RES 3,A", 2, 8, false, Cpu::exec_res, (RegA, Arg(3)));

    t.op(0xA0, "RES 4,B", 2, 8, false, Cpu::exec_res, (RegB, Arg(4)));
    t.op(0xA1, "RES 4,C", 2, 8, false, Cpu::exec_res, (RegC, Arg(4)));
    t.op(0xA2, "RES 4,D", 2, 8, false, Cpu::exec_res, (RegD, Arg(4)));
    t.op(0xA3, "RES 4,E", 2, 8, false, Cpu::exec_res, (RegE, Arg(4)));
    t.op(0xA4, "RES 4,H", 2, 8, false, Cpu::exec_res, (RegH, Arg(4)));
    t.op(0xA5, "RES 4,L", 2, 8, false, Cpu::exec_res, (RegL, Arg(4)));
    t.op(0xA6, "RES 4,(HL)", 2, 16, false, Cpu::exec_res, (AddrHL, Arg(4)));
    t.op(0xA7, "RES 4,A", 2, 8, false, Cpu::exec_res, (RegA, Arg(4)));

    t.op(0xA8, "RES 5,B", 2, 8, false, Cpu::exec_res, (RegB, Arg(5)));
    t.op(0xA9, "RES 5,C", 2, 8, false, Cpu::exec_res, (RegC, Arg(5)));
    t.op(0xAA, "RES 5,D", 2, 8, false, Cpu::exec_res, (RegD, Arg(5)));
    t.op(0xAB, "RES 5,E", 2, 8, false, Cpu::exec_res, (RegE, Arg(5)));
    t.op(0xAC, "RES 5,H", 2, 8, false, Cpu::exec_res, (RegH, Arg(5)));
    t.op(0xAD, "RES 5,L", 2, 8, false, Cpu::exec_res, (RegL, Arg(5)));
    t.op(0xAE, "RES 5,(HL)", 2, 16, false, Cpu::exec_res, (AddrHL, Arg(5)));
    t.op(0xAF, "RES 5,A", 2, 8, false, Cpu::exec_res, (RegA, Arg(5)));

    t.op(0xB0, "RES 6,B", 2, 8, false, Cpu::exec_res, (RegB, Arg(6)));
    t.op(0xB1, "RES 6,C", 2, 8, false, Cpu::exec_res, (RegC, Arg(6)));
    t.op(0xB2, "RES 6,D", 2, 8, false, Cpu::exec_res, (RegD, Arg(6)));
    t.op(0xB3, "RES 6,E", 2, 8, false, Cpu::exec_res, (RegE, Arg(6)));
    t.op(0xB4, "RES 6,H", 2, 8, false, Cpu::exec_res, (RegH, Arg(6)));
    t.op(0xB5, "RES 6,L", 2, 8, false, Cpu::exec_res, (RegL, Arg(6)));
    t.op(0xB6, "RES 6,(HL)", 2, 16, false, Cpu::exec_res, (AddrHL, Arg(6)));
    t.op(0xB7, "RES 6,A", 2, 8, false, Cpu::exec_res, (RegA, Arg(6)));

    t.op(0xB8, "RES 7,B", 2, 8, false, Cpu::exec_res, (RegB, Arg(7)));
    t.op(0xB9, "RES 7,C", 2, 8, false, Cpu::exec_res, (RegC, Arg(7)));
    t.op(0xBA, "RES 7,D", 2, 8, false, Cpu::exec_res, (RegD, Arg(7)));
    t.op(0xBB, "RES 7,E", 2, 8, false, Cpu::exec_res, (RegE, Arg(7)));
    t.op(0xBC, "RES 7,H", 2, 8, false, Cpu::exec_res, (RegH, Arg(7)));
    t.op(0xBD, "RES 7,L", 2, 8, false, Cpu::exec_res, (RegL, Arg(7)));
    t.op(0xBE, "RES 7,(HL)", 2, 16, false, Cpu::exec_res, (AddrHL, Arg(7)));
    t.op(0xBF, "RES 7,A", 2, 8, false, Cpu::exec_res, (RegA, Arg(7)));

    t.op(0xC0, "SET 0,B", 2, 8, false, Cpu::exec_set, (RegB, Arg(0)));
    t.op(0xC1, "SET 0,C", 2, 8, false, Cpu::exec_set, (RegC, Arg(0)));
    t.op(0xC2, "SET 0,D", 2, 8, false, Cpu::exec_set, (RegD, Arg(0)));
    t.op(0xC3, "SET 0,E", 2, 8, false, Cpu::exec_set, (RegE, Arg(0)));
    t.op(0xC4, "SET 0,H", 2, 8, false, Cpu::exec_set, (RegH, Arg(0)));
    t.op(0xC5, "SET 0,L", 2, 8, false, Cpu::exec_set, (RegL, Arg(0)));
    t.op(0xC6, "SET 0,(HL)", 2, 16, false, Cpu::exec_set, (AddrHL, Arg(0)));
    t.op(0xC7, "SET 0,A", 2, 8, false, Cpu::exec_set, (RegA, Arg(0)));

    t.op(0xC8, "SET 1,B", 2, 8, false, Cpu::exec_set, (RegB, Arg(1)));
    t.op(0xC9, "SET 1,C", 2, 8, false, Cpu::exec_set, (RegC, Arg(1)));
    t.op(0xCA, "SET 1,D", 2, 8, false, Cpu::exec_set, (RegD, Arg(1)));
    t.op(0xCB, "SET 1,E", 2, 8, false, Cpu::exec_set, (RegE, Arg(1)));
    t.op(0xCC, "SET 1,H", 2, 8, false, Cpu::exec_set, (RegH, Arg(1)));
    t.op(0xCD, "SET 1,L", 2, 8, false, Cpu::exec_set, (RegL, Arg(1)));
    t.op(0xCE, "SET 1,(HL)", 2, 16, false, Cpu::exec_set, (AddrHL, Arg(1)));
    t.op(0xCF, "SET 1,A", 2, 8, false, Cpu::exec_set, (RegA, Arg(1)));

    t.op(0xD0, "SET 2,B", 2, 8, false, Cpu::exec_set, (RegB, Arg(2)));
    t.op(0xD1, "SET 2,C", 2, 8, false, Cpu::exec_set, (RegC, Arg(2)));
    t.op(0xD2, "SET 2,D", 2, 8, false, Cpu::exec_set, (RegD, Arg(2)));
    t.op(0xD3, "SET 2,E", 2, 8, false, Cpu::exec_set, (RegE, Arg(2)));
    t.op(0xD4, "SET 2,H", 2, 8, false, Cpu::exec_set, (RegH, Arg(2)));
    t.op(0xD5, "SET 2,L", 2, 8, false, Cpu::exec_set, (RegL, Arg(2)));
    t.op(0xD6, "SET 2,(HL)", 2, 16, false, Cpu::exec_set, (AddrHL, Arg(2)));
    t.op(0xD7, "SET 2,A", 2, 8, false, Cpu::exec_set, (RegA, Arg(2)));

    t.op(0xD8, "SET 3,B", 2, 8, false, Cpu::exec_set, (RegB, Arg(3)));
    t.op(0xD9, "SET 3,C", 2, 8, false, Cpu::exec_set, (RegC, Arg(3)));
    t.op(0xDA, "SET 3,D", 2, 8, false, Cpu::exec_set, (RegD, Arg(3)));
    t.op(0xDB, "SET 3,E", 2, 8, false, Cpu::exec_set, (RegE, Arg(3)));
    t.op(0xDC, "SET 3,H", 2, 8, false, Cpu::exec_set, (RegH, Arg(3)));
    t.op(0xDD, "SET 3,L", 2, 8, false, Cpu::exec_set, (RegL, Arg(3)));
    t.op(0xDE, "SET 3,(HL)", 2, 16, false, Cpu::exec_set, (AddrHL, Arg(3)));
    t.op(0xDF, "SET 3,A", 2, 8, false, Cpu::exec_set, (RegA, Arg(3)));

    t.op(0xE0, "SET 4,B", 2, 8, false, Cpu::exec_set, (RegB, Arg(4)));
    t.op(0xE1, "SET 4,C", 2, 8, false, Cpu::exec_set, (RegC, Arg(4)));
    t.op(0xE2, "SET 4,D", 2, 8, false, Cpu::exec_set, (RegD, Arg(4)));
    t.op(0xE3, "SET 4,E", 2, 8, false, Cpu::exec_set, (RegE, Arg(4)));
    t.op(0xE4, "SET 4,H", 2, 8, false, Cpu::exec_set, (RegH, Arg(4)));
    t.op(0xE5, "SET 4,L", 2, 8, false, Cpu::exec_set, (RegL, Arg(4)));
    t.op(0xE6, "SET 4,(HL)", 2, 16, false, Cpu::exec_set, (AddrHL, Arg(4)));
    t.op(0xE7, "SET 4,A", 2, 8, false, Cpu::exec_set, (RegA, Arg(4)));

    t.op(0xE8, "SET 5,B", 2, 8, false, Cpu::exec_set, (RegB, Arg(5)));
    t.op(0xE9, "SET 5,C", 2, 8, false, Cpu::exec_set, (RegC, Arg(5)));
    t.op(0xEA, "SET 5,D", 2, 8, false, Cpu::exec_set, (RegD, Arg(5)));
    t.op(0xEB, "SET 5,E", 2, 8, false, Cpu::exec_set, (RegE, Arg(5)));
    t.op(0xEC, "SET 5,H", 2, 8, false, Cpu::exec_set, (RegH, Arg(5)));
    t.op(0xED, "SET 5,L", 2, 8, false, Cpu::exec_set, (RegL, Arg(5)));
    t.op(0xEE, "SET 5,(HL)", 2, 16, false, Cpu::exec_set, (AddrHL, Arg(5)));
    t.op(0xEF, "SET 5,A", 2, 8, false, Cpu::exec_set, (RegA, Arg(5)));

    t.op(0xF0, "SET 6,B", 2, 8, false, Cpu::exec_set, (RegB, Arg(6)));
    t.op(0xF1, "SET 6,C", 2, 8, false, Cpu::exec_set, (RegC, Arg(6)));
    t.op(0xF2, "SET 6,D", 2, 8, false, Cpu::exec_set, (RegD, Arg(6)));
    t.op(0xF3, "SET 6,E", 2, 8, false, Cpu::exec_set, (RegE, Arg(6)));
    t.op(0xF4, "SET 6,H", 2, 8, false, Cpu::exec_set, (RegH, Arg(6)));
    t.op(0xF5, "SET 6,L", 2, 8, false, Cpu::exec_set, (RegL, Arg(6)));
    t.op(0xF6, "SET 6,(HL)", 2, 16, false, Cpu::exec_set, (AddrHL, Arg(6)));
    t.op(0xF7, "SET 6,A", 2, 8, false, Cpu::exec_set, (RegA, Arg(6)));

    t.op(0xF8, "SET 7,B", 2, 8, false, Cpu::exec_set, (RegB, Arg(7)));
    t.op(0xF9, "SET 7,C", 2, 8, false, Cpu::exec_set, (RegC, Arg(7)));
    t.op(0xFA, "SET 7,D", 2, 8, false, Cpu::exec_set, (RegD, Arg(7)));
    t.op(0xFB, "SET 7,E", 2, 8, false, Cpu::exec_set, (RegE, Arg(7)));
    t.op(0xFC, "SET 7,H", 2, 8, false, Cpu::exec_set, (RegH, Arg(7)));
    t.op(0xFD, "SET 7,L", 2, 8, false, Cpu::exec_set, (RegL, Arg(7)));
    t.op(0xFE, "SET 7,(HL)", 2, 16, false, Cpu::exec_set, (AddrHL, Arg(7)));
    t.op(0xFF, "SET 7,A", 2, 8, false, Cpu::exec_set, (RegA, Arg(7)));
}
