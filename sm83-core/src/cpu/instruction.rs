use super::cpu::Cpu;
use super::error::CpuError;
use super::instructions_table::InstructionTable;
use super::CpuBusProvider;

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Runs one instruction, the CPU has already moved `PC` past it.
///
/// Returns the number of T-cycles the instruction actually took.
pub type ExecFn =
    fn(&mut Cpu, &mut dyn CpuBusProvider, &InstructionDescriptor) -> Result<u8, CpuError>;

/// This is the location the operands will come from,
/// a basic usage can be something like this
///
/// ```ignore
/// # use sm83_core::cpu::instruction::OperandType;
/// struct CPU {
///   A: u8,
/// }
///
/// impl CPU {
///     fn write_operand(&mut self, dest: OperandType, data: u8) {
///         match dest {
///             OperandType::RegA => self.A = data,
///             _ => {}
///         }
///     }
///
///     fn read_operand(&self, src: OperandType) -> u8 {
///         match src {
///             OperandType::RegA => self.A,
///             _ => unreachable!(),
///         }
///     }
///
///     // implementation of the Ld instruction
///     fn ld(&mut self, src: OperandType, dest: OperandType) {
///         self.write_operand(dest, self.read_operand(src));
///     }
/// }
/// ```
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum OperandType {
    RegA,
    RegB,
    RegC,
    RegD,
    RegE,
    RegH,
    RegL,

    AddrHL, // this is used in many places with reg8
    AddrHLDec,
    AddrHLInc,
    AddrBC,
    AddrDE,

    RegAF,
    RegBC,
    RegDE,
    RegHL,

    RegSP,

    Imm8,
    Imm8Signed,
    Imm16,

    HighAddr8,
    HighAddrC, // only for the C register
    Addr16,
    Addr16Val16, // write 16bit value to address

    /// A constant encoded in the opcode, bit index or `RST` vector
    Arg(u8),

    CondNZ,
    CondZ,
    CondNC,
    CondC,

    // Also for instructions with one operand as a fill
    Implied,
}

/// One slot of the instruction tables.
///
/// The mnemonic is a template, `n`, `nn` and `e` stand for the 8-bit,
/// 16-bit and signed 8-bit operands, and are only used for display.
#[derive(Clone, Copy)]
pub struct InstructionDescriptor {
    pub opcode: u8,
    pub prefixed: bool,
    pub mnemonic: &'static str,
    /// Length in bytes, including the `CB` prefix
    pub length: u8,
    /// Base cost in T-cycles, for conditional instructions the taken cost
    pub cycles: u8,
    pub affects_flags: bool,
    /// (destination, source)
    pub operands: (OperandType, OperandType),
    exec: ExecFn,
}

impl InstructionDescriptor {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        opcode: u8,
        prefixed: bool,
        mnemonic: &'static str,
        length: u8,
        cycles: u8,
        affects_flags: bool,
        exec: ExecFn,
        operands: (OperandType, OperandType),
    ) -> Self {
        Self {
            opcode,
            prefixed,
            mnemonic,
            length,
            cycles,
            affects_flags,
            operands,
            exec,
        }
    }

    /// Placeholder for a slot that was never filled, fails when executed
    pub(super) fn unimplemented(opcode: u8, prefixed: bool) -> Self {
        Self::new(
            opcode,
            prefixed,
            "???",
            if prefixed { 2 } else { 1 },
            4,
            false,
            Cpu::exec_unimplemented,
            (OperandType::Implied, OperandType::Implied),
        )
    }

    pub fn execute(&self, cpu: &mut Cpu, bus: &mut dyn CpuBusProvider) -> Result<u8, CpuError> {
        (self.exec)(cpu, bus, self)
    }
}

impl Debug for InstructionDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("InstructionDescriptor")
            .field("opcode", &self.opcode)
            .field("prefixed", &self.prefixed)
            .field("mnemonic", &self.mnemonic)
            .field("length", &self.length)
            .field("cycles", &self.cycles)
            .field("affects_flags", &self.affects_flags)
            .field("operands", &self.operands)
            .finish()
    }
}

/// An instruction read from memory, with its operands filled into the text.
#[derive(Clone, Debug)]
pub struct DecodedInstruction {
    pub address: u16,
    pub descriptor: InstructionDescriptor,
    /// Disassembly, e.g. `LD A,$3E`
    pub text: String,
    /// The raw bytes in hex, e.g. `3E 11`
    pub bytes: String,
}

impl DecodedInstruction {
    /// Decodes the instruction at `address` without touching any state
    pub fn decode<P: CpuBusProvider + ?Sized>(
        table: &InstructionTable,
        bus: &P,
        address: u16,
    ) -> Self {
        let descriptor = table.resolve(bus, address);

        let raw: Vec<u8> = (0..descriptor.length as u16)
            .map(|i| bus.read(address.wrapping_add(i)))
            .collect();

        let bytes = raw
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ");

        let text = if descriptor.prefixed {
            descriptor.mnemonic.to_string()
        } else {
            substitute_operands(&descriptor, address, &raw[1..])
        };

        Self {
            address,
            descriptor,
            text,
            bytes,
        }
    }

    /// Address of the instruction that follows this one in memory
    pub fn next_address(&self) -> u16 {
        self.address.wrapping_add(self.descriptor.length as u16)
    }
}

impl Display for DecodedInstruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:04X}: {:<8} {}", self.address, self.bytes, self.text)
    }
}

fn substitute_operands(
    descriptor: &InstructionDescriptor,
    address: u16,
    operand: &[u8],
) -> String {
    let imm8 = operand.first().copied().unwrap_or(0);
    let imm16 = (operand.get(1).copied().unwrap_or(0) as u16) << 8 | imm8 as u16;

    let mut result = String::with_capacity(descriptor.mnemonic.len() + 4);
    let mut word = String::new();

    let flush = |word: &mut String, result: &mut String| {
        match word.as_str() {
            "n" => result.push_str(&format!("${:02X}", imm8)),
            "nn" => result.push_str(&format!("${:04X}", imm16)),
            "e" if descriptor.mnemonic.starts_with("JR") => {
                // relative to the address of the next instruction
                let target = address
                    .wrapping_add(descriptor.length as u16)
                    .wrapping_add(imm8 as i8 as u16);
                result.push_str(&format!("${:04X}", target));
            }
            "e" => {
                let offset = imm8 as i8;
                let sign = if offset < 0 { '-' } else { '+' };
                // `SP+e` already has its sign in the template
                if !result.ends_with('+') {
                    result.push(sign);
                } else if offset < 0 {
                    result.pop();
                    result.push(sign);
                }
                result.push_str(&format!("${:02X}", offset.unsigned_abs()));
            }
            _ => result.push_str(word),
        }
        word.clear();
    };

    for c in descriptor.mnemonic.chars() {
        if c.is_ascii_alphanumeric() {
            word.push(c);
        } else {
            flush(&mut word, &mut result);
            result.push(c);
        }
    }
    flush(&mut word, &mut result);

    result
}
