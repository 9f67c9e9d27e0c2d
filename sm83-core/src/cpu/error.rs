/// A fatal error raised while executing an instruction.
///
/// Neither variant is recoverable by the CPU, it is up to the host to decide
/// what to do with it (log it, show it in a debugger or abort).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// A slot in the instruction tables was never filled.
    #[error("Opcode {opcode:02X} (CB prefixed: {prefixed}) at {pc:04X} is not implemented")]
    UnimplementedOpcode { opcode: u8, prefixed: bool, pc: u16 },
    /// One of the opcodes that do not exist on the DMG was executed.
    #[error("Illegal opcode {opcode:02X} at {pc:04X}")]
    IllegalOpcode { opcode: u8, pc: u16 },
}

impl CpuError {
    /// The address of the instruction that caused the error
    pub fn pc(&self) -> u16 {
        match self {
            Self::UnimplementedOpcode { pc, .. } | Self::IllegalOpcode { pc, .. } => *pc,
        }
    }
}
