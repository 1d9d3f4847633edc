use std::fmt::{Display, Formatter};

/// Errors that stop the emulator from being used at all.
#[derive(Debug)]
pub enum Chip8Error {
    Io(std::io::Error),
    InvalidArgument(&'static str),
}

impl Display for Chip8Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "could not read program: {error}"),
            Self::InvalidArgument(argument) => write!(f, "invalid argument: {argument}"),
        }
    }
}

impl std::error::Error for Chip8Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::InvalidArgument(_) => None,
        }
    }
}

impl From<std::io::Error> for Chip8Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Conditions raised by a malformed program. Execution continues after each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    StackOverflow,
    StackUnderflow,
    UnknownOpcode(u16),
    InvalidKeyOperand { register: u8, value: u8 },
    ProgramCounterSaturated(u16),
}

impl Display for Fault {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackOverflow => write!(f, "call with full stack ignored"),
            Self::StackUnderflow => write!(f, "return with empty stack ignored"),
            Self::UnknownOpcode(opcode) => write!(f, "unknown opcode: 0x{opcode:04x}"),
            Self::InvalidKeyOperand { register, value } => {
                write!(f, "V{register:X} holds 0x{value:02x}, which is not a key")
            }
            Self::ProgramCounterSaturated(pc) => {
                write!(f, "program counter stuck at top of memory: 0x{pc:03x}")
            }
        }
    }
}
