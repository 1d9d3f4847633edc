//! Decoding of raw opcodes into [`Instruction`] values.
//!
//! Decoding never fails: opcodes that do not name an instruction become
//! [`Instruction::Unknown`], which the CPU reports and otherwise ignores.

use std::fmt::{Display, Formatter};

/// The four nibbles of an opcode, most significant first.
pub fn nibbles(opcode: u16) -> [u8; 4] {
    [
        ((opcode >> 12) & 0xF) as u8,
        ((opcode >> 8) & 0xF) as u8,
        ((opcode >> 4) & 0xF) as u8,
        (opcode & 0xF) as u8,
    ]
}

fn x_register_index(opcode: u16) -> usize {
    ((opcode & 0x0F00) >> 8) as usize
}

fn y_register_index(opcode: u16) -> usize {
    ((opcode & 0x00F0) >> 4) as usize
}

fn address_nnn(opcode: u16) -> u16 {
    opcode & 0x0FFF
}

fn byte_nn(opcode: u16) -> u8 {
    (opcode & 0x00FF) as u8
}

fn nibble_n(opcode: u16) -> u8 {
    (opcode & 0x000F) as u8
}

/// Register-to-register operations of the 8XYN family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Move,
    Or,
    And,
    Xor,
    AddCarry,
    SubBorrow,
    ShiftRight,
    SubBorrowRev,
    ShiftLeft,
}

impl AluOp {
    fn from_nibble(n: u8) -> Option<Self> {
        Some(match n {
            0x0 => Self::Move,
            0x1 => Self::Or,
            0x2 => Self::And,
            0x3 => Self::Xor,
            0x4 => Self::AddCarry,
            0x5 => Self::SubBorrow,
            0x6 => Self::ShiftRight,
            0x7 => Self::SubBorrowRev,
            0xE => Self::ShiftLeft,
            _ => return None,
        })
    }

    fn mnemonic(self) -> &'static str {
        match self {
            Self::Move => "LD",
            Self::Or => "OR",
            Self::And => "AND",
            Self::Xor => "XOR",
            Self::AddCarry => "ADD",
            Self::SubBorrow => "SUB",
            Self::ShiftRight => "SHR",
            Self::SubBorrowRev => "SUBN",
            Self::ShiftLeft => "SHL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Clear,
    Return,
    Jump(u16),
    Call(u16),
    SkipEqImm { x: usize, nn: u8 },
    SkipNeImm { x: usize, nn: u8 },
    SkipEqReg { x: usize, y: usize },
    LoadImm { x: usize, nn: u8 },
    AddImm { x: usize, nn: u8 },
    Alu { op: AluOp, x: usize, y: usize },
    SkipNeReg { x: usize, y: usize },
    LoadIndex(u16),
    JumpOffset(u16),
    Random { x: usize, nn: u8 },
    Draw { x: usize, y: usize, n: u8 },
    SkipKeyPressed { x: usize },
    SkipKeyNotPressed { x: usize },
    ReadDelay { x: usize },
    WaitKey { x: usize },
    WriteDelay { x: usize },
    WriteSound { x: usize },
    AddIndex { x: usize },
    FontPointer { x: usize },
    StoreBcd { x: usize },
    StoreRegisters { x: usize },
    LoadRegisters { x: usize },
    Unknown(u16),
}

impl Instruction {
    pub fn decode(opcode: u16) -> Self {
        let x = x_register_index(opcode);
        let y = y_register_index(opcode);
        let nn = byte_nn(opcode);
        let nnn = address_nnn(opcode);

        match nibbles(opcode)[0] {
            0x0 => match nnn {
                0x0E0 => Self::Clear,
                0x0EE => Self::Return,
                _ => Self::Unknown(opcode),
            },
            0x1 => Self::Jump(nnn),
            0x2 => Self::Call(nnn),
            0x3 => Self::SkipEqImm { x, nn },
            0x4 => Self::SkipNeImm { x, nn },
            // The low nibble of 5XY_ and 9XY_ is not checked.
            0x5 => Self::SkipEqReg { x, y },
            0x6 => Self::LoadImm { x, nn },
            0x7 => Self::AddImm { x, nn },
            0x8 => match AluOp::from_nibble(nibble_n(opcode)) {
                Some(op) => Self::Alu { op, x, y },
                None => Self::Unknown(opcode),
            },
            0x9 => Self::SkipNeReg { x, y },
            0xA => Self::LoadIndex(nnn),
            0xB => Self::JumpOffset(nnn),
            0xC => Self::Random { x, nn },
            0xD => Self::Draw {
                x,
                y,
                n: nibble_n(opcode),
            },
            0xE => match nn {
                0x9E => Self::SkipKeyPressed { x },
                0xA1 => Self::SkipKeyNotPressed { x },
                _ => Self::Unknown(opcode),
            },
            0xF => match nn {
                0x07 => Self::ReadDelay { x },
                0x0A => Self::WaitKey { x },
                0x15 => Self::WriteDelay { x },
                0x18 => Self::WriteSound { x },
                0x1E => Self::AddIndex { x },
                0x29 => Self::FontPointer { x },
                0x33 => Self::StoreBcd { x },
                0x55 => Self::StoreRegisters { x },
                0x65 => Self::LoadRegisters { x },
                _ => Self::Unknown(opcode),
            },
            _ => unreachable!("nibble is masked to four bits"),
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Clear => write!(f, "CLS"),
            Self::Return => write!(f, "RET"),
            Self::Jump(addr) => write!(f, "JP 0x{addr:03X}"),
            Self::Call(addr) => write!(f, "CALL 0x{addr:03X}"),
            Self::SkipEqImm { x, nn } => write!(f, "SE V{x:X}, 0x{nn:02X}"),
            Self::SkipNeImm { x, nn } => write!(f, "SNE V{x:X}, 0x{nn:02X}"),
            Self::SkipEqReg { x, y } => write!(f, "SE V{x:X}, V{y:X}"),
            Self::LoadImm { x, nn } => write!(f, "LD V{x:X}, 0x{nn:02X}"),
            Self::AddImm { x, nn } => write!(f, "ADD V{x:X}, 0x{nn:02X}"),
            Self::Alu { op, x, y } => write!(f, "{} V{x:X}, V{y:X}", op.mnemonic()),
            Self::SkipNeReg { x, y } => write!(f, "SNE V{x:X}, V{y:X}"),
            Self::LoadIndex(addr) => write!(f, "LD I, 0x{addr:03X}"),
            Self::JumpOffset(addr) => write!(f, "JP V0, 0x{addr:03X}"),
            Self::Random { x, nn } => write!(f, "RND V{x:X}, 0x{nn:02X}"),
            Self::Draw { x, y, n } => write!(f, "DRW V{x:X}, V{y:X}, {n}"),
            Self::SkipKeyPressed { x } => write!(f, "SKP V{x:X}"),
            Self::SkipKeyNotPressed { x } => write!(f, "SKNP V{x:X}"),
            Self::ReadDelay { x } => write!(f, "LD V{x:X}, DT"),
            Self::WaitKey { x } => write!(f, "LD V{x:X}, K"),
            Self::WriteDelay { x } => write!(f, "LD DT, V{x:X}"),
            Self::WriteSound { x } => write!(f, "LD ST, V{x:X}"),
            Self::AddIndex { x } => write!(f, "ADD I, V{x:X}"),
            Self::FontPointer { x } => write!(f, "LD F, V{x:X}"),
            Self::StoreBcd { x } => write!(f, "LD B, V{x:X}"),
            Self::StoreRegisters { x } => write!(f, "LD [I], V{x:X}"),
            Self::LoadRegisters { x } => write!(f, "LD V{x:X}, [I]"),
            Self::Unknown(opcode) => write!(f, "DW 0x{opcode:04X}"),
        }
    }
}
