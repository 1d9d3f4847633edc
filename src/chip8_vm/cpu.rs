use rand::random;

use crate::chip8_vm::config::{
    ADDRESS_MASK, FLAG_REGISTER, FONT_GLYPH_HEIGHT, PC_SATURATION, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::chip8_vm::diagnostics::Diagnostics;
use crate::chip8_vm::display::Framebuffer;
use crate::chip8_vm::error::Fault;
use crate::chip8_vm::input::InputLatch;
use crate::chip8_vm::instruction::{AluOp, Instruction};
use crate::chip8_vm::quirks::Chip8Quirks;
use crate::chip8_vm::state::MachineState;

/// Result of an 8XYN operation. `flag` is what lands in VF, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluOutput {
    pub value: u8,
    pub flag: Option<u8>,
}

pub fn alu(op: AluOp, vx: u8, vy: u8) -> AluOutput {
    let (value, flag) = match op {
        AluOp::Move => (vy, None),
        AluOp::Or => (vx | vy, None),
        AluOp::And => (vx & vy, None),
        AluOp::Xor => (vx ^ vy, None),
        AluOp::AddCarry => {
            let (sum, carry) = vx.overflowing_add(vy);
            (sum, Some(u8::from(carry)))
        }
        AluOp::SubBorrow => (vx.wrapping_sub(vy), Some(u8::from(vx > vy))),
        AluOp::ShiftRight => (vx >> 1, Some(vx & 0x1)),
        AluOp::SubBorrowRev => (vy.wrapping_sub(vx), Some(u8::from(vy > vx))),
        AluOp::ShiftLeft => (vx << 1, Some(vx >> 7)),
    };

    AluOutput { value, flag }
}

/// Runs a single instruction cycle, reporting any fault to `diagnostics`.
///
/// While a key wait is pending the cycle only re-checks the latch.
pub fn execute_cycle<D: Diagnostics + ?Sized>(
    state: &mut MachineState,
    display: &mut Framebuffer,
    input: &InputLatch,
    quirks: Chip8Quirks,
    diagnostics: &mut D,
) {
    if let Some(x_reg) = state.awaiting_key {
        if take_key_press(state, input, quirks, x_reg) {
            state.awaiting_key = None;
        }
        return;
    }

    let pc = state.pc;
    let opcode = state.read_word(pc);

    if pc < PC_SATURATION {
        state.pc = pc + 2;
    } else {
        diagnostics.fault(pc, Fault::ProgramCounterSaturated(pc));
    }

    let instruction = Instruction::decode(opcode);
    diagnostics.executed(pc, &instruction);

    if let Err(fault) = execute_instruction(state, display, input, quirks, instruction) {
        diagnostics.fault(pc, fault);
    }
}

pub fn execute_opcode(
    state: &mut MachineState,
    display: &mut Framebuffer,
    input: &InputLatch,
    quirks: Chip8Quirks,
    opcode: u16,
) -> Result<(), Fault> {
    execute_instruction(state, display, input, quirks, Instruction::decode(opcode))
}

/// Applies `instruction` to the machine. The PC is expected to already point past it.
pub fn execute_instruction(
    state: &mut MachineState,
    display: &mut Framebuffer,
    input: &InputLatch,
    quirks: Chip8Quirks,
    instruction: Instruction,
) -> Result<(), Fault> {
    match instruction {
        Instruction::Clear => display.clear(),
        Instruction::Return => state.pc = state.stack.pop()?,
        Instruction::Jump(address) => state.pc = address,
        Instruction::Call(address) => {
            state.stack.push(state.pc)?;
            state.pc = address;
        }
        Instruction::SkipEqImm { x, nn } => {
            let equal = state.registers[x] == nn;
            skip_if(state, equal);
        }
        Instruction::SkipNeImm { x, nn } => {
            let equal = state.registers[x] == nn;
            skip_if(state, !equal);
        }
        Instruction::SkipEqReg { x, y } => {
            let equal = state.registers[x] == state.registers[y];
            skip_if(state, equal);
        }
        Instruction::LoadImm { x, nn } => state.registers[x] = nn,
        Instruction::AddImm { x, nn } => {
            state.registers[x] = state.registers[x].wrapping_add(nn);
        }
        Instruction::Alu { op, x, y } => {
            // VF is written before the result is computed, so an operand in VF
            // sees the new flag.
            if let Some(flag) = alu(op, state.registers[x], state.registers[y]).flag {
                state.registers[FLAG_REGISTER] = flag;
            }
            state.registers[x] = alu(op, state.registers[x], state.registers[y]).value;
        }
        Instruction::SkipNeReg { x, y } => {
            let equal = state.registers[x] == state.registers[y];
            skip_if(state, !equal);
        }
        Instruction::LoadIndex(address) => state.index = address,
        Instruction::JumpOffset(address) => {
            state.pc = (address + u16::from(state.registers[0])) & ADDRESS_MASK;
        }
        Instruction::Random { x, nn } => state.registers[x] = random::<u8>() & nn,
        Instruction::Draw { x, y, n } => {
            let collided = draw_sprite(state, display, x, y, n);
            state.registers[FLAG_REGISTER] = u8::from(collided);
        }
        Instruction::SkipKeyPressed { x } => {
            let key = key_operand(state, x)?;
            skip_if(state, input.is_pressed(key));
        }
        Instruction::SkipKeyNotPressed { x } => {
            let key = key_operand(state, x)?;
            skip_if(state, !input.is_pressed(key));
        }
        Instruction::ReadDelay { x } => state.registers[x] = state.delay_timer,
        Instruction::WaitKey { x } => {
            if !take_key_press(state, input, quirks, x) {
                state.awaiting_key = Some(x);
            }
        }
        Instruction::WriteDelay { x } => state.delay_timer = state.registers[x],
        Instruction::WriteSound { x } => state.sound_timer = state.registers[x],
        Instruction::AddIndex { x } => {
            state.index = state.index.wrapping_add(u16::from(state.registers[x]));
        }
        Instruction::FontPointer { x } => {
            let glyph = if quirks.font_pointer_uses_operand {
                x as u16
            } else {
                u16::from(state.registers[x] & 0x0F)
            };
            state.index = glyph * FONT_GLYPH_HEIGHT;
        }
        Instruction::StoreBcd { x } => {
            let value = state.registers[x];
            let index = state.index;
            state.write_byte(index, value / 100);
            state.write_byte(index.wrapping_add(1), (value / 10) % 10);
            state.write_byte(index.wrapping_add(2), value % 10);
        }
        Instruction::StoreRegisters { x } => {
            for offset in 0..=x {
                let address = state.index.wrapping_add(offset as u16);
                state.write_byte(address, state.registers[offset]);
            }
        }
        Instruction::LoadRegisters { x } => {
            for offset in 0..=x {
                let address = state.index.wrapping_add(offset as u16);
                state.registers[offset] = state.read_byte(address);
            }
        }
        Instruction::Unknown(opcode) => return Err(Fault::UnknownOpcode(opcode)),
    }

    Ok(())
}

pub fn tick_timers(state: &mut MachineState) {
    state.delay_timer = state.delay_timer.saturating_sub(1);
    state.sound_timer = state.sound_timer.saturating_sub(1);
}

fn skip_if(state: &mut MachineState, condition: bool) {
    if condition {
        state.pc = state.pc.wrapping_add(2) & ADDRESS_MASK;
    }
}

fn key_operand(state: &MachineState, x: usize) -> Result<u8, Fault> {
    let value = state.registers[x];
    if value > 0x0F {
        return Err(Fault::InvalidKeyOperand {
            register: x as u8,
            value,
        });
    }
    Ok(value)
}

fn take_key_press(
    state: &mut MachineState,
    input: &InputLatch,
    quirks: Chip8Quirks,
    x: usize,
) -> bool {
    match input.first_pressed() {
        Some(key) => {
            state.registers[x] = if quirks.key_wait_stores_one { 1 } else { key };
            true
        }
        None => false,
    }
}

/// XORs an `n`-row sprite from memory at I onto the screen. Returns whether any
/// lit pixel was turned off.
fn draw_sprite(
    state: &MachineState,
    display: &mut Framebuffer,
    x: usize,
    y: usize,
    n: u8,
) -> bool {
    let x_start = (state.registers[x] as usize) % SCREEN_WIDTH;
    let y_start = (state.registers[y] as usize) % SCREEN_HEIGHT;

    let mut collided = false;
    for row in 0..n {
        let sprite_row = state.read_byte(state.index.wrapping_add(u16::from(row)));
        for bit in 0..8 {
            let is_set = (sprite_row >> (7 - bit)) & 0x1 == 1;
            collided |= display.flip_pixel(x_start + bit, y_start + row as usize, is_set);
        }
    }
    collided
}
