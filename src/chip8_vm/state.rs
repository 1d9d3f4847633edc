use crate::chip8_vm::config::{
    ADDRESS_MASK, FONT_BYTES, MEMORY_SIZE, PROGRAM_START, REGISTER_COUNT, STACK_CAPACITY,
};
use crate::chip8_vm::error::Fault;

/// Fixed-capacity return address stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStack {
    slots: [u16; STACK_CAPACITY],
    len: usize,
}

impl Default for CallStack {
    fn default() -> Self {
        Self {
            slots: [0; STACK_CAPACITY],
            len: 0,
        }
    }
}

impl CallStack {
    /// Leaves the stack untouched when it is already full.
    pub fn push(&mut self, address: u16) -> Result<(), Fault> {
        if self.len == STACK_CAPACITY {
            return Err(Fault::StackOverflow);
        }

        self.slots[self.len] = address;
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16, Fault> {
        if self.len == 0 {
            return Err(Fault::StackUnderflow);
        }

        self.len -= 1;
        Ok(self.slots[self.len])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

#[derive(Debug, Clone)]
pub struct MachineState {
    pub memory: [u8; MEMORY_SIZE],
    pub registers: [u8; REGISTER_COUNT],
    pub stack: CallStack,
    pub pc: u16,
    pub index: u16,
    pub delay_timer: u8,
    pub sound_timer: u8,
    /// Register waiting for a key press (Fx0A); while set, no instructions are fetched.
    pub awaiting_key: Option<usize>,
}

impl Default for MachineState {
    fn default() -> Self {
        let mut state = Self {
            memory: [0; MEMORY_SIZE],
            registers: [0; REGISTER_COUNT],
            stack: CallStack::default(),
            pc: PROGRAM_START,
            index: 0,
            delay_timer: 0,
            sound_timer: 0,
            awaiting_key: None,
        };
        load_font(&mut state);
        state
    }
}

impl MachineState {
    pub fn read_byte(&self, address: u16) -> u8 {
        self.memory[(address & ADDRESS_MASK) as usize]
    }

    pub fn write_byte(&mut self, address: u16, value: u8) {
        self.memory[(address & ADDRESS_MASK) as usize] = value;
    }

    /// Big-endian 16-bit word at `address`.
    pub fn read_word(&self, address: u16) -> u16 {
        (u16::from(self.read_byte(address)) << 8)
            | u16::from(self.read_byte(address.wrapping_add(1)))
    }
}

pub fn create_state(program: &[u8]) -> MachineState {
    let mut state = MachineState::default();
    reset_state(&mut state, program);
    state
}

pub fn reset_state(state: &mut MachineState, program: &[u8]) {
    state.memory = [0; MEMORY_SIZE];
    state.registers = [0; REGISTER_COUNT];
    state.stack.clear();

    state.pc = PROGRAM_START;
    state.index = 0;
    state.delay_timer = 0;
    state.sound_timer = 0;
    state.awaiting_key = None;

    load_font(state);
    load_program(state, program);
}

pub fn load_font(state: &mut MachineState) {
    state.memory[..FONT_BYTES.len()].copy_from_slice(&FONT_BYTES);
}

/// Copies `program` to 0x200 onward. Bytes that do not fit are dropped.
pub fn load_program(state: &mut MachineState, program: &[u8]) {
    let start = PROGRAM_START as usize;
    let len = program.len().min(MEMORY_SIZE - start);
    state.memory[start..start + len].copy_from_slice(&program[..len]);
}
