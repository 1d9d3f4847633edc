use std::fs;
use std::io::Read;
use std::path::Path;

use crate::chip8_vm::config::CYCLES_PER_FRAME;
use crate::chip8_vm::cpu::{execute_cycle, tick_timers};
use crate::chip8_vm::diagnostics::{Diagnostics, LogDiagnostics};
use crate::chip8_vm::display::Framebuffer;
use crate::chip8_vm::error::Chip8Error;
use crate::chip8_vm::input::InputLatch;
use crate::chip8_vm::quirks::Chip8Quirks;
use crate::chip8_vm::state::{reset_state, MachineState};

/// The CHIP-8 execution engine.
///
/// Owns memory, registers, stack and timers. The framebuffer and input latch
/// belong to the host and are only borrowed for the duration of [`Chip8::step`].
/// A new engine is halted until a program has been loaded.
#[derive(Debug)]
pub struct Chip8<D: Diagnostics = LogDiagnostics> {
    state: MachineState,
    quirks: Chip8Quirks,
    diagnostics: D,
    halted: bool,
}

impl Chip8<LogDiagnostics> {
    pub fn new(quirks: Chip8Quirks) -> Self {
        Self::with_diagnostics(quirks, LogDiagnostics)
    }
}

impl<D: Diagnostics> Chip8<D> {
    pub fn with_diagnostics(quirks: Chip8Quirks, diagnostics: D) -> Self {
        Self {
            state: MachineState::default(),
            quirks,
            diagnostics,
            halted: true,
        }
    }

    /// Resets the machine and loads the program read from `source`.
    ///
    /// On a read error the engine stays halted.
    pub fn init<R: Read>(&mut self, mut source: R) -> Result<(), Chip8Error> {
        let mut program = Vec::new();
        if let Err(error) = source.read_to_end(&mut program) {
            self.halted = true;
            return Err(error.into());
        }

        self.load_program(&program);
        Ok(())
    }

    pub fn init_from_path(&mut self, path: &Path) -> Result<(), Chip8Error> {
        match fs::read(path) {
            Ok(program) => {
                self.load_program(&program);
                Ok(())
            }
            Err(error) => {
                self.halted = true;
                Err(error.into())
            }
        }
    }

    /// Resets the machine with `program` at 0x200. Bytes past the end of memory are dropped.
    pub fn load_program(&mut self, program: &[u8]) {
        reset_state(&mut self.state, program);
        self.halted = false;
    }

    /// Runs one frame: a fixed number of cycles, then one timer tick.
    pub fn step(&mut self, display: &mut Framebuffer, input: &InputLatch) {
        if self.halted {
            return;
        }

        for _ in 0..CYCLES_PER_FRAME {
            execute_cycle(
                &mut self.state,
                display,
                input,
                self.quirks,
                &mut self.diagnostics,
            );
        }

        tick_timers(&mut self.state);
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn is_awaiting_key(&self) -> bool {
        self.state.awaiting_key.is_some()
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MachineState {
        &mut self.state
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }
}
