pub mod chip8_vm;

pub use chip8_vm::app::{run_emulator_app, run_emulator_headless, HeadlessRun};
pub use chip8_vm::cpu::{
    alu, execute_cycle, execute_instruction, execute_opcode, tick_timers, AluOutput,
};
pub use chip8_vm::diagnostics::{Diagnostics, LogDiagnostics, RecordingDiagnostics};
pub use chip8_vm::display::Framebuffer;
pub use chip8_vm::engine::Chip8;
pub use chip8_vm::error::{Chip8Error, Fault};
pub use chip8_vm::input::InputLatch;
pub use chip8_vm::instruction::{AluOp, Instruction};
pub use chip8_vm::quirks::{
    load_quirks_profile, load_quirks_profile_from_env, Chip8Quirks, CORRECTED_QUIRKS,
    ORIGINAL_QUIRKS,
};
pub use chip8_vm::state::{create_state, load_program, reset_state, CallStack, MachineState};
