use crate::chip8_vm::error::Fault;
use crate::chip8_vm::instruction::Instruction;

/// Receives what the engine observes while running a program.
///
/// `pc` is always the address the instruction was fetched from.
pub trait Diagnostics {
    fn fault(&mut self, pc: u16, fault: Fault);

    fn executed(&mut self, _pc: u16, _instruction: &Instruction) {}
}

/// Forwards faults to `log::warn!` and every executed instruction to `log::trace!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn fault(&mut self, pc: u16, fault: Fault) {
        log::warn!("0x{pc:03x}: {fault}");
    }

    fn executed(&mut self, pc: u16, instruction: &Instruction) {
        log::trace!("0x{pc:03x}: {instruction}");
    }
}

/// Keeps every fault so harnesses can inspect a run afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    faults: Vec<(u16, Fault)>,
    executed: usize,
}

impl RecordingDiagnostics {
    pub fn faults(&self) -> &[(u16, Fault)] {
        &self.faults
    }

    pub fn count(&self, fault: Fault) -> usize {
        self.faults.iter().filter(|(_, seen)| *seen == fault).count()
    }

    /// Number of instructions executed, including ones that faulted.
    pub fn executed_count(&self) -> usize {
        self.executed
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn fault(&mut self, pc: u16, fault: Fault) {
        self.faults.push((pc, fault));
    }

    fn executed(&mut self, _pc: u16, _instruction: &Instruction) {
        self.executed += 1;
    }
}
