use chip8_vm::{run_emulator_headless, Chip8Error, Fault, ORIGINAL_QUIRKS};

#[test]
fn headless_draws_glyph_from_rom_file() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), [0xA0, 0x00, 0xD0, 0x15, 0x12, 0x04]).unwrap();

    let run = run_emulator_headless(ORIGINAL_QUIRKS, tmp.path(), 3).unwrap();

    assert_eq!(run.frames, 3);
    assert_eq!(run.display.lit_pixels().count(), 14);
    assert_eq!(run.engine.state().pc, 0x204);
    assert!(run.engine.diagnostics().faults().is_empty());
}

#[test]
fn headless_records_faults_without_stopping() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    // RET on an empty stack, then LD V3, 0x33 and spin.
    std::fs::write(tmp.path(), [0x00, 0xEE, 0x63, 0x33, 0x12, 0x04]).unwrap();

    let run = run_emulator_headless(ORIGINAL_QUIRKS, tmp.path(), 1).unwrap();

    assert_eq!(
        run.engine.diagnostics().faults(),
        &[(0x200, Fault::StackUnderflow)]
    );
    assert_eq!(run.engine.state().registers[3], 0x33);
}

#[test]
fn headless_missing_rom_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.ch8");

    let result = run_emulator_headless(ORIGINAL_QUIRKS, &missing, 1);

    assert!(matches!(result, Err(Chip8Error::Io(_))));
}

#[test]
fn headless_rejects_zero_frames() {
    let tmp = tempfile::NamedTempFile::new().unwrap();

    let result = run_emulator_headless(ORIGINAL_QUIRKS, tmp.path(), 0);

    assert!(matches!(result, Err(Chip8Error::InvalidArgument(_))));
}
