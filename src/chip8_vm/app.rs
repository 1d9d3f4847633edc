use std::path::Path;

use crate::chip8_vm::config::{KEY_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::chip8_vm::diagnostics::RecordingDiagnostics;
use crate::chip8_vm::display::Framebuffer;
use crate::chip8_vm::engine::Chip8;
use crate::chip8_vm::error::Chip8Error;
use crate::chip8_vm::input::InputLatch;
use crate::chip8_vm::quirks::Chip8Quirks;

/// What a headless run leaves behind.
#[derive(Debug)]
pub struct HeadlessRun {
    pub engine: Chip8<RecordingDiagnostics>,
    pub display: Framebuffer,
    pub frames: usize,
}

/// Steps the program `frames` times with no keys held.
pub fn run_emulator_headless(
    quirks: Chip8Quirks,
    rom_path: &Path,
    frames: usize,
) -> Result<HeadlessRun, Chip8Error> {
    if frames == 0 {
        return Err(Chip8Error::InvalidArgument("frames must be > 0"));
    }

    let mut engine = Chip8::with_diagnostics(quirks, RecordingDiagnostics::default());
    engine.init_from_path(rom_path)?;
    log::info!("loaded {} in headless mode", rom_path.display());

    let mut display = Framebuffer::new();
    let input = InputLatch::new();
    for _ in 0..frames {
        engine.step(&mut display, &input);
    }

    Ok(HeadlessRun {
        engine,
        display,
        frames,
    })
}

pub fn run_emulator_app(
    quirks: Chip8Quirks,
    rom_path: &Path,
    scale: usize,
    target_fps: usize,
) -> Result<(), Chip8Error> {
    use raylib::prelude::{Color, KeyboardKey, RaylibDraw};

    if scale == 0 {
        return Err(Chip8Error::InvalidArgument("scale must be > 0"));
    }
    if target_fps == 0 {
        return Err(Chip8Error::InvalidArgument("target_fps must be > 0"));
    }

    let mut engine = Chip8::new(quirks);
    engine.init_from_path(rom_path)?;
    log::info!("loaded {}", rom_path.display());

    let width = (SCREEN_WIDTH * scale) as i32;
    let height = (SCREEN_HEIGHT * scale) as i32;
    let (mut rl, thread) = raylib::init()
        .size(width, height)
        .title("chip8-vm")
        .build();
    rl.set_target_fps(target_fps as u32);

    // Indexed by logical key 0x0..=0xF.
    let key_map: [KeyboardKey; KEY_COUNT] = [
        KeyboardKey::KEY_X,
        KeyboardKey::KEY_ONE,
        KeyboardKey::KEY_TWO,
        KeyboardKey::KEY_THREE,
        KeyboardKey::KEY_Q,
        KeyboardKey::KEY_W,
        KeyboardKey::KEY_E,
        KeyboardKey::KEY_A,
        KeyboardKey::KEY_S,
        KeyboardKey::KEY_D,
        KeyboardKey::KEY_Z,
        KeyboardKey::KEY_C,
        KeyboardKey::KEY_FOUR,
        KeyboardKey::KEY_R,
        KeyboardKey::KEY_F,
        KeyboardKey::KEY_V,
    ];

    let mut display = Framebuffer::new();
    let mut input = InputLatch::new();

    while !rl.window_should_close() {
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            break;
        }

        input.refresh(key_map.map(|key| rl.is_key_down(key)));
        engine.step(&mut display, &input);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        for (x, y) in display.lit_pixels() {
            d.draw_rectangle(
                (x * scale) as i32,
                (y * scale) as i32,
                scale as i32,
                scale as i32,
                Color::WHITE,
            );
        }
    }

    Ok(())
}
