use std::path::PathBuf;

use clap::Parser;

use chip8_vm::{
    load_quirks_profile, load_quirks_profile_from_env, run_emulator_app, run_emulator_headless,
    Chip8Error,
};

#[derive(Debug, Parser)]
#[command(name = "chip8-vm")]
#[command(about = "Run a CHIP-8 program")]
struct Args {
    #[arg(long)]
    rom: PathBuf,

    /// Quirk profile; falls back to CHIP8_QUIRKS, then "original".
    #[arg(long, value_parser = ["original", "corrected"])]
    quirks: Option<String>,

    #[arg(long, default_value_t = 16)]
    scale: usize,

    #[arg(long, default_value_t = 60)]
    fps: usize,

    /// Frames to run in headless mode.
    #[arg(long, default_value_t = 600)]
    frames: usize,

    #[arg(long)]
    headless: bool,
}

fn main() -> Result<(), Chip8Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let quirks = match args.quirks.as_deref() {
        Some(profile) => load_quirks_profile(profile),
        None => load_quirks_profile_from_env().map(|(_, quirks)| quirks),
    }
    .map_err(|error| {
        log::error!("{error}");
        Chip8Error::InvalidArgument("quirks must be original or corrected")
    })?;

    if args.headless {
        let run = run_emulator_headless(quirks, &args.rom, args.frames)?;
        let state = run.engine.state();
        println!(
            "headless finished: frames={} pc=0x{:03x} faults={} lit_pixels={}",
            run.frames,
            state.pc,
            run.engine.diagnostics().faults().len(),
            run.display.lit_pixels().count()
        );
        return Ok(());
    }

    run_emulator_app(quirks, &args.rom, args.scale, args.fps)
}
