mod emulator;
mod input;
mod rom;
mod video;

use std::path::PathBuf;

use clap::Parser;

use invaders_core::cpu::Intel8080;
use invaders_core::machine::{self, Machine};
use invaders_core::scheduler::Scheduler;

/// Intel 8080 Space Invaders arcade emulator.
#[derive(Parser)]
struct Args {
    /// Path to the raw 8080 ROM image.
    rom_path: PathBuf,

    /// Window scale factor.
    #[arg(long, default_value_t = 3)]
    scale: u32,

    /// Return the diagnostic-ROM constant (0x0E) from IN 0 instead of the
    /// production Space Invaders constant (0x01).
    #[arg(long)]
    diagnostics: bool,

    /// Disable the video color overlay; render all set pixels white.
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    let rom_bytes = rom::load(&args.rom_path);
    let port0 = if args.diagnostics {
        machine::PORT0_DIAGNOSTIC
    } else {
        machine::PORT0_SPACE_INVADERS
    };

    let mut machine = match Machine::with_port0(&rom_bytes, port0) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("fatal: {e}");
            std::process::exit(1);
        }
    };
    let mut cpu = Intel8080::new();
    let mut scheduler = Scheduler::new();

    let sdl_context = match sdl2::init() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("fatal: failed to initialize SDL2: {e}");
            std::process::exit(1);
        }
    };
    let mut video_out = match video::Video::new(&sdl_context, args.scale) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("fatal: failed to create window: {e}");
            std::process::exit(1);
        }
    };

    let key_map = input::default_key_map();

    if let Err(e) = emulator::run(
        &sdl_context,
        &mut video_out,
        &mut cpu,
        &mut machine,
        &mut scheduler,
        &key_map,
        !args.no_color,
    ) {
        eprintln!("fatal: {e}");
        std::process::exit(1);
    }
}
