// NES Emulator - Main Entry Point

use nesturia::display::{run_emulator, WindowConfig};
use nesturia::Emulator;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let rom_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: nesturia <rom-path>");
            return ExitCode::from(1);
        }
    };

    println!("nesturia v0.1.0");
    println!("ROM: {}", rom_path);

    let mut emulator = Emulator::new();
    if let Err(err) = emulator.load_rom(&rom_path) {
        eprintln!("Failed to load '{}': {}", rom_path, err);
        return ExitCode::from(err.exit_code() as u8);
    }

    let config = emulator.config();
    let window_config = WindowConfig::new()
        .with_scale(config.window_scale)
        .with_fps(config.fps_cap)
        .with_vsync(config.vsync);

    if let Err(err) = run_emulator(window_config, emulator) {
        eprintln!("Display error: {}", err);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
