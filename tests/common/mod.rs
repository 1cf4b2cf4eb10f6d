// Common test utilities for ROM-based integration tests
//
// Blargg-style test ROMs write a status byte to $6000 (0x80 while running,
// 0x00 on pass, any other value is an error code) and a human-readable
// message as a null-terminated string starting at $6004. These tests are
// `#[ignore]`d since they depend on copyrighted test ROMs that aren't
// vendored with this repository; run with `cargo test -- --ignored` after
// dropping the ROMs under `tests/nes-test-rom/`.

#![allow(dead_code)]

use nesturia::{CpuBus, Emulator};
use std::path::Path;

/// Frames to run before declaring a test hung.
const MAX_FRAMES: u32 = 600;

const STATUS_RUNNING: u8 = 0x80;
const STATUS_RESET_REQUIRED: u8 = 0x81;

/// Run a Blargg-convention test ROM to completion and report pass/fail.
///
/// `max_cycles` bounds total CPU cycles (roughly `max_cycles / 29780` frames)
/// so a broken ROM cannot hang the test suite.
pub fn run_blargg_style_test(rom_path: &str, max_cycles: u64) -> Result<(bool, String), String> {
    let path = Path::new(rom_path);
    if !path.exists() {
        return Err(format!("test ROM not found: {}", rom_path));
    }

    let mut emulator = Emulator::new();
    emulator
        .load_rom(path)
        .map_err(|e| format!("failed to load {}: {}", rom_path, e))?;

    let max_frames = ((max_cycles / 29_780).max(1) as u32).min(MAX_FRAMES * 100);

    for _ in 0..max_frames {
        emulator.run_frame();

        let status = emulator.read(0x6000);
        if status == STATUS_RUNNING || status == STATUS_RESET_REQUIRED {
            continue;
        }
        if emulator.read(0x6001) != 0xDE || emulator.read(0x6002) != 0xB0 || emulator.read(0x6003) != 0x61 {
            // Signature not yet written; keep running.
            continue;
        }

        let message = read_result_string(&mut emulator, 0x6004, 400);
        return Ok((status == 0x00, message));
    }

    Err(format!(
        "test timed out after {} frames: {}",
        max_frames, rom_path
    ))
}

fn read_result_string(emulator: &mut Emulator, addr: u16, max_len: usize) -> String {
    let mut result = String::new();
    let mut current = addr;
    for _ in 0..max_len {
        let byte = emulator.read(current);
        if byte == 0 {
            break;
        }
        if (0x20..=0x7E).contains(&byte) {
            result.push(byte as char);
        }
        current = current.wrapping_add(1);
    }
    result
}
