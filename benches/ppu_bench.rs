// PPU Benchmarks
// Performance benchmarks for PPU rendering operations

use criterion::{criterion_group, criterion_main, Criterion};
use nesturia::{Cartridge, Ppu};
use std::hint::black_box;

const PPUCTRL: u16 = 0;
const PPUMASK: u16 = 1;
const PPUSTATUS: u16 = 2;
const OAMADDR: u16 = 3;
const OAMDATA: u16 = 4;
const PPUADDR: u16 = 6;
const PPUDATA: u16 = 7;

/// Minimal mapper-0 cartridge: 16KB PRG-ROM, 8KB CHR-ROM filled with a test
/// pattern so PPU pattern-table reads aren't benchmarking all-zero memory.
fn create_test_cartridge() -> Cartridge {
    let mut rom = vec![0u8; 16 + 16 * 1024 + 8 * 1024];
    rom[0..4].copy_from_slice(b"NES\x1A");
    rom[4] = 1; // 1 x 16KB PRG-ROM bank
    rom[5] = 1; // 1 x 8KB CHR-ROM bank
    rom[6] = 0x00; // horizontal mirroring, mapper 0
    rom[7] = 0x00;
    for byte in rom[16 + 16 * 1024..].iter_mut() {
        *byte = 0xAA;
    }
    Cartridge::from_ines_bytes(&rom).expect("valid test cartridge")
}

/// Benchmark PPU step execution (cycle-by-cycle)
/// This is the main performance-critical path for the PPU
fn bench_ppu_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_rendering");
    group.sample_size(20); // Reduce sample size for rendering benchmarks

    // Benchmark a full frame of PPU steps
    // One frame = 262 scanlines * 341 cycles = 89,342 cycles
    group.bench_function("full_frame_via_step", |b| {
        let mut ppu = Ppu::new();
        let mut cart = create_test_cartridge();
        ppu.set_mirroring(cart.mirroring);
        ppu.write_register(PPUMASK, 0b0001_1110, &mut cart); // show background and sprites

        b.iter(|| {
            for _ in 0..89342 {
                black_box(ppu.step(&mut cart));
            }
            black_box(ppu.frame());
        });
    });

    group.finish();
}

/// Benchmark PPU step execution at different granularities
fn bench_ppu_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_step");

    group.bench_function("single_step", |b| {
        let mut ppu = Ppu::new();
        let mut cart = create_test_cartridge();
        ppu.set_mirroring(cart.mirroring);

        b.iter(|| {
            black_box(ppu.step(&mut cart));
        });
    });

    group.bench_function("scanline_341_cycles", |b| {
        let mut ppu = Ppu::new();
        let mut cart = create_test_cartridge();
        ppu.set_mirroring(cart.mirroring);

        b.iter(|| {
            for _ in 0..341 {
                ppu.step(&mut cart);
            }
        });
    });

    group.finish();
}

/// Benchmark PPU register access patterns
fn bench_ppu_registers(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_registers");

    group.bench_function("ppuctrl_write", |b| {
        let mut ppu = Ppu::new();
        let mut cart = create_test_cartridge();
        ppu.set_mirroring(cart.mirroring);

        b.iter(|| {
            ppu.write_register(black_box(PPUCTRL), black_box(0b1001_0000), &mut cart);
        });
    });

    group.bench_function("ppustatus_read", |b| {
        let mut ppu = Ppu::new();
        let mut cart = create_test_cartridge();
        ppu.set_mirroring(cart.mirroring);

        b.iter(|| {
            black_box(ppu.read_register(PPUSTATUS, &mut cart));
        });
    });

    group.bench_function("ppudata_write_sequence", |b| {
        let mut ppu = Ppu::new();
        let mut cart = create_test_cartridge();
        ppu.set_mirroring(cart.mirroring);

        b.iter(|| {
            // Set VRAM address
            ppu.write_register(PPUADDR, 0x20, &mut cart); // High byte
            ppu.write_register(PPUADDR, 0x00, &mut cart); // Low byte

            // Write 32 bytes
            for i in 0..32u8 {
                ppu.write_register(PPUDATA, i, &mut cart);
            }
        });
    });

    group.finish();
}

/// Benchmark OAM (Object Attribute Memory) access patterns
fn bench_ppu_oam(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_oam");

    group.bench_function("oam_write", |b| {
        let mut ppu = Ppu::new();
        let mut cart = create_test_cartridge();
        ppu.set_mirroring(cart.mirroring);

        b.iter(|| {
            ppu.write_register(OAMADDR, 0, &mut cart); // Set OAM address to 0
            for i in 0..=255u8 {
                ppu.write_register(OAMDATA, i, &mut cart);
            }
        });
    });

    group.bench_function("oam_read", |b| {
        let mut ppu = Ppu::new();
        let mut cart = create_test_cartridge();
        ppu.set_mirroring(cart.mirroring);

        b.iter(|| {
            black_box(ppu.read_register(OAMDATA, &mut cart));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ppu_rendering,
    bench_ppu_step,
    bench_ppu_registers,
    bench_ppu_oam
);
criterion_main!(benches);
