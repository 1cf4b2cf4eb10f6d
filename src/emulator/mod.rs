// Emulator module - owns every component and wires them into a CpuBus.
//
// Unlike a design where the bus is its own struct holding references into
// components, `Emulator` borrows `Cpu`, `Ppu`, `Apu`, `Cartridge` and the
// two controllers directly and implements `CpuBus` on itself, because a
// single CPU instruction can touch all of them at once (a PPU register
// write can raise an NMI the CPU observes on its very next step).

mod config;

pub use config::EmulatorConfig;

#[cfg(feature = "audio")]
use crate::audio::AudioSystem;
use crate::apu::Apu;
use crate::bus::{self, BusRegion, CpuBus, MemoryMappedDevice};
use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use crate::error::EmuError;
use crate::input::{Controller, ControllerIO};
use crate::ppu::Ppu;
use crate::ram::Ram;
use std::path::Path;

/// CPU cycles an OAM DMA transfer steals: 256 byte-copies at 2 cycles each,
/// plus one alignment cycle, plus one more if the DMA started on an odd CPU
/// cycle.
const OAM_DMA_CYCLES: u32 = 513;

/// Coordinates CPU, PPU, APU, cartridge and controller state and drives
/// them in lockstep. `run_frame` is the one entry point a host needs to
/// call once per displayed frame; `set_controller` before it and
/// `framebuffer`/`audio_samples` after it round out the interface.
pub struct Emulator {
    cpu: Cpu,
    ppu: Ppu,
    apu: Apu,
    ram: Ram,
    controllers: ControllerIO,
    cartridge: Option<Cartridge>,
    config: EmulatorConfig,
    /// Odd/even toggle the OAM DMA alignment-cycle penalty depends on.
    cpu_cycles: u64,
    dma_stall: u32,
    #[cfg(feature = "audio")]
    audio: Option<AudioSystem>,
}

impl Emulator {
    pub fn new() -> Self {
        let config = EmulatorConfig::load_or_default();
        let mut apu = Apu::new();
        apu.write_register(0x4017, if config.four_step_frame_counter { 0x00 } else { 0x80 });

        Emulator {
            cpu: Cpu::new(),
            ppu: Ppu::new(),
            apu,
            ram: Ram::new(),
            controllers: ControllerIO::new(),
            cartridge: None,
            #[cfg(feature = "audio")]
            audio: Self::build_audio_system(&config),
            config,
            cpu_cycles: 0,
            dma_stall: 0,
        }
    }

    #[cfg(feature = "audio")]
    fn build_audio_system(config: &EmulatorConfig) -> Option<AudioSystem> {
        if !config.audio_enabled {
            return None;
        }
        let audio_config =
            crate::audio::AudioConfig::new().with_sample_rate(config.audio_sample_rate);
        match AudioSystem::new(audio_config) {
            Ok(system) => Some(system),
            Err(err) => {
                eprintln!("Audio unavailable, continuing without sound: {err}");
                None
            }
        }
    }

    /// Load a ROM from disk and reset to its power-on state.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EmuError> {
        let cartridge = Cartridge::from_ines_file(path)?;
        self.ppu.set_mirroring(cartridge.mirroring);
        self.cartridge = Some(cartridge);
        self.reset();
        Ok(())
    }

    /// Reset CPU, PPU, APU and controller I/O to their power-on state. The
    /// loaded cartridge (if any) is left untouched, matching a physical
    /// reset button press.
    pub fn reset(&mut self) {
        self.ppu.reset();
        self.apu.reset();
        self.controllers.reset();
        let mut cpu = std::mem::take(&mut self.cpu);
        cpu.reset(self);
        self.cpu = cpu;
    }

    /// Feed one player's current button state into the machine. Call at
    /// least once per frame before `run_frame`.
    pub fn set_controller(&mut self, port: u8, buttons: Controller) {
        match port {
            0 => self.controllers.set_controller1(buttons),
            1 => self.controllers.set_controller2(buttons),
            _ => {}
        }
    }

    /// Run CPU/PPU/APU in lockstep until one full frame has been rendered.
    pub fn run_frame(&mut self) {
        loop {
            let irq_line = self.apu.irq_pending()
                || self
                    .cartridge
                    .as_ref()
                    .map(Cartridge::irq_pending)
                    .unwrap_or(false);

            let mut cpu = std::mem::take(&mut self.cpu);
            let cycles = cpu.step(self, irq_line);
            self.cpu = cpu;

            let mut frame_done = false;
            for _ in 0..cycles {
                self.cpu_cycles += 1;
                self.apu.step();
                if let Some(addr) = self.apu.take_dmc_sample_request() {
                    let byte = self.read(addr);
                    self.apu.provide_dmc_sample(byte);
                }
                #[cfg(feature = "audio")]
                if let Some(audio) = &mut self.audio {
                    audio.process_apu_sample(
                        self.apu.pulse1_output(),
                        self.apu.pulse2_output(),
                        self.apu.triangle_output(),
                        self.apu.noise_output(),
                        self.apu.dmc_output(),
                    );
                }

                for _ in 0..3 {
                    if let Some(cartridge) = &mut self.cartridge {
                        let result = self.ppu.step(cartridge);
                        if result.nmi {
                            self.cpu.request_nmi();
                        }
                        if result.frame_complete {
                            frame_done = true;
                        }
                    }
                }
            }

            if frame_done {
                break;
            }
        }
    }

    /// Current PPU frame buffer: 256x240 palette indices.
    pub fn framebuffer(&self) -> &[u8] {
        self.ppu.frame()
    }

    #[cfg(feature = "audio")]
    pub fn audio_system(&mut self) -> Option<&mut AudioSystem> {
        self.audio.as_mut()
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    fn oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        for i in 0..256u16 {
            let byte = self.read(base + i);
            self.ppu.write_oam(i as u8, byte);
        }
        let odd_cycle = self.cpu_cycles % 2 == 1;
        self.dma_stall += OAM_DMA_CYCLES + if odd_cycle { 1 } else { 0 };
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuBus for Emulator {
    fn read(&mut self, addr: u16) -> u8 {
        match bus::classify(addr) {
            BusRegion::Ram => self.ram.read(addr),
            BusRegion::PpuRegister => {
                let register = bus::ppu_register(addr);
                if let Some(cartridge) = &mut self.cartridge {
                    self.ppu.read_register(register, cartridge)
                } else {
                    0
                }
            }
            BusRegion::OamDma => 0,
            BusRegion::Controller1 => self.controllers.read(0x4016),
            BusRegion::Controller2OrFrameCounter => self.controllers.read(0x4017),
            BusRegion::Apu => self.apu.read_register(addr),
            BusRegion::IoTest => 0,
            BusRegion::Cartridge => self
                .cartridge
                .as_ref()
                .map(|c| c.cpu_read(addr))
                .unwrap_or(0),
        }
    }

    fn write(&mut self, addr: u16, data: u8) {
        match bus::classify(addr) {
            BusRegion::Ram => self.ram.write(addr, data),
            BusRegion::PpuRegister => {
                let register = bus::ppu_register(addr);
                if let Some(cartridge) = &mut self.cartridge {
                    self.ppu.write_register(register, data, cartridge);
                }
            }
            BusRegion::OamDma => self.oam_dma(data),
            BusRegion::Controller1 => self.controllers.write(0x4016, data),
            BusRegion::Controller2OrFrameCounter => self.apu.write_register(0x4017, data),
            BusRegion::Apu => self.apu.write_register(addr, data),
            BusRegion::IoTest => {}
            BusRegion::Cartridge => {
                if let Some(cartridge) = &mut self.cartridge {
                    cartridge.cpu_write(addr, data);
                    self.ppu.set_mirroring(cartridge.mirroring);
                }
            }
        }
    }

    fn take_dma_stall(&mut self) -> u32 {
        std::mem::take(&mut self.dma_stall)
    }
}
