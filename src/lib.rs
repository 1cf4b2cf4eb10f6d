// NES Emulator Library
// Core library for the NES emulator implementation

pub mod apu;
#[cfg(feature = "audio")]
pub mod audio;
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod display;
pub mod emulator;
pub mod error;
pub mod input;
pub mod ppu;
pub mod ram;

pub use apu::Apu;
#[cfg(feature = "audio")]
pub use audio::{AudioConfig, AudioOutput, AudioSystem, Mixer};
pub use bus::{CpuBus, MemoryMappedDevice};
pub use cartridge::{Cartridge, Mirroring};
pub use cpu::Cpu;
pub use display::{FrameBuffer, WindowConfig};
pub use emulator::{Emulator, EmulatorConfig};
pub use error::EmuError;
pub use input::{Controller, ControllerIO};
pub use ppu::{Ppu, PpuStepResult, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use ram::Ram;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        let _cpu = Cpu::new();
        let _ppu = Ppu::new();
        let _apu = Apu::new();
        let _controller = Controller::new();
        let _controller_io = ControllerIO::new();
        let _ram = Ram::new();
        let _emulator = Emulator::new();
    }
}
