// Cartridge module - iNES ROM loading and mapper dispatch
//
// A `Cartridge` owns the cartridge's immutable PRG/CHR bytes (CHR-RAM
// excepted), 8KB of PRG-RAM at $6000-$7FFF, and the mapper-specific bank
// switching state. Mapper dispatch is a closed tagged union (`MapperState`)
// rather than a `Box<dyn Mapper>` trait object: the five supported mappers
// are a fixed set (see `cartridge::mappers`), so there is no need for open
// registration or dynamic dispatch overhead on every PRG/CHR access.

pub mod mappers;

use crate::error::EmuError;
use mappers::{mapper0, mapper1, mapper2, mapper3, mapper4, MapperState};
use std::fs;
use std::path::Path;

const INES_MAGIC: [u8; 4] = [b'N', b'E', b'S', 0x1A];
const HEADER_SIZE: usize = 16;
const TRAINER_SIZE: usize = 512;
const PRG_BANK_SIZE: usize = 16 * 1024;
const CHR_BANK_SIZE: usize = 8 * 1024;
const PRG_RAM_SIZE: usize = 8 * 1024;

/// Which of the four logical nametable slots a physical nametable aliases to.
///
/// `SingleScreenLo`/`SingleScreenHi` are not present in the iNES header; they
/// only arise at runtime from MMC1's dynamic mirroring control bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
    SingleScreenLo,
    SingleScreenHi,
}

/// A parsed iNES ROM image plus live mapper state.
pub struct Cartridge {
    pub prg_rom: Vec<u8>,
    pub chr_rom: Vec<u8>,
    pub chr_is_ram: bool,
    pub prg_ram: Vec<u8>,
    pub mapper_id: u8,
    pub battery_backed: bool,
    pub mirroring: Mirroring,
    state: MapperState,
}

impl Cartridge {
    /// Parse an iNES file already read into memory.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, EmuError> {
        if data.len() < HEADER_SIZE || data[0..4] != INES_MAGIC {
            return Err(EmuError::RomInvalid("missing 'NES\\x1A' magic".into()));
        }

        let prg_banks = data[4] as usize;
        let chr_banks = data[5] as usize;
        let flags6 = data[6];
        let flags7 = data[7];

        let mapper_id = (flags7 & 0xF0) | (flags6 >> 4);
        let has_trainer = flags6 & 0b0000_0100 != 0;
        let four_screen = flags6 & 0b0000_1000 != 0;
        let battery_backed = flags6 & 0b0000_0010 != 0;
        let mirroring = if four_screen {
            Mirroring::FourScreen
        } else if flags6 & 0b0000_0001 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        let mut offset = HEADER_SIZE;
        if has_trainer {
            offset += TRAINER_SIZE;
        }

        let prg_size = prg_banks * PRG_BANK_SIZE;
        let chr_size = chr_banks * CHR_BANK_SIZE;
        if data.len() < offset + prg_size + chr_size {
            return Err(EmuError::RomInvalid(format!(
                "truncated ROM: expected at least {} bytes, got {}",
                offset + prg_size + chr_size,
                data.len()
            )));
        }

        let prg_rom = data[offset..offset + prg_size].to_vec();
        offset += prg_size;

        let (chr_rom, chr_is_ram) = if chr_banks == 0 {
            (vec![0u8; CHR_BANK_SIZE], true)
        } else {
            (data[offset..offset + chr_size].to_vec(), false)
        };

        let state = match mapper_id {
            0 => MapperState::Nrom,
            1 => MapperState::Mmc1(mapper1::Mmc1State::new()),
            2 => MapperState::Unrom(mapper2::UnromState::new()),
            3 => MapperState::Cnrom(mapper3::CnromState::new()),
            4 => MapperState::Mmc3(mapper4::Mmc3State::new()),
            other => {
                return Err(EmuError::RomUnsupported(format!(
                    "mapper {other} is not implemented (supported: 0,1,2,3,4)"
                )))
            }
        };

        Ok(Cartridge {
            prg_rom,
            chr_rom,
            chr_is_ram,
            prg_ram: vec![0u8; PRG_RAM_SIZE],
            mapper_id,
            battery_backed,
            mirroring,
            state,
        })
    }

    /// Load and parse an iNES ROM file from disk.
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, EmuError> {
        let data = fs::read(path)?;
        Self::from_ines_bytes(&data)
    }

    /// Read a byte as seen by the CPU ($4020-$FFFF is cartridge space; PRG-RAM
    /// lives at $6000-$7FFF, mapper-banked PRG-ROM at $8000-$FFFF).
    pub fn cpu_read(&self, addr: u16) -> u8 {
        match addr {
            0x6000..=0x7FFF => self.prg_ram[(addr - 0x6000) as usize],
            0x8000..=0xFFFF => match &self.state {
                MapperState::Nrom => mapper0::cpu_read(&self.prg_rom, addr),
                MapperState::Mmc1(s) => mapper1::cpu_read(s, &self.prg_rom, addr),
                MapperState::Unrom(s) => mapper2::cpu_read(s, &self.prg_rom, addr),
                MapperState::Cnrom(_) => mapper3::cpu_read(&self.prg_rom, addr),
                MapperState::Mmc3(s) => mapper4::cpu_read(s, &self.prg_rom, addr),
            },
            _ => 0,
        }
    }

    /// Write to cartridge space. PRG-RAM writes are masked when MMC3's
    /// RAM-protect bit disables them; `$8000-$FFFF` writes reach the mapper's
    /// bank-switching registers and never mutate PRG-ROM bytes.
    pub fn cpu_write(&mut self, addr: u16, data: u8) {
        match addr {
            0x6000..=0x7FFF => {
                if self.prg_ram_writable() {
                    self.prg_ram[(addr - 0x6000) as usize] = data;
                }
            }
            0x8000..=0xFFFF => {
                let new_mirroring = match &mut self.state {
                    MapperState::Nrom => None,
                    MapperState::Mmc1(s) => mapper1::cpu_write(s, &self.prg_rom, addr, data),
                    MapperState::Unrom(s) => mapper2::cpu_write(s, addr, data),
                    MapperState::Cnrom(s) => mapper3::cpu_write(s, addr, data),
                    MapperState::Mmc3(s) => mapper4::cpu_write(s, addr, data),
                };
                if let Some(m) = new_mirroring {
                    self.mirroring = m;
                }
            }
            _ => {}
        }
    }

    fn prg_ram_writable(&self) -> bool {
        match &self.state {
            MapperState::Mmc3(s) => s.prg_ram_writable(),
            _ => true,
        }
    }

    /// Read a byte from the PPU's pattern-table window ($0000-$1FFF).
    pub fn ppu_read(&self, addr: u16) -> u8 {
        match &self.state {
            MapperState::Nrom => mapper0::ppu_read(&self.chr_rom, addr),
            MapperState::Mmc1(s) => mapper1::ppu_read(s, &self.chr_rom, addr),
            MapperState::Unrom(_) => mapper2::ppu_read(&self.chr_rom, addr),
            MapperState::Cnrom(s) => mapper3::ppu_read(s, &self.chr_rom, addr),
            MapperState::Mmc3(s) => mapper4::ppu_read(s, &self.chr_rom, addr),
        }
    }

    /// Write to CHR memory; a no-op unless CHR-RAM is present.
    pub fn ppu_write(&mut self, addr: u16, data: u8) {
        if !self.chr_is_ram {
            return;
        }
        match &self.state {
            MapperState::Nrom | MapperState::Unrom(_) => {
                mapper0::ppu_write(&mut self.chr_rom, addr, data)
            }
            MapperState::Mmc1(s) => mapper1::ppu_write(s, &mut self.chr_rom, addr, data),
            MapperState::Cnrom(s) => mapper3::ppu_write(s, &mut self.chr_rom, addr, data),
            MapperState::Mmc3(s) => mapper4::ppu_write(s, &mut self.chr_rom, addr, data),
        }
    }

    /// Notify the mapper of the PPU address bus value on every PPU memory
    /// access during rendering, so MMC3 can detect A12 rising edges for its
    /// scanline IRQ counter. Returns `true` the instant the IRQ should raise.
    pub fn notify_ppu_address(&mut self, addr: u16) -> bool {
        if let MapperState::Mmc3(s) = &mut self.state {
            mapper4::notify_a12(s, addr)
        } else {
            false
        }
    }

    /// Acknowledge (clear) a pending MMC3 IRQ, mirroring a CPU write to
    /// $E000 on real hardware.
    pub fn acknowledge_irq(&mut self) {
        if let MapperState::Mmc3(s) = &mut self.state {
            s.irq_pending = false;
        }
    }

    pub fn irq_pending(&self) -> bool {
        match &self.state {
            MapperState::Mmc3(s) => s.irq_pending,
            _ => false,
        }
    }
}
