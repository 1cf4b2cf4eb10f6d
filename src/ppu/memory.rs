// PPU memory access (VRAM, palette RAM, pattern tables). Pattern-table
// access ($0000-$1FFF) is routed through the cartridge, which is passed
// in explicitly rather than held behind a shared pointer — the PPU has
// no back-reference to anything else in the system.

use super::constants::NAMETABLE_SIZE;
use super::Ppu;
use crate::cartridge::{Cartridge, Mirroring};

impl Ppu {
    /// Map a nametable address ($2000-$2FFF) to its physical offset in the
    /// console's 2KB of VRAM, according to the cartridge's mirroring mode.
    pub(super) fn mirror_nametable_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x0FFF) as usize;
        let table = addr / NAMETABLE_SIZE;
        let offset = addr % NAMETABLE_SIZE;

        let mirrored_table = match self.mirroring {
            Mirroring::Horizontal => match table {
                0 | 1 => 0,
                _ => 1,
            },
            Mirroring::Vertical => match table {
                0 | 2 => 0,
                _ => 1,
            },
            Mirroring::SingleScreenLo => 0,
            Mirroring::SingleScreenHi => 1,
            // Four-screen needs a second physical 2KB bank the cartridge
            // would supply; no four-screen board is implemented yet, so
            // fall back to horizontal.
            Mirroring::FourScreen => match table {
                0 | 1 => 0,
                _ => 1,
            },
        };

        mirrored_table * NAMETABLE_SIZE + offset
    }

    /// $3F10/$3F14/$3F18/$3F1C mirror $3F00/$3F04/$3F08/$3F0C: sprite
    /// palette 0 entry 0 is always the universal background color.
    pub(super) fn mirror_palette_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x001F) as usize;
        if addr >= 16 && addr % 4 == 0 {
            addr - 16
        } else {
            addr
        }
    }

    pub(super) fn read_ppu_memory(&mut self, cart: &mut Cartridge, addr: u16) -> u8 {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => {
                if cart.notify_ppu_address(addr) {
                    self.mapper_irq = true;
                }
                cart.ppu_read(addr)
            }
            0x2000..=0x2FFF => self.nametables[self.mirror_nametable_addr(addr)],
            0x3000..=0x3EFF => self.nametables[self.mirror_nametable_addr(addr - 0x1000)],
            0x3F00..=0x3FFF => self.palette_ram[self.mirror_palette_addr(addr)],
            _ => unreachable!(),
        }
    }

    pub(super) fn write_ppu_memory(&mut self, cart: &mut Cartridge, addr: u16, data: u8) {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => {
                if cart.notify_ppu_address(addr) {
                    self.mapper_irq = true;
                }
                cart.ppu_write(addr, data);
            }
            0x2000..=0x2FFF => {
                let i = self.mirror_nametable_addr(addr);
                self.nametables[i] = data;
            }
            0x3000..=0x3EFF => {
                let i = self.mirror_nametable_addr(addr - 0x1000);
                self.nametables[i] = data;
            }
            0x3F00..=0x3FFF => {
                let i = self.mirror_palette_addr(addr);
                self.palette_ram[i] = data;
            }
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cart() -> Cartridge {
        let mut data = vec![0u8; 16 + 16 * 1024 + 8 * 1024];
        data[0..4].copy_from_slice(b"NES\x1A");
        data[4] = 1;
        data[5] = 1;
        Cartridge::from_ines_bytes(&data).unwrap()
    }

    #[test]
    fn horizontal_mirroring_maps_both_top_nametables_together() {
        let mut ppu = Ppu::new();
        ppu.set_mirroring(Mirroring::Horizontal);
        assert_eq!(ppu.mirror_nametable_addr(0x2000), ppu.mirror_nametable_addr(0x2400));
        assert_ne!(ppu.mirror_nametable_addr(0x2000), ppu.mirror_nametable_addr(0x2800));
    }

    #[test]
    fn vertical_mirroring_maps_both_left_nametables_together() {
        let mut ppu = Ppu::new();
        ppu.set_mirroring(Mirroring::Vertical);
        assert_eq!(ppu.mirror_nametable_addr(0x2000), ppu.mirror_nametable_addr(0x2800));
        assert_ne!(ppu.mirror_nametable_addr(0x2000), ppu.mirror_nametable_addr(0x2400));
    }

    #[test]
    fn single_screen_mirroring_maps_every_nametable_to_one_bank() {
        let mut ppu = Ppu::new();
        ppu.set_mirroring(Mirroring::SingleScreenLo);
        let a = ppu.mirror_nametable_addr(0x2000);
        let b = ppu.mirror_nametable_addr(0x2400);
        let c = ppu.mirror_nametable_addr(0x2C00);
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn sprite_palette_background_entries_mirror_to_universal_background() {
        let ppu = Ppu::new();
        assert_eq!(ppu.mirror_palette_addr(0x10), 0x00);
        assert_eq!(ppu.mirror_palette_addr(0x14), 0x04);
        assert_eq!(ppu.mirror_palette_addr(0x18), 0x08);
        assert_eq!(ppu.mirror_palette_addr(0x1C), 0x0C);
    }

    #[test]
    fn non_aliased_palette_entries_pass_through_unchanged() {
        let ppu = Ppu::new();
        assert_eq!(ppu.mirror_palette_addr(0x11), 0x11);
        assert_eq!(ppu.mirror_palette_addr(0x05), 0x05);
    }

    #[test]
    fn nametable_write_then_read_round_trips_through_mirroring() {
        let mut ppu = Ppu::new();
        let mut cart = test_cart();
        ppu.set_mirroring(Mirroring::Vertical);
        ppu.write_ppu_memory(&mut cart, 0x2005, 0x42);
        assert_eq!(ppu.read_ppu_memory(&mut cart, 0x2805), 0x42);
    }

    #[test]
    fn palette_write_then_read_round_trips() {
        let mut ppu = Ppu::new();
        let mut cart = test_cart();
        ppu.write_ppu_memory(&mut cart, 0x3F05, 0x2A);
        assert_eq!(ppu.read_ppu_memory(&mut cart, 0x3F05), 0x2A);
    }

    #[test]
    fn pattern_table_access_round_trips_through_chr_ram() {
        let mut ppu = Ppu::new();
        let mut cart = test_cart();
        ppu.write_ppu_memory(&mut cart, 0x0010, 0x99);
        assert_eq!(ppu.read_ppu_memory(&mut cart, 0x0010), 0x99);
    }
}
