// AND/ORA/EOR/BIT bitwise operations.

use super::{page_cross_bonus, read_operand};
use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::{flags, Cpu};

pub(super) fn and(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    cpu.a &= read_operand(cpu, bus, operand);
    cpu.update_zero_negative(cpu.a);
    page_cross_bonus(operand)
}

pub(super) fn ora(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    cpu.a |= read_operand(cpu, bus, operand);
    cpu.update_zero_negative(cpu.a);
    page_cross_bonus(operand)
}

pub(super) fn eor(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    cpu.a ^= read_operand(cpu, bus, operand);
    cpu.update_zero_negative(cpu.a);
    page_cross_bonus(operand)
}

/// BIT tests bits without modifying the accumulator: Z from `A & M`, N and V
/// copied straight from bits 7 and 6 of the memory operand.
pub(super) fn bit(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    cpu.set_flag(flags::ZERO, cpu.a & value == 0);
    cpu.set_flag(flags::NEGATIVE, value & 0x80 != 0);
    cpu.set_flag(flags::OVERFLOW, value & 0x40 != 0);
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ram::Ram;

    struct TestBus(Ram);
    impl CpuBus for TestBus {
        fn read(&mut self, addr: u16) -> u8 {
            crate::bus::MemoryMappedDevice::read(&self.0, addr)
        }
        fn write(&mut self, addr: u16, data: u8) {
            crate::bus::MemoryMappedDevice::write(&mut self.0, addr, data)
        }
    }

    #[test]
    fn bit_copies_bits_six_and_seven_without_touching_accumulator() {
        let mut bus = TestBus(Ram::with_zeros());
        bus.write(0x0010, 0b1100_0000);
        let mut cpu = Cpu::new();
        cpu.a = 0xFF;
        let operand = Operand::Memory {
            address: 0x0010,
            page_crossed: false,
        };
        bit(&mut cpu, &mut bus, operand);
        assert_eq!(cpu.a, 0xFF);
        assert!(cpu.get_flag(flags::NEGATIVE));
        assert!(cpu.get_flag(flags::OVERFLOW));
        assert!(!cpu.get_flag(flags::ZERO));
    }

    #[test]
    fn and_sets_zero_flag_when_result_is_zero() {
        let mut bus = TestBus(Ram::with_zeros());
        bus.write(0x0010, 0x00);
        let mut cpu = Cpu::new();
        cpu.a = 0xFF;
        let operand = Operand::Memory {
            address: 0x0010,
            page_crossed: false,
        };
        and(&mut cpu, &mut bus, operand);
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_flag(flags::ZERO));
    }
}
