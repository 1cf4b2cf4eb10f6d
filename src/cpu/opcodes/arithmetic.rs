// ADC/SBC/INC/INX/INY/DEC/DEX/DEY and the unofficial ISB combo.

use super::{page_cross_bonus, read_operand, write_operand};
use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::{flags, Cpu};

/// Shared ADC core: `A + value + carry`, with carry-out and signed overflow
/// computed the standard way (overflow iff both operands share a sign that
/// differs from the result's).
pub(super) fn adc_value(cpu: &mut Cpu, value: u8) {
    let carry_in = cpu.get_flag(flags::CARRY) as u16;
    let sum = cpu.a as u16 + value as u16 + carry_in;
    let result = sum as u8;
    let overflow = (!(cpu.a ^ value) & (cpu.a ^ result)) & 0x80 != 0;
    cpu.set_flag(flags::CARRY, sum > 0xFF);
    cpu.set_flag(flags::OVERFLOW, overflow);
    cpu.a = result;
    cpu.update_zero_negative(cpu.a);
}

/// SBC is ADC with the subtrahend's bits inverted.
pub(super) fn sbc_value(cpu: &mut Cpu, value: u8) {
    adc_value(cpu, !value);
}

pub(super) fn adc(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    adc_value(cpu, value);
    page_cross_bonus(operand)
}

pub(super) fn sbc(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    sbc_value(cpu, value);
    page_cross_bonus(operand)
}

pub(super) fn inc(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand).wrapping_add(1);
    write_operand(cpu, bus, operand, value);
    cpu.update_zero_negative(value);
    0
}

pub(super) fn inx(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_negative(cpu.x);
    0
}

pub(super) fn iny(cpu: &mut Cpu) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_negative(cpu.y);
    0
}

pub(super) fn dec(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand).wrapping_sub(1);
    write_operand(cpu, bus, operand, value);
    cpu.update_zero_negative(value);
    0
}

pub(super) fn dex(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_negative(cpu.x);
    0
}

pub(super) fn dey(cpu: &mut Cpu) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_negative(cpu.y);
    0
}

/// Unofficial: increment memory, then SBC against the accumulator.
pub(super) fn isb(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand).wrapping_add(1);
    write_operand(cpu, bus, operand, value);
    sbc_value(cpu, value);
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
    fn adc_sets_carry_and_overflow_on_signed_overflow() {
        let mut cpu = Cpu::new();
        cpu.a = 0x7F; // +127
        adc_value(&mut cpu, 0x01); // + 1 -> -128 in signed terms
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.get_flag(flags::OVERFLOW));
        assert!(!cpu.get_flag(flags::CARRY));
    }

    #[test]
    fn sbc_borrows_when_carry_clear() {
        let mut cpu = Cpu::new();
        cpu.a = 0x00;
        cpu.set_flag(flags::CARRY, false); // a pending borrow
        sbc_value(&mut cpu, 0x01);
        assert_eq!(cpu.a, 0xFE);
        assert!(!cpu.get_flag(flags::CARRY));
    }

    #[test]
    fn isb_increments_memory_then_subtracts_from_accumulator() {
        let mut bus = TestBus(Ram::with_zeros());
        bus.write(0x0010, 0x04);
        let mut cpu = Cpu::new();
        cpu.a = 0x10;
        cpu.set_flag(flags::CARRY, true);
        let operand = Operand::Memory {
            address: 0x0010,
            page_crossed: false,
        };
        isb(&mut cpu, &mut bus, operand);
        assert_eq!(bus.read(0x0010), 0x05);
        assert_eq!(cpu.a, 0x0B);
    }
}
