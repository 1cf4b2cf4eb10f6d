// ASL/LSR/ROL/ROR and the unofficial SLO/RLA/SRE/RRA read-modify-write
// combos (each is the shift/rotate immediately followed by the named ALU
// op against the accumulator, using the shifted value).

use super::arithmetic::adc_value;
use super::{read_operand, write_operand};
use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::{flags, Cpu};

fn asl_value(cpu: &mut Cpu, value: u8) -> u8 {
    cpu.set_flag(flags::CARRY, value & 0x80 != 0);
    let result = value << 1;
    cpu.update_zero_negative(result);
    result
}

fn lsr_value(cpu: &mut Cpu, value: u8) -> u8 {
    cpu.set_flag(flags::CARRY, value & 0x01 != 0);
    let result = value >> 1;
    cpu.update_zero_negative(result);
    result
}

fn rol_value(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.get_flag(flags::CARRY) as u8;
    cpu.set_flag(flags::CARRY, value & 0x80 != 0);
    let result = (value << 1) | carry_in;
    cpu.update_zero_negative(result);
    result
}

fn ror_value(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.get_flag(flags::CARRY) as u8;
    cpu.set_flag(flags::CARRY, value & 0x01 != 0);
    let result = (value >> 1) | (carry_in << 7);
    cpu.update_zero_negative(result);
    result
}

pub(super) fn asl(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    let result = asl_value(cpu, value);
    write_operand(cpu, bus, operand, result);
    0
}

pub(super) fn lsr(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    let result = lsr_value(cpu, value);
    write_operand(cpu, bus, operand, result);
    0
}

pub(super) fn rol(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    let result = rol_value(cpu, value);
    write_operand(cpu, bus, operand, result);
    0
}

pub(super) fn ror(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    let result = ror_value(cpu, value);
    write_operand(cpu, bus, operand, result);
    0
}

pub(super) fn slo(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    let result = asl_value(cpu, value);
    write_operand(cpu, bus, operand, result);
    cpu.a |= result;
    cpu.update_zero_negative(cpu.a);
    0
}

pub(super) fn rla(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    let result = rol_value(cpu, value);
    write_operand(cpu, bus, operand, result);
    cpu.a &= result;
    cpu.update_zero_negative(cpu.a);
    0
}

pub(super) fn sre(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    let result = lsr_value(cpu, value);
    write_operand(cpu, bus, operand, result);
    cpu.a ^= result;
    cpu.update_zero_negative(cpu.a);
    0
}

pub(super) fn rra(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    let result = ror_value(cpu, value);
    write_operand(cpu, bus, operand, result);
    adc_value(cpu, result);
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
    fn asl_shifts_high_bit_into_carry() {
        let mut bus = TestBus(Ram::with_zeros());
        bus.write(0x0010, 0b1000_0001);
        let mut cpu = Cpu::new();
        let operand = Operand::Memory {
            address: 0x0010,
            page_crossed: false,
        };
        asl(&mut cpu, &mut bus, operand);
        assert_eq!(bus.read(0x0010), 0b0000_0010);
        assert!(cpu.get_flag(flags::CARRY));
    }

    #[test]
    fn rol_brings_carry_in_to_bit_zero() {
        let mut bus = TestBus(Ram::with_zeros());
        bus.write(0x0010, 0b0100_0000);
        let mut cpu = Cpu::new();
        cpu.set_flag(flags::CARRY, true);
        let operand = Operand::Memory {
            address: 0x0010,
            page_crossed: false,
        };
        rol(&mut cpu, &mut bus, operand);
        assert_eq!(bus.read(0x0010), 0b1000_0001);
        assert!(!cpu.get_flag(flags::CARRY));
    }

    #[test]
    fn slo_shifts_then_ors_into_accumulator() {
        let mut bus = TestBus(Ram::with_zeros());
        bus.write(0x0010, 0b0000_0001);
        let mut cpu = Cpu::new();
        cpu.a = 0b0000_0010;
        let operand = Operand::Memory {
            address: 0x0010,
            page_crossed: false,
        };
        slo(&mut cpu, &mut bus, operand);
        assert_eq!(bus.read(0x0010), 0b0000_0010);
        assert_eq!(cpu.a, 0b0000_0010);
    }
}
