// CMP/CPX/CPY and the unofficial DCP combo.

use super::{page_cross_bonus, read_operand, write_operand};
use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::{flags, Cpu};

/// Shared compare core: `register - value`, setting C/Z/N without storing
/// the result anywhere (used by CMP/CPX/CPY/DCP alike).
fn compare(cpu: &mut Cpu, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.set_flag(flags::CARRY, register >= value);
    cpu.update_zero_negative(result);
}

pub(super) fn cmp(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    compare(cpu, cpu.a, value);
    page_cross_bonus(operand)
}

pub(super) fn cpx(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    compare(cpu, cpu.x, value);
    0
}

pub(super) fn cpy(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand);
    compare(cpu, cpu.y, value);
    0
}

/// Unofficial: decrement memory, then CMP against the accumulator.
pub(super) fn dcp(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let value = read_operand(cpu, bus, operand).wrapping_sub(1);
    write_operand(cpu, bus, operand, value);
    compare(cpu, cpu.a, value);
    0
}
