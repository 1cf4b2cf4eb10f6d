// CLC/CLD/CLI/CLV/SEC/SED/SEI status flag clear/set instructions.

use crate::cpu::{flags, Cpu};

pub(super) fn clc(cpu: &mut Cpu) -> u8 {
    cpu.set_flag(flags::CARRY, false);
    0
}

pub(super) fn cld(cpu: &mut Cpu) -> u8 {
    cpu.set_flag(flags::DECIMAL, false);
    0
}

pub(super) fn cli(cpu: &mut Cpu) -> u8 {
    cpu.set_flag(flags::INTERRUPT_DISABLE, false);
    0
}

pub(super) fn clv(cpu: &mut Cpu) -> u8 {
    cpu.set_flag(flags::OVERFLOW, false);
    0
}

pub(super) fn sec(cpu: &mut Cpu) -> u8 {
    cpu.set_flag(flags::CARRY, true);
    0
}

/// Decimal mode is set but never consulted: the NES's 6502 core has the BCD
/// circuitry physically disabled.
pub(super) fn sed(cpu: &mut Cpu) -> u8 {
    cpu.set_flag(flags::DECIMAL, true);
    0
}

pub(super) fn sei(cpu: &mut Cpu) -> u8 {
    cpu.set_flag(flags::INTERRUPT_DISABLE, true);
    0
}
