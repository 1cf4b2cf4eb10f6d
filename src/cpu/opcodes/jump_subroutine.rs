// JMP/JSR/RTS control-flow transfers.

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;

pub(super) fn jmp(cpu: &mut Cpu, _bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    if let Operand::Memory { address, .. } = operand {
        cpu.pc = address;
    }
    0
}

/// JSR pushes the address of the last byte of the JSR instruction itself
/// (PC - 1 at this point, since `resolve` already advanced PC past the
/// operand), not the address of the next instruction.
pub(super) fn jsr(cpu: &mut Cpu, bus: &mut dyn CpuBus, operand: Operand) -> u8 {
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_u16(bus, return_addr);
    if let Operand::Memory { address, .. } = operand {
        cpu.pc = address;
    }
    0
}

pub(super) fn rts(cpu: &mut Cpu, bus: &mut dyn CpuBus) -> u8 {
    let return_addr = cpu.pop_u16(bus);
    cpu.pc = return_addr.wrapping_add(1);
    0
}
