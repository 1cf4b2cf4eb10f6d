// BCC/BCS/BEQ/BMI/BNE/BPL/BVC/BVS conditional branches.
//
// A branch not taken costs just the base 2 cycles; taken costs 3, plus a
// 4th if the branch target lands on a different page than PC already
// pointed at (the 6PC/PCH mismatch classic 6502 branch penalty).

use crate::cpu::addressing::Operand;
use crate::cpu::{flags, Cpu};

fn branch(cpu: &mut Cpu, operand: Operand, taken: bool) -> u8 {
    if !taken {
        return 0;
    }
    match operand {
        Operand::Memory {
            address,
            page_crossed,
        } => {
            cpu.pc = address;
            if page_crossed {
                2
            } else {
                1
            }
        }
        _ => 0,
    }
}

pub(super) fn bcc(cpu: &mut Cpu, operand: Operand) -> u8 {
    branch(cpu, operand, !cpu.get_flag(flags::CARRY))
}

pub(super) fn bcs(cpu: &mut Cpu, operand: Operand) -> u8 {
    branch(cpu, operand, cpu.get_flag(flags::CARRY))
}

pub(super) fn beq(cpu: &mut Cpu, operand: Operand) -> u8 {
    branch(cpu, operand, cpu.get_flag(flags::ZERO))
}

pub(super) fn bmi(cpu: &mut Cpu, operand: Operand) -> u8 {
    branch(cpu, operand, cpu.get_flag(flags::NEGATIVE))
}

pub(super) fn bne(cpu: &mut Cpu, operand: Operand) -> u8 {
    branch(cpu, operand, !cpu.get_flag(flags::ZERO))
}

pub(super) fn bpl(cpu: &mut Cpu, operand: Operand) -> u8 {
    branch(cpu, operand, !cpu.get_flag(flags::NEGATIVE))
}

pub(super) fn bvc(cpu: &mut Cpu, operand: Operand) -> u8 {
    branch(cpu, operand, !cpu.get_flag(flags::OVERFLOW))
}

pub(super) fn bvs(cpu: &mut Cpu, operand: Operand) -> u8 {
    branch(cpu, operand, cpu.get_flag(flags::OVERFLOW))
}
