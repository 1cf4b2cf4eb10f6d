// CPU module - 6502 processor implementation

pub mod addressing;
pub mod opcodes;

use crate::bus::CpuBus;

/// Processor Status Flags (P register)
///
/// ```text
/// 7  6  5  4  3  2  1  0
/// N  V  -  B  D  I  Z  C
/// ```
pub mod flags {
    pub const CARRY: u8 = 0b0000_0001;
    pub const ZERO: u8 = 0b0000_0010;
    pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;
    pub const DECIMAL: u8 = 0b0000_1000; // unused on the NES's 6502 core
    pub const BREAK: u8 = 0b0001_0000;
    pub const UNUSED: u8 = 0b0010_0000;
    pub const OVERFLOW: u8 = 0b0100_0000;
    pub const NEGATIVE: u8 = 0b1000_0000;
}

/// Interrupt vector addresses.
pub mod vectors {
    pub const NMI: u16 = 0xFFFA;
    pub const RESET: u16 = 0xFFFC;
    pub const IRQ: u16 = 0xFFFE;
}

/// 6502 CPU state. Carries no reference to the bus it runs against; every
/// memory access is threaded through the `CpuBus` passed into `step`.
pub struct Cpu {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
    pub cycles: u64,
    nmi_pending: bool,
}

impl Cpu {
    pub fn new() -> Self {
        Cpu {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0,
            status: flags::UNUSED | flags::INTERRUPT_DISABLE,
            cycles: 0,
            nmi_pending: false,
        }
    }

    /// Power-on/reset sequence: load PC from the reset vector. Real
    /// hardware decrements SP by 3 without writing (the reset sequence
    /// pretends to push the return address and status but the write-enable
    /// line is held off), and takes 7 cycles.
    pub fn reset(&mut self, bus: &mut dyn CpuBus) {
        self.sp = self.sp.wrapping_sub(3);
        self.status |= flags::INTERRUPT_DISABLE;
        self.pc = bus.read_u16(vectors::RESET);
        self.cycles = 7;
        self.nmi_pending = false;
    }

    #[inline]
    pub fn get_flag(&self, flag: u8) -> bool {
        self.status & flag != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: u8, value: bool) {
        if value {
            self.status |= flag;
        } else {
            self.status &= !flag;
        }
    }

    #[inline]
    pub(crate) fn update_zero_negative(&mut self, value: u8) {
        self.set_flag(flags::ZERO, value == 0);
        self.set_flag(flags::NEGATIVE, value & 0x80 != 0);
    }

    #[inline]
    pub(crate) fn fetch_u8(&mut self, bus: &mut dyn CpuBus) -> u8 {
        let value = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(crate) fn fetch_u16(&mut self, bus: &mut dyn CpuBus) -> u16 {
        let lo = self.fetch_u8(bus) as u16;
        let hi = self.fetch_u8(bus) as u16;
        (hi << 8) | lo
    }

    pub(crate) fn push_u8(&mut self, bus: &mut dyn CpuBus, value: u8) {
        bus.write(0x0100 + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pop_u8(&mut self, bus: &mut dyn CpuBus) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(0x0100 + self.sp as u16)
    }

    pub(crate) fn push_u16(&mut self, bus: &mut dyn CpuBus, value: u16) {
        self.push_u8(bus, (value >> 8) as u8);
        self.push_u8(bus, value as u8);
    }

    pub(crate) fn pop_u16(&mut self, bus: &mut dyn CpuBus) -> u16 {
        let lo = self.pop_u8(bus) as u16;
        let hi = self.pop_u8(bus) as u16;
        (hi << 8) | lo
    }

    /// Latch a non-maskable interrupt; serviced before the next opcode.
    pub fn request_nmi(&mut self) {
        self.nmi_pending = true;
    }

    fn service_interrupt(&mut self, bus: &mut dyn CpuBus, vector: u16, from_brk: bool) {
        self.push_u16(bus, self.pc);
        let mut pushed_status = self.status | flags::UNUSED;
        if from_brk {
            pushed_status |= flags::BREAK;
        } else {
            pushed_status &= !flags::BREAK;
        }
        self.push_u8(bus, pushed_status);
        self.set_flag(flags::INTERRUPT_DISABLE, true);
        self.pc = bus.read_u16(vector);
    }

    /// Execute one instruction, or service a pending interrupt. `irq_line`
    /// is the OR of every maskable interrupt source (APU frame IRQ, DMC
    /// IRQ, mapper IRQ) and is level-triggered, unlike NMI, which latches.
    /// Returns the number of CPU cycles consumed, including any OAM DMA
    /// stall incurred during this step.
    pub fn step(&mut self, bus: &mut dyn CpuBus, irq_line: bool) -> u32 {
        if self.nmi_pending {
            self.nmi_pending = false;
            self.service_interrupt(bus, vectors::NMI, false);
            self.cycles += 7;
            return 7 + bus.take_dma_stall();
        }
        if irq_line && !self.get_flag(flags::INTERRUPT_DISABLE) {
            self.service_interrupt(bus, vectors::IRQ, false);
            self.cycles += 7;
            return 7 + bus.take_dma_stall();
        }

        let opcode = self.fetch_u8(bus);
        let cycles = opcodes::execute(self, bus, opcode);
        self.cycles += cycles as u64;
        cycles as u32 + bus.take_dma_stall()
    }

    /// Render a nestest-format trace line for the instruction at the
    /// current PC, without advancing any CPU state (uses `peek`).
    pub fn trace(&self, bus: &mut dyn CpuBus) -> String {
        let opcode = bus.peek(self.pc);
        let info = opcodes::describe(opcode);
        let mut bytes = vec![opcode];
        for i in 1..info.len {
            bytes.push(bus.peek(self.pc.wrapping_add(i as u16)));
        }
        let hex_bytes: Vec<String> = bytes.iter().map(|b| format!("{b:02X}")).collect();
        format!(
            "{:04X}  {:<9}{:<32}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            self.pc,
            hex_bytes.join(" "),
            info.mnemonic,
            self.a,
            self.x,
            self.y,
            self.status,
            self.sp,
            self.cycles
        )
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
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

    fn bus_with_reset_vector(pc: u16) -> TestBus {
        let mut bus = TestBus(Ram::with_zeros());
        bus.write(vectors::RESET, pc as u8);
        bus.write(vectors::RESET + 1, (pc >> 8) as u8);
        bus
    }

    #[test]
    fn reset_loads_pc_from_vector_and_takes_seven_cycles() {
        let mut bus = bus_with_reset_vector(0xC000);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        assert_eq!(cpu.pc, 0xC000);
        assert_eq!(cpu.cycles, 7);
    }

    #[test]
    fn nmi_pushes_pc_and_status_then_jumps_to_vector() {
        let mut bus = TestBus(Ram::with_zeros());
        bus.write(vectors::NMI, 0x00);
        bus.write(vectors::NMI + 1, 0x80);
        let mut cpu = Cpu::new();
        cpu.pc = 0x1234;
        cpu.sp = 0xFD;
        cpu.request_nmi();
        let cycles = cpu.step(&mut bus, false);
        assert_eq!(cycles, 7);
        assert_eq!(cpu.pc, 0x8000);
        assert_eq!(cpu.sp, 0xFA);
    }

    #[test]
    fn irq_is_ignored_when_interrupt_disable_set() {
        let mut bus = TestBus(Ram::with_zeros());
        bus.write(0x1234, 0xEA); // NOP so the step has somewhere to go
        let mut cpu = Cpu::new();
        cpu.pc = 0x1234;
        cpu.set_flag(flags::INTERRUPT_DISABLE, true);
        let cycles = cpu.step(&mut bus, true);
        assert_eq!(cpu.pc, 0x1235); // executed the NOP, not the IRQ vector
        assert_eq!(cycles, 2);
    }

    #[test]
    fn push_pop_u16_round_trips() {
        let mut bus = TestBus(Ram::with_zeros());
        let mut cpu = Cpu::new();
        cpu.sp = 0xFD;
        cpu.push_u16(&mut bus, 0xBEEF);
        assert_eq!(cpu.pop_u16(&mut bus), 0xBEEF);
        assert_eq!(cpu.sp, 0xFD);
    }
}
