// APU - composes the five sound channels and the frame sequencer that
// drives their envelope/sweep/length/linear counters, and mixes their
// outputs into a single sample stream.
//
// Registers, as seen by the CPU:
//
// ```text
// $4000-$4003: Pulse 1
// $4004-$4007: Pulse 2
// $4008-$400B: Triangle
// $400C-$400F: Noise
// $4010-$4013: DMC
// $4015:       Status (write: channel enable flags, read: channel active + IRQ flags)
// $4017:       Frame counter mode / IRQ inhibit (shared CPU address with controller 2 read)
// ```

pub mod channels;
pub mod components;
mod constants;

use channels::{DmcChannel, NoiseChannel, PulseChannel, TriangleChannel};
use components::{FrameCounter, FrameEvent};

/// Approximate CPU cycles the DMC steals from the CPU to refill its sample
/// buffer. Real hardware varies between 2 and 4 depending on what bus cycle
/// it lands on; 4 is the commonly used constant-cost approximation.
const DMC_SAMPLE_STALL_CYCLES: u32 = 4;

/// The 5-channel sound generator. Owns no reference to CPU memory: when the
/// DMC channel needs to refill its sample buffer, `step` surfaces the
/// address to read via `take_dmc_sample_request`, and the caller feeds the
/// byte back with `provide_dmc_sample`.
#[derive(Debug, Clone)]
pub struct Apu {
    pulse1: PulseChannel,
    pulse2: PulseChannel,
    triangle: TriangleChannel,
    noise: NoiseChannel,
    dmc: DmcChannel,
    frame_counter: FrameCounter,
    /// Alternates every CPU cycle; pulse/noise/DMC timers clock on the low
    /// half of this divider (once per APU cycle = 2 CPU cycles).
    half_cycle: bool,
    dmc_stall: u32,
    pending_dmc_read: Option<u16>,
}

impl Apu {
    pub fn new() -> Self {
        Self {
            pulse1: PulseChannel::new(1),
            pulse2: PulseChannel::new(2),
            triangle: TriangleChannel::new(),
            noise: NoiseChannel::new(),
            dmc: DmcChannel::new(),
            frame_counter: FrameCounter::new(),
            half_cycle: false,
            dmc_stall: 0,
            pending_dmc_read: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Apu::new();
    }

    /// Advance all channels and the frame sequencer by one CPU cycle.
    pub fn step(&mut self) {
        self.triangle.clock_timer();

        self.half_cycle = !self.half_cycle;
        if self.half_cycle {
            self.pulse1.clock_timer();
            self.pulse2.clock_timer();
            self.noise.clock_timer();
            self.dmc.clock_timer();
        }

        for event in self.frame_counter.clock() {
            self.apply_frame_event(event);
        }

        if self.pending_dmc_read.is_none() {
            if let Some(addr) = self.dmc.needs_sample_read() {
                self.pending_dmc_read = Some(addr);
                self.dmc_stall += DMC_SAMPLE_STALL_CYCLES;
            }
        }
    }

    fn apply_frame_event(&mut self, event: FrameEvent) {
        match event {
            FrameEvent::QuarterFrame => {
                self.pulse1.clock_envelope();
                self.pulse2.clock_envelope();
                self.noise.clock_envelope();
                self.triangle.clock_linear_counter();
            }
            FrameEvent::HalfFrame => {
                self.pulse1.clock_envelope();
                self.pulse2.clock_envelope();
                self.noise.clock_envelope();
                self.triangle.clock_linear_counter();
                self.pulse1.clock_length_counter();
                self.pulse2.clock_length_counter();
                self.triangle.clock_length_counter();
                self.noise.clock_length_counter();
                self.pulse1.clock_sweep();
                self.pulse2.clock_sweep();
            }
            FrameEvent::SetIrq => {}
        }
    }

    /// Address the DMC needs a sample byte read from, if any. The caller
    /// (the orchestrator, which owns CPU-bus access) performs the read and
    /// feeds the byte back with [`Apu::provide_dmc_sample`].
    pub fn take_dmc_sample_request(&mut self) -> Option<u16> {
        self.pending_dmc_read.take()
    }

    pub fn provide_dmc_sample(&mut self, byte: u8) {
        self.dmc.load_sample_byte(byte);
    }

    /// CPU cycles stolen by DMC sample reads since the last call.
    pub fn take_cpu_stall(&mut self) -> u32 {
        std::mem::take(&mut self.dmc_stall)
    }

    /// Raw pulse 1 output (0-15), for callers doing their own mixing.
    pub fn pulse1_output(&self) -> u8 {
        self.pulse1.output()
    }

    /// Raw pulse 2 output (0-15), for callers doing their own mixing.
    pub fn pulse2_output(&self) -> u8 {
        self.pulse2.output()
    }

    /// Raw triangle output (0-15), for callers doing their own mixing.
    pub fn triangle_output(&self) -> u8 {
        self.triangle.output()
    }

    /// Raw noise output (0-15), for callers doing their own mixing.
    pub fn noise_output(&self) -> u8 {
        self.noise.output()
    }

    /// Raw DMC output (0-127), for callers doing their own mixing.
    pub fn dmc_output(&self) -> u8 {
        self.dmc.output()
    }

    /// Non-linear mix of the five channels' current outputs, per the NES
    /// APU's analog mixer approximation (nesdev "APU Mixer"). Equivalent to
    /// feeding the five raw channel outputs through [`crate::audio::Mixer`].
    pub fn output(&self) -> f32 {
        let p1 = self.pulse1.output() as f32;
        let p2 = self.pulse2.output() as f32;
        let t = self.triangle.output() as f32;
        let n = self.noise.output() as f32;
        let d = self.dmc.output() as f32;

        let pulse_out = if p1 + p2 > 0.0 {
            95.88 / (8128.0 / (p1 + p2) + 100.0)
        } else {
            0.0
        };
        let tnd_denom = t / 8227.0 + n / 12241.0 + d / 22638.0;
        let tnd_out = if tnd_denom > 0.0 {
            159.79 / (1.0 / tnd_denom + 100.0)
        } else {
            0.0
        };
        pulse_out + tnd_out
    }

    pub fn irq_pending(&self) -> bool {
        self.frame_counter.irq_pending() || self.dmc.irq_pending()
    }

    pub fn read_register(&mut self, addr: u16) -> u8 {
        match addr {
            0x4015 => self.read_status(),
            _ => 0,
        }
    }

    pub fn write_register(&mut self, addr: u16, data: u8) {
        match addr {
            0x4000 => self.pulse1.write_register_0(data),
            0x4001 => self.pulse1.write_register_1(data),
            0x4002 => self.pulse1.write_register_2(data),
            0x4003 => self.pulse1.write_register_3(data),
            0x4004 => self.pulse2.write_register_0(data),
            0x4005 => self.pulse2.write_register_1(data),
            0x4006 => self.pulse2.write_register_2(data),
            0x4007 => self.pulse2.write_register_3(data),
            0x4008 => self.triangle.write_register_0(data),
            0x4009 => self.triangle.write_register_1(data),
            0x400A => self.triangle.write_register_2(data),
            0x400B => self.triangle.write_register_3(data),
            0x400C => self.noise.write_register_0(data),
            0x400D => self.noise.write_register_1(data),
            0x400E => self.noise.write_register_2(data),
            0x400F => self.noise.write_register_3(data),
            0x4010 => self.dmc.write_register_0(data),
            0x4011 => self.dmc.write_register_1(data),
            0x4012 => self.dmc.write_register_2(data),
            0x4013 => self.dmc.write_register_3(data),
            0x4015 => self.write_status(data),
            0x4017 => {
                for event in self.frame_counter.write_control(data) {
                    self.apply_frame_event(event);
                }
            }
            _ => {}
        }
    }

    fn read_status(&mut self) -> u8 {
        let status = (self.pulse1.is_active() as u8)
            | (self.pulse2.is_active() as u8) << 1
            | (self.triangle.is_active() as u8) << 2
            | (self.noise.is_active() as u8) << 3
            | (self.dmc.is_active() as u8) << 4
            | (self.frame_counter.irq_pending() as u8) << 6
            | (self.dmc.irq_pending() as u8) << 7;
        self.frame_counter.clear_irq();
        status
    }

    fn write_status(&mut self, data: u8) {
        self.pulse1.set_enabled(data & 0x01 != 0);
        self.pulse2.set_enabled(data & 0x02 != 0);
        self.triangle.set_enabled(data & 0x04 != 0);
        self.noise.set_enabled(data & 0x08 != 0);
        self.dmc.set_enabled(data & 0x10 != 0);
        // Writing $4015, regardless of value, clears the DMC IRQ flag.
        self.dmc.irq_flag = false;
    }
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reflects_length_counter_activity() {
        let mut apu = Apu::new();
        apu.write_register(0x4015, 0x01);
        apu.write_register(0x4003, 0x08); // load length counter for pulse 1
        assert_eq!(apu.read_register(0x4015) & 0x01, 0x01);
    }

    #[test]
    fn disabling_channel_clears_length_counter() {
        let mut apu = Apu::new();
        apu.write_register(0x4015, 0x01);
        apu.write_register(0x4003, 0x08);
        assert_eq!(apu.read_register(0x4015) & 0x01, 0x01);
        apu.write_register(0x4015, 0x00);
        assert_eq!(apu.read_register(0x4015) & 0x01, 0x00);
    }

    #[test]
    fn frame_irq_sets_after_full_four_step_sequence() {
        let mut apu = Apu::new();
        for _ in 0..29830 {
            apu.step();
        }
        assert!(apu.irq_pending());
        apu.read_register(0x4015);
        assert!(!apu.irq_pending());
    }

    #[test]
    fn five_step_mode_suppresses_frame_irq() {
        let mut apu = Apu::new();
        apu.write_register(0x4017, 0x80);
        for _ in 0..40000 {
            apu.step();
        }
        assert!(!apu.irq_pending());
    }

    #[test]
    fn dmc_requests_sample_and_consumes_stall() {
        let mut apu = Apu::new();
        apu.write_register(0x4012, 0x00); // sample address $C000
        apu.write_register(0x4013, 0x00); // sample length 1 byte
        apu.write_register(0x4015, 0x10); // enable DMC, starts playback
        let mut request = None;
        for _ in 0..16 {
            apu.step();
            if let Some(addr) = apu.take_dmc_sample_request() {
                request = Some(addr);
                break;
            }
        }
        assert_eq!(request, Some(0xC000));
        apu.provide_dmc_sample(0xFF);
        assert!(apu.take_cpu_stall() > 0);
    }

    #[test]
    fn mixer_is_silent_with_all_channels_disabled() {
        let apu = Apu::new();
        assert_eq!(apu.output(), 0.0);
    }
}
