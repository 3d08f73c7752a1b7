//! Simulated hardware for host tests: a clock that only moves when something delays, a button
//! that replays a script of levels, an LED that remembers every change, and pulse sinks that
//! record instead of emitting.
#![allow(dead_code, reason = "Each test binary uses a different subset")]

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    convert::Infallible,
    rc::Rc,
};

use embedded_hal::{
    delay::DelayNs,
    digital::{self, ErrorType, InputPin, OutputPin, PinState},
    pwm::{self, SetDutyCycle},
};
use ir_blaster::{
    Button, Error, PulsePattern, PulseSink, Result, StatusLed, TransmitConfig, TransmitLoop,
};

pub const NANOS_PER_MICRO: u64 = 1_000;

/// Simulated time in nanoseconds, shared by every clone.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    now_ns: Rc<Cell<u64>>,
}

impl SimClock {
    pub fn now_us(&self) -> u64 {
        self.now_ns.get() / NANOS_PER_MICRO
    }

    pub fn advance_us(&self, micros: u64) {
        self.now_ns.set(self.now_ns.get() + micros * NANOS_PER_MICRO);
    }
}

impl DelayNs for SimClock {
    fn delay_ns(&mut self, ns: u32) {
        self.now_ns.set(self.now_ns.get() + u64::from(ns));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakePinError {
    ScriptExhausted,
    Broken,
}

impl digital::Error for FakePinError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

impl pwm::Error for FakePinError {
    fn kind(&self) -> pwm::ErrorKind {
        pwm::ErrorKind::Other
    }
}

/// Replays one level per read, then fails with `ScriptExhausted` so `run()` terminates.
pub struct ScriptedButton {
    levels: VecDeque<bool>,
    clock: SimClock,
    sample_times_us: Rc<RefCell<Vec<u64>>>,
}

impl ErrorType for ScriptedButton {
    type Error = FakePinError;
}

impl InputPin for ScriptedButton {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        let level = self
            .levels
            .pop_front()
            .ok_or(FakePinError::ScriptExhausted)?;
        self.sample_times_us.borrow_mut().push(self.clock.now_us());
        Ok(level)
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        self.is_high().map(|level| !level)
    }
}

/// Active-high LED that logs `(time_us, lit)` on every write.
pub struct FakeLed {
    lit: Rc<Cell<bool>>,
    clock: SimClock,
    changes: Rc<RefCell<Vec<(u64, bool)>>>,
}

impl ErrorType for FakeLed {
    type Error = Infallible;
}

impl OutputPin for FakeLed {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}

impl FakeLed {
    fn write(&self, lit: bool) {
        self.lit.set(lit);
        self.changes.borrow_mut().push((self.clock.now_us(), lit));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    pub durations_us: Vec<u16>,
    pub led_lit: bool,
    pub start_us: u64,
    pub end_us: u64,
}

/// Records every pattern and advances the clock by its length, as real emission would.
pub struct RecordingSink {
    clock: SimClock,
    led_lit: Rc<Cell<bool>>,
    transmissions: Rc<RefCell<Vec<Transmission>>>,
    fail_after: Option<usize>,
}

impl PulseSink for RecordingSink {
    fn send(&mut self, pattern: &PulsePattern<'_>) -> Result<()> {
        let mut transmissions = self.transmissions.borrow_mut();
        if self.fail_after == Some(transmissions.len()) {
            return Err(Error::CannotSetDutyCycle);
        }
        let start_us = self.clock.now_us();
        self.clock.advance_us(pattern.total_duration().as_micros());
        transmissions.push(Transmission {
            durations_us: pattern.as_slice().to_vec(),
            led_lit: self.led_lit.get(),
            start_us,
            end_us: self.clock.now_us(),
        });
        Ok(())
    }
}

/// Handles for inspecting a rig after the loop has run.
#[derive(Clone)]
pub struct Probe {
    pub clock: SimClock,
    pub led_lit: Rc<Cell<bool>>,
    pub led_changes: Rc<RefCell<Vec<(u64, bool)>>>,
    pub sample_times_us: Rc<RefCell<Vec<u64>>>,
    pub transmissions: Rc<RefCell<Vec<Transmission>>>,
}

impl Probe {
    pub fn transmission_count(&self) -> usize {
        self.transmissions.borrow().len()
    }

    pub fn sample_times_us(&self) -> Vec<u64> {
        self.sample_times_us.borrow().clone()
    }

    pub fn led_changes(&self) -> Vec<(u64, bool)> {
        self.led_changes.borrow().clone()
    }

    pub fn transmissions(&self) -> Vec<Transmission> {
        self.transmissions.borrow().clone()
    }
}

pub type Rig = TransmitLoop<ScriptedButton, FakeLed, RecordingSink, SimClock>;

/// A loop whose button replays `levels` (true = pressed).
pub fn rig(levels: &[bool], config: TransmitConfig) -> (Rig, Probe) {
    rig_with_failing_sink(levels, config, None)
}

/// Like [`rig`], but the sink errors on send number `fail_after` (zero-based).
pub fn rig_with_failing_sink(
    levels: &[bool],
    config: TransmitConfig,
    fail_after: Option<usize>,
) -> (Rig, Probe) {
    let probe = Probe {
        clock: SimClock::default(),
        led_lit: Rc::new(Cell::new(false)),
        led_changes: Rc::new(RefCell::new(Vec::new())),
        sample_times_us: Rc::new(RefCell::new(Vec::new())),
        transmissions: Rc::new(RefCell::new(Vec::new())),
    };

    let button = ScriptedButton {
        levels: levels.iter().copied().collect(),
        clock: probe.clock.clone(),
        sample_times_us: Rc::clone(&probe.sample_times_us),
    };
    let led = FakeLed {
        lit: Rc::clone(&probe.led_lit),
        clock: probe.clock.clone(),
        changes: Rc::clone(&probe.led_changes),
    };
    let sink = RecordingSink {
        clock: probe.clock.clone(),
        led_lit: Rc::clone(&probe.led_lit),
        transmissions: Rc::clone(&probe.transmissions),
        fail_after,
    };

    let transmit_loop = TransmitLoop::new(
        Button::new(button, PinState::High),
        StatusLed::new(led, PinState::High).expect("fake LED cannot fail"),
        sink,
        probe.clock.clone(),
        config,
    );
    (transmit_loop, probe)
}

/// Records `(time_us, duty)` for every write to a PWM channel.
pub struct FakeChannel {
    max_duty: u16,
    clock: SimClock,
    writes: Rc<RefCell<Vec<(u64, u16)>>>,
    broken: bool,
}

impl FakeChannel {
    pub fn new(max_duty: u16, clock: SimClock) -> (Self, Rc<RefCell<Vec<(u64, u16)>>>) {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let channel = Self {
            max_duty,
            clock,
            writes: Rc::clone(&writes),
            broken: false,
        };
        (channel, writes)
    }

    pub fn broken(max_duty: u16, clock: SimClock) -> Self {
        let (mut channel, _) = Self::new(max_duty, clock);
        channel.broken = true;
        channel
    }
}

impl pwm::ErrorType for FakeChannel {
    type Error = FakePinError;
}

impl SetDutyCycle for FakeChannel {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> core::result::Result<(), Self::Error> {
        if self.broken {
            return Err(FakePinError::Broken);
        }
        assert!(duty <= self.max_duty, "duty {duty} above max {}", self.max_duty);
        self.writes.borrow_mut().push((self.clock.now_us(), duty));
        Ok(())
    }
}
