//! The button-to-IR control loop.
//!
//! Each iteration samples the button once. A pressed sample lights the status LED, sends the
//! burst pattern `burst_count` times, turns the LED off, and then sleeps for the cooldown before
//! the next sample. An unpressed sample does nothing (or sleeps `idle_poll`, if set).

#[cfg(feature = "defmt")]
use defmt::{debug, info};
use embassy_time::Duration;
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::{BURST_PATTERN, Button, Never, PulseSink, Result, StatusLed, TransmitConfig};

/// Where the loop is in its two-state cycle.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmitState {
    /// Waiting for a pressed sample.
    #[default]
    Idle,
    /// From the pressed sample until the cooldown after the burst has elapsed.
    Transmitting,
}

/// What one call to [`TransmitLoop::step`] did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Iteration {
    /// The button was not pressed.
    Idle,
    /// The button was pressed and a full burst was sent.
    Burst { transmissions: u16 },
}

/// Owns the button, status LED, pulse output and delay for the lifetime of the firmware.
pub struct TransmitLoop<B, L, S, D> {
    button: Button<B>,
    status_led: StatusLed<L>,
    pulse_out: S,
    delay: D,
    config: TransmitConfig,
    state: TransmitState,
}

impl<B, L, S, D> TransmitLoop<B, L, S, D>
where
    B: InputPin,
    L: OutputPin,
    S: PulseSink,
    D: DelayNs,
{
    #[must_use]
    pub const fn new(
        button: Button<B>,
        status_led: StatusLed<L>,
        pulse_out: S,
        delay: D,
        config: TransmitConfig,
    ) -> Self {
        Self {
            button,
            status_led,
            pulse_out,
            delay,
            config,
            state: TransmitState::Idle,
        }
    }

    /// `step` takes `&mut self` and always finishes back in [`TransmitState::Idle`], so
    /// [`TransmitState::Transmitting`] is only observable after a `step` that returned an error.
    #[must_use]
    pub const fn state(&self) -> TransmitState {
        self.state
    }

    #[must_use]
    pub const fn config(&self) -> &TransmitConfig {
        &self.config
    }

    /// Run forever.
    ///
    /// # Errors
    /// Returns the first pin or pulse-output error. Otherwise never returns.
    pub fn run(&mut self) -> Result<Never> {
        #[cfg(feature = "defmt")]
        info!("IR transmit loop started: {}", self.config);
        loop {
            self.step()?;
        }
    }

    /// Sample the button once and act on it.
    ///
    /// # Errors
    /// Returns an error if the button cannot be read, the status LED cannot be driven, or the
    /// pulse output fails. The loop is left in whatever state it had reached.
    pub fn step(&mut self) -> Result<Iteration> {
        if !self.button.is_pressed()? {
            if let Some(idle_poll) = self.config.idle_poll {
                self.sleep(idle_poll);
            }
            return Ok(Iteration::Idle);
        }

        self.state = TransmitState::Transmitting;
        let transmissions = self.burst()?;
        self.sleep(self.config.cooldown);
        self.state = TransmitState::Idle;

        Ok(Iteration::Burst { transmissions })
    }

    fn burst(&mut self) -> Result<u16> {
        #[cfg(feature = "defmt")]
        info!("IR burst: {} x {}", self.config.burst_count, BURST_PATTERN);
        self.status_led.on()?;
        let sent = self.send_burst();
        // The LED goes off even when the burst is cut short.
        let led_off = self.status_led.off();
        sent?;
        led_off?;
        #[cfg(feature = "defmt")]
        debug!("IR burst done; cooling down for {}", self.config.cooldown);
        Ok(self.config.burst_count)
    }

    fn send_burst(&mut self) -> Result<()> {
        for _ in 0..self.config.burst_count {
            self.pulse_out.send(&BURST_PATTERN)?;
        }
        Ok(())
    }

    // `delay_us` takes a u32, so anything past ~71 minutes is waited out in chunks.
    fn sleep(&mut self, duration: Duration) {
        let mut remaining_us = duration.as_micros();
        while remaining_us > 0 {
            let chunk_us = u32::try_from(remaining_us).unwrap_or(u32::MAX);
            self.delay.delay_us(chunk_us);
            remaining_us = remaining_us.saturating_sub(u64::from(chunk_us));
        }
    }
}
