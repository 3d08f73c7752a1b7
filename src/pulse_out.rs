//! Blocking mark/space emission on a PWM carrier.

use embedded_hal::{delay::DelayNs, pwm::SetDutyCycle};

use crate::{CarrierConfig, Error, Pulse, PulsePattern, Result};

/// Something that can play a [`PulsePattern`].
///
/// `send` returns only after the last interval has been emitted. Timing is microsecond
/// sensitive, so implementations block rather than yield.
pub trait PulseSink {
    /// Play `pattern` once.
    ///
    /// # Errors
    /// Returns an error if the underlying output cannot be driven.
    fn send(&mut self, pattern: &PulsePattern<'_>) -> Result<()>;
}

impl<T: PulseSink + ?Sized> PulseSink for &mut T {
    fn send(&mut self, pattern: &PulsePattern<'_>) -> Result<()> {
        (**self).send(pattern)
    }
}

/// A PWM channel already running at the carrier frequency, gated on for marks and off for
/// spaces.
///
/// The carrier frequency itself belongs to the channel (see
/// [`CarrierConfig::pwm_settings`]); this type only switches the duty cycle and keeps time.
pub struct CarrierPulseOut<C, D> {
    channel: C,
    delay: D,
    mark_duty: u16,
    carrier_on: bool,
}

impl<C: SetDutyCycle, D: DelayNs> CarrierPulseOut<C, D> {
    /// Takes ownership of `channel` and drives it fully off.
    ///
    /// # Errors
    /// Returns [`Error::CannotSetDutyCycle`] if the channel rejects the initial off state.
    pub fn new(mut channel: C, delay: D, carrier: CarrierConfig) -> Result<Self> {
        let mark_duty = carrier.mark_duty(channel.max_duty_cycle());
        channel
            .set_duty_cycle_fully_off()
            .map_err(|_| Error::CannotSetDutyCycle)?;
        Ok(Self {
            channel,
            delay,
            mark_duty,
            carrier_on: false,
        })
    }

    /// Duty value written to the channel during a mark.
    #[must_use]
    pub const fn mark_duty(&self) -> u16 {
        self.mark_duty
    }

    fn carrier_on(&mut self) -> Result<()> {
        self.channel
            .set_duty_cycle(self.mark_duty)
            .map_err(|_| Error::CannotSetDutyCycle)?;
        self.carrier_on = true;
        Ok(())
    }

    fn carrier_off(&mut self) -> Result<()> {
        self.channel
            .set_duty_cycle_fully_off()
            .map_err(|_| Error::CannotSetDutyCycle)?;
        self.carrier_on = false;
        Ok(())
    }
}

impl<C: SetDutyCycle, D: DelayNs> PulseSink for CarrierPulseOut<C, D> {
    fn send(&mut self, pattern: &PulsePattern<'_>) -> Result<()> {
        for pulse in pattern.pulses() {
            match pulse {
                Pulse::Mark(_) => self.carrier_on()?,
                Pulse::Space(_) => self.carrier_off()?,
            }
            self.delay.delay_us(u32::from(pulse.duration_us()));
        }
        if self.carrier_on {
            self.carrier_off()?;
        }
        Ok(())
    }
}
