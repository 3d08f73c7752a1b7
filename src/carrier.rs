//! Carrier frequency and duty cycle, and how they map onto a PWM slice.

use crate::{CARRIER_DUTY_CYCLE, CARRIER_FREQUENCY_HZ, Error, Result};

/// `CarrierConfig::duty_cycle` is a fraction of this.
pub const DUTY_CYCLE_DENOMINATOR: u32 = 1 << 16;

// A PWM counter wraps after `top + 1` ticks and `top` is 16 bits.
const MAX_TICKS_PER_PERIOD: u32 = 1 << 16;

/// Frequency and duty cycle of the modulated IR output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CarrierConfig {
    pub frequency_hz: u32,
    /// Numerator over [`DUTY_CYCLE_DENOMINATOR`].
    pub duty_cycle: u16,
}

impl CarrierConfig {
    /// 38 kHz, dimmed to 2^7 / 2^16.
    pub const IR_38KHZ: Self = Self {
        frequency_hz: CARRIER_FREQUENCY_HZ,
        duty_cycle: CARRIER_DUTY_CYCLE,
    };

    /// Picks the smallest integer clock divider that lets one carrier period fit in a 16-bit
    /// counter.
    ///
    /// # Errors
    /// Returns [`Error::CarrierFrequencyUnreachable`] if the frequency is zero, needs a divider
    /// above 255, or leaves fewer than two counter ticks per period.
    pub fn pwm_settings(&self, clk_sys_hz: u32) -> Result<PwmSettings> {
        self.try_pwm_settings(clk_sys_hz)
            .ok_or(Error::CarrierFrequencyUnreachable(self.frequency_hz))
    }

    fn try_pwm_settings(&self, clk_sys_hz: u32) -> Option<PwmSettings> {
        let undivided_ticks = clk_sys_hz.checked_div(self.frequency_hz)?;
        let divider = u8::try_from(undivided_ticks.div_ceil(MAX_TICKS_PER_PERIOD).max(1)).ok()?;

        let ticks = clk_sys_hz.checked_div(self.frequency_hz.checked_mul(u32::from(divider))?)?;
        // One tick per period cannot toggle the output.
        let top = u16::try_from(ticks.checked_sub(1)?).ok().filter(|&top| top > 0)?;

        Some(PwmSettings { divider, top })
    }

    /// Scales the duty fraction to a channel whose full-on value is `max_duty`.
    ///
    /// Never rounds a nonzero duty down to zero: a dimmed carrier must still toggle.
    #[must_use]
    pub fn mark_duty(&self, max_duty: u16) -> u16 {
        let scaled = u32::from(max_duty)
            .saturating_mul(u32::from(self.duty_cycle))
            .checked_div(DUTY_CYCLE_DENOMINATOR)
            .unwrap_or(0);
        let scaled = u16::try_from(scaled).unwrap_or(max_duty);
        if self.duty_cycle > 0 && max_duty > 0 {
            scaled.max(1)
        } else {
            scaled
        }
    }
}

impl Default for CarrierConfig {
    fn default() -> Self {
        Self::IR_38KHZ
    }
}

/// Integer divider and counter wrap value for a PWM slice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmSettings {
    pub divider: u8,
    pub top: u16,
}

impl PwmSettings {
    /// The carrier frequency these settings actually produce.
    #[must_use]
    pub fn frequency_hz(&self, clk_sys_hz: u32) -> u32 {
        let ticks = u32::from(self.top).saturating_add(1);
        ticks
            .checked_mul(u32::from(self.divider))
            .and_then(|divided| clk_sys_hz.checked_div(divided))
            .unwrap_or(0)
    }
}
