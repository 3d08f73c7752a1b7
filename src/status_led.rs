use embedded_hal::digital::{OutputPin, PinState};

use crate::{Error, Result};

/// An indicator LED that mirrors "currently transmitting".
pub struct StatusLed<P> {
    pin: P,
    on_state: PinState,
    is_on: bool,
}

impl<P: OutputPin> StatusLed<P> {
    /// `on_state` is the pin level that lights the LED. The LED starts off.
    ///
    /// # Errors
    /// Returns [`Error::CannotSetOutputState`] if the pin cannot be driven.
    pub fn new(pin: P, on_state: PinState) -> Result<Self> {
        let mut status_led = Self {
            pin,
            on_state,
            is_on: false,
        };
        status_led.off()?;
        Ok(status_led)
    }

    /// # Errors
    /// Returns [`Error::CannotSetOutputState`] if the pin cannot be driven.
    pub fn set(&mut self, on: bool) -> Result<()> {
        let level = if on { self.on_state } else { !self.on_state };
        self.pin
            .set_state(level)
            .map_err(|_| Error::CannotSetOutputState)?;
        self.is_on = on;
        Ok(())
    }

    /// # Errors
    /// Returns [`Error::CannotSetOutputState`] if the pin cannot be driven.
    pub fn on(&mut self) -> Result<()> {
        self.set(true)
    }

    /// # Errors
    /// Returns [`Error::CannotSetOutputState`] if the pin cannot be driven.
    pub fn off(&mut self) -> Result<()> {
        self.set(false)
    }

    /// The last state successfully written.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.is_on
    }
}
