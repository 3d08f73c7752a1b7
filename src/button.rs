use embedded_hal::digital::{InputPin, PinState};

use crate::{Error, Result};

/// A push button read as a plain level.
///
/// No debouncing and no edge detection: every call to [`Button::is_pressed`] is one fresh
/// sample of the pin.
pub struct Button<P> {
    pin: P,
    active: PinState,
}

impl<P: InputPin> Button<P> {
    /// `active` is the pin level that means "pressed". A button wired to 3V3 with a pull-down
    /// is active [`PinState::High`].
    #[must_use]
    pub const fn new(pin: P, active: PinState) -> Self {
        Self { pin, active }
    }

    /// Sample the button once.
    ///
    /// # Errors
    /// Returns [`Error::CannotReadInputState`] if the pin cannot be read.
    pub fn is_pressed(&mut self) -> Result<bool> {
        let is_high = self
            .pin
            .is_high()
            .map_err(|_| Error::CannotReadInputState)?;
        Ok(is_high == (self.active == PinState::High))
    }
}
