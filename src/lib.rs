//! Button-triggered infrared burst transmitter.
//!
//! While the button reads pressed, [`TransmitLoop`] lights a status LED and sends a fixed
//! mark/space [`PulsePattern`] on a 38 kHz carrier a fixed number of times, then rests for half
//! a second. The loop is generic over `embedded-hal` traits; [`Hardware`] (behind the `pico1` /
//! `pico2` features) supplies the Pico pins.
#![no_std]

mod button;
mod carrier;
mod error;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod hardware;
mod never;
mod pulse_out;
mod pulse_pattern;
mod shared_constants;
mod status_led;
mod transmit_config;
mod transmit_loop;

pub use button::Button;
pub use carrier::{CarrierConfig, DUTY_CYCLE_DENOMINATOR, PwmSettings};
pub use error::{Error, Result};
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use hardware::{Hardware, IrLed};
pub use never::Never;
pub use pulse_out::{CarrierPulseOut, PulseSink};
pub use pulse_pattern::{Pulse, PulsePattern};
pub use shared_constants::*;
pub use status_led::StatusLed;
pub use transmit_config::TransmitConfig;
pub use transmit_loop::{Iteration, TransmitLoop, TransmitState};
